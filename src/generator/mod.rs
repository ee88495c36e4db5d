//! Core UUID generator implementation
//!
//! Split into modules for testability:
//! - `clock_sequence` - 14-bit same-tick disambiguator state machine
//! - `time` - Gregorian-epoch tick conversion and clock reads
//! - `wait` - Retry sleep and backoff strategies
//! - `generate` - UUID generation logic

mod clock_sequence;
mod generate;
pub(crate) mod time;
mod wait;

use std::sync::{Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GeneratorConfig;
use crate::repository::UuidRepository;

use clock_sequence::ClockSequence;

/// Mint-time state behind the generator's mutex.
///
/// Clock-sequence selection depends on comparing against the previous
/// attempt's recorded timestamp, so everything here must be read and
/// advanced under one lock acquisition per attempt.
#[derive(Debug)]
struct GeneratorState {
    rng: StdRng,
    clock_seq: Option<ClockSequence>,
    last_node_id: Option<u64>,
    last_timestamp: Option<i64>,
}

/// Time-based (version 1) UUID generator.
///
/// Owns its clock sequence and its cached `(node id, last timestamp)` pair;
/// independent generators never share state. The node id is resolved from
/// the repository on the first call (synthesized and saved if absent) and
/// cached for the generator's lifetime.
///
/// `generate` takes `&self`; concurrent callers are serialized internally,
/// so a generator can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct UuidGenerator<R: UuidRepository> {
    repository: R,
    config: GeneratorConfig,
    state: Mutex<GeneratorState>,
}

impl<R: UuidRepository> UuidGenerator<R> {
    /// Create with default configuration
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, GeneratorConfig::default())
    }

    /// Create with custom retry configuration
    pub fn with_config(repository: R, config: GeneratorConfig) -> Self {
        Self::with_rng(repository, config, StdRng::from_entropy())
    }

    /// Create with a caller-supplied random source, used for clock-sequence
    /// randomization and node-id synthesis
    pub fn with_rng(repository: R, config: GeneratorConfig, rng: StdRng) -> Self {
        Self {
            repository,
            config,
            state: Mutex::new(GeneratorState {
                rng,
                clock_seq: None,
                last_node_id: None,
                last_timestamp: None,
            }),
        }
    }

    /// Active retry configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The node identifier stamped into this generator's UUIDs, once resolved
    /// by the first successful `generate` call
    pub fn node_id(&self) -> Option<u64> {
        self.lock_state().last_node_id
    }

    fn lock_state(&self) -> MutexGuard<'_, GeneratorState> {
        self.state.lock().expect("generator state lock poisoned")
    }
}
