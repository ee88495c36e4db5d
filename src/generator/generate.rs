//! UUID generation logic
//!
//! One mutex-guarded attempt per try: node-id resolution, tick conversion,
//! clock-sequence selection, and the last-timestamp commit all happen under
//! a single lock acquisition, so concurrent callers can never observe the
//! same `(timestamp, clock sequence, node)` triple. Exhaustion is handled
//! by a bounded retry loop around the locked attempt.

use std::time::Instant;

use rand::RngCore;

use super::clock_sequence::ClockSequence;
use super::time::{now_unix_ms, subsecond_nanos, uuid_ticks};
use super::wait::{next_backoff, pause_for_retry};
use super::{GeneratorState, UuidGenerator};
use crate::error::UuidError;
use crate::repository::UuidRepository;
use crate::uuid::{Uuid, NODE_MASK};

/// Bit 40 of a synthesized node id, marking it as locally administered
/// rather than derived from a hardware address
const NODE_LOCAL_BIT: u64 = 0x0100_0000_0000;

impl<R: UuidRepository> UuidGenerator<R> {
    /// Generates a UUID from the current wall clock and a monotonic
    /// sub-second counter.
    ///
    /// Retries internally when the clock sequence is exhausted for the
    /// current tick; since the clock is re-read on every attempt, the retry
    /// resolves as soon as the timestamp advances. A configured
    /// [`max_wait`](crate::GeneratorConfig::max_wait) bounds the total wait.
    pub fn generate(&self) -> Result<Uuid, UuidError> {
        self.generate_with(|| (now_unix_ms(), subsecond_nanos()))
    }

    /// Generates a UUID from an explicit time.
    ///
    /// `time_ms` is milliseconds since the Unix epoch; `subsec_nanos`
    /// carries the sub-millisecond part in nanoseconds. Digits at or above
    /// one millisecond and below 100 ns are discarded.
    ///
    /// With a pinned time the clock sequence cannot recover from exhaustion
    /// on its own, so a [`max_wait`](crate::GeneratorConfig::max_wait)
    /// deadline is the only bound on retrying at a fully spent tick.
    pub fn generate_at(&self, time_ms: i64, subsec_nanos: u64) -> Result<Uuid, UuidError> {
        self.generate_with(|| (time_ms, subsec_nanos))
    }

    fn generate_with(&self, mut clock: impl FnMut() -> (i64, u64)) -> Result<Uuid, UuidError> {
        let started = Instant::now();
        let mut interval = self.config.retry_interval();

        loop {
            let (time_ms, subsec_nanos) = clock();
            let attempt = {
                let mut state = self.lock_state();
                self.try_generate(&mut state, time_ms, subsec_nanos)?
            };
            if let Some(uuid) = attempt {
                return Ok(uuid);
            }

            // Lock released while sleeping; the next attempt re-reads and
            // re-compares the shared state from scratch.
            if !pause_for_retry(started, interval, self.config.max_wait()) {
                return Err(UuidError::GenerationTimeout {
                    waited_ms: started.elapsed().as_millis() as u64,
                });
            }
            interval = next_backoff(interval);
        }
    }

    /// One atomic generation attempt.
    ///
    /// Returns `Ok(None)` when the clock sequence is exhausted for this
    /// timestamp and the attempt should be retried after a pause.
    fn try_generate(
        &self,
        state: &mut GeneratorState,
        time_ms: i64,
        subsec_nanos: u64,
    ) -> Result<Option<Uuid>, UuidError> {
        let GeneratorState {
            rng,
            clock_seq,
            last_node_id,
            last_timestamp,
        } = state;

        let node_id = match *last_node_id {
            Some(id) => id,
            None => self.resolve_node_id(rng)?,
        };

        let timestamp = uuid_ticks(time_ms, subsec_nanos);
        let clock_seq = clock_seq.get_or_insert_with(|| ClockSequence::new(rng));

        let seq_value = match (*last_node_id, *last_timestamp) {
            (last_node, _) if last_node != Some(node_id) => clock_seq.randomize(rng),
            (_, None) => clock_seq.randomize(rng),
            (_, Some(last)) if timestamp <= last => match clock_seq.increment_and_get() {
                Some(value) => value,
                None => return Ok(None),
            },
            _ => match clock_seq.get() {
                Some(value) => value,
                None => return Ok(None),
            },
        };

        let uuid = Uuid::from_fields_v1(timestamp, seq_value, node_id);
        *last_timestamp = Some(timestamp);
        *last_node_id = Some(node_id);
        Ok(Some(uuid))
    }

    /// Loads the node id from the repository, synthesizing and persisting a
    /// fresh one when the store is empty. The save happens at most once per
    /// node-id change; a failure surfaces before any state is committed.
    fn resolve_node_id(&self, rng: &mut impl RngCore) -> Result<u64, UuidError> {
        match self.repository.load_node_id().map_err(UuidError::repository)? {
            Some(id) => Ok(id & NODE_MASK),
            None => {
                let id = random_node_id(rng);
                self.repository
                    .save_node_id(Some(id))
                    .map_err(UuidError::repository)?;
                Ok(id)
            }
        }
    }
}

/// Synthesizes a 48-bit node id with the locally-administered bit set
fn random_node_id(rng: &mut impl RngCore) -> u64 {
    (rng.next_u64() & NODE_MASK) | NODE_LOCAL_BIT
}
