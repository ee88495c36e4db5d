//! Persistence boundary for the 48-bit node identifier
//!
//! The generator only needs to load and save one optional 48-bit integer.
//! Any durable key/value store can satisfy [`UuidRepository`]; two simple
//! implementations ship with the crate.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::RepositoryError;
use crate::uuid::NODE_MASK;

/// Stores the node identifier across process lifetimes.
///
/// Last-write-wins is the only consistency requirement; the generator
/// serializes its own access, so implementations do not need internal
/// transactional semantics.
pub trait UuidRepository {
    /// Returns the stored node identifier, or `None` if none was saved yet.
    fn load_node_id(&self) -> Result<Option<u64>, RepositoryError>;

    /// Stores the given node identifier; `None` clears any stored value.
    fn save_node_id(&self, node_id: Option<u64>) -> Result<(), RepositoryError>;
}

impl<T: UuidRepository + ?Sized> UuidRepository for Arc<T> {
    fn load_node_id(&self) -> Result<Option<u64>, RepositoryError> {
        (**self).load_node_id()
    }

    fn save_node_id(&self, node_id: Option<u64>) -> Result<(), RepositoryError> {
        (**self).save_node_id(node_id)
    }
}

/// In-memory node-id store.
///
/// Keeps the node id for the lifetime of the process only, so identifiers
/// from different runs will carry different node ids. Useful for tests and
/// for callers that do not care about cross-restart node stability.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    node_id: Mutex<Option<u64>>,
}

impl MemoryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with a fixed node id.
    pub fn with_node_id(node_id: u64) -> Self {
        Self {
            node_id: Mutex::new(Some(node_id & NODE_MASK)),
        }
    }
}

impl UuidRepository for MemoryRepository {
    fn load_node_id(&self) -> Result<Option<u64>, RepositoryError> {
        Ok(*self.node_id.lock().expect("node id lock poisoned"))
    }

    fn save_node_id(&self, node_id: Option<u64>) -> Result<(), RepositoryError> {
        *self.node_id.lock().expect("node id lock poisoned") = node_id.map(|id| id & NODE_MASK);
        Ok(())
    }
}

/// File-backed node-id store.
///
/// Persists the node id as 12 hex digits in a single file, keeping the node
/// field stable across process restarts. A missing file means no node id has
/// been saved yet.
#[derive(Debug, Clone)]
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl UuidRepository for FileRepository {
    fn load_node_id(&self) -> Result<Option<u64>, RepositoryError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let node_id = u64::from_str_radix(text.trim(), 16)?;
        Ok(Some(node_id & NODE_MASK))
    }

    fn save_node_id(&self, node_id: Option<u64>) -> Result<(), RepositoryError> {
        match node_id {
            Some(id) => fs::write(&self.path, format!("{:012x}", id & NODE_MASK))?,
            None => match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }
}
