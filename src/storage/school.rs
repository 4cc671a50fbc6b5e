//! Append-only school store.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::Path;

use crate::error::{ApiError, ApiResult};
use crate::models::School;

/// Trait for school storage operations.
///
/// Ids are positions in insertion order. Schools are never removed, so an id
/// stays valid for the lifetime of the store.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Returns every school in insertion order.
    async fn list(&self) -> ApiResult<Vec<School>>;

    /// Returns the name of the school at `id`.
    async fn get(&self, id: u64) -> ApiResult<String>;

    /// Appends a school and returns its id.
    async fn append(&self, name: String) -> ApiResult<u64>;

    /// Replaces the name of the school at `id`.
    async fn update(&self, id: u64, name: String) -> ApiResult<()>;

    /// Returns the number of stored schools.
    async fn total(&self) -> u64;
}

/// In-memory implementation of the school store.
///
/// All access goes through a single lock, so a `list` never observes a
/// half-finished `append`.
pub struct MemorySchoolStore {
    names: Mutex<Vec<String>>,
}

impl MemorySchoolStore {
    pub fn new() -> Self {
        Self {
            names: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store holding `names` with ids assigned in order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Mutex::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Loads a seed file with one school name per line. Blank lines are
    /// skipped and surrounding whitespace is trimmed.
    pub fn load_seed(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_names(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        ))
    }

    #[inline]
    fn index(id: u64, len: usize) -> Option<usize> {
        usize::try_from(id).ok().filter(|&i| i < len)
    }
}

impl Default for MemorySchoolStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchoolStore for MemorySchoolStore {
    async fn list(&self) -> ApiResult<Vec<School>> {
        let names = self.names.lock();
        Ok(names
            .iter()
            .enumerate()
            .map(|(i, name)| School::new(i as u64, name.clone()))
            .collect())
    }

    async fn get(&self, id: u64) -> ApiResult<String> {
        let names = self.names.lock();
        Self::index(id, names.len())
            .map(|i| names[i].clone())
            .ok_or_else(|| ApiError::school_not_found(id))
    }

    async fn append(&self, name: String) -> ApiResult<u64> {
        let mut names = self.names.lock();
        names.push(name);
        Ok((names.len() - 1) as u64)
    }

    async fn update(&self, id: u64, name: String) -> ApiResult<()> {
        let mut names = self.names.lock();
        let i = Self::index(id, names.len()).ok_or_else(|| ApiError::school_not_found(id))?;
        names[i] = name;
        Ok(())
    }

    async fn total(&self) -> u64 {
        self.names.lock().len() as u64
    }
}
