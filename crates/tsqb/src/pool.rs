//! Reuse pool for [`QueryBuilder`]s.

use crate::builder::QueryBuilder;
use std::sync::{Mutex, OnceLock, PoisonError};

/// Bounded free list of reset builders, safe for concurrent acquire/release.
///
/// Every builder handed out is in its initial state: released builders are reset before
/// they are stored.
#[derive(Debug)]
pub struct BuilderPool {
    inner: Mutex<Vec<QueryBuilder>>,
    capacity: usize,
}

impl BuilderPool {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(capacity.min(Self::DEFAULT_CAPACITY))),
            capacity,
        }
    }

    /// The process-wide pool used by [`from`](crate::from) and [`QueryBuilder::to_sql`].
    pub fn global() -> &'static BuilderPool {
        static POOL: OnceLock<BuilderPool> = OnceLock::new();
        POOL.get_or_init(|| BuilderPool::new(Self::DEFAULT_CAPACITY))
    }

    pub fn acquire(&self) -> QueryBuilder {
        self.lock().pop().unwrap_or_default()
    }

    /// Reset `qb` and keep it for reuse; dropped when the pool is full.
    pub fn release(&self, mut qb: QueryBuilder) {
        qb.reset();
        let mut free = self.lock();
        if free.len() < self.capacity {
            free.push(qb);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // A panic while holding the lock cannot leave a half-written builder in the list.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<QueryBuilder>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BuilderPool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
