//! In-memory collection backing one entity kind

use indexmap::IndexMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

/// A record that can live in a [`Table`]
pub trait Record: Clone + Send + Sync + 'static {
    /// Prefix of generated ids
    const KIND: &'static str;
    /// Name used in error messages
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

/// Records removed by clearing their `active` flag
pub trait SoftDelete: Record {
    fn deactivate(&mut self);
}

/// Insertion-ordered collection of records keyed by id.
///
/// Every public operation except [`Table::find`] and the counters waits for
/// the configured latency before touching the rows, mimicking a network call.
#[derive(Clone)]
pub struct Table<T> {
    rows: Arc<RwLock<IndexMap<String, T>>>,
    latency: Duration,
}

impl<T: Record> Table<T> {
    pub fn new(latency: Duration) -> Self {
        Self {
            rows: Arc::new(RwLock::new(IndexMap::new())),
            latency,
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Shallow copy of every record, in insertion order
    pub async fn list(&self) -> Vec<T> {
        self.simulate_latency().await;
        self.rows.read().await.values().cloned().collect()
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<T> {
        self.simulate_latency().await;
        self.rows
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(T::LABEL, id))
    }

    /// Immediate lookup used to resolve references
    pub async fn find(&self, id: &str) -> Option<T> {
        self.rows.read().await.get(id).cloned()
    }

    /// Resolve an optional foreign key; unknown ids resolve to `None`
    pub async fn resolve(&self, id: Option<&str>) -> Option<T> {
        match id {
            Some(id) => self.find(id).await,
            None => None,
        }
    }

    /// Resolution for a foreign key carried by a patch: `None` when the key
    /// is not part of the patch, `Some(None)` when it names an unknown id
    pub async fn resolve_patch(&self, id: Option<&str>) -> Option<Option<T>> {
        match id {
            Some(id) => Some(self.find(id).await),
            None => None,
        }
    }

    pub async fn insert(&self, record: T) -> T {
        self.simulate_latency().await;
        self.rows
            .write()
            .await
            .insert(record.id().to_string(), record.clone());
        record
    }

    /// Apply `patch` to the stored record and return the result
    pub async fn update_by_id<F>(&self, id: &str, patch: F) -> AppResult<T>
    where
        F: FnOnce(&mut T),
    {
        self.simulate_latency().await;
        let mut rows = self.rows.write().await;
        let record = rows
            .get_mut(id)
            .ok_or_else(|| AppError::not_found(T::LABEL, id))?;
        patch(record);
        Ok(record.clone())
    }

    /// Load initial rows without simulated latency
    pub(crate) async fn seed<I>(&self, records: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut rows = self.rows.write().await;
        for record in records {
            rows.insert(record.id().to_string(), record);
        }
    }

    /// Physically remove a record. Returns whether it existed.
    pub async fn remove(&self, id: &str) -> bool {
        self.simulate_latency().await;
        self.rows.write().await.shift_remove(id).is_some()
    }

    /// Snapshot of the records matching `predicate`, without latency
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    /// Most recently inserted record
    pub async fn last(&self) -> Option<T> {
        self.rows.read().await.last().map(|(_, r)| r.clone())
    }
}

impl<T: SoftDelete> Table<T> {
    /// Mark a record inactive. Absent ids are ignored; returns whether a
    /// record was found.
    pub async fn soft_delete(&self, id: &str) -> bool {
        self.simulate_latency().await;
        match self.rows.write().await.get_mut(id) {
            Some(record) => {
                record.deactivate();
                true
            }
            None => {
                tracing::debug!("Soft delete of unknown {} {} ignored", T::LABEL, id);
                false
            }
        }
    }
}
