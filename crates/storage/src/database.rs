use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::AwardRecord;

pub(crate) type RecordTable = HashMap<Uuid, AwardRecord>;

/// Handle to the in-memory award record store.
///
/// The store lives for the whole process. Clones share the same table, so a
/// single `Database` can be handed to the request layer and to the importer.
#[derive(Debug, Clone, Default)]
pub struct Database {
    pool: Arc<RecordPool>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self) -> &RecordPool {
        &self.pool
    }
}

/// Lock-guarded record table.
///
/// Writers hold the write guard for the whole mutation, so readers never
/// observe a half-applied change.
#[derive(Debug, Default)]
pub struct RecordPool {
    records: RwLock<RecordTable>,
}

impl RecordPool {
    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, RecordTable> {
        self.records.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, RecordTable> {
        self.records.write().await
    }
}
