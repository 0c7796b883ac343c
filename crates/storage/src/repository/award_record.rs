use std::collections::HashSet;

use uuid::Uuid;

use crate::RecordPool;
use crate::database::RecordTable;
use crate::error::{Result, StorageError};
use crate::models::AwardRecord;

pub struct AwardRecordRepository<'a> {
    pool: &'a RecordPool,
}

impl<'a> AwardRecordRepository<'a> {
    pub fn new(pool: &'a RecordPool) -> Self {
        Self { pool }
    }

    /// List all records, ordered by year then title
    pub async fn list(&self) -> Result<Vec<AwardRecord>> {
        let mut records = self.snapshot().await;
        records.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title)));

        Ok(records)
    }

    /// Copy of every stored record, in no particular order
    pub async fn snapshot(&self) -> Vec<AwardRecord> {
        self.pool.read().await.values().cloned().collect()
    }

    pub async fn count(&self) -> usize {
        self.pool.read().await.len()
    }

    /// Find record by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<AwardRecord> {
        self.pool
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    /// Store a record whose id has already been assigned
    pub async fn create(&self, record: AwardRecord) -> Result<AwardRecord> {
        let mut records = self.pool.write().await;

        if records.contains_key(&record.id) {
            return Err(StorageError::duplicate_id(record.id));
        }

        records.insert(record.id, record.clone());
        Ok(record)
    }

    /// Store several records at once. Nothing is written if any id collides.
    pub async fn create_batch(&self, batch: Vec<AwardRecord>) -> Result<usize> {
        let mut records = self.pool.write().await;

        ensure_unique_ids(&batch, Some(&*records))?;

        let inserted = batch.len();
        records.extend(batch.into_iter().map(|record| (record.id, record)));

        Ok(inserted)
    }

    /// Drop every stored record and load `batch` in their place
    pub async fn replace_all(&self, batch: Vec<AwardRecord>) -> Result<usize> {
        ensure_unique_ids(&batch, None)?;

        let mut records = self.pool.write().await;
        records.clear();

        let inserted = batch.len();
        records.extend(batch.into_iter().map(|record| (record.id, record)));

        Ok(inserted)
    }

    /// Replace every field of the record sharing `record.id`
    pub async fn update(&self, record: AwardRecord) -> Result<AwardRecord> {
        let mut records = self.pool.write().await;

        let existing = records.get_mut(&record.id).ok_or(StorageError::NotFound)?;
        *existing = record.clone();

        Ok(record)
    }

    /// Delete a record by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let removed = self.pool.write().await.remove(&id);

        if removed.is_none() {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

fn ensure_unique_ids(batch: &[AwardRecord], existing: Option<&RecordTable>) -> Result<()> {
    let mut seen = HashSet::with_capacity(batch.len());

    for record in batch {
        let taken = existing.is_some_and(|table| table.contains_key(&record.id));
        if taken || !seen.insert(record.id) {
            return Err(StorageError::duplicate_id(record.id));
        }
    }

    Ok(())
}
