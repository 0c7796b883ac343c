use crate::Result;
use storage::Database;

pub struct ImportContext {
    pub db: Database,
}

impl ImportContext {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Loads award records from some external source into the store.
///
/// Implementations replace whatever the store held before and return the
/// number of records loaded.
#[async_trait::async_trait]
pub trait RecordImporter: Send + Sync {
    async fn import(&self, source: &str, context: &ImportContext) -> Result<usize>;
}
