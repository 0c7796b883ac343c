use std::path::Path;

use storage::{models::AwardRecord, repository::award_record::AwardRecordRepository};
use uuid::Uuid;

use super::parser::DelimitedParser;
use crate::{ImportContext, RecordImporter, Result};

/// Reads a delimited dataset from disk and loads it into the store
#[derive(Debug, Clone, Default)]
pub struct DelimitedImporter {
    parser: DelimitedParser,
}

impl DelimitedImporter {
    pub fn new(parser: DelimitedParser) -> Self {
        Self { parser }
    }

    /// Parse a dataset file, giving every row a fresh id
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<Vec<AwardRecord>> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await?;
        tracing::info!("Read dataset file: {} ({} bytes)", path.display(), content.len());

        let records = self
            .parser
            .parse(&content)?
            .into_iter()
            .map(|row| row.into_record(Uuid::new_v4()))
            .collect();

        Ok(records)
    }
}

#[async_trait::async_trait]
impl RecordImporter for DelimitedImporter {
    async fn import(&self, source: &str, context: &ImportContext) -> Result<usize> {
        let records = self.load(source).await?;

        let repo = AwardRecordRepository::new(context.db.pool());
        let loaded = repo.replace_all(records).await?;

        tracing::info!("Loaded {} award records from {}", loaded, source);

        Ok(loaded)
    }
}
