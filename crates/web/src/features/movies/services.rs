use storage::{
    RecordPool,
    dto::award_record::{CreateAwardRecordRequest, UpdateAwardRecordRequest},
    error::Result,
    models::AwardRecord,
    repository::award_record::AwardRecordRepository,
};
use uuid::Uuid;

/// List all award records
pub async fn list_records(pool: &RecordPool) -> Result<Vec<AwardRecord>> {
    let repo = AwardRecordRepository::new(pool);
    repo.list().await
}

/// Get award record by id
pub async fn get_record(pool: &RecordPool, id: Uuid) -> Result<AwardRecord> {
    let repo = AwardRecordRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new award record under a freshly generated id
pub async fn create_record(
    pool: &RecordPool,
    request: &CreateAwardRecordRequest,
) -> Result<AwardRecord> {
    let repo = AwardRecordRepository::new(pool);
    let record = repo.create(request.to_record(Uuid::new_v4())).await?;

    tracing::info!(id = %record.id, "Created award record");

    Ok(record)
}

/// Replace every field of an award record except its id
pub async fn update_record(
    pool: &RecordPool,
    id: Uuid,
    request: &UpdateAwardRecordRequest,
) -> Result<AwardRecord> {
    let repo = AwardRecordRepository::new(pool);
    repo.update(request.to_record(id)).await
}

/// Delete an award record
pub async fn delete_record(pool: &RecordPool, id: Uuid) -> Result<()> {
    let repo = AwardRecordRepository::new(pool);
    repo.delete(id).await?;

    tracing::info!(%id, "Deleted award record");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::Database;

    fn create_request(title: &str) -> CreateAwardRecordRequest {
        CreateAwardRecordRequest {
            year: "1986".to_string(),
            title: title.to_string(),
            studios: "Universal Studios".to_string(),
            producers: "Gloria Katz".to_string(),
            winner: "yes".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let db = Database::new();

        let first = create_record(db.pool(), &create_request("Howard the Duck"))
            .await
            .unwrap();
        let second = create_record(db.pool(), &create_request("Howard the Duck"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(get_record(db.pool(), first.id).await.unwrap(), first);
        assert_eq!(list_records(db.pool()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_id() {
        let db = Database::new();
        let created = create_record(db.pool(), &create_request("Howard the Duck"))
            .await
            .unwrap();

        let request = UpdateAwardRecordRequest {
            year: "1987".to_string(),
            title: "Leonard Part 6".to_string(),
            studios: "Columbia Pictures".to_string(),
            producers: "Bill Cosby".to_string(),
            winner: "yes".to_string(),
        };
        let updated = update_record(db.pool(), created.id, &request).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(get_record(db.pool(), created.id).await.unwrap().title, "Leonard Part 6");
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let db = Database::new();
        let id = Uuid::new_v4();

        assert!(get_record(db.pool(), id).await.unwrap_err().is_not_found());
        assert!(delete_record(db.pool(), id).await.unwrap_err().is_not_found());

        let request = UpdateAwardRecordRequest {
            year: "1987".to_string(),
            title: "Leonard Part 6".to_string(),
            studios: "Columbia Pictures".to_string(),
            producers: "Bill Cosby".to_string(),
            winner: "yes".to_string(),
        };
        assert!(
            update_record(db.pool(), id, &request)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }
}
