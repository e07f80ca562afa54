//! Whole-blob persistence over the `storage` key-value table.
//!
//! Both the machine list and the approval record are read and written as
//! complete JSON blobs (read-modify-write with a single logical writer).
//! Every mutating registry operation persists through here before returning,
//! so durable storage is always consistent with what the caller observed.

use crate::{
    entities::{StorageBlob, storage_blob},
    errors::Result,
    models::{ApprovalRecord, MachineRecord},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

/// Storage key holding the machine list blob.
pub const MACHINES_KEY: &str = "machines";

/// Storage key holding the approval record blob.
pub const APPROVAL_KEY: &str = "approval";

/// Reads the blob stored under `key`, or `None` if the key was never written.
pub async fn read_blob(db: &DatabaseConnection, key: &str) -> Result<Option<String>> {
    Ok(StorageBlob::find()
        .filter(storage_blob::Column::Key.eq(key))
        .one(db)
        .await?
        .map(|row| row.value))
}

/// Overwrites the blob stored under `key`, inserting the row on first write.
pub async fn write_blob(db: &DatabaseConnection, key: &str, value: String) -> Result<()> {
    let now = chrono::Utc::now().naive_utc();
    let existing = StorageBlob::find()
        .filter(storage_blob::Column::Key.eq(key))
        .one(db)
        .await?;

    match existing {
        Some(row) => {
            let mut blob: storage_blob::ActiveModel = row.into();
            blob.value = Set(value);
            blob.updated_at = Set(now);
            blob.update(db).await?;
        }
        None => {
            let blob = storage_blob::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value),
                updated_at: Set(now),
                ..Default::default()
            };
            blob.insert(db).await?;
        }
    }

    Ok(())
}

/// Loads the machine list. A missing `machines` key reads as the empty list.
pub async fn load_machines(db: &DatabaseConnection) -> Result<Vec<MachineRecord>> {
    match read_blob(db, MACHINES_KEY).await? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Persists the full machine list, overwriting the previous blob.
pub async fn save_machines(db: &DatabaseConnection, machines: &[MachineRecord]) -> Result<()> {
    write_blob(db, MACHINES_KEY, serde_json::to_string(machines)?).await
}

/// Loads the approval record, or `None` if the process was never approved.
pub async fn load_approval(db: &DatabaseConnection) -> Result<Option<ApprovalRecord>> {
    match read_blob(db, APPROVAL_KEY).await? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Persists the approval record, overwriting any prior approval.
pub async fn save_approval(db: &DatabaseConnection, approval: &ApprovalRecord) -> Result<()> {
    write_blob(db, APPROVAL_KEY, serde_json::to_string(approval)?).await
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{register_input, setup_test_db};

    #[tokio::test]
    async fn test_read_blob_missing_key() -> Result<()> {
        let db = setup_test_db().await?;

        let value = read_blob(&db, "nonexistent").await?;
        assert!(value.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_write_blob_insert_and_overwrite() -> Result<()> {
        let db = setup_test_db().await?;

        write_blob(&db, "sample", "first".to_string()).await?;
        assert_eq!(read_blob(&db, "sample").await?.unwrap(), "first");

        write_blob(&db, "sample", "second".to_string()).await?;
        assert_eq!(read_blob(&db, "sample").await?.unwrap(), "second");

        // Overwriting must not leave a second row behind.
        let rows = StorageBlob::find().all(&db).await?;
        assert_eq!(rows.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_load_machines_empty_store() -> Result<()> {
        let db = setup_test_db().await?;

        let machines = load_machines(&db).await?;
        assert!(machines.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_machines_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        let registered =
            crate::core::machine::register(&db, register_input("SN-001")).await?;
        let machines = load_machines(&db).await?;

        assert_eq!(machines.len(), 1);
        assert_eq!(machines[0], registered);

        Ok(())
    }

    #[tokio::test]
    async fn test_approval_round_trip() -> Result<()> {
        let db = setup_test_db().await?;

        assert!(load_approval(&db).await?.is_none());

        let approval = ApprovalRecord {
            approved: true,
            approved_on: "23/08/2026 10:00:00".to_string(),
            approver_name: "Maria Silva".to_string(),
            approver_department: "Engineering".to_string(),
            approver_email: "maria.silva@example.com".to_string(),
            notes: "ok".to_string(),
            machine_count_at_approval: 2,
        };
        save_approval(&db, &approval).await?;

        let loaded = load_approval(&db).await?.unwrap();
        assert_eq!(loaded, approval);

        Ok(())
    }
}
