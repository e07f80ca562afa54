//! Shared test utilities for `WeldRegistry`.
//!
//! Provides common helpers for setting up in-memory test databases and
//! building registration and approval inputs with sensible defaults.

use crate::errors::Result;
use crate::models::{ApprovalInput, RegisterMachine};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with the storage table created.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a registration input with sensible defaults.
///
/// # Defaults
/// * `welding_type`: "TIG"
/// * `brand`: "Lincoln"
/// * `model`: "X200"
/// * `idle_current_amps`: 5.0
/// * `welding_current_amps`: 120.0
/// * `notes`: None
pub fn register_input(serial: &str) -> RegisterMachine {
    RegisterMachine {
        welding_type: "TIG".to_string(),
        brand: "Lincoln".to_string(),
        model: "X200".to_string(),
        serial_number: serial.to_string(),
        idle_current_amps: Some(5.0),
        welding_current_amps: Some(120.0),
        notes: None,
    }
}

/// Builds a registration input with custom identity fields.
pub fn custom_input(welding_type: &str, brand: &str, model: &str, serial: &str) -> RegisterMachine {
    RegisterMachine {
        welding_type: welding_type.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        serial_number: serial.to_string(),
        ..register_input(serial)
    }
}

/// Builds a valid approval input with no notes.
pub fn approval_input() -> ApprovalInput {
    ApprovalInput {
        approver_name: "Maria Silva".to_string(),
        approver_department: "Engineering".to_string(),
        approver_email: "maria.silva@example.com".to_string(),
        notes: None,
    }
}
