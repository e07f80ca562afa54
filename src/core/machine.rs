//! Record store business logic - Handles all machine-record operations.
//!
//! Provides functions for registering, deleting, listing and exporting
//! machine records. Validation runs before any state is touched, so a failed
//! operation leaves both the in-memory list and the storage blob unchanged.
//! All functions are async and return Result types for error handling.

use crate::{
    config::settings::Settings,
    errors::{Error, Result},
    models::{ExportDocument, MachineRecord, RegisterMachine},
    storage,
};
use sea_orm::DatabaseConnection;
use tracing::info;

fn require_field(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingRequiredField { field });
    }
    Ok(())
}

/// Coerces an optional current reading: absent or non-finite input becomes
/// 0.0, negative input clamps to 0.0.
fn coerce_current(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0).max(0.0)
}

/// Picks a fresh record id starting from `candidate` (epoch milliseconds),
/// bumping by one while it collides with an existing id.
fn fresh_id(machines: &[MachineRecord], candidate: i64) -> i64 {
    let mut id = candidate;
    while machines.iter().any(|m| m.id == id) {
        id += 1;
    }
    id
}

/// Registers a new welding machine.
///
/// Validates that type, brand, model and serial number are non-empty and that
/// the serial number is not already registered (case-sensitive exact match).
/// On success the record is appended to the list (insertion order is display
/// order) and the full list is persisted before returning.
pub async fn register(db: &DatabaseConnection, input: RegisterMachine) -> Result<MachineRecord> {
    require_field(&input.welding_type, "weldingType")?;
    require_field(&input.brand, "brand")?;
    require_field(&input.model, "model")?;
    require_field(&input.serial_number, "serialNumber")?;

    let mut machines = storage::load_machines(db).await?;

    if machines
        .iter()
        .any(|m| m.serial_number == input.serial_number)
    {
        return Err(Error::DuplicateSerialNumber {
            serial: input.serial_number,
        });
    }

    let record = MachineRecord {
        id: fresh_id(&machines, chrono::Utc::now().timestamp_millis()),
        welding_type: input.welding_type,
        brand: input.brand,
        model: input.model,
        serial_number: input.serial_number,
        idle_current_amps: coerce_current(input.idle_current_amps),
        welding_current_amps: coerce_current(input.welding_current_amps),
        notes: input.notes.unwrap_or_default(),
        registered_on: chrono::Local::now().format("%d/%m/%Y").to_string(),
    };

    machines.push(record.clone());
    storage::save_machines(db, &machines).await?;

    info!(id = record.id, serial = %record.serial_number, "registered machine");
    Ok(record)
}

/// Deletes the machine with the given id.
///
/// Deleting an id that is not present is a no-op, not an error; the blob is
/// only rewritten when something was actually removed.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<()> {
    let mut machines = storage::load_machines(db).await?;

    let before = machines.len();
    machines.retain(|m| m.id != id);
    if machines.len() == before {
        return Ok(());
    }

    storage::save_machines(db, &machines).await?;

    info!(id, "deleted machine");
    Ok(())
}

/// Returns all registered machines in insertion order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<MachineRecord>> {
    storage::load_machines(db).await
}

/// Builds the versioned export envelope for the file-download sink.
///
/// Refused up front with [`Error::EmptyStore`] when nothing is registered
/// rather than producing an empty export.
pub async fn export_document(
    db: &DatabaseConnection,
    settings: &Settings,
) -> Result<ExportDocument> {
    let machines = storage::load_machines(db).await?;
    if machines.is_empty() {
        return Err(Error::EmptyStore);
    }

    Ok(ExportDocument {
        empresa: settings.organization.clone(),
        sistema: settings.system.clone(),
        versao: settings.version.clone(),
        data_exportacao: chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
        maquinas: machines,
    })
}

/// Filename for an exported document: `<prefix>-<ISO date>.json`.
#[must_use]
pub fn export_filename(settings: &Settings) -> String {
    format!(
        "{}-{}.json",
        settings.export_prefix,
        chrono::Local::now().format("%Y-%m-%d")
    )
}
