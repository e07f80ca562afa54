//! Persisted record types and operation inputs.
//!
//! `MachineRecord` and `ApprovalRecord` are the two persisted shapes; both
//! serialize with camelCase field names inside the storage blobs. The export
//! envelope keeps the Portuguese keys consumed by the downstream
//! file-download sink.

use serde::{Deserialize, Serialize};

/// A registered welding machine.
///
/// Records are immutable after creation; corrections are delete plus
/// re-register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineRecord {
    /// Epoch milliseconds at creation, bumped until unique among live records.
    pub id: i64,
    /// Welding process category ("TIG", "MIG", ...). Open string set.
    pub welding_type: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Machine model.
    pub model: String,
    /// Unique across all live records, case-sensitive exact match.
    pub serial_number: String,
    /// Current draw while idle, in amps. Never negative.
    pub idle_current_amps: f64,
    /// Current draw while welding, in amps. Never negative.
    pub welding_current_amps: f64,
    /// Free-text notes, empty when not provided.
    #[serde(default)]
    pub notes: String,
    /// Local date (DD/MM/YYYY) stamped at registration, immutable.
    pub registered_on: String,
}

/// Input for [`crate::core::machine::register`].
///
/// Numeric fields are optional; absent or non-finite values coerce to 0.0
/// and negative values clamp to 0.0.
#[derive(Clone, Debug, Default)]
pub struct RegisterMachine {
    /// Welding process category. Required.
    pub welding_type: String,
    /// Manufacturer brand. Required.
    pub brand: String,
    /// Machine model. Required.
    pub model: String,
    /// Serial number. Required and unique.
    pub serial_number: String,
    /// Idle current draw in amps.
    pub idle_current_amps: Option<f64>,
    /// Welding current draw in amps.
    pub welding_current_amps: Option<f64>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// The singleton process sign-off record.
///
/// Overwritten on re-approval, never deleted; there is no unapprove
/// operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalRecord {
    /// Always true once the record exists.
    pub approved: bool,
    /// Local timestamp (DD/MM/YYYY HH:MM:SS) of the sign-off.
    pub approved_on: String,
    /// Name of the approver.
    pub approver_name: String,
    /// Department of the approver.
    pub approver_department: String,
    /// Email address of the approver.
    pub approver_email: String,
    /// Approver notes, or the fixed placeholder when left empty.
    pub notes: String,
    /// Machine count snapshotted at approval time.
    pub machine_count_at_approval: u64,
}

/// Approver identity collected by the presentation layer.
#[derive(Clone, Debug, Default)]
pub struct ApprovalInput {
    /// Name of the approver. Required.
    pub approver_name: String,
    /// Department of the approver. Required.
    pub approver_department: String,
    /// Email address of the approver. Required.
    pub approver_email: String,
    /// Optional sign-off notes.
    pub notes: Option<String>,
}

/// Versioned export envelope handed to the file-download sink.
///
/// Wire keys match the established export format, which predates this
/// implementation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Organization name.
    pub empresa: String,
    /// System name.
    pub sistema: String,
    /// System version.
    pub versao: String,
    /// Local timestamp of the export.
    #[serde(rename = "dataExportacao")]
    pub data_exportacao: String,
    /// Registered machines, in insertion order.
    pub maquinas: Vec<MachineRecord>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn sample_machine() -> MachineRecord {
        MachineRecord {
            id: 1_700_000_000_000,
            welding_type: "TIG".to_string(),
            brand: "Lincoln".to_string(),
            model: "X200".to_string(),
            serial_number: "SN-001".to_string(),
            idle_current_amps: 5.0,
            welding_current_amps: 120.0,
            notes: String::new(),
            registered_on: "23/08/2026".to_string(),
        }
    }

    #[test]
    fn machine_record_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_machine()).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "id",
            "weldingType",
            "brand",
            "model",
            "serialNumber",
            "idleCurrentAmps",
            "weldingCurrentAmps",
            "notes",
            "registeredOn",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn machine_record_round_trips() {
        let machine = sample_machine();
        let json = serde_json::to_string(&machine).unwrap();
        let parsed: MachineRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, machine);
    }

    #[test]
    fn machine_record_notes_default_to_empty() {
        let json = r#"{
            "id": 1,
            "weldingType": "MIG",
            "brand": "ESAB",
            "model": "Rebel",
            "serialNumber": "SN-002",
            "idleCurrentAmps": 2.0,
            "weldingCurrentAmps": 90.0,
            "registeredOn": "01/01/2026"
        }"#;
        let parsed: MachineRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.notes, "");
    }

    #[test]
    fn approval_record_uses_camel_case_keys() {
        let approval = ApprovalRecord {
            approved: true,
            approved_on: "23/08/2026 10:00:00".to_string(),
            approver_name: "Maria Silva".to_string(),
            approver_department: "Engineering".to_string(),
            approver_email: "maria.silva@example.com".to_string(),
            notes: "ok".to_string(),
            machine_count_at_approval: 3,
        };
        let json = serde_json::to_value(approval).unwrap();
        let object = json.as_object().unwrap();
        for key in [
            "approved",
            "approvedOn",
            "approverName",
            "approverDepartment",
            "approverEmail",
            "notes",
            "machineCountAtApproval",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn export_document_uses_portuguese_keys() {
        let document = ExportDocument {
            empresa: "Caldlaser".to_string(),
            sistema: "TeepMES".to_string(),
            versao: "1.1".to_string(),
            data_exportacao: "23/08/2026 10:00:00".to_string(),
            maquinas: vec![sample_machine()],
        };
        let json = serde_json::to_value(document).unwrap();
        let object = json.as_object().unwrap();
        for key in ["empresa", "sistema", "versao", "dataExportacao", "maquinas"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
