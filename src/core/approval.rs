//! Approval workflow business logic - one-way sign-off over the registry.
//!
//! The workflow has two states: unapproved (initial) and approved. Approval
//! snapshots the statistics and machine count, persists the record under its
//! own storage key and relays it by email. Re-approval overwrites the prior
//! record; there is no unapprove operation.

use crate::{
    config::settings::Settings,
    core::stats::{self, MachineStats},
    errors::{Error, Result},
    models::{ApprovalInput, ApprovalRecord},
    relay::{self, EmailRelay},
    storage,
};
use sea_orm::DatabaseConnection;
use tracing::info;

/// Placeholder recorded when the approver leaves the notes field empty.
pub const DEFAULT_APPROVAL_NOTES: &str = "Process approved by the client";

/// Snapshot shown to the approver while they fill in their identity.
#[derive(Clone, Debug, PartialEq)]
pub struct ApprovalSummary {
    /// Current machine count.
    pub machine_count: u64,
    /// Current statistics over the registry.
    pub stats: MachineStats,
}

fn require_field(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingRequiredField { field });
    }
    Ok(())
}

/// Opens the approval flow: fails on an empty registry, otherwise returns
/// the summary the presentation layer shows while collecting the approver's
/// identity. Abandoning the flow afterwards changes no state.
pub async fn request_approval(db: &DatabaseConnection) -> Result<ApprovalSummary> {
    let machines = storage::load_machines(db).await?;
    if machines.is_empty() {
        return Err(Error::EmptyStore);
    }

    let stats = stats::calculate(&machines);
    Ok(ApprovalSummary {
        machine_count: stats.total,
        stats,
    })
}

/// Confirms the sign-off.
///
/// Validates the approver identity, snapshots the current statistics and
/// machine count, persists the record (overwriting any prior approval) and
/// relays the approval email fire-and-forget when a relay is configured.
pub async fn confirm_approval(
    db: &DatabaseConnection,
    settings: &Settings,
    input: ApprovalInput,
    email_relay: Option<&EmailRelay>,
) -> Result<ApprovalRecord> {
    require_field(&input.approver_name, "approverName")?;
    require_field(&input.approver_department, "approverDepartment")?;
    require_field(&input.approver_email, "approverEmail")?;

    let machines = storage::load_machines(db).await?;
    if machines.is_empty() {
        return Err(Error::EmptyStore);
    }
    let stats = stats::calculate(&machines);

    let record = ApprovalRecord {
        approved: true,
        approved_on: chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
        approver_name: input.approver_name,
        approver_department: input.approver_department,
        approver_email: input.approver_email,
        notes: input
            .notes
            .filter(|notes| !notes.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_APPROVAL_NOTES.to_string()),
        machine_count_at_approval: stats.total,
    };

    storage::save_approval(db, &record).await?;
    info!(
        approver = %record.approver_name,
        machines = record.machine_count_at_approval,
        "process approved"
    );

    if let Some(email_relay) = email_relay {
        let fields = relay::approval_email_fields(settings, &record, &machines, &stats)?;
        email_relay.dispatch(fields).await;
    }

    Ok(record)
}

/// Returns the current approval record, or `None` if never approved.
pub async fn load_approval(db: &DatabaseConnection) -> Result<Option<ApprovalRecord>> {
    storage::load_approval(db).await
}
