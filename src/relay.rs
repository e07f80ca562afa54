//! Fire-and-forget email relay collaborator.
//!
//! The relay consumes a flat mapping of human-readable field names to string
//! values and posts it as a form submission to a third-party endpoint. The
//! workflow never reads the outcome: delivery failures are logged at `warn`
//! and dropped, they are not workflow failures.

use crate::{
    config::settings::Settings,
    core::stats::MachineStats,
    errors::Result,
    models::{ApprovalRecord, MachineRecord},
};
use tracing::{info, warn};

/// Flat form payload sent to the relay endpoint.
pub type FormFields = Vec<(String, String)>;

/// HTTP client for the relay endpoint.
#[derive(Clone, Debug)]
pub struct EmailRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailRelay {
    /// Creates a relay for the given endpoint.
    #[must_use]
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Posts the fields as a form submission, logging the outcome and
    /// swallowing it. Callers get no delivery guarantee.
    pub async fn dispatch(&self, fields: FormFields) {
        match self
            .client
            .post(&self.endpoint)
            .form(&fields)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                info!(endpoint = %self.endpoint, "email relay accepted submission");
            }
            Ok(response) => {
                warn!(
                    endpoint = %self.endpoint,
                    status = %response.status(),
                    "email relay rejected submission"
                );
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "email relay dispatch failed");
            }
        }
    }
}

/// Builds the registry-summary email payload: identity, date, statistics and
/// the full machine list as a JSON text field.
pub fn registry_email_fields(
    settings: &Settings,
    machines: &[MachineRecord],
    stats: &MachineStats,
) -> Result<FormFields> {
    let fields = [
        ("Organization", settings.organization.clone()),
        ("System", settings.system.clone()),
        ("Version", settings.version.clone()),
        (
            "Date",
            chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
        ),
        ("Total Machines", stats.total.to_string()),
        ("TIG Machines", stats.tig().to_string()),
        ("MIG Machines", stats.mig().to_string()),
        ("Idle Current (A)", format!("{:.1}", stats.total_idle_current)),
        (
            "Welding Current (A)",
            format!("{:.1}", stats.total_welding_current),
        ),
        ("Distinct Brands", stats.distinct_brand_count.to_string()),
        ("Machine Data", serde_json::to_string_pretty(machines)?),
    ];

    Ok(fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect())
}

/// Builds the approval email payload: subject line, approver identity, the
/// statistics snapshot and the full machine list as a JSON text field.
pub fn approval_email_fields(
    settings: &Settings,
    approval: &ApprovalRecord,
    machines: &[MachineRecord],
    stats: &MachineStats,
) -> Result<FormFields> {
    let fields = [
        (
            "Subject",
            format!(
                "Process Approved - {} | {}",
                settings.organization, settings.system
            ),
        ),
        ("Organization", settings.organization.clone()),
        ("System", settings.system.clone()),
        ("Version", settings.version.clone()),
        ("Approval Date", approval.approved_on.clone()),
        ("Approved By", approval.approver_name.clone()),
        ("Department", approval.approver_department.clone()),
        ("Approver Email", approval.approver_email.clone()),
        ("Total Machines", stats.total.to_string()),
        ("TIG Machines", stats.tig().to_string()),
        ("MIG Machines", stats.mig().to_string()),
        ("Idle Current (A)", format!("{:.1}", stats.total_idle_current)),
        (
            "Welding Current (A)",
            format!("{:.1}", stats.total_welding_current),
        ),
        ("Distinct Brands", stats.distinct_brand_count.to_string()),
        ("Notes", approval.notes.clone()),
        ("Machine Data", serde_json::to_string_pretty(machines)?),
    ];

    Ok(fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect())
}
