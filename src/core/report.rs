//! Paginated process report generation.
//!
//! Renders the registry into plain-text pages laid out like the printed
//! process document: a header block, a fixed-column machine table that
//! breaks onto continuation pages when the vertical cursor passes the page
//! threshold, and a statistics footer after the table.

use crate::{
    config::settings::Settings,
    core::stats::MachineStats,
    errors::{Error, Result},
    models::MachineRecord,
};

/// Vertical cursor position past which the table breaks onto a new page.
const PAGE_BREAK_AT: f64 = 250.0;
/// Cursor position of the first row on a continuation page.
const CONTINUATION_TOP: f64 = 30.0;
/// Vertical space consumed by one table row.
const ROW_HEIGHT: f64 = 8.0;
/// Cursor position of the first table row on the first page, below the
/// header block, table title and column headers.
const FIRST_ROW_TOP: f64 = 95.0;

/// A rendered report: one string per page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedReport {
    /// Report pages in order.
    pub pages: Vec<String>,
}

impl RenderedReport {
    /// Joins all pages with a form-feed separator for file output.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.pages.join("\n\u{c}\n")
    }
}

fn table_header() -> String {
    format!(
        "{:<8} {:<18} {:<18} {:<20} {:>10} {:>13}",
        "Type", "Brand", "Model", "Serial No.", "Idle (A)", "Welding (A)"
    )
}

fn table_row(machine: &MachineRecord) -> String {
    format!(
        "{:<8} {:<18} {:<18} {:<20} {:>10} {:>13}",
        machine.welding_type,
        machine.brand,
        machine.model,
        machine.serial_number,
        machine.idle_current_amps,
        machine.welding_current_amps
    )
}

/// Renders the report for the given machines and statistics.
///
/// Fails with [`Error::EmptyStore`] when nothing is registered. The caller
/// supplies `generated_on` so renders are reproducible.
pub fn render(
    settings: &Settings,
    machines: &[MachineRecord],
    stats: &MachineStats,
    generated_on: &str,
) -> Result<RenderedReport> {
    if machines.is_empty() {
        return Err(Error::EmptyStore);
    }

    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut page: Vec<String> = Vec::new();

    page.push(format!(
        "DDP - {} | {}",
        settings.organization, settings.system
    ));
    page.push("Process and Infrastructure Definition".to_string());
    page.push(format!("Date: {generated_on}"));
    page.push(String::new());
    page.push("Registered Welding Machines".to_string());
    page.push(table_header());
    page.push("-".repeat(92));

    let mut y = FIRST_ROW_TOP;
    for machine in machines {
        if y > PAGE_BREAK_AT {
            pages.push(std::mem::take(&mut page));
            y = CONTINUATION_TOP;
        }
        page.push(table_row(machine));
        y += ROW_HEIGHT;
    }

    // The footer stays on the page the table ended on.
    page.push(String::new());
    page.push("Statistics:".to_string());
    page.push(format!("Total Machines: {}", stats.total));
    page.push(format!("TIG Machines: {}", stats.tig()));
    page.push(format!("MIG Machines: {}", stats.mig()));
    page.push(format!(
        "Total Idle Current: {:.1}A",
        stats.total_idle_current
    ));
    page.push(format!(
        "Total Welding Current: {:.1}A",
        stats.total_welding_current
    ));
    pages.push(page);

    Ok(RenderedReport {
        pages: pages.into_iter().map(|lines| lines.join("\n")).collect(),
    })
}
