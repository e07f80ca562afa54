//! Command-line interface - the presentation layer.
//!
//! Forwards user input into the record store and approval workflow and
//! re-queries the store after every mutation. Validation errors surface as a
//! blocking message and a non-zero exit; the store is left untouched.

use crate::{
    config::settings::Settings,
    core::{approval, machine, report, stats},
    errors::{Error, Result},
    models::{ApprovalInput, RegisterMachine},
    relay::{self, EmailRelay},
};
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;
use std::path::PathBuf;

/// Welding machine registry and process sign-off
#[derive(Parser, Debug)]
#[command(name = "weld-registry", version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// All registry subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new welding machine
    Register {
        /// Welding process category (e.g. TIG, MIG)
        #[arg(long)]
        welding_type: String,
        /// Manufacturer brand
        #[arg(long)]
        brand: String,
        /// Machine model
        #[arg(long)]
        model: String,
        /// Serial number (unique across the registry)
        #[arg(long)]
        serial_number: String,
        /// Idle current draw in amps (defaults to 0)
        #[arg(long)]
        idle_current: Option<f64>,
        /// Welding current draw in amps (defaults to 0)
        #[arg(long)]
        welding_current: Option<f64>,
        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List registered machines in insertion order
    List,
    /// Delete a machine by id (no-op when the id is unknown)
    Delete {
        /// Record id as shown by `list`
        id: i64,
    },
    /// Show registry statistics
    Stats,
    /// Export the registry as a versioned JSON document
    Export {
        /// Directory the export file is written to
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Render the paginated process report
    Report {
        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Send the registry summary through the email relay
    SendEmail,
    /// Show the approval summary and current sign-off state
    Summary,
    /// Approve the registered process (one-way sign-off)
    Approve {
        /// Approver name
        #[arg(long)]
        name: String,
        /// Approver department
        #[arg(long)]
        department: String,
        /// Approver email address
        #[arg(long)]
        email: String,
        /// Sign-off notes
        #[arg(long)]
        notes: Option<String>,
    },
}

fn print_stats(machine_stats: &stats::MachineStats) {
    println!("Total machines:        {}", machine_stats.total);
    for (welding_type, count) in &machine_stats.by_type {
        println!("{welding_type} machines:          {count}");
    }
    println!(
        "Total idle current:    {:.1} A",
        machine_stats.total_idle_current
    );
    println!(
        "Total welding current: {:.1} A",
        machine_stats.total_welding_current
    );
    println!(
        "Distinct brands:       {}",
        machine_stats.distinct_brand_count
    );
}

/// Executes the parsed command against the registry.
pub async fn run(cli: Cli, db: &DatabaseConnection, settings: &Settings) -> Result<()> {
    match cli.command {
        Command::Register {
            welding_type,
            brand,
            model,
            serial_number,
            idle_current,
            welding_current,
            notes,
        } => {
            let record = machine::register(
                db,
                RegisterMachine {
                    welding_type,
                    brand,
                    model,
                    serial_number,
                    idle_current_amps: idle_current,
                    welding_current_amps: welding_current,
                    notes,
                },
            )
            .await?;
            println!(
                "Registered {} {} ({}) with id {}",
                record.brand, record.model, record.serial_number, record.id
            );
        }
        Command::List => {
            let machines = machine::list(db).await?;
            if machines.is_empty() {
                println!("No machines registered yet.");
            } else {
                for record in machines {
                    println!(
                        "{:<15} {:<5} {:<15} {:<15} {:<20} idle {:>6.1} A  welding {:>6.1} A  registered {}",
                        record.id,
                        record.welding_type,
                        record.brand,
                        record.model,
                        record.serial_number,
                        record.idle_current_amps,
                        record.welding_current_amps,
                        record.registered_on
                    );
                    if !record.notes.is_empty() {
                        println!("    notes: {}", record.notes);
                    }
                }
            }
        }
        Command::Delete { id } => {
            machine::delete(db, id).await?;
            println!("Deleted machine {id} (if it existed).");
        }
        Command::Stats => {
            let machines = machine::list(db).await?;
            print_stats(&stats::calculate(&machines));
        }
        Command::Export { output_dir } => {
            let document = machine::export_document(db, settings).await?;
            let path = output_dir.join(machine::export_filename(settings));
            std::fs::write(&path, serde_json::to_string_pretty(&document)?)?;
            println!("Exported {} machines to {}", document.maquinas.len(), path.display());
        }
        Command::Report { output } => {
            let machines = machine::list(db).await?;
            let machine_stats = stats::calculate(&machines);
            let generated_on = chrono::Local::now().format("%d/%m/%Y").to_string();
            let rendered = report::render(settings, &machines, &machine_stats, &generated_on)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered.to_text())?;
                    println!(
                        "Wrote {}-page report to {}",
                        rendered.pages.len(),
                        path.display()
                    );
                }
                None => {
                    let total = rendered.pages.len();
                    for (index, page) in rendered.pages.iter().enumerate() {
                        println!("--- Page {}/{total} ---", index + 1);
                        println!("{page}");
                    }
                }
            }
        }
        Command::SendEmail => {
            let machines = machine::list(db).await?;
            if machines.is_empty() {
                return Err(Error::EmptyStore);
            }
            let email_relay = configured_relay(settings)?;
            let machine_stats = stats::calculate(&machines);
            let fields = relay::registry_email_fields(settings, &machines, &machine_stats)?;
            email_relay.dispatch(fields).await;
            println!("Registry summary dispatched to the email relay.");
        }
        Command::Summary => match approval::request_approval(db).await {
            Ok(summary) => {
                println!("Approval summary ({} machines):", summary.machine_count);
                print_stats(&summary.stats);
                match approval::load_approval(db).await? {
                    Some(record) => {
                        println!();
                        println!("Process approved on {}", record.approved_on);
                        println!(
                            "Approved by {} ({}, {})",
                            record.approver_name,
                            record.approver_department,
                            record.approver_email
                        );
                        println!("Machines at approval: {}", record.machine_count_at_approval);
                        println!("Notes: {}", record.notes);
                    }
                    None => println!("Process not yet approved."),
                }
            }
            Err(Error::EmptyStore) => {
                println!("No machines registered for approval.");
            }
            Err(err) => return Err(err),
        },
        Command::Approve {
            name,
            department,
            email,
            notes,
        } => {
            let email_relay = settings.relay_endpoint.clone().map(EmailRelay::new);
            let record = approval::confirm_approval(
                db,
                settings,
                ApprovalInput {
                    approver_name: name,
                    approver_department: department,
                    approver_email: email,
                    notes,
                },
                email_relay.as_ref(),
            )
            .await?;
            println!(
                "Process approved by {} on {} ({} machines).",
                record.approver_name, record.approved_on, record.machine_count_at_approval
            );
        }
    }

    Ok(())
}

fn configured_relay(settings: &Settings) -> Result<EmailRelay> {
    settings
        .relay_endpoint
        .clone()
        .map(EmailRelay::new)
        .ok_or_else(|| Error::Config {
            message: "relay_endpoint is not configured".to_string(),
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_register_command() {
        let cli = Cli::try_parse_from([
            "weld-registry",
            "register",
            "--welding-type",
            "TIG",
            "--brand",
            "Lincoln",
            "--model",
            "X200",
            "--serial-number",
            "SN-001",
            "--idle-current",
            "5",
            "--welding-current",
            "120",
        ])
        .unwrap();

        match cli.command {
            Command::Register {
                welding_type,
                serial_number,
                idle_current,
                ..
            } => {
                assert_eq!(welding_type, "TIG");
                assert_eq!(serial_number, "SN-001");
                assert_eq!(idle_current, Some(5.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_approve_command() {
        let cli = Cli::try_parse_from([
            "weld-registry",
            "approve",
            "--name",
            "Maria Silva",
            "--department",
            "Engineering",
            "--email",
            "maria.silva@example.com",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Approve { .. }));
    }

    #[test]
    fn test_delete_requires_id() {
        assert!(Cli::try_parse_from(["weld-registry", "delete"]).is_err());
        assert!(Cli::try_parse_from(["weld-registry", "delete", "17"]).is_ok());
    }
}
