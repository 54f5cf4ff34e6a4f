//! Command-line interface: arguments and headless commands.

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::db;
use crate::entities::sea_orm_active_enums::HolidayType;
use crate::export;
use crate::holidays;
use crate::models::holiday::{HolidayRequest, HolidayRow};
use crate::staff;

/// Desktop app for employee records and holiday requests.
#[derive(Parser, Debug)]
#[command(name = "holiday-manager", version)]
pub struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    pub dev: bool,

    /// Explicit path to the config file
    #[arg(long, value_name = "PATH", conflicts_with = "dev")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Headless commands. Without one the desktop window opens.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the employee and holiday tables if they are missing
    InitDb,
    /// List employees
    Employees {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List holidays
    Holidays {
        /// Only holidays of this employee id
        #[arg(long)]
        employee: Option<i32>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Request a holiday
    AddHoliday {
        /// Employee id, or "Last First" name
        #[arg(long)]
        employee: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: String,
        /// PAID, SICK or UNPAID
        #[arg(long = "type", default_value = "PAID")]
        holiday_type: HolidayType,
    },
    /// Delete a holiday
    DeleteHoliday {
        #[arg(long)]
        id: i32,
    },
    /// Show the yearly leave balance of an employee
    Balance {
        /// Employee id, or "Last First" name
        #[arg(long)]
        employee: String,
        /// Calendar year (defaults to the current one)
        #[arg(long)]
        year: Option<i32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export all holidays to an Excel workbook
    Export {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Config file location for the selected mode.
    pub fn config_path(&self) -> PathBuf {
        if let Some(path) = &self.config {
            path.clone()
        } else if self.dev {
            PathBuf::from("config.toml")
        } else {
            AppConfig::default_path()
        }
    }
}

/// Run one headless command against the configured database.
pub async fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let conn = db::connect(&config.database.connection_string())
        .await
        .with_context(|| format!("connecting to {} database '{}'", config.database.driver.label(), config.database.name))?;

    match command {
        Command::InitDb => {
            db::ensure_schema(&conn).await.context("creating tables")?;
            println!("Tables ready.");
        }
        Command::Employees { json } => {
            let employees = db::employee::list_all(&conn).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&employees)?);
            } else {
                println!("{:>5}  {:<30} {:<30} {:<10} {}", "ID", "NAME", "EMAIL", "ROLE", "POSITION");
                for e in &employees {
                    println!(
                        "{:>5}  {:<30} {:<30} {:<10} {}",
                        e.id,
                        e.display_name(),
                        e.email,
                        e.role.label(),
                        e.position.label()
                    );
                }
            }
        }
        Command::Holidays { employee, json } => {
            let rows: Vec<HolidayRow> = db::holiday::list_all(&conn)
                .await?
                .into_iter()
                .filter(|r| employee.is_none_or(|id| r.employee_id == id))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_holidays(&rows);
            }
        }
        Command::AddHoliday {
            employee,
            start,
            end,
            holiday_type,
        } => {
            let employee_id = resolve_employee(&conn, &employee).await?;
            let request = HolidayRequest {
                employee_id,
                start_date: start,
                end_date: end,
                holiday_type,
            };
            let model = holidays::add_holiday(&conn, &config.leave, &request).await?;
            match db::holiday::get_row_by_id(&conn, model.id).await? {
                Some(row) => print_holidays(&[row]),
                None => println!("Holiday {} added.", model.id),
            }
        }
        Command::DeleteHoliday { id } => {
            holidays::delete_holiday(&conn, id).await?;
            println!("Holiday {id} deleted.");
        }
        Command::Balance { employee, year, json } => {
            let employee_id = resolve_employee(&conn, &employee).await?;
            let year = year.unwrap_or_else(|| Local::now().year());
            let balance = holidays::balance(&conn, &config.leave, employee_id, year).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&balance)?);
            } else {
                println!(
                    "{}: {} of {} days taken, {} remaining",
                    balance.year, balance.taken, balance.allowance, balance.remaining
                );
            }
        }
        Command::Export { output } => {
            let rows = db::holiday::list_all(&conn).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(export::generate_export_filename("holidays")));
            export::export_holidays_to_excel(&rows, &path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Exported {} holidays to {}", rows.len(), path.display());
        }
    }

    Ok(())
}

/// Accept either a numeric id or a "Last First" name.
async fn resolve_employee(conn: &DatabaseConnection, input: &str) -> anyhow::Result<i32> {
    if let Ok(id) = input.trim().parse::<i32>() {
        if db::employee::get_by_id(conn, id).await?.is_none() {
            bail!("no employee with id {id}");
        }
        return Ok(id);
    }
    Ok(staff::find_by_name(conn, input).await?.id)
}

fn print_holidays(rows: &[HolidayRow]) {
    println!(
        "{:>5}  {:<30} {:<10} {:<10} {:<7} {:>4}",
        "ID", "EMPLOYEE", "START", "END", "TYPE", "DAYS"
    );
    for r in rows {
        println!(
            "{:>5}  {:<30} {:<10} {:<10} {:<7} {:>4}",
            r.id,
            r.employee_name,
            r.start_date,
            r.end_date,
            r.holiday_type.label(),
            r.days
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_holiday() {
        let cli = Cli::try_parse_from([
            "holiday-manager",
            "add-holiday",
            "--employee",
            "Dupont Marie",
            "--start",
            "2024-07-01",
            "--end",
            "2024-07-05",
            "--type",
            "sick",
        ])
        .unwrap();

        match cli.command {
            Some(Command::AddHoliday {
                employee,
                holiday_type,
                ..
            }) => {
                assert_eq!(employee, "Dupont Marie");
                assert_eq!(holiday_type, HolidayType::Sick);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_path_modes() {
        let cli = Cli::try_parse_from(["holiday-manager", "--dev"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("config.toml"));
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["holiday-manager", "--config", "/tmp/hm.toml", "init-db"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/hm.toml"));

        assert!(Cli::try_parse_from(["holiday-manager", "--dev", "--config", "x.toml"]).is_err());
    }
}
