//! shiftai binary entry point
//!
//! Thin command surface over the scheduling pipelines; all business
//! rules live in the library.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use client::{
    calendar, parse_sales_csv, DatasetLocks, ForecastPipeline, HttpSchedulingApi, JsonFileStore,
    OnboardingState, OptimizationPipeline, RosterPipeline, SchedulingApi,
};

#[derive(Parser)]
#[command(name = "shiftai")]
#[command(about = "Shift scheduling client: roster, sales forecast, cost-optimal schedule")]
struct Args {
    /// Base URL of the scheduling services
    #[arg(long, env = "SHIFTAI_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Directory holding the persisted datasets
    #[arg(long, env = "SHIFTAI_DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the staff roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },
    /// Import a ds,y sales CSV and generate a demand forecast
    Import { path: PathBuf },
    /// Inspect or clear the stored forecast
    Forecast {
        #[command(subcommand)]
        action: ForecastAction,
    },
    /// Run shift optimization from the stored roster and forecast
    Optimize,
    /// Inspect the stored schedule
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },
    /// Check that the scheduling services are reachable
    Health,
}

#[derive(Subcommand)]
enum RosterAction {
    /// Add a staff member
    Add {
        #[arg(long)]
        name: String,
        /// Hourly wage, e.g. 15.00
        #[arg(long)]
        wage: String,
        #[arg(long, default_value = "general")]
        skill: String,
    },
    List,
    /// Edit a staff member in place
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        wage: String,
        #[arg(long, default_value = "general")]
        skill: String,
    },
    /// Remove a staff member by id (no undo)
    Remove { id: String },
}

#[derive(Subcommand)]
enum ForecastAction {
    Show,
    /// Drop the stored forecast (no undo)
    Clear,
}

#[derive(Subcommand)]
enum ScheduleAction {
    Show,
    /// Shifts on one calendar date (YYYY-MM-DD)
    Day { date: NaiveDate },
    /// Write the schedule as pretty-printed JSON
    Export { path: PathBuf },
    /// Drop the stored schedule (no undo)
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let store = Arc::new(JsonFileStore::new(args.data_dir.clone()));
    let api = Arc::new(HttpSchedulingApi::new(&args.api_url)?);
    let locks = Arc::new(DatasetLocks::default());

    if OnboardingState::resolve(store.as_ref()).await? == OnboardingState::FirstRun {
        println!("Welcome to ShiftAI. Datasets will be kept in {}.", args.data_dir.display());
        OnboardingState::complete(store.as_ref()).await?;
    }

    let roster = RosterPipeline::new(store.clone(), locks.clone());
    let forecast = ForecastPipeline::new(store.clone(), api.clone(), locks.clone());
    let optimization = OptimizationPipeline::new(store.clone(), api.clone(), locks.clone());

    match args.command {
        Command::Roster { action } => match action {
            RosterAction::Add { name, wage, skill } => {
                let member = roster.add(&name, &wage, &skill).await?;
                println!("Added {} (${}/hr, {}) id={}", member.name, member.wage, member.skill, member.id);
            }
            RosterAction::List => {
                let listed = roster.list().await?;
                if listed.is_empty() {
                    println!("No staff yet. Add some with `shiftai roster add`.");
                }
                for member in listed {
                    println!("{}  ${}/hr  {}  {}", member.name, member.wage, member.skill, member.id);
                }
            }
            RosterAction::Update { id, name, wage, skill } => {
                let member = roster.update(&id, &name, &wage, &skill).await?;
                println!("Updated {} (${}/hr, {})", member.name, member.wage, member.skill);
            }
            RosterAction::Remove { id } => {
                let removed = roster.remove(&id).await?;
                println!("Removed {}", removed.name);
            }
        },
        Command::Import { path } => {
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let history = parse_sales_csv(&text)?;
            println!("Parsed {} sales points, requesting forecast...", history.len());
            let intervals = forecast.generate(&history).await?;
            println!("Forecast generated: {} hours of positive demand", intervals.len());
        }
        Command::Forecast { action } => match action {
            ForecastAction::Show => match forecast.load().await? {
                Some(intervals) => {
                    println!("{} forecast hours stored; first day:", intervals.len());
                    for interval in intervals.iter().take(24) {
                        println!(
                            "{}  demand {:.1}  [{:.1} .. {:.1}]",
                            interval.time,
                            interval.demand,
                            interval.confidence_low,
                            interval.confidence_high
                        );
                    }
                }
                None => println!("No forecast stored. Import sales data first."),
            },
            ForecastAction::Clear => {
                forecast.clear().await?;
                println!("Forecast cleared.");
            }
        },
        Command::Optimize => {
            let schedule = optimization.run().await?;
            println!(
                "Optimized: {} shifts, total cost ${:.2}",
                schedule.shifts.len(),
                schedule.total_cost
            );
        }
        Command::Schedule { action } => match action {
            ScheduleAction::Show => match optimization.load().await? {
                Some(schedule) => {
                    for shift in &schedule.shifts {
                        println!("{}  {} .. {}  ${:.2}", shift.name, shift.start, shift.end, shift.cost);
                    }
                    println!("Total: ${:.2}", schedule.total_cost);
                    let marks = calendar::marked_dates(&schedule);
                    let marked: Vec<String> = marks.iter().map(|d| d.to_string()).collect();
                    println!("Days with shifts: {}", marked.join(", "));
                }
                None => println!("No schedule stored. Run `shiftai optimize` first."),
            },
            ScheduleAction::Day { date } => match optimization.load().await? {
                Some(schedule) => {
                    let shifts = calendar::shifts_on_date(&schedule, date);
                    if shifts.is_empty() {
                        println!("No shifts on {date}.");
                    }
                    for shift in shifts {
                        println!("{}  {} .. {}  ${:.2}", shift.name, shift.start, shift.end, shift.cost);
                    }
                }
                None => println!("No schedule stored. Run `shiftai optimize` first."),
            },
            ScheduleAction::Export { path } => {
                let schedule = optimization.export(&path).await?;
                println!(
                    "Exported {} shifts to {}",
                    schedule.shifts.len(),
                    path.display()
                );
            }
            ScheduleAction::Clear => {
                optimization.clear().await?;
                println!("Schedule cleared.");
            }
        },
        Command::Health => {
            api.health().await?;
            println!("Scheduling services are healthy.");
        }
    }

    Ok(())
}
