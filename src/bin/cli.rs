//! Dynamic Event Scheduler CLI
//!
//! Interactive menu front end over the [`DayPlanner`] core. This binary is
//! peripheral I/O glue: all scheduling behavior lives in the library.
//!
//! # Usage
//!
//! ```bash
//! # Run with the built-in sample events
//! cargo run --bin des-cli
//!
//! # Start with an empty planner
//! cargo run --bin des-cli -- --empty
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)
//!
//! Configuration is read from `scheduler.toml` when present; otherwise the
//! defaults (100 events, 30-minute slots, 24-hour horizon) apply.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveTime;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use des_rust::api::RescheduleReport;
use des_rust::config::PlannerConfig;
use des_rust::error::PlannerError;
use des_rust::models::{time_to_minute, EventId};
use des_rust::services::planner::DayPlanner;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let config = match PlannerConfig::from_default_location() {
        Ok(config) => {
            info!("loaded scheduler.toml");
            config
        }
        Err(_) => PlannerConfig::default(),
    };
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let mut planner = DayPlanner::new(config);

    println!("Welcome to the Dynamic Event Scheduler!");
    println!("Conflict detection, priority-greedy admission, and");
    println!("Welsh-Powell-assisted rescheduling.\n");

    if !env::args().any(|arg| arg == "--empty") {
        seed_sample_events(&mut planner);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = next_line(&mut lines)? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if let Err(e) = add_event_interactive(&mut planner, &mut lines) {
                    println!("Could not add event: {e:#}");
                }
            }
            "2" => {
                if let Err(e) = remove_event_interactive(&mut planner, &mut lines) {
                    println!("Could not remove event: {e:#}");
                }
            }
            "3" => print_schedule(&planner),
            "4" => print_events(&planner),
            "5" => print_graph(&planner),
            "6" => {
                let report = planner.reschedule();
                print_report(&report);
            }
            "7" => export_schedule(&planner)?,
            "8" => {
                println!("Thank you for using the Dynamic Event Scheduler!");
                break;
            }
            other => println!("Invalid choice '{other}'. Please try again."),
        }
    }

    Ok(())
}

fn seed_sample_events(planner: &mut DayPlanner) {
    let samples: [(&str, u32, u32, u32, i32); 5] = [
        ("Math Class", 9, 0, 60, 3),
        ("Physics Lab", 10, 0, 90, 4),
        ("Lunch Break", 12, 0, 30, 2),
        ("Study Group", 14, 0, 120, 3),
        ("Team Meeting", 16, 0, 45, 5),
    ];

    for (name, hour, minute, duration, priority) in samples {
        match planner.add_event(name, hour, minute, duration, priority) {
            Ok((id, report)) => {
                println!("Added sample event '{name}' with ID {id}");
                print_report(&report);
            }
            Err(e) => println!("Skipping sample event '{name}': {e}"),
        }
    }
}

fn print_menu() {
    println!("\n=== DYNAMIC EVENT SCHEDULER ===");
    println!("1. Add Event");
    println!("2. Remove Event");
    println!("3. View Schedule");
    println!("4. View All Events");
    println!("5. View Conflict Graph");
    println!("6. Manual Reschedule");
    println!("7. Export Schedule (JSON)");
    println!("8. Exit");
    print!("Enter your choice: ");
    let _ = io::stdout().flush();
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("Failed to read input")?)),
        None => Ok(None),
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    next_line(lines)?.context("Input closed")
}

fn add_event_interactive(
    planner: &mut DayPlanner,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let name = prompt(lines, "Enter event name: ")?;
    let start_raw = prompt(lines, "Enter start time (HH:MM): ")?;
    let start = NaiveTime::parse_from_str(start_raw.trim(), "%H:%M")
        .with_context(|| format!("'{}' is not a valid HH:MM time", start_raw.trim()))?;
    let duration: u32 = prompt(lines, "Enter duration in minutes: ")?
        .trim()
        .parse()
        .context("Duration must be a positive integer")?;
    let priority: i32 = prompt(lines, "Enter priority (higher = more important): ")?
        .trim()
        .parse()
        .context("Priority must be an integer")?;

    let start_minute = time_to_minute(start);
    let (id, report) =
        planner.add_event(name.trim(), start_minute / 60, start_minute % 60, duration, priority)?;

    println!("Event '{}' added successfully with ID: {id}", name.trim());
    print_report(&report);
    Ok(())
}

fn remove_event_interactive(
    planner: &mut DayPlanner,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let id: u32 = prompt(lines, "Enter event ID to remove: ")?
        .trim()
        .parse()
        .context("Event ID must be a positive integer")?;

    match planner.remove_event(EventId::new(id)) {
        Ok(report) => {
            println!("Event {id} removed.");
            print_report(&report);
            Ok(())
        }
        Err(e @ PlannerError::NotFound { .. }) => {
            println!("{e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_report(report: &RescheduleReport) {
    if report.relocated.is_empty() && report.unplaced.is_empty() {
        return;
    }
    println!("--- Rescheduling ---");
    for relocation in &report.relocated {
        println!(
            "Rescheduled '{}' to alternative time: {}",
            relocation.name, relocation.interval
        );
    }
    for id in &report.unplaced {
        println!("Could not find an alternative time slot for event {id}");
    }
}

fn print_schedule(planner: &DayPlanner) {
    println!("\n=== CURRENT SCHEDULE ===");
    println!(
        "{:<4} {:<20} {:<12} {:<8} {:<8} {:<10}",
        "ID", "Event Name", "Time", "Duration", "Priority", "Status"
    );
    println!("{}", "-".repeat(68));
    for entry in planner.schedule() {
        println!(
            "{:<4} {:<20} {:<12} {:<8} {:<8} {:<10}",
            entry.id,
            entry.name,
            entry.interval.to_string(),
            entry.duration_minutes,
            entry.priority,
            if entry.scheduled { "Scheduled" } else { "Unscheduled" }
        );
    }
}

fn print_events(planner: &DayPlanner) {
    println!("\n=== ALL EVENTS ===");
    for event in planner.events() {
        println!(
            "ID: {}, Name: {}, Time: {}, Duration: {} min, Priority: {}",
            event.id, event.name, event.interval, event.duration_minutes, event.priority
        );
    }
}

fn print_graph(planner: &DayPlanner) {
    println!("\n=== CONFLICT GRAPH ===");
    for entry in planner.conflict_graph().entries {
        let neighbors: Vec<String> = entry
            .conflicts_with
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "Event {} ({}), degree {}: {}",
            entry.id,
            entry.name,
            entry.degree,
            if neighbors.is_empty() {
                "no conflicts".to_string()
            } else {
                neighbors.join(" ")
            }
        );
    }
}

fn export_schedule(planner: &DayPlanner) -> Result<()> {
    let json = serde_json::to_string_pretty(&planner.schedule())
        .context("Failed to serialize schedule")?;
    println!("{json}");
    Ok(())
}
