//! Homeroom - school timetable conflict checker
//!
//! Loads schedule documents from JSON and reports scheduling conflicts,
//! optionally substituting one teacher's unsaved timetable the way the
//! admin editor does before a save.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use homeroom_core::{
    class_timetable, detect_conflicts, invariants, MemoryStore, ReplaceScope, Schedule,
    ScheduleFilter, ScheduleRepository, Semester, Simulation, Timetable,
};

mod config;
mod report;

use config::Settings;

#[derive(Debug, Parser)]
#[command(name = "homeroom", version, about = "School timetable conflict checker")]
struct Cli {
    /// Path to settings.toml (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Detect conflicts across stored schedules
    Check {
        /// JSON file holding an array of schedule documents
        schedules: PathBuf,
    },
    /// Preview conflicts with one teacher's unsaved timetable substituted
    Simulate {
        /// JSON file holding an array of schedule documents
        schedules: PathBuf,
        /// Teacher whose stored schedules are replaced
        #[arg(long)]
        teacher: String,
        /// JSON file holding the proposed timetable
        #[arg(long)]
        timetable: PathBuf,
        /// Replace only this semester's record (defaults to settings)
        #[arg(long)]
        semester: Option<Semester>,
        /// Replace only this year's record (defaults to settings)
        #[arg(long)]
        year: Option<i32>,
        /// Drop every stored record of the teacher regardless of term
        #[arg(long)]
        all_terms: bool,
    },
    /// Print one class's weekly view assembled from teacher schedules
    ClassView {
        /// JSON file holding an array of schedule documents
        schedules: PathBuf,
        /// Class id, e.g. "3-1"
        #[arg(long = "class")]
        class_name: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Check { schedules } => {
            let store = open_store(&schedules)?;
            let schedules = store.list(&ScheduleFilter::teachers())?;
            let map = detect_conflicts(&schedules, None);
            invariants::assert_conflict_map_invariants(&map);
            print!("{}", report::render(&map));
            Ok(if map.has_conflicts() { 1 } else { 0 })
        }

        Command::Simulate {
            schedules,
            teacher,
            timetable,
            semester,
            year,
            all_terms,
        } => {
            let store = open_store(&schedules)?;
            let timetable: Timetable = load_json(&timetable)?;

            let (scope, filter) = if all_terms {
                (ReplaceScope::AllTerms, ScheduleFilter::teachers())
            } else {
                let semester = semester.unwrap_or(settings.semester);
                let year = year.unwrap_or(settings.year);
                (
                    ReplaceScope::Term { semester, year },
                    ScheduleFilter::teachers_for_term(semester, year),
                )
            };
            let schedules = store.list(&filter)?;
            tracing::debug!(teacher = %teacher, ?scope, "running simulation");

            let stored = detect_conflicts(&schedules, None);
            let sim = Simulation {
                teacher_id: teacher,
                timetable,
                scope,
            };
            let map = detect_conflicts(&schedules, Some(&sim));
            invariants::assert_conflict_map_invariants(&map);

            println!(
                "stored: {} conflict(s), simulated: {} conflict(s)",
                stored.conflict_count(),
                map.conflict_count()
            );
            print!("{}", report::render(&map));
            Ok(if map.has_conflicts() { 1 } else { 0 })
        }

        Command::ClassView {
            schedules,
            class_name,
        } => {
            let store = open_store(&schedules)?;
            let schedules = store.list(&ScheduleFilter::teachers())?;
            let view = class_timetable(&class_name, &schedules);
            print!("{}", report::render_timetable(&class_name, &view));
            Ok(0)
        }
    }
}

fn load_schedules(path: &Path) -> homeroom_core::Result<Vec<Schedule>> {
    let schedules: Vec<Schedule> = load_json(path)?;
    for schedule in &schedules {
        invariants::assert_schedule_invariants(schedule);
    }
    tracing::debug!(count = schedules.len(), path = %path.display(), "loaded schedules");
    Ok(schedules)
}

/// A repository over the documents in the given JSON file
fn open_store(path: &Path) -> homeroom_core::Result<MemoryStore> {
    Ok(MemoryStore::with_schedules(load_schedules(path)?))
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> homeroom_core::Result<T> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeroom_core::samples;
    use uuid::Uuid;

    #[test]
    fn test_load_schedules_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedules.json");
        let seeds = samples::default_schedules(2026, Uuid::nil());
        std::fs::write(&path, serde_json::to_vec(&seeds).unwrap()).unwrap();

        let loaded = load_schedules(&path).unwrap();
        assert_eq!(loaded, seeds);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedules.json");
        std::fs::write(&path, b"{not json").unwrap();
        assert!(load_schedules(&path).is_err());
    }

    #[test]
    fn test_cli_parses_simulate_flags() {
        let cli = Cli::parse_from([
            "homeroom",
            "simulate",
            "schedules.json",
            "--teacher",
            "도덕1",
            "--timetable",
            "week.json",
            "--semester",
            "year",
        ]);
        match cli.command {
            Command::Simulate {
                teacher, semester, all_terms, ..
            } => {
                assert_eq!(teacher, "도덕1");
                assert_eq!(semester, Some(Semester::YearRound));
                assert!(!all_terms);
            }
            other => panic!("parsed wrong command: {other:?}"),
        }
    }
}
