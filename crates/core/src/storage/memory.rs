//! In-memory schedule repository
//!
//! Reference implementation backing the CLI and tests. Interior mutability
//! behind an `RwLock` so shared references can serve concurrent readers.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::instrument;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Schedule, Semester};
use crate::samples;
use crate::storage::traits::{ScheduleFilter, ScheduleRepository};

/// Map-backed schedule store
#[derive(Debug, Default)]
pub struct MemoryStore {
    schedules: RwLock<HashMap<String, Schedule>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the bundled sample dataset for `year`.
    /// The seed author is the nil uuid.
    #[instrument]
    pub fn seeded(year: i32) -> Self {
        let store = Self::new();
        let seeds = samples::default_schedules(year, Uuid::nil());
        tracing::debug!(count = seeds.len(), "seeding store with sample schedules");
        let mut guard = store.schedules.write().unwrap_or_else(PoisonError::into_inner);
        for schedule in seeds {
            guard.insert(schedule.id.clone(), schedule);
        }
        drop(guard);
        store
    }

    /// A store holding exactly the given records
    pub fn with_schedules(schedules: impl IntoIterator<Item = Schedule>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.schedules.write().unwrap_or_else(PoisonError::into_inner);
            for schedule in schedules {
                guard.insert(schedule.id.clone(), schedule);
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.schedules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScheduleRepository for MemoryStore {
    fn list(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>> {
        let guard = self.schedules.read().unwrap_or_else(PoisonError::into_inner);
        let mut found: Vec<Schedule> = guard
            .values()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; keep listings stable
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }

    fn find(&self, target_id: &str, semester: Semester, year: i32) -> Result<Option<Schedule>> {
        let guard = self.schedules.read().unwrap_or_else(PoisonError::into_inner);
        Ok(guard
            .values()
            .find(|s| s.target_id == target_id && s.semester == semester && s.year == year)
            .cloned())
    }

    fn save(&self, schedule: &Schedule) -> Result<()> {
        tracing::debug!(id = %schedule.id, "saving schedule");
        self.schedules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(schedule.id.clone(), schedule.clone());
        Ok(())
    }
}
