//! Storage repository traits
//!
//! The portal's persistence lives behind this interface; the conflict
//! detector itself never touches storage, it is handed an already-fetched
//! snapshot. Implementations may be in-memory, file-backed, or a future
//! document database.

use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Schedule, ScheduleKind, Semester, Timetable};

/// Selection criteria for [`ScheduleRepository::list`]
///
/// A `None` field matches everything. Year-round records match any semester
/// filter, since a year-round teacher teaches in both terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    pub kind: Option<ScheduleKind>,
    pub semester: Option<Semester>,
    pub year: Option<i32>,
}

impl ScheduleFilter {
    /// Everything in the store
    pub fn all() -> Self {
        Self::default()
    }

    /// All teacher-kind schedules
    pub fn teachers() -> Self {
        Self {
            kind: Some(ScheduleKind::Teacher),
            ..Self::default()
        }
    }

    /// Teacher schedules relevant to one term (year-round records included)
    pub fn teachers_for_term(semester: Semester, year: i32) -> Self {
        Self {
            kind: Some(ScheduleKind::Teacher),
            semester: Some(semester),
            year: Some(year),
        }
    }

    pub fn matches(&self, schedule: &Schedule) -> bool {
        if self.kind.is_some_and(|kind| schedule.kind != kind) {
            return false;
        }
        if self.year.is_some_and(|year| schedule.year != year) {
            return false;
        }
        match self.semester {
            None => true,
            Some(wanted) => {
                schedule.semester == wanted || schedule.semester == Semester::YearRound
            }
        }
    }
}

/// Schedule repository operations
pub trait ScheduleRepository {
    /// List schedules matching the filter
    fn list(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>>;

    /// Find the one record for (target, semester, year), exact semester match
    fn find(&self, target_id: &str, semester: Semester, year: i32) -> Result<Option<Schedule>>;

    /// Insert or overwrite a record by id
    fn save(&self, schedule: &Schedule) -> Result<()>;

    /// Upsert a teacher's week: update the existing record for the term if
    /// one exists, otherwise create it. Returns the record id.
    fn save_teacher_timetable(
        &self,
        teacher_id: &str,
        timetable: Timetable,
        semester: Semester,
        year: i32,
        updated_by: Uuid,
    ) -> Result<String> {
        if let Some(mut existing) = self.find(teacher_id, semester, year)? {
            existing.timetable = timetable;
            existing.updated_at = Utc::now();
            existing.updated_by = updated_by;
            self.save(&existing)?;
            return Ok(existing.id);
        }

        let schedule = Schedule::new(
            ScheduleKind::Teacher,
            teacher_id,
            semester,
            year,
            timetable,
            updated_by,
        );
        self.save(&schedule)?;
        Ok(schedule.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: ScheduleKind, semester: Semester, year: i32) -> Schedule {
        Schedule::new(kind, "영어1", semester, year, Timetable::default(), Uuid::nil())
    }

    #[test]
    fn test_filter_all_matches_everything() {
        let filter = ScheduleFilter::all();
        assert!(filter.matches(&record(ScheduleKind::Teacher, Semester::First, 2026)));
        assert!(filter.matches(&record(ScheduleKind::Class, Semester::YearRound, 2024)));
    }

    #[test]
    fn test_filter_kind_and_year() {
        let filter = ScheduleFilter {
            kind: Some(ScheduleKind::Teacher),
            semester: None,
            year: Some(2026),
        };
        assert!(filter.matches(&record(ScheduleKind::Teacher, Semester::First, 2026)));
        assert!(!filter.matches(&record(ScheduleKind::Class, Semester::First, 2026)));
        assert!(!filter.matches(&record(ScheduleKind::Teacher, Semester::First, 2025)));
    }

    #[test]
    fn test_year_round_matches_either_term() {
        let first = ScheduleFilter::teachers_for_term(Semester::First, 2026);
        let second = ScheduleFilter::teachers_for_term(Semester::Second, 2026);
        let year_round = record(ScheduleKind::Teacher, Semester::YearRound, 2026);
        assert!(first.matches(&year_round));
        assert!(second.matches(&year_round));

        let term_bound = record(ScheduleKind::Teacher, Semester::First, 2026);
        assert!(first.matches(&term_bound));
        assert!(!second.matches(&term_bound));
    }
}
