//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{ConflictMap, Schedule};

/// Validate that a schedule record is internally consistent
pub fn assert_schedule_invariants(schedule: &Schedule) {
    debug_assert!(
        !schedule.target_id.trim().is_empty(),
        "Schedule {} has empty target id",
        schedule.id
    );

    debug_assert!(
        (2000..2200).contains(&schedule.year),
        "Schedule {} has implausible year {}",
        schedule.id,
        schedule.year
    );

    // teacher timetables must not carry per-class-view cells
    if schedule.is_teacher() {
        for (slot, cell) in schedule.timetable.assignments() {
            debug_assert!(
                cell.teacher_id.is_none(),
                "Teacher schedule {} has a teacher-id cell at {}",
                schedule.id,
                slot
            );
        }
    }
}

/// Validate that a conflict report is well-formed
pub fn assert_conflict_map_invariants(map: &ConflictMap) {
    for (slot, conflicts) in map.iter() {
        // ConflictMap::insert drops empty lists
        debug_assert!(
            !conflicts.is_empty(),
            "Slot {} is present with no conflicts",
            slot
        );

        for conflict in conflicts {
            debug_assert!(
                conflict.slot() == slot,
                "Conflict at {} filed under slot {}",
                conflict.slot(),
                slot
            );

            debug_assert!(
                conflict.affected_entities.len() >= 2,
                "Conflict at {} lists {} participants, expected at least 2",
                slot,
                conflict.affected_entities.len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::detect_conflicts;
    use crate::models::{Day, ScheduleCell, ScheduleKind, Semester, Timetable};
    use uuid::Uuid;

    fn make_schedule(teacher_id: &str, class: &str) -> Schedule {
        let mut tt = Timetable::default();
        tt.set(Day::Mon, 1, ScheduleCell::lesson("체육", class));
        Schedule::new(
            ScheduleKind::Teacher,
            teacher_id,
            Semester::First,
            2026,
            tt,
            Uuid::new_v4(),
        )
    }

    #[test]
    fn test_valid_schedule() {
        assert_schedule_invariants(&make_schedule("체육1", "2-1"));
    }

    #[test]
    #[should_panic(expected = "empty target id")]
    fn test_blank_target_id_is_caught() {
        assert_schedule_invariants(&make_schedule("  ", "2-1"));
    }

    #[test]
    fn test_detector_output_is_well_formed() {
        let schedules = vec![make_schedule("체육1", "2-1"), make_schedule("체육2", "2-1")];
        let map = detect_conflicts(&schedules, None);
        assert!(map.has_conflicts());
        assert_conflict_map_invariants(&map);
    }
}
