//! Denormalized per-class timetable views
//!
//! A class's week is never stored; it is assembled on demand from the
//! teacher schedules that name the class. Cells in a view carry the subject
//! and the teacher, not a class name.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Schedule, ScheduleCell, Timetable};

/// Assemble one class's weekly view from teacher schedules
///
/// Later schedules win if two teachers name the same class at the same slot;
/// such input is conflicted and should be surfaced through
/// [`detect_conflicts`](crate::conflict::detect_conflicts) rather than hidden
/// here.
pub fn class_timetable(class_name: &str, schedules: &[Schedule]) -> Timetable {
    let mut view = Timetable::default();

    for schedule in schedules.iter().filter(|s| s.is_teacher()) {
        for (slot, cell) in schedule.timetable.assignments() {
            if cell.class_name.as_deref() == Some(class_name) {
                view.set(
                    slot.day,
                    slot.period,
                    ScheduleCell::taught_by(cell.subject.clone(), schedule.target_id.clone()),
                );
            }
        }
    }

    view
}

/// Views for every class named anywhere in the given schedules
pub fn all_class_timetables(schedules: &[Schedule]) -> BTreeMap<String, Timetable> {
    let mut classes: BTreeSet<&str> = BTreeSet::new();
    for schedule in schedules.iter().filter(|s| s.is_teacher()) {
        for (_, cell) in schedule.timetable.assignments() {
            if let Some(class) = cell.class_name.as_deref().filter(|c| !c.is_empty()) {
                classes.insert(class);
            }
        }
    }

    classes
        .into_iter()
        .map(|class| (class.to_string(), class_timetable(class, schedules)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, ScheduleKind, Semester};
    use uuid::Uuid;

    fn schedule(teacher_id: &str, lessons: &[(Day, u8, &str, &str)]) -> Schedule {
        let mut tt = Timetable::default();
        for &(day, period, subject, class) in lessons {
            tt.set(day, period, ScheduleCell::lesson(subject, class));
        }
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
    fn test_class_view_collects_across_teachers() {
        let schedules = vec![
            schedule("영어1", &[(Day::Mon, 1, "영어", "3-1"), (Day::Mon, 2, "영어", "3-2")]),
            schedule("체육1", &[(Day::Tue, 3, "체육", "3-1")]),
        ];

        let view = class_timetable("3-1", &schedules);
        let mon1 = view.cell(Day::Mon, 1).unwrap();
        assert_eq!(mon1.subject, "영어");
        assert_eq!(mon1.teacher_id.as_deref(), Some("영어1"));
        assert!(mon1.class_name.is_none());

        let tue3 = view.cell(Day::Tue, 3).unwrap();
        assert_eq!(tue3.teacher_id.as_deref(), Some("체육1"));

        // 3-2's lesson does not leak into 3-1's view
        assert!(view.cell(Day::Mon, 2).is_none());
    }

    #[test]
    fn test_all_class_views_cover_every_named_class() {
        let schedules = vec![
            schedule("영어1", &[(Day::Mon, 1, "영어", "3-1")]),
            schedule("체육1", &[(Day::Mon, 2, "체육", "4-2")]),
        ];

        let views = all_class_timetables(&schedules);
        assert_eq!(
            views.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["3-1", "4-2"]
        );
        assert!(!views["3-1"].is_empty());
    }

    #[test]
    fn test_class_kind_records_are_not_sources() {
        let view_record = Schedule::new(
            ScheduleKind::Class,
            "3-1",
            Semester::First,
            2026,
            {
                let mut tt = Timetable::default();
                tt.set(Day::Fri, 5, ScheduleCell::lesson("영어", "3-1"));
                tt
            },
            Uuid::new_v4(),
        );
        let view = class_timetable("3-1", &[view_record]);
        assert!(view.is_empty());
    }
}
