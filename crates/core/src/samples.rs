//! Bundled sample dataset
//!
//! The two year-round ethics timetables the portal ships with. Known to be
//! mutually disjoint (도덕1 covers odd grades, 도덕2 even grades), so seeding
//! a fresh store from here never introduces conflicts.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::models::{Day, Schedule, ScheduleCell, ScheduleKind, Semester, Timetable};

fn ethics_week(rows: [&[(u8, &str)]; 5]) -> Timetable {
    let mut tt = Timetable::default();
    for (day, lessons) in Day::ALL.into_iter().zip(rows) {
        for &(period, class) in lessons {
            tt.set(day, period, ScheduleCell::lesson("도덕", class));
        }
    }
    tt
}

/// Default weekly timetables, keyed by teacher id
pub fn default_timetables() -> BTreeMap<String, Timetable> {
    let moral_one = ethics_week([
        &[(2, "1-2"), (3, "1-3"), (4, "1-4")],
        &[(1, "3-1"), (3, "3-3"), (4, "5-1"), (5, "5-2")],
        &[(2, "3-4"), (3, "3-6"), (4, "3-5")],
        &[(1, "5-3"), (2, "5-4"), (3, "5-5"), (4, "3-2")],
        &[(1, "5-6"), (2, "1-1")],
    ]);
    let moral_two = ethics_week([
        &[(1, "2-1"), (2, "2-2"), (3, "2-3"), (4, "2-4")],
        &[(1, "6-1"), (2, "6-2"), (3, "6-3")],
        &[(1, "6-4"), (2, "6-5"), (3, "6-6")],
        &[(2, "4-1"), (3, "4-2"), (4, "4-3")],
        &[(1, "4-4"), (2, "4-5"), (3, "4-6")],
    ]);

    BTreeMap::from_iter([
        ("도덕1".to_string(), moral_one),
        ("도덕2".to_string(), moral_two),
    ])
}

/// Sample timetables wrapped as persisted year-round schedule records
pub fn default_schedules(year: i32, updated_by: Uuid) -> Vec<Schedule> {
    default_timetables()
        .into_iter()
        .map(|(teacher_id, timetable)| {
            Schedule::new(
                ScheduleKind::Teacher,
                teacher_id,
                Semester::YearRound,
                year,
                timetable,
                updated_by,
            )
        })
        .collect()
}
