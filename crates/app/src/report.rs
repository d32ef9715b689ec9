//! Plain-text rendering of conflict reports and timetables

use std::fmt::Write;

use homeroom_core::{ConflictMap, Day, Timetable};

/// Render a conflict report, one block per conflicted slot
pub fn render(map: &ConflictMap) -> String {
    if !map.has_conflicts() {
        return "no conflicts found\n".to_string();
    }

    let mut out = String::new();
    for (slot, conflicts) in map.iter() {
        let _ = writeln!(out, "{slot}:");
        for conflict in conflicts {
            let _ = writeln!(out, "  [{}] {}", conflict.kind, conflict.message);
            let _ = writeln!(out, "          affects: {}", conflict.affected_entities.join(", "));
        }
    }
    let _ = writeln!(
        out,
        "{} conflict(s) across {} slot(s)",
        map.conflict_count(),
        map.len()
    );
    out
}

/// Render a weekly grid, one line per day
pub fn render_timetable(title: &str, timetable: &Timetable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    for day in Day::ALL {
        let cells: Vec<String> = timetable
            .row(day)
            .iter()
            .map(|(period, cell)| match cell {
                Some(cell) => {
                    let who = cell
                        .teacher_id
                        .as_deref()
                        .or(cell.class_name.as_deref())
                        .unwrap_or("?");
                    format!("{period}:{}({who})", cell.subject)
                }
                None => format!("{period}:-"),
            })
            .collect();
        let _ = writeln!(out, "  {} {}", day.label(), cells.join("  "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeroom_core::{
        detect_conflicts, Schedule, ScheduleCell, ScheduleKind, Semester,
    };
    use uuid::Uuid;

    fn one_lesson(teacher: &str, class: &str) -> Schedule {
        let mut tt = Timetable::default();
        tt.set(Day::Mon, 1, ScheduleCell::lesson("영어", class));
        Schedule::new(
            ScheduleKind::Teacher,
            teacher,
            Semester::First,
            2026,
            tt,
            Uuid::nil(),
        )
    }

    #[test]
    fn test_clean_report() {
        let map = detect_conflicts(&[one_lesson("영어1", "3-1")], None);
        assert_eq!(render(&map), "no conflicts found\n");
    }

    #[test]
    fn test_conflicted_report_mentions_slot_and_parties() {
        let map = detect_conflicts(&[one_lesson("영어1", "3-1"), one_lesson("영어2", "3-1")], None);
        let text = render(&map);
        assert!(text.contains("mon-1:"));
        assert!(text.contains("[class]"));
        assert!(text.contains("영어1"));
        assert!(text.contains("1 conflict(s) across 1 slot(s)"));
    }

    #[test]
    fn test_timetable_grid_lines() {
        let mut tt = Timetable::empty(2);
        tt.set(Day::Mon, 1, ScheduleCell::taught_by("음악", "음악"));
        let text = render_timetable("3-1", &tt);
        assert!(text.starts_with("3-1\n"));
        assert!(text.contains("월 1:음악(음악)  2:-"));
        // all five days are printed even when empty
        assert_eq!(text.lines().count(), 6);
    }
}
