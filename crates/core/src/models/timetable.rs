//! Weekly timetable grid
//!
//! One timetable belongs to exactly one owner (a teacher, or a class when
//! denormalized). Each (day, period) cell holds at most one lesson by
//! construction, so a single timetable can never double-book itself;
//! conflicts only arise across several teachers' timetables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::day::{Day, Period, TimeSlot};

/// One placed lesson inside a timetable cell
///
/// `teacher_id` is set on denormalized per-class views, `class_name` on
/// teacher-owned timetables. A cell without a class name never participates
/// in conflict detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCell {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ScheduleCell {
    /// A lesson on a teacher timetable, aimed at one class
    pub fn lesson(subject: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            teacher_id: None,
            class_name: Some(class_name.into()),
        }
    }

    /// A lesson on a per-class view, taught by one teacher
    pub fn taught_by(subject: impl Into<String>, teacher_id: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            teacher_id: Some(teacher_id.into()),
            class_name: None,
        }
    }
}

/// Cells of a single day, keyed by period. `None` means a free period.
pub type DayRow = BTreeMap<Period, Option<ScheduleCell>>;

/// A full teaching week
///
/// Serialized exactly like the portal documents: lowercase day keys, periods
/// as stringified numbers, free periods as explicit `null`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub mon: DayRow,
    pub tue: DayRow,
    pub wed: DayRow,
    pub thu: DayRow,
    pub fri: DayRow,
}

impl Timetable {
    /// Default number of daily periods
    pub const DEFAULT_PERIODS: Period = 5;

    /// An all-free grid with periods `1..=periods` on every day
    pub fn empty(periods: Period) -> Self {
        let row = || (1..=periods).map(|p| (p, None)).collect::<DayRow>();
        Self {
            mon: row(),
            tue: row(),
            wed: row(),
            thu: row(),
            fri: row(),
        }
    }

    pub fn row(&self, day: Day) -> &DayRow {
        match day {
            Day::Mon => &self.mon,
            Day::Tue => &self.tue,
            Day::Wed => &self.wed,
            Day::Thu => &self.thu,
            Day::Fri => &self.fri,
        }
    }

    pub fn row_mut(&mut self, day: Day) -> &mut DayRow {
        match day {
            Day::Mon => &mut self.mon,
            Day::Tue => &mut self.tue,
            Day::Wed => &mut self.wed,
            Day::Thu => &mut self.thu,
            Day::Fri => &mut self.fri,
        }
    }

    /// The occupied cell at (day, period), if any
    pub fn cell(&self, day: Day, period: Period) -> Option<&ScheduleCell> {
        self.row(day).get(&period).and_then(|c| c.as_ref())
    }

    /// Place a lesson, replacing whatever the cell held
    pub fn set(&mut self, day: Day, period: Period, cell: ScheduleCell) {
        self.row_mut(day).insert(period, Some(cell));
    }

    /// Free a cell
    pub fn clear(&mut self, day: Day, period: Period) {
        self.row_mut(day).insert(period, None);
    }

    /// Iterate all occupied cells in week order
    pub fn assignments(&self) -> impl Iterator<Item = (TimeSlot, &ScheduleCell)> {
        Day::ALL.into_iter().flat_map(move |day| {
            self.row(day)
                .iter()
                .filter_map(move |(&period, cell)| {
                    cell.as_ref().map(|c| (TimeSlot::new(day, period), c))
                })
        })
    }

    /// True if no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.assignments().next().is_none()
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::empty(Self::DEFAULT_PERIODS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_has_all_free_periods() {
        let tt = Timetable::empty(5);
        assert!(tt.is_empty());
        for day in Day::ALL {
            assert_eq!(tt.row(day).len(), 5);
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut tt = Timetable::default();
        tt.set(Day::Tue, 3, ScheduleCell::lesson("음악", "4-2"));
        assert_eq!(
            tt.cell(Day::Tue, 3).unwrap().class_name.as_deref(),
            Some("4-2")
        );

        tt.clear(Day::Tue, 3);
        assert!(tt.cell(Day::Tue, 3).is_none());
        // the period stays on the grid as a free cell
        assert!(tt.row(Day::Tue).contains_key(&3));
    }

    #[test]
    fn test_assignments_iterate_week_order() {
        let mut tt = Timetable::default();
        tt.set(Day::Fri, 1, ScheduleCell::lesson("체육", "2-1"));
        tt.set(Day::Mon, 2, ScheduleCell::lesson("체육", "2-2"));
        tt.set(Day::Mon, 5, ScheduleCell::lesson("체육", "2-3"));

        let slots: Vec<_> = tt.assignments().map(|(slot, _)| slot.to_string()).collect();
        assert_eq!(slots, vec!["mon-2", "mon-5", "fri-1"]);
    }

    #[test]
    fn test_document_wire_shape() {
        let mut tt = Timetable::empty(2);
        tt.set(Day::Mon, 2, ScheduleCell::lesson("도덕", "1-2"));

        let json = serde_json::to_value(&tt).unwrap();
        assert_eq!(
            json["mon"],
            serde_json::json!({
                "1": null,
                "2": { "subject": "도덕", "className": "1-2" },
            })
        );
        assert_eq!(json["fri"], serde_json::json!({ "1": null, "2": null }));

        let back: Timetable = serde_json::from_value(json).unwrap();
        assert_eq!(back, tt);
    }
}
