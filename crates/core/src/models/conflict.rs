//! Conflict report types
//!
//! Conflicts are computed, never stored: the detector recomputes the whole
//! report on every relevant change and the UI consumes it by slot lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::day::{Day, Period, TimeSlot};

/// What kind of double-booking was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    /// One class receiving two or more simultaneous lessons
    Class,
    /// One teacher assigned to two or more classes at once
    Teacher,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictKind::Class => f.write_str("class"),
            ConflictKind::Teacher => f.write_str("teacher"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A detected problem at one time slot
///
/// `affected_entities` lists teacher ids for a class conflict and class names
/// for a teacher conflict; a group of 3+ participants still yields one
/// conflict listing everyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub severity: Severity,
    pub day: Day,
    pub period: Period,
    pub message: String,
    pub affected_entities: Vec<String>,
}

impl Conflict {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.day, self.period)
    }
}

/// Conflicts grouped by time slot
///
/// A slot key is present if and only if at least one conflict exists there,
/// so an empty map is the "fully consistent" signal. Within a slot, class
/// conflicts come before teacher conflicts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConflictMap {
    slots: BTreeMap<TimeSlot, Vec<Conflict>>,
}

impl ConflictMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a slot's conflicts. Empty lists are dropped so the
    /// key-present-iff-conflicted invariant holds.
    pub(crate) fn insert(&mut self, slot: TimeSlot, conflicts: Vec<Conflict>) {
        if !conflicts.is_empty() {
            self.slots.insert(slot, conflicts);
        }
    }

    /// Conflicts at one slot, if any
    pub fn get(&self, slot: TimeSlot) -> Option<&[Conflict]> {
        self.slots.get(&slot).map(Vec::as_slice)
    }

    /// True iff any conflict exists anywhere
    pub fn has_conflicts(&self) -> bool {
        !self.slots.is_empty()
    }

    /// Total number of conflicts across all slots
    pub fn conflict_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Number of slots with at least one conflict
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots and their conflicts in week order
    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, &[Conflict])> {
        self.slots.iter().map(|(&slot, list)| (slot, list.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict(kind: ConflictKind, day: Day, period: Period) -> Conflict {
        Conflict {
            kind,
            severity: Severity::Error,
            day,
            period,
            message: String::new(),
            affected_entities: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn test_empty_list_not_inserted() {
        let mut map = ConflictMap::new();
        map.insert(TimeSlot::new(Day::Mon, 1), vec![]);
        assert!(!map.has_conflicts());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_count_sums_all_slots() {
        let mut map = ConflictMap::new();
        map.insert(
            TimeSlot::new(Day::Mon, 1),
            vec![
                conflict(ConflictKind::Class, Day::Mon, 1),
                conflict(ConflictKind::Teacher, Day::Mon, 1),
            ],
        );
        map.insert(
            TimeSlot::new(Day::Thu, 4),
            vec![conflict(ConflictKind::Class, Day::Thu, 4)],
        );
        assert!(map.has_conflicts());
        assert_eq!(map.len(), 2);
        assert_eq!(map.conflict_count(), 3);
    }

    #[test]
    fn test_wire_shape_is_slot_keyed_object() {
        let mut map = ConflictMap::new();
        map.insert(
            TimeSlot::new(Day::Mon, 2),
            vec![conflict(ConflictKind::Class, Day::Mon, 2)],
        );

        let json = serde_json::to_value(&map).unwrap();
        let entry = &json["mon-2"][0];
        assert_eq!(entry["type"], "class");
        assert_eq!(entry["severity"], "error");
        assert_eq!(entry["affectedEntities"], serde_json::json!(["a", "b"]));
    }
}
