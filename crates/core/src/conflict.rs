//! Timetable conflict detection
//!
//! Pure scan over a set of teacher schedules: index every placed lesson by
//! its time slot, then look for a class taught twice at once or a teacher
//! standing in two rooms at once. No side effects, no failure modes; the
//! report is recomputed from scratch on every call, which is cheap at school
//! scale (tens of teachers, five days, a handful of periods).

use std::collections::BTreeMap;

use chrono::{Datelike, Utc};

use crate::models::{
    Conflict, ConflictKind, ConflictMap, Schedule, ScheduleKind, Semester, Severity, TimeSlot,
    Timetable,
};

/// Which stored schedules a simulation replaces
///
/// The admin editor previews an unsaved timetable by substituting it for the
/// teacher's stored schedules. `AllTerms` drops every record the teacher
/// owns; `Term` restricts the drop to one (semester, year), which is the
/// right scope when several of the teacher's records coexist in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceScope {
    AllTerms,
    Term { semester: Semester, year: i32 },
}

/// A what-if substitution of one teacher's timetable
#[derive(Debug, Clone)]
pub struct Simulation {
    pub teacher_id: String,
    pub timetable: Timetable,
    pub scope: ReplaceScope,
}

impl Simulation {
    fn replaces(&self, schedule: &Schedule) -> bool {
        if schedule.target_id != self.teacher_id {
            return false;
        }
        match self.scope {
            ReplaceScope::AllTerms => true,
            ReplaceScope::Term { semester, year } => {
                schedule.semester == semester && schedule.year == year
            }
        }
    }

    /// Synthetic, never-persisted record wrapping the proposed timetable
    fn synthetic_schedule(&self) -> Schedule {
        let (semester, year) = match self.scope {
            ReplaceScope::AllTerms => (Semester::YearRound, Utc::now().year()),
            ReplaceScope::Term { semester, year } => (semester, year),
        };
        let mut schedule = Schedule::new(
            ScheduleKind::Teacher,
            self.teacher_id.clone(),
            semester,
            year,
            self.timetable.clone(),
            uuid::Uuid::nil(),
        );
        schedule.id = format!("temp-{}", self.teacher_id);
        schedule
    }
}

/// One placed lesson, read out of a timetable cell while scanning
#[derive(Debug, Clone, Copy)]
struct Assignment<'a> {
    teacher_id: &'a str,
    class_name: &'a str,
    subject: &'a str,
}

/// Detect every scheduling conflict across the given schedules
///
/// Only teacher-kind schedules contribute assignments; class-kind records
/// are denormalized views and are ignored. With a simulation, the matching
/// stored schedules are discarded and a single synthetic record takes their
/// place, so callers can preview an edit without persisting anything.
///
/// Deterministic: identical inputs produce an identical map regardless of
/// input order.
pub fn detect_conflicts(schedules: &[Schedule], simulation: Option<&Simulation>) -> ConflictMap {
    let synthetic = simulation.map(Simulation::synthetic_schedule);

    let mut working: Vec<&Schedule> = schedules
        .iter()
        .filter(|s| simulation.is_none_or(|sim| !sim.replaces(s)))
        .collect();
    if let Some(schedule) = synthetic.as_ref() {
        working.push(schedule);
    }

    let index = build_slot_index(&working);

    let mut map = ConflictMap::new();
    for (slot, assignments) in &index {
        let mut found = class_conflicts(*slot, assignments);
        found.extend(teacher_conflicts(*slot, assignments));
        map.insert(*slot, found);
    }

    tracing::debug!(
        schedules = working.len(),
        occupied_slots = index.len(),
        conflicts = map.conflict_count(),
        "conflict scan complete"
    );
    map
}

/// Every assignment made by any teacher, grouped by time slot
fn build_slot_index<'a>(schedules: &[&'a Schedule]) -> BTreeMap<TimeSlot, Vec<Assignment<'a>>> {
    let mut index: BTreeMap<TimeSlot, Vec<Assignment<'a>>> = BTreeMap::new();

    for schedule in schedules {
        if !schedule.is_teacher() {
            continue;
        }
        for (slot, cell) in schedule.timetable.assignments() {
            // a lesson with no target class cannot conflict with anything
            let Some(class_name) = cell.class_name.as_deref().filter(|c| !c.is_empty()) else {
                continue;
            };
            index.entry(slot).or_default().push(Assignment {
                teacher_id: &schedule.target_id,
                class_name,
                subject: &cell.subject,
            });
        }
    }

    index
}

/// A class receiving more than one simultaneous lesson
fn class_conflicts(slot: TimeSlot, assignments: &[Assignment<'_>]) -> Vec<Conflict> {
    let mut by_class: BTreeMap<&str, Vec<&Assignment<'_>>> = BTreeMap::new();
    for assignment in assignments {
        by_class.entry(assignment.class_name).or_default().push(assignment);
    }

    by_class
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|(class_name, group)| {
            let teachers: Vec<String> = group
                .iter()
                .map(|a| format!("{} ({})", a.teacher_id, a.subject))
                .collect();
            Conflict {
                kind: ConflictKind::Class,
                severity: Severity::Error,
                day: slot.day,
                period: slot.period,
                message: format!(
                    "class {class_name} is double-booked: {}",
                    teachers.join(", ")
                ),
                affected_entities: group.iter().map(|a| a.teacher_id.to_string()).collect(),
            }
        })
        .collect()
}

/// A teacher assigned to more than one class at the same slot
fn teacher_conflicts(slot: TimeSlot, assignments: &[Assignment<'_>]) -> Vec<Conflict> {
    let mut by_teacher: BTreeMap<&str, Vec<&Assignment<'_>>> = BTreeMap::new();
    for assignment in assignments {
        by_teacher.entry(assignment.teacher_id).or_default().push(assignment);
    }

    by_teacher
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|(teacher_id, group)| {
            let classes: Vec<String> =
                group.iter().map(|a| a.class_name.to_string()).collect();
            Conflict {
                kind: ConflictKind::Teacher,
                severity: Severity::Error,
                day: slot.day,
                period: slot.period,
                message: format!(
                    "teacher {teacher_id} is assigned to {} classes at once: {}",
                    classes.len(),
                    classes.join(", ")
                ),
                affected_entities: classes,
            }
        })
        .collect()
}
