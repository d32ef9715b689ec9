//! School roster configuration
//!
//! Which special teachers exist, which subject and grades each one covers,
//! and how many classes each grade has. Shipped with the default elementary
//! school setup; serde-derived so a school can load its own from
//! configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Semester;

/// A subject teacher who rotates across homerooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialTeacher {
    /// Portal id, e.g. "영어1"
    pub id: String,
    /// Subject taught, e.g. "영어"
    pub subject: String,
    pub weekly_hours: u8,
    /// Grades this teacher covers
    pub target_grades: Vec<u8>,
}

/// The school's teacher and class layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub teachers: Vec<SpecialTeacher>,
    /// Classes per grade, keyed by grade number
    pub grade_classes: BTreeMap<u8, u8>,
    /// Teachers whose timetable does not rotate per semester
    pub year_round: Vec<String>,
}

impl Roster {
    pub fn teacher(&self, id: &str) -> Option<&SpecialTeacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    pub fn teacher_ids(&self) -> impl Iterator<Item = &str> {
        self.teachers.iter().map(|t| t.id.as_str())
    }

    pub fn by_subject(&self, subject: &str) -> Vec<&SpecialTeacher> {
        self.teachers.iter().filter(|t| t.subject == subject).collect()
    }

    pub fn subject_of(&self, teacher_id: &str) -> Option<&str> {
        self.teacher(teacher_id).map(|t| t.subject.as_str())
    }

    /// Class ids for the given grades, e.g. `[1, 3]` -> `1-1 .. 1-4, 3-1 .. 3-6`
    pub fn class_ids(&self, grades: &[u8]) -> Vec<String> {
        let mut classes = Vec::new();
        for grade in grades {
            let count = self.grade_classes.get(grade).copied().unwrap_or(0);
            for n in 1..=count {
                classes.push(format!("{grade}-{n}"));
            }
        }
        classes
    }

    /// All class ids a teacher can be assigned to
    pub fn target_classes(&self, teacher_id: &str) -> Vec<String> {
        match self.teacher(teacher_id) {
            Some(t) => self.class_ids(&t.target_grades),
            None => Vec::new(),
        }
    }

    pub fn is_year_round(&self, teacher_id: &str) -> bool {
        self.year_round.iter().any(|id| id == teacher_id)
    }

    /// The semester tag a teacher's schedules carry, if fixed by the roster
    pub fn semester_type(&self, teacher_id: &str) -> Option<Semester> {
        self.is_year_round(teacher_id).then_some(Semester::YearRound)
    }
}

impl Default for Roster {
    fn default() -> Self {
        let teacher = |id: &str, subject: &str, hours: u8, grades: &[u8]| SpecialTeacher {
            id: id.to_string(),
            subject: subject.to_string(),
            weekly_hours: hours,
            target_grades: grades.to_vec(),
        };

        Self {
            teachers: vec![
                teacher("영어1", "영어", 20, &[1, 2, 3, 4, 5, 6]),
                teacher("영전강", "영어", 20, &[1, 2, 3, 4, 5, 6]),
                teacher("영어2", "영어", 20, &[1, 2, 3, 4, 5, 6]),
                teacher("체육1", "체육", 18, &[1, 2, 3, 4, 5, 6]),
                teacher("체육2", "체육", 22, &[1, 2, 3, 4, 5, 6]),
                teacher("체육3", "체육", 22, &[1, 2, 3, 4, 5, 6]),
                teacher("음악", "음악", 18, &[1, 2, 3, 4, 5, 6]),
                teacher("도덕1", "도덕", 16, &[1, 3, 5]),
                teacher("도덕2", "도덕", 16, &[2, 4, 6]),
            ],
            grade_classes: BTreeMap::from_iter([(1, 4), (2, 4), (3, 6), (4, 6), (5, 6), (6, 6)]),
            year_round: vec!["도덕1".to_string(), "도덕2".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_has_nine_teachers() {
        let roster = Roster::default();
        assert_eq!(roster.teachers.len(), 9);
        assert_eq!(roster.by_subject("영어").len(), 3);
        assert_eq!(roster.subject_of("음악"), Some("음악"));
        assert_eq!(roster.subject_of("담임"), None);
    }

    #[test]
    fn test_class_id_generation() {
        let roster = Roster::default();
        let classes = roster.class_ids(&[1, 3]);
        // grade 1 has 4 classes, grade 3 has 6
        assert_eq!(classes.len(), 10);
        assert_eq!(classes.first().map(String::as_str), Some("1-1"));
        assert_eq!(classes.last().map(String::as_str), Some("3-6"));
    }

    #[test]
    fn test_target_classes_for_odd_grade_ethics() {
        let roster = Roster::default();
        let classes = roster.target_classes("도덕1");
        // grades 1 (4 classes), 3 and 5 (6 each)
        assert_eq!(classes.len(), 16);
        assert!(classes.contains(&"5-6".to_string()));
        assert!(!classes.contains(&"2-1".to_string()));

        assert!(roster.target_classes("없는교사").is_empty());
    }

    #[test]
    fn test_year_round_tagging() {
        let roster = Roster::default();
        assert!(roster.is_year_round("도덕1"));
        assert!(!roster.is_year_round("영어1"));
        assert_eq!(roster.semester_type("도덕2"), Some(Semester::YearRound));
        assert_eq!(roster.semester_type("체육1"), None);
    }
}
