//! Persisted schedule records
//!
//! A [`Schedule`] is the named wrapper around one [`Timetable`], tagged with
//! its owner, semester, and year. Created the first time an admin edits a
//! teacher's timetable, mutated on every save, superseded rather than
//! deleted.

use chrono::{DateTime, Utc};
use serde::{de::Visitor, Deserialize, Serialize};
use uuid::Uuid;

use super::timetable::Timetable;
use crate::error::Error;

/// School term a schedule applies to
///
/// Most special teachers rotate per semester; a few (e.g. ethics) keep one
/// timetable across the whole year and are tagged [`Semester::YearRound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    First,
    Second,
    YearRound,
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::First => f.write_str("1"),
            Semester::Second => f.write_str("2"),
            Semester::YearRound => f.write_str("year"),
        }
    }
}

impl std::str::FromStr for Semester {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Semester::First),
            "2" => Ok(Semester::Second),
            "year" => Ok(Semester::YearRound),
            other => Err(Error::InvalidSemester(other.to_string())),
        }
    }
}

/// On the wire a semester is `1`, `2`, or the string `"year"`, matching the
/// portal documents.
impl Serialize for Semester {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Semester::First => serializer.serialize_u8(1),
            Semester::Second => serializer.serialize_u8(2),
            Semester::YearRound => serializer.serialize_str("year"),
        }
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SemesterVisitor;
        use serde::de::Error;

        impl Visitor<'_> for SemesterVisitor {
            type Value = Semester;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("1, 2, or \"year\"")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match v {
                    1 => Ok(Semester::First),
                    2 => Ok(Semester::Second),
                    other => Err(E::invalid_value(
                        serde::de::Unexpected::Unsigned(other),
                        &self,
                    )),
                }
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match v {
                    1 => Ok(Semester::First),
                    2 => Ok(Semester::Second),
                    other => Err(E::invalid_value(
                        serde::de::Unexpected::Signed(other),
                        &self,
                    )),
                }
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                if v == "year" {
                    Ok(Semester::YearRound)
                } else {
                    Err(E::invalid_value(serde::de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(SemesterVisitor)
    }
}

/// Whether a schedule is a teacher's own week or a denormalized class view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    Teacher,
    Class,
}

impl std::fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleKind::Teacher => f.write_str("teacher"),
            ScheduleKind::Class => f.write_str("class"),
        }
    }
}

/// A named, persisted timetable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    /// Teacher id or class id, depending on `kind`
    pub target_id: String,
    pub semester: Semester,
    pub year: i32,
    pub timetable: Timetable,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Uuid,
}

impl Schedule {
    pub fn new(
        kind: ScheduleKind,
        target_id: impl Into<String>,
        semester: Semester,
        year: i32,
        timetable: Timetable,
        updated_by: Uuid,
    ) -> Self {
        let target_id = target_id.into();
        Self {
            id: Self::doc_id(kind, &target_id, semester, year),
            kind,
            target_id,
            semester,
            year,
            timetable,
            updated_at: Utc::now(),
            updated_by,
        }
    }

    /// Deterministic document id, one record per (kind, target, year, semester)
    pub fn doc_id(kind: ScheduleKind, target_id: &str, semester: Semester, year: i32) -> String {
        format!("{kind}_{target_id}_{year}_{semester}")
    }

    pub fn is_teacher(&self) -> bool {
        self.kind == ScheduleKind::Teacher
    }
}
