//! School days, periods, and time-slot keys
//!
//! A [`TimeSlot`] is the finest unit of time the portal reasons about.
//! Slots are never persisted as entities; they are keys derived on demand
//! and formatted as `"<day>-<period>"` (e.g. `"mon-1"`), the same shape the
//! schedule documents use.

use serde::{de::Visitor, Deserialize, Serialize};

use crate::error::Error;

/// Lesson period within a school day. Positive, typically 1-6.
pub type Period = u8;

/// Weekday of the teaching week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All teaching days in week order
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Key used in schedule documents and slot keys
    pub fn key(&self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
        }
    }

    /// Korean single-character label for display
    pub fn label(&self) -> &'static str {
        match self {
            Day::Mon => "월",
            Day::Tue => "화",
            Day::Wed => "수",
            Day::Thu => "목",
            Day::Fri => "금",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" => Ok(Day::Mon),
            "tue" => Ok(Day::Tue),
            "wed" => Ok(Day::Wed),
            "thu" => Ok(Day::Thu),
            "fri" => Ok(Day::Fri),
            other => Err(Error::InvalidSlot(other.to_string())),
        }
    }
}

/// A (day, period) pair
///
/// Ordered by day, then period, so a `BTreeMap` keyed by slots iterates in
/// week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    pub day: Day,
    pub period: Period,
}

impl TimeSlot {
    pub fn new(day: Day, period: Period) -> Self {
        Self { day, period }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.day, self.period)
    }
}

impl std::str::FromStr for TimeSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, period) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidSlot(s.to_string()))?;
        let day = day.parse::<Day>()?;
        let period = period
            .parse::<Period>()
            .map_err(|_| Error::InvalidSlot(s.to_string()))?;
        if period == 0 {
            return Err(Error::InvalidSlot(s.to_string()));
        }
        Ok(TimeSlot { day, period })
    }
}

impl Serialize for TimeSlot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Custom [`Deserialize`] so slots can be read back as JSON map keys
impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeSlotVisitor;

        impl Visitor<'_> for TimeSlotVisitor {
            type Value = TimeSlot;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a slot key like \"mon-1\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeSlotVisitor)
    }
}
