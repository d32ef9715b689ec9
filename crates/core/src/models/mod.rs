//! Data models for Homeroom

mod conflict;
mod day;
mod schedule;
mod timetable;

pub use conflict::*;
pub use day::*;
pub use schedule::*;
pub use timetable::*;
