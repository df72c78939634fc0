//! Calendar data source for the schedule tool

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single calendar entry. Identity is title + day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub day: String,
    pub location: String,
    pub instructor: String,
}

impl CalendarEvent {
    /// Renders the fixed human-readable line for this event.
    pub fn describe(&self) -> String {
        format!(
            "{} ({}, {}-{}) at {} with {}",
            self.title, self.day, self.start_time, self.end_time, self.location, self.instructor
        )
    }
}

/// Read-only source of calendar events.
///
/// The schedule tool only reads from the source, so a real calendar
/// integration can be substituted without touching the matching logic.
pub trait CalendarSource: Send + Sync {
    fn events(&self) -> &[CalendarEvent];
}

/// Fixed in-memory calendar, standing in for a real calendar integration.
pub struct StaticCalendar {
    events: Vec<CalendarEvent>,
}

fn entry(
    title: &str,
    start_time: &str,
    end_time: &str,
    day: &str,
    location: &str,
    instructor: &str,
) -> CalendarEvent {
    CalendarEvent {
        title: title.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        day: day.to_string(),
        location: location.to_string(),
        instructor: instructor.to_string(),
    }
}

impl StaticCalendar {
    /// The fixed semester schedule: 7 records.
    pub fn semester_schedule() -> Self {
        Self {
            events: vec![
                entry(
                    "Deep Learning Lecture",
                    "08:50",
                    "10:20",
                    "Monday",
                    "Room 101",
                    "Dr. Smith",
                ),
                entry(
                    "Agentic AI Lecture",
                    "15:00",
                    "16:30",
                    "Monday",
                    "Room 203",
                    "Prof. Johnson",
                ),
                entry(
                    "Machine Learning Lab",
                    "13:00",
                    "15:00",
                    "Wednesday",
                    "Lab 3",
                    "Dr. Brown",
                ),
                entry(
                    "Natural Language Processing",
                    "11:00",
                    "12:30",
                    "Friday",
                    "Room 105",
                    "Prof. Davis",
                ),
                entry(
                    "Agentic AI Project Report Submission",
                    "10:00",
                    "11:00",
                    "Saturday",
                    "Online",
                    "Prof. Johnson",
                ),
                entry(
                    "Deep Learning Assignment Review",
                    "14:00",
                    "15:30",
                    "Saturday",
                    "Virtual Classroom",
                    "Dr. Smith",
                ),
                entry(
                    "Research Paper Discussion",
                    "16:00",
                    "17:30",
                    "Saturday",
                    "Library Study Room",
                    "Dr. Brown",
                ),
            ],
        }
    }

    /// A calendar with the given events, for substituting test data.
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }
}

impl CalendarSource for StaticCalendar {
    fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

/// Wall-clock seam for the schedule tool.
pub trait Clock: Send + Sync {
    /// Returns the current weekday name ("Monday") and HH:MM time ("08:45").
    fn now(&self) -> (String, String);
}

/// System clock using local time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> (String, String) {
        let now = Local::now();
        (now.format("%A").to_string(), now.format("%H:%M").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_schedule_has_seven_entries() {
        let calendar = StaticCalendar::semester_schedule();
        assert_eq!(calendar.events().len(), 7);
    }

    #[test]
    fn test_describe_format() {
        let event = entry(
            "Deep Learning Lecture",
            "08:50",
            "10:20",
            "Monday",
            "Room 101",
            "Dr. Smith",
        );

        assert_eq!(
            event.describe(),
            "Deep Learning Lecture (Monday, 08:50-10:20) at Room 101 with Dr. Smith"
        );
    }

    #[test]
    fn test_system_clock_shapes() {
        let (day, time) = SystemClock.now();
        assert!([
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
            "Sunday"
        ]
        .contains(&day.as_str()));
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }
}
