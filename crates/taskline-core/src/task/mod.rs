//! Task model: the closed set of task kinds tracked by Taskline.
//!
//! Every task carries a description, completion flag, priority and optional
//! comment. The kind decides the time shape: plain todos have none, deadline
//! tasks a single due date-time, events and within-period todos a start/end
//! interval, recurring events a concrete occurrence resolved from a weekday
//! anchor at creation time.

pub mod recurrence;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ValidationError};

/// Task priority. Low-priority commitments are surfaced as reschedule
/// candidates when the scheduler finds no free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(ParseError::InvalidPriority(other.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time shape of a task.
///
/// Interval-bearing kinds (Event, TodoWithinPeriod, RecurringEvent) uphold
/// `start <= end`; construction goes through the [`Task`] constructors which
/// validate the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    /// Plain to-do without dates.
    Todo,
    /// Task with a single due date-time.
    Deadline { due: NaiveDateTime },
    /// Fixed appointment occupying a start-end interval.
    Event {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Flexible task to be done somewhere within a start-end window.
    TodoWithinPeriod {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Event resolved from a weekday anchor; contributes exactly one
    /// concrete occurrence (no series expansion).
    RecurringEvent {
        start: NaiveDateTime,
        end: NaiveDateTime,
        mod_code: Option<String>,
    },
}

impl TaskKind {
    /// Single-letter tag used in list rendering.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Todo => "T",
            Self::Deadline { .. } => "D",
            Self::Event { .. } => "E",
            Self::TodoWithinPeriod { .. } => "P",
            Self::RecurringEvent { .. } => "R",
        }
    }
}

/// A unit of work or commitment tracked by the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What the task is about
    pub description: String,
    /// Whether the task is completed
    #[serde(default)]
    pub completed: bool,
    /// Task priority (defaults to medium)
    #[serde(default)]
    pub priority: Priority,
    /// Optional free-form comment
    #[serde(default)]
    pub comment: Option<String>,
    /// Time shape
    pub kind: TaskKind,
}

impl Task {
    /// Create a plain to-do.
    pub fn todo(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
            priority: Priority::default(),
            comment: None,
            kind: TaskKind::Todo,
        }
    }

    /// Create a deadline task due at `due`.
    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Self {
        Self {
            kind: TaskKind::Deadline { due },
            ..Self::todo(description)
        }
    }

    /// Create a fixed event.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeRange`] if `start > end`.
    pub fn event(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        check_interval(start, end)?;
        Ok(Self {
            kind: TaskKind::Event { start, end },
            ..Self::todo(description)
        })
    }

    /// Create a flexible todo-within-period task.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeRange`] if `start > end`.
    pub fn todo_within_period(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        check_interval(start, end)?;
        Ok(Self {
            kind: TaskKind::TodoWithinPeriod { start, end },
            ..Self::todo(description)
        })
    }

    /// Create a recurring event anchored on a weekday.
    ///
    /// The anchor resolves to the next date falling on `weekday` (today
    /// counts when the weekdays match); the occurrence runs from
    /// `start_time` to `end_time` on that date.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeRange`] if the times are
    /// reversed.
    pub fn recurring_event(
        description: impl Into<String>,
        today: NaiveDate,
        weekday: chrono::Weekday,
        start_time: chrono::NaiveTime,
        end_time: chrono::NaiveTime,
        mod_code: Option<String>,
    ) -> Result<Self, ValidationError> {
        let date = recurrence::next_weekday_occurrence(today, weekday);
        let start = date.and_time(start_time);
        let end = date.and_time(end_time);
        check_interval(start, end)?;
        Ok(Self {
            kind: TaskKind::RecurringEvent {
                start,
                end,
                mod_code,
            },
            ..Self::todo(description)
        })
    }

    /// Set the priority (builder style).
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the comment (builder style).
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// The occupied interval, for interval-bearing kinds.
    ///
    /// Deadline tasks have a due moment but occupy no interval, so they
    /// return `None` along with plain todos.
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match self.kind {
            TaskKind::Event { start, end }
            | TaskKind::TodoWithinPeriod { start, end }
            | TaskKind::RecurringEvent { start, end, .. } => Some((start, end)),
            TaskKind::Todo | TaskKind::Deadline { .. } => None,
        }
    }

    /// Status icon used in list rendering.
    pub fn status_icon(&self) -> &'static str {
        if self.completed {
            "\u{2713}"
        } else {
            "\u{2718}"
        }
    }
}

fn check_interval(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), ValidationError> {
    if start > end {
        return Err(ValidationError::InvalidTimeRange { start, end });
    }
    Ok(())
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const FMT: &str = "%d/%m/%Y %H%M";
        write!(
            f,
            "[{}][{}] {}",
            self.kind.tag(),
            self.status_icon(),
            self.description
        )?;
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due } => write!(f, " (by: {})", due.format(FMT))?,
            TaskKind::Event { start, end }
            | TaskKind::TodoWithinPeriod { start, end }
            | TaskKind::RecurringEvent { start, end, .. } => {
                write!(f, " (from: {} to: {})", start.format(FMT), end.format(FMT))?
            }
        }
        if let Some(comment) = &self.comment {
            write!(f, " -- {comment}")?;
        }
        Ok(())
    }
}
