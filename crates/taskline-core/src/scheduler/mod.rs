//! Free-slot scheduling engine.
//!
//! Given a requested duration in whole hours and a deadline (explicit, or a
//! fixed 30-day horizon), scans the sorted commitment sequence for gaps wide
//! enough to fit a new activity. When no gap is wide enough, the outcome
//! instead carries the low-priority commitments worth rescheduling.
//!
//! Each invocation is a pure function of (now, duration, deadline,
//! commitments): `now` is read once at entry and all scan state lives in a
//! per-call context, so calls never interfere with one another.

use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::task::Priority;
use crate::tasklist::{Commitment, TaskList};

/// Search hard limit: how far ahead the engine looks when the caller gives
/// no deadline.
pub const SEARCH_HARD_LIMIT_DAYS: i64 = 30;

/// How the deadline bounding the search was obtained. Only message text
/// differs between the two, never the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineKind {
    /// Caller-supplied deadline
    Explicit,
    /// Fixed 30-day horizon from now
    Horizon,
}

/// A contiguous free span wide enough for the requested duration.
///
/// The variants keep the anchors the formatter needs to say "now until t",
/// "t until t" or "t until deadline" without re-deriving dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "window", rename_all = "snake_case")]
pub enum FreeWindow {
    /// From now until the first commitment starts.
    FromNow { until: NaiveDateTime },
    /// Between two adjacent commitments.
    Between {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// From the last commitment's end until the deadline.
    UntilDeadline {
        start: NaiveDateTime,
        deadline: NaiveDateTime,
    },
}

impl FreeWindow {
    /// Window bounds as a (start, end) pair, taking `now` for the
    /// open-on-the-left variant.
    pub fn bounds(&self, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        match *self {
            FreeWindow::FromNow { until } => (now, until),
            FreeWindow::Between { start, end } => (start, end),
            FreeWindow::UntilDeadline { start, deadline } => (start, deadline),
        }
    }
}

/// Structured scheduling result.
///
/// Every outcome is ordinary, including the infeasible and no-free-slot
/// cases; rendering to user text is a separate concern (see
/// [`crate::render`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ScheduleOutcome {
    /// The duration exceeds the whole hours between now and the deadline.
    NotEnoughTime { kind: DeadlineKind },
    /// No commitment starts before the deadline; the whole window is free.
    FreeAnytime { kind: DeadlineKind },
    /// At least one sufficient gap was found.
    WindowsFound { windows: Vec<FreeWindow> },
    /// No sufficient gap; `suggestions` lists each low-priority commitment
    /// (by description) exactly once, in scan order.
    NoFreeSlot { suggestions: Vec<String> },
}

/// Find free slots for `duration_hours` by a caller-supplied deadline.
pub fn schedule_by_deadline(
    tasks: &TaskList,
    duration_hours: i64,
    deadline: NaiveDateTime,
) -> ScheduleOutcome {
    let now = Local::now().naive_local();
    schedule_at(now, tasks, duration_hours, deadline, DeadlineKind::Explicit)
}

/// Find free slots for `duration_hours` within the fixed 30-day horizon.
pub fn schedule_within_horizon(tasks: &TaskList, duration_hours: i64) -> ScheduleOutcome {
    let now = Local::now().naive_local();
    let deadline = now + Duration::days(SEARCH_HARD_LIMIT_DAYS);
    schedule_at(now, tasks, duration_hours, deadline, DeadlineKind::Horizon)
}

/// The shared algorithm behind both entry points, with `now` pinned by the
/// caller so the whole computation is self-consistent and testable.
///
/// Preconditions (enforced by the calling layer): `duration_hours > 0` and
/// `deadline` is a valid date-time.
pub fn schedule_at(
    now: NaiveDateTime,
    tasks: &TaskList,
    duration_hours: i64,
    deadline: NaiveDateTime,
    kind: DeadlineKind,
) -> ScheduleOutcome {
    if duration_hours > whole_hours(now, deadline) {
        return ScheduleOutcome::NotEnoughTime { kind };
    }

    let commitments = tasks.commitments_before(deadline);
    if commitments.is_empty() {
        return ScheduleOutcome::FreeAnytime { kind };
    }

    let mut scan = GapScan::new(duration_hours);
    scan.leading_gap(now, &commitments[0]);
    for pair in commitments.windows(2) {
        scan.interior_gap(&pair[0], &pair[1]);
    }
    scan.trailing_gap(commitments.last().expect("sequence is non-empty"), deadline);
    scan.into_outcome()
}

/// Whole hours between two instants, truncating any fractional hour
/// toward zero.
fn whole_hours(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_hours()
}

/// Per-call scan state: the windows found so far and the low-priority
/// reschedule candidates, accumulated across the three gap phases.
struct GapScan {
    duration_hours: i64,
    windows: Vec<FreeWindow>,
    suggestions: Vec<String>,
    found: bool,
}

impl GapScan {
    fn new(duration_hours: i64) -> Self {
        Self {
            duration_hours,
            windows: Vec::new(),
            suggestions: Vec::new(),
            found: false,
        }
    }

    /// A gap counts when it holds at least the requested duration
    /// (inclusive boundary).
    fn sufficient(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        whole_hours(from, to) >= self.duration_hours
    }

    /// Gap from now until the first commitment. A commitment already in
    /// progress (or past) leaves no leading gap.
    fn leading_gap(&mut self, now: NaiveDateTime, first: &Commitment) {
        if first.start < now {
            return;
        }
        if self.sufficient(now, first.start) {
            self.windows.push(FreeWindow::FromNow { until: first.start });
            self.found = true;
        }
    }

    /// Gap between two adjacent commitments. The earlier member is also the
    /// point where its low-priority suggestion is collected, so each
    /// commitment is considered exactly once (the last one is handled by
    /// [`Self::trailing_gap`]).
    fn interior_gap(&mut self, current: &Commitment, next: &Commitment) {
        self.suggest_if_low(current);
        if self.sufficient(current.end, next.start) {
            self.windows.push(FreeWindow::Between {
                start: current.end,
                end: next.start,
            });
            self.found = true;
        }
    }

    /// Gap from the last commitment until the deadline. A commitment
    /// overrunning the deadline consumes the remaining time entirely.
    fn trailing_gap(&mut self, last: &Commitment, deadline: NaiveDateTime) {
        self.suggest_if_low(last);
        if last.end > deadline {
            return;
        }
        if self.sufficient(last.end, deadline) {
            self.windows.push(FreeWindow::UntilDeadline {
                start: last.end,
                deadline,
            });
            self.found = true;
        }
    }

    fn suggest_if_low(&mut self, commitment: &Commitment) {
        if commitment.priority == Priority::Low {
            self.suggestions.push(commitment.description.clone());
        }
    }

    /// Compose the result: a usable slot suppresses the suggestions, no
    /// slot surfaces them.
    fn into_outcome(self) -> ScheduleOutcome {
        if self.found {
            ScheduleOutcome::WindowsFound {
                windows: self.windows,
            }
        } else {
            ScheduleOutcome::NoFreeSlot {
                suggestions: self.suggestions,
            }
        }
    }
}
