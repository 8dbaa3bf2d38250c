//! User-facing rendering of scheduling outcomes.
//!
//! The engine returns structured results; this module is the only place
//! that turns them into text, so the engine stays free of presentation
//! concerns and independently testable.

use crate::scheduler::{DeadlineKind, FreeWindow, ScheduleOutcome};

const SCHEDULE_ANYTIME_BY_DEADLINE: &str =
    "You can schedule this task from now till the deadline.\n";
const SCHEDULE_ANYTIME: &str = "You can schedule this task anytime.\n";
const NO_FREE_SLOTS: &str =
    "There is no free slot to insert the task. Consider freeing up your schedule.\n";
const NOT_ENOUGH_TIME: &str =
    "The duration is too long to be done within now and the deadline.\n";
const NOT_ENOUGH_TIME_HARD_LIMIT: &str =
    "The duration is too long to be done within the next 30 days.\n";
const LOW_PRIORITY: &str =
    "Below are the list of low-priority event(s) that you can consider freeing up.\n";

/// Default date-time layout (`dd/MM/yyyy HHmm`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H%M";

/// Render a scheduling outcome with the default date format.
pub fn render_outcome(outcome: &ScheduleOutcome) -> String {
    render_outcome_with(outcome, DEFAULT_DATE_FORMAT)
}

/// Render a scheduling outcome, formatting date-times with `date_format`.
pub fn render_outcome_with(outcome: &ScheduleOutcome, date_format: &str) -> String {
    match outcome {
        ScheduleOutcome::NotEnoughTime { kind } => match kind {
            DeadlineKind::Explicit => NOT_ENOUGH_TIME.to_string(),
            DeadlineKind::Horizon => NOT_ENOUGH_TIME_HARD_LIMIT.to_string(),
        },
        ScheduleOutcome::FreeAnytime { kind } => match kind {
            DeadlineKind::Explicit => SCHEDULE_ANYTIME_BY_DEADLINE.to_string(),
            DeadlineKind::Horizon => SCHEDULE_ANYTIME.to_string(),
        },
        ScheduleOutcome::WindowsFound { windows } => {
            let mut out = String::new();
            for window in windows {
                out.push_str(&render_window(window, date_format));
            }
            out
        }
        ScheduleOutcome::NoFreeSlot { suggestions } => {
            let mut out = String::from(NO_FREE_SLOTS);
            out.push_str(LOW_PRIORITY);
            for description in suggestions {
                out.push_str(description);
                out.push('\n');
            }
            out
        }
    }
}

fn render_window(window: &FreeWindow, date_format: &str) -> String {
    match window {
        FreeWindow::FromNow { until } => format!(
            "You can schedule this task from now till {}\n",
            until.format(date_format)
        ),
        FreeWindow::Between { start, end } => format!(
            "You can schedule this task from {} till {}\n",
            start.format(date_format),
            end.format(date_format)
        ),
        FreeWindow::UntilDeadline { start, deadline } => format!(
            "You can schedule this task from {} till {}\n",
            start.format(date_format),
            deadline.format(date_format)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_render_anytime_variants() {
        assert_eq!(
            render_outcome(&ScheduleOutcome::FreeAnytime {
                kind: DeadlineKind::Horizon
            }),
            SCHEDULE_ANYTIME
        );
        assert_eq!(
            render_outcome(&ScheduleOutcome::FreeAnytime {
                kind: DeadlineKind::Explicit
            }),
            SCHEDULE_ANYTIME_BY_DEADLINE
        );
    }

    #[test]
    fn test_render_windows() {
        let outcome = ScheduleOutcome::WindowsFound {
            windows: vec![
                FreeWindow::FromNow { until: dt(2, 9) },
                FreeWindow::Between {
                    start: dt(2, 11),
                    end: dt(2, 15),
                },
            ],
        };
        let text = render_outcome(&outcome);
        assert_eq!(
            text,
            "You can schedule this task from now till 02/05/2024 0900\n\
             You can schedule this task from 02/05/2024 1100 till 02/05/2024 1500\n"
        );
    }

    #[test]
    fn test_render_no_free_slot_concatenates_suggestions() {
        let outcome = ScheduleOutcome::NoFreeSlot {
            suggestions: vec!["gym".to_string(), "errands".to_string()],
        };
        let text = render_outcome(&outcome);
        assert!(text.starts_with(NO_FREE_SLOTS));
        assert!(text.contains(LOW_PRIORITY));
        assert!(text.ends_with("gym\nerrands\n"));
    }

    #[test]
    fn test_render_not_enough_time_variants() {
        assert_eq!(
            render_outcome(&ScheduleOutcome::NotEnoughTime {
                kind: DeadlineKind::Horizon
            }),
            NOT_ENOUGH_TIME_HARD_LIMIT
        );
    }
}
