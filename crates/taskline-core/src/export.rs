//! iCalendar export of the dated tasks.
//!
//! Deadline tasks become point events (DTSTART only); events, within-period
//! todos and recurring occurrences carry DTSTART/DTEND. Plain todos have no
//! dates and are skipped. Date-times are exported as floating local values,
//! matching the naive date-times used throughout.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::StorageError;
use crate::task::TaskKind;
use crate::tasklist::TaskList;

const ICS_STAMP: &str = "%Y%m%dT%H%M%S";

/// Write `tasks` to `path` as an ICS calendar and return the number of
/// exported events.
pub fn export_ics(tasks: &TaskList, path: &Path) -> Result<usize, StorageError> {
    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR\r\n");
    out.push_str("PRODID:-//Taskline//Taskline 0.1//EN\r\n");
    out.push_str("VERSION:2.0\r\n");
    out.push_str("CALSCALE:GREGORIAN\r\n");

    let mut count = 0;
    for task in tasks.iter() {
        let written = match task.kind {
            TaskKind::Deadline { due } => {
                push_vevent(&mut out, &task.description, task.comment.as_deref(), due, None);
                true
            }
            TaskKind::Event { start, end }
            | TaskKind::TodoWithinPeriod { start, end }
            | TaskKind::RecurringEvent { start, end, .. } => {
                push_vevent(
                    &mut out,
                    &task.description,
                    task.comment.as_deref(),
                    start,
                    Some(end),
                );
                true
            }
            TaskKind::Todo => false,
        };
        if written {
            count += 1;
        }
    }

    out.push_str("END:VCALENDAR\r\n");
    fs::write(path, out).map_err(|source| StorageError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count)
}

fn push_vevent(
    out: &mut String,
    summary: &str,
    comment: Option<&str>,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
) {
    out.push_str("BEGIN:VEVENT\r\n");
    out.push_str(&format!("UID:{}\r\n", uuid::Uuid::new_v4()));
    out.push_str(&format!("DTSTART:{}\r\n", start.format(ICS_STAMP)));
    if let Some(end) = end {
        out.push_str(&format!("DTEND:{}\r\n", end.format(ICS_STAMP)));
    }
    out.push_str(&format!("SUMMARY:{}\r\n", escape_text(summary)));
    if let Some(comment) = comment {
        out.push_str(&format!("DESCRIPTION:{}\r\n", escape_text(comment)));
    }
    out.push_str("END:VEVENT\r\n");
}

/// Escape per RFC 5545 TEXT rules.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_export_counts_only_dated_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.ics");

        let mut tasks = TaskList::new();
        tasks.add(Task::todo("undated"));
        tasks.add(Task::deadline("submit report", dt(3, 17)));
        tasks.add(Task::event("standup", dt(2, 9), dt(2, 10)).unwrap());

        let count = export_ics(&tasks, &path).unwrap();
        assert_eq!(count, 2);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("BEGIN:VCALENDAR"));
        assert!(text.contains("DTSTART:20240503T170000"));
        assert!(text.contains("DTEND:20240502T100000"));
        assert!(text.contains("SUMMARY:standup"));
        assert!(!text.contains("undated"));
    }

    #[test]
    fn test_comment_exported_as_description() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.ics");

        let mut tasks = TaskList::new();
        tasks.add(
            Task::event("review; notes", dt(2, 9), dt(2, 10))
                .unwrap()
                .with_comment("bring slides, laptop"),
        );

        export_ics(&tasks, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("SUMMARY:review\\; notes"));
        assert!(text.contains("DESCRIPTION:bring slides\\, laptop"));
    }
}
