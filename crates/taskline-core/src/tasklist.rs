//! Ordered task container and the commitment query feeding the scheduler.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::task::{Priority, Task, TaskKind};

/// A time-bound commitment extracted from the list for gap analysis.
///
/// Derived value: recomputed on every scheduling request, never stored, and
/// owns no references back into the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub description: String,
    pub priority: Priority,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Ordered container of tasks, insertion order preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task at the end.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Iterate over tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Get a task by zero-based index.
    pub fn get(&self, index: usize) -> Result<&Task, ValidationError> {
        self.tasks.get(index).ok_or(ValidationError::IndexOutOfBounds {
            index,
            len: self.tasks.len(),
        })
    }

    /// Remove and return the task at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Task, ValidationError> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Mark the task at `index` as completed.
    pub fn mark_done(&mut self, index: usize) -> Result<&Task, ValidationError> {
        self.check_index(index)?;
        self.tasks[index].completed = true;
        Ok(&self.tasks[index])
    }

    /// Set the priority of the task at `index`.
    pub fn set_priority(
        &mut self,
        index: usize,
        priority: Priority,
    ) -> Result<&Task, ValidationError> {
        self.check_index(index)?;
        self.tasks[index].priority = priority;
        Ok(&self.tasks[index])
    }

    /// Attach a comment to the task at `index`.
    pub fn set_comment(
        &mut self,
        index: usize,
        comment: impl Into<String>,
    ) -> Result<&Task, ValidationError> {
        self.check_index(index)?;
        self.tasks[index].comment = Some(comment.into());
        Ok(&self.tasks[index])
    }

    /// Tasks scheduled on a given date, sorted by their start (or due)
    /// moment. An interval-bearing task matches when the date falls inside
    /// its interval; a deadline task matches when it is due that day.
    pub fn tasks_on(&self, date: NaiveDate) -> Vec<&Task> {
        let mut scheduled: Vec<(&Task, NaiveDateTime)> = self
            .tasks
            .iter()
            .filter_map(|task| match task.kind {
                TaskKind::Deadline { due } if due.date() == date => Some((task, due)),
                _ => task.interval().and_then(|(start, end)| {
                    (start.date() <= date && date <= end.date()).then_some((task, start))
                }),
            })
            .collect();
        scheduled.sort_by_key(|(_, at)| *at);
        scheduled.into_iter().map(|(task, _)| task).collect()
    }

    /// Extract the time-bound commitments starting at or before `cutoff`,
    /// sorted ascending by start time.
    ///
    /// Items starting after the cutoff cannot affect the search window and
    /// are skipped. The sort is stable, so commitments sharing a start time
    /// keep their insertion order. An empty result is a normal outcome.
    pub fn commitments_before(&self, cutoff: NaiveDateTime) -> Vec<Commitment> {
        let mut commitments: Vec<Commitment> = self
            .tasks
            .iter()
            .filter_map(|task| {
                let (start, end) = task.interval()?;
                (start <= cutoff).then(|| Commitment {
                    description: task.description.clone(),
                    priority: task.priority,
                    start,
                    end,
                })
            })
            .collect();
        commitments.sort_by_key(|c| c.start);
        commitments
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.tasks.len() {
            return Err(ValidationError::IndexOutOfBounds {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_commitments_sorted_regardless_of_insertion_order() {
        let mut list = TaskList::new();
        list.add(Task::event("late", dt(3, 9), dt(3, 11)).unwrap());
        list.add(Task::todo("not timed"));
        list.add(Task::event("early", dt(1, 9), dt(1, 10)).unwrap());
        list.add(Task::todo_within_period("middle", dt(2, 8), dt(2, 12)).unwrap());

        let commitments = list.commitments_before(dt(10, 0));
        let order: Vec<&str> = commitments.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(order, vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_commitments_cutoff_is_inclusive() {
        let mut list = TaskList::new();
        list.add(Task::event("at cutoff", dt(5, 12), dt(5, 14)).unwrap());
        list.add(Task::event("past cutoff", dt(5, 13), dt(5, 14)).unwrap());

        let commitments = list.commitments_before(dt(5, 12));
        assert_eq!(commitments.len(), 1);
        assert_eq!(commitments[0].description, "at cutoff");
    }

    #[test]
    fn test_commitments_exclude_untimed_kinds() {
        let mut list = TaskList::new();
        list.add(Task::todo("todo"));
        list.add(Task::deadline("deadline", dt(2, 10)));

        assert!(list.commitments_before(dt(10, 0)).is_empty());
    }

    #[test]
    fn test_commitments_stable_on_equal_starts() {
        let mut list = TaskList::new();
        list.add(Task::event("first in", dt(1, 9), dt(1, 10)).unwrap());
        list.add(Task::event("second in", dt(1, 9), dt(1, 11)).unwrap());

        let commitments = list.commitments_before(dt(10, 0));
        assert_eq!(commitments[0].description, "first in");
        assert_eq!(commitments[1].description, "second in");
    }

    #[test]
    fn test_edit_operations_and_bounds() {
        let mut list = TaskList::new();
        list.add(Task::todo("write report"));

        list.mark_done(0).unwrap();
        list.set_priority(0, Priority::Low).unwrap();
        list.set_comment(0, "draft only").unwrap();

        let task = list.get(0).unwrap();
        assert!(task.completed);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.comment.as_deref(), Some("draft only"));

        assert!(matches!(
            list.mark_done(3),
            Err(ValidationError::IndexOutOfBounds { index: 3, len: 1 })
        ));
    }

    #[test]
    fn test_tasks_on_date() {
        let mut list = TaskList::new();
        list.add(Task::event("spans", dt(1, 22), dt(3, 2)).unwrap());
        list.add(Task::deadline("due", dt(2, 17)));
        list.add(Task::event("other day", dt(5, 9), dt(5, 10)).unwrap());

        let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let on_day: Vec<&str> = list
            .tasks_on(day)
            .into_iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(on_day, vec!["spans", "due"]);
    }
}
