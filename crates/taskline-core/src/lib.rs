//! # Taskline Core Library
//!
//! Core business logic for Taskline, a personal task tracker. All
//! operations are available through a standalone CLI binary built on top of
//! this crate.
//!
//! ## Architecture
//!
//! - **Task model**: a closed set of task kinds (todo, deadline, event,
//!   todo-within-period, recurring event) sharing description, completion,
//!   priority and comment
//! - **Task list**: ordered container exposing the commitment query that
//!   feeds the scheduler
//! - **Scheduler**: pure free-slot engine scanning the sorted commitment
//!   sequence for gaps wide enough to fit a requested duration
//! - **Storage**: JSON task snapshots and TOML configuration
//!
//! ## Key Components
//!
//! - [`Task`] / [`TaskKind`]: the task model
//! - [`TaskList`]: container and commitment query
//! - [`scheduler::schedule_by_deadline`] / [`scheduler::schedule_within_horizon`]:
//!   the scheduling entry points
//! - [`render::render_outcome`]: user-facing text for scheduling results

pub mod error;
pub mod export;
pub mod render;
pub mod scheduler;
pub mod storage;
pub mod task;
pub mod tasklist;

pub use error::{ConfigError, CoreError, ParseError, StorageError, ValidationError};
pub use scheduler::{DeadlineKind, FreeWindow, ScheduleOutcome, SEARCH_HARD_LIMIT_DAYS};
pub use storage::{Config, TaskStore};
pub use task::{Priority, Task, TaskKind};
pub use tasklist::{Commitment, TaskList};
