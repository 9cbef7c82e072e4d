//! # Furlough
//!
//! Leave-record bookkeeping over pluggable single-slot storage backends.
//!
//! ## Features
//!
//! - A validated leave data model with a stable JSON wire form
//! - An async repository with simulated network latency over any [`Slot`]
//! - A one-shot user directory with a degraded-startup fallback
//! - Pure view projections: day counts, resolved names, per-user grouping

mod directory;
mod errors;
mod leave;
mod repository;
mod slot;
mod view;

pub use directory::UserDirectory;
pub use errors::{DirectoryError, RepositoryError};
pub use leave::{Leave, LeaveDraft, LeaveType, REASON_MAX_LEN, User, ValidationError};
pub use repository::{Latency, LeaveRepository};
pub use slot::{MemorySlot, MemorySlotError, Slot};
pub use view::{LeaveView, OwnedBy, group_by_user, number_of_days, project};
