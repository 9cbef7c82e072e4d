use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::leave::{Leave, LeaveDraft};
use crate::slot::Slot;

/// Artificial latency applied to repository operations.
///
/// The delays stand in for the round-trip of a future real backend and carry
/// no other semantics; they are scheduled waits, never blocking ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub read: Duration,
    pub write: Duration,
}

impl Latency {
    /// The simulated round-trip: 100 ms reads, 200 ms writes.
    pub const fn simulated() -> Self {
        Self {
            read: Duration::from_millis(100),
            write: Duration::from_millis(200),
        }
    }

    /// No artificial delay.
    pub const fn none() -> Self {
        Self {
            read: Duration::ZERO,
            write: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

/// The leave collection, stored as one JSON document in a [`Slot`].
///
/// The repository owns the storage handle; callers receive a repository by
/// injection instead of touching the slot themselves. Every read parses the
/// whole document and every write rewrites it whole, with no cross-writer
/// coordination: two repositories over the same backing slot race
/// last-write-wins.
pub struct LeaveRepository<S: Slot> {
    slot: S,
    latency: Latency,
}

impl<S: Slot> LeaveRepository<S> {
    /// Creates a repository over the given slot with [`Latency::simulated`].
    pub fn new(slot: S) -> Self {
        Self::with_latency(slot, Latency::default())
    }

    /// Creates a repository with explicit latency, usually [`Latency::none`]
    /// in tests.
    pub fn with_latency(slot: S, latency: Latency) -> Self {
        Self { slot, latency }
    }

    /// Returns every stored leave, in insertion order.
    ///
    /// An absent document is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the slot fails or the stored document
    /// does not parse.
    pub async fn read_all(&self) -> Result<Vec<Leave>, RepositoryError<S::Error>> {
        let leaves = self.load()?;
        sleep(self.latency.read).await;
        Ok(leaves)
    }

    /// Validates the draft, assigns it a fresh id, appends it and rewrites
    /// the document. Returns the updated collection.
    ///
    /// # Errors
    ///
    /// Returns a [`RepositoryError`] if the draft is invalid, the slot fails,
    /// or the stored document does not parse.
    pub async fn create(
        &mut self,
        draft: LeaveDraft,
    ) -> Result<Vec<Leave>, RepositoryError<S::Error>> {
        draft.validate()?;
        let mut leaves = self.load()?;
        let leave = draft.into_leave(Uuid::new_v4().to_string());
        tracing::debug!(id = %leave.id, user = %leave.user_id, "creating leave");
        leaves.push(leave);
        self.persist(&leaves)?;
        sleep(self.latency.write).await;
        Ok(leaves)
    }

    /// Replaces the stored record carrying the same id and rewrites the
    /// document. Returns the updated collection.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no record carries the id, in
    /// which case the stored collection is untouched. Also fails if the
    /// record is invalid, the slot fails, or the stored document does not
    /// parse.
    pub async fn update(&mut self, leave: Leave) -> Result<Vec<Leave>, RepositoryError<S::Error>> {
        leave.validate()?;
        let mut leaves = self.load()?;
        let Some(position) = leaves.iter().position(|stored| stored.id == leave.id) else {
            return Err(RepositoryError::NotFound(leave.id));
        };
        tracing::debug!(id = %leave.id, "updating leave");
        leaves[position] = leave;
        self.persist(&leaves)?;
        sleep(self.latency.write).await;
        Ok(leaves)
    }

    /// Consumes the repository and returns the underlying slot.
    pub fn dissolve(self) -> S {
        self.slot
    }

    fn load(&self) -> Result<Vec<Leave>, RepositoryError<S::Error>> {
        match self.slot.load().map_err(RepositoryError::Slot)? {
            Some(document) => Ok(serde_json::from_str(&document)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&mut self, leaves: &[Leave]) -> Result<(), RepositoryError<S::Error>> {
        let document = serde_json::to_string(leaves)?;
        self.slot.store(&document).map_err(RepositoryError::Slot)
    }
}
