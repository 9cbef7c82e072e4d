//! Filesystem storage slot for `furlough` leave records.
//!
//! Persists the whole leave document as a single JSON file, the on-disk
//! analogue of one local-storage key.

mod error;
mod slot;

pub use error::FileSlotError;
pub use slot::FileSlot;
