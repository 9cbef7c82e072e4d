use std::error::Error;

/// A single mutable document slot, the unit of persistence.
///
/// Models one key of a local-storage-like store: the whole leave collection
/// is read and rewritten as one string document. The slot has no notion of
/// the document's structure, which keeps backends decoupled from the codec.
pub trait Slot {
    /// Error type returned by slot operations.
    type Error: Error;

    /// Should return the current document, or `None` if nothing was stored yet.
    fn load(&self) -> Result<Option<String>, Self::Error>;

    /// Should replace the whole document.
    fn store(&mut self, document: &str) -> Result<(), Self::Error>;
}

/// A memory-backed slot.
///
/// Starts out empty as [`None`]. Useful in tests and as the reference
/// backend for the [`Slot`] contract.
pub type MemorySlot = Option<String>;

/// Error type for [`MemorySlot`] operations.
///
/// [`MemorySlot`] operations don't actually fail, so this is an empty error type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("memory slot operations do not fail")]
pub struct MemorySlotError;

impl Slot for MemorySlot {
    type Error = MemorySlotError;

    fn load(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.clone())
    }

    fn store(&mut self, document: &str) -> Result<(), Self::Error> {
        *self = Some(document.to_owned());
        Ok(())
    }
}
