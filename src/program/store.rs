//! Program storage
//!
//! Holds up to [`MAX_PROGRAM_STEPS`] move specs for the session.
//! Session-lifetime only; nothing survives a power cycle.

use heapless::Vec;

use crate::config::MoveSpec;

/// Maximum steps in a stored program
pub const MAX_PROGRAM_STEPS: usize = 5;

/// Program store mutation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Program already holds the maximum number of steps
    Full,
    /// Index does not name an existing step
    OutOfRange,
}

/// Ordered, bounded list of move specs
///
/// Insertion order is execution order. At most one mutation is ever in
/// flight (single session, cooperative scheduling), so there is no
/// internal locking.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgramStore {
    steps: Vec<MoveSpec, MAX_PROGRAM_STEPS>,
}

impl ProgramStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step
    ///
    /// Fails with [`StoreError::Full`] at capacity, leaving the store
    /// unchanged.
    pub fn add(&mut self, spec: MoveSpec) -> Result<(), StoreError> {
        self.steps.push(spec).map_err(|_| StoreError::Full)
    }

    /// Remove the step at `index`, shifting later steps down
    ///
    /// Returns the removed spec. Order of the remaining steps is
    /// preserved.
    pub fn delete(&mut self, index: usize) -> Result<MoveSpec, StoreError> {
        if index >= self.steps.len() {
            return Err(StoreError::OutOfRange);
        }
        Ok(self.steps.remove(index))
    }

    /// Remove all steps
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// Read-only view of the stored steps, in execution order
    pub fn list(&self) -> &[MoveSpec] {
        &self.steps
    }

    /// Get the step at `index`
    pub fn get(&self, index: usize) -> Option<&MoveSpec> {
        self.steps.get(index)
    }

    /// Number of stored steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the program is empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
