//! Requests and lifecycle events
//!
//! The console layer parses serial input into [`Request`] values and
//! renders the [`Event`] values the session emits back.

use crate::config::MoveSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inbound requests, produced by the console layer after validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Request {
    /// Execute a single move now
    ManualMove(MoveSpec),
    /// Append a step to the stored program
    AddStep(MoveSpec),
    /// Delete the stored program step at this index
    DeleteStep(usize),
    /// Drop all stored program steps
    ClearProgram,
    /// Execute the stored program from the first step
    RunProgram,
    /// Hard-stop whatever is running
    Abort,
}

impl Request {
    /// Check if this request mutates the stored program
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Request::AddStep(_) | Request::DeleteStep(_) | Request::ClearProgram
        )
    }

    /// Check if this request starts a move
    pub fn starts_move(&self) -> bool {
        matches!(self, Request::ManualMove(_) | Request::RunProgram)
    }
}

/// Why a request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// Program already holds the maximum number of steps
    Full,
    /// Delete index does not name an existing step
    OutOfRange,
    /// Run requested with no stored steps
    ProgramEmpty,
    /// A move is in flight; resubmit once idle
    Busy,
}

/// Outbound lifecycle events, consumed by the console layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Event {
    /// A manual move or program run has started
    MoveStarted,
    /// A program advanced to step `index` of `total`
    StepAdvanced {
        /// 0-based index of the step now running
        index: usize,
        /// Total steps in the program
        total: usize,
    },
    /// The manual move finished
    MoveComplete,
    /// The last program step finished
    ProgramComplete,
    /// A move was hard-stopped by request
    Aborted,
    /// The request was refused; nothing changed
    Rejected(RejectReason),
}

impl Event {
    /// Check if this event ends a move (session returned to idle)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Event::MoveComplete | Event::ProgramComplete | Event::Aborted
        )
    }

    /// Check if this event reports a refusal
    pub fn is_rejection(&self) -> bool {
        matches!(self, Event::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Direction;

    fn spec() -> MoveSpec {
        MoveSpec::new(Direction::Forward, 100, 300, 300, 0).unwrap()
    }

    #[test]
    fn test_edit_requests() {
        assert!(Request::AddStep(spec()).is_edit());
        assert!(Request::DeleteStep(0).is_edit());
        assert!(Request::ClearProgram.is_edit());
        assert!(!Request::ManualMove(spec()).is_edit());
        assert!(!Request::Abort.is_edit());
    }

    #[test]
    fn test_move_starting_requests() {
        assert!(Request::ManualMove(spec()).starts_move());
        assert!(Request::RunProgram.starts_move());
        assert!(!Request::Abort.starts_move());
        assert!(!Request::ClearProgram.starts_move());
    }

    #[test]
    fn test_terminal_events() {
        assert!(Event::MoveComplete.is_terminal());
        assert!(Event::ProgramComplete.is_terminal());
        assert!(Event::Aborted.is_terminal());
        assert!(!Event::MoveStarted.is_terminal());
        assert!(!Event::StepAdvanced { index: 1, total: 3 }.is_terminal());
        assert!(!Event::Rejected(RejectReason::Busy).is_terminal());
    }

    #[test]
    fn test_rejection_events() {
        assert!(Event::Rejected(RejectReason::Full).is_rejection());
        assert!(!Event::Aborted.is_rejection());
    }
}
