//! Session state machine
//!
//! Top-level controller for the move lifecycle. Owns the step driver,
//! the program store, and whichever move executor is currently active,
//! so no motion state lives outside this struct.
//!
//! All motor behavior is a function of the current state plus either a
//! console request or a scheduler tick.

use crate::config::MoveSpec;
use crate::motion::{MoveExecutor, MoveProgress};
use crate::program::{ProgramStore, StoreError};
use crate::session::events::{Event, RejectReason, Request};
use crate::traits::StepPulseDriver;

/// Observable session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionPhase {
    /// No move in flight; edits accepted
    Idle,
    /// A manual move is executing
    RunningManual,
    /// A stored program is executing
    RunningProgram,
}

/// Session state, carrying the active executor where one exists
enum SessionState {
    Idle,
    RunningManual(MoveExecutor),
    RunningProgram(MoveExecutor, usize),
}

/// Outcome of an executor tick that finished a move
enum Finished {
    Manual,
    ProgramStep(usize),
}

impl From<StoreError> for RejectReason {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Full => RejectReason::Full,
            StoreError::OutOfRange => RejectReason::OutOfRange,
        }
    }
}

/// The top-level move lifecycle controller
///
/// A cooperative scheduler calls [`tick`](Self::tick) repeatedly with a
/// monotonic microsecond timestamp; the console layer calls
/// [`handle`](Self::handle) between ticks. Neither call blocks.
pub struct SessionStateMachine<D: StepPulseDriver> {
    driver: D,
    program: ProgramStore,
    state: SessionState,
}

impl<D: StepPulseDriver> SessionStateMachine<D> {
    /// Create an idle session owning the given driver
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            program: ProgramStore::new(),
            state: SessionState::Idle,
        }
    }

    /// Current session phase
    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::RunningManual(_) => SessionPhase::RunningManual,
            SessionState::RunningProgram(..) => SessionPhase::RunningProgram,
        }
    }

    /// Check if no move is in flight
    pub fn is_idle(&self) -> bool {
        matches!(self.state, SessionState::Idle)
    }

    /// Read-only view of the stored program
    pub fn program(&self) -> &ProgramStore {
        &self.program
    }

    /// Progress of the active move, if one is in flight
    pub fn active_progress(&self) -> Option<&MoveProgress> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::RunningManual(exec) => Some(exec.progress()),
            SessionState::RunningProgram(exec, _) => Some(exec.progress()),
        }
    }

    /// Index of the running program step, if a program is in flight
    pub fn program_index(&self) -> Option<usize> {
        match self.state {
            SessionState::RunningProgram(_, index) => Some(index),
            _ => None,
        }
    }

    /// Borrow the driver (for status display)
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Process a console request
    ///
    /// Returns the lifecycle event to render, or `None` for requests
    /// that succeed silently (program edits, abort while idle).
    pub fn handle(&mut self, request: Request, now_us: u64) -> Option<Event> {
        // Abort is valid in every state; everything else needs an idle
        // session. Program storage may not be mutated while a move
        // sourced from it is in flight, and only one move runs at a
        // time.
        if !self.is_idle() && !matches!(request, Request::Abort) {
            return Some(Event::Rejected(RejectReason::Busy));
        }

        match request {
            Request::Abort => self.abort(),
            Request::ManualMove(spec) => {
                self.state = SessionState::RunningManual(self.start_move(spec, now_us));
                Some(Event::MoveStarted)
            }
            Request::RunProgram => match self.program.get(0).copied() {
                Some(first) => {
                    self.state = SessionState::RunningProgram(self.start_move(first, now_us), 0);
                    Some(Event::MoveStarted)
                }
                None => Some(Event::Rejected(RejectReason::ProgramEmpty)),
            },
            Request::AddStep(spec) => edit_event(self.program.add(spec).err()),
            Request::DeleteStep(index) => edit_event(self.program.delete(index).err()),
            Request::ClearProgram => {
                self.program.clear();
                None
            }
        }
    }

    /// Advance the active move by one scheduler tick
    ///
    /// Idle ticks are no-ops. Returns the lifecycle event produced by
    /// this tick, if any.
    pub fn tick(&mut self, now_us: u64) -> Option<Event> {
        let finished = match &mut self.state {
            SessionState::Idle => return None,
            SessionState::RunningManual(exec) => {
                if exec.tick(now_us, &mut self.driver) {
                    Finished::Manual
                } else {
                    return None;
                }
            }
            SessionState::RunningProgram(exec, index) => {
                if exec.tick(now_us, &mut self.driver) {
                    Finished::ProgramStep(*index)
                } else {
                    return None;
                }
            }
        };

        match finished {
            Finished::Manual => {
                self.stop();
                Some(Event::MoveComplete)
            }
            Finished::ProgramStep(index) => {
                let next = index + 1;
                let total = self.program.len();
                match self.program.get(next).copied() {
                    Some(spec) => {
                        self.state =
                            SessionState::RunningProgram(self.start_move(spec, now_us), next);
                        Some(Event::StepAdvanced { index: next, total })
                    }
                    None => {
                        self.stop();
                        Some(Event::ProgramComplete)
                    }
                }
            }
        }
    }

    /// Hard-stop the active move
    ///
    /// No deceleration ramp: the progress is discarded outright and the
    /// driver de-energized on the spot. A second abort is a no-op.
    fn abort(&mut self) -> Option<Event> {
        if self.is_idle() {
            return None;
        }
        self.stop();
        Some(Event::Aborted)
    }

    /// Discard the active move and de-energize the driver
    fn stop(&mut self) {
        self.driver.disable();
        self.state = SessionState::Idle;
    }

    /// Energize the driver and begin executing a move
    fn start_move(&mut self, spec: MoveSpec, now_us: u64) -> MoveExecutor {
        self.driver.enable();
        MoveExecutor::start(spec, now_us)
    }
}

/// Map a store mutation result onto the event vocabulary
fn edit_event(err: Option<StoreError>) -> Option<Event> {
    err.map(|e| Event::Rejected(e.into()))
}
