//! Transaction state machine.

use crate::bus::{Listener, NotificationBus};
use crate::error::Result;
use crate::state::AtmState;

/// Holds the session's state and publishes every assignment.
///
/// The machine does not validate transitions. Whoever drives it decides the
/// next state; each `set_state` call, even to the current state, goes
/// through the bus and notifies all listeners.
#[derive(Default)]
pub struct TransactionStateMachine {
    bus: NotificationBus,
}

impl TransactionStateMachine {
    pub fn new() -> Self {
        TransactionStateMachine {
            bus: NotificationBus::new(),
        }
    }

    /// Attaches a listener to the underlying bus.
    pub fn attach<L: Listener + 'static>(&mut self, listener: L) {
        self.bus.attach(listener);
    }

    /// Moves to `state` and returns once every listener has been notified.
    pub fn set_state(&mut self, state: AtmState) -> Result<()> {
        self.bus.set_state(state)
    }

    /// The current state, `None` before the session starts.
    pub fn state(&self) -> Option<&AtmState> {
        self.bus.state()
    }
}
