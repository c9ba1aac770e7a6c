//! ATM session states.

use std::fmt;

/// Amount of money requested, in abstract money units.
///
/// Signed so that zero and negative requests can reach the splitters, which
/// treat them as the empty case. Entered values outside the 32-bit range are
/// rejected before they reach the state machine.
pub type Amount = i32;

/// The states a single ATM session passes through.
///
/// States are plain immutable values. The machine never validates a
/// transition; the driver decides which state comes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtmState {
    /// Waiting for the customer to enter a PIN.
    AwaitingPin,

    /// PIN accepted, waiting for the amount to withdraw.
    AwaitingAmount,

    /// Cash for `amount` should be handed out.
    Dispensing { amount: Amount },

    /// PIN was rejected.
    Error,
}

impl AtmState {
    /// The one-line message shown on the screen for this state.
    pub fn message(&self) -> &'static str {
        match self {
            AtmState::AwaitingPin => "Please insert your PIN number.",
            AtmState::AwaitingAmount => "Insert the number of money your want to get out.",
            AtmState::Dispensing { .. } => "Take your money.",
            AtmState::Error => "There was an error with the PIN.",
        }
    }

    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            AtmState::AwaitingPin => "AwaitingPin",
            AtmState::AwaitingAmount => "AwaitingAmount",
            AtmState::Dispensing { .. } => "Dispensing",
            AtmState::Error => "Error",
        }
    }

    /// Returns the amount to dispense, if this is the dispensing state.
    pub fn dispense_amount(&self) -> Option<Amount> {
        match self {
            AtmState::Dispensing { amount } => Some(*amount),
            _ => None,
        }
    }
}

impl fmt::Display for AtmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
