//! Drives one ATM session through the state machine.
//!
//! The session wires the screen and the cash slot onto a fresh
//! [`TransactionStateMachine`], checks the entered PIN and moves through
//! `AwaitingPin -> AwaitingAmount -> Dispensing` or `AwaitingPin -> Error`.

use crate::config::AtmConfig;
use crate::error::{AtmError, Result};
use crate::listener::{DispenserListener, DisplayListener, SharedWriter};
use crate::machine::TransactionStateMachine;
use crate::state::{Amount, AtmState};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// A single customer interaction.
pub struct Session {
    machine: TransactionStateMachine,
    pin: String,
}

impl Session {
    /// Creates a session whose screen and cash slot both write to `out`.
    ///
    /// The screen is attached before the cash slot, so a state's message is
    /// always shown before any cash is reported.
    pub fn new<W: Write + 'static>(config: &AtmConfig, out: SharedWriter<W>) -> Self {
        let mut machine = TransactionStateMachine::new();
        machine.attach(DisplayListener::new(out.clone()));
        machine.attach(DispenserListener::new(config.strategy.build(), out));
        debug!("Session ready with {} strategy", config.strategy);

        Session {
            machine,
            pin: config.pin.clone(),
        }
    }

    /// Current state, `None` before [`Session::start_session`].
    pub fn state(&self) -> Option<&AtmState> {
        self.machine.state()
    }

    /// Enters `AwaitingPin`.
    pub fn start_session(&mut self) -> Result<()> {
        if self.state().is_some() {
            return Err(AtmError::invalid_transition(self.state(), "AwaitingPin"));
        }
        self.machine.set_state(AtmState::AwaitingPin)
    }

    /// Checks `pin` and moves to `AwaitingAmount` on a match, `Error` otherwise.
    ///
    /// Returns whether the PIN matched.
    pub fn submit_pin(&mut self, pin: &str) -> Result<bool> {
        if self.state() != Some(&AtmState::AwaitingPin) {
            return Err(AtmError::invalid_transition(self.state(), "AwaitingAmount"));
        }

        if pin == self.pin {
            self.machine.set_state(AtmState::AwaitingAmount)?;
            Ok(true)
        } else {
            warn!("PIN mismatch, ending session");
            self.machine.set_state(AtmState::Error)?;
            Ok(false)
        }
    }

    /// Requests `amount` and moves to `Dispensing`.
    ///
    /// The amount is not validated here; the cash slot reports an error for
    /// amounts it cannot split.
    pub fn submit_amount(&mut self, amount: Amount) -> Result<()> {
        if self.state() != Some(&AtmState::AwaitingAmount) {
            return Err(AtmError::invalid_transition(self.state(), "Dispensing"));
        }
        self.machine.set_state(AtmState::Dispensing { amount })
    }
}

/// Runs a full session reading the PIN and the amount from `input`.
///
/// Each value is one line. Returns the state the session ended in.
pub fn run_session<R, W>(
    config: &AtmConfig,
    mut input: R,
    out: SharedWriter<W>,
) -> Result<AtmState>
where
    R: BufRead,
    W: Write + 'static,
{
    let mut session = Session::new(config, out);
    session.start_session()?;

    let pin = read_line(&mut input, "PIN")?;
    if session.submit_pin(&pin)? {
        let line = read_line(&mut input, "amount")?;
        let amount = parse_amount(&line)?;
        session.submit_amount(amount)?;
    }

    // Safety: start_session stored AwaitingPin above
    Ok(session.state().cloned().expect("session started"))
}

/// Reads one line without its line terminator.
fn read_line<R: BufRead>(input: &mut R, what: &'static str) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AtmError::MissingInput { what });
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Parses the amount line as a whole number.
fn parse_amount(line: &str) -> Result<Amount> {
    line.trim()
        .parse::<Amount>()
        .map_err(|_| AtmError::InvalidAmountInput {
            input: line.to_string(),
        })
}
