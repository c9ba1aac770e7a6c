//! Screen and cash-slot listeners.

use crate::breakdown::BillBreakdown;
use crate::bus::Listener;
use crate::error::Result;
use crate::splitter::DenominationSplitter;
use crate::state::AtmState;
use log::{info, warn};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Line written by the cash slot when no breakdown exists.
pub const SLOT_ERROR: &str = "ATM slot error!!!";

/// Prefix of the cash slot's dispense line.
pub const SLOT_PREFIX: &str = "ATM money slot: ";

/// A writer that several listeners can share within one session.
///
/// Clones write to the same underlying writer.
pub struct SharedWriter<W>(Rc<RefCell<W>>);

impl<W> SharedWriter<W> {
    pub fn new(inner: W) -> Self {
        SharedWriter(Rc::new(RefCell::new(inner)))
    }

    /// Runs `f` with a reference to the underlying writer.
    ///
    /// Used to inspect what the listeners wrote, typically an in-memory
    /// `Vec<u8>` buffer in tests.
    pub fn with<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        let inner = self.0.borrow();
        f(&*inner)
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        SharedWriter(Rc::clone(&self.0))
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Shows the message of every state on the screen.
pub struct DisplayListener<W: Write> {
    out: W,
}

impl<W: Write> DisplayListener<W> {
    pub fn new(out: W) -> Self {
        DisplayListener { out }
    }
}

impl<W: Write> Listener for DisplayListener<W> {
    fn update(&mut self, current: &AtmState) -> Result<()> {
        writeln!(self.out, "{}", current)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Hands out cash when the session reaches [`AtmState::Dispensing`].
///
/// Every other state is ignored. The breakdown is produced by the configured
/// strategy and written to the cash slot; it is not kept afterwards.
pub struct DispenserListener<W: Write> {
    strategy: Box<dyn DenominationSplitter>,
    out: W,
}

impl<W: Write> DispenserListener<W> {
    pub fn new(strategy: Box<dyn DenominationSplitter>, out: W) -> Self {
        DispenserListener { strategy, out }
    }

    /// Replaces the splitting strategy.
    pub fn set_strategy(&mut self, strategy: Box<dyn DenominationSplitter>) {
        self.strategy = strategy;
    }

    /// Name of the active strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl<W: Write> Listener for DispenserListener<W> {
    fn update(&mut self, current: &AtmState) -> Result<()> {
        let amount = match current.dispense_amount() {
            Some(amount) => amount,
            None => return Ok(()),
        };

        match self.strategy.split(amount) {
            BillBreakdown::Empty => {
                warn!(
                    "Cannot dispense {} with {} strategy: no valid breakdown",
                    amount,
                    self.strategy.name()
                );
                writeln!(self.out, "{}", SLOT_ERROR)?;
            }
            breakdown => {
                info!(
                    "Dispensing {} as {} bills ({} strategy)",
                    amount,
                    breakdown.bill_count(),
                    self.strategy.name()
                );
                writeln!(self.out, "{}{}", SLOT_PREFIX, breakdown)?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
