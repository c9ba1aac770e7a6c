//! # ATM Dispenser
//!
//! A single-session ATM modelled as a state machine whose transitions are
//! broadcast to listeners. The cash slot listener splits the requested
//! amount into bills using one of two interchangeable strategies.
//!
//! ## Design Principles
//!
//! - **Closed state set**: `AwaitingPin`, `AwaitingAmount`, `Dispensing`, `Error`
//! - **Synchronous fan-out**: listeners run in attachment order before `set_state` returns
//! - **Data over faults**: a wrong PIN is the `Error` state, a non-positive amount is an empty breakdown
//! - **Swappable splitting**: greedy scan and dispensing chain share one trait
//!
//! ## Example
//!
//! ```
//! use atm_dispenser::{run_session, AtmConfig, AtmState, SharedWriter};
//! use std::io::Cursor;
//!
//! let out = SharedWriter::new(Vec::new());
//! let state = run_session(&AtmConfig::default(), Cursor::new("1234\n186\n"), out.clone()).unwrap();
//! assert_eq!(state, AtmState::Dispensing { amount: 186 });
//! ```

pub mod breakdown;
pub mod bus;
pub mod config;
pub mod error;
pub mod listener;
pub mod machine;
pub mod session;
pub mod splitter;
pub mod state;

pub use breakdown::{BillBreakdown, Denomination};
pub use bus::{Listener, NotificationBus};
pub use config::{AtmConfig, DEFAULT_PIN};
pub use error::{AtmError, Result};
pub use listener::{DispenserListener, DisplayListener, SharedWriter, SLOT_ERROR, SLOT_PREFIX};
pub use machine::TransactionStateMachine;
pub use session::{run_session, Session};
pub use splitter::{
    DenominationSplitter, GreedyScan, OrderedChain, SplitterKind, CHAIN_DENOMINATIONS,
    GREEDY_DENOMINATIONS,
};
pub use state::{Amount, AtmState};
