//! Synchronous state-change notification.
//!
//! The bus keeps only the most recent [`AtmState`] and an ordered list of
//! listeners. Setting a state stores it first, then calls every listener in
//! attachment order before returning.

use crate::error::Result;
use crate::state::AtmState;
use log::debug;

/// Something that reacts to ATM state changes.
///
/// `current` is always the state the bus holds at the moment of the call,
/// never the one it replaced.
pub trait Listener {
    /// Called once per state assignment.
    fn update(&mut self, current: &AtmState) -> Result<()>;
}

/// Holds the current state and fans every change out to its listeners.
///
/// Listeners are attached once and never removed. No duplicate detection
/// is done: attaching the same kind of listener twice notifies it twice.
#[derive(Default)]
pub struct NotificationBus {
    /// Most recent state, `None` until the first assignment.
    state: Option<AtmState>,

    /// Listeners in attachment order.
    listeners: Vec<Box<dyn Listener>>,
}

impl NotificationBus {
    /// Creates a bus with no state and no listeners.
    pub fn new() -> Self {
        NotificationBus {
            state: None,
            listeners: Vec::new(),
        }
    }

    /// Appends a listener to the notification order.
    pub fn attach<L: Listener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    /// Stores `state` and notifies every listener in attachment order.
    ///
    /// Identical consecutive states still trigger a full round. The first
    /// listener error stops the round and is returned as-is; listeners after
    /// it are not called.
    pub fn set_state(&mut self, state: AtmState) -> Result<()> {
        debug!(
            "State {} -> {}",
            self.state.as_ref().map_or("none", AtmState::name),
            state.name()
        );

        let current = &*self.state.insert(state);
        for listener in self.listeners.iter_mut() {
            listener.update(current)?;
        }

        Ok(())
    }

    /// The most recently assigned state.
    pub fn state(&self) -> Option<&AtmState> {
        self.state.as_ref()
    }

    /// Number of attached listeners.
    ///
    /// Nothing in the session reads this; it exists for inspecting a bus
    /// from tests and embedding code.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtmError;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(&'static str, AtmState)>>>;

    struct Recorder {
        tag: &'static str,
        log: Log,
    }

    impl Listener for Recorder {
        fn update(&mut self, current: &AtmState) -> Result<()> {
            self.log.borrow_mut().push((self.tag, current.clone()));
            Ok(())
        }
    }

    struct Failing;

    impl Listener for Failing {
        fn update(&mut self, _current: &AtmState) -> Result<()> {
            Err(AtmError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "screen gone")))
        }
    }

    fn recorder(tag: &'static str, log: &Log) -> Recorder {
        Recorder {
            tag,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn test_new_bus_has_no_state() {
        let bus = NotificationBus::new();
        assert!(bus.state().is_none());
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_listeners_called_once_in_attachment_order() {
        let log = Log::default();
        let mut bus = NotificationBus::new();
        bus.attach(recorder("first", &log));
        bus.attach(recorder("second", &log));

        bus.set_state(AtmState::AwaitingPin).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                ("first", AtmState::AwaitingPin),
                ("second", AtmState::AwaitingPin),
            ]
        );
    }

    #[test]
    fn test_listeners_observe_new_state() {
        let log = Log::default();
        let mut bus = NotificationBus::new();
        bus.attach(recorder("a", &log));
        bus.attach(recorder("b", &log));

        bus.set_state(AtmState::AwaitingPin).unwrap();
        log.borrow_mut().clear();
        bus.set_state(AtmState::AwaitingAmount).unwrap();

        assert!(log
            .borrow()
            .iter()
            .all(|(_, state)| *state == AtmState::AwaitingAmount));
        assert_eq!(bus.state(), Some(&AtmState::AwaitingAmount));
    }

    #[test]
    fn test_same_state_twice_notifies_twice() {
        let log = Log::default();
        let mut bus = NotificationBus::new();
        bus.attach(recorder("only", &log));

        bus.set_state(AtmState::Error).unwrap();
        bus.set_state(AtmState::Error).unwrap();

        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_duplicate_attach_is_not_detected() {
        let log = Log::default();
        let mut bus = NotificationBus::new();
        bus.attach(recorder("dup", &log));
        bus.attach(recorder("dup", &log));

        bus.set_state(AtmState::AwaitingPin).unwrap();

        assert_eq!(bus.listener_count(), 2);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_listener_error_stops_round_after_state_is_stored() {
        let log = Log::default();
        let mut bus = NotificationBus::new();
        bus.attach(recorder("before", &log));
        bus.attach(Failing);
        bus.attach(recorder("after", &log));

        let result = bus.set_state(AtmState::AwaitingAmount);

        assert!(matches!(result, Err(AtmError::Io(_))));
        assert_eq!(bus.state(), Some(&AtmState::AwaitingAmount));
        assert_eq!(*log.borrow(), vec![("before", AtmState::AwaitingAmount)]);
    }
}
