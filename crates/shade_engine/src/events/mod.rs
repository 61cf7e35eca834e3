//! Keyboard event queue
//!
//! The windowing layer owns an [`EventQueue`], pushes key events into it from
//! its input callbacks, and hands it to the frame loop by reference. The
//! frame loop drains it once per frame.
//! - Bounded: a full queue rejects new events instead of growing
//! - FIFO: events drain in arrival order

use std::collections::VecDeque;

use bitflags::bitflags;

/// Default number of events a queue holds before rejecting new ones
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Event queue errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The queue is full; the event was dropped
    #[error("event queue full ({capacity} events), dropping event")]
    QueueFull {
        /// Capacity of the queue that rejected the event
        capacity: usize,
    },

    /// A queue must be able to hold at least one event
    #[error("event queue capacity must be at least 1")]
    ZeroCapacity,
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Escape key
    Escape,
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Any other key, by platform key code
    Other(i32),
}

/// What happened to the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key came up
    Release,
    /// Key is held and auto-repeating
    Repeat,
}

bitflags! {
    /// Modifier keys held during a key event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Either shift key
        const SHIFT = 1 << 0;
        /// Either control key
        const CONTROL = 1 << 1;
        /// Either alt key
        const ALT = 1 << 2;
        /// Either super/command key
        const SUPER = 1 << 3;
    }
}

/// A single keyboard event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key that changed
    pub key: KeyCode,
    /// Platform scancode
    pub scancode: i32,
    /// Press, release or repeat
    pub action: KeyAction,
    /// Modifiers held at the time
    pub mods: Modifiers,
}

impl KeyEvent {
    /// Create an event with no scancode and no modifiers
    pub const fn new(key: KeyCode, action: KeyAction) -> Self {
        Self {
            key,
            scancode: 0,
            action,
            mods: Modifiers::empty(),
        }
    }

    /// Set the scancode (builder pattern)
    pub const fn with_scancode(mut self, scancode: i32) -> Self {
        self.scancode = scancode;
        self
    }

    /// Set the modifiers (builder pattern)
    pub const fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }

    /// True for a press or auto-repeat of `key`
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.key == key && matches!(self.action, KeyAction::Press | KeyAction::Repeat)
    }

    /// True for a release of `key`
    pub fn is_up(&self, key: KeyCode) -> bool {
        self.key == key && self.action == KeyAction::Release
    }
}

/// Bounded FIFO of key events
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<KeyEvent>,
    capacity: usize,
}

impl EventQueue {
    /// Create a queue that holds at most `capacity` events
    pub fn with_capacity(capacity: usize) -> Result<Self, EventError> {
        if capacity == 0 {
            return Err(EventError::ZeroCapacity);
        }
        Ok(Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Queue an event
    ///
    /// When the queue is full the new event is dropped and the events
    /// already queued are kept.
    pub fn push(&mut self, event: KeyEvent) -> Result<(), EventError> {
        if self.events.len() >= self.capacity {
            log::warn!("Event queue full ({} events), dropping {:?}", self.capacity, event);
            return Err(EventError::QueueFull {
                capacity: self.capacity,
            });
        }
        self.events.push_back(event);
        Ok(())
    }

    /// Take every queued event in arrival order, leaving the queue empty
    pub fn drain(&mut self) -> Vec<KeyEvent> {
        self.events.drain(..).collect()
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Maximum number of queued events
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self {
            events: VecDeque::with_capacity(DEFAULT_QUEUE_CAPACITY),
            capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode) -> KeyEvent {
        KeyEvent::new(key, KeyAction::Press)
    }

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = EventQueue::with_capacity(4).unwrap();
        queue.push(press(KeyCode::Left)).unwrap();
        queue.push(KeyEvent::new(KeyCode::Left, KeyAction::Release)).unwrap();
        queue.push(press(KeyCode::Space)).unwrap();

        let events = queue.drain();
        assert_eq!(events.len(), 3);
        assert!(events[0].is_down(KeyCode::Left));
        assert!(events[1].is_up(KeyCode::Left));
        assert!(events[2].is_down(KeyCode::Space));
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_full_queue_rejects_new_events() {
        let mut queue = EventQueue::with_capacity(2).unwrap();
        queue.push(press(KeyCode::A)).unwrap();
        queue.push(press(KeyCode::S)).unwrap();

        let err = queue.push(press(KeyCode::D)).unwrap_err();
        assert_eq!(err, EventError::QueueFull { capacity: 2 });

        let keys: Vec<_> = queue.drain().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![KeyCode::A, KeyCode::S]);

        // Room again after draining
        assert!(queue.push(press(KeyCode::D)).is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            EventQueue::with_capacity(0).unwrap_err(),
            EventError::ZeroCapacity
        );
    }

    #[test]
    fn test_event_builders() {
        let event = KeyEvent::new(KeyCode::Other(290), KeyAction::Repeat)
            .with_scancode(68)
            .with_mods(Modifiers::SHIFT | Modifiers::CONTROL);

        assert_eq!(event.scancode, 68);
        assert!(event.mods.contains(Modifiers::SHIFT));
        assert!(!event.mods.contains(Modifiers::ALT));
        assert!(event.is_down(KeyCode::Other(290)));
        assert!(!event.is_up(KeyCode::Other(290)));
    }

    #[test]
    fn test_default_capacity_and_clear() {
        let mut queue = EventQueue::default();
        assert_eq!(queue.capacity(), DEFAULT_QUEUE_CAPACITY);
        queue.push(press(KeyCode::Escape)).unwrap();
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
    }
}
