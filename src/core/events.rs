//! Per-tick input queue
//!
//! Window callbacks push [`InputEvent`]s as they arrive. At the start of a
//! tick the queue is swapped, and the tick drains everything that arrived
//! since the previous one, in arrival order.

use std::collections::VecDeque;

use crate::input::InputEvent;

/// Double-buffered queue of input events.
///
/// # Example
///
/// ```ignore
/// queue.push(InputEvent::Quit);
///
/// // Tick boundary
/// queue.swap();
/// for event in queue.drain() {
///     runner_handle(event);
/// }
/// ```
#[derive(Debug)]
pub struct EventQueue {
    /// Events arriving before the next tick
    pending: VecDeque<InputEvent>,
    /// Events handed to the current tick
    processing: VecDeque<InputEvent>,
}

impl EventQueue {
    /// Default initial capacity for event queues.
    const DEFAULT_CAPACITY: usize = 64;

    /// Create an empty event queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(Self::DEFAULT_CAPACITY),
            processing: VecDeque::with_capacity(Self::DEFAULT_CAPACITY),
        }
    }

    /// Queue an event for the next tick.
    #[inline]
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Hand everything pushed so far to the current tick.
    ///
    /// Events the previous tick did not drain are dropped.
    pub fn swap(&mut self) {
        self.processing.clear();
        std::mem::swap(&mut self.pending, &mut self.processing);
    }

    /// Take the current tick's events in arrival order.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.processing.drain(..)
    }

    /// Check if the current tick has no events.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processing.is_empty()
    }

    /// Number of events handed to the current tick.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.processing.len()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_event_queue_push_and_swap() {
        let mut queue = EventQueue::new();

        queue.push(InputEvent::key(KeyCode::Enter));
        assert!(queue.is_empty(), "Events should not be visible before swap");

        queue.swap();
        assert_eq!(queue.len(), 1);

        queue.swap();
        assert!(queue.is_empty(), "Nothing new arrived since the last swap");
    }

    #[test]
    fn test_drain_preserves_arrival_order() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::key(KeyCode::ArrowDown));
        queue.push(InputEvent::key(KeyCode::ArrowUp));
        queue.push(InputEvent::Quit);

        queue.swap();
        let events: Vec<_> = queue.drain().collect();

        assert_eq!(
            events,
            vec![
                InputEvent::key(KeyCode::ArrowDown),
                InputEvent::key(KeyCode::ArrowUp),
                InputEvent::Quit,
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_after_swap_wait_for_next_tick() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::key(KeyCode::KeyA));
        queue.swap();
        queue.push(InputEvent::key(KeyCode::KeyB));

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(events, vec![InputEvent::key(KeyCode::KeyA)]);

        queue.swap();
        let events: Vec<_> = queue.drain().collect();
        assert_eq!(events, vec![InputEvent::key(KeyCode::KeyB)]);
    }

    #[test]
    fn test_swap_drops_undrained_events() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::Quit);
        queue.swap();
        queue.push(InputEvent::key(KeyCode::KeyA));

        queue.swap();
        let events: Vec<_> = queue.drain().collect();
        assert_eq!(events, vec![InputEvent::key(KeyCode::KeyA)]);
    }
}
