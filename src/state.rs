//! Page-level mutable state. The DOM itself is the real state store; the
//! only things tracked here are the banner's pending hide timer and the
//! generation counter that lets a superseded table fetch lose its race.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;

thread_local! {
    static MESSAGE_TIMER: RefCell<Option<Timeout>> = RefCell::new(None);
    static TABLE_GENERATION: Cell<u32> = Cell::new(0);
}

/// Arm the banner hide timer. Dropping the previous handle cancels its
/// pending callback, so a new message restarts the display window instead
/// of stacking on the old one.
pub fn replace_message_timer(timer: Timeout) {
    MESSAGE_TIMER.with(|slot| {
        *slot.borrow_mut() = Some(timer);
    });
}

/// Bump and return the generation for a freshly triggered table fetch.
pub fn next_table_generation() -> u32 {
    TABLE_GENERATION.with(|counter| {
        let next = counter.get().wrapping_add(1);
        counter.set(next);
        next
    })
}

/// A response may only write the modal while its generation is the latest.
pub fn is_current_table_generation(generation: u32) -> bool {
    TABLE_GENERATION.with(|counter| counter.get() == generation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superseded_generations_are_stale() {
        let first = next_table_generation();
        assert!(is_current_table_generation(first));

        let second = next_table_generation();
        assert!(is_current_table_generation(second));
        assert!(!is_current_table_generation(first));
    }
}
