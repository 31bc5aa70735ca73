use std::collections::HashSet;

use crate::input::queue::InputEvent;

/// Held-key snapshot built from key up/down events.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<u32>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold events into the snapshot, in order.
    pub fn apply<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            match *event {
                InputEvent::KeyDown { key_code } => {
                    self.held.insert(key_code);
                }
                InputEvent::KeyUp { key_code } => {
                    self.held.remove(&key_code);
                }
                _ => {}
            }
        }
    }

    pub fn is_pressed(&self, key_code: u32) -> bool {
        self.held.contains(&key_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_then_up_in_same_batch_ends_released() {
        let mut keys = KeyboardState::new();
        keys.apply(&[
            InputEvent::KeyDown { key_code: 37 },
            InputEvent::KeyUp { key_code: 37 },
        ]);
        assert!(!keys.is_pressed(37));
    }

    #[test]
    fn held_keys_persist_across_batches() {
        let mut keys = KeyboardState::new();
        keys.apply(&[InputEvent::KeyDown { key_code: 32 }]);
        keys.apply(&[InputEvent::Custom { kind: 2, a: 0.0, b: 0.0, c: 0.0 }]);
        assert!(keys.is_pressed(32));
        keys.apply(&[InputEvent::KeyUp { key_code: 32 }]);
        assert!(!keys.is_pressed(32));
    }
}
