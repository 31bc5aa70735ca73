//! Scripted keyboard input for headless runs.

use titan_engine::InputEvent;

use crate::settings::KeyBindings;

/// Seconds of one script loop.
const CYCLE_SECONDS: f32 = 5.0;

/// A fixed loop of key presses: walk right, swing the sword, switch to the
/// pickaxe and dig, jump, back off to the left, switch back to the axe.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// (frame within the cycle, event), sorted by frame.
    script: Vec<(u64, InputEvent)>,
    cycle: u64,
}

impl Autopilot {
    pub fn new(keys: &KeyBindings, frame_rate: f32) -> Self {
        let at = |seconds: f32| (seconds * frame_rate).round() as u64;
        let tap = |seconds: f32, key_code: u32| {
            [
                (at(seconds), InputEvent::KeyDown { key_code }),
                (at(seconds + 0.1), InputEvent::KeyUp { key_code }),
            ]
        };

        let mut script = vec![
            (at(0.0), InputEvent::KeyDown { key_code: keys.right }),
            (at(1.5), InputEvent::KeyUp { key_code: keys.right }),
            (at(3.8), InputEvent::KeyDown { key_code: keys.left }),
            (at(4.3), InputEvent::KeyUp { key_code: keys.left }),
        ];
        script.extend(tap(1.6, keys.use_weapon));
        script.extend(tap(2.2, keys.tool_slots[1]));
        script.extend(tap(2.4, keys.use_tool));
        script.extend(tap(3.6, keys.jump));
        script.extend(tap(4.5, keys.tool_slots[0]));
        script.sort_by_key(|(frame, _)| *frame);

        Self {
            script,
            cycle: at(CYCLE_SECONDS).max(1),
        }
    }

    /// Events to push before simulating `frame`.
    pub fn inputs(&self, frame: u64) -> impl Iterator<Item = InputEvent> + '_ {
        let offset = frame % self.cycle;
        self.script
            .iter()
            .filter(move |(at, _)| *at == offset)
            .map(|(_, event)| *event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_repeats_each_cycle() {
        let pilot = Autopilot::new(&KeyBindings::default(), 60.0);
        let first: Vec<_> = pilot.inputs(0).collect();
        assert_eq!(first, vec![InputEvent::KeyDown { key_code: 39 }]);
        assert_eq!(pilot.inputs(300).collect::<Vec<_>>(), first);
        assert_eq!(pilot.inputs(1).count(), 0);
    }

    #[test]
    fn every_press_is_released() {
        let pilot = Autopilot::new(&KeyBindings::default(), 60.0);
        let events: Vec<_> = (0..300).flat_map(|f| pilot.inputs(f)).collect();
        let downs = events.iter().filter(|e| matches!(e, InputEvent::KeyDown { .. })).count();
        let ups = events.iter().filter(|e| matches!(e, InputEvent::KeyUp { .. })).count();
        assert_eq!(downs, 7);
        assert_eq!(downs, ups);
        assert!(events.contains(&InputEvent::KeyDown { key_code: 82 }));
        assert!(events.contains(&InputEvent::KeyDown { key_code: 50 }));
    }
}
