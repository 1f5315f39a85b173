//! Per-frame input supplied by the host harness
//!
//! Movement keys arrive as a held-state snapshot; fire and start arrive as
//! discrete press/release events in the order they happened.

use serde::{Deserialize, Serialize};

/// Keys with discrete (edge-triggered) meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Fire the ship's gun (X)
    Fire,
    /// Start / reset the session (SPACE)
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Press,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub action: KeyAction,
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Press,
        }
    }

    pub fn release(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Release,
        }
    }
}

/// Raw pressed state of the four movement keys this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the core needs from the keyboard for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub held: HeldKeys,
    pub events: Vec<KeyEvent>,
}

impl FrameInput {
    /// True if `key` was released this frame
    pub fn released(&self, key: Key) -> bool {
        self.events
            .iter()
            .any(|e| e.key == key && e.action == KeyAction::Release)
    }
}

/// Which key of an opposing pair is being honored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisControl {
    #[default]
    Neutral,
    /// Up (thrust) or right (clockwise)
    HeldPositive,
    /// Down (reverse) or left (counter-clockwise)
    HeldNegative,
}

impl AxisControl {
    /// Advance with this frame's raw states
    ///
    /// From neutral, pressing both keys together does nothing. A key already
    /// held keeps priority over a newly pressed opposite until it is released.
    pub fn next(self, positive: bool, negative: bool) -> Self {
        match self {
            AxisControl::Neutral => match (positive, negative) {
                (true, false) => AxisControl::HeldPositive,
                (false, true) => AxisControl::HeldNegative,
                _ => AxisControl::Neutral,
            },
            AxisControl::HeldPositive => {
                if positive {
                    AxisControl::HeldPositive
                } else if negative {
                    AxisControl::HeldNegative
                } else {
                    AxisControl::Neutral
                }
            }
            AxisControl::HeldNegative => {
                if negative {
                    AxisControl::HeldNegative
                } else if positive {
                    AxisControl::HeldPositive
                } else {
                    AxisControl::Neutral
                }
            }
        }
    }

    /// -1, 0 or +1
    pub fn sign(self) -> f32 {
        match self {
            AxisControl::Neutral => 0.0,
            AxisControl::HeldPositive => 1.0,
            AxisControl::HeldNegative => -1.0,
        }
    }
}
