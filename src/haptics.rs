//! Haptic feedback hooks.
//!
//! Touch hosts vibrate when a long press arms and tick when the selected range
//! moves to another grid slot. Desktop hosts use [`NoHaptics`].

pub trait Haptics {
    /// A touch long press armed a selection.
    fn long_press(&mut self) {}

    /// The previewed range moved to another grid slot.
    fn selection_tick(&mut self) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {}
