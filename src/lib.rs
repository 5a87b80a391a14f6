//! Preonic keymap
//!
//! My keymap for the Preonic, a 5x12 ortholinear board.  This crate holds the layer tables for
//! the three revisions of the keymap, and the small amount of logic that sits on top of them:
//! custom layer keys, default layer persistence, the shrug macros, audio feedback, and on the
//! latest board, the encoder and DIP switches.
//!
//! Nothing here talks to hardware.  Everything the keymap wants done is pushed as an [`Event`]
//! into an [`EventQueue`] supplied by the firmware, which owns the USB, audio and backlight
//! drivers.

#![cfg_attr(not(test), no_std)]

use arrayvec::ArrayVec;
use bitflags::bitflags;

pub use usbd_human_interface_device::page::Keyboard;

pub use action::{Action, BacklightCmd, Code, CustomKey, Media, MouseKey, Quantum};
pub use layer::{Layer, LayerState};
pub use layout::{Keymap, Revision};
pub use macros::{MacroId, MacroStep};
pub use manager::{Config, KeymapManager};
pub use store::{DefaultLayerStore, Eeprom, EepromStore, MemEeprom};
pub use tones::{Note, Tone};

pub mod action;
pub mod keys;
pub mod layer;
pub mod layout;
pub mod macros;
pub mod manager;
pub mod muse;
pub mod store;
pub mod tones;

mod dispatch;

#[cfg(test)]
mod testlog;

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        mod log {
            pub use defmt::{debug, info, warn};
        }
    } else if #[cfg(feature = "log")] {
        mod log {
            pub use log::{debug, info, warn};
        }
    } else {
        // The arguments still go through `format_args!`, so they count as used.
        #[allow(unused_macros)]
        mod log {
            macro_rules! log_debug { ($($arg:tt)*) => {{ let _ = ::core::format_args!($($arg)*); }} }
            macro_rules! log_info { ($($arg:tt)*) => {{ let _ = ::core::format_args!($($arg)*); }} }
            macro_rules! log_warn { ($($arg:tt)*) => {{ let _ = ::core::format_args!($($arg)*); }} }
            #[allow(unused_imports)]
            pub(crate) use {log_debug as debug, log_info as info, log_warn as warn};
        }
    }
}

/// Key events indicate keys going up or down.  The value is the scan code, see [`keys`].
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Press(u8),
    Release(u8),
}

impl KeyEvent {
    pub fn key(&self) -> u8 {
        match self {
            KeyEvent::Press(k) => *k,
            KeyEvent::Release(k) => *k,
        }
    }

    pub fn is_press(&self) -> bool {
        match self {
            KeyEvent::Press(_) => true,
            KeyEvent::Release(_) => false,
        }
    }

    pub fn is_release(&self) -> bool {
        !self.is_press()
    }
}

bitflags! {
    /// A modifier map.  This indicates what modifiers should be held down along with a key, or
    /// which modifiers a mod-tap key holds.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    pub struct Mods: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const GUI = 0b0000_1000;
    }
}

impl Mods {
    /// The HID modifier keys for this set, in a fixed order (control, shift, alt, gui).
    pub fn keys(self) -> ArrayVec<Keyboard, 4> {
        let mut keys = ArrayVec::new();
        if self.contains(Mods::CONTROL) {
            keys.push(Keyboard::LeftControl);
        }
        if self.contains(Mods::SHIFT) {
            keys.push(Keyboard::LeftShift);
        }
        if self.contains(Mods::ALT) {
            keys.push(Keyboard::LeftAlt);
        }
        if self.contains(Mods::GUI) {
            keys.push(Keyboard::LeftGUI);
        }
        keys
    }
}

/// Something the keymap wants the firmware to do.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Event {
    /// Add a code to the HID report.
    Register(Code),

    /// Remove a code from the HID report.
    Unregister(Code),

    /// Run this macro through the firmware's macro player.
    Macro(&'static [MacroStep]),

    /// Play a song.  Playback is fire and forget.
    Tone(&'static Tone),

    /// Silence everything that is playing.
    StopAllNotes,

    /// Start a sustained note, given as a midi note number.
    PlayNote(u8),

    /// Stop a note started with [`Event::PlayNote`].
    StopNote(u8),

    /// Backlight control.
    Backlight(BacklightCmd),

    /// A command handled by the firmware itself (reset, audio, music mode, ...).
    Quantum(Quantum),
}

/// A generalized event queue.
pub trait EventQueue {
    // Attempt to push to the queue.  Events will be discarded if the queue is full.
    fn push(&mut self, val: Event);
}

impl<const N: usize> EventQueue for ArrayVec<Event, N> {
    fn push(&mut self, val: Event) {
        let _ = self.try_push(val);
    }
}
