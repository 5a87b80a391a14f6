//! Macros
//!
//! The shrugs are typed with the macOS "Unicode Hex Input" source: holding Option while typing
//! four hex digits inserts that code point.  So `¯\_(ツ)_/¯` is `U+00AF`, then plain keys for
//! `\_(`, `U+30C4`, and plain keys for `)_/`, and `U+00AF` again.

use usbd_human_interface_device::page::Keyboard;

/// The macros of the keymap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroId {
    /// Caps lock, with the backlight turned up and breathing while it's held.
    Caps,
    /// `¯\_(ツ)_/¯`
    Shrug,
    /// `&shrug;`, for places that expand entities.
    EShrug,
    /// Just the `ツ`.
    ShrugFace,
    /// Just the `¯`.
    ShrugHand,
}

/// A single step of a macro, as understood by the firmware's macro player.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MacroStep {
    /// Delay this many ms between subsequent steps.
    Interval(u8),
    /// Press and hold.
    Down(Keyboard),
    /// Release.
    Up(Keyboard),
    /// Press and release.
    Tap(Keyboard),
    /// End of the macro.
    End,
}

use MacroStep::{Down, End, Interval, Tap, Up};

pub static SHRUG: [MacroStep; 30] = [
    Interval(10),
    Down(Keyboard::LeftAlt),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::A),
    Tap(Keyboard::F),
    Up(Keyboard::LeftAlt),
    Tap(Keyboard::Backslash),
    Down(Keyboard::LeftShift),
    Tap(Keyboard::Minus),
    Tap(Keyboard::Keyboard9),
    Up(Keyboard::LeftShift),
    Down(Keyboard::LeftAlt),
    Tap(Keyboard::Keyboard3),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::C),
    Tap(Keyboard::Keyboard4),
    Up(Keyboard::LeftAlt),
    Down(Keyboard::LeftShift),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::Minus),
    Up(Keyboard::LeftShift),
    Tap(Keyboard::ForwardSlash),
    Down(Keyboard::LeftAlt),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::A),
    Tap(Keyboard::F),
    Up(Keyboard::LeftAlt),
    End,
];

pub static ESHRUG: [MacroStep; 11] = [
    Interval(10),
    Down(Keyboard::LeftShift),
    Tap(Keyboard::Keyboard7),
    Up(Keyboard::LeftShift),
    Tap(Keyboard::S),
    Tap(Keyboard::H),
    Tap(Keyboard::R),
    Tap(Keyboard::U),
    Tap(Keyboard::G),
    Tap(Keyboard::Semicolon),
    End,
];

pub static SHRUG_FACE: [MacroStep; 8] = [
    Interval(10),
    Down(Keyboard::LeftAlt),
    Tap(Keyboard::Keyboard3),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::C),
    Tap(Keyboard::Keyboard4),
    Up(Keyboard::LeftAlt),
    End,
];

pub static SHRUG_HAND: [MacroStep; 8] = [
    Interval(10),
    Down(Keyboard::LeftAlt),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::Keyboard0),
    Tap(Keyboard::A),
    Tap(Keyboard::F),
    Up(Keyboard::LeftAlt),
    End,
];

impl MacroId {
    /// The step sequence for this macro.  Caps isn't played through the macro player, so it has
    /// none.
    pub fn steps(self) -> Option<&'static [MacroStep]> {
        match self {
            MacroId::Caps => None,
            MacroId::Shrug => Some(&SHRUG[..]),
            MacroId::EShrug => Some(&ESHRUG[..]),
            MacroId::ShrugFace => Some(&SHRUG_FACE[..]),
            MacroId::ShrugHand => Some(&SHRUG_HAND[..]),
        }
    }
}
