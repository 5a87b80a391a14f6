//! Audio feedback
//!
//! Songs are lists of (frequency, duration) pairs handed to the firmware's audio player.
//! Durations are in the player's note length units, where a quarter note is 64.

/// A single note of a song.  A frequency of 0 is a rest.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Note {
    pub freq: f32,
    pub duration: u16,
}

/// A song.
pub type Tone = [Note];

// Note lengths.
pub const SIXTEENTH: u16 = 16;
pub const EIGHTH: u16 = 32;
pub const DOTTED_EIGHTH: u16 = 48;
pub const QUARTER: u16 = 64;
pub const HALF: u16 = 128;

// Equal tempered frequencies, A4 = 440.
pub const REST: f32 = 0.0;
pub const A3: f32 = 220.00;
pub const B3: f32 = 246.94;
pub const B5: f32 = 987.77;
pub const E6: f32 = 1318.51;
pub const DS6: f32 = 1244.51;
pub const GS6: f32 = 1661.22;
pub const A6: f32 = 1760.00;
pub const B6: f32 = 1975.53;
pub const C7: f32 = 2093.00;
pub const D7: f32 = 2349.32;
pub const E7: f32 = 2637.02;
pub const F7: f32 = 2793.83;
pub const G7: f32 = 3135.96;

const fn note(freq: f32, duration: u16) -> Note {
    Note { freq, duration }
}

/// Played once the matrix is up.  The short durations are deliberate, this is a chirp rather
/// than a tune.
pub static STARTUP: [Note; 4] = [
    note(B5, 20),
    note(B6, 8),
    note(DS6, 20),
    note(B6, 8),
];

/// Played for a new default layer.
pub static DEFAULT_LAYER: [Note; 4] = [
    note(GS6, HALF),
    note(A6, HALF),
    note(REST, SIXTEENTH),
    note(E7, QUARTER),
];

/// Played on shutdown and before jumping to the bootloader.
pub static GOODBYE: [Note; 7] = [
    note(E7, EIGHTH),
    note(REST, SIXTEENTH),
    note(A6, EIGHTH),
    note(REST, SIXTEENTH),
    note(D7, EIGHTH),
    note(REST, SIXTEENTH),
    note(A6, EIGHTH),
];

/// Played when music mode is turned on.
pub static MUSIC_ON: [Note; 5] = [
    note(C7, EIGHTH),
    note(D7, EIGHTH),
    note(E7, EIGHTH),
    note(F7, EIGHTH),
    note(G7, DOTTED_EIGHTH),
];

pub static CAPS_ON: [Note; 2] = [note(A3, EIGHTH), note(B3, EIGHTH)];

pub static CAPS_OFF: [Note; 2] = [note(B3, EIGHTH), note(A3, EIGHTH)];

/// The songs a revision of the keymap plays.  `None` means that event is silent.
#[derive(Clone, Copy, Debug)]
pub struct Tones {
    pub startup: &'static Tone,
    pub goodbye: &'static Tone,
    pub default_layer: &'static Tone,
    pub music_on: Option<&'static Tone>,
    pub caps_on: Option<&'static Tone>,
    pub caps_off: Option<&'static Tone>,
}
