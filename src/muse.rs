//! Muse mode
//!
//! Muse is a small generative music toy: on a timer, it picks a note from a major scale, using a
//! pseudo random walk driven by a shift register.  The encoder adjusts either the pitch offset or
//! the tempo while it is running.
//!
//! The clock is a 31 bit shift register.  Each pulse, four "interval" bits of it are combined into
//! a 4 bit value selecting the scale step.  Every second pulse, the even parity of four "theme"
//! bits is shifted into the register.

use crate::log::info;
use crate::{Event, EventQueue};

/// The scale to play, as offsets from the muse offset.  Indexed by the clock output.
pub const SCALE: [u8; 16] = [0, 2, 4, 5, 7, 9, 11, 12, 14, 16, 17, 19, 21, 23, 24, 26];

/// Register bits, numbered from 1.
const INTERVAL: [u8; 4] = [7, 19, 3, 28];
const THEME: [u8; 4] = [8, 23, 18, 17];

/// The clock.
#[derive(Clone, Copy, Default, Debug)]
pub struct MuseClock {
    half: bool,
    register: u32,
}

impl MuseClock {
    fn combine(&self, taps: &[u8; 4]) -> u8 {
        taps.iter().enumerate().fold(0, |acc, (i, bit)| {
            let set = self.register & (1 << (bit - 1)) != 0;
            acc | ((set as u8) << i)
        })
    }

    /// Advance the clock, returning the scale step to play, in `0..16`.
    pub fn pulse(&mut self) -> u8 {
        let top = self.combine(&THEME).count_ones() % 2 == 0;

        if !self.half {
            self.register = ((self.register << 1) | top as u32) & 0x7fff_ffff;
        }
        self.half = !self.half;

        self.combine(&INTERVAL)
    }
}

/// The muse state.  Lives for as long as the keymap does, nothing is persisted.
#[derive(Clone, Copy, Debug)]
pub struct Muse {
    /// Muse mode is running.
    mode: bool,
    /// Midi note of the bottom of the scale.
    offset: u8,
    /// Scan ticks per clock pulse.  Never 0.
    tempo: u16,
    counter: u16,
    last_note: u8,
    clock: MuseClock,
}

impl Muse {
    pub fn new(offset: u8, tempo: u16) -> Muse {
        Muse {
            mode: false,
            offset,
            tempo: tempo.max(1),
            counter: 0,
            last_note: 0,
            clock: MuseClock::default(),
        }
    }

    /// Muse mode is running.
    pub fn mode(&self) -> bool {
        self.mode
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn tempo(&self) -> u16 {
        self.tempo
    }

    /// Turn muse mode on or off.  Turning it off silences anything playing.
    pub fn set_mode(&mut self, mode: bool, audio: bool, events: &mut dyn EventQueue) {
        info!("muse mode: {}", mode);
        self.mode = mode;
        if !mode && audio {
            events.push(Event::StopAllNotes);
        }
    }

    pub fn nudge_offset(&mut self, up: bool) {
        self.offset = if up {
            self.offset.wrapping_add(1)
        } else {
            self.offset.wrapping_sub(1)
        };
    }

    pub fn nudge_tempo(&mut self, up: bool) {
        self.tempo = if up {
            self.tempo.saturating_add(1)
        } else {
            self.tempo.saturating_sub(1).max(1)
        };
    }

    /// Called every scan.
    pub fn scan(&mut self, audio: bool, events: &mut dyn EventQueue) {
        if !audio || !self.mode {
            return;
        }
        if self.counter == 0 {
            let step = self.clock.pulse();
            let note = self.offset.wrapping_add(SCALE[step as usize]);
            if note != self.last_note {
                events.push(Event::StopNote(self.last_note));
                events.push(Event::PlayNote(note));
                self.last_note = note;
            }
        }
        self.counter = (self.counter + 1) % self.tempo;
    }
}
