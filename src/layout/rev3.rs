//! Third revision
//!
//! For the rev3 board.  The typing layers carry over from the second revision unchanged; the
//! Arrow key is gone from Adjust, and the encoder and DIP switches are handled by the manager.

use super::rev2::{LOWER_GRID, NUMPAD, QWERTY, RAISE_GRID};
use super::{Grid, Keymap, Revision};
use crate::action::{custom, media, q, Action, BacklightCmd, Code, CustomKey, Media, Quantum, ____};
use crate::layer::Layer;
use crate::tones::{self, Tones};
use crate::Mods;

/* Adjust (Lower + Raise, or DIP switch 1)
 * ,-----------------------------------------------------------------------------------.
 * |      |      |      |      |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |AGNorm|AGSwap|      |      |^SEjct|      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |Aud On|AudOff|MidiOn|MdiOff| Eject|BLStep|      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |Voice-|Voice+|Mus On|MusOff|      |      |      |QWERTY|NUMPAD|      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |      |      |     Reset   |      |      |      |      |      |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
static ADJUST: Grid = [
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
    [____, ____, ____, q(Quantum::AgNorm), q(Quantum::AgSwap), ____,
     ____, Action::Modded(Mods::CONTROL.union(Mods::SHIFT), Code::Media(Media::Eject)), ____, ____, ____, ____],
    [____, ____, ____, q(Quantum::AudioOn), q(Quantum::AudioOff), q(Quantum::MidiOn),
     q(Quantum::MidiOff), media(Media::Eject), Action::Backlight(BacklightCmd::Step), ____, ____, ____],
    [____, q(Quantum::MusicVoiceDecrease), q(Quantum::MusicVoiceIncrease), q(Quantum::MusicOn), q(Quantum::MusicOff), ____,
     ____, ____, custom(CustomKey::Qwerty), custom(CustomKey::Numpad), ____, ____],
    [____, ____, ____, ____, ____, q(Quantum::Reset),
     q(Quantum::Reset), ____, ____, ____, ____, ____],
];

pub(super) static KEYMAP: Keymap = Keymap {
    revision: Revision::Third,
    layers: [
        Some(&QWERTY),
        None,
        Some(&NUMPAD),
        Some(&LOWER_GRID),
        Some(&RAISE_GRID),
        Some(&ADJUST),
    ],
    tri_layer: Some((Layer::Lower, Layer::Raise, Layer::Adjust)),
    tones: Tones {
        startup: &tones::STARTUP,
        goodbye: &tones::GOODBYE,
        default_layer: &tones::DEFAULT_LAYER,
        music_on: Some(&tones::MUSIC_ON),
        caps_on: Some(&tones::CAPS_ON),
        caps_off: Some(&tones::CAPS_OFF),
    },
    peripherals: true,
};
