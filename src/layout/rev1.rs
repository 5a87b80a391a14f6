//! First revision
//!
//! A plain qwerty base, with the usual Lower/Raise/Adjust stack on top.

use usbd_human_interface_device::page::Keyboard as K;

use super::{Grid, Keymap, Revision};
use crate::action::{custom, k, m, media, q, Action, CustomKey, Media, Quantum, ____};
use crate::layer::Layer;
use crate::macros::MacroId;
use crate::tones::{self, Tones};

const LOWER: Action = custom(CustomKey::Lower);
const RAISE: Action = custom(CustomKey::Raise);

/* Qwerty
 * ,-----------------------------------------------------------------------------------.
 * |  `   |   1  |   2  |   3  |   4  |   5  |   6  |   7  |   8  |   9  |   0  | Bksp |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Tab  |   Q  |   W  |   E  |   R  |   T  |   Y  |   U  |   I  |   O  |   P  |  \   |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Esc  |   A  |   S  |   D  |   F  |   G  |   H  |   J  |   K  |   L  |   ;  |  '   |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Shift|   Z  |   X  |   C  |   V  |   B  |   N  |   M  |   ,  |   .  |   /  |Enter |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Shift| Ctrl | Alt  | GUI  |Lower |    Space    | Raise|   -  |  =   |  [   |   ]  |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
static QWERTY: Grid = [
    [k(K::Grave), k(K::Keyboard1), k(K::Keyboard2), k(K::Keyboard3), k(K::Keyboard4), k(K::Keyboard5),
     k(K::Keyboard6), k(K::Keyboard7), k(K::Keyboard8), k(K::Keyboard9), k(K::Keyboard0), k(K::DeleteBackspace)],
    [k(K::Tab), k(K::Q), k(K::W), k(K::E), k(K::R), k(K::T),
     k(K::Y), k(K::U), k(K::I), k(K::O), k(K::P), k(K::Backslash)],
    [k(K::Escape), k(K::A), k(K::S), k(K::D), k(K::F), k(K::G),
     k(K::H), k(K::J), k(K::K), k(K::L), k(K::Semicolon), k(K::Apostrophe)],
    [k(K::RightShift), k(K::Z), k(K::X), k(K::C), k(K::V), k(K::B),
     k(K::N), k(K::M), k(K::Comma), k(K::Dot), k(K::ForwardSlash), k(K::ReturnEnter)],
    [k(K::LeftShift), k(K::LeftControl), k(K::LeftAlt), k(K::LeftGUI), LOWER, k(K::Space),
     k(K::Space), RAISE, k(K::Minus), k(K::Equal), k(K::LeftBrace), k(K::RightBrace)],
];

/* Lower
 * ,-----------------------------------------------------------------------------------.
 * | Esc  |   F1 |  F2  |  F3  |  F4  |  F5  |  F6  |  F7  |  F8  |  F9  |  F10 | Del  |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Mute | BkSpc|   Up |  Del |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      | Left | Down | Right|      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Vol+ | Prev | Play | Next |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Vol- |      |      |      |      |             |      |      |      |      |      |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
static LOWER_GRID: Grid = [
    [k(K::Escape), k(K::F1), k(K::F2), k(K::F3), k(K::F4), k(K::F5),
     k(K::F6), k(K::F7), k(K::F8), k(K::F9), k(K::F10), k(K::DeleteForward)],
    [k(K::Mute), k(K::DeleteBackspace), k(K::UpArrow), k(K::DeleteForward), ____, ____,
     ____, ____, ____, ____, ____, ____],
    [____, k(K::LeftArrow), k(K::DownArrow), k(K::RightArrow), ____, ____,
     ____, ____, ____, ____, ____, ____],
    [k(K::VolumeUp), media(Media::PrevTrack), media(Media::PlayPause), media(Media::NextTrack), ____, ____,
     ____, ____, ____, ____, ____, ____],
    [k(K::VolumeDown), ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
];

/* Raise
 * ,-----------------------------------------------------------------------------------.
 * | Esc  | F11  | F12  |  F13 |  F14 | F15  | F16  | F17  | F18  | F19  |  F20 |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      | Bksp | PgUp |  Del |eShrug|      | Home | PgDn | PgUp | End  |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      | Home | PgDn |  End | Shrug|      | Left | Down |  Up  | Right|      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      | Pause| Ins  |   -  |   =  | Print|      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |      |      |             |      |      |      |      |      |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
static RAISE_GRID: Grid = [
    [k(K::Escape), k(K::F11), k(K::F12), k(K::F13), k(K::F14), k(K::F15),
     k(K::F16), k(K::F17), k(K::F18), k(K::F19), k(K::F20), ____],
    [____, k(K::DeleteBackspace), k(K::PageUp), k(K::DeleteForward), m(MacroId::EShrug), ____,
     k(K::Home), k(K::PageDown), k(K::PageUp), k(K::End), ____, ____],
    [____, k(K::Home), k(K::PageDown), k(K::End), m(MacroId::Shrug), ____,
     k(K::LeftArrow), k(K::DownArrow), k(K::UpArrow), k(K::RightArrow), ____, ____],
    [____, k(K::Pause), k(K::Insert), k(K::Minus), k(K::Equal), k(K::PrintScreen),
     ____, ____, ____, ____, ____, ____],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
];

/* Adjust (Lower + Raise)
 * ,-----------------------------------------------------------------------------------.
 * |      |      |      |      |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |      |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |Aud On|AudOff|      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |Mus On|MusOff|      |      |      |QWERTY|      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |      |      |     Reset   |      |      |      |      |      |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
static ADJUST: Grid = [
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
    [____, ____, ____, q(Quantum::AudioOn), q(Quantum::AudioOff), ____,
     ____, ____, ____, ____, ____, ____],
    [____, ____, ____, q(Quantum::MusicOn), q(Quantum::MusicOff), ____,
     ____, ____, custom(CustomKey::Qwerty), ____, ____, ____],
    [____, ____, ____, ____, ____, q(Quantum::Reset),
     q(Quantum::Reset), ____, ____, ____, ____, ____],
];

pub(super) static KEYMAP: Keymap = Keymap {
    revision: Revision::First,
    layers: [
        Some(&QWERTY),
        None,
        None,
        Some(&LOWER_GRID),
        Some(&RAISE_GRID),
        Some(&ADJUST),
    ],
    tri_layer: Some((Layer::Lower, Layer::Raise, Layer::Adjust)),
    tones: Tones {
        startup: &tones::STARTUP,
        goodbye: &tones::GOODBYE,
        default_layer: &tones::DEFAULT_LAYER,
        music_on: None,
        caps_on: None,
        caps_off: None,
    },
    peripherals: false,
};
