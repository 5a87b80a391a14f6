//! Second revision
//!
//! The first board with tap/hold on the base layer: Esc and both halves of the space bar double
//! as Raise/Lower, and the brackets on the right double as modifiers.  Numpad can be made the
//! default, for spreadsheet days.
//!
//! Arrow was declared but never got a layer; its key persists Lower as the default instead.

use usbd_human_interface_device::page::Keyboard as K;

use super::{Grid, Keymap, Revision};
use crate::action::{
    custom, k, lt, m, media, mouse, mt, q, Action, BacklightCmd, Code, CustomKey, Media,
    MouseKey, Quantum, ____,
};
use crate::layer::Layer;
use crate::macros::MacroId;
use crate::tones::{self, Tones};
use crate::Mods;

const LOWER: Action = custom(CustomKey::Lower);
const RAISE: Action = custom(CustomKey::Raise);

/* Qwerty
 * ,-----------------------------------------------------------------------------------.
 * |  `   |   1  |   2  |   3  |   4  |   5  |   6  |   7  |   8  |   9  |   0  | Bksp |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Tab  |   Q  |   W  |   E  |   R  |   T  |   Y  |   U  |   I  |   O  |   P  |  \   |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |Esc/Ra|   A  |   S  |   D  |   F  |   G  |   H  |   J  |   K  |   L  |   ;  |  '   |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Shift|   Z  |   X  |   C  |   V  |   B  |   N  |   M  |   ,  |   .  |   /  |Enter |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Shift| Ctrl | Alt  | GUI  |Lower |Spc/Lo|Spc/Ra| Raise|-/GUI |=/Alt |[/Ctl |]/Sft |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
pub(super) static QWERTY: Grid = [
    [k(K::Grave), k(K::Keyboard1), k(K::Keyboard2), k(K::Keyboard3), k(K::Keyboard4), k(K::Keyboard5),
     k(K::Keyboard6), k(K::Keyboard7), k(K::Keyboard8), k(K::Keyboard9), k(K::Keyboard0), k(K::DeleteBackspace)],
    [k(K::Tab), k(K::Q), k(K::W), k(K::E), k(K::R), k(K::T),
     k(K::Y), k(K::U), k(K::I), k(K::O), k(K::P), k(K::Backslash)],
    [lt(Layer::Raise, K::Escape), k(K::A), k(K::S), k(K::D), k(K::F), k(K::G),
     k(K::H), k(K::J), k(K::K), k(K::L), k(K::Semicolon), k(K::Apostrophe)],
    [k(K::RightShift), k(K::Z), k(K::X), k(K::C), k(K::V), k(K::B),
     k(K::N), k(K::M), k(K::Comma), k(K::Dot), k(K::ForwardSlash), k(K::ReturnEnter)],
    [k(K::LeftShift), k(K::LeftControl), k(K::LeftAlt), k(K::LeftGUI), LOWER, lt(Layer::Lower, K::Space),
     lt(Layer::Raise, K::Space), RAISE, mt(Mods::GUI, K::Minus), mt(Mods::ALT, K::Equal),
     mt(Mods::CONTROL, K::LeftBrace), mt(Mods::SHIFT, K::RightBrace)],
];

/* Numpad
 * ,-----------------------------------------------------------------------------------.
 * |  Esc |   /  |   *  |   -  |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |   7  |   8  |   9  |   +  |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |   4  |   5  |   6  |   +  |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |   1  |   2  |   3  | Enter|      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |   0  |   0  |  .   | Enter|      |      |      |      |      |      |      |      |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
pub(super) static NUMPAD: Grid = [
    [k(K::Escape), k(K::KeypadDivide), k(K::KeypadMultiply), k(K::KeypadSubtract),
     ____, ____, ____, ____, ____, ____, ____, ____],
    [k(K::Keypad7), k(K::Keypad8), k(K::Keypad9), k(K::KeypadAdd),
     ____, ____, ____, ____, ____, ____, ____, ____],
    [k(K::Keypad4), k(K::Keypad5), k(K::Keypad6), k(K::KeypadAdd),
     ____, ____, ____, ____, ____, ____, ____, ____],
    [k(K::Keypad1), k(K::Keypad2), k(K::Keypad3), k(K::KeypadEnter),
     ____, ____, ____, ____, ____, ____, ____, ____],
    [k(K::Keypad0), k(K::Keypad0), k(K::KeypadDot), k(K::KeypadEnter),
     ____, ____, ____, ____, ____, ____, ____, ____],
];

/* Lower
 * ,-----------------------------------------------------------------------------------.
 * | Esc  |   F1 |  F2  |  F3  |  F4  |  F5  |  F6  |  F7  |  F8  |  F9  |  F10 | Del  |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Mute | BkSpc|   Up |  Del | Forwd| MBtn1| MUp  | MBtn2|   /  |   7  |   8  |  9   |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      | Left | Down | Right| Refr | MLeft| MDn  |MRight|   *  |   4  |   5  |  6   |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Vol+ | Prev | Play | Next | Back | MWDn | MBtn3| MWUp |   -  |   1  |   2  |  3   |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Vol- |      |      |      |      |      |      |      |   +  | Enter|   0  |  .   |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
pub(super) static LOWER_GRID: Grid = [
    [k(K::Escape), k(K::F1), k(K::F2), k(K::F3), k(K::F4), k(K::F5),
     k(K::F6), k(K::F7), k(K::F8), k(K::F9), k(K::F10), k(K::DeleteForward)],
    [k(K::Mute), k(K::DeleteBackspace), k(K::UpArrow), k(K::DeleteForward), media(Media::WwwForward), mouse(MouseKey::Button1),
     mouse(MouseKey::Up), mouse(MouseKey::Button2), k(K::KeypadDivide), k(K::Keypad7), k(K::Keypad8), k(K::Keypad9)],
    [____, k(K::LeftArrow), k(K::DownArrow), k(K::RightArrow), media(Media::WwwRefresh), mouse(MouseKey::Left),
     mouse(MouseKey::Down), mouse(MouseKey::Right), k(K::KeypadMultiply), k(K::Keypad4), k(K::Keypad5), k(K::Keypad6)],
    [k(K::VolumeUp), media(Media::PrevTrack), media(Media::PlayPause), media(Media::NextTrack), media(Media::WwwBack), mouse(MouseKey::WheelDown),
     mouse(MouseKey::Button3), mouse(MouseKey::WheelUp), k(K::KeypadSubtract), k(K::Keypad1), k(K::Keypad2), k(K::Keypad3)],
    [k(K::VolumeDown), ____, ____, ____, ____, ____,
     ____, ____, k(K::KeypadAdd), k(K::KeypadEnter), k(K::Keypad0), k(K::KeypadDot)],
];

/* Raise
 * ,-----------------------------------------------------------------------------------.
 * | Esc  | F11  | F12  |  F13 |  F14 | F15  | F16  | F17  | F18  | F19  |  F20 |NumLck|
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * | Caps | Bksp | PgUp |  Del |eShrug| Face | Home | PgDn | PgUp | End  |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      | Home | PgDn |  End | Shrug| Hand | Left | Down |  Up  | Right|      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      | Pause| Ins  |   -  |   =  | Print|Print |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |      |      |             |      |      |      |      |      |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
pub(super) static RAISE_GRID: Grid = [
    [k(K::Escape), k(K::F11), k(K::F12), k(K::F13), k(K::F14), k(K::F15),
     k(K::F16), k(K::F17), k(K::F18), k(K::F19), k(K::F20), k(K::KeypadNumLockAndClear)],
    [m(MacroId::Caps), k(K::DeleteBackspace), k(K::PageUp), k(K::DeleteForward), m(MacroId::EShrug), m(MacroId::ShrugFace),
     k(K::Home), k(K::PageDown), k(K::PageUp), k(K::End), ____, ____],
    [____, k(K::Home), k(K::PageDown), k(K::End), m(MacroId::Shrug), m(MacroId::ShrugHand),
     k(K::LeftArrow), k(K::DownArrow), k(K::UpArrow), k(K::RightArrow), ____, ____],
    [____, k(K::Pause), k(K::Insert), k(K::Minus), k(K::Equal), k(K::PrintScreen),
     k(K::PrintScreen), ____, ____, ____, ____, ____],
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
];

/* Adjust (Lower + Raise)
 * ,-----------------------------------------------------------------------------------.
 * |      |      |      |      |      |      |      |      |      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |AGNorm|AGSwap|      |      |^SEjct|      |      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |Aud On|AudOff|MidiOn|MdiOff| Eject|BLStep|      |      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |Voice-|Voice+|Mus On|MusOff|      |      | Arrow|QWERTY|NUMPAD|      |      |
 * |------+------+------+------+------+------+------+------+------+------+------+------|
 * |      |      |      |      |      |     Reset   |      |      |      |      |      |
 * `-----------------------------------------------------------------------------------'
 */
#[rustfmt::skip]
pub(super) static ADJUST: Grid = [
    [____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____, ____],
    [____, ____, ____, q(Quantum::AgNorm), q(Quantum::AgSwap), ____,
     ____, Action::Modded(Mods::CONTROL.union(Mods::SHIFT), Code::Media(Media::Eject)), ____, ____, ____, ____],
    [____, ____, ____, q(Quantum::AudioOn), q(Quantum::AudioOff), q(Quantum::MidiOn),
     q(Quantum::MidiOff), media(Media::Eject), Action::Backlight(BacklightCmd::Step), ____, ____, ____],
    [____, q(Quantum::MusicVoiceDecrease), q(Quantum::MusicVoiceIncrease), q(Quantum::MusicOn), q(Quantum::MusicOff), ____,
     ____, custom(CustomKey::Arrow), custom(CustomKey::Qwerty), custom(CustomKey::Numpad), ____, ____],
    [____, ____, ____, ____, ____, q(Quantum::Reset),
     q(Quantum::Reset), ____, ____, ____, ____, ____],
];

pub(super) static KEYMAP: Keymap = Keymap {
    revision: Revision::Second,
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
        caps_on: None,
        caps_off: None,
    },
    peripherals: false,
};
