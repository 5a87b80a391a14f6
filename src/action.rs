//! Key actions
//!
//! Every cell of every layer holds exactly one [`Action`].  The set of actions is closed: the
//! dispatcher matches on all of them, and anything it doesn't handle itself gets the default
//! register/unregister treatment.

use usbd_human_interface_device::page::Keyboard;

use crate::layer::Layer;
use crate::macros::MacroId;
use crate::Mods;

/// Something that can be placed in a HID report.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Code {
    /// A key from the keyboard usage page, including the modifier keys.
    Key(Keyboard),
    /// A key from the consumer page.
    Media(Media),
    /// A mouse key.
    Mouse(MouseKey),
}

/// The consumer page usages used by the keymap.  The value is the HID usage id.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Media {
    NextTrack = 0x00B5,
    PrevTrack = 0x00B6,
    Eject = 0x00B8,
    PlayPause = 0x00CD,
    WwwBack = 0x0224,
    WwwForward = 0x0225,
    WwwRefresh = 0x0227,
}

/// Mouse keys, given to the firmware's mouse key handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MouseKey {
    Up,
    Down,
    Left,
    Right,
    Button1,
    Button2,
    Button3,
    WheelUp,
    WheelDown,
}

/// Commands the firmware implements entirely by itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantum {
    /// Restore the normal Alt/GUI positions.
    AgNorm,
    /// Swap Alt and GUI.
    AgSwap,
    AudioOn,
    AudioOff,
    MidiOn,
    MidiOff,
    MusicOn,
    MusicOff,
    MusicVoiceDecrease,
    MusicVoiceIncrease,
    /// Jump to the bootloader.
    Reset,
}

/// Backlight requests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightCmd {
    /// Move to the next brightness step.
    Step,
    /// Set an absolute level.
    Level(u8),
    /// Toggle the breathing effect.
    BreathingToggle,
}

/// The number of backlight levels the board supports.  `Level(BACKLIGHT_LEVELS)` is full
/// brightness.
pub const BACKLIGHT_LEVELS: u8 = 3;

/// A key action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    /// Nothing happens.
    NoOp,
    /// Defer to the next lower active layer.
    Transparent,
    /// Send a key.
    Key(Code),
    /// Send a key with modifiers held.
    Modded(Mods, Code),
    /// Activate a layer while held.
    Momentary(Layer),
    /// Tap for the key, hold for the layer.
    LayerTap(Layer, Keyboard),
    /// Tap for the key, hold for the modifiers.
    ModTap(Mods, Keyboard),
    /// Persist a new default layer.
    SetDefault(Layer),
    /// Run one of the keymap's macros.
    Macro(MacroId),
    /// A firmware command.
    Quantum(Quantum),
    /// A backlight command.
    Backlight(BacklightCmd),
}

impl Action {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Action::Transparent)
    }

    /// Does this action need tap/hold resolution before it can be dispatched.
    pub fn is_tap_hold(&self) -> bool {
        matches!(self, Action::LayerTap(..) | Action::ModTap(..))
    }
}

/// The custom keycodes of the keymap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKey {
    Qwerty,
    Arrow,
    Numpad,
    Lower,
    Raise,
}

impl CustomKey {
    /// The action this keycode performs.
    pub const fn action(self) -> Action {
        match self {
            CustomKey::Qwerty => Action::SetDefault(Layer::Qwerty),
            // Arrow has never had a layer of its own, this key has always persisted Lower.
            CustomKey::Arrow => Action::SetDefault(Layer::Lower),
            CustomKey::Numpad => Action::SetDefault(Layer::Numpad),
            CustomKey::Lower => Action::Momentary(Layer::Lower),
            CustomKey::Raise => Action::Momentary(Layer::Raise),
        }
    }
}

// Short constructors for the layer tables.

pub(crate) const ____: Action = Action::Transparent;

pub(crate) const fn k(key: Keyboard) -> Action {
    Action::Key(Code::Key(key))
}

pub(crate) const fn media(key: Media) -> Action {
    Action::Key(Code::Media(key))
}

pub(crate) const fn mouse(key: MouseKey) -> Action {
    Action::Key(Code::Mouse(key))
}

pub(crate) const fn lt(layer: Layer, key: Keyboard) -> Action {
    Action::LayerTap(layer, key)
}

pub(crate) const fn mt(mods: Mods, key: Keyboard) -> Action {
    Action::ModTap(mods, key)
}

pub(crate) const fn custom(key: CustomKey) -> Action {
    key.action()
}

pub(crate) const fn m(id: MacroId) -> Action {
    Action::Macro(id)
}

pub(crate) const fn q(cmd: Quantum) -> Action {
    Action::Quantum(cmd)
}
