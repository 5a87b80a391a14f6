//! Layer tables
//!
//! The keymap has gone through three revisions, and all of them are kept here, as the older
//! boards still get flashed occasionally.
//!
//! - [`Revision::First`]: Qwerty with Lower, Raise and Adjust.  Shrugs on Raise.
//! - [`Revision::Second`]: adds the Numpad default layer, tap/hold keys on the base layer, and a
//!   caps lock key that lights up the backlight.
//! - [`Revision::Third`]: the rev3 board, which has an encoder and DIP switches.  Caps lock
//!   chirps, and muse mode is wired to the DIP switch.
//!
//! Each revision's tables live in its own submodule, as a [`Keymap`].

use crate::action::Action;
use crate::keys::{COLS, ROWS};
use crate::layer::{Layer, NUM_LAYERS};
use crate::tones::Tones;

mod rev1;
mod rev2;
mod rev3;

/// One layer's worth of actions.
pub type Grid = [[Action; COLS]; ROWS];

/// Everything that describes one revision of the keymap.
#[derive(Debug)]
pub struct Keymap {
    pub revision: Revision,

    /// The grid for each layer.  `None` when the revision doesn't populate that layer, which
    /// behaves as if the whole layer were transparent.
    pub layers: [Option<&'static Grid>; NUM_LAYERS],

    /// When the first two layers are both on, the third is forced on.
    pub tri_layer: Option<(Layer, Layer, Layer)>,

    pub tones: Tones,

    /// The board has the encoder and DIP switches.
    pub peripherals: bool,
}

impl Keymap {
    pub fn grid(&self, layer: Layer) -> Option<&'static Grid> {
        self.layers[layer.index()]
    }

    /// Does this revision have anything on this layer.
    pub fn has_layer(&self, layer: Layer) -> bool {
        self.grid(layer).is_some()
    }
}

/// The revisions of the keymap.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Revision {
    First,
    Second,
    #[default]
    Third,
}

impl Revision {
    pub const ALL: [Revision; 3] = [Revision::First, Revision::Second, Revision::Third];

    pub fn keymap(self) -> &'static Keymap {
        match self {
            Revision::First => &rev1::KEYMAP,
            Revision::Second => &rev2::KEYMAP,
            Revision::Third => &rev3::KEYMAP,
        }
    }
}
