//! Layers
//!
//! A layer is a complete grid of actions.  Layers are stacked by their ordinal: when looking up a
//! key, the highest active layer that has something other than [`Action::Transparent`] at that
//! position wins.  The default layer is always considered active.

use enumset::{EnumSet, EnumSetType};

use crate::action::Action;
use crate::keys;
use crate::layout::Keymap;

/// The layers of the keymap.  Not every revision populates every layer.
#[derive(EnumSetType, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Qwerty,
    Arrow,
    Numpad,
    Lower,
    Raise,
    Adjust,
}

/// The number of layers.
pub const NUM_LAYERS: usize = 6;

impl Layer {
    /// All of the layers, lowest priority first.
    pub const ALL: [Layer; NUM_LAYERS] = [
        Layer::Qwerty,
        Layer::Arrow,
        Layer::Numpad,
        Layer::Lower,
        Layer::Raise,
        Layer::Adjust,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: u8) -> Option<Layer> {
        Self::ALL.get(index as usize).copied()
    }
}

/// The runtime layer state: the set of layers that have been turned on, and the default layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayerState {
    active: EnumSet<Layer>,
    default: Layer,
}

impl Default for LayerState {
    fn default() -> Self {
        LayerState::new(Layer::Qwerty)
    }
}

impl LayerState {
    /// Start out with nothing but the default layer.
    pub fn new(default: Layer) -> LayerState {
        LayerState {
            active: EnumSet::empty(),
            default,
        }
    }

    pub fn on(&mut self, layer: Layer) {
        self.active.insert(layer);
    }

    pub fn off(&mut self, layer: Layer) {
        self.active.remove(layer);
    }

    /// Is this layer turned on.  The default layer only counts if it was also turned on.
    pub fn is_on(&self, layer: Layer) -> bool {
        self.active.contains(layer)
    }

    /// The layers turned on, not counting the default layer.
    pub fn active(&self) -> EnumSet<Layer> {
        self.active
    }

    pub fn default_layer(&self) -> Layer {
        self.default
    }

    pub fn set_default(&mut self, layer: Layer) {
        self.default = layer;
    }

    /// Force `combined` on when both `first` and `second` are on, and off otherwise.
    pub fn update_tri_layer(&mut self, first: Layer, second: Layer, combined: Layer) {
        if self.is_on(first) && self.is_on(second) {
            self.on(combined);
        } else {
            self.off(combined);
        }
    }

    /// Find the action for the given scan code.
    ///
    /// Searches from the highest layer down, considering only layers that are active (or the
    /// default) and populated in this keymap.  If every such layer is transparent at this
    /// position, the action from the bottom layer is used.
    pub fn lookup(&self, keymap: &Keymap, code: u8) -> Action {
        let (row, col) = match keys::position(code) {
            Some(pos) => pos,
            None => return Action::NoOp,
        };
        let considered = self.active | EnumSet::only(self.default);
        for layer in Layer::ALL.iter().rev() {
            if !considered.contains(*layer) {
                continue;
            }
            if let Some(grid) = keymap.grid(*layer) {
                let action = grid[row][col];
                if !action.is_transparent() {
                    return action;
                }
            }
        }
        match keymap.grid(Layer::Qwerty).map(|grid| grid[row][col]) {
            Some(action) if !action.is_transparent() => action,
            _ => Action::NoOp,
        }
    }
}
