//! Keymap-specific event handling
//!
//! The layer keys, the default layer keys and the macros.  Everything else is left to the
//! manager's default handling.

use usbd_human_interface_device::page::Keyboard;

use crate::action::{Action, BacklightCmd, Code, BACKLIGHT_LEVELS};
use crate::layer::Layer;
use crate::log::{debug, info};
use crate::macros::MacroId;
use crate::manager::KeymapManager;
use crate::store::DefaultLayerStore;
use crate::{Event, EventQueue};

impl<S: DefaultLayerStore> KeymapManager<S> {
    /// Handle the keymap's own keys.  Returns true if the action still needs the default
    /// handling.
    pub(crate) fn process_record_user(
        &mut self,
        action: Action,
        pressed: bool,
        events: &mut dyn EventQueue,
    ) -> bool {
        match action {
            Action::Momentary(layer) => {
                if pressed {
                    self.layers.on(layer);
                } else {
                    self.layers.off(layer);
                }
                self.update_tri_layer();
                false
            }
            Action::SetDefault(layer) => {
                if pressed {
                    self.persistent_default_layer_set(layer, events);
                }
                false
            }
            Action::Macro(id) => {
                self.action_get_macro(id, pressed, events);
                false
            }
            _ => true,
        }
    }

    fn persistent_default_layer_set(&mut self, layer: Layer, events: &mut dyn EventQueue) {
        info!("Default layer: {:?}", layer);
        self.play(self.keymap.tones.default_layer, events);
        self.store.store(layer);
        self.layers.set_default(layer);
    }

    fn action_get_macro(&mut self, id: MacroId, pressed: bool, events: &mut dyn EventQueue) {
        match id {
            MacroId::Caps => {
                let caps = Code::Key(Keyboard::CapsLock);
                if pressed {
                    events.push(Event::Register(caps));
                    events.push(Event::Backlight(BacklightCmd::Level(BACKLIGHT_LEVELS)));
                    events.push(Event::Backlight(BacklightCmd::BreathingToggle));
                    if let Some(tone) = self.keymap.tones.caps_on {
                        self.play(tone, events);
                    }
                } else {
                    events.push(Event::Unregister(caps));
                    if let Some(tone) = self.keymap.tones.caps_off {
                        self.play(tone, events);
                    }
                }
            }
            _ => {
                if !pressed {
                    return;
                }
                if let Some(steps) = id.steps() {
                    debug!("macro {:?}", id);
                    events.push(Event::Macro(steps));
                }
            }
        }
    }
}

impl Action {
    /// Should this key be turned into a note while the firmware is in music mode.  The layer keys
    /// keep working so that music mode can be left again.
    pub fn music_mask(&self) -> bool {
        !matches!(
            self,
            Action::Momentary(Layer::Lower) | Action::Momentary(Layer::Raise)
        )
    }
}
