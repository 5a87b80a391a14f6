//! The keymap manager
//!
//! [`KeymapManager`] owns all of the runtime state of the keymap: which layers are on, what each
//! held key is doing, the tap/hold key being decided, the audio flag, and the muse state.  The
//! firmware feeds it matrix events, scan ticks, and encoder and DIP switch changes, and receives
//! [`Event`]s in return.
//!
//! The custom keycodes and macros are handled in the dispatcher, everything else gets the plain
//! register on press, unregister on release treatment here.

use usbd_human_interface_device::page::Keyboard;

use crate::action::{Action, Code, Quantum};
use crate::keys::{self, NKEYS};
use crate::layer::{Layer, LayerState};
use crate::layout::{Keymap, Revision};
use crate::log::{debug, info};
use crate::muse::Muse;
use crate::store::DefaultLayerStore;
use crate::tones::Tone;
use crate::{Event, EventQueue, KeyEvent, Mods};

/// Keymap configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Which revision of the keymap to run.
    pub revision: Revision,
    /// Ticks a tap/hold key can be held and still count as a tap.
    pub tapping_term: u32,
    /// Whether tones and notes are produced at all.
    pub audio: bool,
    /// Initial midi note of the bottom of the muse scale.
    pub muse_offset: u8,
    /// Initial scan ticks per muse clock pulse.
    pub muse_tempo: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            revision: Revision::default(),
            tapping_term: 200,
            audio: cfg!(feature = "audio"),
            muse_offset: 70,
            muse_tempo: 50,
        }
    }
}

/// What a key that is down is doing, so that its release undoes the right thing.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Held {
    /// Dispatched as this action.
    Action(Action),
    /// A tap/hold key that hasn't been decided yet.
    Pending(Action),
    /// A tap/hold key that was decided as a hold.
    Hold(Action),
}

pub struct KeymapManager<S> {
    pub(crate) keymap: &'static Keymap,
    pub(crate) layers: LayerState,
    pub(crate) store: S,
    pub(crate) audio: bool,
    pub(crate) muse: Muse,

    tapping_term: u32,

    /// What each key that is down is doing.
    held: [Option<Held>; NKEYS],

    /// The tap/hold key being decided, and how long it has been down.
    pending: Option<u8>,
    pending_age: u32,
}

impl<S: DefaultLayerStore> KeymapManager<S> {
    /// Build the keymap, picking up the persisted default layer.
    pub fn new(config: Config, mut store: S) -> Self {
        let keymap = config.revision.keymap();
        let default = match store.load() {
            Some(layer) if keymap.has_layer(layer) => layer,
            _ => Layer::Qwerty,
        };
        info!("Keymap {:?}, default layer {:?}", config.revision, default);

        KeymapManager {
            keymap,
            layers: LayerState::new(default),
            store,
            audio: config.audio,
            muse: Muse::new(config.muse_offset, config.muse_tempo),
            tapping_term: config.tapping_term,
            held: [None; NKEYS],
            pending: None,
            pending_age: 0,
        }
    }

    pub fn keymap(&self) -> &'static Keymap {
        self.keymap
    }

    pub fn layers(&self) -> &LayerState {
        &self.layers
    }

    pub fn muse(&self) -> &Muse {
        &self.muse
    }

    pub fn audio(&self) -> bool {
        self.audio
    }

    /// Give back the store, to simulate a power cycle.
    pub fn into_store(self) -> S {
        self.store
    }

    /// The matrix is up.
    pub fn startup(&mut self, events: &mut dyn EventQueue) {
        self.play(self.keymap.tones.startup, events);
    }

    /// The keyboard is about to go away (reset or power down).
    pub fn shutdown(&mut self, events: &mut dyn EventQueue) {
        self.play(self.keymap.tones.goodbye, events);
        if self.audio {
            events.push(Event::StopAllNotes);
        }
    }

    /// The firmware has entered music mode.
    pub fn music_on(&mut self, events: &mut dyn EventQueue) {
        if let Some(tone) = self.keymap.tones.music_on {
            self.play(tone, events);
        }
    }

    pub(crate) fn play(&self, tone: &'static Tone, events: &mut dyn EventQueue) {
        if self.audio {
            events.push(Event::Tone(tone));
        }
    }

    /// Called once per scan.
    pub fn tick(&mut self, events: &mut dyn EventQueue) {
        if self.pending.is_some() {
            self.pending_age = self.pending_age.saturating_add(1);
            if self.pending_age >= self.tapping_term {
                self.resolve_hold(events);
            }
        }
        if self.keymap.peripherals {
            self.muse.scan(self.audio, events);
        }
    }

    /// Handle a single key event.
    pub fn handle_event(&mut self, event: KeyEvent, events: &mut dyn EventQueue) {
        let code = event.key();
        if keys::position(code).is_none() {
            debug!("Key {} is not on the board", code);
            return;
        }
        let idx = code as usize;

        match event {
            KeyEvent::Press(_) => {
                // A tap/hold key that is already down stays as it is.
                if matches!(self.held[idx], Some(Held::Pending(_)) | Some(Held::Hold(_))) {
                    return;
                }

                // Anything else going down decides the pending key as a hold.
                if self.pending.is_some() {
                    self.resolve_hold(events);
                }

                let action = self.layers.lookup(self.keymap, code);
                debug!("press {}", code);
                if action.is_tap_hold() {
                    self.held[idx] = Some(Held::Pending(action));
                    self.pending = Some(code);
                    self.pending_age = 0;
                } else {
                    self.held[idx] = Some(Held::Action(action));
                    self.press(action, events);
                }
            }
            KeyEvent::Release(_) => {
                let held = match self.held[idx].take() {
                    Some(held) => held,
                    None => return,
                };
                debug!("release {}", code);
                match held {
                    Held::Pending(action) => {
                        self.pending = None;
                        debug!("tap {}", code);
                        tap(action, events);
                    }
                    Held::Hold(action) => self.release_hold(action, events),
                    Held::Action(action) => self.release(action, events),
                }
            }
        }
    }

    fn press(&mut self, action: Action, events: &mut dyn EventQueue) {
        if !self.process_record_user(action, true, events) {
            return;
        }
        match action {
            Action::Key(code) => events.push(Event::Register(code)),
            Action::Modded(mods, code) => {
                for key in mods.keys() {
                    events.push(Event::Register(Code::Key(key)));
                }
                events.push(Event::Register(code));
            }
            Action::Quantum(cmd) => self.quantum(cmd, events),
            Action::Backlight(cmd) => events.push(Event::Backlight(cmd)),
            // Tap/hold keys never get here, and the rest belong to `process_record_user`.
            Action::LayerTap(..)
            | Action::ModTap(..)
            | Action::Momentary(_)
            | Action::SetDefault(_)
            | Action::Macro(_)
            | Action::Transparent
            | Action::NoOp => (),
        }
    }

    fn release(&mut self, action: Action, events: &mut dyn EventQueue) {
        if !self.process_record_user(action, false, events) {
            return;
        }
        match action {
            Action::Key(code) => events.push(Event::Unregister(code)),
            Action::Modded(mods, code) => {
                events.push(Event::Unregister(code));
                unregister_mods(mods, events);
            }
            Action::Quantum(_)
            | Action::Backlight(_)
            | Action::LayerTap(..)
            | Action::ModTap(..)
            | Action::Momentary(_)
            | Action::SetDefault(_)
            | Action::Macro(_)
            | Action::Transparent
            | Action::NoOp => (),
        }
    }

    fn quantum(&mut self, cmd: Quantum, events: &mut dyn EventQueue) {
        match cmd {
            Quantum::Reset => {
                self.shutdown(events);
                events.push(Event::Quantum(cmd));
            }
            Quantum::MusicOn => {
                events.push(Event::Quantum(cmd));
                self.music_on(events);
            }
            Quantum::AudioOn => {
                self.audio = true;
                events.push(Event::Quantum(cmd));
            }
            Quantum::AudioOff => {
                events.push(Event::Quantum(cmd));
                self.audio = false;
            }
            _ => events.push(Event::Quantum(cmd)),
        }
    }

    /// Decide the pending tap/hold key as a hold.
    fn resolve_hold(&mut self, events: &mut dyn EventQueue) {
        let code = match self.pending.take() {
            Some(code) => code,
            None => return,
        };
        let idx = code as usize;
        if let Some(Held::Pending(action)) = self.held[idx] {
            debug!("hold {}", code);
            self.held[idx] = Some(Held::Hold(action));
            match action {
                Action::LayerTap(layer, _) => {
                    self.layers.on(layer);
                    self.layer_tap_changed(layer);
                }
                Action::ModTap(mods, _) => {
                    for key in mods.keys() {
                        events.push(Event::Register(Code::Key(key)));
                    }
                }
                _ => (),
            }
        }
    }

    fn release_hold(&mut self, action: Action, events: &mut dyn EventQueue) {
        match action {
            Action::LayerTap(layer, _) => {
                self.layers.off(layer);
                self.layer_tap_changed(layer);
            }
            Action::ModTap(mods, _) => unregister_mods(mods, events),
            _ => (),
        }
    }

    /// A tap/hold key moved `layer`.  Keep the combination layer in step when it is one of the
    /// inputs.
    fn layer_tap_changed(&mut self, layer: Layer) {
        if let Some((first, second, _)) = self.keymap.tri_layer {
            if layer == first || layer == second {
                self.update_tri_layer();
            }
        }
    }

    /// Re-derive the combination layer from its inputs.
    pub(crate) fn update_tri_layer(&mut self) {
        if let Some((first, second, combined)) = self.keymap.tri_layer {
            self.layers.update_tri_layer(first, second, combined);
        }
    }

    /// The encoder has moved a detent.
    pub fn encoder_update(&mut self, index: u8, clockwise: bool, events: &mut dyn EventQueue) {
        if !self.keymap.peripherals {
            debug!("No encoder on this board ({})", index);
            return;
        }
        if self.muse.mode() {
            if self.layers.is_on(Layer::Raise) {
                self.muse.nudge_offset(clockwise);
            } else {
                self.muse.nudge_tempo(clockwise);
            }
        } else {
            let key = if clockwise {
                Keyboard::PageDown
            } else {
                Keyboard::PageUp
            };
            events.push(Event::Register(Code::Key(key)));
            events.push(Event::Unregister(Code::Key(key)));
        }
    }

    /// A DIP switch has changed.
    pub fn dip_switch_update(&mut self, index: u8, active: bool, events: &mut dyn EventQueue) {
        if !self.keymap.peripherals {
            debug!("No DIP switches on this board ({})", index);
            return;
        }
        match index {
            0 => {
                info!("DIP adjust: {}", active);
                if active {
                    self.layers.on(Layer::Adjust);
                } else {
                    self.layers.off(Layer::Adjust);
                }
            }
            1 => self.muse.set_mode(active, self.audio, events),
            _ => (),
        }
    }
}

/// Tap the key of a tap/hold action.
fn tap(action: Action, events: &mut dyn EventQueue) {
    if let Action::LayerTap(_, key) | Action::ModTap(_, key) = action {
        events.push(Event::Register(Code::Key(key)));
        events.push(Event::Unregister(Code::Key(key)));
    }
}

/// Release modifiers, in the reverse order they were pressed.
fn unregister_mods(mods: Mods, events: &mut dyn EventQueue) {
    for key in mods.keys().iter().rev() {
        events.push(Event::Unregister(Code::Key(*key)));
    }
}
