//! Keymap scenarios
//!
//! Each test drives a [`KeymapManager`] through a list of steps, and checks the events it asks
//! the firmware to perform, in order.

use std::collections::VecDeque;

use preonic_keymap::keys::*;
use preonic_keymap::macros::{ESHRUG, SHRUG, SHRUG_FACE, SHRUG_HAND};
use preonic_keymap::tones;
use preonic_keymap::{
    BacklightCmd, Code, Config, EepromStore, Event, EventQueue, KeyEvent, Keyboard, KeymapManager,
    Layer, Media, MemEeprom, Quantum, Revision,
};

type Manager = KeymapManager<EepromStore<MemEeprom>>;

/// Our Actor steps are each one of these.
#[derive(Debug)]
enum ActorStep {
    /// Cause this many scan ticks to pass.
    Tick(usize),
    /// Send a key event.
    Event(KeyEvent),
    /// Turn the encoder one detent, clockwise if true.
    Encoder(bool),
    /// Change a DIP switch.
    Dip(u8, bool),
    /// Expect this event from the keymap.
    Expect(Event),
}

use ActorStep::{Dip, Encoder, Expect, Tick};

fn press(key: u8) -> ActorStep {
    ActorStep::Event(KeyEvent::Press(key))
}

fn release(key: u8) -> ActorStep {
    ActorStep::Event(KeyEvent::Release(key))
}

fn reg(key: Keyboard) -> ActorStep {
    Expect(Event::Register(Code::Key(key)))
}

fn unreg(key: Keyboard) -> ActorStep {
    Expect(Event::Unregister(Code::Key(key)))
}

fn tone(song: &'static preonic_keymap::Tone) -> ActorStep {
    Expect(Event::Tone(song))
}

/// Collects the events pushed by the keymap.
struct TestActor {
    events: VecDeque<Event>,
}

impl TestActor {
    fn new() -> Self {
        TestActor {
            events: VecDeque::new(),
        }
    }
}

impl EventQueue for TestActor {
    fn push(&mut self, val: Event) {
        self.events.push_back(val);
    }
}

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config(revision: Revision) -> Config {
    Config {
        revision,
        audio: true,
        ..Config::default()
    }
}

fn manager(revision: Revision) -> Manager {
    setup();
    KeymapManager::new(config(revision), EepromStore::new(MemEeprom::default()))
}

/// Run the steps, checking every expectation, and that nothing else was produced.
fn run(keymap: &mut Manager, steps: &[ActorStep]) {
    let mut actor = TestActor::new();
    for step in steps {
        match step {
            ActorStep::Tick(t) => {
                for _ in 0..*t {
                    keymap.tick(&mut actor);
                }
            }
            ActorStep::Event(e) => keymap.handle_event(*e, &mut actor),
            ActorStep::Encoder(cw) => keymap.encoder_update(0, *cw, &mut actor),
            ActorStep::Dip(index, active) => keymap.dip_switch_update(*index, *active, &mut actor),
            ActorStep::Expect(expected) => match actor.events.pop_front() {
                Some(event) => assert_eq!(&event, expected),
                None => panic!("Expected event {:?}, but none found", expected),
            },
        }
    }

    if !actor.events.is_empty() {
        panic!(
            "Expected no events to be pending, but found {:?}",
            actor.events
        );
    }
}

#[test]
fn startup_and_typing() {
    let mut keymap = manager(Revision::Third);
    assert_eq!(keymap.layers().default_layer(), Layer::Qwerty);
    run(
        &mut keymap,
        &[
            ActorStep::Event(KeyEvent::Release(KEY_Q)),
            press(KEY_Q),
            reg(Keyboard::Q),
            release(KEY_Q),
            unreg(Keyboard::Q),
            // Off the board.
            press(200),
            release(200),
        ],
    );

    let mut actor = TestActor::new();
    keymap.startup(&mut actor);
    assert_eq!(
        actor.events.pop_front(),
        Some(Event::Tone(&tones::STARTUP[..]))
    );
    assert!(actor.events.is_empty());
}

#[test]
fn tri_layer() {
    let mut keymap = manager(Revision::Third);
    run(&mut keymap, &[press(KEY_LOWER)]);
    assert!(keymap.layers().is_on(Layer::Lower));
    assert!(!keymap.layers().is_on(Layer::Adjust));

    run(&mut keymap, &[press(KEY_RAISE)]);
    assert!(keymap.layers().is_on(Layer::Adjust));

    // A repeated press changes nothing.
    run(&mut keymap, &[press(KEY_RAISE)]);
    assert!(keymap.layers().is_on(Layer::Raise));
    assert!(keymap.layers().is_on(Layer::Adjust));

    run(
        &mut keymap,
        &[
            press(KEY_ADJ_AU_ON),
            Expect(Event::Quantum(Quantum::AudioOn)),
            release(KEY_ADJ_AU_ON),
            release(KEY_RAISE),
        ],
    );
    assert!(keymap.layers().is_on(Layer::Lower));
    assert!(!keymap.layers().is_on(Layer::Raise));
    assert!(!keymap.layers().is_on(Layer::Adjust));

    run(&mut keymap, &[release(KEY_LOWER)]);
    assert!(keymap.layers().active().is_empty());
}

#[test]
fn release_uses_pressed_action() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            press(KEY_GRAVE),
            reg(Keyboard::Grave),
            press(KEY_LOWER),
            // Lower has Esc here, but the release is still for the grave.
            release(KEY_GRAVE),
            unreg(Keyboard::Grave),
            press(KEY_GRAVE),
            reg(Keyboard::Escape),
            release(KEY_LOWER),
            release(KEY_GRAVE),
            unreg(Keyboard::Escape),
        ],
    );
}

#[test]
fn default_layer_persists() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            press(KEY_LOWER),
            press(KEY_RAISE),
            press(KEY_ADJ_NUMPAD),
            tone(&tones::DEFAULT_LAYER),
            release(KEY_ADJ_NUMPAD),
            release(KEY_RAISE),
            release(KEY_LOWER),
            press(KEY_Q),
            reg(Keyboard::Keypad8),
            release(KEY_Q),
            unreg(Keyboard::Keypad8),
            // Numpad is transparent here.
            press(KEY_Y),
            reg(Keyboard::Y),
            release(KEY_Y),
            unreg(Keyboard::Y),
        ],
    );
    assert_eq!(keymap.layers().default_layer(), Layer::Numpad);

    // Power cycle.
    let eeprom = keymap.into_store().into_inner();
    assert_eq!(eeprom.writes(), 1);
    let keymap = KeymapManager::new(config(Revision::Third), EepromStore::new(eeprom.clone()));
    assert_eq!(keymap.layers().default_layer(), Layer::Numpad);

    // The first revision has no numpad layer.
    let keymap = KeymapManager::new(config(Revision::First), EepromStore::new(eeprom));
    assert_eq!(keymap.layers().default_layer(), Layer::Qwerty);
}

#[test]
fn arrow_persists_lower() {
    let mut keymap = manager(Revision::Second);
    run(
        &mut keymap,
        &[
            press(KEY_LOWER),
            press(KEY_RAISE),
            press(KEY_ADJ_ARROW),
            tone(&tones::DEFAULT_LAYER),
            release(KEY_ADJ_ARROW),
            release(KEY_RAISE),
            release(KEY_LOWER),
        ],
    );
    assert_eq!(keymap.layers().default_layer(), Layer::Lower);

    let eeprom = keymap.into_store().into_inner();
    let keymap = KeymapManager::new(config(Revision::Second), EepromStore::new(eeprom));
    assert_eq!(keymap.layers().default_layer(), Layer::Lower);
}

#[test]
fn shrug_macros() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            press(KEY_RAISE),
            press(KEY_RA_SHRUG),
            Expect(Event::Macro(&SHRUG)),
            release(KEY_RA_SHRUG),
            press(KEY_RA_ESHRUG),
            Expect(Event::Macro(&ESHRUG)),
            release(KEY_RA_ESHRUG),
            press(KEY_RA_SHRUG_FACE),
            Expect(Event::Macro(&SHRUG_FACE)),
            release(KEY_RA_SHRUG_FACE),
            press(KEY_RA_SHRUG_HAND),
            Expect(Event::Macro(&SHRUG_HAND)),
            release(KEY_RA_SHRUG_HAND),
            release(KEY_RAISE),
        ],
    );
}

#[test]
fn first_revision_shrugs() {
    let mut keymap = manager(Revision::First);
    run(
        &mut keymap,
        &[
            press(KEY_RAISE),
            press(KEY_RA_SHRUG),
            Expect(Event::Macro(&SHRUG)),
            release(KEY_RA_SHRUG),
            press(KEY_RA_ESHRUG),
            Expect(Event::Macro(&ESHRUG)),
            release(KEY_RA_ESHRUG),
            // No face or hand keys, these fall through to the base layer.
            press(KEY_RA_SHRUG_FACE),
            reg(Keyboard::T),
            release(KEY_RA_SHRUG_FACE),
            unreg(Keyboard::T),
            press(KEY_RA_SHRUG_HAND),
            reg(Keyboard::G),
            release(KEY_RA_SHRUG_HAND),
            unreg(Keyboard::G),
            release(KEY_RAISE),
        ],
    );
}

#[test]
fn caps_with_tones() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            press(KEY_RAISE),
            press(KEY_RA_CAPS),
            reg(Keyboard::CapsLock),
            Expect(Event::Backlight(BacklightCmd::Level(3))),
            Expect(Event::Backlight(BacklightCmd::BreathingToggle)),
            tone(&tones::CAPS_ON),
            release(KEY_RA_CAPS),
            unreg(Keyboard::CapsLock),
            tone(&tones::CAPS_OFF),
            release(KEY_RAISE),
        ],
    );
}

#[test]
fn caps_without_tones() {
    let mut keymap = manager(Revision::Second);
    run(
        &mut keymap,
        &[
            press(KEY_RAISE),
            press(KEY_RA_CAPS),
            reg(Keyboard::CapsLock),
            Expect(Event::Backlight(BacklightCmd::Level(3))),
            Expect(Event::Backlight(BacklightCmd::BreathingToggle)),
            release(KEY_RA_CAPS),
            unreg(Keyboard::CapsLock),
            release(KEY_RAISE),
        ],
    );
}

#[test]
fn layer_tap() {
    let mut keymap = manager(Revision::Second);

    // Tap.
    run(
        &mut keymap,
        &[
            press(KEY_SPACE_L),
            Tick(10),
            release(KEY_SPACE_L),
            reg(Keyboard::Space),
            unreg(Keyboard::Space),
        ],
    );
    assert!(keymap.layers().active().is_empty());

    // Held past the tapping term.
    run(
        &mut keymap,
        &[
            press(KEY_SPACE_L),
            Tick(200),
            press(KEY_Q),
            reg(Keyboard::DeleteBackspace),
            release(KEY_Q),
            unreg(Keyboard::DeleteBackspace),
            release(KEY_SPACE_L),
        ],
    );
    assert!(keymap.layers().active().is_empty());

    // Interrupted by another key.
    run(
        &mut keymap,
        &[
            press(KEY_ESC),
            Tick(5),
            press(KEY_RA_SHRUG),
            Expect(Event::Macro(&SHRUG)),
            release(KEY_RA_SHRUG),
            release(KEY_ESC),
        ],
    );
    assert!(keymap.layers().active().is_empty());
}

#[test]
fn layer_tap_tri_layer() {
    let mut keymap = manager(Revision::Second);

    // Both halves of the space bar held.
    run(&mut keymap, &[press(KEY_SPACE_L), press(KEY_SPACE_R), Tick(250)]);
    assert!(keymap.layers().is_on(Layer::Lower));
    assert!(keymap.layers().is_on(Layer::Raise));
    assert!(keymap.layers().is_on(Layer::Adjust));

    run(&mut keymap, &[release(KEY_SPACE_R)]);
    assert!(keymap.layers().is_on(Layer::Lower));
    assert!(!keymap.layers().is_on(Layer::Adjust));
    run(&mut keymap, &[release(KEY_SPACE_L)]);
    assert!(keymap.layers().active().is_empty());

    // Esc held for Raise, then the Lower key.
    run(&mut keymap, &[press(KEY_ESC), press(KEY_LOWER)]);
    assert!(keymap.layers().is_on(Layer::Adjust));

    run(&mut keymap, &[release(KEY_ESC)]);
    assert!(keymap.layers().is_on(Layer::Lower));
    assert!(!keymap.layers().is_on(Layer::Raise));
    assert!(!keymap.layers().is_on(Layer::Adjust));

    run(&mut keymap, &[release(KEY_LOWER)]);
    assert!(keymap.layers().active().is_empty());
}

#[test]
fn mod_tap() {
    let mut keymap = manager(Revision::Second);
    run(
        &mut keymap,
        &[
            press(KEY_MINUS),
            release(KEY_MINUS),
            reg(Keyboard::Minus),
            unreg(Keyboard::Minus),
            press(KEY_MINUS),
            Tick(200),
            reg(Keyboard::LeftGUI),
            press(KEY_A),
            reg(Keyboard::A),
            release(KEY_A),
            unreg(Keyboard::A),
            release(KEY_MINUS),
            unreg(Keyboard::LeftGUI),
        ],
    );
}

#[test]
fn modded_key() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            Dip(0, true),
            press(KEY_U),
            reg(Keyboard::LeftControl),
            reg(Keyboard::LeftShift),
            Expect(Event::Register(Code::Media(Media::Eject))),
            release(KEY_U),
            Expect(Event::Unregister(Code::Media(Media::Eject))),
            unreg(Keyboard::LeftShift),
            unreg(Keyboard::LeftControl),
            Dip(0, false),
        ],
    );
}

#[test]
fn backlight_step() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            Dip(0, true),
            press(KEY_ADJ_BL_STEP),
            Expect(Event::Backlight(BacklightCmd::Step)),
            release(KEY_ADJ_BL_STEP),
        ],
    );
}

#[test]
fn audio_toggle() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            Dip(0, true),
            press(KEY_ADJ_AU_OFF),
            Expect(Event::Quantum(Quantum::AudioOff)),
            release(KEY_ADJ_AU_OFF),
            // Silent, but still takes effect.
            press(KEY_ADJ_NUMPAD),
            release(KEY_ADJ_NUMPAD),
        ],
    );
    assert!(!keymap.audio());
    assert_eq!(keymap.layers().default_layer(), Layer::Numpad);

    run(
        &mut keymap,
        &[
            press(KEY_ADJ_AU_ON),
            Expect(Event::Quantum(Quantum::AudioOn)),
            release(KEY_ADJ_AU_ON),
            press(KEY_ADJ_QWERTY),
            tone(&tones::DEFAULT_LAYER),
            release(KEY_ADJ_QWERTY),
        ],
    );
    assert!(keymap.audio());
    assert_eq!(keymap.layers().default_layer(), Layer::Qwerty);
}

#[test]
fn reset_plays_goodbye() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            Dip(0, true),
            press(KEY_ADJ_RESET),
            tone(&tones::GOODBYE),
            Expect(Event::StopAllNotes),
            Expect(Event::Quantum(Quantum::Reset)),
            release(KEY_ADJ_RESET),
        ],
    );
}

#[test]
fn music_on_tone() {
    let mut keymap = manager(Revision::Second);
    run(
        &mut keymap,
        &[
            press(KEY_LOWER),
            press(KEY_RAISE),
            press(KEY_ADJ_MU_ON),
            Expect(Event::Quantum(Quantum::MusicOn)),
            tone(&tones::MUSIC_ON),
            release(KEY_ADJ_MU_ON),
        ],
    );

    let mut keymap = manager(Revision::First);
    run(
        &mut keymap,
        &[
            press(KEY_LOWER),
            press(KEY_RAISE),
            press(KEY_ADJ_MU_ON),
            Expect(Event::Quantum(Quantum::MusicOn)),
            release(KEY_ADJ_MU_ON),
        ],
    );
}

#[test]
fn encoder_pages() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            Encoder(true),
            reg(Keyboard::PageDown),
            unreg(Keyboard::PageDown),
            Encoder(false),
            reg(Keyboard::PageUp),
            unreg(Keyboard::PageUp),
        ],
    );
}

#[test]
fn muse_mode() {
    let mut keymap = manager(Revision::Third);
    run(&mut keymap, &[Dip(1, true), Encoder(true)]);
    assert!(keymap.muse().mode());
    assert_eq!(keymap.muse().tempo(), 51);
    assert_eq!(keymap.muse().offset(), 70);

    run(&mut keymap, &[press(KEY_RAISE), Encoder(false)]);
    assert_eq!(keymap.muse().offset(), 69);
    assert_eq!(keymap.muse().tempo(), 51);

    // The first tick plays a note.
    let mut actor = TestActor::new();
    keymap.tick(&mut actor);
    assert_eq!(actor.events.pop_front(), Some(Event::StopNote(0)));
    assert!(matches!(actor.events.pop_front(), Some(Event::PlayNote(n)) if n >= 69));
    assert!(actor.events.is_empty());

    // Nothing more until the tempo comes around.
    for _ in 1..51 {
        keymap.tick(&mut actor);
    }
    assert!(actor.events.is_empty());

    run(
        &mut keymap,
        &[release(KEY_RAISE), Dip(1, false), Expect(Event::StopAllNotes)],
    );
    assert!(!keymap.muse().mode());
}

#[test]
fn dip_adjust() {
    let mut keymap = manager(Revision::Third);
    run(&mut keymap, &[Dip(0, true)]);
    assert!(keymap.layers().is_on(Layer::Adjust));
    run(&mut keymap, &[Dip(0, false), Dip(7, true)]);
    assert!(keymap.layers().active().is_empty());
}

#[test]
fn no_peripherals_on_older_boards() {
    for revision in [Revision::First, Revision::Second] {
        let mut keymap = manager(revision);
        run(
            &mut keymap,
            &[Encoder(true), Dip(0, true), Dip(1, true), Tick(100)],
        );
        assert!(keymap.layers().active().is_empty());
        assert!(!keymap.muse().mode());
    }
}

#[test]
fn corrupt_eeprom_boots_qwerty() {
    let mut keymap = manager(Revision::Third);
    run(
        &mut keymap,
        &[
            Dip(0, true),
            press(KEY_ADJ_NUMPAD),
            tone(&tones::DEFAULT_LAYER),
            release(KEY_ADJ_NUMPAD),
        ],
    );
    let mut eeprom = keymap.into_store().into_inner();
    eeprom.page_mut()[4] ^= 0xff;
    let keymap = KeymapManager::new(config(Revision::Third), EepromStore::new(eeprom));
    assert_eq!(keymap.layers().default_layer(), Layer::Qwerty);
}
