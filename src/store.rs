//! Default layer persistence
//!
//! The only thing the keymap keeps across power cycles is the default layer.  The firmware
//! provides a small EEPROM page; we keep a CBOR record in it, with a length and checksum in
//! front so that an erased or half written page is recognized.
//!
//! Page layout:
//!
//! ```text
//! +-----+---------+----------------+
//! | len | crc16le | cbor record... |
//! +-----+---------+----------------+
//! ```

use crc::{Crc, CRC_16_IBM_SDLC};
use minicbor::encode::write::Cursor;
use minicbor::{Decode, Encode};

use crate::layer::Layer;
use crate::log::{info, warn};

/// Somewhere to keep the default layer.
pub trait DefaultLayerStore {
    /// The previously stored default layer, if there is a usable one.
    fn load(&mut self) -> Option<Layer>;

    /// Remember a new default layer.
    fn store(&mut self, layer: Layer);
}

/// Raw access to the EEPROM page provided by the firmware.
pub trait Eeprom {
    /// Fill `buf` from the start of the page.
    fn read(&self, buf: &mut [u8]);

    /// Write `data` to the start of the page.
    fn write(&mut self, data: &[u8]);
}

/// Size of the page we use.
pub const PAGE_SIZE: usize = 32;

/// Bytes in front of the record.
const HEADER: usize = 3;

/// Checksum over the record.
pub const CRC: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_SDLC);

/// What is persisted.
#[derive(Debug, Encode, Decode, PartialEq, Eq)]
#[cbor(tag(0x6b65796d61706466))]
#[cbor(map)]
struct Record {
    /// The default layer, by ordinal.
    #[n(1)]
    default_layer: u8,
}

/// A [`DefaultLayerStore`] on top of an [`Eeprom`].
pub struct EepromStore<E> {
    eeprom: E,
}

impl<E: Eeprom> EepromStore<E> {
    pub fn new(eeprom: E) -> Self {
        EepromStore { eeprom }
    }

    /// Give back the EEPROM, for example to hand it to a new keymap after a simulated reboot.
    pub fn into_inner(self) -> E {
        self.eeprom
    }

    fn decode(page: &[u8; PAGE_SIZE]) -> Option<Record> {
        let len = page[0] as usize;
        if len == 0 || len > PAGE_SIZE - HEADER {
            info!("No default layer stored");
            return None;
        }
        let body = &page[HEADER..HEADER + len];
        let crc = u16::from_le_bytes([page[1], page[2]]);
        if CRC.checksum(body) != crc {
            warn!("Default layer record has bad checksum");
            return None;
        }
        match minicbor::decode(body) {
            Ok(record) => Some(record),
            Err(_) => {
                warn!("Fail to decode default layer record");
                None
            }
        }
    }

    fn encode(record: &Record) -> Option<[u8; PAGE_SIZE]> {
        let mut page = [0u8; PAGE_SIZE];
        let mut cursor = Cursor::new(&mut page[HEADER..]);
        if minicbor::encode(record, &mut cursor).is_err() {
            warn!("Fail to encode default layer record");
            return None;
        }
        let len = cursor.position();
        let crc = CRC.checksum(&page[HEADER..HEADER + len]).to_le_bytes();
        page[0] = len as u8;
        page[1] = crc[0];
        page[2] = crc[1];
        Some(page)
    }
}

impl<E: Eeprom> DefaultLayerStore for EepromStore<E> {
    fn load(&mut self) -> Option<Layer> {
        let mut page = [0u8; PAGE_SIZE];
        self.eeprom.read(&mut page);
        let record = Self::decode(&page)?;
        let layer = Layer::from_index(record.default_layer);
        if layer.is_none() {
            warn!("Stored default layer {} out of range", record.default_layer);
        }
        layer
    }

    fn store(&mut self, layer: Layer) {
        let record = Record {
            default_layer: layer.index() as u8,
        };
        if let Some(page) = Self::encode(&record) {
            self.eeprom.write(&page);
        }
    }
}

/// An EEPROM page in memory.  Starts out erased.
#[derive(Clone, Debug)]
pub struct MemEeprom {
    page: [u8; PAGE_SIZE],
    writes: usize,
}

impl Default for MemEeprom {
    fn default() -> Self {
        MemEeprom {
            page: [0xff; PAGE_SIZE],
            writes: 0,
        }
    }
}

impl MemEeprom {
    /// The raw page, for inspecting or damaging it.
    pub fn page_mut(&mut self) -> &mut [u8; PAGE_SIZE] {
        &mut self.page
    }

    /// How many times the page has been written.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Eeprom for MemEeprom {
    fn read(&self, buf: &mut [u8]) {
        let len = buf.len().min(PAGE_SIZE);
        buf[..len].copy_from_slice(&self.page[..len]);
    }

    fn write(&mut self, data: &[u8]) {
        let len = data.len().min(PAGE_SIZE);
        self.page[..len].copy_from_slice(&data[..len]);
        self.writes += 1;
    }
}
