//! CRC-8 parameter sets

use crate::crc::Crc8;

/// The three values that define a non-reflected CRC-8 variant
///
/// Any combination of values is accepted. The polynomial is written without its implicit
/// x^8 term, so x^8 + x^2 + x + 1 is `0x07`.
///
/// The associated constants cover common variants. Each is listed with its check value, the
/// checksum of the ASCII string `123456789`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Params {
    /// Generator polynomial, low 8 bits
    pub polynomial: u8,
    /// Remainder at the start of a message and after a reset
    pub initial: u8,
    /// Value XORed into the remainder when a checksum is read
    pub final_xor: u8,
}

impl Params {
    /// Default parameters: polynomial 0xb7, initial value 0xff, no final XOR
    pub const DEFAULT: Params = Params::new(0xb7, 0xff, 0x00);
    /// CRC-8/SMBUS, used for SMBus packet error checking (check 0xf4)
    pub const SMBUS: Params = Params::new(0x07, 0x00, 0x00);
    /// CRC-8/SAE-J1850 (check 0x4b)
    pub const SAE_J1850: Params = Params::new(0x1d, 0xff, 0xff);
    /// CRC-8/AUTOSAR (check 0xdf)
    pub const AUTOSAR: Params = Params::new(0x2f, 0xff, 0xff);
    /// CRC-8/I-432-1, also known as CRC-8/ITU (check 0xa1)
    pub const I_432_1: Params = Params::new(0x07, 0x00, 0x55);
    /// CRC-8/NRSC-5, the variant used by Sensirion sensors (check 0xf7)
    pub const NRSC_5: Params = Params::new(0x31, 0xff, 0x00);
    /// CRC-8/DVB-S2 (check 0xbc)
    pub const DVB_S2: Params = Params::new(0xd5, 0x00, 0x00);
    /// CRC-8/GSM-A (check 0x37)
    pub const GSM_A: Params = Params::new(0x1d, 0x00, 0x00);

    /// Creates a parameter set
    pub const fn new(polynomial: u8, initial: u8, final_xor: u8) -> Self {
        Params {
            polynomial,
            initial,
            final_xor,
        }
    }

    /// Calculates the checksum of a complete message
    pub fn checksum(&self, bytes: &[u8]) -> u8 {
        Crc8::with_params(*self).add_all(bytes)
    }
}

impl Default for Params {
    fn default() -> Self {
        Params::DEFAULT
    }
}
