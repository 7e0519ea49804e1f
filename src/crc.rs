//! Bit-serial CRC-8 engine

use crate::params::Params;

/// 8-bit CRC calculator with a configurable polynomial, initial value, and final XOR value
///
/// Bytes can be added one at a time with [`add`](Crc8::add), which returns the checksum the
/// message would have if that byte were the last one, or a whole slice at a time with
/// [`add_all`](Crc8::add_all). Both paths update the same running remainder, so they can be
/// mixed freely.
///
/// The final XOR value is applied only when a checksum is read. The stored remainder never
/// includes it, so reading the checksum any number of times does not change the result.
///
/// # Examples
///
/// ```
/// use crc8_engine::Crc8;
///
/// let mut crc = Crc8::new();
/// for &byte in b"1234" {
///     crc.add(byte);
/// }
/// let incremental = crc.value();
///
/// crc.reset();
/// assert_eq!(crc.add_all(b"1234"), incremental);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crc8 {
    params: Params,
    /// Remainder, without the final XOR applied
    value: u8,
}

impl Crc8 {
    /// Creates a CRC calculator with the default parameters
    ///
    /// The defaults are polynomial 0xb7, initial value 0xff, and final XOR value 0x00
    /// (see [`Params::DEFAULT`]).
    pub const fn new() -> Self {
        Crc8::with_params(Params::DEFAULT)
    }

    /// Creates a CRC calculator with the provided polynomial, initial value, and final XOR value
    ///
    /// Every value is accepted. A polynomial of zero turns the calculation into a plain shift
    /// register, which is valid but does not detect errors.
    pub const fn custom(polynomial: u8, initial: u8, final_xor: u8) -> Self {
        Crc8::with_params(Params::new(polynomial, initial, final_xor))
    }

    /// Creates a CRC calculator from a set of parameters
    pub const fn with_params(params: Params) -> Self {
        Crc8 {
            params,
            value: params.initial,
        }
    }

    /// Adds a byte to the CRC and returns the checksum as if this byte were the last one
    pub fn add(&mut self, byte: u8) -> u8 {
        self.value ^= byte;
        for _ in 0..8 {
            if (self.value & 0x80) != 0 {
                self.value = (self.value << 1) ^ self.params.polynomial;
            } else {
                self.value <<= 1;
            }
        }
        self.value()
    }

    /// Adds bytes from a slice and returns the checksum of everything added so far
    ///
    /// An empty slice leaves the CRC unchanged.
    pub fn add_all(&mut self, bytes: &[u8]) -> u8 {
        for &byte in bytes {
            self.add(byte);
        }
        self.value()
    }

    /// Returns the current checksum, with the final XOR value applied
    pub fn value(&self) -> u8 {
        self.value ^ self.params.final_xor
    }

    /// Restores the remainder to the initial value, keeping the parameters
    ///
    /// This must be called between unrelated messages that share one `Crc8`. Without it, the
    /// next checksum continues from the previous message's remainder. That is the same as
    /// computing the checksum of both messages concatenated, which is occasionally intended
    /// and cannot be told apart from a missed reset.
    pub fn reset(&mut self) {
        self.value = self.params.initial;
    }

    /// Returns the parameters this CRC was created with
    pub fn params(&self) -> Params {
        self.params
    }

    /// Returns the raw remainder, without the final XOR value applied
    pub fn accumulator(&self) -> u8 {
        self.value
    }
}

impl Default for Crc8 {
    fn default() -> Self {
        Crc8::new()
    }
}
