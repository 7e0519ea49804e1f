//! Configurable CRC-8 checksum calculation
//!
//! [`Crc8`] computes non-reflected 8-bit CRCs with any polynomial, initial value, and final XOR
//! value. Bytes can be pushed one at a time, reading the checksum-so-far after each one, or a
//! whole slice at a time. [`Params`] holds a variant's parameters and a catalogue of common
//! variants.
//!
//! The [`pec`] module uses the engine for SMBus packet error checking on
//! [`embedded_hal`] blocking I2C buses.
//!
//! # Examples
//!
//! ```
//! use crc8_engine::{Crc8, Params};
//!
//! let mut crc = Crc8::with_params(Params::SAE_J1850);
//! assert_eq!(crc.add_all(b"123456789"), 0x4b);
//!
//! // Reuse the same parameters for another message
//! crc.reset();
//! crc.add(0x31);
//! crc.add(0x32);
//! assert_eq!(crc.value(), Params::SAE_J1850.checksum(b"12"));
//! ```
//!
//! # Logging
//!
//! With the `defmt` feature enabled, the public types implement `defmt::Format` and PEC
//! mismatches are logged as warnings.

#![no_std]

extern crate embedded_hal;
extern crate nb;

mod crc;
mod params;
pub mod pec;

pub use crate::crc::Crc8;
pub use crate::params::Params;
