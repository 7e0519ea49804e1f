//! SMBus packet error checking (PEC) on blocking I2C buses
//!
//! A PEC byte is a CRC-8/SMBUS checksum of every byte in a transaction, including the address
//! bytes, appended by whichever side sends the last data byte.

use core::marker::PhantomData;

use embedded_hal::blocking::i2c::{Read, Write, WriteRead};

use crate::crc::Crc8;
use crate::params::Params;

/// Maximum number of data bytes in one transaction (the SMBus block size limit)
pub const MAX_DATA_LEN: usize = 32;

/// SMBus PEC helper that does not own the I2C bus
///
/// The type parameter I is the I2C bus. This prevents one Pec object from accidentally being
/// used with two different I2C peripherals.
///
/// # I2C type requirements
///
/// The `I` I2C bus type must return the same error type for read, write, and read/write operations.
///
/// # Examples
///
/// ```no_run
/// use embedded_hal::blocking::i2c::{Read, Write, WriteRead};
/// use crc8_engine::pec::{Error, Pec};
///
/// fn battery_voltage<I, E>(i2c: &mut I) -> Result<u16, Error<E>>
/// where
///     I: Read<Error = E> + Write<Error = E> + WriteRead<Error = E>,
/// {
///     let mut battery = Pec::new(0x0b);
///     let mut word = [0u8; 2];
///     battery.read(i2c, 0x09, &mut word)?;
///     Ok(u16::from_le_bytes(word))
/// }
/// ```
pub struct Pec<I> {
    address: u8,
    _bus: PhantomData<I>,
}

impl<I, E> Pec<I>
where
    I: Read<Error = E> + Write<Error = E> + WriteRead<Error = E>,
{
    /// Creates a PEC helper for the device with the provided 7-bit address
    pub fn new(address: u8) -> Self {
        Pec {
            address,
            _bus: PhantomData,
        }
    }

    /// Returns the 7-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Writes a command followed by data bytes, and appends a PEC byte
    pub fn write(&mut self, i2c: &mut I, command: u8, data: &[u8]) -> Result<(), Error<E>> {
        if data.len() > MAX_DATA_LEN {
            return Err(Error::TooLong);
        }
        let mut buffer = [0u8; MAX_DATA_LEN + 2];
        let length = data.len() + 2;
        buffer[0] = command;
        buffer[1..length - 1].copy_from_slice(data);

        let mut crc = Crc8::with_params(Params::SMBUS);
        crc.add(write_address(self.address));
        let pec = crc.add_all(&buffer[..length - 1]);
        buffer[length - 1] = pec;

        i2c.write(self.address, &buffer[..length])?;
        Ok(())
    }

    /// Writes a command, reads `buffer.len()` data bytes and a PEC byte, and checks the PEC
    ///
    /// On success, `buffer` contains the data bytes. If the PEC does not match, the content
    /// of `buffer` is unspecified.
    pub fn read(&mut self, i2c: &mut I, command: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        if buffer.len() > MAX_DATA_LEN {
            return Err(Error::TooLong);
        }
        let mut received = [0u8; MAX_DATA_LEN + 1];
        let length = buffer.len() + 1;
        i2c.write_read(self.address, &[command], &mut received[..length])?;

        let mut crc = Crc8::with_params(Params::SMBUS);
        crc.add_all(&[write_address(self.address), command, read_address(self.address)]);
        check_pec(crc, &received[..length])?;

        buffer.copy_from_slice(&received[..length - 1]);
        Ok(())
    }

    /// Sends a command byte with a PEC byte, without reading a response
    ///
    /// This returns a proxy that can be polled to read the response once the device has
    /// finished processing the command.
    pub fn send_command(&mut self, i2c: &mut I, command: u8) -> Result<PendingRead<I>, E> {
        let pec = Params::SMBUS.checksum(&[write_address(self.address), command]);
        i2c.write(self.address, &[command, pec])?;
        Ok(PendingRead {
            _helper: PhantomData,
            address: self.address,
        })
    }
}

/// A proxy used to read the response to a command sent with [`Pec::send_command`]
pub struct PendingRead<'p, I> {
    _helper: PhantomData<&'p mut Pec<I>>,
    address: u8,
}

impl<'p, I> PendingRead<'p, I>
where
    I: Read,
{
    /// Attempts to read `buffer.len()` data bytes and a PEC byte from the device
    ///
    /// is_nak must be a closure that returns true if the provided error is a NAK (negative
    /// acknowledge) error, or false otherwise.
    ///
    /// This function returns `Err(nb::Error::WouldBlock)` if the device does not acknowledge
    /// its address. This means that it is still busy. This function should be called again
    /// later to try again.
    ///
    /// On success, `buffer` contains the data bytes.
    ///
    /// After this function returns anything other than `Err(nb::Error::WouldBlock)`, this
    /// `PendingRead` must not be used again.
    pub fn read_result<F>(
        &mut self,
        i2c: &mut I,
        buffer: &mut [u8],
        is_nak: F,
    ) -> nb::Result<(), Error<I::Error>>
    where
        F: FnOnce(&I::Error) -> bool,
    {
        if buffer.len() > MAX_DATA_LEN {
            return Err(nb::Error::Other(Error::TooLong));
        }
        let mut received = [0u8; MAX_DATA_LEN + 1];
        let length = buffer.len() + 1;
        match i2c.read(self.address, &mut received[..length]) {
            Ok(()) => {
                let mut crc = Crc8::with_params(Params::SMBUS);
                crc.add(read_address(self.address));
                check_pec(crc, &received[..length]).map_err(nb::Error::Other)?;
                buffer.copy_from_slice(&received[..length - 1]);
                Ok(())
            }
            Err(e) => {
                if is_nak(&e) {
                    // Device is still busy, try again later
                    Err(nb::Error::WouldBlock)
                } else {
                    Err(nb::Error::Other(Error::I2c(e)))
                }
            }
        }
    }
}

/// Continues `crc` over the data bytes of `received` and compares the result to its last byte
fn check_pec<E>(mut crc: Crc8, received: &[u8]) -> Result<(), Error<E>> {
    let (data, pec) = received.split_at(received.len() - 1);
    let computed = crc.add_all(data);
    let received = pec[0];
    if computed != received {
        #[cfg(feature = "defmt")]
        defmt::warn!(
            "PEC mismatch: computed {=u8:#x}, received {=u8:#x}",
            computed,
            received
        );
        return Err(Error::Pec { computed, received });
    }
    Ok(())
}

fn write_address(address: u8) -> u8 {
    address << 1
}

fn read_address(address: u8) -> u8 {
    (address << 1) | 1
}

/// An I2C or PEC error
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C driver returned an error
    I2c(E),
    /// A message was received with a PEC byte that does not match its content
    Pec {
        /// PEC calculated from the received bytes
        computed: u8,
        /// PEC byte sent by the device
        received: u8,
    },
    /// More than [`MAX_DATA_LEN`] data bytes were requested
    TooLong,
}

impl<E> From<E> for Error<E> {
    fn from(inner: E) -> Self {
        Error::I2c(inner)
    }
}
