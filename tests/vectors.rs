extern crate crc8_engine;

use crc8_engine::{Crc8, Params};

const DATA: [u8; 20] = [
    0x12, 0x63, 0xaa, 0xbb, 0xcc, 0xcd, 0x02, 0x0f, 0x00, 0x4d, 0x12, 0x63, 0xaa, 0xbb, 0xcc,
    0xcd, 0x02, 0x0f, 0x00, 0x4d,
];
const DATA_CRC: u8 = 0x03;

const DATA2: [u8; 22] = [
    0x12, 0x63, 0xaa, 0xbb, 0xcc, 0xcd, 0x02, 0x0f, 0x00, 0x4d, 0x12, 0x63, 0xaa, 0xbb, 0xcc,
    0xcd, 0x02, 0x0f, 0x00, 0x4d, 0xc2, 0x6a,
];
const DATA2_CRC: u8 = 0x90;
const DATA2_CUSTOM_CRC: u8 = 0x49;

/// Pushes bytes one at a time, checking that each instant value matches a later read
fn push_each(crc: &mut Crc8, bytes: &[u8]) -> u8 {
    for &byte in bytes {
        let instant = crc.add(byte);
        assert_eq!(instant, crc.value());
    }
    crc.value()
}

#[test]
fn default_bytewise() {
    let mut crc = Crc8::new();
    assert_eq!(push_each(&mut crc, &DATA), DATA_CRC);
}

#[test]
fn default_batch_after_reset() {
    let mut crc = Crc8::new();
    push_each(&mut crc, &DATA);
    crc.reset();
    assert_eq!(crc.add_all(&DATA), DATA_CRC);
}

#[test]
fn default_extended() {
    let mut crc = Crc8::new();
    push_each(&mut crc, &DATA);
    // Same parameters, different data set
    crc.reset();
    assert_eq!(push_each(&mut crc, &DATA2), DATA2_CRC);
    assert_eq!(Params::DEFAULT.checksum(&DATA2), DATA2_CRC);
}

#[test]
fn custom_parameters() {
    let mut crc = Crc8::custom(0x07, 0x00, 0xff);
    assert_eq!(push_each(&mut crc, &DATA2), DATA2_CUSTOM_CRC);

    let mut crc = Crc8::with_params(Params::new(0x07, 0x00, 0xff));
    assert_eq!(crc.add_all(&DATA2), DATA2_CUSTOM_CRC);
}

#[test]
fn bytewise_equals_batch() {
    let configurations = [
        Params::DEFAULT,
        Params::SMBUS,
        Params::SAE_J1850,
        Params::I_432_1,
        Params::new(0x00, 0xa5, 0x3c),
    ];
    for &params in configurations.iter() {
        let mut bytewise = Crc8::with_params(params);
        let mut batch = Crc8::with_params(params);
        for length in 0..=DATA2.len() {
            bytewise.reset();
            batch.reset();
            let expected = push_each(&mut bytewise, &DATA2[..length]);
            assert_eq!(batch.add_all(&DATA2[..length]), expected);
            assert_eq!(batch.accumulator(), bytewise.accumulator());
        }
    }
}

#[test]
fn reset_restores_initial() {
    let mut crc = Crc8::custom(0x2f, 0x3c, 0xc3);
    crc.add_all(&DATA2);
    crc.reset();
    assert_eq!(crc.accumulator(), 0x3c);
    assert_eq!(crc.value(), 0x3c ^ 0xc3);
    // Resetting twice is the same as once
    crc.reset();
    assert_eq!(crc.value(), 0x3c ^ 0xc3);
}

#[test]
fn repeated_reads() {
    let mut crc = Crc8::with_params(Params::AUTOSAR);
    crc.add_all(&DATA);
    let first = crc.value();
    for _ in 0..4 {
        assert_eq!(crc.value(), first);
    }
}

#[test]
fn empty_batch() {
    let mut crc = Crc8::new();
    assert_eq!(crc.add_all(&[]), 0xff);
    crc.add_all(&DATA);
    let accumulator = crc.accumulator();
    assert_eq!(crc.add_all(&[]), DATA_CRC);
    assert_eq!(crc.accumulator(), accumulator);
}

#[test]
fn reuse_matches_fresh() {
    let mut reused = Crc8::with_params(Params::SMBUS);
    reused.add_all(&DATA);
    reused.reset();
    let mut fresh = Crc8::with_params(Params::SMBUS);
    assert_eq!(reused.add_all(&DATA2), fresh.add_all(&DATA2));
}

#[test]
fn missing_reset_chains_messages() {
    let mut crc = Crc8::new();
    crc.add_all(&DATA);
    // Without a reset, the second message continues from the first
    assert_eq!(crc.add_all(&[0xc2, 0x6a]), DATA2_CRC);
}
