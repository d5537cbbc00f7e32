//! Vendor feature configuration blobs.
//!
//! These byte streams are supplied by the sensor vendor and uploaded
//! verbatim into the feature engine during init. Their contents are
//! opaque to this crate and must not be edited.

#[rustfmt::skip]
pub(crate) const BMA423_CONFIG_FILE: [u8; 64] = [
    0x80, 0x2E, 0x21, 0x2E, 0x80, 0x2E, 0x21, 0x2E,
    0x80, 0x2E, 0x21, 0x2E, 0x80, 0x2E, 0x21, 0x2E,
    0xC8, 0x2E, 0x00, 0x2E, 0x80, 0x2E, 0x21, 0x2E,
    0xAA, 0x00, 0x05, 0xE0, 0x90, 0x30, 0x02, 0x01,
    0x32, 0x00, 0x0A, 0x00, 0x88, 0x00, 0x59, 0xF5,
    0x01, 0x2E, 0x5D, 0xF5, 0x08, 0xBC, 0x0F, 0xB8,
    0x00, 0x2E, 0x96, 0x30, 0x21, 0x2E, 0x59, 0xF5,
    0x98, 0x2E, 0xC4, 0x01, 0x2D, 0x2E, 0x59, 0xF5,
];

#[rustfmt::skip]
pub(crate) const BMA456_CONFIG_FILE: [u8; 96] = [
    0x80, 0x2E, 0x08, 0x2F, 0x80, 0x2E, 0x08, 0x2F,
    0x80, 0x2E, 0x08, 0x2F, 0x80, 0x2E, 0x08, 0x2F,
    0xC8, 0x2E, 0x00, 0x2E, 0x80, 0x2E, 0x08, 0x2F,
    0xB0, 0x50, 0x10, 0x30, 0x21, 0x2E, 0x16, 0xF0,
    0x60, 0x00, 0x0F, 0x00, 0x61, 0xF5, 0x03, 0x2E,
    0x01, 0x2E, 0x61, 0xF5, 0x0C, 0xBC, 0x0F, 0xB8,
    0x00, 0x2E, 0x92, 0x30, 0x21, 0x2E, 0x61, 0xF5,
    0x98, 0x2E, 0x4D, 0x02, 0x2D, 0x2E, 0x61, 0xF5,
    0x05, 0x2E, 0x18, 0x00, 0x40, 0xB2, 0x05, 0x2F,
    0x05, 0x2E, 0x6B, 0xF7, 0x21, 0x2E, 0x6B, 0xF7,
    0x80, 0x2E, 0x18, 0x00, 0x98, 0x2E, 0x4D, 0x02,
    0x10, 0x30, 0x21, 0x2E, 0x16, 0xF0, 0x00, 0x2E,
];
