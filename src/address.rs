//! BMA4 I2C Address Configuration
//!
//! The BMA423 and BMA456 share the same pair of 7-bit I2C addresses,
//! selected by the SDO pin:
//! - 0x18 (default, SDO low)
//! - 0x19 (alternate, SDO high)

/// A BMA4-family I2C address.
///
/// Note: this is the 7-bit address. Some I2C implementations may require
/// left-shifting by 1 to create the 8-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Default for Address {
    /// Returns the default I2C address (0x18, SDO pulled low).
    fn default() -> Self {
        Self(0x18)
    }
}

impl Address {
    /// Alternate address used when the SDO pin is pulled high.
    pub const fn alternate() -> Self {
        Self(0x19)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
