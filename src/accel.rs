/// Raw acceleration reading, one sample per bus transaction.
///
/// Values are signed 12-bit counts at the configured range. At the default
/// 2G range one count is roughly one milli-g, which is the unit every
/// orientation threshold in this crate is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Assemble a sample from the six data registers (little endian,
    /// 12-bit left-justified in 16).
    pub fn from_bytes(data: [u8; 6]) -> Self {
        let x = i16::from_le_bytes([data[0], data[1]]) / 0x10;
        let y = i16::from_le_bytes([data[2], data[3]]) / 0x10;
        let z = i16::from_le_bytes([data[4], data[5]]) / 0x10;
        Self { x, y, z }
    }
}
