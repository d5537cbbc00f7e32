//! Axis remap between the raw sensor frame and the watch body frame.
//!
//! The sensor is mounted rotated relative to the display, and not the same
//! way on every board revision. The remap is written into the feature
//! parameter table once during default configuration.

/// Per-axis remap: which raw axis feeds each body axis, and with which
/// sign. Axis indices are 0 = raw x, 1 = raw y, 2 = raw z; `*_negated`
/// flips the sign of the mapped axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AxisRemap {
    pub x_axis: u8,
    pub x_negated: bool,
    pub y_axis: u8,
    pub y_negated: bool,
    pub z_axis: u8,
    pub z_negated: bool,
}

impl AxisRemap {
    /// The remap for a given board revision: x and y are swapped relative
    /// to the raw sensor axes on every board; revision 1 additionally
    /// flips y, revisions 1 and 3 flip x, and z always maps straight
    /// through with positive sign.
    pub fn for_revision(hw_revision: u8) -> Self {
        Self {
            x_axis: 1,
            x_negated: hw_revision == 1 || hw_revision == 3,
            y_axis: 0,
            y_negated: hw_revision == 1,
            z_axis: 2,
            z_negated: false,
        }
    }

    /// Encoding used inside the feature parameter table.
    pub(crate) fn to_bytes(self) -> [u8; 2] {
        let byte0 = (self.x_axis & 0x03)
            | (self.x_negated as u8) << 2
            | (self.y_axis & 0x03) << 3
            | (self.y_negated as u8) << 5;
        let byte1 = (self.z_axis & 0x03) | (self.z_negated as u8) << 2;
        [byte0, byte1]
    }
}
