//! The two supported sensor families.
//!
//! The BMA423 and BMA456 expose the same register map and nearly the same
//! feature set, but differ in the configuration blob uploaded at init, the
//! layout of the feature parameter table, and the bit assignments in the
//! feature interrupt status register. Every operation that touches one of
//! those differences dispatches on `Variant` with a single branch; call
//! rates are human-gesture rates, so no dispatch table is warranted.

use crate::feature_config;

/// Sensor family selector, chosen once at init.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Variant {
    Bma423,
    Bma456,
}

/// Feature interrupt bit assignments, as found in `IntStatus0` and used
/// verbatim when mapping sources onto the interrupt pin.
#[derive(Copy, Clone, Debug)]
pub(crate) struct IrqBits {
    pub step_counter: u8,
    pub activity: u8,
    pub tilt: u8,
    pub wakeup: u8,
    pub any_no_motion: u8,
}

/// Byte offsets into the feature parameter table.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FeatureLayout {
    /// Table length in bytes.
    pub size: usize,
    /// Feature enable bitfield.
    pub enable_offset: usize,
    /// Step detector enable / step counter reset control byte.
    pub control_offset: usize,
    /// Two axis-remap bytes.
    pub remap_offset: usize,
}

/// Activity classifier output bits, identical on both parts.
pub(crate) const ACTIVITY_STATIONARY: u8 = 0x01;
pub(crate) const ACTIVITY_WALKING: u8 = 0x02;
pub(crate) const ACTIVITY_RUNNING: u8 = 0x04;
pub(crate) const ACTIVITY_INVALID: u8 = 0x08;

const BMA423_IRQ: IrqBits = IrqBits {
    step_counter: 0x02,
    activity: 0x04,
    tilt: 0x08,
    wakeup: 0x20,
    any_no_motion: 0x40,
};

// The BMA456 moves the wrist-tilt and step bits around; the step counter
// in particular lands in the top bit.
const BMA456_IRQ: IrqBits = IrqBits {
    step_counter: 0x40,
    activity: 0x04,
    tilt: 0x01,
    wakeup: 0x20,
    any_no_motion: 0x10,
};

const BMA423_LAYOUT: FeatureLayout = FeatureLayout {
    size: 24,
    enable_offset: 20,
    control_offset: 21,
    remap_offset: 22,
};

const BMA456_LAYOUT: FeatureLayout = FeatureLayout {
    size: 32,
    enable_offset: 28,
    control_offset: 29,
    remap_offset: 30,
};

impl Variant {
    /// Value expected in the chip identification register.
    pub const fn chip_id(self) -> u8 {
        match self {
            Variant::Bma423 => 0x13,
            Variant::Bma456 => 0x16,
        }
    }

    /// The vendor-supplied feature configuration blob uploaded verbatim
    /// during init. Opaque; its bit layout is not specified here.
    pub const fn config_file(self) -> &'static [u8] {
        match self {
            Variant::Bma423 => &feature_config::BMA423_CONFIG_FILE,
            Variant::Bma456 => &feature_config::BMA456_CONFIG_FILE,
        }
    }

    pub(crate) const fn irq_bits(self) -> IrqBits {
        match self {
            Variant::Bma423 => BMA423_IRQ,
            Variant::Bma456 => BMA456_IRQ,
        }
    }

    pub(crate) const fn layout(self) -> FeatureLayout {
        match self {
            Variant::Bma423 => BMA423_LAYOUT,
            Variant::Bma456 => BMA456_LAYOUT,
        }
    }
}
