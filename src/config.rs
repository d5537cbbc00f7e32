//! Session and accelerometer configuration.
//!
//! `Config` is everything bound once at init: which part is fitted, which
//! board revision it is mounted on, the bus address and the interrupt pin
//! wiring. `AccelConfig` mirrors the ODR/range/bandwidth/performance
//! register pair and is normally set through
//! [`default_config`](crate::sensor::Bma4::default_config).

use crate::address::Address;
use crate::variant::Variant;

/// Session configuration, immutable after init.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Config {
    pub address: Address,
    pub variant: Variant,
    /// Board revision identifier. Revision 0 is the "unset" sentinel and
    /// rejected at init; revision drives axis sign correction and remap.
    pub hw_revision: u8,
    /// Interrupt pin active level. True for active-high wiring.
    pub active_high_int: bool,
    /// MCU pin number the sensor INT1 line is wired to.
    pub int1_pin: u8,
    /// MCU pin number the sensor INT2 line is wired to.
    pub int2_pin: u8,
}

/// Output data rate selection for `Register::AccConf`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum OutputDataRate {
    Hz25 = 0x06,
    Hz50 = 0x07,
    Hz100 = 0x08,
    Hz200 = 0x09,
}

/// Bandwidth / averaging selection for `Register::AccConf`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Bandwidth {
    Osr4Avg1 = 0x00,
    NormalAvg4 = 0x01,
    CicAvg8 = 0x02,
}

/// Performance mode bit in `Register::AccConf`.
///
/// `CicAvg` trades latency for power and is the mode used by the low-power
/// default configuration; `Continuous` is the full-rate mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum PerfMode {
    CicAvg = 0x00,
    Continuous = 0x01,
}

/// Accelerometer g-range for `Register::AccRange`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Range {
    G2 = 0x00,
    G4 = 0x01,
    G8 = 0x02,
    G16 = 0x03,
}

/// Accelerometer configuration register pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AccelConfig {
    pub odr: OutputDataRate,
    pub bandwidth: Bandwidth,
    pub perf_mode: PerfMode,
    pub range: Range,
}

impl AccelConfig {
    /// 50 Hz, averaging performance mode. Used by the low-power default
    /// configuration.
    pub const fn low_power() -> Self {
        Self {
            odr: OutputDataRate::Hz50,
            bandwidth: Bandwidth::NormalAvg4,
            perf_mode: PerfMode::CicAvg,
            range: Range::G2,
        }
    }

    /// 100 Hz continuous mode, the normal default configuration.
    pub const fn normal() -> Self {
        Self {
            odr: OutputDataRate::Hz100,
            bandwidth: Bandwidth::NormalAvg4,
            perf_mode: PerfMode::Continuous,
            range: Range::G2,
        }
    }

    pub(crate) const fn acc_conf_byte(self) -> u8 {
        self.odr as u8 | (self.bandwidth as u8) << 4 | (self.perf_mode as u8) << 7
    }

    pub(crate) const fn acc_range_byte(self) -> u8 {
        self.range as u8
    }
}

/// Electrical configuration of an interrupt pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct IntPinConfig {
    /// Edge-triggered when true, level-triggered when false.
    pub edge_trigger: bool,
    pub active_high: bool,
    /// Open-drain output when true, push-pull when false.
    pub open_drain: bool,
    pub output_enable: bool,
    pub input_enable: bool,
}

impl IntPinConfig {
    /// Level-triggered push-pull output with the given active level, the
    /// wiring every supported board uses.
    pub const fn level_output(active_high: bool) -> Self {
        Self {
            edge_trigger: false,
            active_high,
            open_drain: false,
            output_enable: true,
            input_enable: false,
        }
    }

    pub(crate) const fn to_byte(self) -> u8 {
        (self.edge_trigger as u8)
            | (self.active_high as u8) << 1
            | (self.open_drain as u8) << 2
            | (self.output_enable as u8) << 3
            | (self.input_enable as u8) << 4
    }
}
