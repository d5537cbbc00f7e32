//! BMA4 Register Map
//!
//! Both supported parts (BMA423 and BMA456) share this register layout;
//! they differ only in the feature configuration uploaded at init and in
//! the meaning of the feature interrupt bits. Feature parameters are not
//! individual registers: they live in a table accessed through the
//! `FeaturesIn` read/write port.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Chip identification code
    ChipId = 0x00,

    /// Sensor error conditions
    ErrReg = 0x02,

    /// Sensor status flags
    Status = 0x03,

    /// Acceleration data, X LSB first; six bytes X/Y/Z little endian
    AccXLsb = 0x12,

    /// Free-running sensor time, 24 bits little endian
    SensorTime0 = 0x18,

    /// Feature interrupt status. Cleared on read.
    IntStatus0 = 0x1C,
    /// Hardware interrupt status. Cleared on read.
    IntStatus1 = 0x1D,

    /// Step counter value, 32 bits little endian
    StepCounter0 = 0x1E,

    /// Internal temperature, signed, 1 LSB per degree
    Temperature = 0x22,

    /// Activity classifier output (stationary/walking/running)
    ActivityType = 0x27,

    /// Feature engine status; reports whether the config load succeeded
    InternalStatus = 0x2A,

    /// Output data rate, bandwidth and performance mode
    AccConf = 0x40,
    /// Accelerometer g-range
    AccRange = 0x41,

    /// Electrical behaviour of the INT1 pin
    Int1IoCtrl = 0x53,
    /// Electrical behaviour of the INT2 pin
    Int2IoCtrl = 0x54,
    /// Interrupt latch mode
    IntLatch = 0x55,
    /// Feature interrupt mapping onto INT1
    Int1Map = 0x56,
    /// Feature interrupt mapping onto INT2
    Int2Map = 0x57,

    /// Starts and stops feature engine initialization
    InitCtrl = 0x59,

    /// Feature table base address, low nibble
    FeatureCfgAddr0 = 0x5B,
    /// Feature table base address, high bits
    FeatureCfgAddr1 = 0x5C,
    /// Feature configuration read/write port
    FeaturesIn = 0x5E,

    /// Self-test configuration and trigger
    AccSelfTest = 0x6D,

    /// Power mode configuration (advance power save)
    PwrConf = 0x7C,
    /// Sensor enable bits
    PwrCtrl = 0x7D,
    /// Command register (soft reset among others)
    Cmd = 0x7E,
}

/// Soft reset command, written to `Register::Cmd`.
pub const CMD_SOFT_RESET: u8 = 0xB6;

/// Accelerometer enable bit in `Register::PwrCtrl`.
pub const PWR_CTRL_ACC_EN: u8 = 0x04;

/// Advance power save bit in `Register::PwrConf`.
pub const PWR_CONF_ADV_POWER_SAVE: u8 = 0x01;

/// Feature engine reports this in `Register::InternalStatus` once the
/// uploaded configuration has been accepted.
pub const INTERNAL_STATUS_OK: u8 = 0x01;

/// Enables the accelerometer self-test exciter in `Register::AccSelfTest`.
pub const SELF_TEST_ENABLE: u8 = 0x0D;
