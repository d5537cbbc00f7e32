use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::accel::AccelSample;
use crate::activity::Activity;
use crate::config::{AccelConfig, Config, IntPinConfig};
use crate::error::Error;
use crate::orientation::{face_up, Direction};
use crate::registers::{
    Register, CMD_SOFT_RESET, PWR_CONF_ADV_POWER_SAVE, PWR_CTRL_ACC_EN, SELF_TEST_ENABLE,
};
use crate::remap::AxisRemap;
use crate::variant::Variant;

/// Feature selector bits for [`Bma4::enable_feature`].
///
/// These are logical selectors shared by both variants; the per-variant
/// difference is where the enable bits live in the feature table, not
/// which features exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Features(pub(crate) u8);

impl Features {
    /// Double-tap wakeup.
    pub const WAKEUP: Features = Features(0x01);
    /// Wrist tilt.
    pub const TILT: Features = Features(0x02);
    /// Step counter. Enabling this also toggles the step detector
    /// sub-feature, see [`Bma4::enable_feature`].
    pub const STEP_CNTR: Features = Features(0x10);
    /// Activity classifier.
    pub const ACTIVITY: Features = Features(0x20);
    /// Any-motion / no-motion detection.
    pub const ANY_NO_MOTION: Features = Features(0x40);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Features) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for Features {
    type Output = Features;

    fn bitor(self, rhs: Features) -> Features {
        Features(self.0 | rhs.0)
    }
}

/// Scale factor between the raw temperature register and millidegrees.
const SCALE_TEMP: i32 = 1000;
/// Offset the vendor layer folds into the raw temperature value.
const OFFSET_TEMP: i32 = 23;
/// Raw temperature readings that scale to this value are invalid.
const TEMP_INVALID: i32 = 0x80;

/// BMA423/BMA456 driver session.
///
/// Owns the bus and delay handles for the lifetime of the device. One
/// session per physical sensor; all calls block until the underlying
/// transaction completes, and the bus protocol is not reentrant, so a
/// single task must own the session.
pub struct Bma4<I, D> {
    i2c: I,
    delay: D,
    address: u8,
    variant: Variant,
    hw_revision: u8,
    active_high_int: bool,
    int1_mask: u32,
    int2_mask: u32,
    initialized: bool,
    faulted: bool,
    irq_status: u8,
}

impl<I, D> Bma4<I, D>
where
    I: I2c,
    D: DelayNs,
{
    /// Construct an unbound session. No bus traffic happens until
    /// [`init`](Self::init).
    pub fn new(i2c: I, delay: D, config: Config) -> Self {
        Self {
            i2c,
            delay,
            address: config.address.into(),
            variant: config.variant,
            hw_revision: config.hw_revision,
            active_high_int: config.active_high_int,
            int1_mask: 1 << config.int1_pin,
            int2_mask: 1 << config.int2_pin,
            initialized: false,
            faulted: false,
            irq_status: 0,
        }
    }

    /// Returns the underlying bus and delay handles, consuming the driver.
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    /// Bring up the sensor: soft reset, settle, verify the chip id for
    /// the configured variant, then upload the vendor feature config.
    ///
    /// Fails without marking the session initialized if any step fails;
    /// the reset and settle delay will already have happened by then,
    /// which is harmless because no session state changed. Fails
    /// immediately when called twice or when the hardware revision is
    /// the unset sentinel (0).
    pub fn init(&mut self) -> Result<(), Error<I::Error>> {
        if self.initialized {
            return Err(Error::AlreadyInitialized);
        }
        if self.hw_revision == 0 {
            return Err(Error::InvalidConfig);
        }

        self.soft_reset()?;
        self.delay.delay_ms(20);

        let id = self.read_register(Register::ChipId)?;
        if id != self.variant.chip_id() {
            return Err(Error::UnknownChip(id));
        }

        self.upload_config_file()?;

        self.initialized = true;
        Ok(())
    }

    fn soft_reset(&mut self) -> Result<(), Error<I::Error>> {
        self.write_register(Register::Cmd, CMD_SOFT_RESET)
    }

    /// Enter advance power save. Fire and forget: bus errors are
    /// ignored, callers treat the power state as advisory.
    pub fn power_down(&mut self) {
        let _ = self.modify_register(Register::PwrConf, |v| v | PWR_CONF_ADV_POWER_SAVE);
    }

    /// Leave advance power save. Same contract as [`power_down`](Self::power_down).
    pub fn power_up(&mut self) {
        let _ = self.modify_register(Register::PwrConf, |v| v & !PWR_CONF_ADV_POWER_SAVE);
    }

    /// Arm the accelerometer self-test exciter. True iff the vendor
    /// sequence reports the known-good status.
    pub fn self_test(&mut self) -> bool {
        self.write_register(Register::AccSelfTest, SELF_TEST_ENABLE)
            .is_ok()
    }

    /// Raw contents of the error condition register.
    pub fn error_code(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(Register::ErrReg)
    }

    /// Raw contents of the status register.
    pub fn status(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(Register::Status)
    }

    /// Free-running 24-bit sensor time.
    pub fn sensor_time(&mut self) -> Result<u32, Error<I::Error>> {
        let mut data = [0; 3];
        self.read_registers(Register::SensorTime0, &mut data)?;
        Ok(u32::from_le_bytes([data[0], data[1], data[2], 0]))
    }

    /// One acceleration sample in the watch body frame.
    ///
    /// Short-circuits with [`Error::Faulted`] once the fault latch is
    /// set. A bus failure here sets the latch permanently: the sensor is
    /// treated as wedged and never read again for the life of the
    /// process. On success, x and y are negated for every hardware
    /// revision except 1 (the sensor is mounted rotated 180 degrees on
    /// later boards); z is never negated.
    pub fn accel(&mut self) -> Result<AccelSample, Error<I::Error>> {
        if self.faulted {
            return Err(Error::Faulted);
        }

        let mut data = [0; 6];
        if let Err(e) = self.read_registers(Register::AccXLsb, &mut data) {
            self.faulted = true;
            return Err(e);
        }

        let mut sample = AccelSample::from_bytes(data);
        if self.hw_revision != 1 {
            sample.x = -sample.x;
            sample.y = -sample.y;
        }
        Ok(sample)
    }

    /// Which face or edge points down right now.
    ///
    /// A failed read classifies as `TopEdge` rather than an error, so
    /// display-rotation callers always get a usable answer. Check
    /// [`accel`](Self::accel) directly when the failure matters.
    pub fn direction(&mut self) -> Direction {
        match self.accel() {
            Ok(sample) => Direction::classify(&sample),
            Err(_) => Direction::TopEdge,
        }
    }

    /// True when the watch lies inside the calibrated face-up region.
    /// False immediately once the fault latch is set.
    pub fn is_face_up(&mut self) -> bool {
        if self.faulted {
            return false;
        }
        match self.accel() {
            Ok(sample) => face_up(&sample),
            Err(_) => false,
        }
    }

    /// Die temperature. Celsius when `metric`, Fahrenheit otherwise.
    ///
    /// Returns exactly 0 for the vendor's invalid-reading sentinel,
    /// regardless of units.
    pub fn temperature(&mut self, metric: bool) -> Result<f32, Error<I::Error>> {
        let raw = self.read_register(Register::Temperature)? as i8;
        let data = (raw as i32 + OFFSET_TEMP) * SCALE_TEMP;
        if (data - OFFSET_TEMP) / SCALE_TEMP == TEMP_INVALID {
            return Ok(0.0);
        }
        let celsius = data as f32 / SCALE_TEMP as f32;
        Ok(if metric {
            celsius
        } else {
            celsius * 1.8 + 32.0
        })
    }

    /// Accumulated step count. Returns 0 on a read failure, which is
    /// indistinguishable from "no steps yet".
    pub fn step_count(&mut self) -> u32 {
        let mut data = [0; 4];
        match self.read_registers(Register::StepCounter0, &mut data) {
            Ok(()) => u32::from_le_bytes(data),
            Err(_e) => {
                #[cfg(feature = "defmt-03")]
                defmt::warn!("step counter read failed");
                0
            }
        }
    }

    /// Current output of the activity classifier.
    pub fn activity(&mut self) -> Result<Activity, Error<I::Error>> {
        let bits = self.read_register(Register::ActivityType)?;
        Ok(Activity::from_bits(bits))
    }

    /// Fetch the feature interrupt status byte and cache it. The
    /// per-gesture predicates only look at this cache and never poll on
    /// their own.
    pub fn poll_interrupt_status(&mut self) -> Result<(), Error<I::Error>> {
        self.irq_status = self.read_register(Register::IntStatus0)?;
        Ok(())
    }

    /// Last cached interrupt status byte.
    pub fn irq_status(&self) -> u8 {
        self.irq_status
    }

    pub fn is_step_counter(&self) -> bool {
        self.irq_status & self.variant.irq_bits().step_counter != 0
    }

    pub fn is_double_click(&self) -> bool {
        self.irq_status & self.variant.irq_bits().wakeup != 0
    }

    pub fn is_tilt(&self) -> bool {
        self.irq_status & self.variant.irq_bits().tilt != 0
    }

    pub fn is_activity(&self) -> bool {
        self.irq_status & self.variant.irq_bits().activity != 0
    }

    pub fn is_any_no_motion(&self) -> bool {
        self.irq_status & self.variant.irq_bits().any_no_motion != 0
    }

    pub fn enable_step_count_interrupt(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        let bits = self.variant.irq_bits().step_counter;
        self.map_interrupt(bits, enable)
    }

    pub fn enable_tilt_interrupt(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        let bits = self.variant.irq_bits().tilt;
        self.map_interrupt(bits, enable)
    }

    pub fn enable_wakeup_interrupt(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        let bits = self.variant.irq_bits().wakeup;
        self.map_interrupt(bits, enable)
    }

    pub fn enable_activity_interrupt(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        let bits = self.variant.irq_bits().activity;
        self.map_interrupt(bits, enable)
    }

    pub fn enable_any_no_motion_interrupt(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        let bits = self.variant.irq_bits().any_no_motion;
        self.map_interrupt(bits, enable)
    }

    /// Map or unmap feature interrupt sources onto INT1.
    fn map_interrupt(&mut self, bits: u8, enable: bool) -> Result<(), Error<I::Error>> {
        self.modify_register(Register::Int1Map, |v| {
            if enable {
                v | bits
            } else {
                v & !bits
            }
        })
    }

    /// Double-tap wake: feature enable plus interrupt map, both must
    /// succeed.
    pub fn enable_double_click_wake(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.enable_feature(Features::WAKEUP, enable)?;
        self.enable_wakeup_interrupt(enable)
    }

    /// Tilt wake: feature enable plus interrupt map, both must succeed.
    pub fn enable_tilt_wake(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.enable_feature(Features::TILT, enable)?;
        self.enable_tilt_interrupt(enable)
    }

    /// Whether a hardware wake event belongs to this sensor.
    ///
    /// Rejects without any bus access when this device's wake pin bit is
    /// absent from the wake-reason bitmask. Otherwise polls the
    /// interrupt status and answers with the poll's success: a true
    /// result means "our pin woke us and the status read worked", not
    /// that any particular gesture fired.
    pub fn did_wake(&mut self, hw_wake: u64) -> bool {
        if hw_wake & self.int1_mask as u64 == 0 {
            return false;
        }
        self.poll_interrupt_status().is_ok()
    }

    /// Bitmask of this device's wake line within the wake-reason bitmap.
    pub fn wake_pin_mask(&self) -> u32 {
        self.int1_mask
    }

    /// Bitmask of the secondary interrupt line.
    pub fn int2_pin_mask(&self) -> u32 {
        self.int2_mask
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn set_int_pin_config(&mut self, config: IntPinConfig) -> Result<(), Error<I::Error>> {
        self.write_register(Register::Int1IoCtrl, config.to_byte())
    }

    pub fn set_accel_config(&mut self, config: AccelConfig) -> Result<(), Error<I::Error>> {
        self.write_register(Register::AccConf, config.acc_conf_byte())?;
        self.write_register(Register::AccRange, config.acc_range_byte())
    }

    pub fn accel_enabled(&mut self) -> Result<bool, Error<I::Error>> {
        let v = self.read_register(Register::PwrCtrl)?;
        Ok(v & PWR_CTRL_ACC_EN != 0)
    }

    pub fn enable_accel(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.modify_register(Register::PwrCtrl, |v| {
            if enable {
                v | PWR_CTRL_ACC_EN
            } else {
                v & !PWR_CTRL_ACC_EN
            }
        })
    }

    /// Apply the standard wearable configuration.
    ///
    /// An ordered sequence of fallible steps with no rollback: data rate
    /// (50 Hz averaging when `low_power`, 100 Hz continuous otherwise),
    /// 2G range, accelerometer enable, level-triggered push-pull
    /// interrupt pin at the configured active level, every gesture
    /// interrupt disabled, and finally the revision-dependent axis
    /// remap. A failure partway leaves the earlier steps applied.
    pub fn default_config(&mut self, low_power: bool) -> Result<(), Error<I::Error>> {
        let cfg = if low_power {
            AccelConfig::low_power()
        } else {
            AccelConfig::normal()
        };
        self.set_accel_config(cfg)?;
        self.enable_accel(true)?;
        self.set_int_pin_config(IntPinConfig::level_output(self.active_high_int))?;

        self.enable_double_click_wake(false)?;
        self.enable_tilt_wake(false)?;
        self.enable_activity_interrupt(false)?;
        self.enable_any_no_motion_interrupt(false)?;
        self.enable_wakeup_interrupt(false)?;
        self.enable_tilt_interrupt(false)?;
        self.enable_step_count_interrupt(false)?;

        self.set_axis_remap(AxisRemap::for_revision(self.hw_revision))
    }

    pub(crate) fn read_register(&mut self, reg: Register) -> Result<u8, Error<I::Error>> {
        let mut buf = [0; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn read_registers(
        &mut self,
        reg: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<I::Error>> {
        self.i2c
            .write_read(self.address, &[reg as u8], buf)
            .map_err(Error::I2c)
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I::Error>> {
        self.write(&[reg as u8, value])
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I::Error>> {
        self.i2c.write(self.address, bytes).map_err(Error::I2c)
    }

    fn modify_register<F>(&mut self, reg: Register, f: F) -> Result<(), Error<I::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let v = self.read_register(reg)?;
        self.write_register(reg, f(v))
    }

    pub(crate) fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    pub(crate) fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
