//! Feature engine access.
//!
//! The BMA4 feature engine runs the vendor's step counting, tap, tilt and
//! activity algorithms. It is programmed in two ways:
//! 1. At init, a vendor-supplied configuration blob is streamed into its
//!    memory in chunks through the feature port, then started.
//! 2. At runtime, a small parameter table is read and written through the
//!    same port to toggle features, reset the step counter, and set the
//!    axis remap.
//!
//! The blob contents and the table layout are vendor-defined; this module
//! only knows the transfer protocol and the per-variant byte offsets.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::Error;
use crate::registers::{Register, INTERNAL_STATUS_OK};
use crate::remap::AxisRemap;
use crate::sensor::{Bma4, Features};

/// Maximum size of a feature port burst write.
const CHUNK_SIZE: usize = 16;

/// Upper bound of the per-variant feature table sizes.
const MAX_TABLE_SIZE: usize = 32;

/// Step detector enable bit in the feature control byte.
const CONTROL_STEP_DETECTOR: u8 = 0x01;
/// Self-clearing step counter reset bit in the feature control byte.
const CONTROL_STEP_RESET: u8 = 0x02;

impl<I, D> Bma4<I, D>
where
    I: I2c,
    D: DelayNs,
{
    /// Stream the variant's configuration blob into the feature engine
    /// and start it.
    ///
    /// Advance power save must be off while the engine loads, and the
    /// engine reports acceptance in the internal status register only
    /// after a settle delay.
    pub(crate) fn upload_config_file(&mut self) -> Result<(), Error<I::Error>> {
        self.write_register(Register::PwrConf, 0x00)?;
        self.delay_us(450);
        self.write_register(Register::InitCtrl, 0x00)?;

        let blob = self.variant().config_file();
        for (i, chunk) in blob.chunks(CHUNK_SIZE).enumerate() {
            let word = (i * CHUNK_SIZE / 2) as u16;
            self.write_register(Register::FeatureCfgAddr0, (word & 0x0F) as u8)?;
            self.write_register(Register::FeatureCfgAddr1, (word >> 4) as u8)?;
            self.write_feature_port(chunk)?;
        }

        self.write_register(Register::InitCtrl, 0x01)?;
        self.delay_ms(150);

        let status = self.read_register(Register::InternalStatus)?;
        if status & INTERNAL_STATUS_OK == 0 {
            #[cfg(feature = "defmt-03")]
            defmt::warn!("feature engine rejected config, status {=u8:#x}", status);
            return Err(Error::ConfigLoad);
        }
        Ok(())
    }

    /// Enable or disable features.
    ///
    /// Vendor quirk: step counting needs two independent enables. When
    /// the selector includes the step counter, the step detector
    /// sub-feature is toggled first, then the feature enable bits are
    /// applied in one table write.
    pub fn enable_feature(
        &mut self,
        features: Features,
        enable: bool,
    ) -> Result<(), Error<I::Error>> {
        if features.contains(Features::STEP_CNTR) {
            self.set_step_detector(enable)?;
        }
        self.modify_feature_table(|table, layout| {
            if enable {
                table[layout.enable_offset] |= features.bits();
            } else {
                table[layout.enable_offset] &= !features.bits();
            }
        })
    }

    /// Write the axis remap into the feature table.
    pub fn set_axis_remap(&mut self, remap: AxisRemap) -> Result<(), Error<I::Error>> {
        let bytes = remap.to_bytes();
        self.modify_feature_table(|table, layout| {
            table[layout.remap_offset] = bytes[0];
            table[layout.remap_offset + 1] = bytes[1];
        })
    }

    /// Zero the accumulated step count.
    pub fn reset_step_counter(&mut self) -> Result<(), Error<I::Error>> {
        self.modify_feature_table(|table, layout| {
            table[layout.control_offset] |= CONTROL_STEP_RESET;
        })
    }

    fn set_step_detector(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.modify_feature_table(|table, layout| {
            if enable {
                table[layout.control_offset] |= CONTROL_STEP_DETECTOR;
            } else {
                table[layout.control_offset] &= !CONTROL_STEP_DETECTOR;
            }
        })
    }

    /// Read the feature parameter table, let `f` edit it, write it back
    /// whole. The engine only accepts full-table writes.
    fn modify_feature_table<F>(&mut self, f: F) -> Result<(), Error<I::Error>>
    where
        F: FnOnce(&mut [u8], crate::variant::FeatureLayout),
    {
        let layout = self.variant().layout();
        let mut buf = [0; MAX_TABLE_SIZE];
        self.read_registers(Register::FeaturesIn, &mut buf[..layout.size])?;
        f(&mut buf[..layout.size], layout);

        let mut out = [0; MAX_TABLE_SIZE + 1];
        out[0] = Register::FeaturesIn as u8;
        out[1..=layout.size].copy_from_slice(&buf[..layout.size]);
        self.write(&out[..layout.size + 1])
    }

    fn write_feature_port(&mut self, chunk: &[u8]) -> Result<(), Error<I::Error>> {
        let mut out = [0; CHUNK_SIZE + 1];
        out[0] = Register::FeaturesIn as u8;
        out[1..=chunk.len()].copy_from_slice(chunk);
        self.write(&out[..chunk.len() + 1])
    }
}
