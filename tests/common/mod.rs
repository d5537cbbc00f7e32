//! Shared mock-bus plumbing for the integration tests.
//!
//! The layout tuples and interrupt bit constants mirror the vendor
//! values baked into the driver; the tests assert against raw bytes on
//! purpose so a layout regression shows up here.

#![allow(dead_code)]

use bma4_watch::{Address, Bma4, Config, Variant};
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

pub const ADDR: u8 = 0x18;

pub fn config(variant: Variant, hw_revision: u8) -> Config {
    Config {
        address: Address::default(),
        variant,
        hw_revision,
        active_high_int: false,
        int1_pin: 14,
        int2_pin: 12,
    }
}

/// Every transaction `init` issues, in order.
pub fn init_transactions(variant: Variant) -> Vec<I2cTransaction> {
    let mut trans = vec![
        // soft reset + chip id check
        I2cTransaction::write(ADDR, vec![0x7E, 0xB6]),
        I2cTransaction::write_read(ADDR, vec![0x00], vec![variant.chip_id()]),
        // power save off, engine halted
        I2cTransaction::write(ADDR, vec![0x7C, 0x00]),
        I2cTransaction::write(ADDR, vec![0x59, 0x00]),
    ];
    for (i, chunk) in variant.config_file().chunks(16).enumerate() {
        let word = (i * 16 / 2) as u16;
        trans.push(I2cTransaction::write(ADDR, vec![0x5B, (word & 0x0F) as u8]));
        trans.push(I2cTransaction::write(ADDR, vec![0x5C, (word >> 4) as u8]));
        let mut write = vec![0x5E];
        write.extend_from_slice(chunk);
        trans.push(I2cTransaction::write(ADDR, write));
    }
    trans.push(I2cTransaction::write(ADDR, vec![0x59, 0x01]));
    trans.push(I2cTransaction::write_read(ADDR, vec![0x2A], vec![0x01]));
    trans
}

/// Build an initialized driver whose mock expects `extra` transactions
/// after the init sequence. Call `done()` on the returned mock.
pub fn init_sensor(
    variant: Variant,
    hw_revision: u8,
    extra: Vec<I2cTransaction>,
) -> (Bma4<I2cMock, NoopDelay>, I2cMock) {
    let mut trans = init_transactions(variant);
    trans.extend(extra);
    let mock = I2cMock::new(&trans);
    let mut bma = Bma4::new(mock.clone(), NoopDelay::new(), config(variant, hw_revision));
    bma.init().expect("init");
    (bma, mock)
}

/// Acceleration register read returning the given 12-bit raw axis
/// values, before any revision sign correction.
pub fn accel_read(x: i16, y: i16, z: i16) -> I2cTransaction {
    let mut data = Vec::new();
    for v in [x, y, z] {
        data.extend_from_slice(&(v * 16).to_le_bytes());
    }
    I2cTransaction::write_read(ADDR, vec![0x12], data)
}

/// (table size, enable offset, control offset, remap offset)
pub fn table_layout(variant: Variant) -> (usize, usize, usize, usize) {
    match variant {
        Variant::Bma423 => (24, 20, 21, 22),
        Variant::Bma456 => (32, 28, 29, 30),
    }
}

pub struct IrqBits {
    pub step_counter: u8,
    pub activity: u8,
    pub tilt: u8,
    pub wakeup: u8,
    pub any_no_motion: u8,
}

pub fn irq_bits(variant: Variant) -> IrqBits {
    match variant {
        Variant::Bma423 => IrqBits {
            step_counter: 0x02,
            activity: 0x04,
            tilt: 0x08,
            wakeup: 0x20,
            any_no_motion: 0x40,
        },
        Variant::Bma456 => IrqBits {
            step_counter: 0x40,
            activity: 0x04,
            tilt: 0x01,
            wakeup: 0x20,
            any_no_motion: 0x10,
        },
    }
}

/// Feature table read-modify-write pair. The read returns an all-0xFF
/// table so cleared bits are visible in the expected write.
pub fn table_rmw<F>(variant: Variant, edit: F) -> Vec<I2cTransaction>
where
    F: FnOnce(&mut [u8]),
{
    let (size, ..) = table_layout(variant);
    let mut table = vec![0xFF; size];
    edit(&mut table);
    let mut write = vec![0x5E];
    write.extend_from_slice(&table);
    vec![
        I2cTransaction::write_read(ADDR, vec![0x5E], vec![0xFF; size]),
        I2cTransaction::write(ADDR, write),
    ]
}

/// INT1 map read-modify-write pair, starting from an all-set map.
pub fn map_rmw(bits: u8, enable: bool) -> Vec<I2cTransaction> {
    let value = if enable { 0xFF } else { 0xFF & !bits };
    vec![
        I2cTransaction::write_read(ADDR, vec![0x56], vec![0xFF]),
        I2cTransaction::write(ADDR, vec![0x56, value]),
    ]
}

/// The full `default_config` transaction sequence.
pub fn default_config_transactions(
    variant: Variant,
    hw_revision: u8,
    active_high: bool,
    low_power: bool,
) -> Vec<I2cTransaction> {
    let (_, enable_off, _, remap_off) = table_layout(variant);
    let irq = irq_bits(variant);
    let acc_conf = if low_power { 0x17 } else { 0x98 };

    let mut trans = vec![
        I2cTransaction::write(ADDR, vec![0x40, acc_conf]),
        I2cTransaction::write(ADDR, vec![0x41, 0x00]),
        // accelerometer enable
        I2cTransaction::write_read(ADDR, vec![0x7D], vec![0x00]),
        I2cTransaction::write(ADDR, vec![0x7D, 0x04]),
        // interrupt pin: level triggered, push-pull, output enabled
        I2cTransaction::write(ADDR, vec![0x53, if active_high { 0x0A } else { 0x08 }]),
    ];

    // double-click wake off: feature disable + unmap
    trans.extend(table_rmw(variant, |t| t[enable_off] &= !0x01));
    trans.extend(map_rmw(irq.wakeup, false));
    // tilt wake off
    trans.extend(table_rmw(variant, |t| t[enable_off] &= !0x02));
    trans.extend(map_rmw(irq.tilt, false));
    // remaining per-gesture unmaps
    trans.extend(map_rmw(irq.activity, false));
    trans.extend(map_rmw(irq.any_no_motion, false));
    trans.extend(map_rmw(irq.wakeup, false));
    trans.extend(map_rmw(irq.tilt, false));
    trans.extend(map_rmw(irq.step_counter, false));

    // revision-dependent axis remap
    let byte0 = 0x01
        | ((hw_revision == 1 || hw_revision == 3) as u8) << 2
        | ((hw_revision == 1) as u8) << 5;
    trans.extend(table_rmw(variant, |t| {
        t[remap_off] = byte0;
        t[remap_off + 1] = 0x02;
    }));
    trans
}
