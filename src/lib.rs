#![no_std]

pub mod accel;
pub mod activity;
pub mod address;
pub mod config;
pub mod error;
mod feature_config;
mod feature_engine;
pub mod orientation;
pub mod registers;
pub mod remap;
pub mod sensor;
pub mod variant;

pub use crate::accel::AccelSample;
pub use crate::activity::Activity;
pub use crate::address::Address;
pub use crate::config::{
    AccelConfig, Bandwidth, Config, IntPinConfig, OutputDataRate, PerfMode, Range,
};
pub use crate::error::Error;
pub use crate::orientation::Direction;
pub use crate::remap::AxisRemap;
pub use crate::sensor::{Bma4, Features};
pub use crate::variant::Variant;
