//! Device power, energy, emissions and cost model.
//!
//! Everything here is pure and synchronous: the lookup tables are compile-time constants,
//! and the fleet is always passed in by the caller.

pub mod aggregate;
pub mod device;
pub mod error;
pub mod region;
pub mod usage;

pub use self::{
    aggregate::{FleetTotals, aggregate},
    device::{DeviceClass, DeviceInput, DeviceRecord, PowerMode},
    error::Error,
    region::{DEFAULT_INTENSITY, Region, carbon_intensity},
    usage::{CalculationResult, compute_usage, quick_estimate},
};
