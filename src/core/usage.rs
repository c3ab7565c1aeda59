use serde::Serialize;

use crate::{
    core::{
        device::{DeviceInput, PowerMode},
        error::Error,
        region::carbon_intensity,
    },
    quantity::{
        carbon::Kilograms,
        currency::{Dollars, KilowattHourPrice},
        energy::KilowattHours,
        power::Watts,
        time::Hours,
    },
};

/// Flat electricity price, the same in every region.
pub const UNIT_PRICE: KilowattHourPrice = KilowattHourPrice(0.12);

/// Power, energy, emissions and cost of a single device.
///
/// Summing results adds up every field, including the wattage.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sum,
)]
pub struct CalculationResult {
    pub watts: Watts,

    #[serde(rename = "kwh")]
    pub energy: KilowattHours,

    #[serde(rename = "co2_kg")]
    pub emissions: Kilograms,

    #[serde(rename = "cost_usd")]
    pub cost: Dollars,
}

/// Estimate the usage of a single device.
///
/// Negative watts or hours are not rejected and produce negative results.
pub fn compute_usage(device: &DeviceInput) -> Result<CalculationResult, Error> {
    let watts = match device.power {
        PowerMode::ExplicitWatts(watts) => watts,
        PowerMode::CpuUtilization(cpu_percent) => {
            if !cpu_percent.is_within_bounds() {
                return Err(Error::InvalidInput(format!(
                    "CPU percentage of `{}` must be within 0..=100, got {}",
                    device.name, cpu_percent.0,
                )));
            }
            device.class.spec().interpolate(cpu_percent)
        }
    };
    let energy = watts * device.hours;
    Ok(CalculationResult {
        watts,
        energy,
        emissions: energy * carbon_intensity(device.region.as_deref()),
        cost: energy * UNIT_PRICE,
    })
}

/// Energy and emissions straight from a power draw, without a device class.
pub fn quick_estimate(
    watts: Watts,
    hours: Hours,
    region: Option<&str>,
) -> (KilowattHours, Kilograms) {
    let energy = watts * hours;
    (energy, energy * carbon_intensity(region))
}
