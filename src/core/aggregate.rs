use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{
        device::DeviceInput,
        error::Error,
        usage::{CalculationResult, compute_usage},
    },
    quantity::{
        carbon::{Kilograms, Tonnes},
        currency::Dollars,
        energy::KilowattHours,
        equivalence::{Miles, Trees},
    },
};

/// Average passenger car.
pub const CAR_EMISSIONS_PER_MILE: Kilograms = Kilograms(0.42);

/// Device hours are a representative day, a year is extrapolated from it.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Yearly absorption of one mature tree.
pub const TREE_ABSORPTION_PER_YEAR: Kilograms = Kilograms(21.0);

#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct FleetTotals {
    pub n_devices: usize,

    #[serde(rename = "total_kwh")]
    pub energy: KilowattHours,

    #[serde(rename = "total_co2_kg")]
    pub emissions: Kilograms,

    #[serde(rename = "total_cost_usd")]
    pub cost: Dollars,

    /// Distance an average car would drive emitting the same CO₂.
    #[serde(rename = "miles_equivalent")]
    pub car_distance: Miles,

    /// Emissions extrapolated from one day to a year.
    #[serde(rename = "yearly_tonnes")]
    pub yearly_emissions: Tonnes,

    /// Trees needed to absorb the yearly emissions.
    #[serde(rename = "trees_to_offset_year")]
    pub trees_to_offset: Trees,
}

impl FleetTotals {
    fn new(n_devices: usize, sum: CalculationResult) -> Self {
        let yearly_emissions = sum.emissions * DAYS_PER_YEAR;
        Self {
            n_devices,
            energy: sum.energy,
            emissions: sum.emissions,
            cost: sum.cost,
            car_distance: Miles(sum.emissions.0 / CAR_EMISSIONS_PER_MILE.0),
            yearly_emissions: Tonnes::from(yearly_emissions),
            trees_to_offset: Trees(yearly_emissions.0 / TREE_ABSORPTION_PER_YEAR.0),
        }
    }
}

/// Sum up the usage of the devices, failing on the first invalid one.
///
/// The order of the devices does not matter.
pub fn aggregate<'a>(
    devices: impl IntoIterator<Item = &'a DeviceInput>,
) -> Result<FleetTotals, Error> {
    let mut n_devices = 0;
    let sum = devices
        .into_iter()
        .inspect(|_| n_devices += 1)
        .map(compute_usage)
        .process_results(|results| results.sum::<CalculationResult>())?;
    Ok(FleetTotals::new(n_devices, sum))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::device::{DeviceClass, PowerMode},
        quantity::{power::Watts, ratios::Percentage, time::Hours},
    };

    fn server() -> DeviceInput {
        DeviceInput::builder()
            .name("Web server")
            .class(DeviceClass::Server)
            .power(PowerMode::CpuUtilization(Percentage(45.0)))
            .hours(Hours(24.0))
            .region("CN")
            .build()
    }

    fn laptop() -> DeviceInput {
        DeviceInput::builder()
            .name("MacBook")
            .class(DeviceClass::Laptop)
            .power(PowerMode::ExplicitWatts(Watts(50.0)))
            .hours(Hours(8.0))
            .region("US-CA")
            .build()
    }

    fn desktop() -> DeviceInput {
        DeviceInput::builder()
            .name("Workstation")
            .class(DeviceClass::Desktop)
            .power(PowerMode::CpuUtilization(Percentage(30.0)))
            .hours(Hours(10.0))
            .build()
    }

    #[test]
    fn test_empty_fleet() {
        let totals = aggregate(std::iter::empty()).unwrap();
        assert_eq!(totals, FleetTotals::default());
        assert_eq!(totals.energy.0, 0.0);
        assert_eq!(totals.emissions.0, 0.0);
        assert_eq!(totals.cost.0, 0.0);
        assert_eq!(totals.car_distance.0, 0.0);
        assert_eq!(totals.yearly_emissions.0, 0.0);
        assert_eq!(totals.trees_to_offset.0, 0.0);
    }

    #[test]
    fn test_server_and_laptop() {
        let totals = aggregate(&[server(), laptop()]).unwrap();
        assert_eq!(totals.n_devices, 2);
        assert_abs_diff_eq!(totals.energy.0, 7.36, epsilon = 1e-9);
        assert_abs_diff_eq!(totals.emissions.0, 4.256, epsilon = 1e-9);
        assert_abs_diff_eq!(totals.cost.0, 0.8832, epsilon = 1e-9);
        assert_abs_diff_eq!(totals.car_distance.0, 10.133, epsilon = 1e-3);
        assert_abs_diff_eq!(totals.yearly_emissions.0, 1.553_44, epsilon = 1e-9);
        assert_abs_diff_eq!(totals.trees_to_offset.0, 73.973, epsilon = 1e-3);
    }

    #[test]
    fn test_order_independent() {
        let forward = aggregate(&[server(), laptop(), desktop()]).unwrap();
        let backward = aggregate(&[desktop(), laptop(), server()]).unwrap();
        assert_abs_diff_eq!(forward.energy.0, backward.energy.0, epsilon = 1e-9);
        assert_abs_diff_eq!(forward.emissions.0, backward.emissions.0, epsilon = 1e-9);
        assert_abs_diff_eq!(forward.cost.0, backward.cost.0, epsilon = 1e-9);
        assert_abs_diff_eq!(forward.trees_to_offset.0, backward.trees_to_offset.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fails_fast() {
        let mut invalid = desktop();
        invalid.power = PowerMode::CpuUtilization(Percentage(150.0));
        let result = aggregate(&[server(), invalid, laptop()]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
