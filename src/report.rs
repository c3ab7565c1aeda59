use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{
        self, CalculationResult, DeviceInput, FleetTotals, PowerMode, Region, aggregate,
        compute_usage,
    },
    fleet::{DeviceId, Fleet},
    prelude::*,
    quantity::{carbon::Kilograms, power::Watts, time::Hours},
};

/// Per-device usage along with the fleet totals.
#[must_use]
#[derive(Serialize)]
pub struct Report<'a> {
    pub devices: Vec<DeviceUsage<'a>>,
    pub by_region: Vec<RegionUsage>,
    pub totals: FleetTotals,
}

#[derive(Serialize)]
pub struct DeviceUsage<'a> {
    pub id: DeviceId,
    pub device: &'a DeviceInput,
    pub usage: CalculationResult,
}

/// Devices located in a known region, those without one or with an unknown code are left out.
#[derive(Serialize)]
pub struct RegionUsage {
    pub region: Region,
    pub n_devices: usize,

    #[serde(rename = "co2_kg")]
    pub emissions: Kilograms,
}

impl<'a> Report<'a> {
    #[instrument(skip_all, fields(n_devices = fleet.len()))]
    pub fn try_from_fleet(fleet: &'a Fleet) -> Result<Self, core::Error> {
        let devices = fleet
            .iter()
            .inspect(|(id, device)| warn_if_non_physical(*id, device))
            .map(|(id, device)| Ok(DeviceUsage { id, device, usage: compute_usage(device)? }))
            .collect::<Result<Vec<_>, core::Error>>()?;
        let by_region = group_by_region(&devices);
        let totals = aggregate(fleet.devices())?;
        debug!(
            %totals.energy,
            %totals.emissions,
            %totals.cost,
            n_regions = by_region.len(),
            "aggregated"
        );
        Ok(Self { devices, by_region, totals })
    }
}

fn group_by_region(devices: &[DeviceUsage]) -> Vec<RegionUsage> {
    let mut groups = devices
        .iter()
        .filter_map(|row| {
            let region = Region::from_code(row.device.region.as_deref()?)?;
            Some((region, row.usage.emissions))
        })
        .into_group_map();
    Region::ALL
        .into_iter()
        .filter_map(|region| {
            let emissions = groups.remove(&region)?;
            Some(RegionUsage {
                region,
                n_devices: emissions.len(),
                emissions: emissions.into_iter().sum(),
            })
        })
        .collect()
}

/// Negative inputs are not rejected by the model, but they are most likely typos.
fn warn_if_non_physical(id: DeviceId, device: &DeviceInput) {
    if device.hours < Hours::ZERO {
        warn!(%id, name = %device.name, %device.hours, "negative operating hours");
    }
    if let PowerMode::ExplicitWatts(watts) = device.power
        && watts < Watts::ZERO
    {
        warn!(%id, name = %device.name, %watts, "negative power draw");
    }
}
