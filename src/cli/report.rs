use std::path::PathBuf;

use clap::Parser;

use crate::{
    fleet::{DeviceId, Fleet},
    prelude::*,
    report::Report,
    tables::{build_by_region_table, build_devices_table, build_totals_table},
};

#[derive(Parser)]
pub struct ReportArgs {
    /// Fleet file: TOML with `[[devices]]` tables, or JSON when the extension is `.json`.
    #[clap(long, default_value = "devices.toml", env = "DEVICES_PATH")]
    devices: PathBuf,

    /// Leave the devices with these IDs out of the report.
    #[clap(long, value_delimiter = ',', num_args = 1..)]
    exclude: Vec<DeviceId>,

    /// Print the report as JSON instead of tables.
    #[clap(long)]
    json: bool,
}

impl ReportArgs {
    #[instrument(skip_all, fields(devices = %self.devices.display()))]
    pub fn run(self) -> Result {
        let mut fleet = Fleet::read_from(&self.devices)?;
        for id in self.exclude {
            match fleet.remove(id) {
                Some(device) => info!(%id, name = %device.name, "excluded"),
                None => warn!(%id, "no such device"),
            }
        }

        if fleet.is_empty() {
            warn!("the fleet is empty, all totals are zero");
        }

        let report = Report::try_from_fleet(&fleet)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", build_devices_table(&report));
            if !report.by_region.is_empty() {
                println!("{}", build_by_region_table(&report.by_region));
            }
            println!("{}", build_totals_table(&report.totals));
            println!("Equivalent to {} driven in a car", report.totals.car_distance);
        }
        Ok(())
    }
}
