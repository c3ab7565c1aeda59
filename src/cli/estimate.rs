use clap::Parser;

use crate::{
    core::{DeviceClass, DeviceInput, PowerMode, compute_usage, quick_estimate},
    prelude::*,
    quantity::{power::Watts, ratios::Percentage, time::Hours},
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(long, default_value = "Device")]
    name: String,

    /// Device class, needed for the CPU utilization estimate.
    #[clap(long, value_enum)]
    class: Option<DeviceClass>,

    /// Measured power draw, takes precedence over `--cpu-percent`.
    #[clap(long)]
    watts: Option<Watts>,

    /// Average CPU utilization within `0..=100`.
    #[clap(long)]
    cpu_percent: Option<Percentage>,

    /// Daily operating hours.
    #[clap(long, default_value = "24")]
    hours: Hours,

    /// Region code, see `regions`.
    #[clap(long, env = "REGION")]
    region: Option<String>,
}

impl EstimateArgs {
    pub fn run(self) -> Result {
        let Some(class) = self.class else {
            let watts = self.watts.context("`--watts` is required without `--class`")?;
            let (energy, emissions) = quick_estimate(watts, self.hours, self.region.as_deref());
            println!("Energy: {energy}");
            println!("Carbon: {emissions}");
            return Ok(());
        };

        let power = match (self.watts, self.cpu_percent) {
            (Some(watts), _) => PowerMode::ExplicitWatts(watts),
            (None, Some(cpu_percent)) => PowerMode::CpuUtilization(cpu_percent),
            (None, None) => bail!("either `--watts` or `--cpu-percent` is required"),
        };
        let device = DeviceInput::builder()
            .name(self.name)
            .class(class)
            .power(power)
            .hours(self.hours)
            .maybe_region(self.region)
            .build();
        let usage = compute_usage(&device)?;
        info!(name = %device.name, %device.class, "estimated");

        println!("Power: {}", usage.watts);
        println!("Energy: {}", usage.energy);
        println!("Carbon: {}", usage.emissions);
        println!("Cost: {}", usage.cost);
        Ok(())
    }
}
