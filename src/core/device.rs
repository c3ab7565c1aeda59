use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use bon::Builder;
use comfy_table::Color;
use serde::{Deserialize, Serialize};

use crate::{
    core::error::Error,
    quantity::{power::Watts, ratios::Percentage, time::Hours},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Server,
    Laptop,
    Desktop,
}

impl DeviceClass {
    pub const ALL: [Self; 3] = [Self::Server, Self::Laptop, Self::Desktop];

    /// Idle and full-load power draw of the class.
    pub const fn spec(self) -> DeviceSpec {
        match self {
            Self::Server => DeviceSpec { min: Watts(200.0), max: Watts(400.0) },
            Self::Laptop => DeviceSpec { min: Watts(20.0), max: Watts(80.0) },
            Self::Desktop => DeviceSpec { min: Watts(50.0), max: Watts(150.0) },
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Server => Color::Magenta,
            Self::Laptop => Color::Cyan,
            Self::Desktop => Color::Blue,
        }
    }
}

impl Display for DeviceClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Server => write!(f, "server"),
            Self::Laptop => write!(f, "laptop"),
            Self::Desktop => write!(f, "desktop"),
        }
    }
}

impl FromStr for DeviceClass {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "server" => Ok(Self::Server),
            "laptop" => Ok(Self::Laptop),
            "desktop" => Ok(Self::Desktop),
            _ => Err(Error::UnknownDeviceClass(name.to_owned())),
        }
    }
}

/// Wattage range of a device class, `min <= max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeviceSpec {
    pub min: Watts,
    pub max: Watts,
}

impl DeviceSpec {
    /// Estimate the power draw at the given CPU utilization.
    ///
    /// Power draw is close to linear in utilization for a given hardware class,
    /// so this interpolates between the idle and the full-load draw.
    pub fn interpolate(self, utilization: Percentage) -> Watts {
        self.min + (self.max - self.min) * utilization.to_ratio()
    }
}

/// How the effective wattage of a device is determined.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerMode {
    /// Measured or nameplate power draw.
    ExplicitWatts(Watts),

    /// Power draw estimated from the device class range, must be within `0..=100`.
    CpuUtilization(Percentage),
}

#[derive(Clone, Debug, PartialEq, Builder, Serialize)]
pub struct DeviceInput {
    /// Display name.
    #[builder(into)]
    pub name: String,

    pub class: DeviceClass,

    pub power: PowerMode,

    /// Representative daily operating duration.
    pub hours: Hours,

    /// Region code for the carbon intensity lookup.
    #[builder(into)]
    pub region: Option<String>,
}

/// Device as it comes from a data file or a form, before validation.
///
/// Also accepts the `type`, `cpuPercent` and `location` spellings used by the legacy JSON data.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeviceRecord {
    pub name: String,

    #[serde(alias = "type")]
    pub class: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts: Option<Watts>,

    #[serde(default, alias = "cpuPercent", skip_serializing_if = "Option::is_none")]
    pub cpu_percent: Option<Percentage>,

    pub hours: Hours,

    #[serde(default, alias = "location", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl TryFrom<DeviceRecord> for DeviceInput {
    type Error = Error;

    /// Explicit watts take precedence over the CPU percentage when both are present,
    /// including an explicit zero.
    fn try_from(record: DeviceRecord) -> Result<Self, Self::Error> {
        if record.name.trim().is_empty() {
            return Err(Error::InvalidInput("device name must not be empty".to_owned()));
        }
        let class = record.class.parse()?;
        let power = match (record.watts, record.cpu_percent) {
            (Some(watts), _) => PowerMode::ExplicitWatts(watts),
            (None, Some(cpu_percent)) => PowerMode::CpuUtilization(cpu_percent),
            (None, None) => {
                return Err(Error::InvalidInput(format!(
                    "`{}` has neither watts nor a CPU percentage",
                    record.name,
                )));
            }
        };
        Ok(Self { name: record.name, class, power, hours: record.hours, region: record.region })
    }
}
