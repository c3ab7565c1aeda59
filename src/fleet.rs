use std::{
    fmt::{Debug, Display, Formatter},
    fs,
    num::ParseIntError,
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{
    core::{DeviceInput, DeviceRecord},
    prelude::*,
};

/// Fleet-local device identifier, never reused after removal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub struct DeviceId(pub u32);

impl Display for DeviceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Accepts both `3` and `#3`, the latter being how the tables show the identifiers.
impl FromStr for DeviceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('#').unwrap_or(s).parse().map(Self)
    }
}

/// Ordered collection of tracked devices, owned by the caller.
#[must_use]
#[derive(Default)]
pub struct Fleet {
    next_id: u32,
    entries: Vec<(DeviceId, DeviceInput)>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FleetFile {
    Bare(Vec<DeviceRecord>),
    Wrapped { devices: Vec<DeviceRecord> },
}

impl From<FleetFile> for Vec<DeviceRecord> {
    fn from(file: FleetFile) -> Self {
        match file {
            FleetFile::Bare(devices) | FleetFile::Wrapped { devices } => devices,
        }
    }
}

impl Fleet {
    /// Read the fleet from a JSON file (`.json` in any case) or otherwise a TOML file.
    #[instrument(name = "Reading the fleet…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let is_json =
            path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        let records = if is_json {
            Self::parse_json(&contents)?
        } else {
            Self::parse_toml(&contents)?
        };
        let fleet = Self::try_from_records(records)?;
        info!(n_devices = fleet.len(), "loaded");
        Ok(fleet)
    }

    fn parse_json(contents: &str) -> Result<Vec<DeviceRecord>> {
        Ok(serde_json::from_str::<FleetFile>(contents).context("malformed JSON fleet")?.into())
    }

    fn parse_toml(contents: &str) -> Result<Vec<DeviceRecord>> {
        #[derive(Deserialize)]
        struct Document {
            #[serde(default)]
            devices: Vec<DeviceRecord>,
        }

        Ok(toml::from_str::<Document>(contents).context("malformed TOML fleet")?.devices)
    }

    /// Validate all the records, failing on the first invalid one.
    pub fn try_from_records(records: impl IntoIterator<Item = DeviceRecord>) -> Result<Self> {
        let mut fleet = Self::default();
        for (index, record) in records.into_iter().enumerate() {
            let name = record.name.clone();
            let device = DeviceInput::try_from(record)
                .with_context(|| format!("device #{index} (`{name}`) is invalid"))?;
            fleet.add(device);
        }
        Ok(fleet)
    }

    pub fn add(&mut self, device: DeviceInput) -> DeviceId {
        let id = DeviceId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, device));
        id
    }

    pub fn remove(&mut self, id: DeviceId) -> Option<DeviceInput> {
        let index = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeviceId, &DeviceInput)> {
        self.entries.iter().map(|(id, device)| (*id, device))
    }

    pub fn devices(&self) -> impl Iterator<Item = &DeviceInput> {
        self.entries.iter().map(|(_, device)| device)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        core::{DeviceClass, PowerMode, aggregate},
        quantity::{power::Watts, ratios::Percentage},
    };

    const LEGACY_JSON: &str = r#"[
        {"name": "Web Server", "type": "server", "cpuPercent": 45, "hours": 24, "location": "CN"},
        {"name": "MacBook Pro", "type": "laptop", "watts": 50, "hours": 8, "location": "US-CA"}
    ]"#;

    const TOML: &str = r#"
        [[devices]]
        name = "Web Server"
        class = "server"
        cpu_percent = 45
        hours = 24
        region = "CN"

        [[devices]]
        name = "MacBook Pro"
        class = "laptop"
        watts = 50
        hours = 8
        region = "US-CA"
    "#;

    #[test]
    fn test_parse_legacy_json() {
        let fleet = Fleet::try_from_records(Fleet::parse_json(LEGACY_JSON).unwrap()).unwrap();
        assert_eq!(fleet.len(), 2);
        let (id, server) = fleet.iter().next().unwrap();
        assert_eq!(id, DeviceId(0));
        assert_eq!(server.class, DeviceClass::Server);
        assert_eq!(server.power, PowerMode::CpuUtilization(Percentage(45.0)));
    }

    #[test]
    fn test_parse_wrapped_json() {
        let json = r#"{"devices": [{"name": "A", "class": "desktop", "watts": 90, "hours": 2}]}"#;
        let fleet = Fleet::try_from_records(Fleet::parse_json(json).unwrap()).unwrap();
        assert_eq!(fleet.devices().next().unwrap().power, PowerMode::ExplicitWatts(Watts(90.0)));
    }

    #[test]
    fn test_json_and_toml_agree() {
        let json = Fleet::try_from_records(Fleet::parse_json(LEGACY_JSON).unwrap()).unwrap();
        let toml = Fleet::try_from_records(Fleet::parse_toml(TOML).unwrap()).unwrap();
        assert!(json.devices().eq(toml.devices()));

        let totals = aggregate(toml.devices()).unwrap();
        assert_abs_diff_eq!(totals.emissions.0, 4.256, epsilon = 1e-9);
    }

    #[test]
    fn test_read_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("fleet.JSON");
        fs::write(&json_path, LEGACY_JSON).unwrap();
        let toml_path = temp_dir.path().join("fleet.toml");
        fs::write(&toml_path, TOML).unwrap();

        let json = Fleet::read_from(&json_path).unwrap();
        let toml = Fleet::read_from(&toml_path).unwrap();
        assert_eq!(json.len(), 2);
        assert!(json.devices().eq(toml.devices()));
    }

    #[test]
    fn test_read_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let error = Fleet::read_from(temp_dir.path().join("missing.toml")).err().unwrap();
        assert!(format!("{error:#}").contains("failed to read"));
    }

    #[test]
    fn test_parse_device_id() {
        assert_eq!("3".parse::<DeviceId>(), Ok(DeviceId(3)));
        assert_eq!("#3".parse::<DeviceId>(), Ok(DeviceId(3)));
        assert_eq!(DeviceId(3).to_string().parse::<DeviceId>(), Ok(DeviceId(3)));
        assert!("##3".parse::<DeviceId>().is_err());
    }

    #[test]
    fn test_empty_toml() {
        let fleet = Fleet::try_from_records(Fleet::parse_toml("").unwrap()).unwrap();
        assert!(fleet.is_empty());
    }

    #[test]
    fn test_invalid_record_fails_the_load() {
        let json = r#"[
            {"name": "A", "type": "desktop", "watts": 90, "hours": 2},
            {"name": "B", "type": "toaster", "watts": 900, "hours": 1}
        ]"#;
        let error = Fleet::try_from_records(Fleet::parse_json(json).unwrap()).err().unwrap();
        assert!(format!("{error:#}").contains("toaster"));
    }

    #[test]
    fn test_add_and_remove() {
        let mut fleet = Fleet::try_from_records(Fleet::parse_json(LEGACY_JSON).unwrap()).unwrap();
        let removed = fleet.remove(DeviceId(0)).unwrap();
        assert_eq!(removed.name, "Web Server");
        assert!(fleet.remove(DeviceId(0)).is_none());

        let id = fleet.add(removed);
        assert_eq!(id, DeviceId(2));
        assert_eq!(fleet.iter().map(|(id, _)| id).collect::<Vec<_>>(), [DeviceId(1), DeviceId(2)]);
    }
}
