use std::cmp::Ordering;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{DEFAULT_INTENSITY, DeviceClass, FleetTotals, PowerMode, Region, carbon_intensity},
    quantity::{carbon::CarbonIntensity, currency::Dollars},
    report::{RegionUsage, Report},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn intensity_color(intensity: CarbonIntensity) -> Color {
    match intensity.cmp(&DEFAULT_INTENSITY) {
        Ordering::Greater => Color::Red,
        Ordering::Less => Color::Green,
        Ordering::Equal => Color::DarkYellow,
    }
}

pub fn build_devices_table(report: &Report) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "ID", "Name", "Class", "Source", "Region", "Power", "Energy", "CO₂", "Cost",
    ]);
    for row in &report.devices {
        let device = row.device;
        let intensity = carbon_intensity(device.region.as_deref());
        let region = device.region.as_deref().and_then(Region::from_code);
        table.add_row(vec![
            Cell::new(row.id).add_attribute(Attribute::Dim),
            Cell::new(&device.name),
            Cell::new(device.class).fg(device.class.color()),
            match device.power {
                PowerMode::ExplicitWatts(_) => Cell::new("measured"),
                PowerMode::CpuUtilization(cpu_percent) => {
                    Cell::new(format!("CPU {cpu_percent}")).add_attribute(Attribute::Dim)
                }
            },
            match region {
                Some(region) => Cell::new(format!("{} ({})", region.label(), region.code())),
                None => Cell::new(device.region.as_deref().unwrap_or("default"))
                    .add_attribute(Attribute::Dim),
            },
            Cell::new(row.usage.watts).set_alignment(CellAlignment::Right),
            Cell::new(row.usage.energy).set_alignment(CellAlignment::Right),
            Cell::new(row.usage.emissions)
                .set_alignment(CellAlignment::Right)
                .fg(intensity_color(intensity)),
            Cell::new(row.usage.cost)
                .set_alignment(CellAlignment::Right)
                .fg(if row.usage.cost >= Dollars::ONE { Color::Red } else { Color::Reset }),
        ]);
    }
    table
}

pub fn build_totals_table(totals: &FleetTotals) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Total", "Value"]);
    let rows = [
        ("Devices", totals.n_devices.to_string()),
        ("Energy", totals.energy.to_string()),
        ("Carbon", totals.emissions.to_string()),
        ("Cost", totals.cost.to_string()),
        ("Car distance", totals.car_distance.to_string()),
        ("Yearly carbon", totals.yearly_emissions.to_string()),
        ("Trees to offset a year", totals.trees_to_offset.to_string()),
    ];
    for (title, value) in rows {
        table.add_row(vec![
            Cell::new(title).add_attribute(Attribute::Bold),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_by_region_table(by_region: &[RegionUsage]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Region", "Devices", "CO₂"]);
    for row in by_region {
        table.add_row(vec![
            Cell::new(format!("{} ({})", row.region.label(), row.region.code())),
            Cell::new(row.n_devices).set_alignment(CellAlignment::Right),
            Cell::new(row.emissions)
                .set_alignment(CellAlignment::Right)
                .fg(intensity_color(row.region.intensity())),
        ]);
    }
    table
}

pub fn build_classes_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Class", "Idle", "Full load"]);
    for class in DeviceClass::ALL {
        let spec = class.spec();
        table.add_row(vec![
            Cell::new(class).fg(class.color()),
            Cell::new(spec.min).set_alignment(CellAlignment::Right),
            Cell::new(spec.max).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn build_regions_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Code", "Region", "Intensity"]);
    for region in Region::ALL {
        let intensity = region.intensity();
        table.add_row(vec![
            Cell::new(region.code()).add_attribute(Attribute::Bold),
            Cell::new(region.label()),
            Cell::new(intensity)
                .set_alignment(CellAlignment::Right)
                .fg(intensity_color(intensity)),
        ]);
    }
    table.add_row(vec![
        Cell::new("*").add_attribute(Attribute::Dim),
        Cell::new("Anywhere else").add_attribute(Attribute::Dim),
        Cell::new(DEFAULT_INTENSITY).set_alignment(CellAlignment::Right),
    ]);
    table
}
