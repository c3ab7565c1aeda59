use crate::quantity::energy::KilowattHours;

quantity!(
    /// Mass of emitted CO₂.
    Kilograms, via: f64, suffix: "kg CO₂", precision: 2
);

quantity!(Tonnes, via: f64, suffix: "t CO₂", precision: 2);

quantity!(
    /// Grid carbon intensity: CO₂ emitted per kilowatt-hour generated.
    CarbonIntensity, via: f64, suffix: "kg CO₂/kWh", precision: 2
);

implement_mul!(KilowattHours, CarbonIntensity, Kilograms);

impl From<Kilograms> for Tonnes {
    fn from(kilograms: Kilograms) -> Self {
        Self(kilograms.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_emissions() {
        let emissions = KilowattHours(6.96) * CarbonIntensity(0.6);
        assert_abs_diff_eq!(emissions.0, 4.176, epsilon = 1e-12);
        assert_eq!(emissions.to_string(), "4.18 kg CO₂");
    }

    #[test]
    fn test_tonnes() {
        assert_abs_diff_eq!(Tonnes::from(Kilograms(1553.44)).0, 1.553_44, epsilon = 1e-12);
    }
}
