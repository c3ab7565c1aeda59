use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::quantity::carbon::CarbonIntensity;

/// Applies to an absent or an unrecognized region code.
pub const DEFAULT_INTENSITY: CarbonIntensity = CarbonIntensity(0.4);

/// Grid region with a known carbon intensity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Region {
    #[serde(rename = "US")]
    UnitedStates,

    #[serde(rename = "US-CA")]
    California,

    #[serde(rename = "US-TX")]
    Texas,

    #[serde(rename = "EU")]
    Europe,

    #[serde(rename = "EU-FR")]
    France,

    #[serde(rename = "EU-DE")]
    Germany,

    #[serde(rename = "CN")]
    China,
}

impl Region {
    pub const ALL: [Self; 7] = [
        Self::UnitedStates,
        Self::California,
        Self::Texas,
        Self::Europe,
        Self::France,
        Self::Germany,
        Self::China,
    ];

    /// Look up the region by its exact, case-sensitive code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.code() == code)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::UnitedStates => "US",
            Self::California => "US-CA",
            Self::Texas => "US-TX",
            Self::Europe => "EU",
            Self::France => "EU-FR",
            Self::Germany => "EU-DE",
            Self::China => "CN",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::UnitedStates => "US East",
            Self::California => "US West",
            Self::Texas => "US Central",
            Self::Europe => "Europe",
            Self::France => "France",
            Self::Germany => "Germany",
            Self::China => "China",
        }
    }

    pub const fn intensity(self) -> CarbonIntensity {
        match self {
            Self::UnitedStates => CarbonIntensity(0.4),
            Self::California => CarbonIntensity(0.2),
            Self::Texas => CarbonIntensity(0.45),
            Self::Europe => CarbonIntensity(0.3),
            Self::France => CarbonIntensity(0.05),
            Self::Germany => CarbonIntensity(0.35),
            Self::China => CarbonIntensity(0.6),
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Carbon intensity of the region, falling back to [`DEFAULT_INTENSITY`].
pub fn carbon_intensity(region: Option<&str>) -> CarbonIntensity {
    region.and_then(Region::from_code).map_or(DEFAULT_INTENSITY, Region::intensity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_code(region.code()), Some(region));
        }
    }

    #[test]
    fn test_known_region() {
        assert_eq!(carbon_intensity(Some("EU-FR")), CarbonIntensity(0.05));
        assert_eq!(carbon_intensity(Some("CN")), CarbonIntensity(0.6));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(carbon_intensity(None), DEFAULT_INTENSITY);
        assert_eq!(carbon_intensity(Some("MARS")), DEFAULT_INTENSITY);
        assert_eq!(carbon_intensity(Some("us-ca")), DEFAULT_INTENSITY);
        assert_eq!(carbon_intensity(Some("")), DEFAULT_INTENSITY);
    }

    #[test]
    fn test_intensities_are_non_negative() {
        assert!(Region::ALL.into_iter().all(|region| region.intensity() >= CarbonIntensity::ZERO));
    }
}
