use std::ops::Mul;

use crate::quantity::{power::Watts, time::Hours};

quantity!(KilowattHours, via: f64, suffix: "kWh", precision: 2);

impl KilowattHours {
    pub const ONE_WATT_HOUR: Self = Self(0.001);
}

impl Mul<Hours> for Watts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        KilowattHours::ONE_WATT_HOUR * (self.0 * hours.0)
    }
}
