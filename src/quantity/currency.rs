use crate::quantity::energy::KilowattHours;

quantity!(Dollars, via: f64, suffix: "USD", precision: 2);

quantity!(KilowattHourPrice, via: f64, suffix: "USD/kWh", precision: 2);

implement_mul!(KilowattHours, KilowattHourPrice, Dollars);

impl Dollars {
    pub const ONE: Self = Self(1.0);
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_cost() {
        let cost = KilowattHours(6.96) * KilowattHourPrice(0.12);
        assert_abs_diff_eq!(cost.0, 0.8352, epsilon = 1e-12);
        assert_eq!(cost.to_string(), "0.84 USD");

        let cost = KilowattHourPrice(0.12) * KilowattHours(0.4);
        assert_abs_diff_eq!(cost.0, 0.048, epsilon = 1e-12);
    }
}
