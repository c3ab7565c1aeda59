quantity!(Percentage, via: f64, suffix: "%", precision: 0);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    /// Convert the percentage into `0.0..=1.0`.
    pub const fn to_ratio(self) -> f64 {
        0.01 * self.0
    }

    pub fn is_within_bounds(self) -> bool {
        (Self::ZERO..=Self::HUNDRED).contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Percentage(0.0).is_within_bounds());
        assert!(Percentage(100.0).is_within_bounds());
        assert!(!Percentage(100.1).is_within_bounds());
        assert!(!Percentage(-1.0).is_within_bounds());
        assert!(!Percentage(f64::NAN).is_within_bounds());
    }
}
