quantity!(
    /// Operating duration, usually per day.
    Hours, via: f64, suffix: "h", precision: 1
);
