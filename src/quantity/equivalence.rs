quantity!(
    /// Distance driven by an average car.
    Miles, via: f64, suffix: "mi", precision: 0
);

quantity!(
    /// Number of mature trees.
    Trees, via: f64, suffix: "trees", precision: 0
);
