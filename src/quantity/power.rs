quantity!(Watts, via: f64, suffix: "W", precision: 0);
