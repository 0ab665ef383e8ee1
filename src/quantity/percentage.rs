quantity!(Percentage, suffix: "%", precision: 1);

impl Percentage {
    /// Convert the percentage into a ratio, so that `100%` becomes `1.0`.
    pub fn to_ratio(self) -> f64 {
        self.0 / 100.0
    }
}
