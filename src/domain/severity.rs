#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    pub fn of(magnitude: f64) -> Self {
        if magnitude < 4.0 {
            Severity::Low
        } else if magnitude < 5.0 {
            Severity::Moderate
        } else {
            Severity::High
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "#1db954",
            Severity::Moderate => "#f4c20d",
            Severity::High => "#db4437",
        }
    }
}

/// Map marker diameter in points for a given magnitude.
pub fn marker_size(magnitude: f64) -> f64 {
    (magnitude * 7.0).clamp(20.0, 40.0)
}
