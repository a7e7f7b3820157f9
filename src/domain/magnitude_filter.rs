pub const MAX_MAGNITUDE_THRESHOLD: f64 = 7.0;

/// Minimum magnitude a record needs to be displayed. A threshold of zero disables filtering.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct MagnitudeFilter {
    threshold: f64,
}

impl MagnitudeFilter {
    #[cfg(test)]
    pub fn none() -> Self {
        MagnitudeFilter { threshold: 0.0 }
    }

    pub fn at_least(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { 0.0 } else { threshold.clamp(0.0, MAX_MAGNITUDE_THRESHOLD) };
        MagnitudeFilter { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_active(&self) -> bool {
        self.threshold > 0.0
    }

    pub fn label(&self) -> String {
        if self.is_active() {
            format!("{:.1}+ Büyüklüğündekiler", self.threshold)
        } else {
            "Tüm Depremler".to_string()
        }
    }
}
