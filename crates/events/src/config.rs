//! Deriver configuration.

use crate::error::EventError;

/// Configuration for the daily event deriver.
#[derive(Debug, Clone)]
pub struct DeriverConfig {
    latitude_deg: f64,
    longitude_deg: f64,
    supermoon_km: f64,
    shadow_enlargement: f64,
    scan_step_min: u32,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            supermoon_km: 360_000.0,
            shadow_enlargement: 1.02,
            scan_step_min: 10,
        }
    }
}

impl DeriverConfig {
    /// Set the observer's geographic latitude in degrees, north positive.
    pub fn with_latitude_deg(mut self, degrees: f64) -> Self {
        self.latitude_deg = degrees;
        self
    }

    /// Set the observer's geographic longitude in degrees, east positive.
    pub fn with_longitude_deg(mut self, degrees: f64) -> Self {
        self.longitude_deg = degrees;
        self
    }

    /// Set the perigee distance threshold for the supermoon flag, km.
    pub fn with_supermoon_km(mut self, km: f64) -> Self {
        self.supermoon_km = km;
        self
    }

    /// Set the atmospheric enlargement factor applied to Earth's shadow.
    pub fn with_shadow_enlargement(mut self, factor: f64) -> Self {
        self.shadow_enlargement = factor;
        self
    }

    /// Set the coarse altitude/separation scan step in minutes.
    pub fn with_scan_step_min(mut self, minutes: u32) -> Self {
        self.scan_step_min = minutes;
        self
    }

    /// Returns the observer latitude in degrees.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Returns the observer longitude in degrees.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Returns the supermoon distance threshold in km.
    pub fn supermoon_km(&self) -> f64 {
        self.supermoon_km
    }

    /// Returns the shadow enlargement factor.
    pub fn shadow_enlargement(&self) -> f64 {
        self.shadow_enlargement
    }

    /// Returns the scan step in minutes.
    pub fn scan_step_min(&self) -> u32 {
        self.scan_step_min
    }

    /// Checks that all settings are inside their working ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidConfig`] naming the first offending
    /// setting.
    pub fn validate(&self) -> Result<(), EventError> {
        let invalid = |reason: String| EventError::InvalidConfig { reason };

        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(invalid(format!(
                "latitude {} outside [-90, 90]",
                self.latitude_deg
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(invalid(format!(
                "longitude {} outside [-180, 180]",
                self.longitude_deg
            )));
        }
        if !self.supermoon_km.is_finite() || self.supermoon_km <= 0.0 {
            return Err(invalid(format!(
                "supermoon threshold {} km must be positive",
                self.supermoon_km
            )));
        }
        if !self.shadow_enlargement.is_finite() || self.shadow_enlargement <= 0.0 {
            return Err(invalid(format!(
                "shadow enlargement {} must be positive",
                self.shadow_enlargement
            )));
        }
        if !(1..=120).contains(&self.scan_step_min) {
            return Err(invalid(format!(
                "scan step {} min outside [1, 120]",
                self.scan_step_min
            )));
        }
        Ok(())
    }
}
