//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Generator profiles describing value ranges and identity schemes."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;

/// Exclusive upper bound for randomly drawn vehicle identifier suffixes.
pub const RANDOM_ID_SPACE: u64 = 1000;

/// How a generator assigns vehicle identifiers when the caller does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Identifiers count upwards from `car_1`.
    Sequential,
    /// Identifier suffix drawn from `[0, RANDOM_ID_SPACE)`.
    Random,
}

/// Named base profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Bounded regional box with sequential identifiers (batch defaults).
    #[default]
    Geofence,
    /// Whole-globe coordinates with random identifiers (single-shot defaults).
    Global,
}

impl ProfileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Geofence => "geofence",
            ProfileKind::Global => "global",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geofence" => Ok(ProfileKind::Geofence),
            "global" => Ok(ProfileKind::Global),
            other => Err(ProfileError::UnknownProfile(other.to_owned())),
        }
    }
}

/// Closed interval used for coordinate draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, field: &'static str) -> Result<(), ProfileError> {
        let ordered = self.min.is_finite() && self.max.is_finite() && self.min <= self.max;
        // The span must be representable for uniform sampling.
        if !ordered || !(self.max - self.min).is_finite() {
            return Err(ProfileError::InvalidBounds {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Value ranges and identity scheme used by [`crate::RecordGenerator`].
///
/// Speed is drawn from `[0, speed_max]`, fuel from `[0, fuel_max)` and
/// engine temperature from `[0, temp_max)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorProfile {
    pub id_mode: IdMode,
    pub speed_max: u32,
    pub latitude: Bounds,
    pub longitude: Bounds,
    pub fuel_max: f64,
    pub temp_max: u32,
}

impl GeneratorProfile {
    /// Regional box used for fleet fan-out runs.
    pub fn geofence() -> Self {
        Self {
            id_mode: IdMode::Sequential,
            speed_max: 120,
            latitude: Bounds::new(33.0, 43.0),
            longitude: Bounds::new(124.0, 132.0),
            fuel_max: 100.0,
            temp_max: 120,
        }
    }

    /// Whole-globe coordinates used for one-off console records.
    pub fn global() -> Self {
        Self {
            id_mode: IdMode::Random,
            speed_max: 120,
            latitude: Bounds::new(-90.0, 90.0),
            longitude: Bounds::new(-180.0, 180.0),
            fuel_max: 100.0,
            temp_max: 121,
        }
    }

    pub fn from_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Geofence => Self::geofence(),
            ProfileKind::Global => Self::global(),
        }
    }

    pub fn with_id_mode(mut self, id_mode: IdMode) -> Self {
        self.id_mode = id_mode;
        self
    }

    /// Check that every range can be sampled.
    pub fn validate(&self) -> Result<(), ProfileError> {
        self.latitude.validate("latitude")?;
        self.longitude.validate("longitude")?;
        if !self.fuel_max.is_finite() || self.fuel_max <= 0.0 {
            return Err(ProfileError::EmptyRange { field: "fuel_max" });
        }
        if self.temp_max == 0 {
            return Err(ProfileError::EmptyRange { field: "temp_max" });
        }
        Ok(())
    }
}

impl Default for GeneratorProfile {
    fn default() -> Self {
        Self::geofence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_profiles_validate() {
        GeneratorProfile::geofence().validate().unwrap();
        GeneratorProfile::global().validate().unwrap();
    }

    #[test]
    fn geofence_and_global_keep_distinct_coordinates() {
        let geofence = GeneratorProfile::geofence();
        let global = GeneratorProfile::global();
        assert_eq!(geofence.latitude, Bounds::new(33.0, 43.0));
        assert_eq!(geofence.longitude, Bounds::new(124.0, 132.0));
        assert_eq!(global.latitude, Bounds::new(-90.0, 90.0));
        assert_eq!(global.longitude, Bounds::new(-180.0, 180.0));
        assert_eq!(geofence.id_mode, IdMode::Sequential);
        assert_eq!(global.id_mode, IdMode::Random);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut profile = GeneratorProfile::geofence();
        profile.latitude = Bounds::new(43.0, 33.0);
        let err = profile.validate().unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidBounds {
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let mut profile = GeneratorProfile::global();
        profile.longitude = Bounds::new(f64::NEG_INFINITY, 0.0);
        assert!(profile.validate().is_err());
    }

    #[test]
    fn bounds_with_unrepresentable_span_are_rejected() {
        let mut profile = GeneratorProfile::geofence();
        profile.latitude = Bounds::new(-1.7e308, 1.7e308);
        let err = profile.validate().unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidBounds {
                field: "latitude",
                ..
            }
        ));
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let mut profile = GeneratorProfile::geofence();
        profile.temp_max = 0;
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::EmptyRange { field: "temp_max" })
        ));

        let mut profile = GeneratorProfile::geofence();
        profile.fuel_max = 0.0;
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::EmptyRange { field: "fuel_max" })
        ));
    }

    #[test]
    fn profile_kind_parses_case_insensitively() {
        assert_eq!("Geofence".parse::<ProfileKind>().unwrap(), ProfileKind::Geofence);
        assert_eq!(" global ".parse::<ProfileKind>().unwrap(), ProfileKind::Global);
        assert!("lunar".parse::<ProfileKind>().is_err());
    }

    #[test]
    fn degenerate_bounds_are_allowed() {
        let mut profile = GeneratorProfile::geofence();
        profile.latitude = Bounds::new(40.0, 40.0);
        profile.validate().unwrap();
    }
}
