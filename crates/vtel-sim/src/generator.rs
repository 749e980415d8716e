//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Synthetic telemetry record generator."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
use rand::prelude::*;
use tracing::trace;

use crate::errors::ProfileError;
use crate::profile::{GeneratorProfile, IdMode, RANDOM_ID_SPACE};
use crate::record::{vehicle_id, Location, TelemetryRecord};

/// Identity supplied for a single generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdContext {
    /// Caller-chosen vehicle index, used verbatim as the identifier suffix.
    Sequential(u64),
    /// Suffix drawn from the random source.
    Random,
}

/// Draws telemetry records from a validated profile and an owned random source.
#[derive(Debug)]
pub struct RecordGenerator<R = StdRng> {
    profile: GeneratorProfile,
    rng: R,
    next_sequence: u64,
}

impl RecordGenerator<StdRng> {
    /// Deterministic generator for reproducible runs.
    pub fn seeded(profile: GeneratorProfile, seed: u64) -> Result<Self, ProfileError> {
        Self::new(profile, StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating system entropy.
    pub fn from_entropy(profile: GeneratorProfile) -> Result<Self, ProfileError> {
        Self::new(profile, StdRng::from_entropy())
    }
}

impl<R: Rng> RecordGenerator<R> {
    pub fn new(profile: GeneratorProfile, rng: R) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            profile,
            rng,
            next_sequence: 1,
        })
    }

    pub fn profile(&self) -> &GeneratorProfile {
        &self.profile
    }

    /// Produce one record for the given identity.
    pub fn generate(&mut self, id: IdContext) -> TelemetryRecord {
        let suffix = match id {
            IdContext::Sequential(index) => index,
            IdContext::Random => self.rng.gen_range(0..RANDOM_ID_SPACE),
        };
        let speed = self.rng.gen_range(0..=self.profile.speed_max);
        let latitude = self
            .rng
            .gen_range(self.profile.latitude.min..=self.profile.latitude.max);
        let longitude = self
            .rng
            .gen_range(self.profile.longitude.min..=self.profile.longitude.max);
        let fuel = self.rng.gen_range(0.0..self.profile.fuel_max);
        let temperature = f64::from(self.rng.gen_range(0..self.profile.temp_max));

        trace!(vehicle = suffix, speed, latitude, longitude, fuel, temperature, "drew telemetry");
        TelemetryRecord::new(
            vehicle_id(suffix),
            speed,
            Location {
                latitude,
                longitude,
            },
            fuel,
            temperature,
        )
    }

    /// Produce a record using the profile's own identity scheme.
    ///
    /// Sequential profiles count upwards from 1 across calls.
    pub fn generate_next(&mut self) -> TelemetryRecord {
        match self.profile.id_mode {
            IdMode::Random => self.generate(IdContext::Random),
            IdMode::Sequential => {
                let index = self.next_sequence;
                self.next_sequence += 1;
                self.generate(IdContext::Sequential(index))
            }
        }
    }
}
