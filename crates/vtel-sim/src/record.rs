//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "Telemetry record data model."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---

/// Prefix shared by every generated vehicle identifier.
pub const VEHICLE_ID_PREFIX: &str = "car_";

/// Unit label emitted alongside the speed value.
pub const SPEED_UNIT: &str = "km/h";
/// Unit label emitted alongside the fuel level value.
pub const FUEL_UNIT: &str = "%";
/// Unit label emitted alongside the engine temperature value.
pub const TEMPERATURE_UNIT: &str = "°C";

/// Build the identifier for a vehicle from its numeric suffix.
pub fn vehicle_id(suffix: u64) -> String {
    format!("{VEHICLE_ID_PREFIX}{suffix}")
}

/// Geographic position of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Single synthetic telemetry snapshot for one vehicle.
///
/// Records are immutable once built; unit labels are not stored and are
/// supplied by the codec from the constants in this module.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryRecord {
    vehicle_id: String,
    speed_kmh: u32,
    location: Location,
    fuel_level_pct: f64,
    engine_temperature_c: f64,
}

impl TelemetryRecord {
    pub fn new(
        vehicle_id: impl Into<String>,
        speed_kmh: u32,
        location: Location,
        fuel_level_pct: f64,
        engine_temperature_c: f64,
    ) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            speed_kmh,
            location,
            fuel_level_pct,
            engine_temperature_c,
        }
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    pub fn speed_kmh(&self) -> u32 {
        self.speed_kmh
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn fuel_level_pct(&self) -> f64 {
        self.fuel_level_pct
    }

    pub fn engine_temperature_c(&self) -> f64 {
        self.engine_temperature_c
    }
}
