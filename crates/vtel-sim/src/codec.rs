//! ---
//! vtel_section: "11-simulation"
//! vtel_subsection: "module"
//! vtel_type: "source"
//! vtel_scope: "code"
//! vtel_description: "JSON encoding of telemetry records."
//! vtel_version: "v0.1.0"
//! vtel_owner: "tbd"
//! ---
//! Wire layout of a telemetry record.
//!
//! ```json
//! {
//!   "car_id": "car_1",
//!   "Speed": { "value": 64, "unit": "km/h" },
//!   "Location": { "Latitude": 37.1, "Longitude": 126.9 },
//!   "FuelLevel": { "value": 51.2, "unit": "%" },
//!   "Engine": { "Temperature": { "value": 88.0, "unit": "°C" } }
//! }
//! ```
use serde::{Deserialize, Serialize};

use crate::errors::SerializationError;
use crate::record::{Location, TelemetryRecord, FUEL_UNIT, SPEED_UNIT, TEMPERATURE_UNIT};

#[derive(Debug, Serialize, Deserialize)]
struct WireRecord {
    car_id: String,
    #[serde(rename = "Speed")]
    speed: WireSpeed,
    #[serde(rename = "Location")]
    location: WireLocation,
    #[serde(rename = "FuelLevel")]
    fuel_level: WireMeasurement,
    #[serde(rename = "Engine")]
    engine: WireEngine,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireSpeed {
    value: u32,
    unit: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireLocation {
    #[serde(rename = "Latitude")]
    latitude: f64,
    #[serde(rename = "Longitude")]
    longitude: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMeasurement {
    value: f64,
    unit: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireEngine {
    #[serde(rename = "Temperature")]
    temperature: WireMeasurement,
}

impl WireRecord {
    fn from_record(record: &TelemetryRecord) -> Result<Self, SerializationError> {
        let location = record.location();
        ensure_finite("Location.Latitude", location.latitude)?;
        ensure_finite("Location.Longitude", location.longitude)?;
        ensure_finite("FuelLevel.value", record.fuel_level_pct())?;
        ensure_finite("Engine.Temperature.value", record.engine_temperature_c())?;
        Ok(Self {
            car_id: record.vehicle_id().to_owned(),
            speed: WireSpeed {
                value: record.speed_kmh(),
                unit: SPEED_UNIT.to_owned(),
            },
            location: WireLocation {
                latitude: location.latitude,
                longitude: location.longitude,
            },
            fuel_level: WireMeasurement {
                value: record.fuel_level_pct(),
                unit: FUEL_UNIT.to_owned(),
            },
            engine: WireEngine {
                temperature: WireMeasurement {
                    value: record.engine_temperature_c(),
                    unit: TEMPERATURE_UNIT.to_owned(),
                },
            },
        })
    }

    fn into_record(self) -> Result<TelemetryRecord, SerializationError> {
        expect_unit("Speed.unit", SPEED_UNIT, self.speed.unit)?;
        expect_unit("FuelLevel.unit", FUEL_UNIT, self.fuel_level.unit)?;
        expect_unit(
            "Engine.Temperature.unit",
            TEMPERATURE_UNIT,
            self.engine.temperature.unit,
        )?;
        Ok(TelemetryRecord::new(
            self.car_id,
            self.speed.value,
            Location {
                latitude: self.location.latitude,
                longitude: self.location.longitude,
            },
            self.fuel_level.value,
            self.engine.temperature.value,
        ))
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), SerializationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SerializationError::NonFinite { field })
    }
}

fn expect_unit(
    field: &'static str,
    expected: &'static str,
    found: String,
) -> Result<(), SerializationError> {
    if found == expected {
        Ok(())
    } else {
        Err(SerializationError::UnexpectedUnit {
            field,
            expected,
            found,
        })
    }
}

/// Encode a record as pretty-printed JSON.
pub fn serialize(record: &TelemetryRecord) -> Result<Vec<u8>, SerializationError> {
    let wire = WireRecord::from_record(record)?;
    serde_json::to_vec_pretty(&wire).map_err(SerializationError::Encode)
}

/// Decode a record previously produced by [`serialize`].
pub fn parse(bytes: &[u8]) -> Result<TelemetryRecord, SerializationError> {
    let wire: WireRecord = serde_json::from_slice(bytes).map_err(SerializationError::Decode)?;
    wire.into_record()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{IdContext, RecordGenerator};
    use crate::profile::GeneratorProfile;
    use serde_json::Value;

    fn sample() -> TelemetryRecord {
        TelemetryRecord::new(
            "car_4",
            73,
            Location {
                latitude: 36.125,
                longitude: 129.5,
            },
            12.75,
            95.0,
        )
    }

    #[test]
    fn field_names_and_nesting_match_wire_layout() {
        let bytes = serialize(&sample()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["car_id"], "car_4");
        assert_eq!(value["Speed"]["value"], 73);
        assert!(value["Speed"]["value"].is_u64());
        assert_eq!(value["Speed"]["unit"], "km/h");
        assert_eq!(value["Location"]["Latitude"], 36.125);
        assert_eq!(value["Location"]["Longitude"], 129.5);
        assert_eq!(value["FuelLevel"]["value"], 12.75);
        assert_eq!(value["FuelLevel"]["unit"], "%");
        assert!(value["Engine"]["Temperature"]["value"].is_f64());
        assert_eq!(value["Engine"]["Temperature"]["unit"], "°C");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn integer_valued_temperature_stays_a_float() {
        let text = String::from_utf8(serialize(&sample()).unwrap()).unwrap();
        assert!(text.contains("\"value\": 95.0"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let record = sample();
        assert_eq!(serialize(&record).unwrap(), serialize(&record).unwrap());
    }

    #[test]
    fn parse_then_serialize_is_byte_stable() {
        let mut generator = RecordGenerator::seeded(GeneratorProfile::global(), 2024).unwrap();
        for _ in 0..50 {
            let record = generator.generate(IdContext::Random);
            let first = serialize(&record).unwrap();
            let parsed = parse(&first).unwrap();
            assert_eq!(parsed, record);
            assert_eq!(serialize(&parsed).unwrap(), first);
        }
    }

    #[test]
    fn non_finite_values_fail_to_encode() {
        let record = TelemetryRecord::new(
            "car_1",
            10,
            Location {
                latitude: f64::NAN,
                longitude: 0.0,
            },
            1.0,
            1.0,
        );
        let err = serialize(&record).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::NonFinite {
                field: "Location.Latitude"
            }
        ));
    }

    #[test]
    fn foreign_units_are_rejected() {
        let raw = r#"{
            "car_id": "car_1",
            "Speed": { "value": 10, "unit": "mph" },
            "Location": { "Latitude": 1.0, "Longitude": 2.0 },
            "FuelLevel": { "value": 3.0, "unit": "%" },
            "Engine": { "Temperature": { "value": 4.0, "unit": "°C" } }
        }"#;
        let err = parse(raw.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::UnexpectedUnit {
                field: "Speed.unit",
                ..
            }
        ));
    }

    #[test]
    fn malformed_input_reports_decode_error() {
        assert!(matches!(
            parse(b"{\"car_id\": 5}"),
            Err(SerializationError::Decode(_))
        ));
    }
}
