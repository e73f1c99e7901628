//! Persisted RAN configuration records.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DuplexMode, RanParameters, SimulationResult, ValidationError};

/// Opaque unique identifier for a stored configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[serde(transparent)]
pub struct ConfigurationId(Uuid);

impl ConfigurationId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConfigurationId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ConfigurationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(s.to_string()))
    }
}

/// An immutable RAN configuration together with its derived result.
///
/// The only constructor is [`RanConfiguration::new`], which assigns the id
/// and creation timestamp, so a record always carries a complete result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RanConfiguration {
    id: ConfigurationId,
    #[serde(flatten)]
    parameters: RanParameters,
    simulation_result: SimulationResult,
    created_at: DateTime<Utc>,
}

impl RanConfiguration {
    /// Creates a new record with a fresh id and the current timestamp.
    #[must_use]
    pub fn new(parameters: RanParameters, simulation_result: SimulationResult) -> Self {
        Self {
            id: ConfigurationId::new(),
            parameters,
            simulation_result,
            created_at: Utc::now(),
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> ConfigurationId {
        self.id
    }

    /// Returns the input parameters.
    #[must_use]
    pub const fn parameters(&self) -> &RanParameters {
        &self.parameters
    }

    /// Returns the duplex mode of the configuration.
    #[must_use]
    pub const fn duplex_mode(&self) -> DuplexMode {
        self.parameters.duplex_mode()
    }

    /// Returns the derived simulation result.
    #[must_use]
    pub const fn simulation_result(&self) -> &SimulationResult {
        &self.simulation_result
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RanConfiguration {
        let params = RanParameters::new(3.5e9, 20e6, DuplexMode::Tdd, 20.0).unwrap();
        RanConfiguration::new(params, SimulationResult::new(188_193_080.0, 0.00375))
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = sample();
        let b = sample();
        assert_ne!(a.id(), b.id());
        assert!(b.created_at() >= a.created_at());
    }

    #[test]
    fn test_document_shape() {
        let record = sample();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], record.id().to_string());
        assert_eq!(value["frequency"], 3.5e9);
        assert_eq!(value["bandwidth"], 20e6);
        assert_eq!(value["duplexMode"], "TDD");
        assert_eq!(value["transmitPower"], 20.0);
        assert_eq!(value["simulationResult"]["latency"], 0.00375);
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn test_document_reload() {
        let record = sample();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let loaded: RanConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_reload_rejects_invalid_duplex_mode() {
        let record = sample();
        let json = serde_json::to_string(&record)
            .unwrap()
            .replace("\"TDD\"", "\"XDD\"");
        assert!(serde_json::from_str::<RanConfiguration>(&json).is_err());
    }

    #[test]
    fn test_configuration_id_parse() {
        let id = ConfigurationId::new();
        assert_eq!(id.to_string().parse::<ConfigurationId>().unwrap(), id);
        assert!(matches!(
            "not-a-uuid".parse::<ConfigurationId>(),
            Err(ValidationError::InvalidId(_))
        ));
    }
}
