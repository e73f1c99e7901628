//! RAN configuration parameters and inbound request validation.

use serde::{Deserialize, Serialize};

use crate::{DuplexMode, Result, ValidationError};

/// Raw configuration request as received from a client.
///
/// Every field is optional so that an absent field surfaces as
/// [`ValidationError::MissingField`] instead of a generic decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRequest {
    /// Carrier frequency in hertz.
    pub frequency: Option<f64>,
    /// Channel bandwidth in hertz.
    pub bandwidth: Option<f64>,
    /// Duplex mode spelling, `"TDD"` or `"FDD"`.
    pub duplex_mode: Option<String>,
    /// Transmit power in dBm.
    pub transmit_power: Option<f64>,
}

impl ConfigurationRequest {
    /// Validates the request, producing the parameter tuple the estimator accepts.
    ///
    /// Fields are checked for presence first, in declaration order, then for
    /// range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<RanParameters> {
        let frequency = self.frequency.ok_or(ValidationError::MissingField("frequency"))?;
        let bandwidth = self.bandwidth.ok_or(ValidationError::MissingField("bandwidth"))?;
        let duplex_mode = self
            .duplex_mode
            .as_deref()
            .ok_or(ValidationError::MissingField("duplexMode"))?;
        let transmit_power = self
            .transmit_power
            .ok_or(ValidationError::MissingField("transmitPower"))?;

        RanParameters::new(frequency, bandwidth, duplex_mode.parse()?, transmit_power)
    }
}

impl From<RanParameters> for ConfigurationRequest {
    fn from(params: RanParameters) -> Self {
        Self {
            frequency: Some(params.frequency_hz),
            bandwidth: Some(params.bandwidth_hz),
            duplex_mode: Some(params.duplex_mode.as_str().to_string()),
            transmit_power: Some(params.transmit_power_dbm),
        }
    }
}

/// A validated RAN configuration tuple.
///
/// Frequency and bandwidth are finite and strictly positive; transmit power is
/// finite. Deserialization goes through [`ConfigurationRequest::validate`], so
/// an invalid document never produces a value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigurationRequest")]
pub struct RanParameters {
    #[serde(rename = "frequency")]
    frequency_hz: f64,
    #[serde(rename = "bandwidth")]
    bandwidth_hz: f64,
    #[serde(rename = "duplexMode")]
    duplex_mode: DuplexMode,
    #[serde(rename = "transmitPower")]
    transmit_power_dbm: f64,
}

impl RanParameters {
    /// Creates a validated parameter tuple.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite, or if frequency or
    /// bandwidth is not strictly positive.
    pub fn new(
        frequency_hz: f64,
        bandwidth_hz: f64,
        duplex_mode: DuplexMode,
        transmit_power_dbm: f64,
    ) -> Result<Self> {
        check_positive("frequency", frequency_hz)?;
        check_positive("bandwidth", bandwidth_hz)?;
        check_finite("transmitPower", transmit_power_dbm)?;

        Ok(Self {
            frequency_hz,
            bandwidth_hz,
            duplex_mode,
            transmit_power_dbm,
        })
    }

    /// Returns the carrier frequency in hertz.
    #[must_use]
    pub const fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Returns the carrier frequency in gigahertz.
    #[must_use]
    pub fn frequency_ghz(&self) -> f64 {
        self.frequency_hz / 1e9
    }

    /// Returns the channel bandwidth in hertz.
    #[must_use]
    pub const fn bandwidth_hz(&self) -> f64 {
        self.bandwidth_hz
    }

    /// Returns the channel bandwidth in megahertz.
    #[must_use]
    pub fn bandwidth_mhz(&self) -> f64 {
        self.bandwidth_hz / 1e6
    }

    /// Returns the duplex mode.
    #[must_use]
    pub const fn duplex_mode(&self) -> DuplexMode {
        self.duplex_mode
    }

    /// Returns the transmit power in dBm.
    #[must_use]
    pub const fn transmit_power_dbm(&self) -> f64 {
        self.transmit_power_dbm
    }

    /// Returns the transmit power in milliwatts.
    #[must_use]
    pub fn transmit_power_mw(&self) -> f64 {
        10f64.powf(self.transmit_power_dbm / 10.0)
    }
}

impl TryFrom<ConfigurationRequest> for RanParameters {
    type Error = ValidationError;

    fn try_from(request: ConfigurationRequest) -> Result<Self> {
        request.validate()
    }
}

impl std::fmt::Display for RanParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} GHz / {:.1} MHz / {} / {} dBm",
            self.frequency_ghz(),
            self.bandwidth_mhz(),
            self.duplex_mode,
            self.transmit_power_dbm
        )
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> ConfigurationRequest {
        ConfigurationRequest {
            frequency: Some(3.5e9),
            bandwidth: Some(20e6),
            duplex_mode: Some("TDD".to_string()),
            transmit_power: Some(20.0),
        }
    }

    #[test]
    fn test_validate_full_request() {
        let params = full_request().validate().unwrap();
        assert_eq!(params.frequency_hz(), 3.5e9);
        assert_eq!(params.bandwidth_hz(), 20e6);
        assert_eq!(params.duplex_mode(), DuplexMode::Tdd);
        assert_eq!(params.transmit_power_dbm(), 20.0);
    }

    #[test]
    fn test_missing_transmit_power() {
        let request = ConfigurationRequest {
            transmit_power: None,
            ..full_request()
        };
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingField("transmitPower"))
        );
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let request = ConfigurationRequest::default();
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingField("frequency"))
        );
    }

    #[test]
    fn test_invalid_duplex_mode() {
        let request = ConfigurationRequest {
            duplex_mode: Some("half".to_string()),
            ..full_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ValidationError::InvalidDuplexMode(_))
        ));
    }

    #[test]
    fn test_non_positive_bandwidth() {
        let request = ConfigurationRequest {
            bandwidth: Some(0.0),
            ..full_request()
        };
        assert!(matches!(
            request.validate(),
            Err(ValidationError::NonPositive {
                field: "bandwidth",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_transmit_power_allowed() {
        let params = RanParameters::new(28e9, 100e6, DuplexMode::Fdd, -10.0).unwrap();
        assert_eq!(params.transmit_power_dbm(), -10.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            RanParameters::new(f64::NAN, 20e6, DuplexMode::Tdd, 20.0),
            Err(ValidationError::NonFinite { .. })
        ));
        assert!(matches!(
            RanParameters::new(3.5e9, 20e6, DuplexMode::Tdd, f64::INFINITY),
            Err(ValidationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_unit_conversions() {
        let params = full_request().validate().unwrap();
        assert!((params.frequency_ghz() - 3.5).abs() < 1e-12);
        assert!((params.bandwidth_mhz() - 20.0).abs() < 1e-12);
        assert!((params.transmit_power_mw() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"frequency":3.5e9,"bandwidth":20e6,"duplexMode":"FDD","transmitPower":23}"#;
        let params: RanParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.duplex_mode(), DuplexMode::Fdd);

        let missing = r#"{"frequency":3.5e9,"bandwidth":20e6,"duplexMode":"FDD"}"#;
        let err = serde_json::from_str::<RanParameters>(missing).unwrap_err();
        assert!(err.to_string().contains("transmitPower"));
    }

    #[test]
    fn test_serialize_wire_names() {
        let params = full_request().validate().unwrap();
        let value = serde_json::to_value(params).unwrap();
        assert_eq!(value["duplexMode"], "TDD");
        assert_eq!(value["transmitPower"], 20.0);
        assert_eq!(value["frequency"], 3.5e9);
    }
}
