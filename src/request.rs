//! Request Boundary
//!
//! Wire shape of a fit request and the only hard validation in the system:
//! measurements must be finite and strictly positive. Everything else is
//! handled downstream as soft penalties.

use serde::Deserialize;
use thiserror::Error;

use crate::profile::RiderProfile;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be greater than 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Body of `POST /fit`
#[derive(Debug, Clone, Deserialize)]
pub struct FitRequest {
    pub height_in: f64,
    pub inseam_in: f64,
    pub riding_style: String,
    pub flexibility: String,
    #[serde(default)]
    pub pain_points: Vec<String>,
}

impl FitRequest {
    /// Check measurements and parse free-form fields into a profile
    pub fn into_profile(self) -> Result<RiderProfile, ValidationError> {
        check_measurement("height_in", self.height_in)?;
        check_measurement("inseam_in", self.inseam_in)?;

        Ok(RiderProfile::from_input(
            self.height_in,
            self.inseam_in,
            &self.riding_style,
            &self.flexibility,
            self.pain_points.as_slice(),
        ))
    }
}

fn check_measurement(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}
