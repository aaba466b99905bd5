//! Bike Fit Advisor
//!
//! Deterministic bike fit estimation with pain-point guidance.
//!
//! Pipeline:
//! - `profile`: rider inputs parsed into closed enums
//! - `fit/`: saddle height, geometry guidance and confidence
//! - `pain/`: static pain rule table and analysis
//! - `advisor`: runs both and merges them into a `FitReport`
//!
//! The HTTP surface (`api_server`) is behind the `api` feature.

pub mod profile;
pub mod fit;
pub mod pain;
pub mod advisor;
pub mod request;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use profile::{RiderProfile, RidingStyle, Flexibility, PainPoint};
pub use fit::{estimate, FitRecommendation};
pub use pain::{analyze, PainAnalysis, PainInsight, PainRule};
pub use advisor::{advise, FitReport};
pub use request::{FitRequest, ValidationError};
pub use config::{ServerConfig, ConfigError};

#[cfg(feature = "api")]
pub use api_server::{AppState, create_router};
