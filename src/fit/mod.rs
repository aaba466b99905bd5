//! Fit Estimator
//!
//! Turns rider measurements into a baseline geometry recommendation:
//! - `units`: inch/centimeter conversion and display rounding
//! - `guidance`: fixed advice text keyed by style and flexibility
//! - `estimator`: saddle height, range, confidence and notes

pub mod units;
pub mod guidance;
pub mod estimator;

pub use estimator::{estimate, FitRecommendation, DISCLAIMER};
pub use units::{cm_to_in, in_to_cm, round_to_decimals};
