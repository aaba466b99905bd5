//! Fit Report
//!
//! Prints the JSON fit report for one rider without starting the server.
//!
//! Run with: cargo run --bin fit_report -- <height_in> <inseam_in> <style> <flexibility> [pain_point...]
//! Example:  cargo run --bin fit_report -- 74 35 endurance medium knee_front

use anyhow::{bail, Context, Result};
use bike_fit_advisor::{advise, FitRequest};

const USAGE: &str = "usage: fit_report <height_in> <inseam_in> <style> <flexibility> [pain_point...]";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        bail!(USAGE);
    }

    let height_in: f64 = args[0]
        .parse()
        .with_context(|| format!("height_in '{}' is not a number", args[0]))?;
    let inseam_in: f64 = args[1]
        .parse()
        .with_context(|| format!("inseam_in '{}' is not a number", args[1]))?;

    let request = FitRequest {
        height_in,
        inseam_in,
        riding_style: args[2].clone(),
        flexibility: args[3].clone(),
        pain_points: args[4..].to_vec(),
    };

    let profile = request.into_profile()?;
    let report = advise(&profile);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
