//! Convert an ECI position to ECEF from the command line.
//!
//! ```text
//! cargo run --example eci_to_ecef -- 2054 4 29 11 29 3.3 5870.038832 3389.068500 3838.027968
//! ```
//!
//! Prints each ECEF coordinate (km) on its own line.

use std::env;
use std::process::ExitCode;

use terraframe::conversion::parse_conversion_args;
use terraframe::eci_to_ecef_at_epoch;

const USAGE: &str =
    "Usage: eci_to_ecef year month day hour minute second eci_x_km eci_y_km eci_z_km";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let (epoch, eci) = match parse_conversion_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let ecef = eci_to_ecef_at_epoch(&epoch, &eci);
    println!("{}", ecef.x);
    println!("{}", ecef.y);
    println!("{}", ecef.z);

    ExitCode::SUCCESS
}
