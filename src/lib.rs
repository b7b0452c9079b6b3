//! Convert Earth-Centered Inertial (ECI) position vectors to Earth-Centered Earth-Fixed
//! (ECEF) at a UTC epoch.
//!
//! The transformation chains four stages: calendar → Julian Date, Julian Date → Julian
//! centuries since J2000.0, centuries → Greenwich Mean Sidereal Time angle, and a rotation
//! about the polar axis by that angle. The model is Earth-rotation-only: no polar motion,
//! precession, nutation, or leap-second handling.
//!
//! ```
//! use nalgebra::Vector3;
//! use terraframe::{eci_to_ecef_at_epoch, UtcEpoch};
//!
//! let epoch = UtcEpoch::new(2054, 4, 29, 11, 29, 3.3);
//! let eci = Vector3::new(5870.038832, 3389.068500, 3838.027968);
//! let ecef = eci_to_ecef_at_epoch(&epoch, &eci);
//! assert!((ecef.x - 6778.137).abs() < 1e-3);
//! ```

pub mod constants;
pub mod conversion;
pub mod ref_system;
pub mod terraframe_errors;
pub mod time;

pub use ref_system::{eci_to_ecef, eci_to_ecef_at_epoch, rotz};
pub use terraframe_errors::TerraframeError;
pub use time::{calendar_to_jd, gmst_rad, gmst_rad_normalized, jd_to_centuries, UtcEpoch};
