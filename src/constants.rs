//! # Constants and type definitions for Terraframe
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used by the ECI → ECEF transformation pipeline.
//!
//! ## Overview
//!
//! - Earth rotation and time-scale constants
//! - Julian Date reference values (J2000.0)
//! - Core type aliases used across the crate
//!
//! These definitions are used by the time conversion chain ([`crate::time`]) and the
//! frame rotation layer ([`crate::ref_system`]).

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub const T2000_JD: f64 = 2_451_545.0;

/// Mean Earth angular velocity in radians per second
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Julian Date (days, day boundary at noon UTC)
pub type JulianDate = f64;
