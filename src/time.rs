use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    JulianDate, Radian, DAYS_PER_JULIAN_CENTURY, EARTH_ROTATION_RATE, SECONDS_PER_DAY, T2000_JD,
};
use crate::terraframe_errors::TerraframeError;

/// A UTC calendar timestamp.
///
/// Fields are deliberately unvalidated signed integers: the Julian Date formula below is a
/// total function, and out-of-range fields (month 13, day 0, …) flow through the arithmetic
/// and yield a numeric result. Rejecting malformed calendars is the job of the input
/// layer ([`crate::conversion`]), not of this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcEpoch {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: f64,
}

impl UtcEpoch {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> Self {
        UtcEpoch {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse an ISO-8601 timestamp (e.g. `2054-04-29T11:29:03.3`) into a [`UtcEpoch`].
    ///
    /// Argument
    /// --------
    /// * `date`: a date string in the format YYYY-MM-ddTHH:mm:ss[.fff]
    ///
    /// Return
    /// ------
    /// * the corresponding calendar epoch, or [`TerraframeError::InvalidDateFormat`]
    pub fn from_iso(date: &str) -> Result<Self, TerraframeError> {
        let epoch = hifitime::Epoch::from_str(date)
            .map_err(|e| TerraframeError::InvalidDateFormat(format!("{date}: {e}")))?;
        let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
        Ok(UtcEpoch {
            year,
            month: month as i32,
            day: day as i32,
            hour: hour as i32,
            minute: minute as i32,
            second: second as f64 + nanos as f64 * 1e-9,
        })
    }

    /// Fractional Julian Date of this epoch. See [`calendar_to_jd`].
    pub fn jd(&self) -> JulianDate {
        calendar_to_jd(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Julian centuries elapsed since J2000.0. See [`jd_to_centuries`].
    pub fn centuries(&self) -> f64 {
        jd_to_centuries(self.jd())
    }

    /// Greenwich Mean Sidereal Time angle at this epoch, in radians. See [`gmst_rad`].
    pub fn gmst_rad(&self) -> Radian {
        gmst_rad(self.centuries())
    }
}

/// Convert a UTC calendar timestamp to a fractional Julian Date.
///
/// Uses the Fliegel–Van Flandern integer formula for the Julian Day number, shifted back
/// half a day to midnight, plus the elapsed fraction of the day. Every division in the
/// integer part truncates, which is what makes the formula work across month and year
/// boundaries.
///
/// Arguments
/// ---------
/// * `year`, `month`, `day`: calendar date (month 1–12, day 1–31 for real dates)
/// * `hour`, `minute`, `second`: time of day, fractional seconds allowed
///
/// Return
/// ------
/// * the fractional Julian Date (day boundary at noon UTC)
///
/// Remarks
/// -------
/// * Total function: no calendar validation is performed. Degenerate fields produce a
///   numeric result through the same arithmetic (month 13 of a year lands on month 1
///   of the next).
pub fn calendar_to_jd(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: f64,
) -> JulianDate {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;

    let jd_integer = d - 32075
        + 1461 * (y + 4800 + (m - 14) / 12) / 4
        + 367 * (m - 2 - (m - 14) / 12 * 12) / 12
        - 3 * ((y + 4900 + (m - 14) / 12) / 100) / 4;

    let jd_midnight = jd_integer as f64 - 0.5;
    let day_fraction =
        (second + (60 * (minute as i64 + 60 * hour as i64)) as f64) / SECONDS_PER_DAY;

    jd_midnight + day_fraction
}

/// Julian centuries elapsed since J2000.0 (JD 2451545.0) for a fractional Julian Date.
pub fn jd_to_centuries(jd: JulianDate) -> f64 {
    (jd - T2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Compute the Greenwich Mean Sidereal Time (GMST) angle in radians
/// for a given time in Julian centuries since J2000.0 (UT1 ≈ UTC here).
///
/// # Arguments
/// * `t_ut1` - Julian centuries since J2000.0
///
/// # Returns
/// * GMST angle in radians.
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Evaluate the cubic polynomial (coefficients C0–C3) giving GMST in seconds.
/// 2. Wrap the seconds value into `[0, 86400)` and convert to radians by the mean
///    Earth rotation rate.
///
/// The wrap is applied to the *seconds* value before the radian conversion, so the
/// result lies in `[0, 86400 × 7.292115e-5) ≈ [0, 6.2998)` — slightly more than 2π.
/// Legacy ground-track tools built on this formula chain depend on that exact wrap
/// order, so it is kept as-is; use [`gmst_rad_normalized`] for an angle reduced to
/// `[0, 2π)`.
///
/// The wrap uses `rem_euclid`, so epochs far before J2000.0 (negative polynomial
/// value) still map to a non-negative angle.
///
/// # References
/// * Vallado, Fundamentals of Astrodynamics and Applications, GMST 1982 polynomial.
pub fn gmst_rad(t_ut1: f64) -> Radian {
    // Polynomial coefficients for GMST (in seconds)
    const C0: f64 = 67310.54841;
    const C1: f64 = 876600.0 * 3600.0 + 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    let gmst_seconds = C0 + C1 * t_ut1 + C2 * (t_ut1 * t_ut1) + C3 * (t_ut1 * t_ut1 * t_ut1);

    gmst_seconds.rem_euclid(SECONDS_PER_DAY) * EARTH_ROTATION_RATE
}

/// [`gmst_rad`] reduced to the `[0, 2π)` range.
///
/// Separate entry point on purpose: the transformation pipeline calls [`gmst_rad`]
/// unchanged, and callers that need a strictly normalized sidereal angle opt in here.
pub fn gmst_rad_normalized(t_ut1: f64) -> Radian {
    gmst_rad(t_ut1).rem_euclid(crate::constants::DPI)
}
