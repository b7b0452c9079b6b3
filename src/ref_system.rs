use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{Kilometer, Radian};
use crate::time::UtcEpoch;

/// Rotation matrix around the polar (Z) axis.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians (right-handed convention)
///
/// Return
/// ------
/// * the 3×3 rotation matrix for `alpha`
pub fn rotz(alpha: Radian) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), alpha).into()
}

/// Rotate an ECI position vector into the ECEF frame for a given sidereal angle.
///
/// The Earth-fixed frame leads the inertial frame by the GMST angle, so the *frame*
/// rotation uses `-gmst`: substituting `-θ` into the standard Z-rotation gives
///
/// ```text
/// ecef = [[ cos θ, sin θ, 0],
///         [-sin θ, cos θ, 0],
///         [     0,     0, 1]] · eci
/// ```
///
/// Arguments
/// ---------
/// * `gmst`: Greenwich Mean Sidereal Time angle in radians (see [`crate::time::gmst_rad`])
/// * `eci`: position vector in the ECI frame, in kilometers
///
/// Return
/// ------
/// * a new position vector in the ECEF frame, in kilometers
pub fn eci_to_ecef(gmst: Radian, eci: &Vector3<Kilometer>) -> Vector3<Kilometer> {
    rotz(-gmst) * eci
}

/// Full ECI → ECEF pipeline at a UTC calendar epoch.
///
/// Chains calendar → Julian Date → Julian centuries → GMST → Z rotation. Pure function
/// of its inputs: no internal state, identical inputs give bit-identical outputs.
pub fn eci_to_ecef_at_epoch(epoch: &UtcEpoch, eci: &Vector3<Kilometer>) -> Vector3<Kilometer> {
    eci_to_ecef(epoch.gmst_rad(), eci)
}
