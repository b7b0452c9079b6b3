use nalgebra::Vector3;

use crate::constants::Kilometer;
use crate::terraframe_errors::TerraframeError;
use crate::time::UtcEpoch;

/// Parse one integer calendar field, reporting the field name on failure.
fn parse_int_field(field: &'static str, value: &str) -> Result<i32, TerraframeError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| TerraframeError::InvalidField {
            field,
            value: value.to_string(),
        })
}

/// Parse one real-valued field, reporting the field name on failure.
fn parse_float_field(field: &'static str, value: &str) -> Result<f64, TerraframeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| TerraframeError::InvalidField {
            field,
            value: value.to_string(),
        })
}

/// Parse the nine positional conversion fields into a typed epoch and ECI vector.
///
/// Arguments
/// ---------
/// * `args`: exactly nine string fields, in order:
///   `year month day hour minute second eci_x_km eci_y_km eci_z_km`
///
/// Return
/// ------
/// * `Ok((UtcEpoch, Vector3))` with the vector in kilometers
/// * `Err(TerraframeError)` on wrong arity or a field that does not parse
///
/// Remarks
/// -------
/// * Only *syntactic* validation happens here: a field that parses as a number is
///   accepted even if astronomically nonsensical (month 13), matching the total-function
///   contract of the pipeline.
pub fn parse_conversion_args(
    args: &[String],
) -> Result<(UtcEpoch, Vector3<Kilometer>), TerraframeError> {
    if args.len() != 9 {
        return Err(TerraframeError::WrongArgumentCount {
            expected: 9,
            got: args.len(),
        });
    }

    let epoch = UtcEpoch::new(
        parse_int_field("year", &args[0])?,
        parse_int_field("month", &args[1])?,
        parse_int_field("day", &args[2])?,
        parse_int_field("hour", &args[3])?,
        parse_int_field("minute", &args[4])?,
        parse_float_field("second", &args[5])?,
    );

    let eci = Vector3::new(
        parse_float_field("eci_x_km", &args[6])?,
        parse_float_field("eci_y_km", &args[7])?,
        parse_float_field("eci_z_km", &args[8])?,
    );

    Ok((epoch, eci))
}

#[cfg(test)]
mod conversion_test {
    use super::*;

    fn args(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_conversion_args() {
        let (epoch, eci) = parse_conversion_args(&args(&[
            "2054",
            "4",
            "29",
            "11",
            "29",
            "3.3",
            "5870.038832",
            "3389.068500",
            "3838.027968",
        ]))
        .unwrap();

        assert_eq!(epoch, UtcEpoch::new(2054, 4, 29, 11, 29, 3.3));
        assert_eq!(eci, Vector3::new(5870.038832, 3389.0685, 3838.027968));
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            parse_conversion_args(&args(&["2054", "4", "29"])),
            Err(TerraframeError::WrongArgumentCount {
                expected: 9,
                got: 3
            })
        );
    }

    #[test]
    fn test_bad_field_reports_name() {
        let err = parse_conversion_args(&args(&[
            "2054", "avril", "29", "11", "29", "3.3", "1.0", "2.0", "3.0",
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            TerraframeError::InvalidField {
                field: "month",
                value: "avril".to_string()
            }
        );

        // Integer calendar fields reject fractional values
        let err = parse_conversion_args(&args(&[
            "2054", "4", "29", "11", "29.5", "3.3", "1.0", "2.0", "3.0",
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            TerraframeError::InvalidField {
                field: "minute",
                value: "29.5".to_string()
            }
        );
    }
}
