use crate::config::{
    MAX_DURATION_SEC, MAX_RESISTANCE, MAX_RPM, MAX_WEIGHT_KG, MIN_BATTERY_CAPACITY_WH,
    MIN_DURATION_SEC, MIN_RESISTANCE, MIN_RPM, MIN_WEIGHT_KG,
};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for duration parsing
static DURATION_SEC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*s$").unwrap());
static DURATION_MIN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*m$").unwrap());
static DURATION_MIN_SEC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)m\s*(\d+)s$").unwrap());
static DURATION_COLON_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d{1,2})$").unwrap());
static DURATION_HOUR_COLON_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+):(\d{1,2}):(\d{1,2})$").unwrap());

/// Input validation error types for the form fields.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Empty(&'static str),
    NotANumber(&'static str),
    NonFinite(&'static str),
    BelowMin { field: &'static str, min: String },
    AboveMax { field: &'static str, max: String },
    InvalidDuration(String),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty(field) => write!(f, "{} cannot be empty", field),
            InputError::NotANumber(field) => write!(f, "{} must be a valid number", field),
            InputError::NonFinite(field) => write!(f, "{} must be a finite number", field),
            InputError::BelowMin { field, min } => write!(f, "{} must be at least {}", field, min),
            InputError::AboveMax { field, max } => write!(f, "{} cannot exceed {}", field, max),
            InputError::InvalidDuration(hint) => write!(f, "Invalid duration format. {}", hint),
        }
    }
}

impl std::error::Error for InputError {}

/// Generic numeric input validation
pub fn validate_numeric_input<T>(
    input: &str,
    min: Option<T>,
    max: Option<T>,
    field_name: &'static str,
) -> Result<T, InputError>
where
    T: std::str::FromStr + std::fmt::Display + PartialOrd,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty(field_name));
    }

    let val = trimmed
        .parse::<T>()
        .map_err(|_| InputError::NotANumber(field_name))?;
    check_range(val, min, max, field_name)
}

fn check_range<T>(
    val: T,
    min: Option<T>,
    max: Option<T>,
    field_name: &'static str,
) -> Result<T, InputError>
where
    T: std::fmt::Display + PartialOrd,
{
    if let Some(min_val) = min {
        if val < min_val {
            return Err(InputError::BelowMin {
                field: field_name,
                min: min_val.to_string(),
            });
        }
    }
    if let Some(max_val) = max {
        if val > max_val {
            return Err(InputError::AboveMax {
                field: field_name,
                max: max_val.to_string(),
            });
        }
    }
    Ok(val)
}

/// Floating point variant of [`validate_numeric_input`] that also rejects
/// `inf` and `NaN`, which `f64::from_str` happily accepts.
pub fn validate_finite_input(
    input: &str,
    min: Option<f64>,
    max: Option<f64>,
    field_name: &'static str,
) -> Result<f64, InputError> {
    let val = validate_numeric_input::<f64>(input, None, None, field_name)?;
    ensure_finite(val, field_name)?;
    check_range(val, min, max, field_name)
}

pub(crate) fn ensure_finite(val: f64, field_name: &'static str) -> Result<f64, InputError> {
    if val.is_finite() {
        Ok(val)
    } else {
        Err(InputError::NonFinite(field_name))
    }
}

/// Validate pedal cadence input
pub fn validate_rpm(input: &str) -> Result<f64, InputError> {
    validate_finite_input(input, Some(MIN_RPM), Some(MAX_RPM), "Pedal cadence")
}

/// Validate rider weight input
pub fn validate_weight(input: &str) -> Result<f64, InputError> {
    validate_finite_input(input, Some(MIN_WEIGHT_KG), Some(MAX_WEIGHT_KG), "Weight")
}

/// Validate resistance level input
pub fn validate_resistance(input: &str) -> Result<u8, InputError> {
    validate_numeric_input(input, Some(MIN_RESISTANCE), Some(MAX_RESISTANCE), "Resistance")
}

/// Validate battery capacity input
pub fn validate_battery_capacity(input: &str) -> Result<f64, InputError> {
    validate_finite_input(input, Some(MIN_BATTERY_CAPACITY_WH), None, "Battery capacity")
}

/// Validate duration input in any format accepted by [`parse_duration_to_sec`].
pub fn validate_duration(input: &str) -> Result<f64, InputError> {
    let secs = parse_duration_to_sec(input)?;
    check_range(secs, Some(MIN_DURATION_SEC), Some(MAX_DURATION_SEC), "Duration")
}

/// Parse a duration string in various formats to seconds.
///
/// Supported formats:
/// - Pure number: "600" or "600.5" (interpreted as seconds)
/// - Seconds only: "90s"
/// - Minutes only: "10m"
/// - Minutes and seconds: "10m 30s" or "10m30s"
/// - Colon format: "10:30" (minutes:seconds)
/// - Hours, minutes and seconds: "1:02:03"
///
/// # Examples
/// ```
/// use pedal_generator::utils::parse_duration_to_sec;
/// assert_eq!(parse_duration_to_sec("10:00"), Ok(600.0));
/// assert_eq!(parse_duration_to_sec("10m"), Ok(600.0));
/// assert_eq!(parse_duration_to_sec("600s"), Ok(600.0));
/// assert_eq!(parse_duration_to_sec("600"), Ok(600.0));
/// ```
pub fn parse_duration_to_sec(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty("Duration"));
    }

    if let Ok(secs) = trimmed.parse::<f64>() {
        return ensure_finite(secs, "Duration");
    }

    if let Some(captures) = DURATION_SEC_REGEX.captures(trimmed) {
        return parse_component(&captures[1]);
    }

    if let Some(captures) = DURATION_MIN_REGEX.captures(trimmed) {
        return Ok(parse_component(&captures[1])? * 60.0);
    }

    if let Some(captures) = DURATION_MIN_SEC_REGEX.captures(trimmed) {
        let minutes = parse_component(&captures[1])?;
        let seconds = parse_sixtieths(&captures[2])?;
        return Ok(minutes * 60.0 + seconds);
    }

    if let Some(captures) = DURATION_COLON_REGEX.captures(trimmed) {
        let minutes = parse_component(&captures[1])?;
        let seconds = parse_sixtieths(&captures[2])?;
        return Ok(minutes * 60.0 + seconds);
    }

    if let Some(captures) = DURATION_HOUR_COLON_REGEX.captures(trimmed) {
        let hours = parse_component(&captures[1])?;
        let minutes = parse_sixtieths(&captures[2])?;
        let seconds = parse_sixtieths(&captures[3])?;
        return Ok(hours * 3600.0 + minutes * 60.0 + seconds);
    }

    Err(InputError::InvalidDuration(
        "Use: 600, 90s, 10m, 10m 30s, 10:30 or 1:02:03".to_string(),
    ))
}

fn parse_component(digits: &str) -> Result<f64, InputError> {
    digits
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| InputError::InvalidDuration(format!("'{}' is too large", digits)))
}

/// Parse a minutes or seconds component that must stay below 60.
fn parse_sixtieths(digits: &str) -> Result<f64, InputError> {
    let value = parse_component(digits)?;
    if value > 59.0 {
        return Err(InputError::InvalidDuration(format!(
            "{} must be 0-59",
            digits
        )));
    }
    Ok(value)
}

/// Round a displayed value to two decimals, the precision of the animated counters.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a number with a fixed count of decimals.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_accepts_all_documented_forms() {
        assert_eq!(parse_duration_to_sec("600"), Ok(600.0));
        assert_eq!(parse_duration_to_sec(" 600.5 "), Ok(600.5));
        assert_eq!(parse_duration_to_sec("90s"), Ok(90.0));
        assert_eq!(parse_duration_to_sec("10m"), Ok(600.0));
        assert_eq!(parse_duration_to_sec("10m 30s"), Ok(630.0));
        assert_eq!(parse_duration_to_sec("10m30s"), Ok(630.0));
        assert_eq!(parse_duration_to_sec("10:30"), Ok(630.0));
        assert_eq!(parse_duration_to_sec("1:02:03"), Ok(3723.0));
    }

    #[test]
    fn duration_rejects_out_of_range_components() {
        assert!(matches!(
            parse_duration_to_sec("10:75"),
            Err(InputError::InvalidDuration(_))
        ));
        assert!(matches!(
            parse_duration_to_sec("1:60:00"),
            Err(InputError::InvalidDuration(_))
        ));
        assert!(matches!(
            parse_duration_to_sec("2m 61s"),
            Err(InputError::InvalidDuration(_))
        ));
    }

    #[test]
    fn duration_rejects_garbage_and_empty() {
        assert_eq!(parse_duration_to_sec("   "), Err(InputError::Empty("Duration")));
        assert!(matches!(
            parse_duration_to_sec("ten minutes"),
            Err(InputError::InvalidDuration(_))
        ));
        assert_eq!(
            parse_duration_to_sec("inf"),
            Err(InputError::NonFinite("Duration"))
        );
    }

    #[test]
    fn validate_duration_enforces_minimum() {
        assert_eq!(validate_duration("0:01"), Ok(1.0));
        assert_eq!(
            validate_duration("0"),
            Err(InputError::BelowMin {
                field: "Duration",
                min: "1".to_string()
            })
        );
    }

    #[test]
    fn validate_duration_enforces_maximum() {
        assert_eq!(validate_duration("168:00:00"), Ok(MAX_DURATION_SEC));
        assert_eq!(
            validate_duration("1e306"),
            Err(InputError::AboveMax {
                field: "Duration",
                max: "604800".to_string()
            })
        );
        assert!(matches!(
            validate_duration("168:00:01"),
            Err(InputError::AboveMax { .. })
        ));
    }

    #[test]
    fn rpm_bounds() {
        assert_eq!(validate_rpm("1"), Ok(1.0));
        assert_eq!(validate_rpm("200"), Ok(200.0));
        assert!(matches!(validate_rpm("0.5"), Err(InputError::BelowMin { .. })));
        assert!(matches!(validate_rpm("201"), Err(InputError::AboveMax { .. })));
        assert_eq!(validate_rpm("NaN"), Err(InputError::NonFinite("Pedal cadence")));
    }

    #[test]
    fn weight_and_capacity_bounds() {
        assert_eq!(validate_weight("75"), Ok(75.0));
        assert!(matches!(validate_weight("29.9"), Err(InputError::BelowMin { .. })));
        assert!(matches!(validate_weight("250"), Err(InputError::AboveMax { .. })));
        assert_eq!(validate_battery_capacity("5000"), Ok(5000.0));
        assert!(matches!(
            validate_battery_capacity("0"),
            Err(InputError::BelowMin { .. })
        ));
    }

    #[test]
    fn resistance_is_an_integer_level() {
        assert_eq!(validate_resistance("10"), Ok(10));
        assert_eq!(validate_resistance("2.5"), Err(InputError::NotANumber("Resistance")));
        assert!(matches!(validate_resistance("0"), Err(InputError::BelowMin { .. })));
        assert!(matches!(validate_resistance("11"), Err(InputError::AboveMax { .. })));
    }

    #[test]
    fn error_messages_read_naturally() {
        let err = validate_weight("300").unwrap_err();
        assert_eq!(err.to_string(), "Weight cannot exceed 200");
        let err = validate_rpm("").unwrap_err();
        assert_eq!(err.to_string(), "Pedal cadence cannot be empty");
    }

    #[test]
    fn display_rounding() {
        assert_eq!(round_to_hundredths(23.038346), 23.04);
        assert_eq!(format_fixed(46.0767, 1), "46.1");
        assert_eq!(format_fixed(82938.046, 0), "82938");
    }
}
