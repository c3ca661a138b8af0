use std::time::Duration;

pub const PATH_DELIMITER: char = '.';

pub fn config_path(scope: &str, key: &str) -> String {
    format!("{scope}{PATH_DELIMITER}{key}")
}

/// Keys are matched case-insensitively, `primary.dataSource` and
/// `primary.datasource` address the same value.
pub fn normalize_path(path: &str) -> String {
    path.to_lowercase()
}

pub fn env_var_name(prefix: &str, path: &str) -> String {
    format!("{}_{}", prefix, path.replace(PATH_DELIMITER, "_")).to_uppercase()
}

pub fn parse_bool(input: &str) -> Option<bool> {
    match input.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parses `500ms`, `30s`, `1m30s`, `2h` (and `ns`, `us`). A bare number is
/// taken as seconds.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(seconds) = input.parse::<f64>() {
        return scaled_duration(seconds, 1_000_000_000.0);
    }

    let mut total = Duration::ZERO;
    let mut rest = input;
    while !rest.is_empty() {
        let number_end = rest.find(|c: char| !(c.is_ascii_digit() || c == '.'))?;
        if number_end == 0 {
            return None;
        }
        let value = rest[..number_end].parse::<f64>().ok()?;
        let unit = &rest[number_end..];
        let unit_end = unit
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(unit.len());
        let nanos_per_unit = match &unit[..unit_end] {
            "ns" => 1.0,
            "us" | "µs" => 1_000.0,
            "ms" => 1_000_000.0,
            "s" => 1_000_000_000.0,
            "m" => 60_000_000_000.0,
            "h" => 3_600_000_000_000.0,
            _ => return None,
        };
        total = total.checked_add(scaled_duration(value, nanos_per_unit)?)?;
        rest = &unit[unit_end..];
    }
    Some(total)
}

fn scaled_duration(value: f64, nanos_per_unit: f64) -> Option<Duration> {
    let nanos = (value * nanos_per_unit).round();
    if !nanos.is_finite() || nanos < 0.0 || nanos > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(nanos as u64))
}

pub fn format_duration(duration: Duration) -> String {
    if duration.subsec_nanos() == 0 {
        format!("{}s", duration.as_secs())
    } else if duration.subsec_nanos() % 1_000_000 == 0 {
        format!("{}ms", duration.as_millis())
    } else {
        format!("{}ns", duration.as_nanos())
    }
}
