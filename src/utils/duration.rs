use crate::utils::error::{QuakeError, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;
use std::time::Duration;

fn segment_regex() -> &'static Regex {
    static SEGMENT: OnceLock<Regex> = OnceLock::new();
    SEGMENT.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d*)?|\.\d+)(ns|us|µs|ms|s|m|h)").expect("duration segment pattern")
    })
}

fn invalid(input: &str, reason: &str) -> QuakeError {
    QuakeError::InvalidConfigValueError {
        field: "duration".to_string(),
        value: input.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses durations such as `30m`, `1h30m`, `1.5h` or `250ms`. A bare `0`
/// is accepted and means no offset.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let text = input.trim();
    if text == "0" {
        return Ok(Duration::ZERO);
    }
    if text.is_empty() {
        return Err(invalid(input, "Duration cannot be empty"));
    }

    let mut consumed = 0;
    let mut nanos = 0f64;
    for caps in segment_regex().captures_iter(text) {
        let (Some(whole), Some(number), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            return Err(invalid(input, "Malformed duration segment"));
        };
        if whole.start() != consumed {
            return Err(invalid(input, "Unexpected characters in duration"));
        }
        consumed = whole.end();

        let value: f64 = number
            .as_str()
            .parse()
            .map_err(|_| invalid(input, "Invalid number in duration"))?;
        let scale = match unit.as_str() {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60.0 * 1e9,
            "h" => 3600.0 * 1e9,
            _ => return Err(invalid(input, "Unknown duration unit")),
        };
        nanos += value * scale;
    }

    if consumed != text.len() {
        return Err(invalid(
            input,
            "Expected a number followed by a unit (ns, us, ms, s, m, h)",
        ));
    }
    if !nanos.is_finite() || nanos > u64::MAX as f64 {
        return Err(invalid(input, "Duration is out of range"));
    }

    Ok(Duration::from_nanos(nanos.round() as u64))
}

/// Serde adapter accepting either a duration string or whole seconds.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Seconds(secs) => Ok(Duration::from_secs(secs)),
        Raw::Text(text) => parse_duration(&text).map_err(serde::de::Error::custom),
    }
}
