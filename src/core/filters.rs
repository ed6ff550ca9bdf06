use crate::core::query::QueryBuilder;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{QuakeError, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats `from - offset` in UTC without a zone suffix, to the second.
pub fn time_offset(from: DateTime<Utc>, offset: Duration) -> Result<String> {
    let offset =
        chrono::Duration::from_std(offset).map_err(|e| QuakeError::InvalidConfigValueError {
            field: "duration".to_string(),
            value: format!("{:?}", offset),
            reason: format!("Duration is out of range: {}", e),
        })?;
    let instant = from
        .checked_sub_signed(offset)
        .ok_or_else(|| QuakeError::ConfigError {
            message: format!("Time offset {} reaches before the supported range", offset),
        })?;
    Ok(instant.format(TIMESTAMP_FORMAT).to_string())
}

/// A single pre-encoded CQL comparison.
pub fn predicate(field: &str, operator: &str, value: impl std::fmt::Display) -> String {
    format!("{}+{}+{}", field, operator, value)
}

/// Predicates derived from the configured options, in the order they are sent.
///
/// Zero magnitudes and zero durations mean "no bound" and add nothing.
pub fn search_filters<C: ConfigProvider + ?Sized>(
    config: &C,
    now: DateTime<Utc>,
) -> Result<Vec<String>> {
    let mut filters = vec![
        predicate("eventtype", "=", config.event_type()),
        predicate("evaluationstatus", "=", config.evaluation_status()),
        predicate("evaluationmode", "=", config.evaluation_mode()),
    ];

    if config.min_magnitude() > 0.0 {
        filters.push(predicate("magnitude", ">=", config.min_magnitude()));
    }
    if config.max_magnitude() > 0.0 {
        filters.push(predicate("magnitude", "<=", config.max_magnitude()));
    }

    if !config.since().is_zero() {
        filters.push(predicate(
            "modificationtime",
            ">=",
            time_offset(now, config.since())?,
        ));
    }
    if !config.ago().is_zero() {
        filters.push(predicate(
            "modificationtime",
            "<=",
            time_offset(now, config.ago())?,
        ));
    }

    Ok(filters)
}

/// Builds the request for `config` as of `now`.
pub fn build_query<C: ConfigProvider + ?Sized>(
    config: &C,
    now: DateTime<Utc>,
) -> Result<QueryBuilder> {
    let mut query = QueryBuilder::new(config.service(), config.limit())?;
    for filter in search_filters(config, now)? {
        tracing::debug!("Adding filter: {}", filter);
        query.add_filter(filter);
    }
    Ok(query)
}
