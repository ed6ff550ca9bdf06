use crate::utils::error::{QuakeError, Result};
use crate::utils::validation::validate_service;
use url::Url;

pub const WFS_PATH: &str = "geonet/ows";
pub const FEATURE_TYPE: &str = "geonet:quake_search_v1";

/// Joins predicates in the rendered `cql_filter` value.
pub const CQL_CONJUNCTION: &str = "+AND+";

/// Builds a WFS `GetFeature` request for the quake search layer.
///
/// Predicates are stored pre-encoded (for example `magnitude+>=+3`) and are
/// emitted verbatim as a single `cql_filter` conjunction.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    service: String,
    limit: usize,
    filters: Vec<String>,
    base: Url,
}

impl QueryBuilder {
    pub fn new(service: impl Into<String>, limit: usize) -> Result<Self> {
        let service = service.into();
        validate_service("service", &service)?;

        let base = Url::parse(&format!("http://{}/{}", service, WFS_PATH)).map_err(|e| {
            QuakeError::InvalidConfigValueError {
                field: "service".to_string(),
                value: service.clone(),
                reason: format!("Invalid service address: {}", e),
            }
        })?;

        Ok(Self {
            service,
            limit,
            filters: Vec::new(),
            base,
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn add_filter(&mut self, predicate: impl Into<String>) {
        self.filters.push(predicate.into());
    }

    /// The CQL expression sent with the request, if any filters were added.
    pub fn cql_filter(&self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.join(CQL_CONJUNCTION))
        }
    }

    pub fn render_url(&self) -> Url {
        let mut url = self.base.clone();

        {
            // Key order matches a sorted form encoding.
            let mut pairs = url.query_pairs_mut();
            if self.limit > 0 {
                pairs.append_pair("maxFeatures", &self.limit.to_string());
            }
            pairs
                .append_pair("outputFormat", "json")
                .append_pair("request", "GetFeature")
                .append_pair("service", "WFS")
                .append_pair("typeName", FEATURE_TYPE)
                .append_pair("version", "1.0.0");
        }

        // Appended raw so the pre-encoded `+` separators survive.
        if let Some(cql) = self.cql_filter() {
            let query = format!("{}&cql_filter={}", url.query().unwrap_or_default(), cql);
            url.set_query(Some(&query));
        }

        url
    }
}
