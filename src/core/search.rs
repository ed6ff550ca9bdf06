use crate::core::query::QueryBuilder;
use crate::domain::ports::EventSource;
use crate::utils::error::Result;

pub struct QuakeSearch<S: EventSource> {
    source: S,
}

impl<S: EventSource> QuakeSearch<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Runs `query` once and returns the event ids in service order.
    pub async fn run(&self, query: &QueryBuilder) -> Result<Vec<String>> {
        let url = query.render_url();
        tracing::info!("{}", url);

        let search = self.source.search(&url).await?;
        tracing::debug!("Received {} features", search.features.len());

        let ids = search.public_ids();
        for id in &ids {
            tracing::info!("id: {}", id);
        }
        if ids.len() < search.features.len() {
            tracing::debug!(
                "Skipped {} features without a public id",
                search.features.len() - ids.len()
            );
        }

        Ok(ids)
    }
}

/// The output line for `ids`, or `None` when there is nothing to print.
pub fn format_ids(ids: &[String]) -> Option<String> {
    if ids.is_empty() {
        None
    } else {
        Some(ids.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Feature, Geometry, Properties, Search};
    use crate::utils::error::QuakeError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use url::Url;

    struct MockSource {
        ids: Vec<Option<&'static str>>,
        requested: Arc<Mutex<Vec<Url>>>,
    }

    impl MockSource {
        fn new(ids: Vec<Option<&'static str>>) -> Self {
            Self {
                ids,
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl EventSource for MockSource {
        async fn search(&self, url: &Url) -> Result<Search> {
            self.requested.lock().unwrap().push(url.clone());
            let features = self
                .ids
                .iter()
                .map(|id| Feature {
                    geometry: Geometry {
                        coordinates: [0.0, 0.0],
                    },
                    properties: Properties {
                        public_id: id.map(str::to_string),
                        ..Default::default()
                    },
                })
                .collect();
            Ok(Search { features })
        }
    }

    struct FailingSource;

    #[async_trait]
    impl EventSource for FailingSource {
        async fn search(&self, _url: &Url) -> Result<Search> {
            Err(QuakeError::Http {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_run_returns_present_ids_in_order() {
        let source = MockSource::new(vec![Some("A"), None, Some("B")]);
        let requested = source.requested.clone();
        let mut query = QueryBuilder::new("wfs.geonet.org.nz", 5).unwrap();
        query.add_filter("eventtype+=+earthquake");

        let ids = QuakeSearch::new(source).run(&query).await.unwrap();

        assert_eq!(ids, vec!["A", "B"]);
        let requested = requested.lock().unwrap();
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0], query.render_url());
    }

    #[tokio::test]
    async fn test_run_with_no_features() {
        let ids = QuakeSearch::new(MockSource::new(vec![]))
            .run(&QueryBuilder::new("wfs.geonet.org.nz", 0).unwrap())
            .await
            .unwrap();

        assert!(ids.is_empty());
        assert_eq!(format_ids(&ids), None);
    }

    #[tokio::test]
    async fn test_run_propagates_source_errors() {
        let result = QuakeSearch::new(FailingSource)
            .run(&QueryBuilder::new("wfs.geonet.org.nz", 0).unwrap())
            .await;

        assert!(matches!(result, Err(QuakeError::Http { status: 503, .. })));
    }

    #[test]
    fn test_format_ids() {
        let ids = vec!["2024p000001".to_string(), "2024p000002".to_string()];
        assert_eq!(
            format_ids(&ids).as_deref(),
            Some("2024p000001 2024p000002")
        );
        assert_eq!(format_ids(&["only".to_string()]).as_deref(), Some("only"));
        assert_eq!(format_ids(&[]), None);
    }
}
