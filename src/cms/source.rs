use serde_json::Value;

use crate::error::VenueAtlasError;

/// Something that answers GROQ queries with the JSON `result` value.
pub trait ContentSource {
    /// Run `groq` and return the query result.
    ///
    /// # Errors
    ///
    /// Transport, status and decoding failures.
    fn query(&self, groq: &str) -> Result<Value, VenueAtlasError>;
}

#[cfg(feature = "http")]
pub use http::SanityClient;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use serde::Deserialize;
    use serde_json::Value;

    use super::ContentSource;
    use crate::cms::config::CmsConfig;
    use crate::error::VenueAtlasError;

    /// Upper bound on a whole request, connect to last byte.
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    #[derive(Deserialize)]
    struct QueryResponse {
        #[serde(default)]
        result: Value,
    }

    /// Blocking client for the hosted GROQ query API.
    ///
    /// One request per query, no retries. Every request carries a global
    /// timeout so an abandoned load cannot keep a worker thread alive.
    pub struct SanityClient {
        config: CmsConfig,
        agent: ureq::Agent,
    }

    impl SanityClient {
        /// Client with the default request timeout.
        #[must_use]
        pub fn new(config: CmsConfig) -> Self {
            Self::with_timeout(config, DEFAULT_TIMEOUT)
        }

        /// Client whose requests give up after `timeout`.
        #[must_use]
        pub fn with_timeout(config: CmsConfig, timeout: Duration) -> Self {
            let agent: ureq::Agent = ureq::Agent::config_builder()
                .timeout_global(Some(timeout))
                .build()
                .into();
            Self { config, agent }
        }

        /// Connection settings.
        #[must_use]
        pub fn config(&self) -> &CmsConfig {
            &self.config
        }
    }

    impl std::fmt::Debug for SanityClient {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SanityClient")
                .field("project_id", &self.config.project_id)
                .field("dataset", &self.config.dataset)
                .field("use_cdn", &self.config.use_cdn)
                .finish_non_exhaustive()
        }
    }

    impl ContentSource for SanityClient {
        fn query(&self, groq: &str) -> Result<Value, VenueAtlasError> {
            let url = self.config.query_url();
            log::debug!("GROQ query against {url}");

            let mut request = self
                .agent
                .get(&url)
                .query("query", groq)
                .query("perspective", "published");
            if let Some(token) = &self.config.token {
                request =
                    request.header("Authorization", format!("Bearer {token}"));
            }

            let body = request.call()?.into_body().read_to_string()?;
            let response: QueryResponse = serde_json::from_str(&body)?;
            Ok(response.result)
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use serde_json::Value;

    use super::ContentSource;
    use crate::error::VenueAtlasError;

    /// Canned source: returns the same result for every query and records
    /// what was asked.
    pub(crate) struct StaticSource {
        result: Result<Value, String>,
        pub(crate) queries: RefCell<Vec<String>>,
    }

    impl StaticSource {
        pub(crate) fn ok(result: Value) -> Self {
            Self {
                result: Ok(result),
                queries: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_owned()),
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContentSource for StaticSource {
        fn query(&self, groq: &str) -> Result<Value, VenueAtlasError> {
            self.queries.borrow_mut().push(groq.to_owned());
            self.result.clone().map_err(VenueAtlasError::Http)
        }
    }
}
