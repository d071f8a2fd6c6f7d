use crate::error::VenueAtlasError;

/// Dataset queried when `SANITY_DATASET` is unset.
pub const DEFAULT_DATASET: &str = "production";
/// API version pinned when `SANITY_API_VERSION` is unset.
pub const DEFAULT_API_VERSION: &str = "2024-05-01";
/// Studio hostname used when none is configured.
pub const DEFAULT_STUDIO_HOST: &str = "venue-atlas";

/// Connection settings for the hosted content lake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    /// Project id (subdomain of the API host).
    pub project_id: String,
    /// Dataset name.
    pub dataset: String,
    /// Dated API version, e.g. `2024-05-01`.
    pub api_version: String,
    /// Read token for private datasets.
    pub token: Option<String>,
    /// Query the edge cache instead of the live API.
    pub use_cdn: bool,
}

impl CmsConfig {
    /// Config for a project with default dataset and API version.
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: DEFAULT_DATASET.to_owned(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            token: None,
            use_cdn: true,
        }
    }

    /// Read the config from `SANITY_*` environment variables.
    ///
    /// Returns `Ok(None)` when no project id is set: the site then runs on
    /// bundled content.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::Config`] when a variable is set but malformed.
    pub fn from_env() -> Result<Option<Self>, VenueAtlasError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// [`CmsConfig::from_env`] over an arbitrary variable lookup. Blank
    /// values count as unset.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::Config`] when a variable is set but malformed.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, VenueAtlasError> {
        let var = |key: &str| non_blank(&lookup, key);

        let Some(project_id) = var("SANITY_PROJECT_ID") else {
            return Ok(None);
        };
        let config = Self {
            project_id,
            dataset: var("SANITY_DATASET")
                .unwrap_or_else(|| DEFAULT_DATASET.to_owned()),
            api_version: var("SANITY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned()),
            token: var("SANITY_READ_TOKEN"),
            use_cdn: var("SANITY_USE_CDN").as_deref() != Some("false"),
        };
        config.validate()?;
        Ok(Some(config))
    }

    /// Check identifier formats.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::Config`] naming the first malformed field.
    pub fn validate(&self) -> Result<(), VenueAtlasError> {
        let project_ok = !self.project_id.is_empty()
            && self
                .project_id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !project_ok {
            return Err(VenueAtlasError::Config(format!(
                "SANITY_PROJECT_ID {:?} must be lowercase letters and digits",
                self.project_id
            )));
        }

        let dataset_ok = (1..=64).contains(&self.dataset.len())
            && self.dataset.starts_with(|c: char| {
                c.is_ascii_lowercase() || c.is_ascii_digit()
            })
            && self.dataset.chars().all(|c| {
                c.is_ascii_lowercase()
                    || c.is_ascii_digit()
                    || c == '_'
                    || c == '-'
            });
        if !dataset_ok {
            return Err(VenueAtlasError::Config(format!(
                "SANITY_DATASET {:?} is not a valid dataset name",
                self.dataset
            )));
        }

        if !is_api_version(&self.api_version) {
            return Err(VenueAtlasError::Config(format!(
                "SANITY_API_VERSION {:?} must be YYYY-MM-DD, 1 or X",
                self.api_version
            )));
        }
        Ok(())
    }

    /// GROQ query endpoint.
    #[must_use]
    pub fn query_url(&self) -> String {
        let host = if self.use_cdn { "apicdn" } else { "api" };
        format!(
            "https://{}.{host}.sanity.io/v{}/data/query/{}",
            self.project_id, self.api_version, self.dataset
        )
    }

    /// Base URL of transformed images for this project and dataset.
    #[must_use]
    pub fn image_base_url(&self) -> String {
        format!(
            "https://cdn.sanity.io/images/{}/{}",
            self.project_id, self.dataset
        )
    }
}

fn is_api_version(version: &str) -> bool {
    if version == "1" || version == "X" {
        return true;
    }
    let bytes = version.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Check a studio hostname: ASCII letters, digits and dashes only.
///
/// # Errors
///
/// [`VenueAtlasError::Config`] for an empty or malformed hostname.
pub fn validate_studio_host(host: &str) -> Result<(), VenueAtlasError> {
    if !host.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        Ok(())
    } else {
        Err(VenueAtlasError::Config(format!(
            "invalid or missing studio hostname {host:?}; set SANITY_STUDIO_HOST"
        )))
    }
}

/// Variables consulted for the studio hostname, first non-blank wins.
const STUDIO_HOST_KEYS: [&str; 3] = [
    "SANITY_STUDIO_HOST",
    "SANITY_STUDIO_HOSTNAME",
    "VITE_SANITY_STUDIO_HOST",
];

/// Trimmed value of `key`; blank values count as unset.
fn non_blank(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Studio hostname from `SANITY_STUDIO_HOST`, `SANITY_STUDIO_HOSTNAME` or
/// `VITE_SANITY_STUDIO_HOST`, in that order, defaulting to
/// [`DEFAULT_STUDIO_HOST`]. Blank values fall through to the next key.
///
/// # Errors
///
/// [`VenueAtlasError::Config`] when the configured hostname is malformed.
pub fn studio_host_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, VenueAtlasError> {
    let host = STUDIO_HOST_KEYS
        .iter()
        .find_map(|key| non_blank(&lookup, key))
        .unwrap_or_else(|| DEFAULT_STUDIO_HOST.to_owned());
    validate_studio_host(&host)?;
    Ok(host)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_project_id_means_unconfigured() {
        assert_eq!(CmsConfig::from_lookup(env(&[])).unwrap(), None);
        assert_eq!(
            CmsConfig::from_lookup(env(&[("SANITY_PROJECT_ID", "  ")])).unwrap(),
            None
        );
    }

    #[test]
    fn defaults_fill_in() {
        let config = CmsConfig::from_lookup(env(&[("SANITY_PROJECT_ID", "abc123")]))
            .unwrap()
            .unwrap();
        assert_eq!(config.dataset, "production");
        assert_eq!(config.api_version, "2024-05-01");
        assert_eq!(config.token, None);
        assert!(config.use_cdn);
        assert_eq!(
            config.query_url(),
            "https://abc123.apicdn.sanity.io/v2024-05-01/data/query/production"
        );
    }

    #[test]
    fn only_literal_false_disables_cdn() {
        let config = CmsConfig::from_lookup(env(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_USE_CDN", "false"),
            ("SANITY_DATASET", "staging"),
            ("SANITY_READ_TOKEN", "sk-1"),
        ]))
        .unwrap()
        .unwrap();
        assert!(!config.use_cdn);
        assert_eq!(config.token.as_deref(), Some("sk-1"));
        assert!(config.query_url().starts_with("https://abc123.api.sanity.io/"));

        let config = CmsConfig::from_lookup(env(&[
            ("SANITY_PROJECT_ID", "abc123"),
            ("SANITY_USE_CDN", "0"),
        ]))
        .unwrap()
        .unwrap();
        assert!(config.use_cdn);
    }

    #[test]
    fn malformed_values_fail_fast() {
        for pairs in [
            &[("SANITY_PROJECT_ID", "Not Valid")][..],
            &[("SANITY_PROJECT_ID", "abc"), ("SANITY_DATASET", "Prod!")][..],
            &[("SANITY_PROJECT_ID", "abc"), ("SANITY_API_VERSION", "yesterday")][..],
        ] {
            let err = CmsConfig::from_lookup(env(pairs)).unwrap_err();
            assert!(matches!(err, VenueAtlasError::Config(_)), "{pairs:?}");
        }
    }

    #[test]
    fn studio_host_rules() {
        assert!(validate_studio_host("venue-map-2").is_ok());
        assert!(validate_studio_host("").is_err());
        assert!(validate_studio_host("my_studio").is_err());
        assert!(validate_studio_host("studio.example").is_err());

        assert_eq!(
            studio_host_from_lookup(env(&[])).unwrap(),
            DEFAULT_STUDIO_HOST
        );
        assert_eq!(
            studio_host_from_lookup(env(&[("SANITY_STUDIO_HOSTNAME", "alt")]))
                .unwrap(),
            "alt"
        );
        assert!(
            studio_host_from_lookup(env(&[("SANITY_STUDIO_HOST", "bad host")]))
                .is_err()
        );
    }

    #[test]
    fn blank_studio_host_falls_through() {
        assert_eq!(
            studio_host_from_lookup(env(&[
                ("SANITY_STUDIO_HOST", ""),
                ("SANITY_STUDIO_HOSTNAME", " "),
                ("VITE_SANITY_STUDIO_HOST", "vite-studio"),
            ]))
            .unwrap(),
            "vite-studio"
        );
        assert_eq!(
            studio_host_from_lookup(env(&[("SANITY_STUDIO_HOST", "")])).unwrap(),
            DEFAULT_STUDIO_HOST
        );
        assert_eq!(
            studio_host_from_lookup(env(&[
                ("SANITY_STUDIO_HOST", "primary"),
                ("VITE_SANITY_STUDIO_HOST", "vite-studio"),
            ]))
            .unwrap(),
            "primary"
        );
    }
}
