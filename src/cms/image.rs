//! CDN URLs for image assets.
//!
//! Asset ids encode everything needed to build a URL:
//! `image-<hash>-<width>x<height>-<format>`. The CDN URLs the venue queries
//! project (`.../images/<project>/<dataset>/<hash>-<w>x<h>.<format>`) carry
//! the same information and parse the same way.

use crate::error::VenueAtlasError;

/// Widths offered in a `srcset`.
pub const SRCSET_WIDTHS: [u32; 5] = [400, 800, 1200, 1600, 2000];
/// JPEG/WebP quality requested from the CDN.
pub const DEFAULT_QUALITY: u8 = 80;
/// Width of the plain `src` when none is requested.
pub const DEFAULT_SRC_WIDTH: u32 = 1200;

/// A parsed image asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    /// Content hash.
    pub id: String,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// File format (`jpg`, `png`, `gif`, ...).
    pub format: String,
}

impl ImageAsset {
    /// Parse an `image-<hash>-<w>x<h>-<format>` reference.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::Asset`] if the reference is not in that form.
    pub fn parse(reference: &str) -> Result<Self, VenueAtlasError> {
        let malformed =
            || VenueAtlasError::Asset(format!("malformed image reference {reference:?}"));

        let rest = reference.strip_prefix("image-").ok_or_else(malformed)?;
        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next().ok_or_else(malformed)?;
        let dimensions = parts.next().ok_or_else(malformed)?;
        let id = parts.next().ok_or_else(malformed)?;

        Self::from_parts(id, dimensions, format).ok_or_else(malformed)
    }

    /// Parse a CDN asset URL, `.../<hash>-<w>x<h>.<format>`. Query strings
    /// and fragments are ignored.
    ///
    /// # Errors
    ///
    /// [`VenueAtlasError::Asset`] if the last path segment is not in that
    /// form.
    pub fn from_url(url: &str) -> Result<Self, VenueAtlasError> {
        let malformed =
            || VenueAtlasError::Asset(format!("not a CDN image URL {url:?}"));

        let path = url.split(['?', '#']).next().unwrap_or_default();
        let file = path.rsplit('/').next().unwrap_or_default();
        let (stem, format) = file.rsplit_once('.').ok_or_else(malformed)?;
        let (id, dimensions) = stem.rsplit_once('-').ok_or_else(malformed)?;

        Self::from_parts(id, dimensions, format).ok_or_else(malformed)
    }

    fn from_parts(id: &str, dimensions: &str, format: &str) -> Option<Self> {
        let (w, h) = dimensions.split_once('x')?;
        let width = w.parse().ok()?;
        let height = h.parse().ok()?;
        if id.is_empty() || format.is_empty() {
            return None;
        }
        Some(Self {
            id: id.to_owned(),
            width,
            height,
            format: format.to_owned(),
        })
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Animated GIFs lose their frames when transformed.
    #[must_use]
    pub fn is_gif(&self) -> bool {
        self.format.eq_ignore_ascii_case("gif")
    }

    fn file_name(&self) -> String {
        format!("{}-{}x{}.{}", self.id, self.width, self.height, self.format)
    }
}

/// Builds CDN URLs under a project/dataset base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
    quality: u8,
}

impl ImageUrlBuilder {
    /// Builder rooted at `base_url`, e.g. from
    /// [`CmsConfig::image_base_url`](crate::cms::CmsConfig::image_base_url).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            quality: DEFAULT_QUALITY,
        }
    }

    /// Untransformed asset URL.
    #[must_use]
    pub fn raw_url(&self, asset: &ImageAsset) -> String {
        format!("{}/{}", self.base_url, asset.file_name())
    }

    /// URL of the asset resized to `width`, at the builder's quality, in
    /// whatever format the browser accepts best. GIFs come back raw.
    #[must_use]
    pub fn url(&self, asset: &ImageAsset, width: u32) -> String {
        if asset.is_gif() {
            return self.raw_url(asset);
        }
        format!(
            "{}?w={width}&q={}&auto=format",
            self.raw_url(asset),
            self.quality
        )
    }

    /// Plain `src`: [`DEFAULT_SRC_WIDTH`] capped at `max_width`.
    #[must_use]
    pub fn src(&self, asset: &ImageAsset, max_width: Option<u32>) -> String {
        let max = self.max_width(asset, max_width);
        self.url(asset, DEFAULT_SRC_WIDTH.min(max))
    }

    /// `srcset` over [`SRCSET_WIDTHS`] up to `max_width` (default: the
    /// source width), plus `max_width` itself when it falls inside the
    /// range. `None` for GIFs, which are served raw.
    #[must_use]
    pub fn srcset(
        &self,
        asset: &ImageAsset,
        max_width: Option<u32>,
    ) -> Option<String> {
        if asset.is_gif() {
            return None;
        }
        let max = self.max_width(asset, max_width);
        let mut widths: Vec<u32> =
            SRCSET_WIDTHS.iter().copied().filter(|&w| w <= max).collect();
        let largest = SRCSET_WIDTHS[SRCSET_WIDTHS.len() - 1];
        if max <= largest && !widths.contains(&max) {
            widths.push(max);
        }
        Some(
            widths
                .iter()
                .map(|&w| format!("{} {w}w", self.url(asset, w)))
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    fn max_width(&self, asset: &ImageAsset, max_width: Option<u32>) -> u32 {
        match max_width {
            Some(w) if w > 0 => w,
            _ if asset.width > 0 => asset.width,
            _ => SRCSET_WIDTHS[SRCSET_WIDTHS.len() - 1],
        }
    }
}

/// `src`, `srcset` and aspect ratio for an `<img>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsiveImage {
    /// Plain source URL.
    pub src: String,
    /// Width-described candidates; `None` when the URL is served as is.
    pub srcset: Option<String>,
    /// Source width over height, when known.
    pub aspect_ratio: Option<f32>,
}

impl ResponsiveImage {
    /// Responsive sources for a CDN asset URL, capped at `max_width`
    /// (default: the source width).
    ///
    /// URLs that are not CDN assets, such as bundled files, are used
    /// unchanged. GIFs keep their raw URL so animation frames survive.
    #[must_use]
    pub fn from_url(url: &str, max_width: Option<u32>) -> Self {
        let Ok(asset) = ImageAsset::from_url(url) else {
            log::debug!("serving {url} without transformations");
            return Self {
                src: url.to_owned(),
                srcset: None,
                aspect_ratio: None,
            };
        };
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let base = path.rsplit_once('/').map_or("", |(base, _)| base);
        let builder = ImageUrlBuilder::new(base);
        Self {
            src: builder.src(&asset, max_width),
            srcset: builder.srcset(&asset, max_width),
            aspect_ratio: Some(asset.aspect_ratio()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("https://cdn.sanity.io/images/abc123/production/")
    }

    #[test]
    fn parses_asset_reference() {
        let asset = ImageAsset::parse("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg").unwrap();
        assert_eq!(asset.id, "Tb9Ew8CXIwaY6R1kjMvI0uRR");
        assert_eq!((asset.width, asset.height), (2000, 3000));
        assert_eq!(asset.format, "jpg");
        assert!((asset.aspect_ratio() - 2.0 / 3.0).abs() < 1e-6);

        for bad in ["file-abc-1x1-pdf", "image-abc-1x-jpg", "image-abc", "image--10x10-png"] {
            assert!(ImageAsset::parse(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn parses_cdn_url() {
        let asset = ImageAsset::from_url(
            "https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg?dl=1",
        )
        .unwrap();
        assert_eq!(asset.id, "Tb9Ew8CXIwaY6R1kjMvI0uRR");
        assert_eq!((asset.width, asset.height), (2000, 3000));
        assert_eq!(asset.format, "jpg");

        for bad in ["/images/lobby.png", "https://cdn.sanity.io/", "a-1x1"] {
            assert!(ImageAsset::from_url(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn responsive_image_from_cdn_url() {
        let image = ResponsiveImage::from_url(
            "https://cdn.sanity.io/images/abc123/production/abc-1000x500.jpg",
            None,
        );
        assert_eq!(
            image.src,
            "https://cdn.sanity.io/images/abc123/production/abc-1000x500.jpg?w=1000&q=80&auto=format"
        );
        assert!(image.srcset.unwrap().ends_with("w=1000&q=80&auto=format 1000w"));
        assert_eq!(image.aspect_ratio, Some(2.0));
    }

    #[test]
    fn responsive_image_passes_through_other_urls() {
        let image = ResponsiveImage::from_url("/images/lobby.png", Some(800));
        assert_eq!(image.src, "/images/lobby.png");
        assert_eq!(image.srcset, None);
        assert_eq!(image.aspect_ratio, None);

        let gif = "https://cdn.sanity.io/images/abc123/production/anim-320x240.gif";
        let image = ResponsiveImage::from_url(gif, None);
        assert_eq!(image.src, gif);
        assert_eq!(image.srcset, None);
    }

    #[test]
    fn url_carries_width_quality_and_format() {
        let asset = ImageAsset::parse("image-abc-1600x900-png").unwrap();
        assert_eq!(
            builder().url(&asset, 800),
            "https://cdn.sanity.io/images/abc123/production/abc-1600x900.png?w=800&q=80&auto=format"
        );
    }

    #[test]
    fn srcset_is_capped_at_source_width() {
        let asset = ImageAsset::parse("image-abc-1000x500-jpg").unwrap();
        let srcset = builder().srcset(&asset, None).unwrap();
        let widths: Vec<&str> = srcset
            .split(", ")
            .map(|entry| entry.rsplit(' ').next().unwrap())
            .collect();
        assert_eq!(widths, vec!["400w", "800w", "1000w"]);
        assert!(builder().src(&asset, None).contains("w=1000"));
    }

    #[test]
    fn srcset_for_large_sources_uses_all_widths() {
        let asset = ImageAsset::parse("image-abc-4000x2000-jpg").unwrap();
        let srcset = builder().srcset(&asset, None).unwrap();
        assert_eq!(srcset.matches("w, ").count() + 1, SRCSET_WIDTHS.len());
        assert!(builder().src(&asset, None).contains("w=1200"));
        // explicit width equal to a standard step is not listed twice
        let srcset = builder().srcset(&asset, Some(800)).unwrap();
        assert_eq!(srcset.matches("800w").count(), 1);
    }

    #[test]
    fn gifs_bypass_transformation() {
        let asset = ImageAsset::parse("image-anim-320x240-gif").unwrap();
        assert_eq!(
            builder().url(&asset, 800),
            "https://cdn.sanity.io/images/abc123/production/anim-320x240.gif"
        );
        assert_eq!(builder().srcset(&asset, None), None);
    }
}
