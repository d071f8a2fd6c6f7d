use crate::error::VenueAtlasError;
use crate::venue::VenueMedia;

const SVG_MIME: &str = "image/svg+xml";

/// A hero line-art asset confirmed to be SVG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroAsset {
    url: String,
}

impl HeroAsset {
    /// Accept `url` as line art if it is SVG.
    ///
    /// `content_type` is the served `Content-Type` when the host has
    /// fetched the asset; without it the URL path's extension decides.
    ///
    /// # Errors
    ///
    /// Returns [`VenueAtlasError::Asset`] for anything that is not SVG.
    pub fn classify(
        url: &str,
        content_type: Option<&str>,
    ) -> Result<Self, VenueAtlasError> {
        let mime = match content_type {
            Some(ct) => essence(ct),
            None => mime_guess::from_path(url_path(url))
                .first_raw()
                .unwrap_or("application/octet-stream")
                .to_owned(),
        };
        if mime == SVG_MIME {
            Ok(Self {
                url: url.to_owned(),
            })
        } else {
            Err(VenueAtlasError::Asset(format!(
                "hero line art {url} is {mime}, not {SVG_MIME}"
            )))
        }
    }

    /// Asset URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// What the detail view draws behind the venue title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroBackground {
    /// Animated SVG line art.
    LineArt(HeroAsset),
    /// Static image under a dark gradient.
    Image(String),
    /// Plain background.
    Plain,
}

impl HeroBackground {
    /// Pick the hero for a venue: line art when it is usable SVG, else the
    /// static hero image, else nothing.
    #[must_use]
    pub fn for_media(media: &VenueMedia, content_type: Option<&str>) -> Self {
        if let Some(url) = media.hero_line_animation_url.as_deref() {
            match HeroAsset::classify(url, content_type) {
                Ok(asset) => return Self::LineArt(asset),
                Err(e) => log::debug!("falling back to hero image: {e}"),
            }
        }
        media
            .hero_image_url
            .clone()
            .map_or(Self::Plain, Self::Image)
    }
}

/// MIME essence (type/subtype) of a Content-Type header value.
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// URL without query string or fragment.
fn url_path(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_by_extension_ignores_query() {
        let asset =
            HeroAsset::classify("https://cdn.example.com/f/art.svg?dl=1", None)
                .unwrap();
        assert_eq!(asset.url(), "https://cdn.example.com/f/art.svg?dl=1");
        assert!(HeroAsset::classify("art.png", None).is_err());
        assert!(HeroAsset::classify("no-extension", None).is_err());
    }

    #[test]
    fn content_type_wins_over_extension() {
        assert!(HeroAsset::classify(
            "download",
            Some("Image/SVG+XML; charset=utf-8")
        )
        .is_ok());
        assert!(HeroAsset::classify("art.svg", Some("text/html")).is_err());
    }

    #[test]
    fn background_falls_back_to_image() {
        let mut media = VenueMedia {
            hero_image_url: Some("hero.jpg".to_owned()),
            hero_line_animation_url: Some("art.gif".to_owned()),
            ..VenueMedia::default()
        };
        assert_eq!(
            HeroBackground::for_media(&media, None),
            HeroBackground::Image("hero.jpg".to_owned())
        );

        media.hero_line_animation_url = Some("art.svg".to_owned());
        assert!(matches!(
            HeroBackground::for_media(&media, None),
            HeroBackground::LineArt(_)
        ));

        assert_eq!(
            HeroBackground::for_media(&VenueMedia::default(), None),
            HeroBackground::Plain
        );
    }
}
