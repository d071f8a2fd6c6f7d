//! Site-wide metadata.

use serde::Serialize;

use crate::cms::documents::SiteSettingsDocument;
use crate::util::html::escape;

/// Site metadata edited in the CMS settings singleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    /// Title used in `<title>` and share cards.
    pub site_title: Option<String>,
    /// Meta description.
    pub site_description: Option<String>,
    /// Share card image.
    pub social_share_image_url: Option<String>,
    /// Static map shown on small screens instead of the 3D scene.
    pub mobile_map_image_url: Option<String>,
}

impl From<SiteSettingsDocument> for SiteSettings {
    fn from(doc: SiteSettingsDocument) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            site_title: present(doc.site_title),
            site_description: present(doc.site_description),
            social_share_image_url: present(doc.social_share_image_url),
            mobile_map_image_url: present(doc.mobile_map_image_url),
        }
    }
}

impl SiteSettings {
    /// Whether the document carried anything at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.site_title.is_none()
            && self.site_description.is_none()
            && self.social_share_image_url.is_none()
            && self.mobile_map_image_url.is_none()
    }

    /// `<head>` tags for the settings: title, description, Open Graph and
    /// Twitter card. All values are HTML-escaped.
    #[must_use]
    pub fn head_tags(&self) -> String {
        let mut tags = Vec::new();
        if let Some(title) = &self.site_title {
            let title = escape(title);
            tags.push(format!("<title>{title}</title>"));
            tags.push(format!(r#"<meta property="og:title" content="{title}">"#));
            tags.push(format!(r#"<meta name="twitter:title" content="{title}">"#));
        }
        if let Some(description) = &self.site_description {
            let description = escape(description);
            tags.push(format!(r#"<meta name="description" content="{description}">"#));
            tags.push(format!(
                r#"<meta property="og:description" content="{description}">"#
            ));
            tags.push(format!(
                r#"<meta name="twitter:description" content="{description}">"#
            ));
        }
        tags.push(r#"<meta property="og:type" content="website">"#.to_owned());
        match &self.social_share_image_url {
            Some(image) => {
                let image = escape(image);
                tags.push(format!(r#"<meta property="og:image" content="{image}">"#));
                tags.push(format!(r#"<meta name="twitter:image" content="{image}">"#));
                tags.push(
                    r#"<meta name="twitter:card" content="summary_large_image">"#
                        .to_owned(),
                );
            }
            None => tags.push(
                r#"<meta name="twitter:card" content="summary">"#.to_owned(),
            ),
        }
        tags.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_dropped() {
        let settings = SiteSettings::from(SiteSettingsDocument {
            site_title: Some("  ".to_owned()),
            site_description: Some("Venues".to_owned()),
            ..Default::default()
        });
        assert_eq!(settings.site_title, None);
        assert_eq!(settings.site_description.as_deref(), Some("Venues"));
        assert!(!settings.is_empty());
        assert!(SiteSettings::default().is_empty());
    }

    #[test]
    fn head_tags_are_escaped() {
        let settings = SiteSettings {
            site_title: Some("Rock & Roll <Live>".to_owned()),
            site_description: Some(r#"Say "hi""#.to_owned()),
            social_share_image_url: Some("https://cdn.example/share.png".to_owned()),
            mobile_map_image_url: None,
        };
        let head = settings.head_tags();
        assert!(head.contains("<title>Rock &amp; Roll &lt;Live&gt;</title>"));
        assert!(head.contains(r#"content="Say &quot;hi&quot;""#));
        assert!(head.contains(
            r#"<meta property="og:image" content="https://cdn.example/share.png">"#
        ));
        assert!(head.contains("summary_large_image"));
    }

    #[test]
    fn head_tags_without_image_use_summary_card() {
        let head = SiteSettings::default().head_tags();
        assert!(!head.contains("<title>"));
        assert!(head.contains(r#"content="summary""#));
    }
}
