//! GROQ projections for the documents the site reads.
//!
//! Projections flatten asset references to URLs and slugs to strings so the
//! results deserialize straight into [`super::documents`] types.

/// Every venue, ordered by title.
pub const VENUES: &str = r#"*[_type == "mapPoint"] | order(title asc) {
  _id,
  title,
  "slug": slug.current,
  state,
  city,
  region,
  location,
  description,
  "heroImageUrl": heroImage.asset->url,
  "heroLineAnimationUrl": heroLineAnimation.asset->url,
  "modelUrl": model.asset->url,
  "logoUrl": logoTexture.asset->url,
  gallery[]{
    _key,
    title,
    position,
    "imageUrl": image.asset->url
  },
  aboutModule{
    "videoUrl": video.asset->url,
    "videoPosterUrl": videoPoster.asset->url,
    description,
    services,
    partners[]{ name, title },
    crew[]{ name, title }
  }
}"#;

/// The site-settings singleton.
pub const SITE_SETTINGS: &str = r#"*[_type == "siteSettings"][0] {
  siteTitle,
  siteDescription,
  "socialShareImageUrl": socialShareImage.asset->url,
  "mobileMapImageUrl": mobileMapImage.asset->url
}"#;
