//! Venue bundled with the site, shown when the CMS is unavailable.

use crate::cms::documents::{
    GalleryDocument, GalleryPositionDocument, GeoDocument, VenueDocument,
};

fn gallery_item(
    title: &str,
    file: &str,
    position: GalleryPositionDocument,
) -> GalleryDocument {
    GalleryDocument {
        key: None,
        title: Some(title.to_owned()),
        image_url: Some(format!("/images/{file}")),
        position: Some(position),
    }
}

/// Documents of the bundled venues.
#[must_use]
pub fn bundled_documents() -> Vec<VenueDocument> {
    let at = |top, left, bottom, right, width| GalleryPositionDocument {
        top,
        left,
        bottom,
        right,
        width: Some(width),
    };

    vec![VenueDocument {
        id: Some("fallback-warsaw".to_owned()),
        title: Some("Warsaw".to_owned()),
        slug: Some("warsaw".to_owned()),
        state: Some("New York".to_owned()),
        region: Some("east".to_owned()),
        location: Some(GeoDocument {
            lat: Some(40.7216),
            lng: Some(-73.9572),
        }),
        description: Some(
            "Fallback venue data when the CMS is offline.".to_owned(),
        ),
        model_url: Some("/models/warsaw.glb".to_owned()),
        logo_url: Some("/images/warsaw.svg".to_owned()),
        gallery: Some(vec![
            gallery_item(
                "Lobby",
                "warsaw-1.png",
                at(Some(25.0), Some(15.0), None, None, 240.0),
            ),
            gallery_item(
                "Bar",
                "warsaw-2.png",
                at(Some(25.0), None, None, Some(8.0), 230.0),
            ),
            gallery_item(
                "Restaurant",
                "warsaw-3.png",
                at(None, Some(20.0), Some(18.0), None, 260.0),
            ),
            gallery_item(
                "Main Stage",
                "warsaw-4.png",
                at(None, None, Some(12.0), Some(12.0), 250.0),
            ),
            gallery_item(
                "Backstage",
                "warsaw-5.png",
                at(Some(75.0), None, None, Some(45.0), 220.0),
            ),
        ]),
        ..VenueDocument::default()
    }]
}
