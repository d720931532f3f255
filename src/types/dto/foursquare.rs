use serde::{Deserialize, Serialize};

// Only the fields the place lookup reads are modelled; serde skips the rest.

#[derive(Serialize, Deserialize, Debug)]
pub struct VenueSearch {
    pub response: VenueSearchResponse,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VenueSearchResponse {
    #[serde(default)]
    pub venues: Vec<FoursquareVenue>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FoursquareVenue {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub categories: Vec<FoursquareCategory>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FoursquareCategory {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PhotoList {
    pub response: PhotoListResponse,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PhotoListResponse {
    pub photos: PhotoItems,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PhotoItems {
    #[serde(default)]
    pub items: Vec<PhotoItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PhotoItem {
    pub prefix: String,
    pub suffix: String,
    pub width: u32,
    pub height: u32,
}

impl PhotoItem {
    /// Foursquare photo URLs are `prefix + size + suffix`, size being `WIDTHxHEIGHT`.
    pub fn url(&self) -> String {
        format!("{}{}x{}{}", self.prefix, self.width, self.height, self.suffix)
    }
}

impl PhotoList {
    pub fn urls(&self) -> Vec<String> {
        self.response.photos.items.iter().map(PhotoItem::url).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_url_joins_prefix_size_and_suffix() {
        let item = PhotoItem {
            prefix: "a".into(),
            width: 100,
            height: 50,
            suffix: "b".into(),
        };
        assert_eq!(item.url(), "a100x50b");
    }

    #[test]
    fn photo_list_keeps_item_order() {
        let list: PhotoList = serde_json::from_value(serde_json::json!({
            "meta": { "code": 200 },
            "response": { "photos": { "count": 2, "items": [
                { "id": "p1", "prefix": "https://igx.4sqi.net/img/general/", "suffix": "/one.jpg", "width": 540, "height": 720 },
                { "id": "p2", "prefix": "https://igx.4sqi.net/img/general/", "suffix": "/two.jpg", "width": 1920, "height": 1080 }
            ] } }
        }))
        .unwrap();

        assert_eq!(
            list.urls(),
            vec![
                "https://igx.4sqi.net/img/general/540x720/one.jpg",
                "https://igx.4sqi.net/img/general/1920x1080/two.jpg",
            ]
        );
    }

    #[test]
    fn venue_without_categories_deserializes_empty() {
        let venue: FoursquareVenue =
            serde_json::from_value(serde_json::json!({ "id": "v1", "name": "Forte" })).unwrap();
        assert!(venue.categories.is_empty());
    }
}
