//! 對前端公開的內容形狀
//!
//! 上游 CMS 的紀錄直接反序列化成這些型別；未知欄位（formats、alternativeText、
//! createdAt 等 metadata）在反序列化時被丟棄。媒體 URL 則在正規化階段補成絕對路徑。
//!
//! 自由文字欄位一律是 [`Value`]，上游給什麼就原樣輸出（字串、rich-text blocks 都可）。
//! 需要正規化的欄位才有具體型別，並以 [`lenient`] 解碼：型別不符時退回預設值，
//! 不讓單一欄位拖垮整筆紀錄。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 型別不符或為 `null` 時回傳預設值
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// 媒體參照，只保留 URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
}

impl Media {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    pub fn has_url(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// 圖示三選一，於 proxy 層一次決定
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Icon {
    /// CSS class，例如 `las la-wifi`
    Class(String),
    /// inline SVG path data
    Path(String),
    Image(Media),
    #[default]
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSlide {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationItem {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub label: Value,
    pub href: Value,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub site_name: Value,
    pub site_tagline: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_now_url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub logo: Option<Media>,
    #[serde(deserialize_with = "lenient")]
    pub phone_numbers: Vec<String>,
    pub address: Value,
    pub email: Value,
    pub social_links: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomSuite {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    pub subtitle: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub gallery: Option<Vec<Media>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub display_in: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomsPage {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_images: Vec<String>,
    pub section_title: String,
    pub section_subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dining {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    pub subtitle: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
    pub features: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiningSection {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    pub description1: Value,
    pub description2: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    pub image_position: Value,
    pub checklist_items: Value,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiningPage {
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    pub intro_title: Value,
    pub intro_description: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    pub subtitle: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
    pub category: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperiencesPage {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    pub intro_title: Value,
    pub intro_description: Value,
    pub in_house_title: Value,
    pub nearby_title: Value,
    pub note_title: Value,
    pub note_content: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Facility {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    pub features: Value,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilitiesPage {
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    pub amenities_section_title: Value,
    pub amenities_section_description: Value,
    pub seo_title: Value,
    pub seo_description: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FacilitySection {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<Media>,
    #[serde(deserialize_with = "lenient")]
    pub image_position: String,
    #[serde(deserialize_with = "lenient")]
    pub checklist_items: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub checklist_columns: u32,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmenityIcon {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub name: Value,
    #[serde(deserialize_with = "lenient")]
    pub icon: Icon,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSummary {
    pub title: Value,
    pub description: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryPage {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    #[serde(deserialize_with = "lenient")]
    pub seo: SeoSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeddingEvent {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeddingEventsPage {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    pub intro_title: Value,
    pub intro_subtitle: Value,
    pub intro_description1: Value,
    pub intro_description2: Value,
    #[serde(deserialize_with = "lenient")]
    pub parallax_image: Option<Media>,
    pub parallax_title: Value,
    pub settings_title: Value,
    pub settings_description: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Wellness {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<Value>,
    pub title: Value,
    pub subtitle: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorporateService {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    pub description: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorporatePage {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    pub intro_title: Value,
    pub intro_description: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<String>,
    pub excerpt: Value,
    pub content: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Media,
    pub category: Value,
    pub date: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPage {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    pub intro_title: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingPolicy {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    pub policies: Value,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<Media>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TermsConditions {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    pub content: Value,
    pub sections: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Distance {
    pub destination: Value,
    pub distance: Value,
    pub time: Value,
    pub category: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPage {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Media,
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub connect_image: Media,
    pub connect_title: Value,
    pub map_embed_url: Value,
    #[serde(deserialize_with = "lenient")]
    pub distances: Vec<Distance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OurStory {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    pub subtitle: Value,
    pub main_content: Value,
    pub side_content: Value,
    pub video_url: Value,
    #[serde(deserialize_with = "lenient")]
    pub images: Vec<Media>,
    pub detailed_story_title: Value,
    pub detailed_story: Value,
    pub narrative_title: Value,
    pub narrative_content: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSeo {
    pub title: Value,
    pub description: Value,
    pub keywords: Value,
    pub canonical: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageEntry {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub seo: Option<PageSeo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_metadata_is_dropped() {
        let slide: HeroSlide = serde_json::from_value(json!({
            "id": 3,
            "documentId": "abc",
            "title": "Lake",
            "description": null,
            "image": {
                "url": "/uploads/lake.jpg",
                "alternativeText": "lake",
                "formats": { "thumbnail": { "url": "/uploads/thumb_lake.jpg" } }
            },
            "order": 1,
            "createdAt": "2025-01-01T00:00:00.000Z",
            "publishedAt": "2025-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(slide.id, 3);
        assert_eq!(slide.image, Media::new("/uploads/lake.jpg"));
        assert_eq!(slide.description, Value::Null);
        assert_eq!(slide.document_id, Some(json!("abc")));

        let out = serde_json::to_value(&slide).unwrap();
        assert!(out.get("createdAt").is_none());
        assert!(out["image"].get("formats").is_none());
        // link 缺少時省略，description 缺少時輸出 null
        assert!(out.get("link").is_none());
        assert_eq!(out["description"], Value::Null);
    }

    #[test]
    fn test_null_media_becomes_empty_media() {
        let section: DiningSection =
            serde_json::from_value(json!({ "id": 1, "image": null, "checklistItems": null }))
                .unwrap();
        assert_eq!(section.image, Media::default());
        assert!(!section.image.has_url());
        assert_eq!(section.checklist_items, Value::Null);
    }

    #[test]
    fn test_rich_text_description_passes_through() {
        let blocks = json!([
            { "type": "paragraph", "children": [{ "type": "text", "text": "Ayurvedic massage" }] }
        ]);
        let wellness: Wellness =
            serde_json::from_value(json!({ "id": 2, "description": blocks.clone() })).unwrap();
        assert_eq!(wellness.description, blocks);

        let out = serde_json::to_value(&wellness).unwrap();
        assert_eq!(out["description"], blocks);
    }

    #[test]
    fn test_mistyped_fields_fall_back_to_defaults() {
        let slide: HeroSlide = serde_json::from_value(json!({
            "id": "seven",
            "title": 42,
            "image": "not-an-object",
            "order": "first"
        }))
        .unwrap();

        assert_eq!(slide.id, 0);
        assert_eq!(slide.title, json!(42));
        assert_eq!(slide.image, Media::default());
        assert_eq!(slide.order, None);

        let section: FacilitySection = serde_json::from_value(json!({
            "checklistItems": "pool",
            "checklistColumns": -1,
            "image": { "url": 5 }
        }))
        .unwrap();
        assert!(section.checklist_items.is_empty());
        assert_eq!(section.checklist_columns, 0);
        assert_eq!(section.image, Some(Media::default()));
    }

    #[test]
    fn test_absent_document_id_is_omitted() {
        let item: NavigationItem =
            serde_json::from_value(json!({ "id": 1, "label": "Home" })).unwrap();
        let out = serde_json::to_value(&item).unwrap();
        assert!(out.get("documentId").is_none());
        assert_eq!(out["href"], Value::Null);
    }

    #[test]
    fn test_icon_serializes_as_tagged_union() {
        let icon = Icon::Class("las la-wifi".to_string());
        assert_eq!(
            serde_json::to_value(&icon).unwrap(),
            json!({ "kind": "class", "value": "las la-wifi" })
        );
        assert_eq!(
            serde_json::to_value(Icon::None).unwrap(),
            json!({ "kind": "none" })
        );

        let image: Icon =
            serde_json::from_value(json!({ "kind": "image", "value": { "url": "http://x/a.svg" } }))
                .unwrap();
        assert_eq!(image, Icon::Image(Media::new("http://x/a.svg")));
    }

    #[test]
    fn test_numbered_fields_keep_digits_in_camel_case() {
        let page = WeddingEventsPage {
            intro_description1: json!("one"),
            ..Default::default()
        };
        let out = serde_json::to_value(&page).unwrap();
        assert_eq!(out["introDescription1"], "one");
    }
}
