//! 每個 `/api/<route>` 對應的上游集合、查詢方式與正規化規則

use crate::core::fixtures;
use crate::core::media::MediaResolver;
use crate::core::query::{ContentQuery, SortKey};
use crate::domain::model::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const ORDER_ASC: Option<SortKey> = Some(SortKey::asc("order"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    List,
    Singleton,
}

pub trait ContentResource: Send + Sync + 'static {
    /// `/api/` 之後的路徑
    const ROUTE: &'static str;
    /// 上游集合名稱
    const COLLECTION: &'static str;
    const SORT: Option<SortKey> = None;
    const POPULATE: bool = true;
    /// 正規化失敗時回給瀏覽器的訊息
    const FAILURE_MESSAGE: &'static str;

    type Record: DeserializeOwned + Default + Send;
    type Output: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    fn query() -> ContentQuery {
        let mut query = ContentQuery::new(Self::COLLECTION);
        if Self::POPULATE {
            query = query.populate_all();
        }
        if let Some(sort) = Self::SORT {
            query = query.sort(sort);
        }
        query
    }

    fn normalize(record: Self::Record, media: &MediaResolver) -> Self::Output;
}

/// 無資料時回傳 `[]`
pub trait ListResource: ContentResource {
    fn fallback() -> Vec<Self::Output> {
        Vec::new()
    }
}

/// 無資料時回傳 `null`
pub trait SingletonResource: ContentResource {
    fn fallback() -> Option<Self::Output> {
        None
    }
}

/// 供 probe 與日誌使用的靜態描述
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub route: &'static str,
    pub collection: &'static str,
    pub kind: ResourceKind,
    pub query: ContentQuery,
}

impl CatalogEntry {
    pub fn list<R: ListResource>() -> Self {
        Self {
            route: R::ROUTE,
            collection: R::COLLECTION,
            kind: ResourceKind::List,
            query: R::query(),
        }
    }

    pub fn singleton<R: SingletonResource>() -> Self {
        Self {
            route: R::ROUTE,
            collection: R::COLLECTION,
            kind: ResourceKind::Singleton,
            query: R::query(),
        }
    }
}

pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::list::<HeroSlidesResource>(),
        CatalogEntry::list::<NavigationItemsResource>(),
        CatalogEntry::singleton::<SiteSettingsResource>(),
        CatalogEntry::list::<RoomsSuitesResource>(),
        CatalogEntry::singleton::<RoomsPageResource>(),
        CatalogEntry::list::<DiningResource>(),
        CatalogEntry::list::<DiningSectionsResource>(),
        CatalogEntry::singleton::<DiningPageResource>(),
        CatalogEntry::list::<ExperiencesResource>(),
        CatalogEntry::singleton::<ExperiencesPageResource>(),
        CatalogEntry::list::<FacilitiesResource>(),
        CatalogEntry::singleton::<FacilitiesPageResource>(),
        CatalogEntry::list::<FacilitySectionsResource>(),
        CatalogEntry::list::<AmenityIconsResource>(),
        CatalogEntry::list::<GalleriesResource>(),
        CatalogEntry::singleton::<GalleryPageResource>(),
        CatalogEntry::list::<WeddingEventsResource>(),
        CatalogEntry::singleton::<WeddingEventsPageResource>(),
        CatalogEntry::list::<WellnessResource>(),
        CatalogEntry::list::<CorporateServicesResource>(),
        CatalogEntry::singleton::<CorporatePageResource>(),
        CatalogEntry::list::<BlogPostsResource>(),
        CatalogEntry::singleton::<BlogPageResource>(),
        CatalogEntry::singleton::<BookingPolicyResource>(),
        CatalogEntry::singleton::<TermsConditionsResource>(),
        CatalogEntry::singleton::<ContactPageResource>(),
        CatalogEntry::singleton::<OurStoryResource>(),
        CatalogEntry::list::<PagesResource>(),
    ]
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ── Home / layout ──

pub struct HeroSlidesResource;

impl ContentResource for HeroSlidesResource {
    const ROUTE: &'static str = "hero-slides";
    const COLLECTION: &'static str = "hero-slides";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load hero slides";

    type Record = HeroSlide;
    type Output = HeroSlide;

    fn normalize(mut record: HeroSlide, media: &MediaResolver) -> HeroSlide {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for HeroSlidesResource {
    fn fallback() -> Vec<HeroSlide> {
        fixtures::hero_slides()
    }
}

pub struct NavigationItemsResource;

impl ContentResource for NavigationItemsResource {
    const ROUTE: &'static str = "navigation-items";
    const COLLECTION: &'static str = "navigation-items";
    const SORT: Option<SortKey> = ORDER_ASC;
    const POPULATE: bool = false;
    const FAILURE_MESSAGE: &'static str = "Failed to load navigation items";

    type Record = NavigationItem;
    type Output = NavigationItem;

    fn normalize(record: NavigationItem, _media: &MediaResolver) -> NavigationItem {
        record
    }
}

impl ListResource for NavigationItemsResource {
    fn fallback() -> Vec<NavigationItem> {
        fixtures::navigation_items()
    }
}

/// 電話號碼可能是逗號分隔字串或陣列
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhoneNumbers {
    Joined(String),
    List(Vec<String>),
}

impl PhoneNumbers {
    pub fn into_list(self) -> Vec<String> {
        match self {
            PhoneNumbers::Joined(joined) => joined
                .split(',')
                .map(|p| p.trim().to_string())
                .collect(),
            PhoneNumbers::List(list) => list,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteSettingsRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub document_id: Option<Value>,
    pub site_name: Value,
    pub site_tagline: Value,
    pub book_now_url: Option<Value>,
    pub whatsapp_number: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub logo: Option<Media>,
    /// 缺少、`null` 或無法辨識時輸出 `[]`
    #[serde(deserialize_with = "lenient")]
    pub phone_numbers: Option<PhoneNumbers>,
    pub address: Value,
    pub email: Value,
    pub social_links: Value,
}

pub struct SiteSettingsResource;

impl ContentResource for SiteSettingsResource {
    const ROUTE: &'static str = "site-settings";
    const COLLECTION: &'static str = "site-setting";
    const FAILURE_MESSAGE: &'static str = "Failed to load site settings";

    type Record = SiteSettingsRecord;
    type Output = SiteSettings;

    fn normalize(record: SiteSettingsRecord, media: &MediaResolver) -> SiteSettings {
        SiteSettings {
            id: record.id,
            document_id: record.document_id,
            site_name: record.site_name,
            site_tagline: record.site_tagline,
            book_now_url: record.book_now_url,
            whatsapp_number: record.whatsapp_number,
            logo: media.resolve_optional(record.logo),
            phone_numbers: record
                .phone_numbers
                .map(PhoneNumbers::into_list)
                .unwrap_or_default(),
            address: record.address,
            email: record.email,
            social_links: record.social_links,
        }
    }
}

impl SingletonResource for SiteSettingsResource {
    fn fallback() -> Option<SiteSettings> {
        Some(fixtures::site_settings())
    }
}

// ── Rooms ──

/// `?type=` 對應的顯示位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPlacement {
    Hero,
    Room,
}

impl RoomPlacement {
    /// 未知的值不做過濾
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hero" => Some(RoomPlacement::Hero),
            "room" => Some(RoomPlacement::Room),
            _ => None,
        }
    }

    pub fn admits(&self, display_in: &str) -> bool {
        match self {
            RoomPlacement::Hero => display_in == "hero" || display_in == "both",
            RoomPlacement::Room => display_in == "room" || display_in == "both",
        }
    }
}

pub struct RoomsSuitesResource;

impl ContentResource for RoomsSuitesResource {
    const ROUTE: &'static str = "rooms-suites";
    const COLLECTION: &'static str = "rooms-suites";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load rooms and suites";

    type Record = RoomSuite;
    type Output = RoomSuite;

    fn normalize(mut record: RoomSuite, media: &MediaResolver) -> RoomSuite {
        record.image = media.resolve_media(record.image);
        record.gallery = record.gallery.map(|gallery| {
            gallery
                .into_iter()
                .map(|m| media.resolve_media(m))
                .collect()
        });
        if record.display_in.is_empty() {
            record.display_in = "both".to_string();
        }
        record
    }
}

impl ListResource for RoomsSuitesResource {}

pub const ROOMS_HERO_TITLE: &str = "Rooms & Suites";
pub const ROOMS_HERO_SUBTITLE: &str =
    "Experience premium comfort in stays designed to feel calm, spacious, and welcoming.";
pub const ROOMS_SECTION_TITLE: &str = "Thoughtfully Designed Stays by the Lake";
pub const ROOMS_SECTION_SUBTITLE: &str = "Wake up to open skies, spend evenings watching the lake change colours, and rest in spaces designed for unhurried living.";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomsPageRecord {
    #[serde(deserialize_with = "lenient")]
    pub hero_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hero_subtitle: Option<String>,
    pub hero_images: Value,
    #[serde(deserialize_with = "lenient")]
    pub section_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub section_subtitle: Option<String>,
}

pub struct RoomsPageResource;

impl ContentResource for RoomsPageResource {
    const ROUTE: &'static str = "rooms-page";
    const COLLECTION: &'static str = "rooms-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load rooms page settings";

    type Record = RoomsPageRecord;
    type Output = RoomsPage;

    fn normalize(record: RoomsPageRecord, media: &MediaResolver) -> RoomsPage {
        // 只接受陣列，其他形狀視為沒有圖片
        let hero_images = match record.hero_images {
            Value::Array(images) => images
                .iter()
                .filter_map(|img| img.get("url").and_then(Value::as_str))
                .filter_map(|url| media.resolve(url))
                .collect(),
            _ => Vec::new(),
        };

        RoomsPage {
            hero_title: non_empty(record.hero_title)
                .unwrap_or_else(|| ROOMS_HERO_TITLE.to_string()),
            hero_subtitle: non_empty(record.hero_subtitle)
                .unwrap_or_else(|| ROOMS_HERO_SUBTITLE.to_string()),
            hero_images,
            section_title: non_empty(record.section_title)
                .unwrap_or_else(|| ROOMS_SECTION_TITLE.to_string()),
            section_subtitle: non_empty(record.section_subtitle)
                .unwrap_or_else(|| ROOMS_SECTION_SUBTITLE.to_string()),
        }
    }
}

impl SingletonResource for RoomsPageResource {}

// ── Dining ──

pub struct DiningResource;

impl ContentResource for DiningResource {
    const ROUTE: &'static str = "dining";
    const COLLECTION: &'static str = "dinings";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load dining";

    type Record = Dining;
    type Output = Dining;

    fn normalize(mut record: Dining, media: &MediaResolver) -> Dining {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for DiningResource {}

pub struct DiningSectionsResource;

impl ContentResource for DiningSectionsResource {
    const ROUTE: &'static str = "dining-sections";
    const COLLECTION: &'static str = "dining-sections";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load dining sections";

    type Record = DiningSection;
    type Output = DiningSection;

    fn normalize(mut record: DiningSection, media: &MediaResolver) -> DiningSection {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for DiningSectionsResource {
    fn fallback() -> Vec<DiningSection> {
        fixtures::dining_sections()
    }
}

pub struct DiningPageResource;

impl ContentResource for DiningPageResource {
    const ROUTE: &'static str = "dining-page";
    const COLLECTION: &'static str = "dining-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load dining page";

    type Record = DiningPage;
    type Output = DiningPage;

    fn normalize(mut record: DiningPage, media: &MediaResolver) -> DiningPage {
        record.hero_image = media.resolve_optional(record.hero_image);
        record
    }
}

impl SingletonResource for DiningPageResource {
    fn fallback() -> Option<DiningPage> {
        Some(fixtures::dining_page())
    }
}

// ── Experiences ──

pub struct ExperiencesResource;

impl ContentResource for ExperiencesResource {
    const ROUTE: &'static str = "experiences";
    const COLLECTION: &'static str = "experiences";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load experiences";

    type Record = Experience;
    type Output = Experience;

    fn normalize(mut record: Experience, media: &MediaResolver) -> Experience {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for ExperiencesResource {}

pub struct ExperiencesPageResource;

impl ContentResource for ExperiencesPageResource {
    const ROUTE: &'static str = "experiences-page";
    const COLLECTION: &'static str = "experiences-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load experiences page data";

    type Record = ExperiencesPage;
    type Output = ExperiencesPage;

    fn normalize(mut record: ExperiencesPage, media: &MediaResolver) -> ExperiencesPage {
        record.hero_image = media.resolve_optional(record.hero_image);
        record
    }
}

impl SingletonResource for ExperiencesPageResource {}

// ── Facilities ──

pub struct FacilitiesResource;

impl ContentResource for FacilitiesResource {
    const ROUTE: &'static str = "facilities";
    const COLLECTION: &'static str = "facilities";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load facilities";

    type Record = Facility;
    type Output = Facility;

    fn normalize(mut record: Facility, media: &MediaResolver) -> Facility {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for FacilitiesResource {}

pub struct FacilitiesPageResource;

impl ContentResource for FacilitiesPageResource {
    const ROUTE: &'static str = "facilities-page";
    const COLLECTION: &'static str = "facilities-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load facilities page";

    type Record = FacilitiesPage;
    type Output = FacilitiesPage;

    fn normalize(mut record: FacilitiesPage, media: &MediaResolver) -> FacilitiesPage {
        record.hero_image = media.resolve_optional(record.hero_image);
        record
    }
}

impl SingletonResource for FacilitiesPageResource {
    fn fallback() -> Option<FacilitiesPage> {
        Some(fixtures::facilities_page())
    }
}

pub struct FacilitySectionsResource;

impl ContentResource for FacilitySectionsResource {
    const ROUTE: &'static str = "facility-sections";
    const COLLECTION: &'static str = "facility-sections";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load facility sections";

    type Record = FacilitySection;
    type Output = FacilitySection;

    fn normalize(mut record: FacilitySection, media: &MediaResolver) -> FacilitySection {
        record.image = media.resolve_optional(record.image);
        if record.image_position.is_empty() {
            record.image_position = "left".to_string();
        }
        if record.checklist_columns == 0 {
            record.checklist_columns = 1;
        }
        record
    }
}

impl ListResource for FacilitySectionsResource {
    fn fallback() -> Vec<FacilitySection> {
        fixtures::facility_sections()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmenityIconRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub name: Value,
    #[serde(deserialize_with = "lenient")]
    pub icon_class: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub svg_icon: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub icon_image: Option<Media>,
    #[serde(deserialize_with = "lenient")]
    pub order: Option<i64>,
}

/// class 優先，其次 SVG path，最後才是圖片
pub fn resolve_icon(
    icon_class: Option<String>,
    svg_icon: Option<String>,
    icon_image: Option<Media>,
    media: &MediaResolver,
) -> Icon {
    if let Some(class) = non_empty(icon_class) {
        return Icon::Class(class);
    }
    if let Some(path) = non_empty(svg_icon) {
        return Icon::Path(path);
    }
    match media.resolve_optional(icon_image) {
        Some(image) => Icon::Image(image),
        None => Icon::None,
    }
}

pub struct AmenityIconsResource;

impl ContentResource for AmenityIconsResource {
    const ROUTE: &'static str = "amenity-icons";
    const COLLECTION: &'static str = "amenity-icons";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load amenity icons";

    type Record = AmenityIconRecord;
    type Output = AmenityIcon;

    fn normalize(record: AmenityIconRecord, media: &MediaResolver) -> AmenityIcon {
        AmenityIcon {
            id: record.id,
            name: record.name,
            icon: resolve_icon(
                record.icon_class,
                record.svg_icon,
                record.icon_image,
                media,
            ),
            order: record.order,
        }
    }
}

impl ListResource for AmenityIconsResource {
    fn fallback() -> Vec<AmenityIcon> {
        fixtures::amenity_icons()
    }
}

// ── Gallery ──

pub struct GalleriesResource;

impl ContentResource for GalleriesResource {
    const ROUTE: &'static str = "galleries";
    const COLLECTION: &'static str = "galleries";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load gallery items";

    type Record = GalleryItem;
    type Output = GalleryItem;

    fn normalize(mut record: GalleryItem, media: &MediaResolver) -> GalleryItem {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for GalleriesResource {}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryPageRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub hero_title: Value,
    pub hero_subtitle: Value,
    #[serde(deserialize_with = "lenient")]
    pub hero_image: Option<Media>,
    pub seo_title: Value,
    pub seo_description: Value,
}

pub struct GalleryPageResource;

impl ContentResource for GalleryPageResource {
    const ROUTE: &'static str = "gallery-page";
    const COLLECTION: &'static str = "gallery-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load gallery page data";

    type Record = GalleryPageRecord;
    type Output = GalleryPage;

    fn normalize(record: GalleryPageRecord, media: &MediaResolver) -> GalleryPage {
        GalleryPage {
            id: record.id,
            hero_title: record.hero_title,
            hero_subtitle: record.hero_subtitle,
            hero_image: media.resolve_optional(record.hero_image),
            seo: SeoSummary {
                title: record.seo_title,
                description: record.seo_description,
            },
        }
    }
}

impl SingletonResource for GalleryPageResource {}

// ── Weddings & wellness ──

pub struct WeddingEventsResource;

impl ContentResource for WeddingEventsResource {
    const ROUTE: &'static str = "wedding-events";
    const COLLECTION: &'static str = "wedding-events";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load wedding events";

    type Record = WeddingEvent;
    type Output = WeddingEvent;

    fn normalize(mut record: WeddingEvent, media: &MediaResolver) -> WeddingEvent {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for WeddingEventsResource {}

pub struct WeddingEventsPageResource;

impl ContentResource for WeddingEventsPageResource {
    const ROUTE: &'static str = "wedding-events-page";
    const COLLECTION: &'static str = "wedding-events-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load wedding events page data";

    type Record = WeddingEventsPage;
    type Output = WeddingEventsPage;

    fn normalize(mut record: WeddingEventsPage, media: &MediaResolver) -> WeddingEventsPage {
        record.hero_image = media.resolve_optional(record.hero_image);
        record.parallax_image = media.resolve_optional(record.parallax_image);
        record
    }
}

impl SingletonResource for WeddingEventsPageResource {}

pub struct WellnessResource;

impl ContentResource for WellnessResource {
    const ROUTE: &'static str = "wellness";
    const COLLECTION: &'static str = "wellnesses";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load wellness";

    type Record = Wellness;
    type Output = Wellness;

    fn normalize(mut record: Wellness, media: &MediaResolver) -> Wellness {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for WellnessResource {}

// ── Corporate ──

pub struct CorporateServicesResource;

impl ContentResource for CorporateServicesResource {
    const ROUTE: &'static str = "corporate-services";
    const COLLECTION: &'static str = "corporate-services";
    const SORT: Option<SortKey> = ORDER_ASC;
    const FAILURE_MESSAGE: &'static str = "Failed to load corporate services";

    type Record = CorporateService;
    type Output = CorporateService;

    fn normalize(mut record: CorporateService, media: &MediaResolver) -> CorporateService {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for CorporateServicesResource {}

pub struct CorporatePageResource;

impl ContentResource for CorporatePageResource {
    const ROUTE: &'static str = "corporate-page";
    const COLLECTION: &'static str = "corporate-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load corporate page";

    type Record = CorporatePage;
    type Output = CorporatePage;

    fn normalize(mut record: CorporatePage, media: &MediaResolver) -> CorporatePage {
        record.hero_image = media.resolve_optional(record.hero_image);
        record
    }
}

impl SingletonResource for CorporatePageResource {}

// ── Blog ──

pub struct BlogPostsResource;

impl ContentResource for BlogPostsResource {
    const ROUTE: &'static str = "blog-posts";
    const COLLECTION: &'static str = "blog-posts";
    const SORT: Option<SortKey> = Some(SortKey::desc("date"));
    const FAILURE_MESSAGE: &'static str = "Failed to load blog posts";

    type Record = BlogPost;
    type Output = BlogPost;

    fn normalize(mut record: BlogPost, media: &MediaResolver) -> BlogPost {
        record.image = media.resolve_media(record.image);
        record
    }
}

impl ListResource for BlogPostsResource {
    fn fallback() -> Vec<BlogPost> {
        fixtures::blog_posts()
    }
}

impl BlogPostsResource {
    /// 依 slug 查單篇，不排序
    pub fn by_slug(slug: &str) -> ContentQuery {
        Self::query().without_sort().filter_eq("slug", slug)
    }
}

pub struct BlogPageResource;

impl ContentResource for BlogPageResource {
    const ROUTE: &'static str = "blog-page";
    const COLLECTION: &'static str = "blog-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load blog page";

    type Record = BlogPage;
    type Output = BlogPage;

    fn normalize(mut record: BlogPage, media: &MediaResolver) -> BlogPage {
        record.hero_image = media.resolve_optional(record.hero_image);
        record
    }
}

impl SingletonResource for BlogPageResource {}

// ── Policies & pages ──

pub struct BookingPolicyResource;

impl ContentResource for BookingPolicyResource {
    const ROUTE: &'static str = "booking-policy";
    const COLLECTION: &'static str = "booking-policy-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load booking policy";

    type Record = BookingPolicy;
    type Output = BookingPolicy;

    fn normalize(mut record: BookingPolicy, media: &MediaResolver) -> BookingPolicy {
        record.image = media.resolve_optional(record.image);
        record
    }
}

impl SingletonResource for BookingPolicyResource {}

pub struct TermsConditionsResource;

impl ContentResource for TermsConditionsResource {
    const ROUTE: &'static str = "terms-conditions";
    const COLLECTION: &'static str = "terms-conditions-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load terms & conditions";

    type Record = TermsConditions;
    type Output = TermsConditions;

    fn normalize(record: TermsConditions, _media: &MediaResolver) -> TermsConditions {
        record
    }
}

impl SingletonResource for TermsConditionsResource {}

pub struct ContactPageResource;

impl ContentResource for ContactPageResource {
    const ROUTE: &'static str = "contact-page";
    const COLLECTION: &'static str = "contact-page";
    const FAILURE_MESSAGE: &'static str = "Failed to load contact page";

    type Record = ContactPage;
    type Output = ContactPage;

    fn normalize(mut record: ContactPage, media: &MediaResolver) -> ContactPage {
        record.hero_image = media.resolve_media(record.hero_image);
        record.connect_image = media.resolve_media(record.connect_image);
        record
    }
}

impl SingletonResource for ContactPageResource {}

pub struct OurStoryResource;

impl ContentResource for OurStoryResource {
    const ROUTE: &'static str = "our-story";
    const COLLECTION: &'static str = "our-story";
    const FAILURE_MESSAGE: &'static str = "Failed to load our story";

    type Record = OurStory;
    type Output = OurStory;

    fn normalize(mut record: OurStory, media: &MediaResolver) -> OurStory {
        record.images = media.resolve_all(record.images);
        record
    }
}

impl SingletonResource for OurStoryResource {}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoComponentRecord {
    pub meta_title: Value,
    pub meta_description: Value,
    pub keywords: Value,
    #[serde(rename = "canonicalURL")]
    pub canonical_url: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: Value,
    #[serde(deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub seo: Option<SeoComponentRecord>,
}

pub struct PagesResource;

impl ContentResource for PagesResource {
    const ROUTE: &'static str = "pages";
    const COLLECTION: &'static str = "pages";
    const FAILURE_MESSAGE: &'static str = "Failed to load page data";

    type Record = PageRecord;
    type Output = PageEntry;

    fn normalize(record: PageRecord, _media: &MediaResolver) -> PageEntry {
        PageEntry {
            id: record.id,
            title: record.title,
            slug: record.slug,
            seo: record.seo.map(|seo| PageSeo {
                title: seo.meta_title,
                description: seo.meta_description,
                keywords: seo.keywords,
                canonical: seo.canonical_url,
            }),
        }
    }
}

impl ListResource for PagesResource {}

impl PagesResource {
    pub fn by_slug(slug: &str) -> ContentQuery {
        Self::query().filter_eq("slug", slug)
    }
}
