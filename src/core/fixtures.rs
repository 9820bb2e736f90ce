//! 內建的預設內容
//!
//! 前端 view 在載入前先顯示這些資料；proxy 開啟 `serve_fallbacks` 時，
//! 上游沒有資料的路由也會改回傳這裡的內容。

use crate::domain::model::{
    AmenityIcon, BlogPost, DiningPage, DiningSection, FacilitiesPage, FacilitySection, HeroSlide,
    Icon, Media, NavigationItem, SiteSettings,
};
use serde_json::Value;

pub const DEFAULT_LOGO_URL: &str =
    "https://malankarapalace.com/wp-content/uploads/2026/01/Malankara-final-logo-scaled.png";

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

fn unsplash(photo: &str, width: u32) -> Media {
    Media::new(format!(
        "https://images.unsplash.com/{}?q=80&w={}&auto=format&fit=crop",
        photo, width
    ))
}

fn items(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            id: 1,
            title: text("A Tranquil Lakeside Escape at Malankara Palace"),
            description: text(
                "Wake up to calm waters, gentle breezes, and unforgettable moments by Malankara Dam.",
            ),
            image: Media::new("/images/hero-1.jpg"),
            order: Some(0),
            ..Default::default()
        },
        HeroSlide {
            id: 2,
            title: text("Luxury Redefined"),
            description: text(
                "Experience world-class amenities and impeccable service in the heart of nature.",
            ),
            image: Media::new("/images/hero-2.jpg"),
            order: Some(1),
            ..Default::default()
        },
    ]
}

pub fn navigation_items() -> Vec<NavigationItem> {
    [
        ("Home", "/"),
        ("Rooms & Suites", "/rooms"),
        ("Facilities", "/facilities"),
        ("Dining", "/dining"),
        ("Experiences", "/experiences"),
        ("Wedding & Events", "/wedding-events"),
        ("Gallery", "/gallery"),
        ("Our Story", "/our-story"),
        ("Contact Us", "/contact"),
    ]
    .iter()
    .enumerate()
    .map(|(index, (label, href))| NavigationItem {
        id: index as i64 + 1,
        document_id: None,
        label: text(label),
        href: text(href),
        order: Some(index as i64),
        is_active: Some(index == 0),
    })
    .collect()
}

pub fn site_settings() -> SiteSettings {
    SiteSettings {
        id: 1,
        site_name: text("Malankara Palace"),
        site_tagline: text("LAKE VIEW RESORT & SPA"),
        whatsapp_number: Some(text("+917510200444")),
        logo: Some(Media::new(DEFAULT_LOGO_URL)),
        phone_numbers: items(&["04862 204400", "+91 75102 00444", "+91 80862 00404"]),
        social_links: Value::Null,
        ..Default::default()
    }
}

pub fn dining_page() -> DiningPage {
    DiningPage {
        hero_title: text("Where Taste Meets Tranquility"),
        hero_subtitle: text("Savour curated flavours in calm, view-filled dining spaces."),
        hero_image: Some(unsplash("photo-1559339352-11d035aa65de", 2574)),
        intro_title: text("Dining by the Lake"),
        intro_description: text(
            "Dining here is designed to be more than just a meal. It is an experience shaped by setting, mood, and flavour. With scenic views, relaxed seating, and thoughtfully prepared dishes, every dining moment is meant to be enjoyed slowly. From casual meals to curated celebration dinners, the atmosphere blends comfort with quiet elegance.",
        ),
    }
}

fn dining_section(
    id: i64,
    title: &str,
    description1: &str,
    description2: Option<&str>,
    image: Media,
    position: &str,
    checklist: &[&str],
) -> DiningSection {
    DiningSection {
        id,
        title: text(title),
        description1: text(description1),
        description2: description2.map(text).unwrap_or_default(),
        image,
        image_position: text(position),
        checklist_items: Value::from(items(checklist)),
        order: Some(id),
    }
}

pub fn dining_sections() -> Vec<DiningSection> {
    vec![
        dining_section(
            1,
            "Multi-Cuisine Restaurant",
            "Our multi-cuisine restaurant offers a diverse selection of dishes prepared with care and balanced flavours. The menu brings together regional favourites, Indian classics, and popular international selections to suit varied tastes and preferences.",
            Some("Whether it is a relaxed breakfast, a leisurely lunch, or a refined dinner, the dining space is designed to feel open, comfortable, and welcoming."),
            unsplash("photo-1517248135467-4c7edcad34c4", 2070),
            "right",
            &[
                "Multi-cuisine menu",
                "Freshly prepared dishes",
                "Regional and Indian specialities",
                "Family-friendly dining environment",
            ],
        ),
        dining_section(
            2,
            "Poolside Dining Experience",
            "Enjoy meals in a relaxed open setting beside the pool, where fresh air and scenic surroundings add to the experience. Poolside dining is ideal for slow evenings, small gatherings, and informal celebration meals.",
            Some("The setting works especially well for sunset hours and post-evening relaxation."),
            unsplash("photo-1572331165267-854da2b00ca1", 2070),
            "left",
            &[
                "Open-air dining ambience",
                "Ideal for evening meals",
                "Suitable for small groups",
                "Scenic and relaxed setting",
            ],
        ),
        dining_section(
            3,
            "Candle Light Dining",
            "For special moments and intimate occasions, candle light dining experiences can be arranged in select scenic locations within the property. Soft lighting, curated menus, and personalised setup create a warm and comprehensive atmosphere.",
            Some("Ideal for couples, anniversaries, and celebration evenings."),
            unsplash("photo-1592861956120-e524fc739696", 2070),
            "right",
            &[
                "Romantic private setups",
                "Curated dining menus",
                "Scenic seating locations",
                "Advance request required",
            ],
        ),
        dining_section(
            4,
            "Live Barbecue Experience",
            "Live barbecue setups add a lively and interactive element to your dining experience. Freshly grilled selections prepared on-site create a casual and engaging food atmosphere for evenings and group gatherings.",
            None,
            unsplash("photo-1555939594-58d7cb561ad1", 2070),
            "left",
            &[
                "Live grill stations",
                "Barbecue evenings",
                "Group-friendly format",
                "Available on request / select days",
            ],
        ),
        dining_section(
            5,
            "Coffee Shop & Reading Corner",
            "A relaxed coffee space with a quiet reading corner offers a calm setting for light bites and beverages. Ideal for slow mornings, afternoon breaks, or peaceful evening time with a book.",
            None,
            unsplash("photo-1509042239860-f550ce710b93", 2070),
            "right",
            &[
                "Coffee and beverages",
                "Light snacks",
                "Library & reading corner",
                "Quiet indoor ambience",
            ],
        ),
        dining_section(
            6,
            "In-Room Dining",
            "Guests can enjoy select menu items in the comfort and privacy of their rooms. In-room dining is available based on menu and operational hours.",
            None,
            unsplash("photo-1582719508461-905c673771fd", 2025),
            "left",
            &[
                "Room service dining",
                "Comfort and privacy",
                "Available as per menu & timing",
            ],
        ),
        dining_section(
            7,
            "Dining for Celebrations",
            "Special dining arrangements can be created for celebrations, private gatherings, and event groups. Menus and formats can be customised based on the occasion and guest preferences.",
            None,
            unsplash("photo-1519167758481-83f550bb49b3", 2098),
            "right",
            &[
                "Celebration menus",
                "Group dining setups",
                "Event catering support",
                "Custom menu planning",
            ],
        ),
    ]
}

pub fn facilities_page() -> FacilitiesPage {
    FacilitiesPage {
        hero_title: text("Resort Facilities"),
        hero_subtitle: text(
            "Everything you need for a comfortable, connected, and relaxing stay by the lake.",
        ),
        hero_image: None,
        amenities_section_title: text("Comfort, Convenience & Infrastructure"),
        amenities_section_description: text(
            "Our facilities are designed to make every stay smooth, comfortable, and well-supported. From essential guest services to leisure infrastructure and family-friendly spaces, each facility is planned to enhance your time by the lake while keeping the experience relaxed and effortless.",
        ),
        seo_title: Value::Null,
        seo_description: Value::Null,
    }
}

pub fn amenity_icons() -> Vec<AmenityIcon> {
    [
        ("High-Speed Wi-Fi", "las la-wifi"),
        ("Large Infinity Pool", "las la-swimming-pool"),
        ("Multi-Cuisine Restaurant", "las la-utensils"),
        ("24/7 Front Desk", "las la-concierge-bell"),
        ("Free Parking", "las la-parking"),
        ("BBQ", "las la-fire"),
        ("Room Service", "las la-concierge-bell"),
        ("Indoor & Outdoor Games Lounge", "las la-gamepad"),
        ("Laundry Services", "las la-tshirt"),
        ("Banquet Hall", "las la-glass-cheers"),
    ]
    .iter()
    .enumerate()
    .map(|(index, (name, class))| AmenityIcon {
        id: index as i64 + 1,
        name: text(name),
        icon: Icon::Class(class.to_string()),
        order: Some(index as i64 + 1),
    })
    .collect()
}

pub fn facility_sections() -> Vec<FacilitySection> {
    vec![
        FacilitySection {
            id: 1,
            title: text("Pool & Leisure Spaces"),
            description: text("Open water and relaxation zones designed for calm leisure, family time, and scenic unwinding throughout the day."),
            image: Some(unsplash("photo-1572331165267-854da2b00ca1", 2070)),
            image_position: "left".to_string(),
            checklist_items: items(&[
                "Infinity-style large pool",
                "Kids pool",
                "Poolside loungers",
                "Relaxation deck",
                "Sunset sit-outs",
            ]),
            checklist_columns: 1,
            order: Some(1),
        },
        FacilitySection {
            id: 2,
            title: text("Guest Services & Stay Support"),
            description: text("Core hospitality services that ensure a smooth, comfortable, and well-supported stay from arrival to departure."),
            image: Some(unsplash("photo-1566073771259-6a8506099945", 2070)),
            image_position: "right".to_string(),
            checklist_items: items(&[
                "24-hour front desk",
                "Housekeeping",
                "Room service",
                "Laundry service",
                "Travel desk",
                "Luggage assistance",
                "Doctor on call",
            ]),
            checklist_columns: 2,
            order: Some(2),
        },
        FacilitySection {
            id: 3,
            title: text("Recreation & Family Facilities"),
            description: text("Dedicated indoor and outdoor spaces for recreation, family time, and relaxed engagement."),
            image: Some(unsplash("photo-1596707328639-5a1d7f4ce9d3", 2070)),
            image_position: "left".to_string(),
            checklist_items: items(&[
                "Indoor games area",
                "Snooker & football",
                "Carrom & Chess",
                "Badminton court",
                "Kids play area",
                "Open activity spaces",
            ]),
            checklist_columns: 2,
            order: Some(3),
        },
    ]
}

pub fn blog_posts() -> Vec<BlogPost> {
    [
        (
            "Malankara Dam: History, Location & Why It's a Hidden Gem of Idukki",
            "photo-1590424560120-e2213759954d",
            2070,
            "Destination",
            "June 20, 2024",
            "malankara-dam-history",
        ),
        (
            "Illickal Kallu in Kerala: A Scenic Escape in the High Range",
            "photo-1605153282210-9092822d3e0b",
            2070,
            "Adventure",
            "July 05, 2024",
            "illickal-kallu-scenic-escape",
        ),
        (
            "Vayanakkavu Temple, Kudayathoor: A Scenic Walk of Faith by the Malankara Reservoir",
            "photo-1544984243-ec57ea16fe25",
            2574,
            "Culture",
            "August 12, 2024",
            "vayanakkavu-temple-walk",
        ),
        (
            "Ilaveezhapoonchira: A Vast Open Valley Above the Clouds",
            "photo-1506744038136-46273834b3fb",
            2070,
            "Nature",
            "September 05, 2024",
            "ilaveezhapoonchira-open-valley",
        ),
    ]
    .iter()
    .enumerate()
    .map(|(index, (title, photo, width, category, date, slug))| BlogPost {
        id: index as i64 + 1,
        title: text(title),
        slug: Some(slug.to_string()),
        excerpt: text(""),
        content: Value::Null,
        image: unsplash(photo, *width),
        category: text(category),
        date: text(date),
    })
    .collect()
}

pub fn blog_post(slug: &str) -> Option<BlogPost> {
    blog_posts()
        .into_iter()
        .find(|post| post.slug.as_deref() == Some(slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dining_has_seven_sections_in_order() {
        let sections = dining_sections();
        assert_eq!(sections.len(), 7);
        let orders: Vec<i64> = sections.iter().filter_map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(sections.iter().all(|s| s.image.has_url()));
    }

    #[test]
    fn test_amenity_icons_use_class_icons() {
        let icons = amenity_icons();
        assert_eq!(icons.len(), 10);
        assert!(icons.iter().all(|i| matches!(i.icon, Icon::Class(_))));
    }

    #[test]
    fn test_navigation_marks_only_home_active() {
        let nav = navigation_items();
        assert_eq!(nav.len(), 9);
        assert_eq!(nav[0].href, "/");
        assert_eq!(nav.iter().filter(|n| n.is_active == Some(true)).count(), 1);
    }

    #[test]
    fn test_blog_post_lookup_by_slug() {
        assert!(blog_post("illickal-kallu-scenic-escape").is_some());
        assert!(blog_post("does-not-exist").is_none());
    }

    #[test]
    fn test_site_settings_phone_numbers() {
        assert_eq!(site_settings().phone_numbers.len(), 3);
    }
}
