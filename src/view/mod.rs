//! 頁面 view-model：先顯示內建內容，拿到資料後換成即時內容
//!
//! 每個區塊是一個 [`ViewSlot`]。區塊只會從預設內容切換到即時內容一次，
//! 讀取失敗、逾時或回傳空資料時維持預設內容，不顯示載入中或錯誤狀態。

use crate::core::fixtures;
use crate::core::outcome::Outcome;
use crate::core::resources::{
    AmenityIconsResource, BlogPostsResource, ContentResource, DiningPageResource,
    DiningSectionsResource, FacilitiesPageResource, FacilitySectionsResource, HeroSlidesResource,
    NavigationItemsResource, SiteSettingsResource,
};
use crate::domain::model::*;
use crate::utils::error::Result;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Fallback,
    Live,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewSlot<T> {
    value: T,
    state: SlotState,
}

impl<T> ViewSlot<T> {
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            state: SlotState::Fallback,
        }
    }

    /// 只有 Live 結果會讓區塊切換；回傳是否發生切換
    pub fn settle(&mut self, outcome: Outcome<T>) -> bool {
        if self.state == SlotState::Live {
            return false;
        }
        match outcome {
            Outcome::Live(value) => {
                self.value = value;
                self.state = SlotState::Live;
                true
            }
            Outcome::Empty | Outcome::Unavailable => false,
        }
    }

    pub fn current(&self) -> &T {
        &self.value
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state == SlotState::Live
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Default> Default for ViewSlot<T> {
    fn default() -> Self {
        Self::fallback(T::default())
    }
}

/// 對本站 `/api/*` 的讀取客戶端
#[derive(Debug, Clone)]
pub struct SiteClient {
    client: Client,
    base: String,
}

impl SiteClient {
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, route: &str) -> Option<T> {
        let url = format!("{}/api/{}", self.base, route);
        let response = match self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("⚠️ [{}] keeping defaults: {}", route, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("⚠️ [{}] keeping defaults: status {}", route, response.status());
            return None;
        }

        match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!("⚠️ [{}] keeping defaults: {}", route, e);
                None
            }
        }
    }

    pub async fn fetch_list<T: DeserializeOwned>(&self, route: &str) -> Outcome<Vec<T>> {
        match self.get::<Vec<T>>(route).await {
            Some(items) => Outcome::from_items(items),
            None => Outcome::Unavailable,
        }
    }

    pub async fn fetch_single<T: DeserializeOwned>(&self, route: &str) -> Outcome<T> {
        match self.get::<Option<T>>(route).await {
            Some(Some(record)) => Outcome::Live(record),
            Some(None) => Outcome::Empty,
            None => Outcome::Unavailable,
        }
    }
}

/// 首頁與共用版面
#[derive(Debug, Clone)]
pub struct HomeView {
    pub hero_slides: ViewSlot<Vec<HeroSlide>>,
    pub navigation: ViewSlot<Vec<NavigationItem>>,
    pub site_settings: ViewSlot<SiteSettings>,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            hero_slides: ViewSlot::fallback(fixtures::hero_slides()),
            navigation: ViewSlot::fallback(fixtures::navigation_items()),
            site_settings: ViewSlot::fallback(fixtures::site_settings()),
        }
    }
}

impl HomeView {
    /// 各區塊同時讀取；丟棄此 future 會一併取消尚未完成的請求
    pub async fn mount(client: &SiteClient) -> Self {
        let mut view = Self::default();

        let (slides, navigation, settings) = tokio::join!(
            client.fetch_list::<HeroSlide>(HeroSlidesResource::ROUTE),
            client.fetch_list::<NavigationItem>(NavigationItemsResource::ROUTE),
            client.fetch_single::<SiteSettings>(SiteSettingsResource::ROUTE),
        );

        view.hero_slides.settle(slides);
        view.navigation.settle(navigation);
        view.site_settings.settle(settings);
        view
    }
}

#[derive(Debug, Clone)]
pub struct DiningView {
    pub page: ViewSlot<DiningPage>,
    pub sections: ViewSlot<Vec<DiningSection>>,
}

impl Default for DiningView {
    fn default() -> Self {
        Self {
            page: ViewSlot::fallback(fixtures::dining_page()),
            sections: ViewSlot::fallback(fixtures::dining_sections()),
        }
    }
}

impl DiningView {
    pub async fn mount(client: &SiteClient) -> Self {
        let mut view = Self::default();

        let (page, sections) = tokio::join!(
            client.fetch_single::<DiningPage>(DiningPageResource::ROUTE),
            client.fetch_list::<DiningSection>(DiningSectionsResource::ROUTE),
        );

        view.page.settle(page);
        view.sections.settle(sections);
        view
    }
}

#[derive(Debug, Clone)]
pub struct FacilitiesView {
    pub page: ViewSlot<FacilitiesPage>,
    pub amenities: ViewSlot<Vec<AmenityIcon>>,
    pub sections: ViewSlot<Vec<FacilitySection>>,
}

impl Default for FacilitiesView {
    fn default() -> Self {
        Self {
            page: ViewSlot::fallback(fixtures::facilities_page()),
            amenities: ViewSlot::fallback(fixtures::amenity_icons()),
            sections: ViewSlot::fallback(fixtures::facility_sections()),
        }
    }
}

impl FacilitiesView {
    pub async fn mount(client: &SiteClient) -> Self {
        let mut view = Self::default();

        let (page, amenities, sections) = tokio::join!(
            client.fetch_single::<FacilitiesPage>(FacilitiesPageResource::ROUTE),
            client.fetch_list::<AmenityIcon>(AmenityIconsResource::ROUTE),
            client.fetch_list::<FacilitySection>(FacilitySectionsResource::ROUTE),
        );

        view.page.settle(page);
        view.amenities.settle(amenities);
        view.sections.settle(sections);
        view
    }
}

#[derive(Debug, Clone)]
pub struct BlogView {
    pub posts: ViewSlot<Vec<BlogPost>>,
}

impl Default for BlogView {
    fn default() -> Self {
        Self {
            posts: ViewSlot::fallback(fixtures::blog_posts()),
        }
    }
}

impl BlogView {
    pub async fn mount(client: &SiteClient) -> Self {
        let mut view = Self::default();
        let posts = client
            .fetch_list::<BlogPost>(BlogPostsResource::ROUTE)
            .await;
        view.posts.settle(posts);
        view
    }
}
