use crate::core::media::MediaResolver;
use crate::core::outcome::{Fetched, Outcome};
use crate::core::query::ContentQuery;
use crate::core::resources::{ContentResource, ListResource, SingletonResource};
use crate::core::strapi::StrapiClient;
use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::utils::error::{ContentError, Result};
use serde_json::Value;
use std::sync::Arc;

/// 讀取 + 正規化；上游失敗在這裡被吸收，只有 list 路由拿到非陣列資料會往外傳
#[derive(Clone)]
pub struct ContentService {
    source: Arc<dyn ContentSource>,
    media: MediaResolver,
    serve_fallbacks: bool,
}

impl ContentService {
    pub fn new(source: Arc<dyn ContentSource>, media: MediaResolver) -> Self {
        Self {
            source,
            media,
            serve_fallbacks: false,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let client = StrapiClient::new(config)?;
        let media = MediaResolver::new(client.origin());
        Ok(Self::new(Arc::new(client), media).with_fallbacks(config.serve_fallbacks()))
    }

    /// 離線模式：沒有資料時改回傳內建的預設內容
    pub fn with_fallbacks(mut self, enabled: bool) -> Self {
        self.serve_fallbacks = enabled;
        self
    }

    pub fn serves_fallbacks(&self) -> bool {
        self.serve_fallbacks
    }

    pub fn media(&self) -> &MediaResolver {
        &self.media
    }

    pub async fn list<R: ListResource>(
        &self,
        query: &ContentQuery,
    ) -> Result<Outcome<Vec<R::Output>>> {
        match self.source.fetch(query).await {
            Fetched::Found(Value::Array(items)) => {
                let records = items
                    .into_iter()
                    .map(|item| self.normalize::<R>(item))
                    .collect();
                Ok(Outcome::from_items(records))
            }
            Fetched::Found(other) => Err(normalize_error::<R>(format!(
                "expected a list, got {}",
                json_kind(&other)
            ))),
            Fetched::Empty => Ok(Outcome::Empty),
            Fetched::Failed(e) => {
                tracing::warn!("⚠️ [{}] upstream unavailable: {}", R::ROUTE, e);
                Ok(Outcome::Unavailable)
            }
        }
    }

    pub async fn single<R: SingletonResource>(
        &self,
        query: &ContentQuery,
    ) -> Result<Outcome<R::Output>> {
        match self.source.fetch(query).await {
            // 以集合查單筆時取第一筆
            Fetched::Found(Value::Array(items)) => match items.into_iter().next() {
                Some(first) => Ok(Outcome::Live(self.normalize::<R>(first))),
                None => Ok(Outcome::Empty),
            },
            Fetched::Found(record) => Ok(Outcome::Live(self.normalize::<R>(record))),
            Fetched::Empty => Ok(Outcome::Empty),
            Fetched::Failed(e) => {
                tracing::warn!("⚠️ [{}] upstream unavailable: {}", R::ROUTE, e);
                Ok(Outcome::Unavailable)
            }
        }
    }

    /// list 路由的回應內容，必要時套用預設內容
    pub async fn list_body<R: ListResource>(&self, query: &ContentQuery) -> Result<Vec<R::Output>> {
        let outcome = self.list::<R>(query).await?;
        if self.serve_fallbacks && !outcome.is_live() {
            let fallback = R::fallback();
            if !fallback.is_empty() {
                tracing::info!("📦 [{}] serving {} default records", R::ROUTE, fallback.len());
            }
            return Ok(outcome.or_fallback(Some(fallback)).into_list());
        }
        Ok(outcome.into_list())
    }

    pub async fn single_body<R: SingletonResource>(
        &self,
        query: &ContentQuery,
    ) -> Result<Option<R::Output>> {
        let outcome = self.single::<R>(query).await?;
        if self.serve_fallbacks && !outcome.is_live() {
            let fallback = R::fallback();
            if fallback.is_some() {
                tracing::info!("📦 [{}] serving default record", R::ROUTE);
            }
            return Ok(outcome.or_fallback(fallback).into_single());
        }
        Ok(outcome.into_single())
    }

    /// 欄位型別不符已在解碼時退回預設值；連物件都不是的紀錄以空白紀錄輸出
    fn normalize<R: ContentResource>(&self, value: Value) -> R::Output {
        let record = match serde_json::from_value::<R::Record>(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("⚠️ [{}] unreadable record, emitting empty fields: {}", R::ROUTE, e);
                R::Record::default()
            }
        };
        R::normalize(record, &self.media)
    }
}

fn normalize_error<R: ContentResource>(message: String) -> ContentError {
    tracing::error!("❌ [{}] cannot normalize upstream data: {}", R::ROUTE, message);
    ContentError::NormalizeError {
        resource: R::ROUTE.to_string(),
        message,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resources::{
        DiningSectionsResource, HeroSlidesResource, RoomsPageResource, SiteSettingsResource,
    };
    use crate::domain::model::HeroSlide;
    use async_trait::async_trait;
    use serde_json::json;

    /// 固定回傳同一個結果的來源
    struct StaticSource(fn() -> Fetched);

    #[async_trait]
    impl ContentSource for StaticSource {
        async fn fetch(&self, _query: &ContentQuery) -> Fetched {
            (self.0)()
        }
    }

    fn service(f: fn() -> Fetched) -> ContentService {
        ContentService::new(
            Arc::new(StaticSource(f)),
            MediaResolver::new("http://host:1337"),
        )
    }

    fn failed() -> Fetched {
        Fetched::Failed(ContentError::UpstreamStatus {
            resource: "x".to_string(),
            status: 500,
        })
    }

    #[tokio::test]
    async fn test_list_resolves_media_and_keeps_order() {
        let svc = service(|| {
            Fetched::Found(json!([
                { "id": 2, "image": { "url": "/uploads/b.jpg" } },
                { "id": 0, "image": { "url": "/uploads/a.jpg" } },
                { "id": 1, "image": null }
            ]))
        });

        let slides = svc
            .list::<HeroSlidesResource>(&HeroSlidesResource::query())
            .await
            .unwrap()
            .into_list();

        let ids: Vec<i64> = slides.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 0, 1]);
        assert_eq!(
            slides[0].image.url.as_deref(),
            Some("http://host:1337/uploads/b.jpg")
        );
        assert!(!slides[2].image.has_url());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_unavailable() {
        let svc = service(failed);
        let outcome = svc
            .list::<HeroSlidesResource>(&HeroSlidesResource::query())
            .await
            .unwrap();
        assert_eq!(outcome, Outcome::Unavailable);

        let single = svc
            .single::<RoomsPageResource>(&RoomsPageResource::query())
            .await
            .unwrap();
        assert_eq!(single, Outcome::Unavailable);
    }

    #[tokio::test]
    async fn test_list_route_with_object_data_is_normalize_error() {
        let svc = service(|| Fetched::Found(json!({ "id": 1 })));
        let err = svc
            .list::<HeroSlidesResource>(&HeroSlidesResource::query())
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::NormalizeError { ref resource, .. } if resource == "hero-slides"));
    }

    #[tokio::test]
    async fn test_mistyped_records_degrade_instead_of_failing() {
        let svc = service(|| {
            Fetched::Found(json!([
                { "id": "not-a-number", "title": "Lake", "image": { "url": "/uploads/a.jpg" } },
                "stray",
                { "id": 3, "description": [{ "type": "paragraph" }] }
            ]))
        });
        let slides = svc
            .list::<HeroSlidesResource>(&HeroSlidesResource::query())
            .await
            .unwrap()
            .into_list();

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].id, 0);
        assert_eq!(slides[0].title, "Lake");
        assert_eq!(
            slides[0].image.url.as_deref(),
            Some("http://host:1337/uploads/a.jpg")
        );
        assert_eq!(slides[1], HeroSlide::default());
        assert_eq!(slides[2].description, json!([{ "type": "paragraph" }]));
    }

    #[tokio::test]
    async fn test_single_takes_first_array_element() {
        let svc = service(|| {
            Fetched::Found(json!([
                { "id": 1, "siteName": "First" },
                { "id": 2, "siteName": "Second" }
            ]))
        });
        let settings = svc
            .single::<SiteSettingsResource>(&SiteSettingsResource::query())
            .await
            .unwrap()
            .into_single()
            .unwrap();
        assert_eq!(settings.site_name, "First");
    }

    #[tokio::test]
    async fn test_bodies_follow_empty_contract_without_fallbacks() {
        let svc = service(|| Fetched::Empty);
        let sections = svc
            .list_body::<DiningSectionsResource>(&DiningSectionsResource::query())
            .await
            .unwrap();
        assert!(sections.is_empty());

        let settings = svc
            .single_body::<SiteSettingsResource>(&SiteSettingsResource::query())
            .await
            .unwrap();
        assert_eq!(settings, None);
    }

    #[tokio::test]
    async fn test_offline_mode_serves_defaults() {
        let svc = service(failed).with_fallbacks(true);
        let sections = svc
            .list_body::<DiningSectionsResource>(&DiningSectionsResource::query())
            .await
            .unwrap();
        assert_eq!(sections.len(), 7);

        let settings = svc
            .single_body::<SiteSettingsResource>(&SiteSettingsResource::query())
            .await
            .unwrap();
        assert!(settings.is_some());

        // 沒有預設內容的路由仍是 null
        let rooms_page = svc
            .single_body::<RoomsPageResource>(&RoomsPageResource::query())
            .await
            .unwrap();
        assert_eq!(rooms_page, None);
    }
}
