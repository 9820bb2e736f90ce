use crate::core::outcome::Fetched;
use crate::core::query::ContentQuery;
use crate::domain::ports::{ConfigProvider, ContentSource};
use crate::utils::error::{ContentError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use std::time::{Duration, Instant};

const MAX_LOGGED_BODY: usize = 512;

/// Strapi 風格的 headless CMS 讀取客戶端
#[derive(Debug, Clone)]
pub struct StrapiClient {
    client: Client,
    origin: String,
}

impl StrapiClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_timeout(config.content_base_url(), config.request_timeout())
    }

    pub fn with_timeout(origin: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, origin))
    }

    pub fn with_client(client: Client, origin: &str) -> Self {
        Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn endpoint(&self, collection: &str) -> String {
        format!("{}/api/{}", self.origin, collection)
    }

    async fn try_fetch(&self, query: &ContentQuery) -> Result<Fetched> {
        let collection = query.collection();
        let url = self.endpoint(collection);

        let mut params = query.query_pairs();
        // 每次帶上時間戳，避免中間層快取
        params.push((
            "t".to_string(),
            chrono::Utc::now().timestamp_millis().to_string(),
        ));

        tracing::debug!("📡 Fetching {} with {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 {} responded with {}", collection, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "❌ [{}] content service returned {}: {}",
                collection,
                status,
                truncate(&body, MAX_LOGGED_BODY)
            );
            return Err(ContentError::UpstreamStatus {
                resource: collection.to_string(),
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| ContentError::MalformedBody {
                    resource: collection.to_string(),
                    message: e.to_string(),
                })?;

        Ok(Fetched::from_envelope(collection, body))
    }
}

#[async_trait]
impl ContentSource for StrapiClient {
    async fn fetch(&self, query: &ContentQuery) -> Fetched {
        let started = Instant::now();

        match self.try_fetch(query).await {
            Ok(fetched) => {
                if let Fetched::Failed(e) = &fetched {
                    tracing::error!("❌ [{}] {}", query.collection(), e);
                }
                tracing::debug!(
                    "📡 {} -> {} in {:?}",
                    query.collection(),
                    fetched.kind(),
                    started.elapsed()
                );
                fetched
            }
            Err(e) => {
                tracing::error!(
                    "❌ [{}] fetch failed after {:?}: {}",
                    query.collection(),
                    started.elapsed(),
                    e
                );
                Fetched::Failed(e)
            }
        }
    }
}

fn truncate(body: &str, max: usize) -> &str {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
