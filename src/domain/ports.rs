use crate::core::outcome::Fetched;
use crate::core::query::ContentQuery;
use async_trait::async_trait;
use std::time::Duration;

/// 外部內容服務的讀取端口
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// 對內容服務發出一次讀取，不快取、不重試
    async fn fetch(&self, query: &ContentQuery) -> Fetched;
}

pub trait ConfigProvider: Send + Sync {
    fn content_base_url(&self) -> &str;
    fn bind_address(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn serve_fallbacks(&self) -> bool;
}
