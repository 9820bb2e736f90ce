use httpmock::prelude::*;
use lakeside_content::http::{router, AppState};
use lakeside_content::view::{DiningView, FacilitiesView, HomeView, SiteClient, SlotState};
use lakeside_content::{ContentService, ServerConfig};
use serde_json::json;
use std::time::Duration;
use tokio::net::TcpListener;

/// 在隨機 port 啟動 proxy，回傳 base URL
async fn spawn_proxy(upstream: &MockServer) -> String {
    let config = ServerConfig::for_origin(upstream.base_url());
    let content = ContentService::from_config(&config).unwrap();
    let app = router(AppState::new(content));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", address)
}

#[tokio::test]
async fn test_dining_view_without_network_keeps_defaults() {
    // 保留的 port，連線會被拒絕
    let client = SiteClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let view = DiningView::mount(&client).await;

    assert_eq!(view.sections.state(), SlotState::Fallback);
    assert_eq!(view.sections.current().len(), 7);
    assert!(!view.page.is_live());
    assert!(!view.page.current().hero_title.is_null());
}

#[tokio::test]
async fn test_dining_view_switches_only_sections_with_data() {
    let site = MockServer::start();
    site.mock(|when, then| {
        when.method(GET).path("/api/dining-sections");
        then.status(200).json_body(json!([
            { "id": 1, "title": "Lakeside Grill", "image": { "url": "http://cms/uploads/grill.jpg" } }
        ]));
    });
    site.mock(|when, then| {
        when.method(GET).path("/api/dining-page");
        then.status(200).json_body(json!(null));
    });

    let client = SiteClient::new(&site.base_url(), Duration::from_secs(5)).unwrap();
    let view = DiningView::mount(&client).await;

    assert!(view.sections.is_live());
    assert_eq!(view.sections.current().len(), 1);
    assert_eq!(view.sections.current()[0].title, "Lakeside Grill");
    // null 不會取代預設內容
    assert!(!view.page.is_live());
}

#[tokio::test]
async fn test_empty_list_keeps_defaults() {
    let site = MockServer::start();
    site.mock(|when, then| {
        when.method(GET).path("/api/hero-slides");
        then.status(200).json_body(json!([]));
    });
    site.mock(|when, then| {
        when.method(GET).path("/api/navigation-items");
        then.status(500).json_body(json!({ "error": "boom" }));
    });
    site.mock(|when, then| {
        when.method(GET).path("/api/site-settings");
        then.status(200)
            .json_body(json!({ "id": 1, "siteName": "Live Name", "phoneNumbers": [] }));
    });

    let client = SiteClient::new(&site.base_url(), Duration::from_secs(5)).unwrap();
    let view = HomeView::mount(&client).await;

    assert!(!view.hero_slides.is_live());
    assert!(!view.hero_slides.current().is_empty());
    assert!(!view.navigation.is_live());
    assert!(view.site_settings.is_live());
    assert_eq!(view.site_settings.current().site_name, "Live Name");
}

#[tokio::test]
async fn test_facilities_view_through_proxy() {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(GET).path("/api/amenity-icons");
        then.status(200).json_body(json!({
            "data": [{ "id": 1, "name": "Spa", "svgIcon": "M0 0h24v24H0z", "order": 1 }]
        }));
    });
    upstream.mock(|when, then| {
        when.method(GET).path("/api/facility-sections");
        then.status(200).json_body(json!({ "data": [] }));
    });
    upstream.mock(|when, then| {
        when.method(GET).path("/api/facilities-page");
        then.status(502);
    });

    let proxy = spawn_proxy(&upstream).await;
    let client = SiteClient::new(&proxy, Duration::from_secs(5)).unwrap();

    let view = FacilitiesView::mount(&client).await;

    assert!(view.amenities.is_live());
    assert_eq!(view.amenities.current().len(), 1);
    assert_eq!(
        view.amenities.current()[0].icon,
        lakeside_content::domain::model::Icon::Path("M0 0h24v24H0z".to_string())
    );
    assert!(!view.sections.is_live());
    assert_eq!(view.sections.current().len(), 3);
    assert!(!view.page.is_live());
}

#[tokio::test]
async fn test_slow_upstream_times_out_into_defaults() {
    let site = MockServer::start();
    site.mock(|when, then| {
        when.method(GET).path("/api/dining-sections");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(json!([{ "id": 1, "title": "Too Late" }]));
    });
    site.mock(|when, then| {
        when.method(GET).path("/api/dining-page");
        then.status(200)
            .delay(Duration::from_secs(2))
            .json_body(json!({ "heroTitle": "Too Late" }));
    });

    let client = SiteClient::new(&site.base_url(), Duration::from_millis(200)).unwrap();

    // 兩個請求同時逾時，掛載在延遲回應之前就完成
    let view = tokio::time::timeout(Duration::from_secs(1), DiningView::mount(&client))
        .await
        .expect("mount should finish once the client timeout fires");

    assert_eq!(view.sections.state(), SlotState::Fallback);
    assert_eq!(view.sections.current().len(), 7);
    assert_eq!(view.page.state(), SlotState::Fallback);
    assert_ne!(view.page.current().hero_title, "Too Late");
}
