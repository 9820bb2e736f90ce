pub mod error;
pub mod handlers;

use crate::core::resources::*;
use crate::core::service::ContentService;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
}

impl AppState {
    pub fn new(content: ContentService) -> Self {
        Self { content }
    }
}

fn api_path(route: &str) -> String {
    format!("/api/{}", route)
}

fn list_route<R: ListResource>(router: Router<AppState>) -> Router<AppState> {
    router.route(&api_path(R::ROUTE), get(handlers::list::<R>))
}

fn single_route<R: SingletonResource>(router: Router<AppState>) -> Router<AppState> {
    router.route(&api_path(R::ROUTE), get(handlers::single::<R>))
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let mut router = Router::new()
        .route("/health", get(handlers::health))
        .route(&api_path(RoomsSuitesResource::ROUTE), get(handlers::rooms_suites))
        .route(&api_path(BlogPostsResource::ROUTE), get(handlers::blog_posts))
        .route(&api_path(PagesResource::ROUTE), get(handlers::pages));

    router = list_route::<HeroSlidesResource>(router);
    router = list_route::<NavigationItemsResource>(router);
    router = single_route::<SiteSettingsResource>(router);
    router = single_route::<RoomsPageResource>(router);
    router = list_route::<DiningResource>(router);
    router = list_route::<DiningSectionsResource>(router);
    router = single_route::<DiningPageResource>(router);
    router = list_route::<ExperiencesResource>(router);
    router = single_route::<ExperiencesPageResource>(router);
    router = list_route::<FacilitiesResource>(router);
    router = single_route::<FacilitiesPageResource>(router);
    router = list_route::<FacilitySectionsResource>(router);
    router = list_route::<AmenityIconsResource>(router);
    router = list_route::<GalleriesResource>(router);
    router = single_route::<GalleryPageResource>(router);
    router = list_route::<WeddingEventsResource>(router);
    router = single_route::<WeddingEventsPageResource>(router);
    router = list_route::<WellnessResource>(router);
    router = list_route::<CorporateServicesResource>(router);
    router = single_route::<CorporatePageResource>(router);
    router = single_route::<BlogPageResource>(router);
    router = single_route::<BookingPolicyResource>(router);
    router = single_route::<TermsConditionsResource>(router);
    router = single_route::<ContactPageResource>(router);
    router = single_route::<OurStoryResource>(router);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn serve<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    let content = ContentService::from_config(config)?;
    info!("📡 Content service: {}", content.media().origin());
    if content.serves_fallbacks() {
        info!("📦 Offline defaults enabled");
    }

    let app = router(AppState::new(content));

    let address = config.bind_address();
    info!("Binding to {}", address);
    let listener = TcpListener::bind(address).await?;
    info!("🚀 Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("❌ Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("❌ Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
