use crate::core::fixtures;
use crate::core::resources::{
    BlogPostsResource, ContentResource, ListResource, PagesResource, RoomPlacement,
    RoomsSuitesResource, SingletonResource,
};
use crate::domain::model::{BlogPost, PageEntry, RoomSuite};
use crate::http::error::ApiError;
use crate::http::AppState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Default, Deserialize)]
pub struct RoomsParams {
    #[serde(rename = "type")]
    pub placement: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SlugParams {
    pub slug: Option<String>,
}

impl SlugParams {
    /// 空字串視同未提供
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }
}

pub async fn list<R: ListResource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Output>>, ApiError> {
    let items = state
        .content
        .list_body::<R>(&R::query())
        .await
        .map_err(|_| ApiError::Internal(R::FAILURE_MESSAGE))?;
    Ok(Json(items))
}

pub async fn single<R: SingletonResource>(
    State(state): State<AppState>,
) -> Result<Json<Option<R::Output>>, ApiError> {
    let record = state
        .content
        .single_body::<R>(&R::query())
        .await
        .map_err(|_| ApiError::Internal(R::FAILURE_MESSAGE))?;
    Ok(Json(record))
}

pub async fn rooms_suites(
    State(state): State<AppState>,
    Query(params): Query<RoomsParams>,
) -> Result<Json<Vec<RoomSuite>>, ApiError> {
    let rooms = state
        .content
        .list_body::<RoomsSuitesResource>(&RoomsSuitesResource::query())
        .await
        .map_err(|_| ApiError::Internal(RoomsSuitesResource::FAILURE_MESSAGE))?;

    let rooms = match params.placement.as_deref().and_then(RoomPlacement::parse) {
        Some(placement) => rooms
            .into_iter()
            .filter(|room| placement.admits(&room.display_in))
            .collect(),
        None => rooms,
    };

    Ok(Json(rooms))
}

/// 有 slug 時回傳單篇或 `null`，否則回傳依日期排序的列表
pub async fn blog_posts(
    State(state): State<AppState>,
    Query(params): Query<SlugParams>,
) -> Result<Response, ApiError> {
    let Some(slug) = params.slug() else {
        let posts = state
            .content
            .list_body::<BlogPostsResource>(&BlogPostsResource::query())
            .await
            .map_err(|_| ApiError::Internal(BlogPostsResource::FAILURE_MESSAGE))?;
        return Ok(Json(posts).into_response());
    };

    let outcome = state
        .content
        .list::<BlogPostsResource>(&BlogPostsResource::by_slug(slug))
        .await
        .map_err(|_| ApiError::Internal(BlogPostsResource::FAILURE_MESSAGE))?;

    let mut post: Option<BlogPost> = outcome.into_list().into_iter().next();
    if post.is_none() && state.content.serves_fallbacks() {
        post = fixtures::blog_post(slug);
    }

    Ok(Json(post).into_response())
}

pub async fn pages(
    State(state): State<AppState>,
    Query(params): Query<SlugParams>,
) -> Result<Json<Vec<PageEntry>>, ApiError> {
    let slug = params.slug().ok_or(ApiError::BadRequest("Slug is required"))?;

    let pages = state
        .content
        .list_body::<PagesResource>(&PagesResource::by_slug(slug))
        .await
        .map_err(|_| ApiError::Internal(PagesResource::FAILURE_MESSAGE))?;

    Ok(Json(pages))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
