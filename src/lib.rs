pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;
pub mod view;

pub use crate::config::ServerConfig;
pub use crate::core::{media::MediaResolver, service::ContentService, strapi::StrapiClient};
pub use crate::utils::error::{ContentError, Result};
