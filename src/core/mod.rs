pub mod fixtures;
pub mod media;
pub mod outcome;
pub mod query;
pub mod resources;
pub mod service;
pub mod strapi;

pub use crate::domain::ports::{ConfigProvider, ContentSource};
pub use crate::utils::error::Result;
