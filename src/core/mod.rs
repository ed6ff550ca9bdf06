pub mod fetcher;
pub mod filters;
pub mod query;
pub mod search;

pub use crate::domain::model::{Feature, Search};
pub use crate::domain::ports::{ConfigProvider, EventSource};
pub use crate::utils::error::Result;
