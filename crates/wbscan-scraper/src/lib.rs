pub mod client;
pub mod endpoints;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod request;
pub mod types;

pub use client::PipelineClient;
pub use error::ScraperError;
pub use normalize::{normalize_detail, normalize_listing};
pub use request::RetrievalRequest;
pub use types::{CatalogData, CatalogResponse, RawProduct, RawSize, RawStock};
