pub mod catalogue;
pub mod favorites;
pub mod sitemap;
pub mod tracing_headers;
