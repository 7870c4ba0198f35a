mod client;
mod query_mode;
mod resolver;
mod response;

pub use client::{GeocodingClientError, new_client};
pub use query_mode::QueryMode;
pub use resolver::{GeocodingError, Resolver};
pub use response::Status;
