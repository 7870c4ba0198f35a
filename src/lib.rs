pub mod app_config;
pub mod distance;
pub mod domain;
mod error;
mod extensions;
pub mod fixture;
mod geo_location_deserializer;
pub mod geocoding;
pub mod input;
pub mod ranking;

pub use error::AppError;
pub use geocoding::Resolver;
pub use ranking::rank;
