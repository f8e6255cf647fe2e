//! Concrete service implementations behind the trait seams

pub mod api;
pub mod store;

pub use api::HttpSchedulingApi;
pub use store::JsonFileStore;
