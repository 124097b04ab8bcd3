pub mod backend;
pub mod client;
pub mod error;
pub mod resources;

pub use backend::Backend;
pub use client::{ApiClient, Params};
pub use error::{ApiError, ApiResult, ErrorKind};
