pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use common::{ApiResponse, ValidatedJson};
pub use router::create_api_router;
