pub mod error;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
