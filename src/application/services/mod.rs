pub mod business_time_service;

pub use business_time_service::*;
