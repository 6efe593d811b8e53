pub mod business_calendar;
pub mod duration_consumer;
pub mod normalizer;

pub use business_calendar::*;
pub use duration_consumer::*;
pub use normalizer::*;
