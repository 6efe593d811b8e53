pub mod clock;
pub mod holiday_source;
