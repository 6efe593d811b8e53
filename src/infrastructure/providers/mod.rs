pub mod http_holiday_source;

pub use http_holiday_source::HttpHolidaySource;
