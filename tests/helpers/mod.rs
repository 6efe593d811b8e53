#![allow(unused_imports)]
pub mod holiday_helpers;
pub mod service_helpers;

pub use holiday_helpers::*;
pub use service_helpers::*;
