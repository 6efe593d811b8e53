pub mod business_time;
pub mod holiday;
pub mod work_schedule;

pub use business_time::*;
pub use holiday::*;
pub use work_schedule::*;
