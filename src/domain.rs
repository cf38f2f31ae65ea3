mod calendar_date;
mod food_category;
mod record_id;

pub use calendar_date::*;
pub use food_category::*;
pub use record_id::*;
