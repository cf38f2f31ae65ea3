mod collection;
mod entry;
mod food_item;
mod subscription;

pub use collection::*;
pub use entry::*;
pub use food_item::*;
pub use subscription::*;
