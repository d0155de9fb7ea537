//! Priced items and the modifiers that decorate them.
mod item;
mod modifier;

pub use item::Coffee;
pub use item::PricedItem;
pub use modifier::Modifier;
pub use modifier::PricedItemExt;
pub use modifier::Topping;
pub use modifier::LABEL_SEPARATOR;
