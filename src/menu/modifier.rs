//! Modifiers wrap a [`PricedItem`] and add a fixed cost and label on top of it.
//!
//! Each modifier owns exactly one inner item, so chains are linear and can
//! never contain themselves. A chain is built from the inside out:
//!
//! ```no_run
//! use brew_pay::{Coffee, PricedItem, PricedItemExt, Topping};
//!
//! let drink = Coffee
//!     .with(Topping::milk())
//!     .with(Topping::sugar());
//!
//! assert_eq!(drink.description(), "Coffee, Milk, Sugar");
//! ```
use rust_decimal_macros::dec;
use typed_builder::TypedBuilder;

use super::PricedItem;
use crate::{Amount, BrewPayError};

/// Separator placed between the inner description and a modifier label.
pub const LABEL_SEPARATOR: &str = ", ";

/// The fixed `(delta, label)` pair that defines a kind of modifier.
///
/// `delta` is not checked for sign.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct Topping {
    #[builder(setter(into))]
    label: String,
    delta: Amount,
}

impl Topping {
    pub fn milk() -> Self {
        Topping::builder().label("Milk").delta(dec!(10)).build()
    }

    pub fn sugar() -> Self {
        Topping::builder().label("Sugar").delta(dec!(5)).build()
    }

    pub fn chocolate() -> Self {
        Topping::builder().label("Chocolate").delta(dec!(15)).build()
    }

    pub fn vanilla() -> Self {
        Topping::builder().label("Vanilla").delta(dec!(8)).build()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn delta(&self) -> Amount {
        self.delta
    }
}

/// A [`PricedItem`] decorated with one [`Topping`].
///
/// `cost`, `description` and drop all recurse once per layer, so the maximum
/// chain depth is bounded by the stack size of the calling thread.
#[derive(Debug)]
pub struct Modifier {
    inner: Box<dyn PricedItem>,
    topping: Topping,
}

impl Modifier {
    pub fn new(inner: Box<dyn PricedItem>, topping: Topping) -> Self {
        Modifier { inner, topping }
    }

    /// Builds a modifier from an item that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`BrewPayError::InvalidArgument`] when `inner` is `None`.
    pub fn try_new(
        inner: Option<Box<dyn PricedItem>>,
        topping: Topping,
    ) -> Result<Self, BrewPayError> {
        let inner = inner.ok_or_else(|| {
            BrewPayError::InvalidArgument(format!(
                "modifier {} requires an inner item",
                topping.label
            ))
        })?;
        Ok(Modifier::new(inner, topping))
    }

    pub fn topping(&self) -> &Topping {
        &self.topping
    }
}

impl PricedItem for Modifier {
    fn cost(&self) -> Amount {
        self.inner.cost() + self.topping.delta
    }

    fn description(&self) -> String {
        let mut description = self.inner.description();
        description.push_str(LABEL_SEPARATOR);
        description.push_str(&self.topping.label);
        description
    }
}

/// Fluent wrapping for any owned item.
pub trait PricedItemExt: PricedItem + Sized + 'static {
    fn with(self, topping: Topping) -> Modifier {
        Modifier::new(Box::new(self), topping)
    }
}

impl<T: PricedItem + 'static> PricedItemExt for T {}
