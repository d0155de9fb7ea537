use std::fmt;

use rust_decimal_macros::dec;

use crate::{Amount, Receipt};

/// Anything that can be sold with a price and a human readable description.
///
/// Implementations are immutable: both values are fixed at construction and
/// recomputed on every call.
pub trait PricedItem: fmt::Debug {
    fn cost(&self) -> Amount;
    fn description(&self) -> String;

    /// Snapshot of the current description and cost.
    fn receipt(&self) -> Receipt {
        Receipt::builder()
            .description(self.description())
            .cost(self.cost())
            .build()
    }
}

impl<T: PricedItem + ?Sized> PricedItem for Box<T> {
    fn cost(&self) -> Amount {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Plain coffee, the base of every drink on the menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coffee;

impl PricedItem for Coffee {
    fn cost(&self) -> Amount {
        dec!(50)
    }

    fn description(&self) -> String {
        "Coffee".to_string()
    }
}
