use rust_decimal::{Decimal, RoundingStrategy};

/// Maps a base charge to the final charge
pub type BillingStrategy = fn(Decimal) -> Decimal;

/// 10% tax on top of the base charge
pub fn tax(amount: Decimal) -> Decimal {
    amount * Decimal::new(110, 2)
}

/// 5% discount off the base charge
pub fn discount(amount: Decimal) -> Decimal {
    amount * Decimal::new(95, 2)
}

/// Rounds to two decimal places, midpoint away from zero, always keeping scale 2.
pub fn to_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BillingPolicy {
    Tax,
    Discount,
}

impl BillingPolicy {
    /// Maps the console menu choice. `1` is Tax, anything else Discount.
    pub fn from_choice(choice: i32) -> Self {
        if choice == 1 {
            Self::Tax
        } else {
            Self::Discount
        }
    }

    pub fn strategy(&self) -> BillingStrategy {
        match self {
            Self::Tax => tax,
            Self::Discount => discount,
        }
    }
}
