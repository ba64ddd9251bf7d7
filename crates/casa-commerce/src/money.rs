//! Pricing rules over exact decimal arithmetic.
//!
//! All monetary values are `rust_decimal::Decimal`. Binary floating
//! point never touches a price: percentage discounts compound across
//! many order lines and a float representation would drift. Results
//! are truncated (not rounded half-up) to the minor-unit scale so a
//! derived price is never larger than the exact value.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CommerceError;

/// Decimal places of the currency's minor unit.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Truncate a value to the minor-unit scale.
fn truncate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::ToZero)
}

/// Discount arithmetic without validation. Callers guarantee the
/// inputs already satisfy the price/discount invariants.
pub(crate) fn apply_discount(price: Decimal, discount_percent: Decimal) -> Decimal {
    truncate(price - price * discount_percent / Decimal::ONE_HUNDRED)
}

fn validate_price(price: Decimal) -> Result<(), CommerceError> {
    if price <= Decimal::ZERO {
        return Err(CommerceError::InvalidPrice(price));
    }
    Ok(())
}

fn validate_discount(discount_percent: Decimal) -> Result<(), CommerceError> {
    if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
        return Err(CommerceError::InvalidDiscount(discount_percent));
    }
    Ok(())
}

/// Price after applying a percentage discount.
///
/// Fails with [`CommerceError::InvalidPrice`] for non-positive prices
/// and [`CommerceError::InvalidDiscount`] for percentages outside
/// `0..=100`. The result is truncated to [`MINOR_UNIT_SCALE`] and is
/// always `<=` the base price.
pub fn final_price(price: Decimal, discount_percent: Decimal) -> Result<Decimal, CommerceError> {
    validate_price(price)?;
    validate_discount(discount_percent)?;
    Ok(apply_discount(price, discount_percent))
}

/// Recover the base price from a discounted price and a known
/// percentage.
///
/// Inverse of [`final_price`]. A 100% discount cannot be inverted and
/// fails with [`CommerceError::FullDiscount`]. Only used for legacy
/// values where the discounted price was stored; the canonical
/// representation is always base price plus discount percent.
pub fn original_price(
    final_price: Decimal,
    discount_percent: Decimal,
) -> Result<Decimal, CommerceError> {
    validate_price(final_price)?;
    validate_discount(discount_percent)?;
    if discount_percent == Decimal::ONE_HUNDRED {
        return Err(CommerceError::FullDiscount);
    }
    let remainder = Decimal::ONE - discount_percent / Decimal::ONE_HUNDRED;
    Ok(truncate(final_price / remainder))
}

/// Subtotal for one order line: discounted unit price times quantity.
pub fn line_subtotal(
    price: Decimal,
    discount_percent: Decimal,
    quantity: u32,
) -> Result<Decimal, CommerceError> {
    if quantity == 0 {
        return Err(CommerceError::InvalidQuantity(quantity));
    }
    let unit = final_price(price, discount_percent)?;
    Ok(unit * Decimal::from(quantity))
}
