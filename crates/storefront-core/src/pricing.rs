use rust_decimal::Decimal;

use crate::products::StockRecord;

const CURRENCY_SYMBOL: &str = "৳";

/// Joins the effective prices of a product's stocks into one display string.
///
/// Returns `"৳{price}"` when every stock costs the same, `"৳{min} - ৳{max}"`
/// otherwise, and `None` when no stock carries a price.
#[must_use]
pub fn join_price(stocks: &[StockRecord]) -> Option<String> {
    let mut prices = stocks.iter().filter_map(StockRecord::effective_price);
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));

    if min == max {
        Some(format_price(min))
    } else {
        Some(format!("{} - {}", format_price(min), format_price(max)))
    }
}

fn format_price(value: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{}", value.normalize())
}
