//! Ledger row construction.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{AccountDescriptor, LedgerRow, MonthName, MonthlyAggregate};

/// Resolves each calendar month to the first matching aggregate's amount, or
/// zero, and derives total and average. Pure.
pub fn build_row(account: &AccountDescriptor, aggregates: &[MonthlyAggregate]) -> LedgerRow {
    let months = MonthName::CALENDAR.map(|month| {
        aggregates
            .iter()
            .find(|aggregate| aggregate.month == month)
            .map_or(Decimal::ZERO, |aggregate| aggregate.amount)
    });

    let unknown = aggregates
        .iter()
        .filter(|aggregate| aggregate.month == MonthName::Unknown)
        .count();
    if unknown > 0 {
        debug!(
            "Account {} has {unknown} aggregate(s) with no month column",
            account.account_number
        );
    }

    // January to December, so the sum is reproducible.
    let total = months.iter().fold(Decimal::ZERO, |total, amount| {
        total.checked_add(*amount).unwrap_or_else(|| {
            warn!(
                "Total for account {} overflowed, saturating",
                account.account_number
            );
            total.saturating_add(*amount)
        })
    });
    let average = total / Decimal::from(12);

    LedgerRow {
        serial: account.serial.clone(),
        account_number: account.account_number.clone(),
        name: account.name.clone(),
        months,
        total,
        average,
    }
}
