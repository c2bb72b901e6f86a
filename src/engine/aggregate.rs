//! Month aggregation over one account's raw rows.

use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    domain::{MonthName, MonthlyAggregate, RawRow},
    parsing::{month_code, parse_amount},
};

/// The month currently being scanned and the amount of its latest row.
struct OpenMonth {
    code: String,
    amount: Decimal,
}

impl OpenMonth {
    fn close(self) -> MonthlyAggregate {
        let month = MonthName::from_code(&self.code);
        if month == MonthName::Unknown {
            warn!("Unrecognized month code {:?}, bucketing as Unknown", self.code);
        }
        MonthlyAggregate::new(month, self.amount)
    }
}

/// Collapses rows into one aggregate per run of equal month codes, in
/// encounter order.
///
/// Within a month the last row wins: the aggregate carries the amount of the
/// final row seen before the month code changes, not the sum of the month.
/// Rows for one month are expected to be contiguous; a month that reappears
/// later yields a second aggregate.
pub fn aggregate<I>(rows: I) -> Vec<MonthlyAggregate>
where
    I: IntoIterator<Item = RawRow>,
{
    let mut aggregates = Vec::new();
    let mut open: Option<OpenMonth> = None;

    for row in rows {
        let code = month_code(&row.date);
        let amount = parse_amount(&row.amount_text);
        if let Some(current) = open.as_mut().filter(|current| current.code == code) {
            current.amount = amount;
            continue;
        }
        let next = OpenMonth {
            code: code.to_owned(),
            amount,
        };
        if let Some(done) = open.replace(next) {
            aggregates.push(done.close());
        }
    }

    if let Some(last) = open {
        aggregates.push(last.close());
    }
    aggregates
}
