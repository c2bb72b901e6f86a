//! Core domain types: accounts, raw rows, monthly aggregates, and ledger rows.

use chrono::NaiveDate;
use derive_more::Display;
use rust_decimal::Decimal;

/// Serial number of an account as listed by the back office.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Serial(String);

/// Newtype wrapper for account numbers; also names the account's statement export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifies one ledger row. Produced once per run by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDescriptor {
    pub serial: Serial,
    pub name: String,
    pub account_number: AccountNumber,
}

impl AccountDescriptor {
    pub fn new(
        serial: impl Into<String>,
        name: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            serial: Serial(serial.into()),
            name: name.into(),
            account_number: AccountNumber(account_number.into()),
        }
    }
}

/// One scraped transaction row before aggregation. Both fields are kept as
/// text; `amount_text` may contain thousands separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub date: String,
    pub amount_text: String,
}

impl RawRow {
    pub fn new(date: impl Into<String>, amount_text: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount_text: amount_text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
    /// A month code that is not one of `01`..`12`.
    Unknown,
}

impl MonthName {
    /// The twelve calendar months, in ledger column order.
    pub const CALENDAR: [MonthName; 12] = [
        MonthName::January,
        MonthName::February,
        MonthName::March,
        MonthName::April,
        MonthName::May,
        MonthName::June,
        MonthName::July,
        MonthName::August,
        MonthName::September,
        MonthName::October,
        MonthName::November,
        MonthName::December,
    ];

    /// Maps a two-digit month code to its name. Anything else is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "01" => MonthName::January,
            "02" => MonthName::February,
            "03" => MonthName::March,
            "04" => MonthName::April,
            "05" => MonthName::May,
            "06" => MonthName::June,
            "07" => MonthName::July,
            "08" => MonthName::August,
            "09" => MonthName::September,
            "10" => MonthName::October,
            "11" => MonthName::November,
            "12" => MonthName::December,
            _ => MonthName::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonthName::January => "January",
            MonthName::February => "February",
            MonthName::March => "March",
            MonthName::April => "April",
            MonthName::May => "May",
            MonthName::June => "June",
            MonthName::July => "July",
            MonthName::August => "August",
            MonthName::September => "September",
            MonthName::October => "October",
            MonthName::November => "November",
            MonthName::December => "December",
            MonthName::Unknown => "Unknown",
        }
    }

    /// Zero-based ledger column for calendar months, `None` for `Unknown`.
    pub fn index(&self) -> Option<usize> {
        Self::CALENDAR.iter().position(|month| month == self)
    }
}

impl std::fmt::Display for MonthName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single amount attributed to a month for one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyAggregate {
    pub month: MonthName,
    pub amount: Decimal,
}

impl MonthlyAggregate {
    pub fn new(month: MonthName, amount: Decimal) -> Self {
        Self { month, amount }
    }
}

/// Fixed 17-field summary persisted per account.
/// Invariants: total = sum of `months`, average = total / 12.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub serial: Serial,
    pub account_number: AccountNumber,
    pub name: String,
    /// January through December; absent months are zero.
    pub months: [Decimal; 12],
    pub total: Decimal,
    pub average: Decimal,
}

impl LedgerRow {
    /// Amount for a calendar month. `Unknown` has no column and reads as zero.
    pub fn month(&self, month: MonthName) -> Decimal {
        month
            .index()
            .map_or(Decimal::ZERO, |index| self.months[index])
    }
}

/// Inclusive date window handed to the data source on every row retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Date range starts at {from} but ends earlier, at {to}")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DomainError> {
        if from > to {
            return Err(DomainError::InvertedDateRange { from, to });
        }
        Ok(Self { from, to })
    }
    pub fn start(&self) -> NaiveDate {
        self.from
    }
    pub fn end(&self) -> NaiveDate {
        self.to
    }
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}
