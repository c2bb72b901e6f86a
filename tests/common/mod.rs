use std::collections::HashMap;

use chrono::NaiveDate;
use savings_ledger::{
    domain::{AccountDescriptor, DateRange, RawRow},
    engine::errors::RetrievalError,
    source::DataSource,
};

/// In-memory data source. Accounts without scripted rows fail retrieval.
#[allow(dead_code)]
#[derive(Default)]
pub struct MemorySource {
    accounts: Vec<AccountDescriptor>,
    rows: HashMap<String, Vec<RawRow>>,
    pub requested_ranges: Vec<DateRange>,
}

#[allow(dead_code)]
impl MemorySource {
    pub fn with_account(mut self, account: AccountDescriptor, rows: Vec<RawRow>) -> Self {
        self.rows
            .insert(account.account_number.as_str().to_owned(), rows);
        self.accounts.push(account);
        self
    }

    pub fn with_failing_account(mut self, account: AccountDescriptor) -> Self {
        self.accounts.push(account);
        self
    }
}

impl DataSource for MemorySource {
    fn accounts(&mut self) -> Result<Vec<AccountDescriptor>, RetrievalError> {
        Ok(self.accounts.clone())
    }

    fn raw_rows(
        &mut self,
        account: &AccountDescriptor,
        range: &DateRange,
    ) -> Result<Vec<RawRow>, RetrievalError> {
        self.requested_ranges.push(*range);
        self.rows
            .get(account.account_number.as_str())
            .cloned()
            .ok_or_else(|| RetrievalError::Source("transaction table never loaded".to_owned()))
    }
}

#[allow(dead_code)]
pub fn rows(pairs: &[(&str, &str)]) -> Vec<RawRow> {
    pairs
        .iter()
        .map(|(date, amount)| RawRow::new(*date, *amount))
        .collect()
}

#[allow(dead_code)]
pub fn year_2023() -> DateRange {
    DateRange::new(date(2023, 1, 1), date(2023, 12, 31)).unwrap()
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
