use rust_decimal::{Decimal, dec};
use savings_ledger::{
    domain::{AccountDescriptor, MonthName, MonthlyAggregate},
    engine::build_row,
};

fn jane() -> AccountDescriptor {
    AccountDescriptor::new("1", "Jane Doe", "001")
}

#[test]
fn no_aggregates_build_an_all_zero_row() {
    let row = build_row(&jane(), &[]);

    assert_eq!(row.serial.to_string(), "1");
    assert_eq!(row.account_number.as_str(), "001");
    assert_eq!(row.name, "Jane Doe");
    assert_eq!(row.months, [Decimal::ZERO; 12]);
    assert_eq!(row.total, Decimal::ZERO);
    assert_eq!(row.average, Decimal::ZERO);
}

#[test]
fn absent_months_are_zero() {
    let row = build_row(
        &jane(),
        &[
            MonthlyAggregate::new(MonthName::January, dec!(150)),
            MonthlyAggregate::new(MonthName::February, dec!(200)),
        ],
    );

    assert_eq!(row.month(MonthName::January), dec!(150));
    assert_eq!(row.month(MonthName::February), dec!(200));
    for month in &MonthName::CALENDAR[2..] {
        assert_eq!(row.month(*month), Decimal::ZERO, "{month}");
    }
    assert_eq!(row.total, dec!(350));
}

#[test]
fn total_is_sum_of_months_and_average_is_total_over_twelve() {
    let aggregates: Vec<_> = MonthName::CALENDAR
        .iter()
        .zip(1..)
        .map(|(month, i)| MonthlyAggregate::new(*month, Decimal::from(i) * dec!(10.25)))
        .collect();

    let row = build_row(&jane(), &aggregates);

    let sum: Decimal = row.months.iter().sum();
    assert_eq!(row.total, sum);
    assert_eq!(row.total, dec!(799.5));
    assert_eq!(row.average, row.total / dec!(12));
}

#[test]
fn same_input_builds_same_row() {
    let aggregates = [
        MonthlyAggregate::new(MonthName::July, dec!(1.1)),
        MonthlyAggregate::new(MonthName::December, dec!(2.2)),
    ];

    assert_eq!(build_row(&jane(), &aggregates), build_row(&jane(), &aggregates));
}

/// Two amounts that fit on their own but not together saturate the total
/// instead of aborting.
#[test]
fn overflowing_total_saturates() {
    let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
    let row = build_row(
        &jane(),
        &[
            MonthlyAggregate::new(MonthName::January, huge),
            MonthlyAggregate::new(MonthName::February, huge),
        ],
    );

    assert_eq!(row.month(MonthName::January), huge);
    assert_eq!(row.month(MonthName::February), huge);
    assert_eq!(row.total, Decimal::MAX);
    assert_eq!(row.average, Decimal::MAX / dec!(12));
}
