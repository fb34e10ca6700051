//! Shared test fixtures: a small but realistic portfolio snapshot.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::goals::{Goal, GoalType};
use crate::holdings::{Holding, HoldingType};
use crate::portfolio::performance::ValuePoint;
use crate::transactions::{Transaction, TransactionType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn holding(
    id: &str,
    symbol: &str,
    name: &str,
    holding_type: HoldingType,
    units: rust_decimal::Decimal,
    avg_buy_price: rust_decimal::Decimal,
    current_price: rust_decimal::Decimal,
    change_24h: rust_decimal::Decimal,
) -> Holding {
    Holding {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        holding_type,
        units,
        avg_buy_price,
        current_price,
        change_24h,
    }
}

pub fn sample_holdings() -> Vec<Holding> {
    vec![
        holding("1", "AAPL", "Apple Inc.", HoldingType::Equity, dec!(50), dec!(145.20), dec!(178.72), dec!(1.24)),
        holding("2", "MSFT", "Microsoft Corp.", HoldingType::Equity, dec!(30), dec!(280.50), dec!(378.91), dec!(-0.38)),
        holding("3", "VOO", "Vanguard S&P 500 ETF", HoldingType::Etf, dec!(100), dec!(380.00), dec!(462.35), dec!(0.67)),
        holding("4", "BND", "Vanguard Total Bond ETF", HoldingType::Bond, dec!(200), dec!(72.50), dec!(71.20), dec!(-0.12)),
        holding("5", "VTI", "Vanguard Total Stock Market", HoldingType::Etf, dec!(80), dec!(210.30), dec!(245.80), dec!(0.89)),
        holding("6", "VXUS", "Vanguard Intl Stock ETF", HoldingType::Etf, dec!(120), dec!(55.40), dec!(58.15), dec!(0.45)),
        holding("7", "CASH", "Cash Reserves", HoldingType::Cash, dec!(1), dec!(15000), dec!(15000), dec!(0)),
    ]
}

pub fn sample_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "1".to_string(),
            name: "Retirement Fund".to_string(),
            goal_type: GoalType::Retirement,
            target_amount: dec!(1500000),
            current_amount: dec!(342000),
            monthly_contribution: dec!(2500),
            target_date: date(2050, 1, 1),
            created_at: Utc.with_ymd_and_hms(2020, 6, 15, 0, 0, 0).unwrap(),
        },
        Goal {
            id: "2".to_string(),
            name: "Dream Home".to_string(),
            goal_type: GoalType::HomePurchase,
            target_amount: dec!(400000),
            current_amount: dec!(87000),
            monthly_contribution: dec!(1500),
            target_date: date(2028, 6, 1),
            created_at: Utc.with_ymd_and_hms(2022, 1, 10, 0, 0, 0).unwrap(),
        },
        Goal {
            id: "3".to_string(),
            name: "Children's Education".to_string(),
            goal_type: GoalType::Education,
            target_amount: dec!(200000),
            current_amount: dec!(45000),
            monthly_contribution: dec!(800),
            target_date: date(2035, 9, 1),
            created_at: Utc.with_ymd_and_hms(2021, 9, 1, 0, 0, 0).unwrap(),
        },
        Goal {
            id: "4".to_string(),
            name: "Emergency Fund".to_string(),
            goal_type: GoalType::Custom,
            target_amount: dec!(50000),
            current_amount: dec!(38000),
            monthly_contribution: dec!(500),
            target_date: date(2025, 12, 1),
            created_at: Utc.with_ymd_and_hms(2023, 3, 20, 0, 0, 0).unwrap(),
        },
    ]
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "1".to_string(),
            symbol: "AAPL".to_string(),
            transaction_type: TransactionType::Buy,
            units: Some(dec!(20)),
            price: dec!(142.50),
            date: date(2024, 1, 15),
        },
        Transaction {
            id: "2".to_string(),
            symbol: "VOO".to_string(),
            transaction_type: TransactionType::Buy,
            units: Some(dec!(25)),
            price: dec!(420.00),
            date: date(2024, 2, 1),
        },
        Transaction {
            id: "3".to_string(),
            symbol: "MSFT".to_string(),
            transaction_type: TransactionType::Dividend,
            units: None,
            price: dec!(45.00),
            date: date(2024, 2, 15),
        },
        Transaction {
            id: "4".to_string(),
            symbol: "BND".to_string(),
            transaction_type: TransactionType::Buy,
            units: Some(dec!(50)),
            price: dec!(71.80),
            date: date(2024, 3, 1),
        },
        Transaction {
            id: "5".to_string(),
            symbol: "AAPL".to_string(),
            transaction_type: TransactionType::Sell,
            units: Some(dec!(10)),
            price: dec!(175.30),
            date: date(2024, 3, 10),
        },
        Transaction {
            id: "6".to_string(),
            symbol: "VTI".to_string(),
            transaction_type: TransactionType::Buy,
            units: Some(dec!(30)),
            price: dec!(235.60),
            date: date(2024, 4, 1),
        },
        Transaction {
            id: "7".to_string(),
            symbol: "VXUS".to_string(),
            transaction_type: TransactionType::Contribution,
            units: Some(dec!(40)),
            price: dec!(56.20),
            date: date(2024, 4, 15),
        },
    ]
}

pub fn net_worth_history() -> Vec<ValuePoint> {
    [
        ("Jul", dec!(380000)),
        ("Aug", dec!(392000)),
        ("Sep", dec!(385000)),
        ("Oct", dec!(410000)),
        ("Nov", dec!(425000)),
        ("Dec", dec!(438000)),
        ("Jan", dec!(445000)),
        ("Feb", dec!(460000)),
        ("Mar", dec!(452000)),
        ("Apr", dec!(478000)),
        ("May", dec!(495000)),
        ("Jun", dec!(512000)),
    ]
    .into_iter()
    .map(|(period, value)| ValuePoint {
        period: period.to_string(),
        value,
    })
    .collect()
}
