//! Holdings domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Instrument category of a holding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HoldingType {
    Equity,
    Etf,
    Bond,
    MutualFund,
    Cash,
}

impl HoldingType {
    /// Display label used by allocation breakdowns.
    pub fn label(&self) -> &'static str {
        match self {
            HoldingType::Equity => "Stocks",
            HoldingType::Etf => "ETFs",
            HoldingType::Bond => "Bonds",
            HoldingType::MutualFund => "Mutual Funds",
            HoldingType::Cash => "Cash",
        }
    }
}

/// A position in a tradable or cash instrument, as delivered by the
/// record store snapshot. Prices arrive on the record; there is no
/// market data lookup in this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub holding_type: HoldingType,
    pub units: Decimal,
    pub avg_buy_price: Decimal,
    pub current_price: Decimal,
    /// 24-hour price change in percent, negative for losers.
    pub change_24h: Decimal,
}

impl Holding {
    /// Current market value: units x current price.
    pub fn market_value(&self) -> Decimal {
        self.units * self.current_price
    }

    /// Cost basis: units x average acquisition price.
    pub fn cost_basis(&self) -> Decimal {
        self.units * self.avg_buy_price
    }

    /// Unrealized gain: market value minus cost basis.
    pub fn unrealized_gain(&self) -> Decimal {
        self.market_value() - self.cost_basis()
    }

    /// Unrealized gain as a percentage of cost basis.
    ///
    /// A zero cost basis reports 0 rather than faulting; cash positions
    /// carried at zero acquisition price are a legitimate state.
    pub fn unrealized_gain_pct(&self) -> Decimal {
        let cost = self.cost_basis();
        if cost.is_zero() {
            Decimal::ZERO
        } else {
            self.unrealized_gain() / cost * Decimal::ONE_HUNDRED
        }
    }
}
