//! Holding snapshot service.

use log::warn;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::errors::{Result, ValidationError};
use crate::holdings::holdings_model::Holding;
use crate::holdings::holdings_traits::{HoldingRepositoryTrait, HoldingServiceTrait};

/// Service for reading holding snapshots.
///
/// The snapshot invariant (non-negative units and prices) is enforced
/// here, at the seam where records enter the crate; the portfolio
/// calculators trust whatever snapshot they are handed.
pub struct HoldingService {
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
}

impl HoldingService {
    pub fn new(holding_repository: Arc<dyn HoldingRepositoryTrait>) -> Self {
        Self { holding_repository }
    }

    fn validate_snapshot(holdings: &[Holding]) -> Result<()> {
        for holding in holdings {
            if holding.units < Decimal::ZERO
                || holding.avg_buy_price < Decimal::ZERO
                || holding.current_price < Decimal::ZERO
            {
                warn!("Rejecting holding snapshot: negative value on {}", holding.symbol);
                return Err(ValidationError::InvalidInput(format!(
                    "holding {} has negative units or price",
                    holding.symbol
                ))
                .into());
            }
        }
        Ok(())
    }
}

impl HoldingServiceTrait for HoldingService {
    fn get_holdings(&self) -> Result<Vec<Holding>> {
        let holdings = self.holding_repository.load_holdings()?;
        Self::validate_snapshot(&holdings)?;
        Ok(holdings)
    }
}
