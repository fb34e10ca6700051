use crate::errors::Result;
use crate::holdings::holdings_model::Holding;

/// Trait for holding repository operations.
///
/// Holdings are read-only from this crate's perspective; positions are
/// created and updated by the external record store.
pub trait HoldingRepositoryTrait: Send + Sync {
    fn load_holdings(&self) -> Result<Vec<Holding>>;
}

/// Trait for holding service operations
pub trait HoldingServiceTrait: Send + Sync {
    fn get_holdings(&self) -> Result<Vec<Holding>>;
}
