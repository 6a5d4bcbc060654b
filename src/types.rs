use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a forecast scenario
pub type ScenarioId = Uuid;

/// competing housing strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    /// rent a home, invest the purchase budget in the markets
    RentAndInvest,
    /// buy a home as a primary residence
    BuyToLive,
    /// buy a property and let it on a yearly lease
    BuyToRentLongTerm,
    /// buy a property and let it by the night
    BuyToRentShortTerm,
    /// invest the amount not tied up by a purchase in the markets
    MarketOpportunity,
}

impl StrategyKind {
    /// human-readable label for tables and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::RentAndInvest => "rent and invest",
            StrategyKind::BuyToLive => "buy to live",
            StrategyKind::BuyToRentLongTerm => "buy to rent (long term)",
            StrategyKind::BuyToRentShortTerm => "buy to rent (short term)",
            StrategyKind::MarketOpportunity => "market opportunity",
        }
    }

    /// whether the strategy finances a purchase with a mortgage
    pub fn uses_mortgage(&self) -> bool {
        matches!(
            self,
            StrategyKind::BuyToLive
                | StrategyKind::BuyToRentLongTerm
                | StrategyKind::BuyToRentShortTerm
        )
    }
}
