use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::forecast::ForecastTable;
use crate::types::{ScenarioId, StrategyKind};

/// one scenario taking part in a side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonColumn {
    pub scenario_id: ScenarioId,
    pub strategy: StrategyKind,
    pub label: String,
}

/// the comparable figures of one scenario in one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCell {
    pub net_worth: Money,
    pub cashflow: Money,
    pub roi: Decimal,
}

/// one calendar year across every compared scenario; a cell is None when
/// that scenario has no row for the year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub year: i32,
    pub cells: Vec<Option<ComparisonCell>>,
}

/// forecast tables merged by calendar year with outer-join semantics:
/// every year present in any scenario appears exactly once, ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

impl ScenarioComparison {
    /// merge forecast tables side by side, aligned on calendar year
    pub fn merge(tables: &[&ForecastTable]) -> Self {
        let columns = tables
            .iter()
            .map(|table| ComparisonColumn {
                scenario_id: table.scenario_id,
                strategy: table.strategy,
                label: table.strategy.label().to_string(),
            })
            .collect();

        let mut years: Vec<i32> = tables
            .iter()
            .flat_map(|table| table.rows.iter().map(|row| row.year))
            .collect();
        years.sort_unstable();
        years.dedup();

        let rows = years
            .into_iter()
            .map(|year| ComparisonRow {
                year,
                cells: tables
                    .iter()
                    .map(|table| {
                        table.year_row(year).map(|row| ComparisonCell {
                            net_worth: row.net_worth,
                            cashflow: row.cashflow,
                            roi: row.roi,
                        })
                    })
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// net worth series of one column, one entry per merged year
    pub fn net_worth_series(&self, column: usize) -> Vec<Option<Money>> {
        self.rows
            .iter()
            .map(|row| row.cells[column].map(|cell| cell.net_worth))
            .collect()
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
