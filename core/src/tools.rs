use serde::Serialize;
use utoipa::ToSchema;

/// A named operation a client may invoke. Each tool maps 1:1 to a fixture
/// file per identity; descriptions exist for client-side display only.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// The fixture-backed tool surface.
///
/// Static configuration: the tool endpoint never validates requested names
/// against this list. A request for an unlisted tool simply finds no fixture.
pub const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "fetch_net_worth",
        description: "Calculate comprehensive net worth from connected accounts: total value, assets, and liabilities with their breakdown.",
    },
    ToolSpec {
        name: "fetch_credit_report",
        description: "Retrieve the credit report: score, active loans, credit card utilisation, payment history, and date of birth.",
    },
    ToolSpec {
        name: "fetch_epf_details",
        description: "Retrieve provident fund account details: balance, employer and employee contributions, and interest credits.",
    },
    ToolSpec {
        name: "fetch_mf_transactions",
        description: "Retrieve mutual fund transaction history: orders, folios, and scheme details.",
    },
    ToolSpec {
        name: "fetch_bank_transactions",
        description: "Retrieve bank transactions for each connected bank account.",
    },
    ToolSpec {
        name: "fetch_stock_transactions",
        description: "Retrieve stock transaction history: orders and current holdings.",
    },
];
