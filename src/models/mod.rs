/// Entity models
///
/// Each type maps to one flat collection in the document store; the
/// collection name is the lowercased entity name. References between
/// entities are plain id strings by convention, never enforced.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const ACCOUNTS: &str = "account";
pub const CATEGORIES: &str = "category";
pub const TRANSACTIONS: &str = "transaction";
pub const BUDGETS: &str = "budget";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Cash,
    Card,
    Bank,
    Other,
}

impl Default for AccountKind {
    fn default() -> Self {
        AccountKind::Other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Expense,
    Income,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Expense
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Monthly,
    Weekly,
    Yearly,
    Custom,
}

impl Default for BudgetPeriod {
    fn default() -> Self {
        BudgetPeriod::Monthly
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: AccountKind,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub date: NaiveDate,
    /// Magnitude only; the sign lives in `direction`
    pub amount: f64,
    #[serde(default)]
    pub direction: Direction,
    pub description: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    pub category_id: String,
    pub amount: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_color() -> String {
    "#64748b".to_string()
}

/// Categories seeded by POST /api/setup/defaults when the collection is empty
pub fn default_categories() -> Vec<NewCategory> {
    [
        ("Groceries", "#22c55e", "shopping-basket"),
        ("Restaurants", "#f97316", "utensils"),
        ("Transport", "#06b6d4", "car"),
        ("Rent", "#6366f1", "home"),
        ("Utilities", "#14b8a6", "zap"),
        ("Salary", "#84cc16", "banknote"),
        ("Other", "#64748b", "dots"),
    ]
    .into_iter()
    .map(|(name, color, icon)| NewCategory {
        name: name.to_string(),
        color: color.to_string(),
        icon: Some(icon.to_string()),
    })
    .collect()
}

/// Account seeded alongside the default categories
pub fn default_cash_account() -> NewAccount {
    NewAccount {
        name: "Cash".to_string(),
        kind: AccountKind::Cash,
        currency: "USD".to_string(),
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn account_defaults_apply() {
        let account: NewAccount = serde_json::from_str(r#"{"name": "Wallet"}"#).unwrap();
        assert_eq!(account.kind, AccountKind::Other);
        assert_eq!(account.currency, "USD");
        assert_eq!(account.note, None);
    }

    #[test]
    fn account_type_uses_json_field_name() {
        let account: NewAccount =
            serde_json::from_str(r#"{"name": "Checking", "type": "bank"}"#).unwrap();
        assert_eq!(account.kind, AccountKind::Bank);

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "bank");
    }

    #[test]
    fn category_defaults_apply() {
        let category: NewCategory = serde_json::from_str(r#"{"name": "Travel"}"#).unwrap();
        assert_eq!(category.color, "#64748b");
        assert_eq!(category.icon, None);
    }

    #[test]
    fn transaction_defaults_and_date_format() {
        let tx: NewTransaction = serde_json::from_str(
            r#"{"date": "2025-01-31", "amount": 12.5, "description": "Coffee"}"#,
        )
        .unwrap();
        assert_eq!(tx.direction, Direction::Expense);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(tx.category_id, None);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["date"], "2025-01-31");
        assert_eq!(json["direction"], "expense");
    }

    #[test]
    fn transaction_requires_description() {
        let result: Result<NewTransaction, _> =
            serde_json::from_str(r#"{"date": "2025-01-31", "amount": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn budget_defaults_apply() {
        let budget: NewBudget =
            serde_json::from_str(r#"{"category_id": "abc", "amount": 300.0}"#).unwrap();
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(budget.start_date, None);
        assert_eq!(budget.end_date, None);
    }

    #[test]
    fn seed_set_is_fixed() {
        let categories = default_categories();
        assert_eq!(categories.len(), 7);
        assert_eq!(categories[0].name, "Groceries");
        assert_eq!(categories[6].name, "Other");

        let cash = default_cash_account();
        assert_eq!(cash.kind, AccountKind::Cash);
        assert_eq!(cash.currency, "USD");
    }
}
