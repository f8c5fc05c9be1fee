//! # Balance summary
//!
//! Read-only account aggregates shown on the dashboard, plus the currency
//! formatting shared with the animated counter.

use serde::{Deserialize, Serialize};

/// One linked bank account as reported by the aggregation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub official_name: Option<String>,
    #[serde(default)]
    pub mask: Option<String>,
    pub current_balance: f64,
    #[serde(default)]
    pub available_balance: Option<f64>,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
}

/// Accounts plus the totals shown above the doughnut chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub accounts: Vec<Account>,
    pub total_banks: usize,
    pub total_current_balance: f64,
}

/// Share of the total held by one account
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total in `0.0..=1.0`
    pub share: f64,
}

impl AccountSummary {
    /// Builds a summary, computing the totals from the account list
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let total_banks = accounts.len();
        let total_current_balance = accounts.iter().map(|a| a.current_balance).sum();
        Self {
            accounts,
            total_banks,
            total_current_balance,
        }
    }

    pub fn heading(&self) -> String {
        format!("{} Bank Accounts", self.total_banks)
    }

    /// One slice per account, in account order
    pub fn distribution(&self) -> Vec<BalanceSlice> {
        let total: f64 = self.accounts.iter().map(|a| a.current_balance).sum();
        self.accounts
            .iter()
            .map(|account| BalanceSlice {
                label: account.name.clone(),
                value: account.current_balance,
                share: if total > 0.0 {
                    (account.current_balance / total).clamp(0.0, 1.0)
                } else {
                    0.0
                },
            })
            .collect()
    }
}

/// Formats `amount` as `<symbol><grouped integer>.<decimals>`, e.g. `$1,234.50`
/// or `-$12.00`.
pub fn format_amount(amount: f64, symbol: &str, decimals: usize) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Avoid "-$0.00" when a tiny negative rounds to zero
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, symbol, grouped, fraction),
        None => format!("{}{}{}", sign, symbol, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, balance: f64) -> Account {
        Account {
            id: id.to_string(),
            name: format!("Account {}", id),
            official_name: None,
            mask: None,
            current_balance: balance,
            available_balance: None,
            account_type: Some("depository".to_string()),
        }
    }

    #[test]
    fn test_total_renders_the_same_in_any_order() {
        let forward = AccountSummary {
            accounts: vec![account("a", 100.0), account("b", 250.0)],
            total_banks: 2,
            total_current_balance: 350.0,
        };
        let reversed = AccountSummary {
            accounts: vec![account("b", 250.0), account("a", 100.0)],
            ..forward.clone()
        };

        for summary in [&forward, &reversed] {
            assert_eq!(format_amount(summary.total_current_balance, "$", 2), "$350.00");
            assert_eq!(summary.heading(), "2 Bank Accounts");
        }
        assert_eq!(AccountSummary::from_accounts(reversed.accounts.clone()), reversed);
    }

    #[test]
    fn test_from_accounts_computes_totals() {
        let summary = AccountSummary::from_accounts(vec![account("a", 10.25), account("b", 0.5), account("c", -3.0)]);
        assert_eq!(summary.total_banks, 3);
        assert!((summary.total_current_balance - 7.75).abs() < 1e-9);

        let empty = AccountSummary::from_accounts(Vec::new());
        assert_eq!(empty, AccountSummary::default());
    }

    #[test]
    fn test_distribution_shares() {
        let summary = AccountSummary::from_accounts(vec![account("a", 100.0), account("b", 300.0)]);
        let slices = summary.distribution();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Account a");
        assert!((slices[0].share - 0.25).abs() < 1e-9);
        assert!((slices[1].share - 0.75).abs() < 1e-9);

        let overdrawn = AccountSummary::from_accounts(vec![account("a", -50.0)]);
        assert_eq!(overdrawn.distribution()[0].share, 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, "$", 2), "$0.00");
        assert_eq!(format_amount(42.0, "$", 2), "$42.00");
        assert_eq!(format_amount(100.5, "$", 2), "$100.50");
        assert_eq!(format_amount(1234567.891, "$", 2), "$1,234,567.89");
        assert_eq!(format_amount(-12.5, "$", 2), "-$12.50");
        assert_eq!(format_amount(-0.001, "$", 2), "$0.00");
        assert_eq!(format_amount(999.999, "€", 2), "€1,000.00");
        assert_eq!(format_amount(1500.0, "$", 0), "$1,500");
    }

    #[test]
    fn test_summary_wire_shape() {
        let json = r#"{
            "accounts": [{"id": "a", "name": "Checking", "currentBalance": 100.0, "type": "depository"}],
            "totalBanks": 1,
            "totalCurrentBalance": 100.0
        }"#;
        let summary: AccountSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.accounts[0].account_type.as_deref(), Some("depository"));
        assert_eq!(summary.total_banks, 1);
    }
}
