// src/mainbot/balance.rs
use crate::db::{get_decimal, get_opt_timestamp};
use crate::utils::{days_since, format_usd};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;

/// The two balance ledgers share one row shape.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BalanceKind {
    Active,
    Passive,
}

impl BalanceKind {
    pub fn table(self) -> &'static str {
        match self {
            BalanceKind::Active => "active_balances",
            BalanceKind::Passive => "passive_balances",
        }
    }
}

/// Row of `active_balances` or `passive_balances`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalanceRecord {
    pub kind: BalanceKind,
    pub payment_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: Option<i64>,
    pub firstname: String,
    pub surname: Option<String>,
    pub amount: Decimal,
    pub status: String,
    pub reason: String,
    pub link: Option<String>,
    pub notes: Option<String>,
}

pub(crate) const BALANCE_COLUMNS: &str = r#"
    "paymentID", "createdAt", "userID", "firstname", "surname", "amount", "status",
    "reason", "link", "notes"
"#;

impl BalanceRecord {
    pub fn from_row(kind: BalanceKind, row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(BalanceRecord {
            kind,
            payment_id: row.get("paymentID")?,
            created_at: get_opt_timestamp(row, "createdAt")?,
            user_id: row.get("userID")?,
            firstname: row.get("firstname")?,
            surname: row.get("surname")?,
            amount: get_decimal(row, "amount")?,
            status: row.get("status")?,
            reason: row.get("reason")?,
            link: row.get("link")?,
            notes: row.get("notes")?,
        })
    }

    /// Credits get a leading `+`; debits keep the minus after the dollar sign.
    pub fn formatted_amount(&self) -> String {
        let sign = if self.amount > Decimal::ZERO { "+" } else { "" };
        format!("{}{}", sign, format_usd(self.amount))
    }

    pub fn days_ago(&self, now: DateTime<Utc>) -> i64 {
        days_since(self.created_at, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(amount: Decimal) -> BalanceRecord {
        BalanceRecord {
            kind: BalanceKind::Active,
            payment_id: 1,
            created_at: None,
            user_id: Some(7),
            firstname: "Ivan".into(),
            surname: None,
            amount,
            status: "done".into(),
            reason: "bonus".into(),
            link: None,
            notes: None,
        }
    }

    #[test]
    fn positive_amounts_are_signed() {
        assert_eq!(record(dec!(1200)).formatted_amount(), "+$1,200.00");
        assert_eq!(record(dec!(0)).formatted_amount(), "$0.00");
        assert_eq!(record(dec!(-35.5)).formatted_amount(), "$-35.50");
    }

    #[test]
    fn kinds_map_to_tables() {
        assert_eq!(BalanceKind::Active.table(), "active_balances");
        assert_eq!(BalanceKind::Passive.table(), "passive_balances");
    }
}
