// src/mainbot/transfer.rs
use crate::db::{get_decimal, get_opt_timestamp};
use crate::utils::{days_since, format_usd, join_name};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;

/// Row of the mainbot `transfers` table: a move of funds between two users' balances.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transfer {
    pub transfer_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub sender_user_id: Option<i64>,
    pub sender_firstname: String,
    pub sender_surname: Option<String>,
    pub from_balance: String,
    pub amount: Decimal,
    pub receiver_user_id: Option<i64>,
    pub receiver_firstname: String,
    pub receiver_surname: Option<String>,
    pub to_balance: String,
    pub status: String,
    pub notes: Option<String>,
}

pub(crate) const TRANSFER_COLUMNS: &str = r#"
    "transferID", "createdAt", "senderUserID", "senderFirstname", "senderSurname",
    "fromBalance", "amount", "receiverUserID", "receiverFirstname", "receiverSurname",
    "toBalance", "status", "notes"
"#;

impl Transfer {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Transfer {
            transfer_id: row.get("transferID")?,
            created_at: get_opt_timestamp(row, "createdAt")?,
            sender_user_id: row.get("senderUserID")?,
            sender_firstname: row.get("senderFirstname")?,
            sender_surname: row.get("senderSurname")?,
            from_balance: row.get("fromBalance")?,
            amount: get_decimal(row, "amount")?,
            receiver_user_id: row.get("receiverUserID")?,
            receiver_firstname: row.get("receiverFirstname")?,
            receiver_surname: row.get("receiverSurname")?,
            to_balance: row.get("toBalance")?,
            status: row.get("status")?,
            notes: row.get("notes")?,
        })
    }

    pub fn formatted_amount(&self) -> String {
        format_usd(self.amount)
    }

    pub fn balance_flow(&self) -> String {
        format!("{} → {}", self.from_balance, self.to_balance)
    }

    pub fn sender_name(&self) -> String {
        join_name(Some(self.sender_firstname.as_str()), self.sender_surname.as_deref())
    }

    pub fn receiver_name(&self) -> String {
        join_name(Some(self.receiver_firstname.as_str()), self.receiver_surname.as_deref())
    }

    pub fn days_ago(&self, now: DateTime<Utc>) -> i64 {
        days_since(self.created_at, now)
    }
}
