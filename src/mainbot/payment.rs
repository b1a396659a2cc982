// src/mainbot/payment.rs
use crate::db::{get_decimal, get_opt_decimal, get_opt_timestamp};
use crate::utils::{days_since, format_usd};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;

pub const DIRECTION_INCOMING: &str = "incoming";

/// Row of the mainbot `payments` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Payment {
    pub payment_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: Option<i64>,
    pub firstname: String,
    pub surname: Option<String>,
    pub direction: String,
    pub amount: Decimal,
    pub method: String,
    pub from_wallet: Option<String>,
    pub to_wallet: Option<String>,
    pub txid: Option<String>,
    /// Amount in the payment currency, up to 8 decimals.
    pub sum_currency: Option<Decimal>,
    pub status: String,
    pub confirmed_by: Option<String>,
    pub confirmation_time: Option<DateTime<Utc>>,
}

pub(crate) const PAYMENT_COLUMNS: &str = r#"
    "paymentID", "createdAt", "userID", "firstname", "surname", "direction", "amount",
    "method", "fromWallet", "toWallet", "txid", "sumCurrency", "status", "confirmedBy",
    "confirmationTime"
"#;

impl Payment {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Payment {
            payment_id: row.get("paymentID")?,
            created_at: get_opt_timestamp(row, "createdAt")?,
            user_id: row.get("userID")?,
            firstname: row.get("firstname")?,
            surname: row.get("surname")?,
            direction: row
                .get::<_, Option<String>>("direction")?
                .unwrap_or_else(|| DIRECTION_INCOMING.to_string()),
            amount: get_decimal(row, "amount")?,
            method: row.get("method")?,
            from_wallet: row.get("fromWallet")?,
            to_wallet: row.get("toWallet")?,
            txid: row.get("txid")?,
            sum_currency: get_opt_decimal(row, "sumCurrency")?,
            status: row.get("status")?,
            confirmed_by: row.get("confirmedBy")?,
            confirmation_time: get_opt_timestamp(row, "confirmationTime")?,
        })
    }

    pub fn is_incoming(&self) -> bool {
        self.direction == DIRECTION_INCOMING
    }

    pub fn status_emoji(&self) -> String {
        let emoji = match self.status.as_str() {
            "completed" => "✅",
            "pending" => "⏳",
            "failed" => "❌",
            "cancelled" => "🚫",
            _ => "❓",
        };
        format!("{} {}", emoji, self.status)
    }

    pub fn direction_arrow(&self) -> &'static str {
        if self.is_incoming() {
            "⬇️"
        } else {
            "⬆️"
        }
    }

    pub fn formatted_amount(&self) -> String {
        let sign = if self.is_incoming() { '+' } else { '-' };
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

    fn payment(direction: &str, status: &str) -> Payment {
        Payment {
            payment_id: 1,
            created_at: None,
            user_id: Some(7),
            firstname: "Ivan".into(),
            surname: None,
            direction: direction.into(),
            amount: dec!(2500),
            method: "USDT".into(),
            from_wallet: None,
            to_wallet: None,
            txid: None,
            sum_currency: Some(dec!(2500.12345678)),
            status: status.into(),
            confirmed_by: None,
            confirmation_time: None,
        }
    }

    #[test]
    fn amount_sign_follows_direction() {
        assert_eq!(payment("incoming", "completed").formatted_amount(), "+$2,500.00");
        assert_eq!(payment("outgoing", "completed").formatted_amount(), "-$2,500.00");
        assert_eq!(payment("incoming", "completed").direction_arrow(), "⬇️");
        assert_eq!(payment("outgoing", "completed").direction_arrow(), "⬆️");
    }

    #[test]
    fn status_emoji_has_fallback() {
        assert_eq!(payment("incoming", "completed").status_emoji(), "✅ completed");
        assert_eq!(payment("incoming", "cancelled").status_emoji(), "🚫 cancelled");
        assert_eq!(payment("incoming", "refunded").status_emoji(), "❓ refunded");
    }

    #[test]
    fn missing_timestamp_is_zero_days() {
        assert_eq!(payment("incoming", "pending").days_ago(Utc::now()), 0);
    }
}
