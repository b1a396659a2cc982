// src/mainbot/purchase.rs
use crate::db::{get_decimal, get_opt_timestamp};
use crate::utils::{days_since, format_usd};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;

/// Row of the mainbot `purchases` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Purchase {
    pub purchase_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub project_name: String,
    pub option_id: Option<i64>,
    pub pack_qty: i64,
    pub pack_price: Decimal,
}

pub(crate) const PURCHASE_COLUMNS: &str = r#"
    "purchaseID", "createdAt", "userID", "projectID", "projectName", "optionID",
    "packQty", "packPrice"
"#;

impl Purchase {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Purchase {
            purchase_id: row.get("purchaseID")?,
            created_at: get_opt_timestamp(row, "createdAt")?,
            user_id: row.get("userID")?,
            project_id: row.get("projectID")?,
            project_name: row.get("projectName")?,
            option_id: row.get("optionID")?,
            pack_qty: row.get("packQty")?,
            pack_price: get_decimal(row, "packPrice")?,
        })
    }

    pub fn days_ago(&self, now: DateTime<Utc>) -> i64 {
        days_since(self.created_at, now)
    }

    pub fn formatted_price(&self) -> String {
        format_usd(self.pack_price)
    }

    pub fn description(&self) -> String {
        format!("{} - {} units", self.project_name, self.pack_qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn display_helpers() {
        let purchase = Purchase {
            purchase_id: 3,
            created_at: Some(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()),
            user_id: Some(7),
            project_id: Some(2),
            project_name: "Solar Farm".into(),
            option_id: None,
            pack_qty: 4,
            pack_price: dec!(1250.5),
        };
        assert_eq!(purchase.description(), "Solar Farm - 4 units");
        assert_eq!(purchase.formatted_price(), "$1,250.50");
        let now = Utc.with_ymd_and_hms(2024, 5, 11, 8, 59, 59).unwrap();
        assert_eq!(purchase.days_ago(now), 9);
    }
}
