// src/mainbot/bonus.rs
use crate::db::{get_decimal, get_opt_decimal, get_opt_timestamp};
use crate::utils::{days_since, format_percent, format_usd};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;

/// Row of the mainbot `bonuses` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bonus {
    pub bonus_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    /// Receiver of the bonus.
    pub user_id: i64,
    /// The downline member whose purchase generated it.
    pub downline_id: Option<i64>,
    pub purchase_id: Option<i64>,
    pub project_id: Option<i64>,
    pub option_id: Option<i64>,
    pub pack_qty: Option<i64>,
    pub pack_price: Option<Decimal>,
    pub upline_level: Option<i64>,
    /// Percentage, e.g. `12.50`.
    pub bonus_rate: Decimal,
    pub bonus_amount: Decimal,
    pub status: String,
    pub notes: Option<String>,
    pub commission_type: Option<String>,
    pub from_rank: Option<String>,
    pub source_rank: Option<String>,
    pub compression_applied: Option<i64>,
}

pub(crate) const BONUS_COLUMNS: &str = r#"
    "bonusID", "createdAt", "userID", "downlineID", "purchaseID", "projectID", "optionID",
    "packQty", "packPrice", "uplineLevel", "bonusRate", "bonusAmount", "status", "notes",
    "commissionType", "fromRank", "sourceRank", "compressionApplied"
"#;

impl Bonus {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Bonus {
            bonus_id: row.get("bonusID")?,
            created_at: get_opt_timestamp(row, "createdAt")?,
            user_id: row.get("userID")?,
            downline_id: row.get("downlineID")?,
            purchase_id: row.get("purchaseID")?,
            project_id: row.get("projectID")?,
            option_id: row.get("optionID")?,
            pack_qty: row.get("packQty")?,
            pack_price: get_opt_decimal(row, "packPrice")?,
            upline_level: row.get("uplineLevel")?,
            bonus_rate: get_decimal(row, "bonusRate")?,
            bonus_amount: get_decimal(row, "bonusAmount")?,
            status: row.get::<_, Option<String>>("status")?.unwrap_or_else(|| "pending".to_string()),
            notes: row.get("notes")?,
            commission_type: row.get("commissionType")?,
            from_rank: row.get("fromRank")?,
            source_rank: row.get("sourceRank")?,
            compression_applied: row.get("compressionApplied")?,
        })
    }

    pub fn status_display(&self) -> String {
        match self.status.as_str() {
            "pending" => "⏳ Pending".to_string(),
            "processing" => "🔄 Processing".to_string(),
            "paid" => "✅ Paid".to_string(),
            "cancelled" => "❌ Cancelled".to_string(),
            "error" => "⚠️ Error".to_string(),
            other => other.to_string(),
        }
    }

    pub fn formatted_amount(&self) -> String {
        format_usd(self.bonus_amount)
    }

    pub fn formatted_rate(&self) -> String {
        format_percent(self.bonus_rate)
    }

    fn level_label(&self) -> String {
        match self.upline_level {
            Some(level) if level != 0 => level.to_string(),
            _ => "N/A".to_string(),
        }
    }

    /// Newer rows carry `commissionType`; older ones are classified by
    /// whether a downline generated the bonus.
    pub fn bonus_type(&self) -> String {
        if let Some(kind) = self.commission_type.as_deref().filter(|k| !k.is_empty()) {
            return match kind {
                "differential" => "Differential Bonus".to_string(),
                "referral" => format!("Referral Level {}", self.level_label()),
                "pioneer" => "Pioneer Bonus".to_string(),
                "global_pool" => "Global Pool".to_string(),
                "investment_package" => "Investment Package Bonus".to_string(),
                other => other.to_string(),
            };
        }
        match self.downline_id {
            Some(id) if id != 0 => format!("Referral Level {}", self.level_label()),
            _ => "System Bonus".to_string(),
        }
    }

    pub fn days_ago(&self, now: DateTime<Utc>) -> i64 {
        days_since(self.created_at, now)
    }
}
