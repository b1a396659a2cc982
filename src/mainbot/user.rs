// src/mainbot/user.rs
use crate::db::{get_opt_decimal, get_opt_json, get_opt_timestamp};
use crate::utils::{days_since, join_name, json_truthy};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

pub const KYC_VERIFIED: &str = "✅ Verified";
pub const KYC_NOT_VERIFIED: &str = "❌ Not verified";

/// Row of the mainbot `users` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub user_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    /// Telegram ID of the referring user.
    pub upline: Option<i64>,
    pub lang: Option<String>,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
    pub passport: Option<String>,
    pub city: Option<String>,
    pub telegram_id: i64,
    pub email: Option<String>,
    pub balance_active: Option<Decimal>,
    pub balance_passive: Option<Decimal>,
    pub personal_data: Option<Value>,
    pub last_active: Option<DateTime<Utc>>,
    pub status: String,
    pub notes: Option<String>,
    pub settings: Option<Value>,
}

pub(crate) const USER_COLUMNS: &str = r#"
    "userID", "createdAt", "upline", "lang", "firstname", "surname", "birthday",
    "address", "phoneNumber", "country", "passport", "city", "telegramID", "email",
    "balanceActive", "balancePassive", "personalData", "lastActive", "status",
    "notes", "settings"
"#;

impl User {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            user_id: row.get("userID")?,
            created_at: get_opt_timestamp(row, "createdAt")?,
            upline: row.get("upline")?,
            lang: row.get("lang")?,
            firstname: row.get("firstname")?,
            surname: row.get("surname")?,
            birthday: row.get("birthday")?,
            address: row.get("address")?,
            phone_number: row.get("phoneNumber")?,
            country: row.get("country")?,
            passport: row.get("passport")?,
            city: row.get("city")?,
            telegram_id: row.get("telegramID")?,
            email: row.get("email")?,
            balance_active: get_opt_decimal(row, "balanceActive")?,
            balance_passive: get_opt_decimal(row, "balancePassive")?,
            personal_data: get_opt_json(row, "personalData")?,
            last_active: get_opt_timestamp(row, "lastActive")?,
            status: row.get::<_, Option<String>>("status")?.unwrap_or_else(|| "active".to_string()),
            notes: row.get("notes")?,
            settings: get_opt_json(row, "settings")?,
        })
    }

    pub fn full_name(&self) -> String {
        let name = join_name(self.firstname.as_deref(), self.surname.as_deref());
        if name.is_empty() {
            format!("User {}", self.user_id)
        } else {
            name
        }
    }

    pub fn total_balance(&self) -> Decimal {
        self.balance_active.unwrap_or_default() + self.balance_passive.unwrap_or_default()
    }

    fn personal_field(&self, key: &str) -> Option<&Value> {
        match &self.personal_data {
            Some(Value::Object(map)) => map.get(key),
            _ => None,
        }
    }

    /// `personalData.kyc` may be an object carrying `status`, or a bare flag.
    pub fn kyc_status(&self) -> &'static str {
        let verified = match self.personal_field("kyc") {
            Some(Value::Object(kyc)) => kyc.get("status").and_then(Value::as_str) == Some("verified"),
            Some(other) => json_truthy(other),
            None => false,
        };
        if verified {
            KYC_VERIFIED
        } else {
            KYC_NOT_VERIFIED
        }
    }

    /// Strict form of [`User::kyc_status`]: only an object with `status: "verified"` counts.
    pub fn is_kyc_verified(&self) -> bool {
        match self.personal_field("kyc") {
            Some(Value::Object(kyc)) => kyc.get("status").and_then(Value::as_str) == Some("verified"),
            _ => false,
        }
    }

    pub fn is_profile_filled(&self) -> bool {
        self.personal_field("dataFilled").map(json_truthy).unwrap_or(false)
    }

    /// Percentage of the nine profile fields that are filled, rounded down.
    pub fn profile_completeness(&self) -> u32 {
        let fields = [
            &self.firstname,
            &self.surname,
            &self.email,
            &self.phone_number,
            &self.country,
            &self.city,
            &self.birthday,
            &self.address,
            &self.passport,
        ];
        let filled = fields
            .iter()
            .filter(|f| f.as_deref().is_some_and(|v| !v.is_empty()))
            .count() as u32;
        filled * 100 / fields.len() as u32
    }

    pub fn days_since_registration(&self, now: DateTime<Utc>) -> i64 {
        days_since(self.created_at, now)
    }
}
