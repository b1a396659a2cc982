// src/mainbot/summary.rs
use crate::errors::Result;
use crate::mainbot::balance::{BalanceKind, BalanceRecord};
use crate::mainbot::bonus::Bonus;
use crate::mainbot::payment::Payment;
use crate::mainbot::purchase::Purchase;
use crate::mainbot::read_ops;
use crate::mainbot::transfer::Transfer;
use crate::mainbot::user::User;
use crate::utils::format_usd;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;
use std::fmt::Write;
use tracing::info;

/// Everything the operator view shows about one user.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub user: User,
    pub referral_count: i64,
    pub payments: Vec<Payment>,
    pub purchases: Vec<Purchase>,
    pub bonuses_received: Vec<Bonus>,
    pub active_balance_records: Vec<BalanceRecord>,
    pub passive_balance_records: Vec<BalanceRecord>,
    pub sent_transfers: Vec<Transfer>,
    pub received_transfers: Vec<Transfer>,
}

impl UserSummary {
    pub fn load(conn: &Connection, user_id: i64) -> Result<Self> {
        let user = read_ops::load_user(conn, user_id)?;
        let summary = UserSummary {
            referral_count: read_ops::count_referrals(conn, &user)?,
            payments: read_ops::list_payments_for_user(conn, user_id)?,
            purchases: read_ops::list_purchases_for_user(conn, user_id)?,
            bonuses_received: read_ops::list_bonuses_received(conn, user_id)?,
            active_balance_records: read_ops::list_balance_records(conn, BalanceKind::Active, user_id)?,
            passive_balance_records: read_ops::list_balance_records(conn, BalanceKind::Passive, user_id)?,
            sent_transfers: read_ops::list_sent_transfers(conn, user_id)?,
            received_transfers: read_ops::list_received_transfers(conn, user_id)?,
            user,
        };
        info!("Loaded summary for user {}", user_id);
        Ok(summary)
    }

    /// Plain-text operator view. `now` anchors the "days ago" columns.
    pub fn render(&self, now: DateTime<Utc>) -> String {
        let user = &self.user;
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} (id {}, telegram {})", user.full_name(), user.user_id, user.telegram_id);
        let _ = writeln!(out, "Status: {}  KYC: {}", user.status, user.kyc_status());
        let _ = writeln!(
            out,
            "Registered {} days ago, profile {}% complete, {} referrals",
            user.days_since_registration(now),
            user.profile_completeness(),
            self.referral_count
        );
        let _ = writeln!(
            out,
            "Balance: {} (active {}, passive {})",
            format_usd(user.total_balance()),
            format_usd(user.balance_active.unwrap_or_default()),
            format_usd(user.balance_passive.unwrap_or_default())
        );

        if !self.payments.is_empty() {
            let _ = writeln!(out, "\nPayments:");
            for p in &self.payments {
                let _ = writeln!(
                    out,
                    "  {} {} via {}  {}  ({}d ago)",
                    p.direction_arrow(),
                    p.formatted_amount(),
                    p.method,
                    p.status_emoji(),
                    p.days_ago(now)
                );
            }
        }
        if !self.purchases.is_empty() {
            let _ = writeln!(out, "\nPurchases:");
            for p in &self.purchases {
                let _ = writeln!(out, "  {} at {}  ({}d ago)", p.description(), p.formatted_price(), p.days_ago(now));
            }
        }
        if !self.bonuses_received.is_empty() {
            let _ = writeln!(out, "\nBonuses:");
            for b in &self.bonuses_received {
                let _ = writeln!(
                    out,
                    "  {} {} ({})  {}",
                    b.bonus_type(),
                    b.formatted_amount(),
                    b.formatted_rate(),
                    b.status_display()
                );
            }
        }
        for (title, records) in [
            ("Active balance", &self.active_balance_records),
            ("Passive balance", &self.passive_balance_records),
        ] {
            if records.is_empty() {
                continue;
            }
            let _ = writeln!(out, "\n{}:", title);
            for r in records {
                let _ = writeln!(out, "  {} {}  ({}d ago)", r.formatted_amount(), r.reason, r.days_ago(now));
            }
        }
        if !self.sent_transfers.is_empty() || !self.received_transfers.is_empty() {
            let _ = writeln!(out, "\nTransfers:");
            for t in self.sent_transfers.iter().chain(&self.received_transfers) {
                let _ = writeln!(
                    out,
                    "  {} -> {}  {} ({})  {}",
                    t.sender_name(),
                    t.receiver_name(),
                    t.formatted_amount(),
                    t.balance_flow(),
                    t.status
                );
            }
        }
        out
    }
}
