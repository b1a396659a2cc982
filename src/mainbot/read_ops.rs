// src/mainbot/read_ops.rs
// SELECT-only loaders. Nothing here writes to the mainbot database.

use crate::errors::{DatabaseError, Result};
use crate::mainbot::balance::{BalanceKind, BalanceRecord, BALANCE_COLUMNS};
use crate::mainbot::bonus::{Bonus, BONUS_COLUMNS};
use crate::mainbot::payment::{Payment, PAYMENT_COLUMNS};
use crate::mainbot::purchase::{Purchase, PURCHASE_COLUMNS};
use crate::mainbot::transfer::{Transfer, TRANSFER_COLUMNS};
use crate::mainbot::user::{User, USER_COLUMNS};
use rusqlite::{params, Connection, OptionalExtension, Params, Row};
use tracing::debug;

fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map)?;
    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}

#[tracing::instrument(skip(conn))]
pub fn load_user(conn: &Connection, user_id: i64) -> Result<User> {
    let sql = format!(r#"SELECT {} FROM "users" WHERE "userID" = ?1"#, USER_COLUMNS);
    conn.query_row(&sql, params![user_id], User::from_row)
        .optional()?
        .ok_or_else(|| DatabaseError::NotFound(format!("user {}", user_id)))
}

#[tracing::instrument(skip(conn))]
pub fn load_user_by_telegram_id(conn: &Connection, telegram_id: i64) -> Result<User> {
    let sql = format!(r#"SELECT {} FROM "users" WHERE "telegramID" = ?1"#, USER_COLUMNS);
    conn.query_row(&sql, params![telegram_id], User::from_row)
        .optional()?
        .ok_or_else(|| DatabaseError::NotFound(format!("user with telegram id {}", telegram_id)))
}

/// Users invited directly by `user` (their `upline` is this user's Telegram ID).
#[tracing::instrument(skip(conn, user), fields(user_id = user.user_id))]
pub fn list_referrals(conn: &Connection, user: &User) -> Result<Vec<User>> {
    let sql = format!(
        r#"SELECT {} FROM "users" WHERE "upline" = ?1 ORDER BY "createdAt", "userID""#,
        USER_COLUMNS
    );
    let referrals = query_all(conn, &sql, params![user.telegram_id], User::from_row)?;
    debug!("Loaded {} referrals", referrals.len());
    Ok(referrals)
}

pub fn count_referrals(conn: &Connection, user: &User) -> Result<i64> {
    let count = conn.query_row(
        r#"SELECT COUNT(*) FROM "users" WHERE "upline" = ?1"#,
        params![user.telegram_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

#[tracing::instrument(skip(conn))]
pub fn list_payments_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Payment>> {
    let sql = format!(
        r#"SELECT {} FROM "payments" WHERE "userID" = ?1 ORDER BY "createdAt" DESC, "paymentID" DESC"#,
        PAYMENT_COLUMNS
    );
    let payments = query_all(conn, &sql, params![user_id], Payment::from_row)?;
    debug!("Loaded {} payments", payments.len());
    Ok(payments)
}

#[tracing::instrument(skip(conn))]
pub fn list_purchases_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Purchase>> {
    let sql = format!(
        r#"SELECT {} FROM "purchases" WHERE "userID" = ?1 ORDER BY "createdAt" DESC, "purchaseID" DESC"#,
        PURCHASE_COLUMNS
    );
    let purchases = query_all(conn, &sql, params![user_id], Purchase::from_row)?;
    debug!("Loaded {} purchases", purchases.len());
    Ok(purchases)
}

/// Bonuses paid to `user_id`.
#[tracing::instrument(skip(conn))]
pub fn list_bonuses_received(conn: &Connection, user_id: i64) -> Result<Vec<Bonus>> {
    let sql = format!(
        r#"SELECT {} FROM "bonuses" WHERE "userID" = ?1 ORDER BY "createdAt" DESC, "bonusID" DESC"#,
        BONUS_COLUMNS
    );
    query_all(conn, &sql, params![user_id], Bonus::from_row)
}

/// Bonuses that `user_id`'s activity generated for their upline.
#[tracing::instrument(skip(conn))]
pub fn list_bonuses_generated(conn: &Connection, user_id: i64) -> Result<Vec<Bonus>> {
    let sql = format!(
        r#"SELECT {} FROM "bonuses" WHERE "downlineID" = ?1 ORDER BY "createdAt" DESC, "bonusID" DESC"#,
        BONUS_COLUMNS
    );
    query_all(conn, &sql, params![user_id], Bonus::from_row)
}

#[tracing::instrument(skip(conn))]
pub fn list_balance_records(
    conn: &Connection,
    kind: BalanceKind,
    user_id: i64,
) -> Result<Vec<BalanceRecord>> {
    let sql = format!(
        r#"SELECT {} FROM "{}" WHERE "userID" = ?1 ORDER BY "createdAt" DESC, "paymentID" DESC"#,
        BALANCE_COLUMNS,
        kind.table()
    );
    query_all(conn, &sql, params![user_id], |row| BalanceRecord::from_row(kind, row))
}

#[tracing::instrument(skip(conn))]
pub fn list_sent_transfers(conn: &Connection, user_id: i64) -> Result<Vec<Transfer>> {
    let sql = format!(
        r#"SELECT {} FROM "transfers" WHERE "senderUserID" = ?1 ORDER BY "createdAt" DESC, "transferID" DESC"#,
        TRANSFER_COLUMNS
    );
    query_all(conn, &sql, params![user_id], Transfer::from_row)
}

#[tracing::instrument(skip(conn))]
pub fn list_received_transfers(conn: &Connection, user_id: i64) -> Result<Vec<Transfer>> {
    let sql = format!(
        r#"SELECT {} FROM "transfers" WHERE "receiverUserID" = ?1 ORDER BY "createdAt" DESC, "transferID" DESC"#,
        TRANSFER_COLUMNS
    );
    query_all(conn, &sql, params![user_id], Transfer::from_row)
}
