//! Profile browsing and search

#![allow(clippy::result_large_err)]

use std::time::Instant;

use bureau_core::model::{User, UserId};
use bureau_core::{filter_users, log_op_end, log_op_error, log_op_start, FilterCriteria};
use bureau_store::errors::Result;
use bureau_store::SqliteRepo;
use rusqlite::Connection;

use super::elapsed_ms;

/// Every profile except the viewer's own, in storage order
pub fn browse_profiles(conn: &Connection, viewer: UserId) -> Result<Vec<User>> {
    log_op_start!("browse_profiles", user_id = viewer.get());
    let start = Instant::now();

    let result = SqliteRepo::list_users(conn)
        .map(|users| users.into_iter().filter(|u| u.id != viewer).collect::<Vec<_>>())
        .map_err(|e| {
            log_op_error!("browse_profiles", e.clone(), duration_ms = elapsed_ms(start));
            e
        })?;

    log_op_end!(
        "browse_profiles",
        duration_ms = elapsed_ms(start),
        result_len = result.len()
    );

    Ok(result)
}

/// Load all users and keep those matching `criteria`, in storage order
pub fn search_profiles(conn: &Connection, criteria: &FilterCriteria) -> Result<Vec<User>> {
    log_op_start!(
        "search_profiles",
        min_age = criteria.min_age,
        max_age = criteria.max_age,
        gender = %criteria.gender,
        interests = %criteria.interests
    );
    let start = Instant::now();

    let result = SqliteRepo::list_users(conn)
        .map(|users| filter_users(users, criteria))
        .map_err(|e| {
            log_op_error!("search_profiles", e.clone(), duration_ms = elapsed_ms(start));
            e
        })?;

    log_op_end!(
        "search_profiles",
        duration_ms = elapsed_ms(start),
        result_len = result.len()
    );

    Ok(result)
}
