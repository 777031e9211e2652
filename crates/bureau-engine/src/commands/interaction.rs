//! Likes and messages

#![allow(clippy::result_large_err)]

use std::time::Instant;

use bureau_core::model::{Like, Message, UserId};
use bureau_core::rules::validation::validate_message_body;
use bureau_core::{log_op_end, log_op_error, log_op_start};
use bureau_store::errors::Result;
use bureau_store::SqliteRepo;
use rusqlite::Connection;

use super::account::require_user;
use super::elapsed_ms;

/// Like another user's profile
///
/// Liking the same profile again records another like.
pub fn like(conn: &Connection, liker: UserId, liked: UserId) -> Result<()> {
    log_op_start!("like", user_id = liker.get(), target_user_id = liked.get());
    let start = Instant::now();

    SqliteRepo::record_like(conn, liker, liked).map_err(|e| {
        log_op_error!("like", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!("like", duration_ms = elapsed_ms(start));

    Ok(())
}

/// Likes `user` has given, oldest first
pub fn likes_given(conn: &Connection, user: UserId) -> Result<Vec<Like>> {
    log_op_start!("likes_given", user_id = user.get());
    let start = Instant::now();

    let result = SqliteRepo::likes_given(conn, user).map_err(|e| {
        log_op_error!("likes_given", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "likes_given",
        duration_ms = elapsed_ms(start),
        result_len = result.len()
    );

    Ok(result)
}

/// Send a text message
///
/// ## Errors
///
/// - `InvalidInput`: empty body; nothing is written
/// - `ConstraintViolation`: sender or receiver does not exist
pub fn send_message(conn: &Connection, sender: UserId, receiver: UserId, body: &str) -> Result<()> {
    log_op_start!(
        "send_message",
        user_id = sender.get(),
        target_user_id = receiver.get()
    );
    let start = Instant::now();

    send_message_impl(conn, sender, receiver, body).map_err(|e| {
        log_op_error!("send_message", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!("send_message", duration_ms = elapsed_ms(start));

    Ok(())
}

fn send_message_impl(conn: &Connection, sender: UserId, receiver: UserId, body: &str) -> Result<()> {
    validate_message_body(body)?;
    SqliteRepo::send_message(conn, sender, receiver, body)
}

/// All messages `user` sent or received, oldest first
///
/// ## Errors
///
/// - `NotFound`: no such user
pub fn messages_for(conn: &Connection, user: UserId) -> Result<Vec<Message>> {
    log_op_start!("messages_for", user_id = user.get());
    let start = Instant::now();

    let result = messages_for_impl(conn, user).map_err(|e| {
        log_op_error!("messages_for", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "messages_for",
        duration_ms = elapsed_ms(start),
        result_len = result.len()
    );

    Ok(result)
}

fn messages_for_impl(conn: &Connection, user: UserId) -> Result<Vec<Message>> {
    require_user(conn, user)?;
    SqliteRepo::get_messages(conn, user)
}
