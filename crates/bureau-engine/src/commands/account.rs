//! Registration, login and profile maintenance

#![allow(clippy::result_large_err)]

use std::time::Instant;

use bureau_core::errors::BureauError;
use bureau_core::model::{User, UserId};
use bureau_core::rules::validation::{validate_credentials, validate_profile_form};
use bureau_core::{log_op_end, log_op_error, log_op_start, ProfileForm};
use bureau_store::errors::Result;
use bureau_store::SqliteRepo;
use rusqlite::Connection;

use super::elapsed_ms;

/// Register a new user from raw form input
///
/// ## Errors
///
/// - `MissingField` / `InvalidInput`: form validation failed; nothing written
/// - `DuplicateName`: the name is taken; nothing written
/// - `Persistence`: database error
pub fn register(conn: &Connection, form: &ProfileForm) -> Result<UserId> {
    log_op_start!("register", user_name = %form.name);
    let start = Instant::now();

    let result = register_impl(conn, form).map_err(|e| {
        log_op_error!("register", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "register",
        duration_ms = elapsed_ms(start),
        user_id = result.get()
    );

    Ok(result)
}

fn register_impl(conn: &Connection, form: &ProfileForm) -> Result<UserId> {
    let new_user = validate_profile_form(form)?;
    SqliteRepo::create_user(conn, &new_user)
}

/// Log in with a name and password
///
/// An unknown name and a wrong password produce the same error.
///
/// ## Errors
///
/// - `MissingField`: name or password empty
/// - `Unauthorised`: no user with that name and password
pub fn login(conn: &Connection, name: &str, password: &str) -> Result<User> {
    log_op_start!("login", user_name = %name);
    let start = Instant::now();

    let result = login_impl(conn, name, password).map_err(|e| {
        log_op_error!("login", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!(
        "login",
        duration_ms = elapsed_ms(start),
        user_id = result.id.get()
    );

    Ok(result)
}

fn login_impl(conn: &Connection, name: &str, password: &str) -> Result<User> {
    validate_credentials(name, password)?;
    SqliteRepo::authenticate(conn, name, password)?
        .ok_or_else(|| BureauError::AuthenticationFailed.into())
}

/// Load a single user's record (the "my profile" view)
///
/// ## Errors
///
/// - `NotFound`: no such user
pub fn view_profile(conn: &Connection, id: UserId) -> Result<User> {
    log_op_start!("view_profile", user_id = id.get());
    let start = Instant::now();

    let result = require_user(conn, id).map_err(|e| {
        log_op_error!("view_profile", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!("view_profile", duration_ms = elapsed_ms(start));

    Ok(result)
}

/// Overwrite every field of an existing profile
///
/// The form is validated like a registration. No separate name check is
/// made; renaming onto a taken name is refused by the store's UNIQUE
/// constraint.
///
/// ## Errors
///
/// - `MissingField` / `InvalidInput`: form validation failed
/// - `NotFound`: no such user
/// - `DuplicateName`: the new name belongs to another user
pub fn update_profile(conn: &Connection, id: UserId, form: &ProfileForm) -> Result<User> {
    log_op_start!("update_profile", user_id = id.get());
    let start = Instant::now();

    let result = update_profile_impl(conn, id, form).map_err(|e| {
        log_op_error!("update_profile", e.clone(), duration_ms = elapsed_ms(start));
        e
    })?;

    log_op_end!("update_profile", duration_ms = elapsed_ms(start));

    Ok(result)
}

fn update_profile_impl(conn: &Connection, id: UserId, form: &ProfileForm) -> Result<User> {
    let updated = validate_profile_form(form)?;
    require_user(conn, id)?;
    SqliteRepo::update_user(conn, id, &updated)?;
    Ok(updated.into_user(id))
}

pub(crate) fn require_user(conn: &Connection, id: UserId) -> Result<User> {
    SqliteRepo::get_user(conn, id)?.ok_or_else(|| {
        BureauError::UserNotFound { user_id: id.get() }.into()
    })
}
