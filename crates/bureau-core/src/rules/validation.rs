//! Input validation for the bureau forms
//!
//! Forms deliver raw text. Validation either produces a fully typed value or
//! rejects the whole submission, so nothing is written on failure.

use crate::errors::{BureauError, Result};
use crate::model::{Gender, NewUser, User};

/// Raw registration / profile-edit form input
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub password: String,
    pub age: String,
    pub gender: String,
    pub interests: String,
    pub photo: String,
}

impl From<&User> for ProfileForm {
    /// Pre-fill an edit form with the stored values
    fn from(user: &User) -> Self {
        ProfileForm {
            name: user.name.clone(),
            password: user.password.expose().clone(),
            age: user.age.to_string(),
            gender: user.gender.label().to_string(),
            interests: user.interests.clone(),
            photo: user.photo.clone(),
        }
    }
}

/// Validate a registration or profile-edit form
///
/// Checks run in form order: every field must be non-empty, then the age must
/// parse as an integer, then the gender must be a known label.
///
/// # Errors
/// * `MissingField` - the first empty field, by form order
/// * `InvalidAge` - age text is not an integer
/// * `InvalidGender` - gender text is not a known label
pub fn validate_profile_form(form: &ProfileForm) -> Result<NewUser> {
    let fields = [
        ("name", &form.name),
        ("password", &form.password),
        ("age", &form.age),
        ("gender", &form.gender),
        ("interests", &form.interests),
        ("photo", &form.photo),
    ];
    for (field, value) in fields {
        require(field, value)?;
    }

    let age = parse_age(&form.age)?;
    let gender: Gender = form.gender.parse()?;

    Ok(NewUser {
        name: form.name.clone(),
        password: form.password.clone().into(),
        age,
        gender,
        interests: form.interests.clone(),
        photo: form.photo.clone(),
    })
}

/// Validate login input before it reaches the store
///
/// # Errors
/// * `MissingField` - name or password is empty
pub fn validate_credentials(name: &str, password: &str) -> Result<()> {
    require("name", name)?;
    require("password", password)
}

/// Reject an empty message body
///
/// Whitespace-only bodies are accepted; only the empty string is refused.
pub fn validate_message_body(body: &str) -> Result<()> {
    if body.is_empty() {
        return Err(BureauError::EmptyMessage);
    }
    Ok(())
}

/// Parse age text, tolerating surrounding whitespace
pub fn parse_age(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| BureauError::InvalidAge {
        value: raw.to_string(),
    })
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BureauError::MissingField {
            field: field.to_string(),
        });
    }
    Ok(())
}
