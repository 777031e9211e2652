use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::BureauError;

/// Gender of a registered user
///
/// The stored text form is the label the registration form offers, so a
/// database written by earlier versions of the bureau reads back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Label persisted in the `users.gender` column
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Мужской",
            Gender::Female => "Женский",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = BureauError;

    /// Accepts the stored labels plus the English aliases
    /// `male`/`m`/`female`/`f`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "мужской" | "male" | "m" => Ok(Gender::Male),
            "женский" | "female" | "f" => Ok(Gender::Female),
            _ => Err(BureauError::InvalidGender {
                value: s.to_string(),
            }),
        }
    }
}
