use thiserror::Error;

/// Result type alias using BureauError
pub type Result<T> = std::result::Result<T, BureauError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced to a caller falls into one of these kinds. Each kind
/// maps to a stable code that front ends can switch on without parsing
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    MissingField,
    NotFound,

    // Uniqueness
    DuplicateName,

    // Access
    Unauthorised,

    // Storage
    ConstraintViolation,
    Persistence,
}

impl ExErrorKind {
    /// Stable string code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateName => "ERR_DUPLICATE_NAME",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }

    /// Whether this kind is a user-correctable input problem
    ///
    /// Front ends show these as warnings and let the user retry.
    pub fn is_validation(&self) -> bool {
        matches!(self, ExErrorKind::InvalidInput | ExErrorKind::MissingField)
    }
}

/// Structured error carried across the store and engine boundaries
///
/// Built with a kind plus optional context:
///
/// ```
/// use bureau_core::errors::{ExError, ExErrorKind};
///
/// let err = ExError::new(ExErrorKind::DuplicateName)
///     .with_op("create_user")
///     .with_entity_id("Анна")
///     .with_message("User name already taken");
/// assert_eq!(err.code(), "ERR_DUPLICATE_NAME");
/// ```
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error of the given kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Set the operation name
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Set the entity the error refers to (user id or name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Set the human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== Domain Errors ==========

/// Domain failures raised by validation and the bureau operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BureauError {
    /// Registration (or rename) with a name that is already taken
    #[error("User name already taken: {name}")]
    DuplicateName { name: String },

    /// A required form field was left empty
    #[error("Required field is empty: {field}")]
    MissingField { field: String },

    /// Age text did not parse as an integer
    #[error("Age must be a number, got {value:?}")]
    InvalidAge { value: String },

    /// Gender text is not one of the two known labels
    #[error("Unknown gender: {value:?}")]
    InvalidGender { value: String },

    /// Message body was empty
    #[error("Message cannot be empty")]
    EmptyMessage,

    /// Name/password pair did not match a stored user
    #[error("Invalid user name or password")]
    AuthenticationFailed,

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },
}

impl From<BureauError> for ExError {
    fn from(err: BureauError) -> Self {
        match err {
            BureauError::DuplicateName { name } => ExError::new(ExErrorKind::DuplicateName)
                .with_entity_id(name)
                .with_message("User name already taken"),

            BureauError::MissingField { field } => ExError::new(ExErrorKind::MissingField)
                .with_message(format!("Required field is empty: {}", field)),

            BureauError::InvalidAge { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Age must be a number, got {:?}", value)),

            BureauError::InvalidGender { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Unknown gender: {:?}", value)),

            BureauError::EmptyMessage => {
                ExError::new(ExErrorKind::InvalidInput).with_message("Message cannot be empty")
            }

            // No hint as to which half of the credentials was wrong
            BureauError::AuthenticationFailed => ExError::new(ExErrorKind::Unauthorised)
                .with_message("Invalid user name or password"),

            BureauError::UserNotFound { user_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(user_id.to_string())
                .with_message("User not found"),
        }
    }
}
