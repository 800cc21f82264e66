//! Error taxonomy for declarations, casts and accessor reads.
//!
//! Every error is raised synchronously to the immediate caller; nothing is retried and nothing is logged here.
//! Use [`EnvSettingError::kind`] to branch on the failure class rather than on message text.

use miette::Diagnostic;
use thiserror::Error;

use envsetting_core::lang::errors::ErrorKind;

/// Errors raised by `envsetting`.
#[derive(Debug, Error, Diagnostic)]
pub enum EnvSettingError {
    /// Declared without a default while the store lacks the variable.
    ///
    /// `message` is the pre-formatted block from [`envsetting_core::format::missing_required_message`].
    #[error("{message}")]
    #[diagnostic(
        code(envsetting::missing_required),
        help("set the variable in the environment or declare it with a default")
    )]
    MissingRequired {
        name: String,
        description: Option<String>,
        message: String,
    },

    /// A keyed read named a variable that was never declared.
    #[error("{name} is not configured in the ENV")]
    #[diagnostic(code(envsetting::not_configured), help("declare it with `use_var` first"))]
    NotConfigured { name: String },

    /// An accessor was invoked for a name no declaration generated.
    #[error("undefined accessor `{accessor}`")]
    #[diagnostic(code(envsetting::unknown_accessor))]
    UnknownAccessor { accessor: String },

    /// No coercion is registered under the tag and it is not a primitive.
    #[error("unknown type tag `{tag}`")]
    #[diagnostic(code(envsetting::unknown_type), help("register it with `add_class`"))]
    UnknownType { tag: String },

    /// The raw value could not be coerced.
    #[error("cannot cast '{raw}' to {tag}: {reason}")]
    #[diagnostic(code(envsetting::cast_failure))]
    CastFailure { tag: String, raw: String, reason: String },

    /// A coerced value was extracted into an incompatible Rust type.
    #[error("{name}: expected {expected}, found {found}")]
    #[diagnostic(code(envsetting::type_mismatch))]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A falsey pattern failed to compile.
    #[error("invalid falsey pattern: {0}")]
    #[diagnostic(code(envsetting::invalid_pattern))]
    InvalidPattern(#[from] regex::Error),

    /// The store refused a name or value before writing it.
    #[error("cannot write {name:?} to the environment: {reason}")]
    #[diagnostic(code(envsetting::invalid_entry))]
    InvalidEntry { name: String, reason: &'static str },

    /// The variable is present but its value is not valid UTF-8.
    #[error("{name} is set but its value is not valid UTF-8")]
    #[diagnostic(code(envsetting::not_unicode))]
    NotUnicode { name: String },
}

impl EnvSettingError {
    /// Build a [`EnvSettingError::MissingRequired`] with its formatted message.
    pub fn missing_required(name: &str, description: Option<&str>) -> Self {
        Self::MissingRequired {
            name: name.to_string(),
            description: description.map(str::to_string),
            message: envsetting_core::format::missing_required_message(name, description),
        }
    }

    /// Build a [`EnvSettingError::CastFailure`].
    pub fn cast_failure(tag: &str, raw: &str, reason: impl Into<String>) -> Self {
        Self::CastFailure {
            tag: tag.to_string(),
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    /// Return the failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingRequired { .. } => ErrorKind::MissingRequired,
            Self::NotConfigured { .. } => ErrorKind::NotConfigured,
            Self::UnknownAccessor { .. } => ErrorKind::UnknownAccessor,
            Self::UnknownType { .. } => ErrorKind::UnknownType,
            Self::CastFailure { .. } => ErrorKind::CastFailure,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidPattern(_) => ErrorKind::InvalidPattern,
            Self::InvalidEntry { .. } => ErrorKind::InvalidEntry,
            Self::NotUnicode { .. } => ErrorKind::NotUnicode,
        }
    }
}

/// Result type for `envsetting` operations.
pub type Result<T> = std::result::Result<T, EnvSettingError>;
