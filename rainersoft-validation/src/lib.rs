//! Form validation for rainersoft-utils.
//!
//! Every validator returns a [`ValidationResult`] and never panics: bad input
//! is reported through localized messages, not errors. Validators are
//! independent of one another; [`validate_message`] is the only one built on
//! another ([`validate_text`] with preset bounds).
//!
//! [`password_strength`] scores a password out of 100 and maps the score to
//! one of five [`PasswordStrengthLevel`]s.

mod fields;
mod password;

pub use fields::{
    validate_cnpj, validate_cpf, validate_email, validate_message, validate_phone, validate_slug,
    validate_text, validate_url, validate_username, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS,
    SLUG_MAX_CHARS, SLUG_MIN_CHARS, USERNAME_MAX_CHARS, USERNAME_MIN_CHARS,
};
pub use password::{
    password_score, password_strength, validate_password, PasswordRequirements,
    PasswordStrength, PasswordStrengthLevel,
};
pub use rainersoft_types::ValidationResult;
