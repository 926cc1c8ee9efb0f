//! # Validation Module
//!
//! Field rules applied by the HTTP boundary before a draft reaches the store.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (kennel-api)                                    │
//! │  ├── JSON shape (deserialization)                                      │
//! │  └── THIS MODULE: name, email, age, required references                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store (kennel-store)                                         │
//! │  ├── Owner exists                                                      │
//! │  ├── Id collisions                                                     │
//! │  └── Pet list ownership on user update                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kennel_core::validation::{validate_age, validate_email, validate_name};
//!
//! validate_name("name", "Rex").unwrap();
//! validate_email("a@x.com").unwrap();
//! assert_eq!(validate_age(30).unwrap(), 30u8);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::{MAX_AGE, MAX_EMAIL_LEN, MAX_NAME_LEN, MIN_AGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

// =============================================================================
// String Validators
// =============================================================================

/// Validates a user or pet name.
///
/// ## Rules
/// - Must not be blank
/// - At most 50 characters (counted as chars, not bytes)
///
/// The name is stored as given; surrounding whitespace is only ignored for
/// the blank check.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required(field));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be blank
/// - At most 254 characters
/// - `local@domain` where the domain is one or more dot-separated labels
///
/// ## Example
/// ```rust
/// use kennel_core::validation::validate_email;
///
/// assert!(validate_email("test@mail.ru").is_ok());
/// assert!(validate_email("test").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::required("email"));
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a well-formed email address".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an age and narrows it to the stored width.
///
/// ## Rules
/// - Between 1 and 100 inclusive
pub fn validate_age(age: i64) -> ValidationResult<u8> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }

    u8::try_from(age).map_err(|_| ValidationError::OutOfRange {
        field: "age".to_string(),
        min: MIN_AGE,
        max: MAX_AGE,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
