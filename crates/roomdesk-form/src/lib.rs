//! roomdesk-form - Controlled form state and declarative validation.
//!
//! Booking, login and search forms share one state container,
//! [`FormEngine`], and one rule engine:
//!
//! - [`ValidatorConfig`] declares, per field, an ordered list of [`Rule`]s
//!   and the message shown when each fails
//! - [`validate_values`] checks a whole form and reports the first failing
//!   rule per field as [`Errors`]; validation failure is data, never an
//!   `Err`
//! - [`FormEngine`] holds [`Values`], clears errors on every change,
//!   resets to its initial snapshot and carries a form-level submit error
//! - [`advance`] turns Enter into "focus the next control" and [`bind`]
//!   hands each data control its value and error
//!
//! # Example
//!
//! ```rust
//! use roomdesk_form::{Control, FormEngine, KeyEvent, Rule, ValidatorConfig, Values};
//!
//! let config = ValidatorConfig::new()
//!     .rule("email", Rule::Required, "Email is required")
//!     .rule("password", Rule::Required, "Password is required")
//!     .rule("password", Rule::HasDigit, "Password needs a digit");
//! let mut form = FormEngine::new(
//!     Values::new().with("email", "").with("password", ""),
//!     false,
//!     config,
//! );
//!
//! let controls = [
//!     Control::input("email"),
//!     Control::input("password"),
//!     Control::submit("login"),
//! ];
//! let outcome = form.handle_key_advance(&KeyEvent::enter("email"), &controls);
//! assert_eq!(outcome.focus.as_deref(), Some("password"));
//!
//! form.handle_change("email", "guest@hotel.com");
//! form.handle_change("password", "secret");
//! assert!(!form.validate_current());
//! assert_eq!(form.error("password"), Some("Password needs a digit"));
//! ```
//!
//! Typed records convert to and from [`Values`] through serde:
//! [`FormEngine::from_record`] and [`FormEngine::record`].

mod error;
mod focus;
mod form;
mod rules;
mod validator;
mod value;

pub use error::{FormError, Result};
pub use focus::{advance, bind, BoundControl, Control, ControlKind, Key, KeyEvent, KeyOutcome};
pub use form::FormEngine;
pub use rules::{Predicate, Rule, RuleSpec, ValidatorConfig};
pub use validator::{validate_field, validate_values};
pub use value::{Errors, FieldValue, Values};
