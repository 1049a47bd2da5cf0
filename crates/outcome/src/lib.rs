//! Operation outcome value object.
//!
//! This crate provides [`Outcome`], a small value type that services return
//! to describe how an operation ended without reaching for a panic or an
//! error type. An outcome carries:
//!
//! - a success flag fixed at construction
//! - an optional machine-readable [`Code`]
//! - a human-readable message
//! - ordered, structured [`Errors`]
//! - arbitrary [`Extras`], such as identifiers of created resources
//!
//! # Example
//!
//! ```
//! use outcome::{Code, Outcome};
//! use serde_json::json;
//!
//! fn register(email: &str) -> Outcome {
//!     if email.contains('@') {
//!         return Outcome::success()
//!             .with_code(Code::Created)
//!             .with_extra("user_id", 17);
//!     }
//!     Outcome::fail()
//!         .with_code(Code::Validation)
//!         .with_message("registration rejected")
//!         .with_error(json!({"email": ["Invalid address"]}))
//! }
//!
//! let outcome = register("walker");
//! assert!(outcome.is_fail());
//! assert_eq!(outcome.code(), Some(&Code::Validation));
//! assert_eq!(outcome.errors().field("email"), Some(&json!(["Invalid address"])));
//! ```

mod code;
mod error;
mod errors;
mod extras;
mod outcome;

pub use code::Code;
pub use error::OutcomeError;
pub use errors::{ErrorKey, Errors, ErrorsIter};
pub use extras::Extras;
pub use outcome::Outcome;
