//! Violation accumulation for Courier
//!
//! Documents validated with this crate never fail on their first broken
//! rule. Every rule is checked, every failure is recorded, and composite
//! documents copy the records of their parts so a caller can see all the
//! problems at once.
//!
//! # Examples
//!
//! ```
//! use courier_validation::{MaxLength, Notifiable, NotEmpty, Violations};
//!
//! struct Title {
//!     text: Option<String>,
//!     violations: Violations,
//! }
//!
//! impl Title {
//!     fn new(text: Option<&str>) -> Self {
//!         let mut violations = Violations::new();
//!         violations
//!             .check(NotEmpty::check(text, "title is required"))
//!             .check(MaxLength(8).check(text, |n| format!("title is {} characters", n)));
//!
//!         Self { text: text.map(str::to_string), violations }
//!     }
//! }
//!
//! impl Notifiable for Title {
//!     fn violations(&self) -> &Violations {
//!         &self.violations
//!     }
//! }
//!
//! assert!(Title::new(Some("short")).is_valid());
//! assert_eq!(
//!     Title::new(Some("much too long")).violation_messages(),
//!     vec!["title is 13 characters"],
//! );
//! ```

mod errors;
mod traits;
mod validators;

pub use errors::*;
pub use traits::*;
pub use validators::*;
