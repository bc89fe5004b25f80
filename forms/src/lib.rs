//! Inline validation for the account and code-analysis forms.
//!
//! Validation rules are pure functions over field values ([`rules`],
//! [`analysis`]); [`form`] describes which inputs and error slots belong to
//! each form; [`bind`] wires those descriptions to the live DOM.

pub mod analysis;
pub mod bind;
pub mod error;
pub mod form;
pub mod rules;

pub use error::FieldError;
