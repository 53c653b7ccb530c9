//! Display policy applied on top of a computed result.
//!
//! Policies never change what the calculator returns, only whether the
//! result is shown to the user.

pub mod restricted;

pub use restricted::{normalize_for_policy, RestrictedPairPolicy, REFUSAL_MESSAGE};
