//! Crate-level test suites: end-to-end scenarios, algebraic laws and
//! accuracy fixtures.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::str_to_string,
    clippy::uninlined_format_args,
    reason = "Test assertions are clearest with direct unwraps and panics"
)]

mod end_to_end;
mod math_accuracy;
mod properties;
