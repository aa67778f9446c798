//! # Greetr Core
//!
//! Turns a [`Profile`](greetr_common::record::Profile) into a greeting.
//!
//! * **[`greeting`]**: the pure composition step.
//! * **[`greeter`]**: writes greetings to an output sink.

pub mod greeter;
pub mod greeting;

pub use greeter::{GreetError, Greeter};
pub use greeting::{Greeting, greet};
