//! # Greetr Common
//!
//! Domain types shared by every crate in the workspace.
//!
//! * **[`record`]**: user and admin records, plus the [`record::Profile`] capability set.
//! * **[`text`]**: string helpers, most notably [`text::capitalize`].
//! * **[`config`]**: runtime switches handed from the CLI to the printers.

pub mod config;
pub mod record;
pub mod text;
