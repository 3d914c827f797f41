//! Contact form TUI
//!
//! A Ratatui-based terminal front-end for a groundwork contractor's
//! contact form: inline field validation and a simulated submission with
//! loading, success and error states.
//!
//! The lifecycle in [`lifecycle`] is independent of the terminal; the
//! [`submission::SubmissionClientTrait`] seam is where a real transport
//! plugs in.

pub mod app;
pub mod config;
pub mod lifecycle;
pub mod messages;
pub mod platform;
pub mod state;
pub mod submission;
pub mod ui;
