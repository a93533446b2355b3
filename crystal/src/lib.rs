//! crystal: a frameless glassmorphism telemetry overlay.
//!
//! The renderers only ever speak to the [`surface::Surface`] trait. The
//! terminal canvas backend in [`term`] is one collaborator behind that seam;
//! a compositor-backed window would be another.

pub mod app;
pub mod layout;
pub mod surface;
pub mod term;
pub mod ui;
