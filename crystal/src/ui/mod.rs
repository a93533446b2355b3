//! Draw routines for the overlay: gauges, bars, glass panel, footer.

pub mod bar;
pub mod footer;
pub mod gauge;
pub mod panel;
pub mod theme;
pub mod util;
