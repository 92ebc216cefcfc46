//! UI rendering module

mod alerts;
mod charts;
mod layout;
mod vitals;

pub use layout::render;
