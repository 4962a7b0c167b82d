//! Screen components.

pub mod country_selector;
pub mod generator;
