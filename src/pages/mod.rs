//! Page modules for route-level screens.

pub mod account;
pub mod welcome;
