//! Reusable UI component modules.

pub mod user_info;
