//! Networking modules for the identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` owns the profile-fetch capability and its HTTP implementation;
//! `types` defines the wire schema and its validation into domain types.

pub mod identity;
pub mod types;
