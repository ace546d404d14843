//! HR policy configuration.
//!
//! This module provides the strongly-typed policy structures deserialized
//! from the YAML files in a policy directory, plus compiled-in defaults
//! matching the shipped configuration.

mod loader;
mod types;

pub use types::{AccountPolicy, AttendancePolicy, HrPolicy, LeaveEntitlements};
