//! Core domain types
//!
//! These types describe the mockup jobs and the template taxonomy. They are
//! shared between the relay (which dispatches jobs) and the worker (which
//! renders them).

pub mod job;
pub mod layout;
pub mod taxonomy;
