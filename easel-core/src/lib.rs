//! Easel Core
//!
//! Core types shared by the Easel relay, worker, client and CLI.
//!
//! This crate contains:
//! - Domain types: Layout, Job, mockup taxonomy
//! - Protocol: messages exchanged with the worker over the worker channel
//! - DTOs: request/response bodies of the relay HTTP API

pub mod domain;
pub mod dto;
pub mod protocol;
