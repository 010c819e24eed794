//! DisplayKit Display Engine
//!
//! Typed display query, mirroring, and screenshot operations over a
//! pluggable platform backend, plus a loosely-typed scripting surface with
//! an ordered validation layer in front of it.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                scripting surface               │
//! │   rpc::dispatch ── request::* (validation)     │
//! │                      │                         │
//! │                      ▼                         │
//! │               DisplayService                   │
//! │   all_displays / primary_display /             │
//! │   display_from_id / mirror / screenshot        │
//! │                      │                         │
//! │                      ▼                         │
//! │          dyn DisplayBackend (per OS)           │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! Every call re-derives its answer from the live backend; nothing is
//! cached between calls.

pub mod backend;
pub mod request;
pub mod rpc;
pub mod service;
pub mod testing;

pub use service::*;
