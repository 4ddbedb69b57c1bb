//! Web boundary helpers that must not leak into services or the domain.

pub mod trace_ctx;
