// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Properties of the row fold, the port ledger and the canonical document.

mod port_claims;
mod round_trip;
