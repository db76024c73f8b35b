// Copyright (c) 2025 - Cowboy AI, Inc.
//! Port Ledger
//!
//! Enforces that each physical port `(node, port, slot)` is claimed by at
//! most one logical link. A repeated claim naming the same peer is accepted
//! silently, which is what lets a workbook describe one cable from both ends.

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

use crate::domain::PortRef;

/// A port was claimed twice with different peers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{port} is claimed by {existing} and by {attempted}")]
pub struct PortConflictError {
    pub port: PortRef,
    pub existing: PortRef,
    pub attempted: PortRef,
}

/// Outcome of a successful claim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// First claim on this port
    New,
    /// Same port, same peer: nothing changed
    AlreadyHeld,
}

/// At-most-one-claim-per-port registry
#[derive(Debug, Clone, Default)]
pub struct PortLedger {
    claims: HashMap<PortRef, PortRef>,
}

impl PortLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `port` for a link to `peer`
    ///
    /// # Errors
    /// [`PortConflictError`] when the port is already held by a different peer.
    pub fn claim(&mut self, port: PortRef, peer: PortRef) -> Result<Claim, PortConflictError> {
        match self.claims.get(&port) {
            Some(existing) if *existing == peer => {
                debug!(%port, %peer, "port already claimed by same peer");
                Ok(Claim::AlreadyHeld)
            }
            Some(existing) => Err(PortConflictError {
                port,
                existing: existing.clone(),
                attempted: peer,
            }),
            None => {
                debug!(%port, %peer, "port claimed");
                self.claims.insert(port, peer);
                Ok(Claim::New)
            }
        }
    }

    /// Current holder of `port`, if any
    pub fn peer_of(&self, port: &PortRef) -> Option<&PortRef> {
        self.claims.get(port)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}
