// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::PolicyConfig;
use std::sync::{Arc, RwLock};

/// Supplies the policy snapshot each event is evaluated against.
pub trait PolicyProvider: Send + Sync {
    fn policy(&self) -> PolicyConfig;
}

impl PolicyProvider for PolicyConfig {
    fn policy(&self) -> PolicyConfig {
        *self
    }
}

/// Policy that the bootstrap may swap at runtime, e.g. after a config reload.
///
/// Readers take a copy of the current snapshot; a poisoned lock still yields
/// the last stored value.
#[derive(Debug, Clone, Default)]
pub struct SharedPolicy(Arc<RwLock<PolicyConfig>>);

impl SharedPolicy {
    pub fn new(policy: PolicyConfig) -> Self {
        Self(Arc::new(RwLock::new(policy)))
    }

    pub fn replace(&self, policy: PolicyConfig) {
        let mut guard = self.0.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = policy;
    }
}

impl PolicyProvider for SharedPolicy {
    fn policy(&self) -> PolicyConfig {
        *self.0.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
