//! Credential lookup.
//!
//! The library never reads process-global state; callers hand in an
//! [`Environment`]. The binary uses [`ProcessEnv`].

use std::collections::{BTreeMap, HashMap};

pub const API_KEY_VAR: &str = "FRED_API_KEY";

pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;

    /// The FRED API key, if set and not blank.
    fn api_key(&self) -> Option<String> {
        self.var(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Process environment, with `.env` in the working directory loaded first.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self
    }
}

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
