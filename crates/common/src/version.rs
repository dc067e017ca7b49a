use std::fmt;

use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "unknown";

/// Facts about the build, injected by `build.rs` at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub git_hash: String,
    pub build_profile: String,
    pub build_features: String,
    pub build_timestamp: String,
    pub rust_version: String,
    pub target: String,
}

impl BuildInfo {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_hash: option_env!("REPO_VERSION").unwrap_or(UNKNOWN).to_string(),
            build_profile: option_env!("BUILD_PROFILE").unwrap_or(UNKNOWN).to_string(),
            build_features: option_env!("BUILD_FEATURES").unwrap_or("none").to_string(),
            build_timestamp: option_env!("BUILD_TIMESTAMP").unwrap_or(UNKNOWN).to_string(),
            rust_version: option_env!("RUST_VERSION").unwrap_or(UNKNOWN).to_string(),
            target: option_env!("BUILD_TARGET").unwrap_or(UNKNOWN).to_string(),
        }
    }

    pub fn short_hash(&self) -> &str {
        match self.git_hash.get(..7) {
            Some(short) if self.git_hash != UNKNOWN => short,
            _ => &self.git_hash,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.git_hash.ends_with("-dirty")
    }

    pub fn features(&self) -> Vec<&str> {
        if self.build_features == "none" {
            Vec::new()
        } else {
            self.build_features.split(',').map(str::trim).collect()
        }
    }

    /// Value for the `User-Agent` header of outbound calls.
    pub fn user_agent(&self) -> String {
        format!("roomctl/{} ({})", self.version, self.short_hash())
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "roomctl {} ({}{}, {})\nbuilt {} with {} for {}",
            self.version,
            self.short_hash(),
            if self.is_dirty() { ", dirty" } else { "" },
            self.build_profile,
            self.build_timestamp,
            self.rust_version,
            self.target
        )?;

        let features = self.features();
        if !features.is_empty() {
            write!(f, "\nfeatures: {}", features.join(", "))?;
        }
        Ok(())
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::new()
}
