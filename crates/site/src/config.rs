use std::path::PathBuf;
use std::sync::Arc;

use crate::access::{AccessPolicy, StaticCode};

/// Engine configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// The admin unlock code checked by the default access policy.
    pub admin_access_code: String,
    /// When set, assets are written to the filesystem under this root
    /// instead of being held in memory.
    pub asset_root: Option<PathBuf>,
}

impl SiteConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default      |
    /// |--------------------------|--------------|
    /// | `NEXUS_ADMIN_ACCESS_CODE`| `shamim2024` |
    /// | `NEXUS_ASSET_ROOT`       | unset        |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_access_code =
            std::env::var("NEXUS_ADMIN_ACCESS_CODE").unwrap_or_else(|_| "shamim2024".into());
        let asset_root = std::env::var("NEXUS_ASSET_ROOT").ok().map(PathBuf::from);

        Self {
            admin_access_code,
            asset_root,
        }
    }

    /// The default access policy: exact comparison against the configured
    /// code. Swap in [`crate::access::HashedCode`] to avoid holding the
    /// plaintext.
    pub fn access_policy(&self) -> Arc<dyn AccessPolicy> {
        Arc::new(StaticCode::new(self.admin_access_code.clone()))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            admin_access_code: "shamim2024".into(),
            asset_root: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_accepts_the_configured_code() {
        let config = SiteConfig {
            admin_access_code: "open-sesame".into(),
            asset_root: None,
        };
        let policy = config.access_policy();
        assert!(policy.verify("open-sesame"));
        assert!(!policy.verify("shamim2024"));
    }
}
