//! Site identity: the singleton `siteConfig/global` document.
//!
//! The document is partial-update tolerant. Each of its four top-level
//! fields (`displayName`, `profileImage`, `about`, `contact`) merges
//! independently into the local read-model: a field present in a snapshot
//! overwrites the local value, a field absent leaves it untouched. The
//! read-model starts from the hardcoded defaults in [`crate::seed`], so the
//! UI is never in a fully-empty state.

use serde::{Deserialize, Serialize};

/// Collection holding the singleton configuration document.
pub const CONFIG_COLLECTION: &str = "siteConfig";

/// Id of the singleton configuration document.
pub const CONFIG_DOC_ID: &str = "global";

// ---------------------------------------------------------------------------
// Nested value objects
// ---------------------------------------------------------------------------

/// A single headline statistic shown on the About section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

impl StatItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Copy for the About section.
///
/// Fields default to empty strings when missing from a document so a
/// sparsely-written `about` object still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub highlight: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

/// Contact channels shown on the Contact section.
///
/// `phone` is required-shaped but ships empty by default; the trailing
/// channels are genuinely optional and omitted from documents when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactChannels {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

// ---------------------------------------------------------------------------
// SiteIdentity
// ---------------------------------------------------------------------------

/// The fully-resolved site identity read-model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteIdentity {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub about: AboutContent,
    #[serde(default)]
    pub contact: ContactChannels,
}

impl SiteIdentity {
    /// Merge a decoded snapshot into the identity.
    ///
    /// Only fields present in the patch overwrite; absent fields keep their
    /// current value. This is the partial-merge contract of the singleton
    /// document.
    pub fn apply(&mut self, patch: IdentityPatch) {
        if let Some(display_name) = patch.display_name {
            self.display_name = display_name;
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = profile_image;
        }
        if let Some(about) = patch.about {
            self.about = about;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
    }
}

/// A decoded `siteConfig/global` snapshot: every top-level field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityPatch {
    pub display_name: Option<String>,
    pub profile_image: Option<String>,
    pub about: Option<AboutContent>,
    pub contact: Option<ContactChannels>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
