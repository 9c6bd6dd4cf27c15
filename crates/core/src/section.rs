//! Top-level site sections and admin console panels.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// One of the five navigable modal sections of the site.
///
/// The landing view ("no section open") is represented by the absence of a
/// selection (`Option<Section>` = `None`), not by a variant, so the type can
/// never name an invalid open state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    About,
    Working,
    Portfolio,
    Appointment,
    Contact,
}

/// All sections, in landing-menu order.
pub const ALL_SECTIONS: &[Section] = &[
    Section::About,
    Section::Working,
    Section::Portfolio,
    Section::Appointment,
    Section::Contact,
];

impl Section {
    /// Display label as rendered on the landing menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "ABOUT",
            Self::Working => "WORKING",
            Self::Portfolio => "PORTFOLIO",
            Self::Appointment => "APPOINTMENT",
            Self::Contact => "CONTACT",
        }
    }
}

// ---------------------------------------------------------------------------
// AdminPanel
// ---------------------------------------------------------------------------

/// Admin console panels.
///
/// Panel selection is cosmetic navigation state: admin operations are gated
/// on the session being unlocked, never on which panel happens to be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminPanel {
    Profile,
    ExperienceLab,
    ProjectVault,
    SyncRequests,
    CommsInbox,
    SiteIdentity,
}

/// All admin panels, in console order.
pub const ALL_PANELS: &[AdminPanel] = &[
    AdminPanel::Profile,
    AdminPanel::ExperienceLab,
    AdminPanel::ProjectVault,
    AdminPanel::SyncRequests,
    AdminPanel::CommsInbox,
    AdminPanel::SiteIdentity,
];

impl AdminPanel {
    /// Console header label for the panel.
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "ABOUT_PROFILE",
            Self::ExperienceLab => "EXPERIENCE_LAB",
            Self::ProjectVault => "PROJECT_VAULT",
            Self::SyncRequests => "SYNC_REQUESTS",
            Self::CommsInbox => "COMM_INBOX",
            Self::SiteIdentity => "SITE_IDENTITY",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_sections_has_five_entries() {
        assert_eq!(ALL_SECTIONS.len(), 5);
    }

    #[test]
    fn all_panels_has_six_entries() {
        assert_eq!(ALL_PANELS.len(), 6);
    }

    #[test]
    fn section_labels_are_uppercase_menu_names() {
        assert_eq!(Section::About.label(), "ABOUT");
        assert_eq!(Section::Appointment.label(), "APPOINTMENT");
    }

    #[test]
    fn section_serializes_as_snake_case() {
        let json = serde_json::to_string(&Section::Portfolio).unwrap();
        assert_eq!(json, "\"portfolio\"");
    }

    #[test]
    fn panel_serializes_as_snake_case() {
        let json = serde_json::to_string(&AdminPanel::ExperienceLab).unwrap();
        assert_eq!(json, "\"experience_lab\"");
    }
}
