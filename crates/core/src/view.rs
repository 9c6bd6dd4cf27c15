//! The in-memory view state machine.
//!
//! [`ViewState`] holds everything transient about what the visitor is
//! looking at: the active section, the selected project and gallery cursor,
//! the selected service, both form buffers, and both submission statuses.
//! Nothing here is persisted and nothing here performs I/O; every method is
//! a pure in-memory transition.

use serde::{Deserialize, Serialize};

use crate::booking::{AppointmentService, BookingForm};
use crate::message::ContactForm;
use crate::project::Project;
use crate::section::Section;

// ---------------------------------------------------------------------------
// SubmitStatus
// ---------------------------------------------------------------------------

/// Tri-state (plus failure) submission status driving form feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Failed,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// The complete transient view state.
///
/// `close()` is a full reset: it clears every sub-state field regardless of
/// which section was open, so reopening any section always starts clean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// The open section; `None` is the landing view.
    pub active: Option<Section>,

    /// Project detail sub-view within the portfolio section.
    pub selected_project: Option<Project>,

    /// Cursor into the selected project's gallery.
    pub gallery_index: usize,

    /// Service selection within the appointment section.
    pub selected_service: Option<AppointmentService>,

    /// Contact form buffer.
    pub contact_form: ContactForm,

    /// Booking form buffer.
    pub booking_form: BookingForm,

    /// Contact submission status.
    pub contact_status: SubmitStatus,

    /// Booking submission status.
    pub booking_status: SubmitStatus,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section. Sub-state keeps its defaults; a previously-open
    /// section's leftovers were already cleared by [`close`](Self::close).
    pub fn open(&mut self, section: Section) {
        self.active = Some(section);
    }

    /// Close whatever is open and reset every sub-state field.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Select a project for the detail sub-view. The gallery cursor always
    /// restarts at the cover image.
    pub fn select_project(&mut self, project: Project) {
        self.selected_project = Some(project);
        self.gallery_index = 0;
    }

    /// Back out of the project detail sub-view without closing the section.
    pub fn clear_project(&mut self) {
        self.selected_project = None;
        self.gallery_index = 0;
    }

    /// Advance the gallery cursor, wrapping past the last image.
    ///
    /// With no selection or an empty gallery there is nothing to navigate;
    /// the cursor stays at 0.
    pub fn gallery_next(&mut self) {
        let len = self.gallery_len();
        if len == 0 {
            self.gallery_index = 0;
            return;
        }
        self.gallery_index = (self.gallery_index + 1) % len;
    }

    /// Step the gallery cursor back, wrapping from 0 to the last image.
    pub fn gallery_prev(&mut self) {
        let len = self.gallery_len();
        if len == 0 {
            self.gallery_index = 0;
            return;
        }
        self.gallery_index = (self.gallery_index + len - 1) % len;
    }

    /// URL of the gallery image under the cursor, if any.
    pub fn gallery_image(&self) -> Option<&str> {
        self.selected_project
            .as_ref()?
            .gallery
            .get(self.gallery_index)
            .map(String::as_str)
    }

    /// Select a service in the appointment section.
    pub fn select_service(&mut self, service: AppointmentService) {
        self.selected_service = Some(service);
    }

    /// Drop the service selection.
    pub fn clear_service(&mut self) {
        self.selected_service = None;
    }

    fn gallery_len(&self) -> usize {
        self.selected_project
            .as_ref()
            .map(|p| p.gallery.len())
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::ALL_SECTIONS;
    use crate::seed;

    #[test]
    fn open_then_close_restores_the_default_for_every_section() {
        for &section in ALL_SECTIONS {
            let mut state = ViewState::new();
            let before = state.clone();

            state.open(section);
            state.select_project(seed::projects().remove(0));
            state.gallery_next();
            state.select_service(seed::services().remove(0));
            state.contact_form.name = "Ada".into();
            state.booking_form.client_name = "Ada".into();
            state.contact_status = SubmitStatus::Success;
            state.booking_status = SubmitStatus::Failed;

            state.close();
            assert_eq!(state, before, "close() must fully reset after {section:?}");
        }
    }

    #[test]
    fn gallery_navigation_is_circular() {
        let mut state = ViewState::new();
        let project = seed::projects().remove(0);
        let n = project.gallery.len();
        state.select_project(project);

        for _ in 0..n {
            state.gallery_next();
        }
        assert_eq!(state.gallery_index, 0, "n steps forward must wrap to 0");

        state.gallery_prev();
        assert_eq!(state.gallery_index, n - 1, "prev from 0 must wrap to n-1");
    }

    #[test]
    fn gallery_navigation_without_selection_stays_at_zero() {
        let mut state = ViewState::new();
        state.gallery_next();
        state.gallery_prev();
        assert_eq!(state.gallery_index, 0);
        assert!(state.gallery_image().is_none());
    }

    #[test]
    fn selecting_a_project_resets_the_gallery_cursor() {
        let mut state = ViewState::new();
        let mut projects = seed::projects();
        state.select_project(projects.remove(0));
        state.gallery_next();
        assert_ne!(state.gallery_index, 0);

        state.select_project(projects.remove(0));
        assert_eq!(state.gallery_index, 0);
    }

    #[test]
    fn gallery_image_follows_the_cursor() {
        let mut state = ViewState::new();
        let project = seed::projects().remove(0);
        let second = project.gallery[1].clone();
        state.select_project(project);
        state.gallery_next();
        assert_eq!(state.gallery_image(), Some(second.as_str()));
    }

    #[test]
    fn clear_project_backs_out_without_closing_the_section() {
        let mut state = ViewState::new();
        state.open(Section::Portfolio);
        state.select_project(seed::projects().remove(0));
        state.clear_project();
        assert_eq!(state.active, Some(Section::Portfolio));
        assert!(state.selected_project.is_none());
        assert_eq!(state.gallery_index, 0);
    }

    #[test]
    fn submit_status_defaults_to_idle() {
        let state = ViewState::new();
        assert_eq!(state.contact_status, SubmitStatus::Idle);
        assert_eq!(state.booking_status, SubmitStatus::Idle);
    }
}
