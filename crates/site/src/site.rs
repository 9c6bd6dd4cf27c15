//! The composition root.
//!
//! [`Site`] is the explicitly constructed application object: it wires
//! [`ContentSync`] and [`AdminSession`] over the given stores, owns the
//! [`ViewState`], and exposes the view transitions, submission flows, and
//! booking helpers. No ambient globals; construct at startup, pass by
//! reference, [`shutdown`](Site::shutdown) at teardown.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::watch;

use nexus_core::booking::{self, AppointmentRequest, AppointmentService};
use nexus_core::experience::Experience;
use nexus_core::identity::SiteIdentity;
use nexus_core::message::{self, ContactMessage};
use nexus_core::project::Project;
use nexus_core::view::{SubmitStatus, ViewState};
use nexus_core::{schedule, seed, DocId, Section};
use nexus_store::{AssetStore, ContentStore};

use crate::admin::AdminSession;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::submit;
use crate::sync::ContentSync;

// ---------------------------------------------------------------------------
// Site
// ---------------------------------------------------------------------------

/// The assembled engine.
///
/// View and flow methods take `&mut self`: the engine is externally
/// single-threaded, matching the event-driven model it reproduces. Only
/// the sync tasks run concurrently, and they communicate exclusively over
/// watch channels.
pub struct Site {
    store: Arc<dyn ContentStore>,
    sync: ContentSync,
    view: ViewState,
    pub admin: AdminSession,
}

impl Site {
    /// Wire the engine over the given stores and start the sync tasks.
    pub async fn start(
        store: Arc<dyn ContentStore>,
        assets: Arc<dyn AssetStore>,
        config: SiteConfig,
    ) -> Self {
        let sync = ContentSync::start(Arc::clone(&store)).await;
        let admin = AdminSession::new(
            Arc::clone(&store),
            assets,
            config.access_policy(),
            &sync,
        );
        tracing::info!("Site engine started");
        Self {
            store,
            sync,
            view: ViewState::new(),
            admin,
        }
    }

    /// Release every subscription. Writes already issued complete on their
    /// own; none are cancelled.
    pub async fn shutdown(self) {
        self.sync.shutdown().await;
        tracing::info!("Site engine shut down");
    }

    // -- View transitions ---------------------------------------------------

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn open_section(&mut self, section: Section) {
        self.view.open(section);
    }

    pub fn close_section(&mut self) {
        self.view.close();
    }

    pub fn select_project(&mut self, project: Project) {
        self.view.select_project(project);
    }

    pub fn clear_project(&mut self) {
        self.view.clear_project();
    }

    pub fn gallery_next(&mut self) {
        self.view.gallery_next();
    }

    pub fn gallery_prev(&mut self) {
        self.view.gallery_prev();
    }

    pub fn select_service(&mut self, service: AppointmentService) {
        self.view.select_service(service);
    }

    // -- Form buffers -------------------------------------------------------

    pub fn contact_form_mut(&mut self) -> &mut message::ContactForm {
        &mut self.view.contact_form
    }

    pub fn booking_form_mut(&mut self) -> &mut booking::BookingForm {
        &mut self.view.booking_form
    }

    // -- Booking helpers ----------------------------------------------------

    /// The static service catalog.
    pub fn services(&self) -> Vec<AppointmentService> {
        seed::services()
    }

    /// The rolling 14-day window offered to date pickers.
    pub fn booking_dates(&self, from: NaiveDate) -> Vec<NaiveDate> {
        schedule::booking_window(from)
    }

    // -- Submission flows ---------------------------------------------------

    /// Submit the contact form: validate, write one message document, and
    /// record the outcome on the view state.
    pub async fn submit_contact(&mut self) -> Result<DocId, SiteError> {
        let payload = submit::begin_contact(&mut self.view)?;
        match self.store.create(message::COLLECTION, payload).await {
            Ok(id) => {
                submit::complete_contact(&mut self.view, true);
                tracing::info!(id = %id, "Contact message sent");
                Ok(id)
            }
            Err(error) => {
                submit::complete_contact(&mut self.view, false);
                tracing::error!(%error, "Contact message write failed");
                Err(error.into())
            }
        }
    }

    /// Submit the booking form against the selected service.
    pub async fn submit_booking(&mut self) -> Result<DocId, SiteError> {
        let payload = submit::begin_booking(&mut self.view)?;
        match self.store.create(booking::COLLECTION, payload).await {
            Ok(id) => {
                submit::complete_booking(&mut self.view, true);
                tracing::info!(id = %id, "Appointment booked");
                Ok(id)
            }
            Err(error) => {
                submit::complete_booking(&mut self.view, false);
                tracing::error!(%error, "Appointment write failed");
                Err(error.into())
            }
        }
    }

    /// The "resend transmission" action: back to Idle for another message.
    pub fn reset_contact(&mut self) {
        self.view.contact_status = SubmitStatus::Idle;
    }

    /// The "reschedule slot" action: back to Idle for another booking.
    pub fn reset_booking(&mut self) {
        self.view.booking_status = SubmitStatus::Idle;
    }

    // -- Read-models --------------------------------------------------------

    pub fn experiences(&self) -> watch::Receiver<Vec<Experience>> {
        self.sync.experiences()
    }

    pub fn projects(&self) -> watch::Receiver<Vec<Project>> {
        self.sync.projects()
    }

    pub fn appointments(&self) -> watch::Receiver<Vec<AppointmentRequest>> {
        self.sync.appointments()
    }

    pub fn messages(&self) -> watch::Receiver<Vec<ContactMessage>> {
        self.sync.messages()
    }

    pub fn identity(&self) -> watch::Receiver<SiteIdentity> {
        self.sync.identity()
    }
}
