//! Live content synchronization.
//!
//! [`ContentSync`] bridges the store's push subscriptions into typed
//! read-models. One background task per tracked collection (plus one for
//! the singleton identity document) decodes each incoming snapshot at the
//! boundary and replaces its read-model wholesale; consumers hold
//! `watch::Receiver` clones and never see the vendor subscription shape.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use nexus_core::booking::AppointmentRequest;
use nexus_core::experience::Experience;
use nexus_core::identity::{IdentityPatch, SiteIdentity};
use nexus_core::message::ContactMessage;
use nexus_core::project::Project;
use nexus_core::{booking, experience, identity, message, project, seed};
use nexus_store::{typed, ContentStore, Document, OrderBy};

// ---------------------------------------------------------------------------
// ContentSync
// ---------------------------------------------------------------------------

/// The set of live read-models, kept current by background tasks.
///
/// Created with [`start`](Self::start); released with
/// [`shutdown`](Self::shutdown), after which no read-model changes again.
pub struct ContentSync {
    cancel: CancellationToken,
    handles: Vec<JoinHandle<()>>,
    experiences: watch::Receiver<Vec<Experience>>,
    projects: watch::Receiver<Vec<Project>>,
    appointments: watch::Receiver<Vec<AppointmentRequest>>,
    messages: watch::Receiver<Vec<ContactMessage>>,
    identity: watch::Receiver<SiteIdentity>,
}

impl ContentSync {
    /// Open one subscription per tracked collection plus the singleton
    /// identity document, spawning a decode task for each.
    pub async fn start(store: Arc<dyn ContentStore>) -> Self {
        let cancel = CancellationToken::new();
        let mut handles = Vec::new();

        // Experiences: descending lexical sort on the free-text period.
        let source = store
            .watch_collection(
                experience::COLLECTION,
                Some(OrderBy::desc(experience::ORDER_FIELD)),
            )
            .await;
        let (tx, experiences) = watch::channel(Vec::new());
        handles.push(spawn_collection_task(cancel.clone(), source, tx, |docs| {
            with_seed_fallback(typed::decode_collection(docs), seed::experiences)
        }));

        // Projects: creation order (store iteration order of v7 ids).
        let source = store.watch_collection(project::COLLECTION, None).await;
        let (tx, projects) = watch::channel(Vec::new());
        handles.push(spawn_collection_task(cancel.clone(), source, tx, |docs| {
            with_seed_fallback(typed::decode_collection(docs), seed::projects)
        }));

        // Appointments and messages: newest first, no seed (empty is empty).
        let source = store
            .watch_collection(
                booking::COLLECTION,
                Some(OrderBy::desc(booking::ORDER_FIELD)),
            )
            .await;
        let (tx, appointments) = watch::channel(Vec::new());
        handles.push(spawn_collection_task(cancel.clone(), source, tx, |docs| {
            typed::decode_collection(docs)
        }));

        let source = store
            .watch_collection(
                message::COLLECTION,
                Some(OrderBy::desc(message::ORDER_FIELD)),
            )
            .await;
        let (tx, messages) = watch::channel(Vec::new());
        handles.push(spawn_collection_task(cancel.clone(), source, tx, |docs| {
            typed::decode_collection(docs)
        }));

        // Singleton identity document.
        let source = store
            .watch_document(identity::CONFIG_COLLECTION, identity::CONFIG_DOC_ID)
            .await;
        let (tx, identity) = watch::channel(seed::default_identity());
        handles.push(spawn_identity_task(cancel.clone(), source, tx));

        Self {
            cancel,
            handles,
            experiences,
            projects,
            appointments,
            messages,
            identity,
        }
    }

    /// Release every subscription and await the tasks; no read-model
    /// changes after this returns.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        for handle in self.handles {
            let _ = handle.await;
        }
    }

    pub fn experiences(&self) -> watch::Receiver<Vec<Experience>> {
        self.experiences.clone()
    }

    pub fn projects(&self) -> watch::Receiver<Vec<Project>> {
        self.projects.clone()
    }

    pub fn appointments(&self) -> watch::Receiver<Vec<AppointmentRequest>> {
        self.appointments.clone()
    }

    pub fn messages(&self) -> watch::Receiver<Vec<ContactMessage>> {
        self.messages.clone()
    }

    pub fn identity(&self) -> watch::Receiver<SiteIdentity> {
        self.identity.clone()
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Empty decoded snapshots publish the seed list instead, re-evaluated on
/// every snapshot: deleting the last document reverts consumers to seed
/// data.
fn with_seed_fallback<T>(decoded: Vec<T>, seed: fn() -> Vec<T>) -> Vec<T> {
    if decoded.is_empty() {
        seed()
    } else {
        decoded
    }
}

fn spawn_collection_task<T>(
    cancel: CancellationToken,
    mut source: watch::Receiver<Vec<Document>>,
    sink: watch::Sender<Vec<T>>,
    decode: fn(&[Document]) -> Vec<T>,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        loop {
            let snapshot = decode(&source.borrow_and_update());
            let _ = sink.send(snapshot);

            tokio::select! {
                _ = cancel.cancelled() => break,
                changed = source.changed() => {
                    if changed.is_err() {
                        tracing::debug!("Collection subscription closed, sync task exiting");
                        break;
                    }
                }
            }
        }
    })
}

/// The identity task accumulates merges: each snapshot with the document
/// present overwrites only the top-level fields it carries; an absent
/// document leaves the read-model as it stands (the defaults, if nothing
/// was ever merged).
fn spawn_identity_task(
    cancel: CancellationToken,
    mut source: watch::Receiver<Option<Document>>,
    sink: watch::Sender<SiteIdentity>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut current = seed::default_identity();
        loop {
            let doc = source.borrow_and_update().clone();
            if let Some(doc) = doc {
                if let Some(patch) = typed::decode_document::<IdentityPatch>(&doc) {
                    current.apply(patch);
                }
            }
            let _ = sink.send(current.clone());

            tokio::select! {
                _ = cancel.cancelled() => break,
                changed = source.changed() => {
                    if changed.is_err() {
                        tracing::debug!("Identity subscription closed, sync task exiting");
                        break;
                    }
                }
            }
        }
    })
}
