//! Visitor-facing flows: view lifecycle, content sync fallback, and both
//! submission flows against the in-memory stores.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::Utc;

use nexus_core::view::{SubmitStatus, ViewState};
use nexus_core::{message, seed, CoreError, Section};
use nexus_site::{Site, SiteConfig, SiteError};
use nexus_store::{ContentStore, MemoryAssetStore, MemoryStore};

async fn start_site() -> (Site, Arc<MemoryStore>, Arc<MemoryAssetStore>) {
    let store = Arc::new(MemoryStore::new());
    let assets = Arc::new(MemoryAssetStore::new());
    let site = Site::start(
        Arc::clone(&store) as Arc<dyn ContentStore>,
        Arc::clone(&assets) as _,
        SiteConfig::default(),
    )
    .await;
    (site, store, assets)
}

fn fill_contact(site: &mut Site) {
    let form = site.contact_form_mut();
    form.name = "Ada".into();
    form.email = "ada@agency.test".into();
    form.message = "Mission parameters attached.".into();
}

fn fill_booking(site: &mut Site) {
    let service = site
        .services()
        .into_iter()
        .find(|s| s.name == "DIGITAL STRATEGY AUDIT")
        .expect("catalog must carry the audit service");
    site.select_service(service);

    let today = Utc::now().date_naive();
    let date = site.booking_dates(today)[3];
    let form = site.booking_form_mut();
    form.date = Some(date);
    form.time = Some("15:00".into());
    form.client_name = "Ada".into();
    form.client_whatsapp = "+1555000111".into();
}

// ---------------------------------------------------------------------------
// View lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn open_then_close_restores_the_view_default_for_every_section() {
    let (mut site, _store, _assets) = start_site().await;
    let default = ViewState::new();

    for &section in nexus_core::section::ALL_SECTIONS {
        site.open_section(section);
        site.select_project(seed::projects().remove(0));
        site.gallery_next();
        site.select_service(seed::services().remove(0));
        fill_contact(&mut site);

        site.close_section();
        assert_eq!(*site.view(), default, "close() must fully reset after {section:?}");
    }
    site.shutdown().await;
}

#[tokio::test]
async fn gallery_navigation_wraps_both_ways() {
    let (mut site, _store, _assets) = start_site().await;
    let project = seed::projects().remove(0);
    let n = project.gallery.len();

    site.open_section(Section::Portfolio);
    site.select_project(project);
    for _ in 0..n {
        site.gallery_next();
    }
    assert_eq!(site.view().gallery_index, 0);
    site.gallery_prev();
    assert_eq!(site.view().gallery_index, n - 1);
    site.shutdown().await;
}

// ---------------------------------------------------------------------------
// Content sync
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_collections_fall_back_to_seed_data() {
    let (site, _store, _assets) = start_site().await;

    let mut projects = site.projects();
    let snapshot = projects.wait_for(|p| !p.is_empty()).await.unwrap().clone();
    assert_eq!(snapshot, seed::projects());

    let mut experiences = site.experiences();
    let snapshot = experiences.wait_for(|e| !e.is_empty()).await.unwrap().clone();
    assert_eq!(snapshot, seed::experiences());
    site.shutdown().await;
}

#[tokio::test]
async fn one_stored_project_displaces_the_seed_list_and_deletion_restores_it() {
    let (site, store, _assets) = start_site().await;

    let id = store
        .create(
            "projects",
            serde_json::json!({
                "title": "LIVE PROJECT",
                "gallery": ["https://example.test/1.jpg"],
            }),
        )
        .await
        .unwrap();

    let mut projects = site.projects();
    let snapshot = projects
        .wait_for(|p| p.len() == 1 && p[0].id == id)
        .await
        .unwrap()
        .clone();
    assert_eq!(snapshot[0].title, "LIVE PROJECT");

    // Deleting the last document reverts the read-model to seed data.
    store.delete("projects", &id).await.unwrap();
    let snapshot = projects
        .wait_for(|p| p.first().map(|p| p.id.as_str()) == Some("1"))
        .await
        .unwrap()
        .clone();
    assert_eq!(snapshot, seed::projects());
    site.shutdown().await;
}

#[tokio::test]
async fn experiences_sort_descending_by_period() {
    let (site, store, _assets) = start_site().await;

    for period in ["2019 - 2021", "2021 - Present", "2017 - 2019"] {
        store
            .create(
                "experiences",
                serde_json::json!({ "company": "X", "role": "Y", "period": period }),
            )
            .await
            .unwrap();
    }

    let mut experiences = site.experiences();
    let snapshot = experiences.wait_for(|e| e.len() == 3).await.unwrap().clone();
    let periods: Vec<&str> = snapshot.iter().map(|e| e.period.as_str()).collect();
    assert_eq!(periods, ["2021 - Present", "2019 - 2021", "2017 - 2019"]);
    site.shutdown().await;
}

#[tokio::test]
async fn malformed_documents_are_skipped_without_taking_the_model_down() {
    let (site, store, _assets) = start_site().await;

    store
        .create("messages", serde_json::json!({ "name": 42 }))
        .await
        .unwrap();
    store
        .create(
            "messages",
            serde_json::json!({
                "name": "Ada",
                "email": "ada@agency.test",
                "message": "hello",
                "timestamp": "2024-06-10T12:00:00Z",
            }),
        )
        .await
        .unwrap();

    let mut messages = site.messages();
    let snapshot = messages.wait_for(|m| !m.is_empty()).await.unwrap().clone();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].name, "Ada");
    site.shutdown().await;
}

// ---------------------------------------------------------------------------
// Contact flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_contact_form_performs_no_write() {
    let (mut site, store, _assets) = start_site().await;

    site.open_section(Section::Contact);
    site.contact_form_mut().name = "Ada".into(); // email and message missing

    let err = site.submit_contact().await.unwrap_err();
    assert_matches!(err, SiteError::Core(CoreError::Validation(_)));
    assert_eq!(store.write_count(), 0);
    assert_eq!(site.view().contact_status, SubmitStatus::Idle);
    site.shutdown().await;
}

#[tokio::test]
async fn contact_submission_creates_one_unread_message() {
    let (mut site, store, _assets) = start_site().await;

    site.open_section(Section::Contact);
    fill_contact(&mut site);
    let id = site.submit_contact().await.unwrap();

    assert_eq!(site.view().contact_status, SubmitStatus::Success);
    assert!(site.view().contact_form.name.is_empty(), "buffer must clear");

    let docs = store.documents("messages");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, id);
    assert_eq!(docs[0].fields["status"], message::STATUS_UNREAD);
    let stamp = docs[0].fields["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    site.shutdown().await;
}

#[tokio::test]
async fn rejected_contact_write_fails_the_flow_and_keeps_the_buffer() {
    let (mut site, store, _assets) = start_site().await;

    fill_contact(&mut site);
    store.fail_writes(true);
    let err = site.submit_contact().await.unwrap_err();
    assert_matches!(err, SiteError::Store(_));
    assert_eq!(site.view().contact_status, SubmitStatus::Failed);
    assert_eq!(site.view().contact_form.name, "Ada");

    // Manual retry after the backend recovers.
    store.fail_writes(false);
    site.reset_contact();
    site.submit_contact().await.unwrap();
    assert_eq!(site.view().contact_status, SubmitStatus::Success);
    site.shutdown().await;
}

#[tokio::test]
async fn resubmitting_creates_a_second_independent_document() {
    let (mut site, store, _assets) = start_site().await;

    fill_contact(&mut site);
    site.submit_contact().await.unwrap();
    site.reset_contact();
    fill_contact(&mut site);
    site.submit_contact().await.unwrap();

    assert_eq!(store.documents("messages").len(), 2);
    site.shutdown().await;
}

// ---------------------------------------------------------------------------
// Booking flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn booking_without_a_service_performs_no_write() {
    let (mut site, store, _assets) = start_site().await;

    site.open_section(Section::Appointment);
    let today = Utc::now().date_naive();
    let date = site.booking_dates(today)[3];
    let form = site.booking_form_mut();
    form.date = Some(date);
    form.time = Some("15:00".into());
    form.client_name = "Ada".into();
    form.client_whatsapp = "+1555000111".into();

    let err = site.submit_booking().await.unwrap_err();
    assert_matches!(err, SiteError::Core(CoreError::Validation(_)));
    assert_eq!(store.write_count(), 0);
    assert_eq!(site.view().booking_status, SubmitStatus::Idle);
    site.shutdown().await;
}

#[tokio::test]
async fn booking_scenario_creates_one_pending_appointment() {
    let (mut site, store, _assets) = start_site().await;

    site.open_section(Section::Appointment);
    fill_booking(&mut site);
    let expected_date = site.view().booking_form.date.unwrap();

    let id = site.submit_booking().await.unwrap();
    assert_eq!(site.view().booking_status, SubmitStatus::Success);

    let docs = store.documents("appointments");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, id);
    assert_eq!(docs[0].fields["service"], "DIGITAL STRATEGY AUDIT");
    assert_eq!(docs[0].fields["status"], "pending");
    assert_eq!(docs[0].fields["date"], expected_date.to_string());
    assert_eq!(docs[0].fields["time"], "15:00");
    assert_eq!(docs[0].fields["clientName"], "Ada");
    assert_eq!(docs[0].fields["clientWhatsapp"], "+1555000111");

    // "Reschedule slot" returns the form to its pre-fill-free idle state.
    site.reset_booking();
    assert_eq!(site.view().booking_status, SubmitStatus::Idle);
    assert!(site.view().booking_form.date.is_none());
    assert!(site.view().booking_form.client_name.is_empty());
    site.shutdown().await;
}

#[tokio::test]
async fn rejected_booking_write_fails_the_flow() {
    let (mut site, store, _assets) = start_site().await;

    fill_booking(&mut site);
    store.fail_writes(true);
    assert!(site.submit_booking().await.is_err());
    assert_eq!(site.view().booking_status, SubmitStatus::Failed);
    assert_eq!(site.view().booking_form.client_name, "Ada");
    site.shutdown().await;
}

#[tokio::test]
async fn off_grid_time_slot_is_rejected_before_any_write() {
    let (mut site, store, _assets) = start_site().await;

    fill_booking(&mut site);
    site.booking_form_mut().time = Some("15:30".into());
    assert!(site.submit_booking().await.is_err());
    assert_eq!(store.write_count(), 0);
    site.shutdown().await;
}
