use super::*;
use shared::error::{AppError, ErrorCode};
use shared::models::WebsitePatch;
use vow_planner::{DraftError, DraftStore, SaveOutcome};

#[tokio::test]
async fn test_fetch_website_sends_bearer_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/weddings/w1/website")
            .header("authorization", "Bearer test-token");
        then.status(200).json_body(website_body());
    });

    let api = WebsiteApi::new(&test_config(&server)).unwrap();
    let content = api.fetch_website().await.unwrap();

    assert_eq!(content.website_labels["hero"]["title"], "Sam & Alex");
    assert_eq!(content.website_sections.len(), 2);
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_save_website_sends_only_patch_halves() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PATCH)
            .path("/weddings/w1/website")
            .json_body(json!({
                "websiteSections": [
                    { "id": "hero", "enabled": true, "order": 0 },
                    { "id": "rsvp", "enabled": true, "order": 1 }
                ]
            }));
        then.status(200).json_body(json!({
            "websiteLabels": { "hero": { "title": "Sam & Alex" } },
            "websiteSections": [
                { "id": "hero", "enabled": true, "order": 0 },
                { "id": "rsvp", "enabled": true, "order": 1 }
            ]
        }));
    });

    let api = WebsiteApi::new(&test_config(&server)).unwrap();
    let patch = WebsitePatch {
        website_labels: None,
        website_sections: Some(vec![
            shared::models::SectionConfig::new("hero", true, 0),
            shared::models::SectionConfig::new("rsvp", true, 1),
        ]),
    };
    let content = api.save_website(&patch).await.unwrap();

    assert!(content.website_sections.iter().all(|s| s.enabled));
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_api_error_body_is_decoded() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/weddings/w1/website");
        then.status(403).json_body(json!({
            "code": 2001,
            "message": "Not your wedding",
            "details": { "wedding_id": "w1" }
        }));
    });

    let api = WebsiteApi::new(&test_config(&server)).unwrap();
    let err = api.fetch_website().await.unwrap_err();

    match &err {
        ClientError::Api { code, message, .. } => {
            assert_eq!(*code, 2001);
            assert_eq!(message, "Not your wedding");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::PermissionDenied);
    assert_eq!(app.detail("wedding_id").unwrap(), "w1");
}

#[tokio::test]
async fn test_plain_error_body_falls_back_to_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/weddings/w1/website");
        then.status(502).body("bad gateway");
    });

    let api = WebsiteApi::new(&test_config(&server)).unwrap();
    let err = api.fetch_website().await.unwrap_err();

    match &err {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
    assert_eq!(AppError::from(err).code, ErrorCode::NetworkError);
}

#[tokio::test]
async fn test_malformed_success_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/weddings/w1/website");
        then.status(200).body("<html>maintenance</html>");
    });

    let api = WebsiteApi::new(&test_config(&server)).unwrap();
    let err = api.fetch_website().await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert_eq!(AppError::from(err).code, ErrorCode::InvalidFormat);
}

#[tokio::test]
async fn test_draft_store_saves_through_api() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/weddings/w1/website");
        then.status(200).json_body(website_body());
    });
    let save = server.mock(|when, then| {
        when.method(Method::PATCH)
            .path("/weddings/w1/website")
            .json_body(json!({
                "websiteLabels": { "hero": { "title": "Sam & Alex, June 2027" } }
            }));
        then.status(200).json_body(json!({
            "websiteLabels": { "hero": { "title": "Sam & Alex, June 2027" } },
            "websiteSections": [
                { "id": "hero", "enabled": true, "order": 0 },
                { "id": "rsvp", "enabled": false, "order": 1 }
            ]
        }));
    });

    let api = WebsiteApi::new(&test_config(&server)).unwrap();
    let mut store = DraftStore::from_content(api.fetch_website().await.unwrap());
    store.update_label("hero", "title", "Sam & Alex, June 2027");

    let outcome = store.save(&api).await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert!(!store.has_unsaved_changes());
    assert_eq!(store.saved_labels()["hero"]["title"], "Sam & Alex, June 2027");
    assert_eq!(save.calls(), 1);
}

#[tokio::test]
async fn test_failed_save_through_api_keeps_edits() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::PATCH).path("/weddings/w1/website");
        then.status(500).json_body(json!({
            "code": 9001,
            "message": "Internal error"
        }));
    });

    let api = WebsiteApi::new(&test_config(&server)).unwrap();
    let mut store = DraftStore::new();
    store.initialize_sections(vec![shared::models::SectionConfig::new("rsvp", false, 0)]);
    store.update_section("rsvp", true);

    let err = store.save(&api).await.unwrap_err();

    match err {
        DraftError::SaveFailed(cause) => assert_eq!(cause.code, ErrorCode::InternalError),
        other => panic!("Expected SaveFailed, got {other:?}"),
    }
    assert!(store.has_unsaved_changes());
    assert!(store.pending_section("rsvp").unwrap().enabled);
}
