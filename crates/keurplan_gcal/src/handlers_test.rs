// --- File: crates/keurplan_gcal/src/handlers_test.rs ---
use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::handlers::CalendarApiState;
use crate::routes::routes;
use crate::service::mock::MockCalendarService;
use keurplan_common::services::{BoxFuture, DirectoryService, EventDetails, UserRecord};
use keurplan_common::ServiceError;

/// Directory double backed by a username -> email map.
struct MockDirectoryService {
    users: HashMap<String, String>,
    fail: bool,
}

impl MockDirectoryService {
    fn with_user(username: &str, email: &str) -> Self {
        let mut users = HashMap::new();
        users.insert(username.to_string(), email.to_string());
        Self { users, fail: false }
    }

    fn unavailable() -> Self {
        Self {
            users: HashMap::new(),
            fail: true,
        }
    }
}

impl DirectoryService for MockDirectoryService {
    fn resolve_user(&self, username: &str) -> BoxFuture<'_, UserRecord, ServiceError> {
        let username = username.to_string();

        Box::pin(async move {
            if self.fail {
                return Err(ServiceError::DirectoryUnavailable(
                    "connection refused".to_string(),
                ));
            }
            match self.users.get(&username) {
                Some(email) => Ok(UserRecord {
                    username: username.clone(),
                    email: email.clone(),
                    display_name: None,
                }),
                None => Err(ServiceError::UserNotFound(username)),
            }
        })
    }
}

fn test_router(directory: MockDirectoryService, calendar: Arc<MockCalendarService>) -> Router {
    let state = Arc::new(CalendarApiState {
        directory: Arc::new(directory),
        calendar,
    });
    routes(state)
}

fn seeded(id: &str, summary: &str, start: &str, end: &str, sequence: Option<i32>) -> EventDetails {
    EventDetails {
        event_id: id.to_string(),
        summary: summary.to_string(),
        location: Some("Gentsesteenweg 12, Aalst".to_string()),
        description: Some("EPC inspection".to_string()),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status: "confirmed".to_string(),
        sequence,
    }
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

async fn response_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn unknown_user_returns_404_and_skips_the_provider() {
    let calendar = Arc::new(MockCalendarService::new());
    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar.clone(),
    );

    let requests = vec![
        empty_request("GET", "/calendars/ghost/events"),
        json_request(
            "POST",
            "/calendars/ghost/events",
            json!({
                "summary": "EPC inspection",
                "location": "Aalst",
                "description": "ground floor",
                "start": "2026-02-10T09:00:00",
                "end": "2026-02-10T10:00:00",
            }),
        ),
        json_request(
            "PUT",
            "/calendars/ghost/events/evt-1",
            json!({"start": "2026-02-11T09:00:00", "end": "2026-02-11T10:00:00"}),
        ),
        empty_request("DELETE", "/calendars/ghost/events/evt-1"),
    ];

    for request in requests {
        let response = send(&router, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = response_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("ghost"));
    }

    assert_eq!(calendar.call_count(), 0);
}

#[tokio::test]
async fn create_then_list_round_trips_the_event_fields() {
    let calendar = Arc::new(MockCalendarService::new());
    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar.clone(),
    );

    let response = send(
        &router,
        json_request(
            "POST",
            "/calendars/jdevos/events",
            json!({
                "summary": "Electrical inspection",
                "location": "Stationsstraat 4, Gent",
                "description": "new connection",
                "start": "2026-02-10T09:00:00",
                "end": "2026-02-10T10:00:00",
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    assert_eq!(created["success"], json!(true));
    let event_id = created["event_id"].as_str().unwrap().to_string();

    let response = send(&router, empty_request("GET", "/calendars/jdevos/events")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event["event_id"], json!(event_id));
    assert_eq!(event["summary"], json!("Electrical inspection"));
    assert_eq!(event["location"], json!("Stationsstraat 4, Gent"));
    assert_eq!(event["description"], json!("new connection"));
    // Wall-clock Brussels times, stored as UTC (CET in February)
    assert_eq!(event["start_time"], json!("2026-02-10T08:00:00+00:00"));
    assert_eq!(event["end_time"], json!("2026-02-10T09:00:00+00:00"));
}

#[tokio::test]
async fn listing_caps_at_three_events_in_start_order() {
    let calendar = Arc::new(MockCalendarService::new());
    calendar.seed_event(
        "jan@keurplan.be",
        seeded(
            "evt-3",
            "third",
            "2026-03-03T08:00:00+00:00",
            "2026-03-03T09:00:00+00:00",
            None,
        ),
    );
    calendar.seed_event(
        "jan@keurplan.be",
        seeded(
            "evt-1",
            "first",
            "2026-03-01T08:00:00+00:00",
            "2026-03-01T09:00:00+00:00",
            None,
        ),
    );
    calendar.seed_event(
        "jan@keurplan.be",
        seeded(
            "evt-4",
            "fourth",
            "2026-03-04T08:00:00+00:00",
            "2026-03-04T09:00:00+00:00",
            None,
        ),
    );
    calendar.seed_event(
        "jan@keurplan.be",
        seeded(
            "evt-2",
            "second",
            "2026-03-02T08:00:00+00:00",
            "2026-03-02T09:00:00+00:00",
            None,
        ),
    );

    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar,
    );

    let response = send(&router, empty_request("GET", "/calendars/jdevos/events")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let ids: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["event_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["evt-1", "evt-2", "evt-3"]);
}

#[tokio::test]
async fn reschedule_bumps_the_sequence_and_preserves_other_fields() {
    let calendar = Arc::new(MockCalendarService::new());
    calendar.seed_event(
        "jan@keurplan.be",
        seeded(
            "evt-9",
            "Gas inspection",
            "2026-03-01T08:00:00+00:00",
            "2026-03-01T09:00:00+00:00",
            Some(4),
        ),
    );
    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar.clone(),
    );

    let response = send(
        &router,
        json_request(
            "PUT",
            "/calendars/jdevos/events/evt-9",
            json!({"start": "2026-03-05T14:00:00", "end": "2026-03-05T15:00:00"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;

    assert_eq!(updated["sequence"], json!(5));
    assert_eq!(updated["summary"], json!("Gas inspection"));
    assert_eq!(updated["location"], json!("Gentsesteenweg 12, Aalst"));
    assert_eq!(updated["description"], json!("EPC inspection"));
    assert_eq!(updated["start_time"], json!("2026-03-05T13:00:00+00:00"));

    let stored = calendar.stored_event("jan@keurplan.be", "evt-9").unwrap();
    assert_eq!(stored.sequence, Some(5));
    assert_eq!(stored.summary, "Gas inspection");
}

#[tokio::test]
async fn reschedule_treats_a_missing_sequence_as_zero() {
    let calendar = Arc::new(MockCalendarService::new());
    calendar.seed_event(
        "jan@keurplan.be",
        seeded(
            "evt-7",
            "EPC visit",
            "2026-03-01T08:00:00+00:00",
            "2026-03-01T09:00:00+00:00",
            None,
        ),
    );
    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar,
    );

    let response = send(
        &router,
        json_request(
            "PUT",
            "/calendars/jdevos/events/evt-7",
            json!({"start": "2026-03-06T09:00:00", "end": "2026-03-06T10:00:00"}),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["sequence"], json!(1));
}

#[tokio::test]
async fn deleting_an_unknown_event_surfaces_the_provider_error() {
    let calendar = Arc::new(MockCalendarService::new());
    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar,
    );

    let response = send(
        &router,
        empty_request("DELETE", "/calendars/jdevos/events/evt-404"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Not Found"));
    assert!(message.contains("evt-404"));
}

#[tokio::test]
async fn deleting_an_existing_event_confirms_success() {
    let calendar = Arc::new(MockCalendarService::new());
    calendar.seed_event(
        "jan@keurplan.be",
        seeded(
            "evt-5",
            "Gas inspection",
            "2026-03-01T08:00:00+00:00",
            "2026-03-01T09:00:00+00:00",
            None,
        ),
    );
    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar.clone(),
    );

    let response = send(
        &router,
        empty_request("DELETE", "/calendars/jdevos/events/evt-5"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert!(calendar.stored_event("jan@keurplan.be", "evt-5").is_none());
}

#[tokio::test]
async fn directory_outage_maps_to_500_with_error_body() {
    let calendar = Arc::new(MockCalendarService::new());
    let router = test_router(MockDirectoryService::unavailable(), calendar.clone());

    let response = send(&router, empty_request("GET", "/calendars/jdevos/events")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
    assert_eq!(calendar.call_count(), 0);
}

#[tokio::test]
async fn invalid_start_time_surfaces_as_calendar_failure() {
    let calendar = Arc::new(MockCalendarService::new());
    let router = test_router(
        MockDirectoryService::with_user("jdevos", "jan@keurplan.be"),
        calendar,
    );

    let response = send(
        &router,
        json_request(
            "POST",
            "/calendars/jdevos/events",
            json!({
                "summary": "EPC inspection",
                "location": "Aalst",
                "description": "ground floor",
                "start": "not-a-date",
                "end": "2026-02-10T10:00:00",
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("insert"));
}
