//! End-to-end lead submission against an in-process stand-in for the intake endpoint.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use lead_intake::intake::{
    Field, FormController, FormStatus, FormVariant, HttpIntakeTransport, IntakePayload,
    IntakeTransport, SubmitOutcome, TransportError,
};

#[derive(Clone, Copy)]
enum Behavior {
    Accept,
    Reject,
    Crash,
    Garbled,
}

#[derive(Clone)]
struct Stub {
    behavior: Behavior,
    received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn contact(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    stub.received
        .lock()
        .expect("stub mutex poisoned")
        .push((content_type, body));

    match stub.behavior {
        Behavior::Accept => Json(json!({
            "success": true,
            "message": "We'll call you within the hour."
        }))
        .into_response(),
        Behavior::Reject => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": "Please use a valid email address." })),
        )
            .into_response(),
        Behavior::Crash => {
            (StatusCode::INTERNAL_SERVER_ERROR, "<html>upstream error</html>").into_response()
        }
        Behavior::Garbled => (StatusCode::OK, "<html>thanks!</html>").into_response(),
    }
}

async fn spawn_stub(behavior: Behavior) -> (String, Arc<Mutex<Vec<(Option<String>, Value)>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let stub = Stub {
        behavior,
        received: Arc::clone(&received),
    };
    let app = Router::new()
        .route("/api/contact", post(contact))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub serves");
    });

    (format!("http://{addr}/api/contact"), received)
}

fn filled_form(endpoint: &str) -> FormController<HttpIntakeTransport> {
    let mut form = FormController::new(
        FormVariant::sewer_drain_contact(),
        Arc::new(HttpIntakeTransport::new(endpoint)),
        "(330) 555-0100",
    );
    for (field, value) in [
        (Field::FirstName, "Jane"),
        (Field::LastName, "Smith"),
        (Field::Email, "jane@example.com"),
        (Field::Phone, "330 555 1234"),
        (Field::ServiceType, "Sewer Backup"),
        (Field::Urgency, "Emergency - ASAP"),
        (Field::Street, "123 Main St"),
        (Field::City, "Akron"),
        (Field::State, "OH"),
        (Field::Message, "Water coming up through the floor drain."),
    ] {
        form.update_field(field, value).expect("form editable");
    }
    form
}

#[tokio::test]
async fn accepted_lead_is_posted_once_as_json() {
    let (endpoint, received) = spawn_stub(Behavior::Accept).await;
    let mut form = filled_form(&endpoint);

    let outcome = form.submit("/sewer-drain").await.expect("submit allowed");

    assert_eq!(
        outcome,
        SubmitOutcome::Submitted {
            message: "We'll call you within the hour.".to_string()
        }
    );
    let received = received.lock().expect("stub mutex poisoned").clone();
    assert_eq!(received.len(), 1);
    let (content_type, body) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body["firstName"], "Jane");
    assert_eq!(body["phone"], "(330) 555-1234");
    assert_eq!(body["serviceType"], "Sewer Backup");
    assert_eq!(body["source"], "sewer-drain-contact-form");
    assert_eq!(body["sourcePage"], "/sewer-drain");
    assert_eq!(body["city"], "Akron");
    assert_eq!(
        body["message"],
        "Urgency: Emergency - ASAP\nAddress: 123 Main St, Akron, OH\n\nWater coming up through the floor drain."
    );
    assert_eq!(form.values().get(Field::FirstName), "Jane", "retained on success screen");
}

#[tokio::test]
async fn rejected_lead_surfaces_server_error() {
    let (endpoint, _) = spawn_stub(Behavior::Reject).await;
    let mut form = filled_form(&endpoint);
    let before = form.values().clone();

    let outcome = form.submit("/sewer-drain").await.expect("submit allowed");

    assert_eq!(
        outcome,
        SubmitOutcome::Failed {
            message: "Please use a valid email address.".to_string()
        }
    );
    assert_eq!(form.values(), &before);
    assert!(form.can_submit());
}

#[tokio::test]
async fn upstream_crash_falls_back_to_phone_number() {
    let (endpoint, _) = spawn_stub(Behavior::Crash).await;
    let mut form = filled_form(&endpoint);

    form.submit("/sewer-drain").await.expect("submit allowed");

    match form.status() {
        FormStatus::Error { message } => assert!(message.contains("(330) 555-0100")),
        other => panic!("expected error status, got {other:?}"),
    }
}

fn sample_payload() -> IntakePayload {
    IntakePayload {
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        email: "jane@example.com".to_string(),
        phone: "(330) 555-1234".to_string(),
        service_type: "Plumbing".to_string(),
        message: "Test".to_string(),
        source: "contact-form".to_string(),
        source_page: "/contact".to_string(),
        extra: Default::default(),
    }
}

#[tokio::test]
async fn transport_reports_non_json_error_bodies() {
    let (endpoint, _) = spawn_stub(Behavior::Crash).await;
    let transport = HttpIntakeTransport::new(endpoint);

    match transport.send(&sample_payload()).await {
        Err(TransportError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_rejects_html_on_success_status() {
    let (endpoint, _) = spawn_stub(Behavior::Garbled).await;
    let transport = HttpIntakeTransport::new(endpoint);

    match transport.send(&sample_payload()).await {
        Err(TransportError::Decode(_)) => {}
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn garbled_success_reply_falls_back_to_phone_number() {
    let (endpoint, received) = spawn_stub(Behavior::Garbled).await;
    let mut form = filled_form(&endpoint);

    let outcome = form.submit("/sewer-drain").await.expect("submit allowed");

    match outcome {
        SubmitOutcome::Failed { message } => assert!(message.contains("(330) 555-0100")),
        other => panic!("expected failed outcome, got {other:?}"),
    }
    assert_eq!(received.lock().expect("stub mutex poisoned").len(), 1);
    assert!(form.can_submit());
}

#[tokio::test]
async fn unreachable_endpoint_is_a_submission_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    let mut form = filled_form(&format!("http://{addr}/api/contact"));

    let outcome = form.submit("/sewer-drain").await.expect("submit allowed");

    assert!(
        matches!(outcome, SubmitOutcome::Failed { ref message } if message.contains("call us"))
    );
    assert_eq!(form.values().get(Field::City), "Akron");
}
