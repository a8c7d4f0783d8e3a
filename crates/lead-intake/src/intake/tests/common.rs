use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::intake::domain::{Field, IntakePayload, IntakeResponse};
use crate::intake::transport::{IntakeTransport, TransportError};
use crate::intake::{FormController, FormVariant};

pub(super) const FALLBACK_PHONE: &str = "(330) 555-0100";

#[derive(Debug, Clone)]
pub(super) enum Reply {
    Accept,
    Reject(&'static str),
    Unreachable,
    Garbled,
}

/// Records every posted payload and answers from a script (accepting once the script is empty).
#[derive(Default)]
pub(super) struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    sent: Mutex<Vec<IntakePayload>>,
}

impl ScriptedTransport {
    pub(super) fn replying(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn sent(&self) -> Vec<IntakePayload> {
        self.sent.lock().expect("sent mutex poisoned").clone()
    }
}

impl IntakeTransport for ScriptedTransport {
    async fn send(&self, payload: &IntakePayload) -> Result<IntakeResponse, TransportError> {
        self.sent
            .lock()
            .expect("sent mutex poisoned")
            .push(payload.clone());
        let reply = self
            .replies
            .lock()
            .expect("reply mutex poisoned")
            .pop_front()
            .unwrap_or(Reply::Accept);

        match reply {
            Reply::Accept => Ok(IntakeResponse::accepted("Thanks, we received your request.")),
            Reply::Reject(error) => Ok(IntakeResponse::rejected(error)),
            Reply::Unreachable => Err(TransportError::Status {
                status: 502,
                body: "bad gateway".to_string(),
            }),
            Reply::Garbled => {
                let err = serde_json::from_str::<IntakeResponse>("<html>oops</html>")
                    .expect_err("html is not json");
                Err(TransportError::Decode(err))
            }
        }
    }
}

pub(super) fn controller(
    variant: FormVariant,
    transport: &Arc<ScriptedTransport>,
) -> FormController<ScriptedTransport> {
    FormController::new(variant, Arc::clone(transport), FALLBACK_PHONE)
}

pub(super) fn fill(form: &mut FormController<ScriptedTransport>, entries: &[(Field, &str)]) {
    for (field, value) in entries {
        form.update_field(*field, value).expect("form editable");
    }
}

pub(super) fn valid_general_contact() -> Vec<(Field, &'static str)> {
    vec![
        (Field::FirstName, "Jane"),
        (Field::LastName, "Smith"),
        (Field::Email, "a@b.com"),
        (Field::Phone, "3305551234"),
        (Field::ServiceType, "Plumbing"),
        (Field::Message, "Water heater is leaking in the basement."),
    ]
}

pub(super) fn valid_plumbing_contact() -> Vec<(Field, &'static str)> {
    vec![
        (Field::FirstName, "Jane"),
        (Field::LastName, "Smith"),
        (Field::Email, "jane@example.com"),
        (Field::Phone, "(330) 555-1234"),
        (Field::ServiceType, "Sump Pump Service"),
        (Field::Urgency, "This week"),
        (Field::City, "Akron"),
        (Field::State, "OH"),
    ]
}
