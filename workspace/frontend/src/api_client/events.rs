use common::{EventAcknowledgement, LogEventRequest};
use super::{ApiFailure, post};

pub async fn log_event(request: &LogEventRequest) -> Result<EventAcknowledgement, ApiFailure> {
    post("/events", request).await
}
