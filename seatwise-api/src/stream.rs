use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use std::convert::Infallible;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/session/stream", get(stream_events))
}

/// GET /v1/session/stream
/// Server-sent events for every seat map change. Subscribers that fall
/// behind skip the events they missed.
async fn stream_events(State(state): State<AppState>) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.events.subscribe()).filter_map(|result| {
        let event = result.ok()?;
        let data = serde_json::to_string(&event).ok()?;
        Some(Ok::<_, Infallible>(Event::default().event(event.name()).data(data)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
