use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

/// Fixed one-second window limiter shared by all public endpoints. Coarse on
/// purpose: the form is a single-submission surface, not a high-volume API.
#[derive(Clone, Debug)]
pub struct PublicRateLimit {
    per_second: u32,
    window: Arc<Mutex<Window>>,
}

#[derive(Debug)]
struct Window {
    opened_at: Instant,
    hits: u32,
}

impl PublicRateLimit {
    pub fn new(per_second: u32) -> Self {
        Self {
            per_second: per_second.max(1),
            window: Arc::new(Mutex::new(Window {
                opened_at: Instant::now(),
                hits: 0,
            })),
        }
    }

    fn try_pass(&self) -> bool {
        let mut window = self.window.lock().expect("rate limit mutex poisoned");
        let now = Instant::now();
        if now.duration_since(window.opened_at) >= Duration::from_secs(1) {
            window.opened_at = now;
            window.hits = 0;
        }
        if window.hits < self.per_second {
            window.hits += 1;
            true
        } else {
            false
        }
    }
}

pub async fn rps_middleware(
    State(limit): State<PublicRateLimit>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !limit.try_pass() {
        let body = Json(json!({ "error": "rate_limit_exceeded" }));
        return (StatusCode::TOO_MANY_REQUESTS, body).into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_caps_at_configured_rate() {
        let limit = PublicRateLimit::new(3);
        assert!(limit.try_pass());
        assert!(limit.try_pass());
        assert!(limit.try_pass());
        assert!(!limit.try_pass());
    }

    #[test]
    fn zero_rate_still_allows_one_request() {
        let limit = PublicRateLimit::new(0);
        assert!(limit.try_pass());
        assert!(!limit.try_pass());
    }
}
