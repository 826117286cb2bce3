//! Structured logging with correlation tracking for admin API calls
//!
//! Every request gets a correlation id that is sent to the service and
//! repeated on each log line, so a failing lifecycle operation can be matched
//! against the service's own traces.

use log::{debug, warn};
use serde_json::json;
use std::time::{Duration, Instant};

/// Context for a single HTTP call
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: String,
    pub method: String,
    pub url: String,
    pub start_time: Instant,
}

impl RequestContext {
    pub fn new(method: &str, url: &str) -> Self {
        Self {
            correlation_id: uuid::Uuid::new_v4().to_string(),
            method: method.to_string(),
            url: url.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Structured logger for API requests
#[derive(Debug, Clone, Default)]
pub struct ApiLogger {
    /// Log request bodies at trace level
    pub log_bodies: bool,
}

impl ApiLogger {
    pub fn new(log_bodies: bool) -> Self {
        Self { log_bodies }
    }

    pub fn log_request(&self, context: &RequestContext, body: Option<&serde_json::Value>) {
        let log_data = json!({
            "event": "http_request",
            "correlation_id": context.correlation_id,
            "method": context.method,
            "url": context.url,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        debug!("HTTP Request: {}", log_data);

        if self.log_bodies {
            if let Some(body) = body {
                log::trace!("HTTP Request Body [{}]: {}", context.correlation_id, body);
            }
        }
    }

    pub fn log_response(&self, context: &RequestContext, status_code: u16) {
        let log_data = json!({
            "event": "http_response",
            "correlation_id": context.correlation_id,
            "method": context.method,
            "url": context.url,
            "status_code": status_code,
            "duration_ms": context.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        // 404 is an expected outcome when probing for deleted objects
        if status_code >= 400 && status_code != 404 {
            warn!("HTTP Response (Error): {}", log_data);
        } else {
            debug!("HTTP Response: {}", log_data);
        }
    }

    pub fn log_transport_failure(&self, context: &RequestContext, error: &str) {
        let log_data = json!({
            "event": "http_failure",
            "correlation_id": context.correlation_id,
            "method": context.method,
            "url": context.url,
            "error": error,
            "duration_ms": context.elapsed().as_millis(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });
        warn!("HTTP Request Failed: {}", log_data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_contexts_get_distinct_correlation_ids() {
        let first = RequestContext::new("GET", "https://example.com");
        let second = RequestContext::new("GET", "https://example.com");
        assert_ne!(first.correlation_id, second.correlation_id);
        assert_eq!(first.method, "GET");
    }
}
