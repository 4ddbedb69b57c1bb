//! Access log: one `request_completed` event per request.
//!
//! Game routes also record the matched route pattern and the `game_id` path
//! segment, so every roll can be traced back to its game without parsing URLs.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use crate::middleware::request_trace::TraceId;

/// Request facts captured before the inner service consumes the request.
struct Completed {
    method: String,
    path: String,
    route: String,
    game_id: String,
    trace_id: String,
}

macro_rules! request_completed {
    ($level:ident, $c:ident, $status:expr, $duration_us:expr) => {
        $level!(
            http.method = %$c.method,
            url.path = %$c.path,
            http.route = %$c.route,
            game_id = %$c.game_id,
            http.status_code = $status,
            duration_us = $duration_us,
            trace_id = %$c.trace_id,
            message = "request_completed"
        )
    };
}

impl Completed {
    fn log(&self, status: StatusCode, duration_us: u64) {
        let code = status.as_u16();
        if status.is_server_error() {
            request_completed!(error, self, code, duration_us);
        } else if status.is_client_error() {
            request_completed!(warn, self, code, duration_us);
        } else {
            request_completed!(info, self, code, duration_us);
        }
    }
}

/// Access-log middleware. Wrap it inside `TraceSpan` so the event lands in the
/// request span.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let mut completed = Completed {
            method: req.method().to_string(),
            path: req.path().to_string(),
            route: String::from("-"),
            game_id: String::from("-"),
            trace_id: TraceId::of(&req, "unknown"),
        };

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // Routing has run by now, so the matched pattern and path segments are known.
            let status = match &result {
                Ok(res) => {
                    let request = res.request();
                    if let Some(pattern) = request.match_pattern() {
                        completed.route = pattern;
                    }
                    if let Some(id) = request.match_info().get("game_id") {
                        completed.game_id = id.to_string();
                    }
                    res.status()
                }
                Err(err) => err.as_response_error().status_code(),
            };

            let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
            completed.log(status, duration_us);

            result
        })
    }
}
