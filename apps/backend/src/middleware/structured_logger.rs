//! Access log: one `request_completed` event per request.
//!
//! The event carries the game the request was routed to, so a game's history
//! can be followed by filtering on `game_id`. Level follows the status class:
//! 5xx at error, 4xx at warn, everything else at info.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::Level;

use crate::middleware::request_trace::TraceId;
use crate::trace_ctx::NO_TRACE;

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

/// What is known about a request before it is routed.
struct AccessLine {
    method: String,
    path: String,
    trace_id: String,
    started: Instant,
}

impl AccessLine {
    fn capture(req: &ServiceRequest) -> Self {
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| NO_TRACE.to_string());
        Self {
            method: req.method().to_string(),
            path: req.path().to_string(),
            trace_id,
            started: Instant::now(),
        }
    }

    fn finish(&self, status: StatusCode, game_id: Option<&str>) {
        let method = &self.method;
        let path = &self.path;
        let trace_id = &self.trace_id;
        let status_code = status.as_u16();
        let latency_ms = self.started.elapsed().as_secs_f64() * 1000.0;

        macro_rules! completed {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    http.method = %method,
                    url.path = %path,
                    http.status_code = status_code,
                    game_id,
                    latency_ms,
                    trace_id = %trace_id,
                    "request_completed"
                )
            };
        }

        if status.is_server_error() {
            completed!(Level::ERROR);
        } else if status.is_client_error() {
            completed!(Level::WARN);
        } else {
            completed!(Level::INFO);
        }
    }
}

/// The `{game_id}` path segment, once routing has filled in the match info.
fn routed_game_id<B>(res: &ServiceResponse<B>) -> Option<String> {
    res.request().match_info().get("game_id").map(str::to_string)
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
        let line = AccessLine::capture(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            match &result {
                Ok(res) => line.finish(res.status(), routed_game_id(res).as_deref()),
                Err(err) => line.finish(err.as_response_error().status_code(), None),
            }
            result
        })
    }
}
