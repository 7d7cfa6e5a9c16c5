//! Per-request trace id and tracing span.
//!
//! Every request gets a fresh UUID trace id which is
//! - stored in the request extensions as [`TraceId`],
//! - scoped into [`crate::trace_ctx`] so error bodies can echo it,
//! - attached to a `request` span wrapping the downstream service (the
//!   `game_id` field is filled in by the `GameRef` extractor),
//! - returned to the client in the `x-trace-id` header.
//!
//! Wire it outermost (last `.wrap`) so `StructuredLogger` can read the id.

use std::future::{ready, Ready};

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::LocalBoxFuture;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

pub const TRACE_HEADER: &str = "x-trace-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path(),
            game_id = tracing::field::Empty
        );

        let fut = self.service.call(req);
        let scoped = trace_ctx::with_trace_id(trace_id.clone(), fut).instrument(span);

        Box::pin(async move {
            let mut res = scoped.await?;
            if let Ok(value) = HeaderValue::from_str(&trace_id) {
                res.headers_mut()
                    .insert(HeaderName::from_static(TRACE_HEADER), value);
            }
            Ok(res)
        })
    }
}
