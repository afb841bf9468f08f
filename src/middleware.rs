// SPDX-License-Identifier: Apache-2.0
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::http::Method;
use actix_web::{Error, HttpResponse};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};
use tracing::{debug, debug_span};

pub const ALLOWED_METHODS: &str = "GET, POST, HEAD, OPTIONS";

/// Permissive CORS: the caller's origin is reflected and credentials are allowed.
///
/// `OPTIONS` requests are answered here with an empty 200 and never reach a handler.
#[derive(Default)]
pub struct Cors;

impl Cors {
    pub fn new() -> Self {
        Cors
    }
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(CorsService {
            service: Rc::new(service),
        })
    }
}

pub struct CorsService<S> {
    service: Rc<S>,
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<&HeaderValue>) {
    if let Some(origin) = origin {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        );
        headers.append(header::VARY, HeaderValue::from_static("Origin"));
    }
}

impl<S, B> Service<ServiceRequest> for CorsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let _span = debug_span!("cors", path = %req.path(), method = %req.method()).entered();
        let origin = req.headers().get(header::ORIGIN).cloned();

        if req.method() == Method::OPTIONS {
            debug!("Answering preflight request");
            let requested_headers = req
                .headers()
                .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .cloned();
            let (request, _) = req.into_parts();

            let mut response = HttpResponse::Ok().finish();
            let headers = response.headers_mut();
            apply_cors_headers(headers, origin.as_ref());
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            if let Some(requested) = requested_headers {
                headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
            }

            return Box::pin(async move {
                Ok(ServiceResponse::new(request, response).map_into_right_body())
            });
        }

        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            apply_cors_headers(res.headers_mut(), origin.as_ref());
            Ok(res.map_into_left_body())
        })
    }
}
