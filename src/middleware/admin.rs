use crate::configuration::Settings;
use crate::helpers::JsonResponse;
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderName,
    web, Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};

/// Gate in front of the moderation routes. Requests must carry the shared
/// admin token in `x-admin-token`; everything else is turned away with 401
/// before the handler runs.
pub struct AdminGate {}

impl AdminGate {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateMiddleware { service }))
    }
}

pub struct AdminGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AdminGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let authorized = req
            .app_data::<web::Data<Settings>>()
            .map(|settings| token_matches(&req, &settings.admin_token))
            .unwrap_or(false);

        if !authorized {
            tracing::info!("moderation request rejected: missing or wrong admin token");
            return Box::pin(ready(Err(
                JsonResponse::<()>::build().unauthorized("Unauthorized")
            )));
        }

        Box::pin(self.service.call(req))
    }
}

fn token_matches(req: &ServiceRequest, expected: &str) -> bool {
    // an empty configured token would let everything through, treat it as locked
    !expected.is_empty()
        && req
            .headers()
            .get(HeaderName::from_static("x-admin-token"))
            .and_then(|value| value.to_str().ok())
            .map(|token| token == expected)
            .unwrap_or(false)
}
