use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

/// Response envelope shared by every route handler.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u32,
    pub(crate) id: Option<i32>,
    pub(crate) item: Option<T>,
    pub(crate) list: Option<Vec<T>>,
}

pub(crate) struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn respond(self, code: StatusCode, message: &str) -> HttpResponse {
        let status = if code.is_success() { "OK" } else { "Error" };
        HttpResponse::build(code).json(JsonResponse {
            status: status.to_string(),
            message: message.to_string(),
            code: code.as_u16() as u32,
            id: self.id,
            item: self.item,
            list: self.list,
        })
    }

    pub(crate) fn ok(self, message: &str) -> HttpResponse {
        let message = non_empty(message, "Success");
        self.respond(StatusCode::OK, &message)
    }

    pub(crate) fn created(self, message: &str) -> HttpResponse {
        let message = non_empty(message, "Created");
        self.respond(StatusCode::CREATED, &message)
    }

    fn error(self, code: StatusCode, message: String) -> Error {
        let response = self.respond(code, &message);
        InternalError::from_response(message, response).into()
    }

    pub(crate) fn form_error(self, message: String) -> Error {
        self.error(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn unauthorized(self, message: &str) -> Error {
        let message = non_empty(message, "Unauthorized");
        self.error(StatusCode::UNAUTHORIZED, message)
    }

    pub(crate) fn not_found(self, message: &str) -> Error {
        let message = non_empty(message, "Object not found");
        self.error(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal_server_error(self, message: &str) -> Error {
        let message = non_empty(message, "Internal error");
        self.error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

fn non_empty(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}
