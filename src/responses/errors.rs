use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};
use tracing::warn;

/// Convert a ServerError into a proper HTML response page
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    warn!(status, "request failed: {err}");

    let message = match &err {
        ServerError::NotFound => "Página no encontrada".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::InternalError => "Error interno del servidor".to_string(),
    };

    let body = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
