use crate::domain::Neighborhood;
use crate::errors::ServerError;
use crate::responses::{html_response, stylesheet_response, ResultResp};
use crate::search::{FilterState, RequestState, SearchApi, SearchController};
use crate::templates::{self, pages};
use astra::Request;
use std::borrow::Cow;
use tracing::debug;
use url::form_urlencoded;

pub fn handle(req: Request, api: &dyn SearchApi) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/results") => results(&req, api),
        ("GET", "/form/toggle") => toggle_neighborhood(&req),
        ("GET", "/form/clear") => clear_form(&req),
        ("GET", "/static/main.css") => stylesheet_response(),
        _ => Err(ServerError::NotFound),
    }
}

fn results(req: &Request, api: &dyn SearchApi) -> ResultResp {
    let filters = FilterState::from_pairs(query_pairs(req));

    let mut controller = SearchController::new(api);
    controller.search(filters.snapshot());

    if is_htmx(req) {
        html_response(templates::results_panel(
            controller.state(),
            controller.has_searched(),
        ))
    } else {
        html_response(pages::search_page(
            &filters,
            controller.state(),
            controller.has_searched(),
        ))
    }
}

fn toggle_neighborhood(req: &Request) -> ResultResp {
    let pairs = query_pairs(req);

    let target = pairs
        .iter()
        .find(|(k, _)| k == "toggle")
        .and_then(|(_, v)| Neighborhood::from_label(v))
        .ok_or_else(|| ServerError::BadRequest("Barrio desconocido".into()))?;

    let mut filters = FilterState::from_pairs(pairs);
    filters.toggle_neighborhood(target);

    form_response(req, &filters)
}

// Only the form is replaced; a search that is already running keeps going.
fn clear_form(req: &Request) -> ResultResp {
    let mut filters = FilterState::from_pairs(query_pairs(req));
    filters.clear();

    form_response(req, &filters)
}

fn form_response(req: &Request, filters: &FilterState) -> ResultResp {
    if is_htmx(req) {
        html_response(templates::filter_form(filters, false))
    } else {
        html_response(pages::search_page(filters, &RequestState::Idle, false))
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn query_pairs(req: &Request) -> Vec<(Cow<'_, str>, Cow<'_, str>)> {
    match req.uri().query() {
        Some(q) => form_urlencoded::parse(q.as_bytes()).collect(),
        None => Vec::new(),
    }
}
