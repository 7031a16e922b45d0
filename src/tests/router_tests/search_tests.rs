use super::get;
use crate::domain::Neighborhood;
use crate::search::{HttpSearchApi, SEARCH_ERROR_MESSAGE};
use crate::tests::utils::{listing, stub_api, StubApi};

#[test]
fn home_page_shows_empty_form_and_start_hint() {
    let api = StubApi::ok(0, vec![]);
    let (resp, body) = get(&api, "/", false);

    assert_eq!(resp.status(), 200);
    assert!(body.contains("Buscador de Propiedades"));
    assert!(body.contains("Usa el formulario para empezar a buscar"));
    assert!(api.calls().is_empty());
}

#[test]
fn results_runs_one_search_with_submitted_filters() {
    let api = StubApi::ok(2, vec![listing("a"), listing("b")]);
    let uri = "/results?min_price=200000000&max_price=800000000&min_area=&max_area=\
               &neighborhoods=Castropol&neighborhoods=Balsos";

    let (resp, body) = get(&api, uri, false);
    assert_eq!(resp.status(), 200);

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].to_query_string(),
        "min_price=200000000&max_price=800000000&neighborhoods=Castropol%2CBalsos&for_sale=true&for_rent=false"
    );

    // Full page keeps what the user typed.
    assert!(body.contains(r#"name="min_price" value="200000000""#));
    assert_eq!(body.matches(r#"<article class="listing-card""#).count(), 2);
    assert!(!body.contains("Usa el formulario para empezar a buscar"));
}

#[test]
fn htmx_search_returns_results_fragment_only() {
    let api = StubApi::ok(1, vec![listing("x")]);
    let (_, body) = get(&api, "/results?max_area=200", true);

    assert!(!body.contains("<html"));
    assert!(!body.contains("filter-form"));
    assert!(body.contains("1 Propiedad encontrada"));
}

#[test]
fn api_failure_renders_fixed_message_with_200() {
    let api = StubApi::status(500);
    let (resp, body) = get(&api, "/results", true);

    assert_eq!(resp.status(), 200);
    assert!(body.contains(SEARCH_ERROR_MESSAGE));
    assert!(!body.contains("500"));
    assert!(!body.contains("listing-card"));
}

#[test]
fn zero_results_render_empty_state() {
    let api = StubApi::ok(0, vec![]);
    let (_, body) = get(&api, "/results?neighborhoods=Cumbres", true);

    assert!(body.contains("No se encontraron propiedades con estos filtros."));
    assert!(!body.contains(SEARCH_ERROR_MESSAGE));
    assert!(!body.contains("Usa el formulario"));
    assert_eq!(
        api.calls()[0].neighborhoods.as_deref(),
        Some(Neighborhood::Cumbres.label())
    );
}

#[test]
fn end_to_end_over_http() {
    let json = r#"{"total": 2, "properties": [
        {"id": 1, "title": "Primero", "location": "Castropol", "zone": "Castropol",
         "price": "$ 300.000.000", "area": "80 m²", "bedrooms": 2, "bathrooms": 2,
         "image_url": "https://img.example.com/1.jpg", "external_url": "https://x.example/1"},
        {"id": 2, "title": "Segundo", "location": "Balsos", "zone": "Balsos",
         "price": "$ 700.000.000", "area": "150 m²", "bedrooms": 3, "bathrooms": 3,
         "external_url": "https://x.example/2"}
    ]}"#;
    let (base, request_line) = stub_api(200, json);
    let api = HttpSearchApi::direct(&base);

    let uri = "/results?min_price=200000000&max_price=800000000&neighborhoods=Castropol&neighborhoods=Balsos";
    let (_, body) = get(&api, uri, true);

    assert_eq!(
        request_line.join().unwrap(),
        "GET /search?min_price=200000000&max_price=800000000&neighborhoods=Castropol%2CBalsos&for_sale=true&for_rent=false HTTP/1.1"
    );

    assert_eq!(body.matches(r#"<article class="listing-card""#).count(), 2);
    let first = body.find("Primero").unwrap();
    let second = body.find("Segundo").unwrap();
    assert!(first < second);
    assert!(body.contains("Imagen no disponible"));
}

#[test]
fn unknown_route_is_404() {
    let api = StubApi::ok(0, vec![]);
    let (resp, body) = get(&api, "/nope", false);

    assert_eq!(resp.status(), 404);
    assert!(body.contains("Error 404"));
}

#[test]
fn stylesheet_is_served() {
    let api = StubApi::ok(0, vec![]);
    let (resp, body) = get(&api, "/static/main.css", false);

    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .starts_with("text/css"));
    assert!(body.contains(".listing-card"));
}
