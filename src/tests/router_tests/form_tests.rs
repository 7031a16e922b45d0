use super::get;
use crate::tests::utils::StubApi;

#[test]
fn toggle_adds_then_removes_a_neighborhood() {
    let api = StubApi::ok(0, vec![]);

    let (_, body) = get(&api, "/form/toggle?min_price=5&toggle=La+Linde", true);
    assert!(body.contains(r#"<input type="hidden" name="neighborhoods" value="La Linde">"#));
    assert!(body.contains(r#"name="min_price" value="5""#));

    let (_, body) = get(
        &api,
        "/form/toggle?min_price=5&neighborhoods=La+Linde&toggle=La+Linde",
        true,
    );
    assert!(!body.contains(r#"type="hidden""#));
    assert!(body.contains(r#"name="min_price" value="5""#));

    assert!(api.calls().is_empty());
}

#[test]
fn toggle_with_unknown_name_is_bad_request() {
    let api = StubApi::ok(0, vec![]);
    let (resp, _) = get(&api, "/form/toggle?toggle=Laureles", true);
    assert_eq!(resp.status(), 400);
}

#[test]
fn clear_returns_empty_form_without_searching() {
    let api = StubApi::ok(0, vec![]);
    let uri = "/form/clear?min_price=1&max_price=2&min_area=3&max_area=4&neighborhoods=Campestre";

    let (resp, body) = get(&api, uri, true);

    assert_eq!(resp.status(), 200);
    assert!(body.starts_with(r#"<form id="filter-form""#));
    assert!(!body.contains(r#"type="hidden""#));
    assert!(!body.contains("hood-selected"));
    for name in ["min_price", "max_price", "min_area", "max_area"] {
        assert!(body.contains(&format!(r#"name="{name}" value="""#)));
    }
    assert!(api.calls().is_empty());
}

#[test]
fn clear_without_htmx_renders_full_page() {
    let api = StubApi::ok(0, vec![]);
    let (_, body) = get(&api, "/form/clear?min_price=1", false);

    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"name="min_price" value="""#));
}
