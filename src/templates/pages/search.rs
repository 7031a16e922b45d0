use crate::search::{FilterState, RequestState};
use crate::templates::{
    components::{filter_form, loading_panel, results_panel},
    desktop_layout,
};
use maud::{html, Markup};

pub fn search_page(filters: &FilterState, state: &RequestState, has_searched: bool) -> Markup {
    desktop_layout(
        "Buscador de Propiedades",
        html! {
            p class="tagline" { "Encuentra tu próximo hogar en El Poblado y alrededores" }

            (filter_form(filters, matches!(state, RequestState::Loading)))

            // Shown by htmx while /results is in flight.
            div id="results-loading" class="htmx-indicator" {
                (loading_panel())
            }

            div id="results" class="results-area" {
                (results_panel(state, has_searched))
            }
        },
    )
}

pub fn home_page() -> Markup {
    search_page(&FilterState::new(), &RequestState::Idle, false)
}
