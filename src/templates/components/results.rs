use crate::domain::SearchResult;
use crate::search::RequestState;
use crate::templates::components::ListingCard;
use maud::{html, Markup};

/// Everything under the form: error, spinner, results or the start hint.
pub fn results_panel(state: &RequestState, has_searched: bool) -> Markup {
    html! {
        @match state {
            RequestState::Error(message) => {
                div class="alert alert-error" role="alert" {
                    p { (message) }
                }
            }
            RequestState::Loading => (loading_panel()),
            RequestState::Success(result) => (result_list(result)),
            RequestState::Idle => {
                @if !has_searched {
                    (start_hint())
                }
            }
        }
    }
}

pub fn loading_panel() -> Markup {
    html! {
        div class="loading" {
            div class="spinner spinner-large" {}
            p { "Buscando las mejores opciones..." }
        }
    }
}

fn result_list(result: &SearchResult) -> Markup {
    let count_label = if result.total == 1 {
        "Propiedad encontrada"
    } else {
        "Propiedades encontradas"
    };

    html! {
        div class="results fade-in" {
            div class="results-header" {
                h2 { "Resultados" }
                span class="results-count" { (result.total) " " (count_label) }
            }

            @if result.properties.is_empty() {
                div class="empty-results" {
                    p class="empty-title" { "No se encontraron propiedades con estos filtros." }
                    p class="empty-hint" { "Intenta ampliar el rango de precio o seleccionar más barrios." }
                }
            } @else {
                div class="listing-grid" {
                    @for listing in &result.properties {
                        (ListingCard::new(listing).render())
                    }
                }
            }
        }
    }
}

fn start_hint() -> Markup {
    html! {
        div class="start-hint" {
            p { "Usa el formulario para empezar a buscar" }
        }
    }
}
