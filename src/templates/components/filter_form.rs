use crate::domain::Neighborhood;
use crate::search::{FilterField, FilterState};
use maud::{html, Markup};

fn placeholder(field: FilterField) -> &'static str {
    match field {
        FilterField::MinPrice => "Ej: 200000000",
        FilterField::MaxPrice => "Ej: 800000000",
        FilterField::MinArea => "Ej: 60",
        FilterField::MaxArea => "Ej: 200",
    }
}

fn label(field: FilterField) -> &'static str {
    match field {
        FilterField::MinPrice => "Precio Mínimo",
        FilterField::MaxPrice => "Precio Máximo",
        FilterField::MinArea => "Área Mínima",
        FilterField::MaxArea => "Área Máxima",
    }
}

fn number_input(filters: &FilterState, field: FilterField) -> Markup {
    html! {
        div class="field" {
            label for=(field.name()) { (label(field)) }
            input
                type="number"
                id=(field.name())
                name=(field.name())
                value=(filters.field(field))
                placeholder=(placeholder(field));
        }
    }
}

/// The search form.
///
/// Selected neighborhoods travel as hidden inputs; each chip is a submit
/// button that asks the server to toggle it. Without htmx every button still
/// works as a plain GET.
///
/// Enter in a text field clicks the first submit button in tree order, so an
/// off-screen search button comes before the chips.
pub fn filter_form(filters: &FilterState, is_loading: bool) -> Markup {
    html! {
        form
            id="filter-form"
            class="filter-form"
            method="get"
            action="/results"
            hx-get="/results"
            hx-target="#results"
            hx-swap="innerHTML"
            hx-indicator="#results-loading"
            hx-disabled-elt="#search-button"
        {
            button
                type="submit"
                class="implicit-submit"
                tabindex="-1"
                aria-hidden="true"
                disabled[is_loading]
            {}

            section class="filter-section" {
                h3 { "💰 Rango de Precios (COP)" }
                div class="field-row" {
                    (number_input(filters, FilterField::MinPrice))
                    (number_input(filters, FilterField::MaxPrice))
                }
            }

            section class="filter-section" {
                h3 { "📏 Área (m²)" }
                div class="field-row" {
                    (number_input(filters, FilterField::MinArea))
                    (number_input(filters, FilterField::MaxArea))
                }
            }

            section class="filter-section" {
                h3 { "📍 Barrios (Selecciona varios)" }

                @for n in &filters.neighborhoods {
                    input type="hidden" name="neighborhoods" value=(n.label());
                }

                div class="neighborhood-grid" {
                    @for n in Neighborhood::ALL {
                        @let selected = filters.is_selected(n);
                        button
                            type="submit"
                            class=(if selected { "hood hood-selected" } else { "hood" })
                            name="toggle"
                            value=(n.label())
                            formaction="/form/toggle"
                            aria-pressed=(selected)
                            hx-get="/form/toggle"
                            hx-include="closest form"
                            hx-target="#filter-form"
                            hx-swap="outerHTML"
                        {
                            span class="hood-check" aria-hidden="true" {
                                @if selected { "☑" } @else { "☐" }
                            }
                            span class="hood-name" { (n.label()) }
                        }
                    }
                }
            }

            div class="form-actions" {
                button
                    type="submit"
                    id="search-button"
                    class="primary"
                    disabled[is_loading]
                {
                    @if is_loading {
                        span class="spinner" aria-hidden="true" {}
                        "Buscando..."
                    } @else {
                        span class="btn-text" { "BUSCAR PROPIEDADES" }
                        span class="btn-busy" { "Buscando..." }
                    }
                }

                button
                    type="submit"
                    class="secondary"
                    formaction="/form/clear"
                    hx-get="/form/clear"
                    hx-target="#filter-form"
                    hx-swap="outerHTML"
                {
                    "✕ Limpiar Filtros"
                }
            }
        }
    }
}
