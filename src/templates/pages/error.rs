use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            div class="error-page" {
                h2 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Volver al inicio" } }
            }
        },
    )
}
