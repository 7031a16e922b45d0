use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {};
            }
            body {
                header class="site-header" {
                    div class="container header-inner" {
                        div class="header-icon" {
                            // building
                            svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="32"
                                height="32"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                            {
                                rect x="4" y="2" width="16" height="20" rx="2" ry="2" {}
                                path d="M9 22v-4h6v4" {}
                                path d="M8 6h.01M16 6h.01M12 6h.01M12 10h.01M12 14h.01M16 10h.01M16 14h.01M8 10h.01M8 14h.01" {}
                            }
                        }
                        h1 { "Buscador de Propiedades" }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
