use crate::domain::PropertyListing;
use maud::{html, Markup};

// Hides the broken <img> and reveals the placeholder right after it.
// Clearing onerror first keeps the swap one-shot.
const IMG_ONERROR: &str =
    "this.onerror=null;this.hidden=true;this.nextElementSibling.hidden=false;";

/// Card for one listing.
///
/// `image_failed` only ever goes from false to true. Once set the card shows
/// the placeholder for the rest of its life, same as a listing that never
/// had an image.
pub struct ListingCard<'a> {
    listing: &'a PropertyListing,
    image_failed: bool,
}

impl<'a> ListingCard<'a> {
    pub fn new(listing: &'a PropertyListing) -> Self {
        Self {
            listing,
            image_failed: false,
        }
    }

    /// Server-side twin of the `onerror` swap the browser performs; both end
    /// in the same placeholder markup.
    pub fn mark_image_failed(&mut self) {
        self.image_failed = true;
    }

    pub fn image_failed(&self) -> bool {
        self.image_failed
    }

    fn photo_url(&self) -> Option<&str> {
        if self.image_failed {
            return None;
        }
        self.listing.image_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn render(&self) -> Markup {
        let p = self.listing;

        html! {
            article class="listing-card" data-id=(p.id) {
                div class="listing-media" {
                    @match self.photo_url() {
                        Some(url) => {
                            img src=(url) alt=(p.title) onerror=(IMG_ONERROR);
                            (image_placeholder(true))
                        }
                        None => (image_placeholder(false)),
                    }
                    span class="zone-badge" { (p.zone) }
                }

                div class="listing-body" {
                    div class="listing-heading" {
                        h3 class="listing-title" title=(p.title) { (p.title) }
                        p class="listing-location" {
                            // map pin
                            svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
                                path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" {}
                                circle cx="12" cy="10" r="3" {}
                            }
                            (p.location)
                        }
                    }

                    div class="listing-figures" {
                        span class="listing-price" { (p.price) }
                        span class="listing-area" { (p.area) }
                    }

                    div class="listing-stats" {
                        div class="stat" title="Habitaciones" {
                            span class="stat-value" { (p.bedrooms) }
                            span class="stat-label" { "Habs" }
                        }
                        div class="stat" title="Baños" {
                            span class="stat-value" { (p.bathrooms) }
                            span class="stat-label" { "Baños" }
                        }
                    }

                    div class="listing-footer" {
                        a class="listing-link"
                            href=(p.external_url)
                            target="_blank"
                            rel="noopener noreferrer"
                        {
                            "Ver en Wasi"
                        }
                    }
                }
            }
        }
    }
}

pub fn image_placeholder(hidden: bool) -> Markup {
    html! {
        div class="image-placeholder" hidden[hidden] {
            // image-off
            svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
                line x1="2" x2="22" y1="2" y2="22" {}
                path d="M10.41 10.41a2 2 0 1 1-2.83-2.83" {}
                path d="M21 15V6a2 2 0 0 0-2-2H9" {}
                path d="M3 3.59A2 2 0 0 0 3 5v14a2 2 0 0 0 2 2h14a2 2 0 0 0 1.41-.59" {}
            }
            span { "Imagen no disponible" }
        }
    }
}
