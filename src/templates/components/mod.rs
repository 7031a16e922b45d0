pub mod filter_form;
pub mod listing_card;
pub mod results;

pub use filter_form::filter_form;
pub use listing_card::ListingCard;
pub use results::{loading_panel, results_panel};
