use crate::search::filters::{FilterField, FilterState};
use url::form_urlencoded;

/// Query sent to `GET {base}/search`, derived from a filter snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_area: Option<String>,
    pub max_area: Option<String>,
    /// Comma-joined catalog labels.
    pub neighborhoods: Option<String>,
}

impl SearchQuery {
    // The form has no sale/rent switch. Every search is for sale listings.
    pub const FOR_SALE: bool = true;
    pub const FOR_RENT: bool = false;

    pub fn from_filters(filters: &FilterState) -> Self {
        let pick = |field: FilterField| {
            let value = filters.field(field);
            is_truthy(value).then(|| value.to_string())
        };

        let neighborhoods = if filters.neighborhoods.is_empty() {
            None
        } else {
            Some(
                filters
                    .neighborhoods
                    .iter()
                    .map(|n| n.label())
                    .collect::<Vec<_>>()
                    .join(","),
            )
        };

        Self {
            min_price: pick(FilterField::MinPrice),
            max_price: pick(FilterField::MaxPrice),
            min_area: pick(FilterField::MinArea),
            max_area: pick(FilterField::MaxArea),
            neighborhoods,
        }
    }

    /// Parameters in the order they go on the wire. `for_sale` and
    /// `for_rent` are always last and always present.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let optional = [
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
            ("min_area", &self.min_area),
            ("max_area", &self.max_area),
            ("neighborhoods", &self.neighborhoods),
        ];

        let mut pairs: Vec<(&'static str, String)> = optional
            .into_iter()
            .filter_map(|(key, value)| value.as_ref().map(|v| (key, v.clone())))
            .collect();

        pairs.push(("for_sale", Self::FOR_SALE.to_string()));
        pairs.push(("for_rent", Self::FOR_RENT.to_string()));
        pairs
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

/// Blank and zero inputs mean "no filter".
fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0"
}
