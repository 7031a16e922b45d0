use crate::domain::Neighborhood;

/// The numeric inputs of the filter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    MinPrice,
    MaxPrice,
    MinArea,
    MaxArea,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::MinPrice,
        FilterField::MaxPrice,
        FilterField::MinArea,
        FilterField::MaxArea,
    ];

    /// Form input name, which is also the API query parameter.
    pub fn name(self) -> &'static str {
        match self {
            FilterField::MinPrice => "min_price",
            FilterField::MaxPrice => "max_price",
            FilterField::MinArea => "min_area",
            FilterField::MaxArea => "max_area",
        }
    }

    pub fn from_name(name: &str) -> Option<FilterField> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// Current state of the filter form.
///
/// Numeric fields keep whatever the user typed. Nothing is parsed or
/// range-checked here; the search API decides what is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub min_price: String,
    pub max_price: String,
    pub min_area: String,
    pub max_area: String,
    /// Selection order. Never contains duplicates.
    pub neighborhoods: Vec<Neighborhood>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the form from submitted fields.
    ///
    /// `neighborhoods` may repeat (one per checked box) or carry a
    /// comma-joined list. Names outside the catalog are dropped.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());

            if key == "neighborhoods" {
                for label in value.split(',') {
                    if let Some(n) = Neighborhood::from_label(label) {
                        state.select(n);
                    }
                }
            } else if let Some(field) = FilterField::from_name(key) {
                state.set_field(field, value);
            }
        }

        state
    }

    pub fn field(&self, field: FilterField) -> &str {
        match field {
            FilterField::MinPrice => &self.min_price,
            FilterField::MaxPrice => &self.max_price,
            FilterField::MinArea => &self.min_area,
            FilterField::MaxArea => &self.max_area,
        }
    }

    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::MinPrice => &mut self.min_price,
            FilterField::MaxPrice => &mut self.max_price,
            FilterField::MinArea => &mut self.min_area,
            FilterField::MaxArea => &mut self.max_area,
        };
        *slot = value.into();
    }

    pub fn is_selected(&self, neighborhood: Neighborhood) -> bool {
        self.neighborhoods.contains(&neighborhood)
    }

    pub fn toggle_neighborhood(&mut self, neighborhood: Neighborhood) {
        if self.is_selected(neighborhood) {
            self.neighborhoods.retain(|n| *n != neighborhood);
        } else {
            self.neighborhoods.push(neighborhood);
        }
    }

    fn select(&mut self, neighborhood: Neighborhood) {
        if !self.is_selected(neighborhood) {
            self.neighborhoods.push(neighborhood);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Owned copy handed to a search. Editing the form afterwards does not
    /// reach it.
    pub fn snapshot(&self) -> FilterState {
        self.clone()
    }
}
