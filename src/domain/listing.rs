use serde::{Deserialize, Deserializer};
use std::fmt;

// {
//   total,
//   properties: [
//     { id, title, location, zone, price, area,
//       bedrooms, bathrooms, image_url?, external_url }
//   ]
// }

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    pub total: u64,
    #[serde(default)]
    pub properties: Vec<PropertyListing>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyListing {
    #[serde(default)]
    pub id: DisplayValue,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub zone: String,

    // Already formatted by the API ("$ 450.000.000", "120 m²").
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub area: String,

    #[serde(default)]
    pub bedrooms: DisplayValue,
    #[serde(default)]
    pub bathrooms: DisplayValue,

    pub image_url: Option<String>,

    // Older API builds still send "wasi_url".
    #[serde(default, alias = "wasi_url", deserialize_with = "null_as_empty")]
    pub external_url: String,
}

// Missing text fields render as empty; `null` gets the same treatment.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A scalar the API may send as a number or a string. Only ever displayed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Int(i64),
    Float(f64),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Int(n) => write!(f, "{n}"),
            DisplayValue::Float(n) => write!(f, "{n}"),
            DisplayValue::Text(s) => f.write_str(s),
            DisplayValue::Missing => Ok(()),
        }
    }
}
