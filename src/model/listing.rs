use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

#[cfg(feature = "server")]
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Available,
    Sold,
    Rented,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ListingDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub address: String,
    pub regular_price: i64,
    pub discount_price: i64,
    pub bathrooms: i32,
    pub bedrooms: i32,
    pub furnished: bool,
    pub parking: bool,
    pub offer: bool,
    pub listing_type: ListingType,
    pub status: ListingStatus,
    pub featured: bool,
    pub image_urls: Vec<String>,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListingDto {
    /// Price a buyer actually pays, taking an active offer into account.
    pub fn effective_price(&self) -> i64 {
        if self.offer {
            self.discount_price
        } else {
            self.regular_price
        }
    }
}

/// Editable listing fields, sent on both create and update.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ListingFormDto {
    pub name: String,
    pub description: String,
    pub address: String,
    pub regular_price: i64,
    #[serde(default)]
    pub discount_price: i64,
    pub bathrooms: i32,
    pub bedrooms: i32,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub offer: bool,
    pub listing_type: ListingType,
    pub image_urls: Vec<String>,
}

impl Default for ListingFormDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            address: String::new(),
            regular_price: 50,
            discount_price: 0,
            bathrooms: 1,
            bedrooms: 1,
            furnished: false,
            parking: false,
            offer: false,
            listing_type: ListingType::Rent,
            image_urls: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ListingStatusDto {
    pub status: ListingStatus,
}

/// Query string accepted by the listing search endpoint.
///
/// Values are kept as raw strings so unrecognized input falls back to defaults
/// instead of rejecting the request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct ListingQueryDto {
    pub search_term: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub offer: Option<String>,
    pub parking: Option<String>,
    pub furnished: Option<String>,
    pub featured: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub start_index: Option<String>,
    pub limit: Option<String>,
}

impl ListingQueryDto {
    /// Renders the populated fields as a URL query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let pairs = [
            ("searchTerm", &self.search_term),
            ("type", &self.listing_type),
            ("offer", &self.offer),
            ("parking", &self.parking),
            ("furnished", &self.furnished),
            ("featured", &self.featured),
            ("status", &self.status),
            ("sort", &self.sort),
            ("order", &self.order),
            ("startIndex", &self.start_index),
            ("limit", &self.limit),
        ];

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in pairs {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_skips_empty_fields() {
        let query = ListingQueryDto {
            search_term: Some("sea view".to_string()),
            offer: Some("true".to_string()),
            limit: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(query.to_query_string(), "searchTerm=sea+view&offer=true");
    }

    #[test]
    fn query_string_escapes_reserved_characters() {
        let query = ListingQueryDto {
            search_term: Some("3&4 bhk=50%".to_string()),
            ..Default::default()
        };

        assert_eq!(query.to_query_string(), "searchTerm=3%264+bhk%3D50%25");
    }
}
