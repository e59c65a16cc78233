use std::collections::HashMap;

use actix_web::http::Method;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{plant::PlantAttributes, Matrix};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    #[schema(value_type = String)]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(PlantApiResponse = ApiResponse<PlantResponse>, LayoutApiResponse = ApiResponse<LayoutResponse>, CompanionsApiResponse = ApiResponse<CompanionsResponse>)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[aliases(PlantListResponse = PaginatedResponse<PlantApiResponse>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Error body shared by all non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plant domain struct for use in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlantResponse {
    #[serde(flatten)]
    pub plant: PlantAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanionsResponse {
    pub name: String,
    pub companions: Vec<String>,
    pub enemies: Vec<String>,
}

/// Request body for `POST /api/layout`.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    /// Boxes in the north/south direction.
    pub north_boxes: usize,
    /// Boxes in the east/west direction.
    pub west_boxes: usize,
    /// Squares per box in the north/south direction (default 4).
    pub box_rows: Option<usize>,
    /// Squares per box in the east/west direction (default 4).
    pub box_cols: Option<usize>,
    /// RNG seed; omit for a random layout. Echoed back for reproducibility.
    pub seed: Option<u64>,
    /// Requested squares per plant name.
    pub plants: HashMap<String, usize>,
}

/// One box's final occupancy: a matrix of square contents.
pub type BoxCells = Matrix<Option<String>>;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    /// Boxes in row-major garden order, each a `boxRows × boxCols` matrix.
    pub boxes: Matrix<BoxCells>,
    pub north_boxes: usize,
    pub west_boxes: usize,
    pub box_rows: usize,
    pub box_cols: usize,
    /// Seeds or seedlings to buy per plant.
    pub seeds: HashMap<String, usize>,
    /// Seed that produced this layout; resubmit it to reproduce the run.
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
}
