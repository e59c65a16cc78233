use utoipa::OpenApi;

use crate::models::{
    plant::{PlantAttributes, YieldDensity},
    request::{
        CompanionsApiResponse, CompanionsResponse, ErrorResponse, LayoutApiResponse,
        LayoutRequest, LayoutResponse, Link, Pagination, PlantApiResponse, PlantListResponse,
        PlantResponse,
    },
    Coordinate, Footprint,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Allotment API",
        description = "Square-foot garden layout engine: browse a companion-planting plant catalogue and generate box-by-box garden layouts with trellis, footprint and neighbour-compatibility handling.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::plants::get_companions,
        crate::api::handlers::layout::post_layout,
    ),
    components(
        schemas(
            // Domain
            PlantAttributes, YieldDensity, Footprint, Coordinate,
            // Layout
            LayoutRequest, LayoutResponse,
            // Catalogue
            PlantResponse, CompanionsResponse,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            PlantApiResponse,
            LayoutApiResponse,
            CompanionsApiResponse,
            PlantListResponse,
        )
    ),
    tags(
        (name = "plants", description = "Plant catalogue — list, detail, companion lookup"),
        (name = "layout", description = "Garden layout — generate a box-by-box planting plan"),
    )
)]
pub struct ApiDoc;
