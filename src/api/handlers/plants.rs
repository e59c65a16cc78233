use actix_web::{get, http::Method, web, HttpResponse, Responder};

use crate::{
    data::plants::builtin_catalog,
    models::request::{
        link, ApiResponse, CompanionsApiResponse, CompanionsResponse, ErrorResponse,
        PaginatedResponse, Pagination, PlantApiResponse, PlantListResponse, PlantResponse,
    },
};

/// Returns all plants from the built-in catalog.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    responses(
        (status = 200, description = "All catalog plants", body = PlantListResponse),
    )
)]
#[get("/plants")]
pub async fn list_plants() -> impl Responder {
    let catalog = builtin_catalog();
    let total = catalog.len();
    let items: Vec<ApiResponse<PlantResponse>> = catalog
        .all()
        .into_iter()
        .map(|p| {
            let name = p.name.clone();
            let mut links = std::collections::HashMap::new();
            links.insert("self".into(), link(format!("/api/plants/{name}"), Method::GET));
            links.insert(
                "companions".into(),
                link(format!("/api/plants/{name}/companions"), Method::GET),
            );
            ApiResponse::new(PlantResponse { plant: p.clone() }, links)
        })
        .collect();
    let mut collection_links = std::collections::HashMap::new();
    collection_links.insert("self".into(), link("/api/plants", Method::GET));
    collection_links.insert("layout".into(), link("/api/layout", Method::POST));
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        collection_links,
        Pagination {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        },
    ))
}

/// Returns a single plant by name.
#[utoipa::path(
    get,
    path = "/api/plants/{name}",
    tag = "plants",
    params(("name" = String, Path, description = "Plant name")),
    responses(
        (status = 200, description = "The plant", body = PlantApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{name}")]
pub async fn get_plant(path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    let catalog = builtin_catalog();
    match catalog.get(&name) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Plant '{}' not found.", name)
        })),
        Some(plant) => {
            let mut links = std::collections::HashMap::new();
            links.insert("self".into(), link(format!("/api/plants/{name}"), Method::GET));
            links.insert(
                "companions".into(),
                link(format!("/api/plants/{name}/companions"), Method::GET),
            );
            links.insert("collection".into(), link("/api/plants", Method::GET));
            HttpResponse::Ok().json(ApiResponse::new(
                PlantResponse {
                    plant: plant.clone(),
                },
                links,
            ))
        }
    }
}

/// Returns companions and enemies for a given plant.
#[utoipa::path(
    get,
    path = "/api/plants/{name}/companions",
    tag = "plants",
    params(("name" = String, Path, description = "Plant name")),
    responses(
        (status = 200, description = "Companion and enemy plants", body = CompanionsApiResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{name}/companions")]
pub async fn get_companions(path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    let catalog = builtin_catalog();

    match catalog.get(&name) {
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Plant '{}' not found.", name)
        })),
        Some(plant) => {
            let mut links = std::collections::HashMap::new();
            links.insert(
                "self".into(),
                link(format!("/api/plants/{name}/companions"), Method::GET),
            );
            links.insert("plant".into(), link(format!("/api/plants/{name}"), Method::GET));
            HttpResponse::Ok().json(ApiResponse::new(
                CompanionsResponse {
                    name: plant.name.clone(),
                    companions: plant.companions.clone(),
                    enemies: plant.enemies.clone(),
                },
                links,
            ))
        }
    }
}
