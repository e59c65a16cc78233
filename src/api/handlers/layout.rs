use actix_web::{http::Method, post, web, HttpResponse, Responder};
use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    data::{catalog::PlantCatalog, plants::builtin_catalog},
    logic::planner::generate,
    models::{
        garden::Garden,
        request::{
            link, ApiResponse, ErrorResponse, LayoutApiResponse, LayoutRequest, LayoutResponse,
        },
    },
};

/// Squares per box side when the request does not say otherwise.
pub const DEFAULT_BOX_SIDE: usize = 4;

/// Checks the request against the catalog before any placement runs.
/// These are the contract preconditions of the engine: the planner itself
/// never re-validates them.
fn validate(catalog: &PlantCatalog, request: &LayoutRequest, box_cols: usize) -> Result<(), String> {
    if request.north_boxes == 0 || request.west_boxes == 0 {
        return Err("Garden must have at least one box in each direction.".into());
    }
    if request.box_rows == Some(0) || request.box_cols == Some(0) {
        return Err("Boxes must have at least one square in each direction.".into());
    }

    for (name, &squares) in &request.plants {
        let Some(plant) = catalog.get(name) else {
            return Err(format!("Plant '{name}' not found in the catalog."));
        };
        if squares == 0 {
            continue;
        }
        if plant.trellised {
            if squares % box_cols != 0 {
                return Err(format!(
                    "'{name}' grows on a trellis and needs a multiple of {box_cols} squares."
                ));
            }
        } else if plant.footprint.area() > 1 && squares % plant.footprint.area() != 0 {
            return Err(format!(
                "'{name}' needs a multiple of {} squares.",
                plant.footprint.area()
            ));
        }
    }

    let box_rows = request.box_rows.unwrap_or(DEFAULT_BOX_SIDE);
    let capacity = request.north_boxes * request.west_boxes * box_rows * box_cols;
    let demand: usize = request.plants.values().sum();
    if demand > capacity {
        return Err(format!(
            "{demand} squares requested but the garden only has {capacity}."
        ));
    }
    Ok(())
}

/// Generates a garden layout for the requested plants.
#[utoipa::path(
    post,
    path = "/api/layout",
    tag = "layout",
    request_body = LayoutRequest,
    responses(
        (status = 200, description = "Generated layout", body = LayoutApiResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 422, description = "No feasible layout for these requests", body = ErrorResponse),
    )
)]
#[post("/layout")]
pub async fn post_layout(body: web::Json<LayoutRequest>) -> impl Responder {
    let request = body.into_inner();
    let catalog = builtin_catalog();
    let box_cols = request.box_cols.unwrap_or(DEFAULT_BOX_SIDE);

    if let Err(message) = validate(&catalog, &request, box_cols) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": message }));
    }

    let box_rows = request.box_rows.unwrap_or(DEFAULT_BOX_SIDE);
    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut garden = Garden::new(request.north_boxes, request.west_boxes, box_rows, box_cols);
    if let Err(e) = generate(&mut garden, &catalog, request.plants.clone(), &mut rng) {
        log::info!("layout generation failed: {e}");
        return HttpResponse::UnprocessableEntity()
            .json(serde_json::json!({ "error": e.to_string() }));
    }

    let boxes = (0..garden.north)
        .map(|row| {
            (0..garden.west)
                .map(|col| garden.box_at(row, col).squares.clone())
                .collect()
        })
        .collect();

    let response = LayoutResponse {
        boxes,
        north_boxes: garden.north,
        west_boxes: garden.west,
        box_rows: garden.box_rows,
        box_cols: garden.box_cols,
        seeds: garden.seed_summary(&catalog),
        seed,
        generated_at: Utc::now(),
    };

    let mut links = std::collections::HashMap::new();
    links.insert("self".into(), link("/api/layout", Method::POST));
    links.insert("plants".into(), link("/api/plants", Method::GET));
    HttpResponse::Ok().json(ApiResponse::new(response, links))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(plants: &[(&str, usize)]) -> LayoutRequest {
        LayoutRequest {
            north_boxes: 2,
            west_boxes: 2,
            box_rows: None,
            box_cols: None,
            seed: None,
            plants: plants.iter().map(|(n, s)| (n.to_string(), *s)).collect(),
        }
    }

    #[test]
    fn test_validate_accepts_plain_request() {
        let catalog = builtin_catalog();
        let req = request(&[("carrot", 3), ("tomato", 2)]);
        assert!(validate(&catalog, &req, 4).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_plant() {
        let catalog = builtin_catalog();
        let req = request(&[("triffid", 1)]);
        assert!(validate(&catalog, &req, 4).is_err());
    }

    #[test]
    fn test_validate_rejects_partial_trellis_strip() {
        let catalog = builtin_catalog();
        let req = request(&[("pea", 6)]);
        assert!(validate(&catalog, &req, 4).is_err());
        let req = request(&[("pea", 8)]);
        assert!(validate(&catalog, &req, 4).is_ok());
    }

    #[test]
    fn test_validate_rejects_partial_footprint() {
        let catalog = builtin_catalog();
        let req = request(&[("zucchini", 6)]);
        assert!(validate(&catalog, &req, 4).is_err());
    }

    #[test]
    fn test_validate_rejects_over_capacity() {
        let catalog = builtin_catalog();
        // 2×2 boxes of 4×4 squares = 64 squares
        let req = request(&[("carrot", 65)]);
        assert!(validate(&catalog, &req, 4).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let catalog = builtin_catalog();
        let mut req = request(&[("carrot", 1)]);
        req.north_boxes = 0;
        assert!(validate(&catalog, &req, 4).is_err());

        let mut req = request(&[("carrot", 1)]);
        req.box_rows = Some(0);
        assert!(validate(&catalog, &req, 4).is_err());
    }
}
