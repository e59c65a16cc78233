use actix_web::web;

use crate::api::handlers::{get_companions, get_plant, list_plants, post_layout};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_plants)
            .service(get_plant)
            .service(get_companions)
            .service(post_layout),
    );
}
