// demos/storefront_app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::cart_handlers;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called from `main.rs` (and the handler tests) to mount the API.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      .route("/health", web::get().to(health_check_handler))
      .service(
        web::scope("/cart")
          .route("", web::get().to(cart_handlers::list_cart_handler))
          .route("/items", web::post().to(cart_handlers::add_to_cart_handler)),
      ),
  );
}
