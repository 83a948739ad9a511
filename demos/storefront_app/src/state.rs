// demos/storefront_app/src/state.rs
use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use crate::pipelines::{build_add_to_cart_pipeline, contexts::AddToCartCtxData};
use crate::services::{CartService, InMemoryCartService};
use cart_request::Pipeline;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub cart_service: Arc<dyn CartService>,
  pub add_to_cart_pipeline: Arc<Pipeline<AddToCartCtxData, AppError>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(config: Arc<AppConfig>) -> Result<Self> {
    let cart_service: Arc<dyn CartService> = Arc::new(InMemoryCartService::new(config.cart_max_lines));
    Self::with_cart_service(config, cart_service)
  }

  pub fn with_cart_service(config: Arc<AppConfig>, cart_service: Arc<dyn CartService>) -> Result<Self> {
    let add_to_cart_pipeline = Arc::new(build_add_to_cart_pipeline()?);
    Ok(Self {
      cart_service,
      add_to_cart_pipeline,
      config,
    })
  }
}
