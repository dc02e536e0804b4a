//! Dev-only catalog seeding
//!
//! Compiled only with the `dev-seed` feature; production builds use
//! `--no-default-features` and never expose this route.

use std::sync::Arc;

use axum::extract::State;

use crate::catalog::{Category, FrameColor, NewProduct, ProductRepository};

use super::super::state::AppState;
use super::super::types::{ApiResult, created};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SeedResponse {
    pub ok: bool,
    pub inserted: usize,
}

fn demo_catalog() -> Vec<NewProduct> {
    let item = |name: &str, price: i64, category, color, stock, tag: &str| NewProduct {
        name: name.to_string(),
        price,
        category,
        color,
        stock,
        description: String::new(),
        tag: tag.to_string(),
        is_recommended: false,
        is_active: true,
        images: vec![],
    };

    vec![
        item(
            "กรอบแว่น Minimal ดำด้าน",
            2490_00,
            Category::Optical,
            FrameColor::Black,
            8,
            "เหมาะกับทำงาน/ทางการ",
        ),
        item(
            "กรอบแว่น ทอง Minimal",
            3200_00,
            Category::Optical,
            FrameColor::Gold,
            5,
            "ลุคสุภาพ เรียบหรู",
        ),
        item(
            "กรอบแว่น สีเงิน บางพิเศษ",
            2890_00,
            Category::Optical,
            FrameColor::Silver,
            6,
            "น้ำหนักเบา ใส่สบาย",
        ),
        item(
            "กรอบแว่น ทูโทน น้ำตาล/ใส",
            2690_00,
            Category::Optical,
            FrameColor::Brown,
            0,
            "สายแฟฯ มินิมอล",
        ),
        item(
            "แว่นกันแดด Minimal ดำ",
            3590_00,
            Category::Sun,
            FrameColor::Black,
            10,
            "กรองแสง UV400",
        ),
    ]
}

/// Seed the demo catalog
///
/// POST /internal/dev/seed
pub async fn seed_catalog(State(state): State<Arc<AppState>>) -> ApiResult<SeedResponse> {
    let items = demo_catalog();
    let mut inserted = 0;
    for new in &items {
        ProductRepository::create(state.db.pool(), new).await?;
        inserted += 1;
    }

    tracing::info!(inserted, "Demo catalog seeded");
    created(SeedResponse { ok: true, inserted })
}
