//! Handlers for media-grid layout management.
//!
//! The admin editor saves the whole item array in one request; the
//! public read path serves only published layouts and can resolve
//! breakpoint overrides server-side for SSR clients.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mosaic_core::breakpoint::{self, Breakpoint};
use mosaic_core::error::CoreError;
use mosaic_core::grid::{self, LayoutItem};
use mosaic_core::slug;
use mosaic_core::types::DbId;
use mosaic_db::models::layout::{CreateLayout, Layout, UpdateLayout};
use mosaic_db::repositories::LayoutRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/layouts`.
#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Slug of the layout to fetch. Without it, `admin=true` lists all
    /// layouts.
    pub slug: Option<String>,
    /// Admin reads see unpublished layouts.
    #[serde(default)]
    pub admin: bool,
    /// Viewport width in CSS pixels; when present, each item's placement
    /// is resolved to the matching breakpoint before serialization.
    pub viewport: Option<u32>,
}

/// GET /api/v1/layouts?slug=<slug>[&admin=true][&viewport=<px>]
///
/// With `slug`: fetch one layout. Unpublished layouts are only visible
/// to admin reads; public requests get a 404 so the slug's existence is
/// not leaked. Without `slug`: list all layouts (admin only).
pub async fn get_layouts(
    State(state): State<AppState>,
    Query(params): Query<LayoutQuery>,
) -> AppResult<Response> {
    let Some(layout_slug) = params.slug else {
        if !params.admin {
            return Err(AppError::BadRequest(
                "slug query parameter is required".to_string(),
            ));
        }
        let layouts = LayoutRepo::list(&state.pool).await?;
        return Ok(Json(DataResponse { data: layouts }).into_response());
    };

    let mut layout = LayoutRepo::find_by_slug(&state.pool, &layout_slug)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found_slug("Layout", &layout_slug)))?;

    if !layout.published && !params.admin {
        return Err(AppError::Core(CoreError::not_found_slug(
            "Layout",
            &layout_slug,
        )));
    }

    if let Some(width) = params.viewport {
        resolve_for_viewport(&mut layout, width);
    }

    Ok(Json(DataResponse { data: layout }).into_response())
}

/// POST /api/v1/layouts
///
/// Create a layout from a wholesale item array.
pub async fn create_layout(
    State(state): State<AppState>,
    Json(input): Json<CreateLayout>,
) -> AppResult<impl IntoResponse> {
    slug::validate_slug(&input.slug).map_err(CoreError::Validation)?;
    validate_item_array(&input.slug, &input.items)?;

    let layout = LayoutRepo::create(&state.pool, &input).await?;

    tracing::info!(
        layout_id = layout.id,
        slug = %layout.slug,
        item_count = layout.items.0.len(),
        "Layout created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: layout })))
}

/// PATCH /api/v1/layouts
///
/// Partially update a layout. The target identifier travels in the body;
/// the item array, when present, replaces the stored one wholesale (last
/// writer wins, no concurrency token).
pub async fn update_layout(
    State(state): State<AppState>,
    Json(input): Json<UpdateLayout>,
) -> AppResult<impl IntoResponse> {
    if let Some(new_slug) = &input.slug {
        slug::validate_slug(new_slug).map_err(CoreError::Validation)?;
    }
    if let Some(items) = &input.items {
        validate_item_array(&input.id.to_string(), items)?;
    }

    let layout = LayoutRepo::update(&state.pool, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Layout", input.id)))?;

    tracing::info!(
        layout_id = layout.id,
        slug = %layout.slug,
        published = layout.published,
        "Layout updated",
    );

    Ok(Json(DataResponse { data: layout }))
}

/// DELETE /api/v1/layouts/:id
pub async fn delete_layout(
    State(state): State<AppState>,
    Path(layout_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = LayoutRepo::delete(&state.pool, layout_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::not_found("Layout", layout_id)));
    }

    tracing::info!(layout_id, "Layout deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Validate an item array for persistence: grid bounds and unique item
/// ids are hard errors; overlapping items are persisted but logged,
/// since two editors saving concurrently can legitimately produce them.
/// `layout` identifies the layout (slug or id) in the warning.
fn validate_item_array(layout: &str, items: &[LayoutItem]) -> Result<(), AppError> {
    grid::validate_items(items)
        .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;

    let overlaps = grid::find_overlaps(items);
    if !overlaps.is_empty() {
        tracing::warn!(
            layout,
            overlapping_pairs = overlaps.len(),
            "Persisting layout with overlapping items",
        );
    }
    Ok(())
}

/// Swap each item's placement for the one effective at `width`, dropping
/// the override slots from the payload.
fn resolve_for_viewport(layout: &mut Layout, width: u32) {
    let bp = Breakpoint::from_viewport_width(width);
    for item in &mut layout.items.0 {
        let effective = breakpoint::resolve(item, bp);
        item.placement = effective;
        item.sm = None;
        item.md = None;
    }
}
