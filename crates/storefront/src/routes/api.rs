//! JSON and fragment endpoints.
//!
//! - `GET /api/products/{*path}` returns navigation page props
//! - `GET /api/filter-state` returns the session's filter selection
//! - `POST /api/filter-state` applies a navigation click and returns the
//!   product grid for the new selection

use axum::{
    Form, Json,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use shoebox_core::{FilterIdList, ProductsPath, SortOrder};
use tower_sessions::Session;
use tracing::instrument;

use super::products::{ProductListFragment, ProductListView};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filter_state::{self, FilterState};
use crate::resolver::{Resolution, fetch_products, resolve_navigation_page};
use crate::state::AppState;

/// Mount point of the JSON props endpoint.
pub const API_PRODUCTS_ROUTE: &str = "/api/products";

/// Navigation page props as JSON.
///
/// A non-canonical path answers 308 to the canonical props URL.
#[instrument(skip(state))]
pub async fn navigation_props(
    State(state): State<AppState>,
    Path(tail): Path<String>,
) -> Result<Response> {
    let path = ProductsPath::parse(&tail).map_err(|e| AppError::NotFound(e.to_string()))?;

    match resolve_navigation_page(state.catalog(), &path).await? {
        Resolution::Page(page) => Ok(Json(page).into_response()),
        Resolution::Redirect(canonical) => {
            Ok(Redirect::permanent(&canonical.to_url_under(API_PRODUCTS_ROUTE)).into_response())
        }
        Resolution::NotFound => Err(AppError::NotFound(format!(
            "navigation {}",
            path.navigation_uid
        ))),
    }
}

/// Navigation-click form.
#[derive(Debug, Deserialize)]
pub struct FilterStateForm {
    /// Comma-separated filter ids of the clicked navigation.
    pub filter_ids: String,
    pub order: Option<String>,
}

/// Current filter selection.
#[instrument(skip(session))]
pub async fn show_filter_state(session: Session) -> Result<Json<FilterState>> {
    Ok(Json(filter_state::load(&session).await?))
}

/// Replace the filter selection for a navigation click.
///
/// The session is updated before any catalog query runs, then only the
/// product stage is fetched for the new ids.
#[instrument(skip(state, session, form), fields(filter_ids = %form.filter_ids))]
pub async fn update_filter_state(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<FilterStateForm>,
) -> Result<ProductListFragment> {
    let filter_state =
        filter_state::navigate(&session, FilterIdList::parse(&form.filter_ids)).await?;
    let revision = filter_state.revision().to_string();
    add_breadcrumb(
        "filter-state",
        "Navigation click",
        Some(&[("revision", revision.as_str())]),
    );

    let order = SortOrder::from_query(form.order.as_deref());
    let stage = fetch_products(state.catalog(), filter_state.filter_id_list(), order).await?;

    Ok(ProductListFragment {
        list: ProductListView::new(&stage, &filter_state),
    })
}
