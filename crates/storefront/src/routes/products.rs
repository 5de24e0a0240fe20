//! Product listing page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use shoebox_core::{ProductsPath, SortOrder};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filter_state::{self, FilterState};
use crate::filters;
use crate::resolver::{ProductListPage, ProductStage, Resolution, resolve_product_list_page};
use crate::state::AppState;
use crate::views::{
    FilterSidebar, LayoutCardView, MenuItem, ProductCardView, SortLink, menu, page_title,
    results_label, sort_links,
};

/// `order` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    pub order: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsPageTemplate {
    pub title: String,
    pub site_name: String,
    pub heading: String,
    pub results: String,
    pub menu: Vec<MenuItem>,
    pub layout_cards: Vec<LayoutCardView>,
    pub sidebar: FilterSidebar,
    pub sort_links: Vec<SortLink>,
    pub list: ProductListView,
}

/// Product grid, rendered in the page and as a standalone fragment.
#[derive(Debug, Clone)]
pub struct ProductListView {
    pub products: Vec<ProductCardView>,
    /// Comma-joined filter ids the grid was fetched with.
    pub filter_ids: String,
    pub revision: u64,
    /// Fetched for a navigation click, ahead of the page load.
    pub optimistic: bool,
}

impl ProductListView {
    #[must_use]
    pub fn new(stage: &ProductStage, filter_state: &FilterState) -> Self {
        Self {
            products: stage.product_list.iter().map(ProductCardView::from).collect(),
            filter_ids: filter_state.filter_id_list().to_segment(),
            revision: filter_state.revision(),
            optimistic: filter_state.is_optimistic(),
        }
    }
}

/// Product grid fragment returned to the filter-state script.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_list.html")]
pub struct ProductListFragment {
    pub list: ProductListView,
}

impl ProductsPageTemplate {
    fn new(
        state: &AppState,
        path: &ProductsPath,
        page: ProductListPage,
        filter_state: &FilterState,
    ) -> Self {
        let config = state.config();
        let ProductListPage {
            page: navigation_page,
            filter_groups,
            product_list,
            product_aggregate,
            order,
        } = page;
        let navigation = &navigation_page.navigation;
        let stage = ProductStage {
            product_list,
            product_aggregate,
        };

        Self {
            title: page_title(&navigation.title, &config.site_name),
            site_name: config.site_name.clone(),
            heading: navigation.title.clone(),
            results: results_label(product_aggregate.count),
            menu: menu(&navigation_page.navigation_list, &navigation.uid),
            layout_cards: navigation
                .layout_cards
                .iter()
                .map(|card| LayoutCardView::new(card, config.image_base_url.as_deref()))
                .collect(),
            sidebar: FilterSidebar::new(
                path,
                &navigation_page.category_list,
                &filter_groups,
                &navigation_page.filter_id_list,
                order,
            ),
            sort_links: sort_links(path, order),
            list: ProductListView::new(&stage, filter_state),
        }
    }
}

/// Display a product listing page.
///
/// Answers 308 when the path segment is not the navigation's canonical path,
/// and 404 when the navigation does not exist.
#[instrument(skip(state, session, query))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Path(tail): Path<String>,
    Query(query): Query<OrderQuery>,
) -> Result<Response> {
    let path = ProductsPath::parse(&tail).map_err(|e| AppError::NotFound(e.to_string()))?;
    let order = SortOrder::from_query(query.order.as_deref());

    match resolve_product_list_page(state.catalog(), &path, order).await? {
        Resolution::Page(page) => {
            let filter_state =
                filter_state::reconcile(&session, page.page.filter_id_list.clone()).await?;
            Ok(ProductsPageTemplate::new(&state, &path, page, &filter_state).into_response())
        }
        Resolution::Redirect(canonical) => {
            Ok(Redirect::permanent(&canonical.to_url()).into_response())
        }
        Resolution::NotFound => Err(AppError::NotFound(format!(
            "navigation {}",
            path.navigation_uid
        ))),
    }
}
