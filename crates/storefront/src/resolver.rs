//! Page data resolution for the products routes.
//!
//! A resolution runs in up to two fan-out stages against the catalog:
//!
//! 1. navigation, navigation list, category list and filter options, all
//!    concurrently. The first failure fails the whole stage.
//! 2. product aggregate and product list, concurrently, once the effective
//!    filter-id list is known.
//!
//! The canonical-path check sits between the two, so a request that ends in a
//! redirect never issues product queries.

use serde::Serialize;
use shoebox_core::{
    Category, FilterGroup, FilterIdList, FilterOption, Navigation, Product, ProductAggregate,
    ProductFilter, ProductsPath, SortOrder, group_filter_options,
};
use tracing::{debug, instrument};

use crate::catalog::{CatalogError, CatalogGateway};

/// Outcome of resolving a products path.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<P> {
    /// The path is canonical; render these props.
    Page(P),
    /// The path names a known navigation under the wrong segment. Answer with
    /// a permanent redirect to this path.
    Redirect(ProductsPath),
    /// No navigation with that id, or one without a canonical path.
    NotFound,
}

/// Props of a navigation page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPage {
    pub navigation: Navigation,
    pub navigation_list: Vec<Navigation>,
    pub category_list: Vec<Category>,
    pub filter_option_list: Vec<FilterOption>,
    /// Navigation filter ids followed by the ids picked in the URL.
    pub filter_id_list: FilterIdList,
}

/// Props of a product listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListPage {
    #[serde(flatten)]
    pub page: NavigationPage,
    /// Filter entries with their options attached.
    pub filter_groups: Vec<FilterGroup>,
    pub product_list: Vec<Product>,
    pub product_aggregate: ProductAggregate,
    #[serde(skip)]
    pub order: SortOrder,
}

/// Result of the product stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductStage {
    pub product_list: Vec<Product>,
    pub product_aggregate: ProductAggregate,
}

/// Resolve the navigation-side props for a products path.
///
/// # Errors
///
/// Returns the first `CatalogError` raised by any stage-1 query.
#[instrument(skip(catalog), fields(navigation = %path.navigation_uid, segment = %path.segment))]
pub async fn resolve_navigation_page(
    catalog: &dyn CatalogGateway,
    path: &ProductsPath,
) -> Result<Resolution<NavigationPage>, CatalogError> {
    let uid = &path.navigation_uid;
    let (navigation, navigation_list, category_list, filter_option_list) = tokio::try_join!(
        catalog.navigation(uid),
        catalog.navigation_list(),
        catalog.category_list(uid),
        catalog.filter_option_list(uid),
    )?;

    let Some(navigation) = navigation.filter(Navigation::has_canonical_path) else {
        debug!("navigation not found");
        return Ok(Resolution::NotFound);
    };

    if !path.is_canonical_for(&navigation) {
        let canonical = path.canonical_for(&navigation);
        debug!(to = %canonical, "non-canonical path");
        return Ok(Resolution::Redirect(canonical));
    }

    let filter_id_list = path.filter_ids().layered_on(&navigation.filter_id_list);

    Ok(Resolution::Page(NavigationPage {
        navigation,
        navigation_list,
        category_list,
        filter_option_list,
        filter_id_list,
    }))
}

/// Resolve a product listing page: the navigation stage, then the product
/// stage for the effective filter ids.
///
/// # Errors
///
/// Returns the first `CatalogError` raised by either stage.
#[instrument(skip(catalog), fields(navigation = %path.navigation_uid, order = ?order))]
pub async fn resolve_product_list_page(
    catalog: &dyn CatalogGateway,
    path: &ProductsPath,
    order: SortOrder,
) -> Result<Resolution<ProductListPage>, CatalogError> {
    let page = match resolve_navigation_page(catalog, path).await? {
        Resolution::Page(page) => page,
        Resolution::Redirect(canonical) => return Ok(Resolution::Redirect(canonical)),
        Resolution::NotFound => return Ok(Resolution::NotFound),
    };

    let ProductStage {
        product_list,
        product_aggregate,
    } = fetch_products(catalog, &page.filter_id_list, order).await?;
    let filter_groups = group_filter_options(&page.filter_option_list);

    Ok(Resolution::Page(ProductListPage {
        page,
        filter_groups,
        product_list,
        product_aggregate,
        order,
    }))
}

/// Run the product stage for a filter-id list.
///
/// Empty ids are dropped from the predicate, so `[""]` lists every product.
///
/// # Errors
///
/// Returns the first `CatalogError` raised by either product query.
#[instrument(skip(catalog, ids), fields(ids = %ids.to_segment(), order = ?order))]
pub async fn fetch_products(
    catalog: &dyn CatalogGateway,
    ids: &FilterIdList,
    order: SortOrder,
) -> Result<ProductStage, CatalogError> {
    let filter = ProductFilter::from_ids(ids);
    let (product_aggregate, product_list) = tokio::try_join!(
        catalog.product_aggregate(&filter),
        catalog.product_list(&filter, order),
    )?;

    debug!(count = product_aggregate.count, "products fetched");
    Ok(ProductStage {
        product_list,
        product_aggregate,
    })
}
