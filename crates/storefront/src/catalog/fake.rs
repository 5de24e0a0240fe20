//! In-memory catalog gateway for unit tests.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;
use shoebox_core::{
    Category, CurrencyCode, FilterOption, Navigation, NavigationUid, Product, ProductAggregate,
    ProductFilter, ProductImages, ProductPrice, ProductUid, SortOrder,
};

use super::{CatalogError, CatalogGateway, GraphQLError};

/// Serves fixed records and records every call as `op[:detail]`.
#[derive(Default)]
pub struct FakeCatalog {
    pub navigations: Vec<Navigation>,
    pub categories: Vec<Category>,
    pub filter_options: Vec<FilterOption>,
    pub products: Vec<Product>,
    /// Operation that fails instead of answering.
    pub failing: Option<&'static str>,
    pub calls: Mutex<Vec<String>>,
}

/// A navigation with the given id, path and title.
pub fn navigation(uid: &str, url_path: &str, title: &str) -> Navigation {
    Navigation {
        uid: NavigationUid::new(uid),
        title: title.to_string(),
        url_path: url_path.to_string(),
        ..Navigation::default()
    }
}

/// A product priced at 100 USD.
pub fn product(uid: &str) -> Product {
    Product {
        uid: ProductUid::new(uid),
        title: format!("Product {uid}"),
        sub_title: "Running shoe".to_string(),
        price: ProductPrice::new(Decimal::ONE_HUNDRED, CurrencyCode::USD),
        images: ProductImages {
            squarish_url: format!("https://img.test/{uid}.jpg"),
            ..ProductImages::default()
        },
        ..Product::default()
    }
}

impl FakeCatalog {
    pub fn with_products(count: usize) -> Self {
        Self {
            products: (1..=count).map(|i| product(&format!("p{i}"))).collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, detail: Option<String>) -> Result<(), CatalogError> {
        let entry = match detail {
            Some(detail) => format!("{op}:{detail}"),
            None => op.to_string(),
        };
        self.calls.lock().unwrap().push(entry);

        if self.failing == Some(op) {
            return Err(CatalogError::GraphQL(vec![GraphQLError::message(format!(
                "{op} failed"
            ))]));
        }
        Ok(())
    }
}

fn predicate(filter: &ProductFilter) -> String {
    filter
        .clauses()
        .iter()
        .map(|clause| clause.filters.regex.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl CatalogGateway for FakeCatalog {
    async fn navigation(&self, uid: &NavigationUid) -> Result<Option<Navigation>, CatalogError> {
        self.record("navigation", Some(uid.to_string()))?;
        Ok(self.navigations.iter().find(|nav| &nav.uid == uid).cloned())
    }

    async fn navigation_list(&self) -> Result<Vec<Navigation>, CatalogError> {
        self.record("navigation_list", None)?;
        Ok(self.navigations.clone())
    }

    async fn category_list(
        &self,
        navigation_uid: &NavigationUid,
    ) -> Result<Vec<Category>, CatalogError> {
        self.record("category_list", Some(navigation_uid.to_string()))?;
        Ok(self.categories.clone())
    }

    async fn filter_option_list(
        &self,
        navigation_uid: &NavigationUid,
    ) -> Result<Vec<FilterOption>, CatalogError> {
        self.record("filter_option_list", Some(navigation_uid.to_string()))?;
        Ok(self.filter_options.clone())
    }

    async fn product_list(
        &self,
        filter: &ProductFilter,
        order: SortOrder,
    ) -> Result<Vec<Product>, CatalogError> {
        self.record(
            "product_list",
            Some(format!(
                "{}:{}",
                predicate(filter),
                order.as_query().unwrap_or_default()
            )),
        )?;
        Ok(self.products.clone())
    }

    async fn product_aggregate(
        &self,
        filter: &ProductFilter,
    ) -> Result<ProductAggregate, CatalogError> {
        self.record("product_aggregate", Some(predicate(filter)))?;
        Ok(ProductAggregate {
            count: self.products.len() as u64,
        })
    }
}
