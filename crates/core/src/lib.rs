//! Shoebox Core - Catalog types and data-shaping.
//!
//! This crate provides the types shared by the storefront server and the CLI:
//! - `storefront` - Server-rendered product listing pages
//! - `cli` - Operator tools for inspecting page resolution
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Catalog records, uid newtypes, prices and labels
//! - [`filter`] - Filter-id lists, product predicates, filter-option grouping
//! - [`sort`] - `order` query mapping to the backend sort directive
//! - [`path`] - The products route path and canonical URL building

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod filter;
pub mod path;
pub mod sort;
pub mod types;

pub use filter::{FilterGroup, FilterIdList, ProductFilter, group_filter_options};
pub use path::{PRODUCTS_ROUTE, PathError, ProductsPath};
pub use sort::{OrderBy, OrderDirection, SortOrder};
pub use types::*;
