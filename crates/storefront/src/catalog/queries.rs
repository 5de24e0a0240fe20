//! GraphQL operation definitions for the catalog backend.
//!
//! The schema belongs to the backend and is not vendored here, so each
//! operation implements `graphql_client::GraphQLQuery` by hand. The layout
//! mirrors what the derive generates: a marker struct plus a snake_case module
//! holding `QUERY`, `OPERATION_NAME`, `Variables` and `ResponseData`.
//!
//! Response records deserialize straight into `shoebox_core` types.

use graphql_client::{GraphQLQuery, QueryBody};

macro_rules! graphql_operation {
    ($marker:ident, $module:ident) => {
        pub struct $marker;

        impl GraphQLQuery for $marker {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $module::QUERY,
                    operation_name: $module::OPERATION_NAME,
                }
            }
        }
    };
}

// =============================================================================
// Navigation queries
// =============================================================================

graphql_operation!(NavigationDeep, navigation_deep);

pub mod navigation_deep {
    use serde::{Deserialize, Serialize};
    use shoebox_core::Navigation;

    pub const OPERATION_NAME: &str = "NavigationDeep";
    pub const QUERY: &str = r"query NavigationDeep($uid: String!) {
  navigation(uid: $uid) {
    uid
    title
    urlPath
    filterIdList
    layoutCards {
      title
      subTitle
      url
      landscapeURL
      preferredOrientation { small medium large }
      assetsIds { squarish portrait landscape }
      assetsAspectRatios { squarish portrait landscape }
      imageHeight
    }
    children {
      uid
      title
      urlPath
      filterIdList
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub uid: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        #[serde(default)]
        pub navigation: Option<Navigation>,
    }
}

graphql_operation!(NavigationListDeep, navigation_list_deep);

pub mod navigation_list_deep {
    use serde::{Deserialize, Serialize};
    use shoebox_core::Navigation;

    pub const OPERATION_NAME: &str = "NavigationListDeep";
    pub const QUERY: &str = r"query NavigationListDeep {
  navigationList {
    uid
    title
    urlPath
    filterIdList
    children {
      uid
      title
      urlPath
      filterIdList
    }
  }
}";

    /// The operation takes no variables; serializes as `{}`.
    #[derive(Debug, Clone, Default, Serialize)]
    pub struct Variables {}

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub navigation_list: Option<Vec<Navigation>>,
    }
}

// =============================================================================
// Navigation-scoped sidebar queries
// =============================================================================

graphql_operation!(CategoryList, category_list);

pub mod category_list {
    use serde::{Deserialize, Serialize};
    use shoebox_core::Category;

    pub const OPERATION_NAME: &str = "CategoryList";
    pub const QUERY: &str = r"query CategoryList($navigationUid: String!) {
  categoryList(navigationUid: $navigationUid) {
    uid
    title
    navigationUid
    urlPath
  }
}";

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub navigation_uid: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub category_list: Option<Vec<Category>>,
    }
}

graphql_operation!(FilterOptionList, filter_option_list);

pub mod filter_option_list {
    use serde::{Deserialize, Serialize};
    use shoebox_core::FilterOption;

    pub const OPERATION_NAME: &str = "FilterOptionList";
    pub const QUERY: &str = r"query FilterOptionList($navigationUid: String!) {
  filterOptionList(navigationUid: $navigationUid) {
    uid
    title
    level
    parentUid
    navigationUid
  }
}";

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub navigation_uid: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub filter_option_list: Option<Vec<FilterOption>>,
    }
}

// =============================================================================
// Product queries
// =============================================================================

graphql_operation!(ProductAggregateQuery, product_aggregate);

pub mod product_aggregate {
    use serde::{Deserialize, Serialize};
    use shoebox_core::{ProductAggregate, ProductFilter};

    pub const OPERATION_NAME: &str = "ProductAggregate";
    pub const QUERY: &str = r"query ProductAggregate($whereAnd: [ProductBoolExp!]) {
  productsAggregate(where: { _and: $whereAnd }) {
    aggregate {
      count
    }
  }
}";

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub where_and: ProductFilter,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub products_aggregate: Option<ProductsAggregate>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductsAggregate {
        #[serde(default)]
        pub aggregate: Option<ProductAggregate>,
    }
}

graphql_operation!(ProductList, product_list);

pub mod product_list {
    use serde::{Deserialize, Serialize};
    use shoebox_core::{OrderBy, Product, ProductFilter};

    pub const OPERATION_NAME: &str = "ProductList";
    pub const QUERY: &str = r"query ProductList($_and: [ProductBoolExp!], $order_by: [ProductOrderBy!]) {
  productList(where: { _and: $_and }, order_by: $order_by) {
    uid
    title
    subTitle
    price { currentPrice fullPrice currencyCode }
    images { squarishURL portraitURL landscapeURL }
    productAnotherColors {
      uid
      colorDescription
      images { squarishURL }
    }
    label
  }
}";

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        #[serde(rename = "_and")]
        pub and: ProductFilter,
        pub order_by: OrderBy,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        #[serde(default)]
        pub product_list: Option<Vec<Product>>,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use shoebox_core::{FilterIdList, ProductFilter, SortOrder};

    #[test]
    fn test_product_list_body_matches_backend_contract() {
        let filter = ProductFilter::from_ids(&FilterIdList::parse("men,shoes"));
        let body = ProductList::build_query(product_list::Variables {
            and: filter,
            order_by: SortOrder::PriceAsc.order_by(),
        });
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["operationName"], "ProductList");
        assert_eq!(
            json["variables"],
            json!({
                "_and": [
                    {"filters": {"_regex": "men"}},
                    {"filters": {"_regex": "shoes"}}
                ],
                "order_by": {"current_price": "asc"}
            })
        );
    }

    #[test]
    fn test_aggregate_uses_where_and_variable() {
        let filter = ProductFilter::from_ids(&FilterIdList::parse(""));
        let body = ProductAggregateQuery::build_query(product_aggregate::Variables {
            where_and: filter,
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["variables"], json!({"whereAnd": []}));
    }

    #[test]
    fn test_navigation_list_has_empty_variables() {
        let body = NavigationListDeep::build_query(navigation_list_deep::Variables::default());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["variables"], json!({}));
        assert!(json["query"].as_str().unwrap().contains("navigationList"));
    }

    #[test]
    fn test_missing_lists_decode_as_none() {
        let data: category_list::ResponseData =
            serde_json::from_value(json!({"categoryList": null})).unwrap();
        assert!(data.category_list.is_none());

        let data: product_aggregate::ResponseData =
            serde_json::from_value(json!({"productsAggregate": {"aggregate": {"count": 42}}}))
                .unwrap();
        assert_eq!(
            data.products_aggregate
                .and_then(|a| a.aggregate)
                .map(|a| a.count),
            Some(42)
        );
    }
}
