//! Header menu, filter sidebar and sort menu display data.

use shoebox_core::{
    Category, FilterGroup, FilterIdList, Navigation, NavigationUid, ProductsPath, SortOrder,
};

/// A header menu link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub url: String,
    /// The navigation's own filter ids, comma-joined for `data-filter-ids`.
    pub filter_ids: String,
    pub active: bool,
    pub children: Vec<MenuItem>,
}

/// Build the header menu, one level of children deep.
///
/// Navigations without a canonical path have nowhere to link to and are left
/// out.
#[must_use]
pub fn menu(navigation_list: &[Navigation], current: &NavigationUid) -> Vec<MenuItem> {
    navigation_list
        .iter()
        .filter(|nav| nav.has_canonical_path())
        .map(|nav| MenuItem {
            children: nav
                .children
                .iter()
                .filter(|child| child.has_canonical_path())
                .map(|child| menu_item(child, current))
                .collect(),
            ..menu_item(nav, current)
        })
        .collect()
}

fn menu_item(navigation: &Navigation, current: &NavigationUid) -> MenuItem {
    MenuItem {
        title: navigation.title.clone(),
        url: ProductsPath::for_navigation(navigation).to_url(),
        filter_ids: navigation.filter_id_list.join(","),
        active: &navigation.uid == current,
        children: Vec::new(),
    }
}

/// A category entry in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub title: String,
    pub url: Option<String>,
}

impl From<&Category> for CategoryLink {
    fn from(category: &Category) -> Self {
        let url = match (category.canonical_segment(), &category.navigation_uid) {
            (Some(segment), Some(uid)) => Some(
                ProductsPath {
                    segment: segment.to_string(),
                    navigation_uid: uid.clone(),
                    filter_string: None,
                }
                .to_url(),
            ),
            _ => None,
        };
        Self {
            title: category.title.clone(),
            url,
        }
    }
}

/// A filter with its toggleable options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterGroupView {
    pub uid: String,
    pub title: String,
    pub options: Vec<FilterOptionLink>,
}

/// An option link that toggles its id in the URL filter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptionLink {
    pub uid: String,
    pub title: String,
    pub url: String,
    pub active: bool,
}

/// The filters sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSidebar {
    pub categories: Vec<CategoryLink>,
    pub groups: Vec<FilterGroupView>,
}

impl FilterSidebar {
    /// Build the sidebar for a canonical page.
    ///
    /// An option is active when it is in the effective filter-id list. Its
    /// link toggles it in the URL filter string only, since the navigation's
    /// own ids always apply.
    #[must_use]
    pub fn new(
        path: &ProductsPath,
        categories: &[Category],
        groups: &[FilterGroup],
        effective: &FilterIdList,
        order: SortOrder,
    ) -> Self {
        let url_ids = path.filter_ids();
        Self {
            categories: categories.iter().map(CategoryLink::from).collect(),
            groups: groups
                .iter()
                .map(|group| FilterGroupView {
                    uid: group.filter.uid.to_string(),
                    title: group.filter.title.clone(),
                    options: group
                        .options
                        .iter()
                        .map(|option| FilterOptionLink {
                            uid: option.uid.to_string(),
                            title: option.title.clone(),
                            url: with_order(
                                path.with_filters(&url_ids.toggled(option.uid.as_str()))
                                    .to_url(),
                                order,
                            ),
                            active: effective.contains(option.uid.as_str()),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// An entry of the sort menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortLink {
    pub label: &'static str,
    pub url: String,
    pub active: bool,
}

/// Sort menu links for the current page.
#[must_use]
pub fn sort_links(path: &ProductsPath, current: SortOrder) -> Vec<SortLink> {
    SortOrder::all()
        .into_iter()
        .map(|order| SortLink {
            label: order.label(),
            url: with_order(path.to_url(), order),
            active: order == current,
        })
        .collect()
}

/// Append `?order=` for orderings other than the default.
#[must_use]
pub fn with_order(url: String, order: SortOrder) -> String {
    match order.as_query() {
        Some(value) => format!("{url}?order={value}"),
        None => url,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use shoebox_core::{CategoryUid, FilterLevel, FilterOption, FilterOptionUid, group_filter_options};

    fn nav(uid: &str, url_path: &str) -> Navigation {
        Navigation {
            uid: NavigationUid::new(uid),
            title: url_path.to_uppercase(),
            url_path: url_path.to_string(),
            ..Navigation::default()
        }
    }

    fn option(uid: &str, level: FilterLevel, parent: Option<&str>) -> FilterOption {
        FilterOption {
            uid: FilterOptionUid::new(uid),
            title: uid.to_string(),
            level,
            parent_uid: parent.map(FilterOptionUid::new),
            navigation_uid: None,
        }
    }

    #[test]
    fn test_menu_is_one_level_deep() {
        let mut grandchild = nav("n3", "deep");
        grandchild.filter_id_list = vec!["deep".to_string()];
        let mut child = nav("n2", "running");
        child.filter_id_list = vec!["men".to_string(), "running".to_string()];
        child.children = vec![grandchild];
        let mut men = nav("n1", "men");
        men.children = vec![child, nav("n4", "")];

        let items = menu(&[men, nav("n5", "")], &NavigationUid::new("n2"));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].url, "/products/men/n1");
        assert_eq!(items[0].children.len(), 1);

        let running = &items[0].children[0];
        assert_eq!(running.filter_ids, "men,running");
        assert!(running.active);
        assert!(running.children.is_empty());
    }

    #[test]
    fn test_sidebar_toggles_url_filters_only() {
        let path = ProductsPath::parse("shoes/nav1/red").unwrap();
        let effective = path.filter_ids().layered_on(&["shoes".to_string()]);
        let groups = group_filter_options(&[
            option("color", FilterLevel::Filter, None),
            option("red", FilterLevel::Option, Some("color")),
            option("blue", FilterLevel::Option, Some("color")),
        ]);

        let sidebar = FilterSidebar::new(&path, &[], &groups, &effective, SortOrder::PriceDesc);
        let options = &sidebar.groups[0].options;

        assert!(options[0].active);
        assert_eq!(options[0].url, "/products/shoes/nav1?order=price-desc");
        assert!(!options[1].active);
        assert_eq!(
            options[1].url,
            "/products/shoes/nav1/red,blue?order=price-desc"
        );
    }

    #[test]
    fn test_category_links() {
        let linked = Category {
            uid: CategoryUid::new("c1"),
            title: "Lifestyle".to_string(),
            navigation_uid: Some(NavigationUid::new("nav9")),
            url_path: Some("lifestyle".to_string()),
        };
        let unlinked = Category {
            uid: CategoryUid::new("c2"),
            title: "Other".to_string(),
            ..Category::default()
        };

        assert_eq!(
            CategoryLink::from(&linked).url.as_deref(),
            Some("/products/lifestyle/nav9")
        );
        assert_eq!(CategoryLink::from(&unlinked).url, None);
    }

    #[test]
    fn test_menu_links_for_url_paths_with_uid() {
        let mut men = nav("n1", "men/n1");
        men.children = vec![nav("n2", "running/n2"), nav("n3", "men/running")];

        let items = menu(&[men], &NavigationUid::new("n2"));
        assert_eq!(items[0].url, "/products/men/n1");
        assert_eq!(items[0].children.len(), 1);
        assert_eq!(items[0].children[0].url, "/products/running/n2");

        let lifestyle = Category {
            uid: CategoryUid::new("c1"),
            title: "Lifestyle".to_string(),
            navigation_uid: Some(NavigationUid::new("nav9")),
            url_path: Some("lifestyle/nav9".to_string()),
        };
        assert_eq!(
            CategoryLink::from(&lifestyle).url.as_deref(),
            Some("/products/lifestyle/nav9")
        );
    }

    #[test]
    fn test_sort_links() {
        let path = ProductsPath::parse("shoes/nav1").unwrap();
        let links = sort_links(&path, SortOrder::Newest);
        assert_eq!(links[0].url, "/products/shoes/nav1");
        assert!(links.iter().any(|l| l.active && l.label == "Newest"));
        assert!(
            links
                .iter()
                .any(|l| l.url == "/products/shoes/nav1?order=price-asc")
        );
    }
}
