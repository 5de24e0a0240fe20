//! Per-session active filter selection.
//!
//! A navigation click replaces the selection at once, before the next page
//! resolution has run, so the product list can re-render without waiting on a
//! full page load. The next resolver pass for the loaded route overwrites the
//! selection wholesale. The session value is never the source of truth for
//! what a page shows.

use serde::{Deserialize, Serialize};
use shoebox_core::FilterIdList;
use tower_sessions::Session;

/// Session key holding the [`FilterState`].
pub const FILTER_STATE_KEY: &str = "filter_state";

/// Who wrote the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStateOrigin {
    /// A completed page resolution.
    #[default]
    Resolved,
    /// A navigation click not yet confirmed by a page resolution.
    Navigation,
}

/// The active filter-id list of one browsing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    filter_id_list: FilterIdList,
    revision: u64,
    origin: FilterStateOrigin,
}

impl FilterState {
    /// State seeded from resolved page props.
    #[must_use]
    pub const fn resolved(filter_id_list: FilterIdList) -> Self {
        Self {
            filter_id_list,
            revision: 0,
            origin: FilterStateOrigin::Resolved,
        }
    }

    #[must_use]
    pub const fn filter_id_list(&self) -> &FilterIdList {
        &self.filter_id_list
    }

    /// Bumped on every write.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub const fn origin(&self) -> FilterStateOrigin {
        self.origin
    }

    /// Whether the selection came from a click that no page resolution has
    /// confirmed yet.
    #[must_use]
    pub fn is_optimistic(&self) -> bool {
        self.origin == FilterStateOrigin::Navigation
    }

    /// Replace the selection in response to a navigation click.
    pub fn navigate(&mut self, ids: FilterIdList) {
        self.replace(ids, FilterStateOrigin::Navigation);
    }

    /// Overwrite the selection with the ids a resolver pass produced.
    pub fn reconcile(&mut self, ids: FilterIdList) {
        self.replace(ids, FilterStateOrigin::Resolved);
    }

    fn replace(&mut self, ids: FilterIdList, origin: FilterStateOrigin) {
        self.filter_id_list = ids;
        self.revision = self.revision.wrapping_add(1);
        self.origin = origin;
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the filter state from the session, or an empty one.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load(session: &Session) -> Result<FilterState, tower_sessions::session::Error> {
    Ok(session
        .get::<FilterState>(FILTER_STATE_KEY)
        .await?
        .unwrap_or_default())
}

/// Apply a navigation click to the session's filter state.
///
/// This is a load then write with no lock around it. Two clicks in flight on
/// the same session can both read revision `n` and both write `n + 1`, the
/// last write winning. The revision alone therefore does not order their
/// responses; the product-list script keeps only the response to its latest
/// click.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn navigate(
    session: &Session,
    ids: FilterIdList,
) -> Result<FilterState, tower_sessions::session::Error> {
    let mut state = load(session).await?;
    state.navigate(ids);
    session.insert(FILTER_STATE_KEY, &state).await?;
    Ok(state)
}

/// Overwrite the session's filter state after a page resolution.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn reconcile(
    session: &Session,
    ids: FilterIdList,
) -> Result<FilterState, tower_sessions::session::Error> {
    let mut state = load(session).await?;
    state.reconcile(ids);
    session.insert(FILTER_STATE_KEY, &state).await?;
    Ok(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use tower_sessions::MemoryStore;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[test]
    fn test_navigate_is_immediately_visible() {
        let mut state = FilterState::resolved(FilterIdList::parse("men"));
        state.navigate(FilterIdList::parse("women,shoes"));

        assert_eq!(state.filter_id_list().as_slice(), &["women", "shoes"]);
        assert_eq!(state.revision(), 1);
        assert!(state.is_optimistic());
    }

    #[test]
    fn test_reconcile_replaces_without_merging() {
        let mut state = FilterState::default();
        state.navigate(FilterIdList::parse("women,shoes"));
        state.reconcile(FilterIdList::parse("kids"));

        assert_eq!(state.filter_id_list().as_slice(), &["kids"]);
        assert_eq!(state.origin(), FilterStateOrigin::Resolved);
        assert_eq!(state.revision(), 2);
    }

    #[test]
    fn test_serializes_for_clients() {
        let mut state = FilterState::default();
        state.navigate(FilterIdList::parse("red"));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filterIdList": ["red"],
                "revision": 1,
                "origin": "navigation"
            })
        );
    }

    #[test]
    fn test_clicks_from_one_snapshot_share_a_revision() {
        let loaded = FilterState::resolved(FilterIdList::parse("men"));
        let mut first = loaded.clone();
        let mut second = loaded;
        first.navigate(FilterIdList::parse("women"));
        second.navigate(FilterIdList::parse("kids"));

        assert_eq!(first.revision(), second.revision());
        assert_ne!(first.filter_id_list(), second.filter_id_list());
    }

    #[tokio::test]
    async fn test_empty_session_loads_default() {
        let state = load(&session()).await.unwrap();
        assert_eq!(state, FilterState::default());
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let session = session();

        let clicked = navigate(&session, FilterIdList::parse("men,shoes"))
            .await
            .unwrap();
        assert_eq!(load(&session).await.unwrap(), clicked);

        let resolved = reconcile(&session, FilterIdList::parse("men"))
            .await
            .unwrap();
        assert_eq!(resolved.revision(), 2);
        assert!(!resolved.is_optimistic());
        assert_eq!(
            load(&session).await.unwrap().filter_id_list().as_slice(),
            &["men"]
        );
    }
}
