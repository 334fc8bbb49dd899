//! Per-request view state derived from URL query parameters.

use crate::model::OpportunityId;

/// Navigation state for one request.
///
/// Derived once from the query string and passed through the render path;
/// nothing here survives between requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Record to show in detail view, when `id` is present and non-empty.
    pub selected: Option<OpportunityId>,
    /// Requested 1-based page, before clamping against the catalog size.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected: None,
            page: 1,
        }
    }
}

impl ViewState {
    /// Build the state from decoded query pairs, in document order.
    ///
    /// For a repeated key the first value is authoritative. An empty `id=`
    /// means no selection. `page` falls back to 1 on anything that does not
    /// parse as a non-negative integer; clamping against the real page count
    /// happens later in pagination.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut id: Option<&str> = None;
        let mut page: Option<&str> = None;
        for (key, value) in pairs {
            match key {
                "id" if id.is_none() => id = Some(value),
                "page" if page.is_none() => page = Some(value),
                _ => {}
            }
        }
        let selected = id.filter(|v| !v.is_empty()).map(OpportunityId::from);
        let page = page
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        Self { selected, page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(pairs: &[(&str, &str)]) -> ViewState {
        ViewState::from_query_pairs(pairs.iter().copied())
    }

    #[test]
    fn no_params_is_list_page_one() {
        let state = resolve(&[]);
        assert_eq!(state, ViewState::default());
        assert!(state.selected.is_none());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn id_and_page_both_carry() {
        let state = resolve(&[("id", "vol-007"), ("page", "3")]);
        assert_eq!(state.selected, Some(OpportunityId::from("vol-007")));
        assert_eq!(state.page, 3);
    }

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let state = resolve(&[("page", "2"), ("page", "9"), ("id", "a"), ("id", "b")]);
        assert_eq!(state.page, 2);
        assert_eq!(state.selected, Some(OpportunityId::from("a")));
    }

    #[test]
    fn empty_id_means_no_selection() {
        let state = resolve(&[("id", ""), ("page", "2")]);
        assert!(state.selected.is_none());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn unparseable_page_defaults_to_one() {
        assert_eq!(resolve(&[("page", "abc")]).page, 1);
        assert_eq!(resolve(&[("page", "")]).page, 1);
        assert_eq!(resolve(&[("page", "-3")]).page, 1);
        assert_eq!(resolve(&[("page", "2.5")]).page, 1);
    }

    #[test]
    fn page_zero_floors_to_one() {
        assert_eq!(resolve(&[("page", "0")]).page, 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let state = resolve(&[("utm_source", "mail"), ("page", "2")]);
        assert_eq!(state.page, 2);
        assert!(state.selected.is_none());
    }
}
