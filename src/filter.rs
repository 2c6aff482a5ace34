//! Search and filter state for list pages, and the predicate that derives the
//! visible sequence from it.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::entity::{Entity, FilterField};

/// Wire value of the catch-all filter option.
pub const ALL: &str = "all";

/// Selected value of one categorical filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterValue {
    #[default]
    All,
    Is(String),
}

impl FilterValue {
    pub fn is(value: impl Into<String>) -> Self {
        FilterValue::Is(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Exact, case-sensitive equality; `All` matches everything.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Is(expected) => expected == value,
        }
    }
}

impl FromStr for FilterValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL {
            FilterValue::All
        } else {
            FilterValue::Is(s.to_string())
        })
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::All => f.write_str(ALL),
            FilterValue::Is(value) => f.write_str(value),
        }
    }
}

/// Search term plus the active filters of a list page.
///
/// Filters not present are treated as `all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<F: FilterField> {
    search_term: String,
    filters: Vec<(F, FilterValue)>,
}

impl<F: FilterField> Default for ListQuery<F> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filters: Vec::new(),
        }
    }
}

impl<F: FilterField> ListQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn filter(mut self, field: F, value: impl Into<FilterValue>) -> Self {
        self.set_filter(field, value);
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn filter_value(&self, field: F) -> &FilterValue {
        self.filters
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
            .unwrap_or(&FilterValue::All)
    }

    /// Sets or replaces a filter. Setting `All` removes it.
    pub fn set_filter(&mut self, field: F, value: impl Into<FilterValue>) {
        let value = value.into();
        self.filters.retain(|(f, _)| *f != field);
        if !value.is_all() {
            self.filters.push((field, value));
        }
    }

    /// Selects `value`, or clears the filter when `value` is already selected.
    pub fn toggle_filter(&mut self, field: F, value: &str) {
        let value = FilterValue::from(value);
        if *self.filter_value(field) == value {
            self.set_filter(field, FilterValue::All);
        } else {
            self.set_filter(field, value);
        }
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.filters.clear();
    }

    /// Active (non-`all`) filters in the order they were set.
    pub fn active_filters(&self) -> impl Iterator<Item = (F, &FilterValue)> + '_ {
        self.filters.iter().map(|(field, value)| (*field, value))
    }

    /// Case-insensitive substring match against any search field. An empty
    /// term matches every record.
    pub fn matches_search<E: Entity<Filter = F>>(&self, entity: &E) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        entity
            .search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn matches_filters<E: Entity<Filter = F>>(&self, entity: &E) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| value.matches(&entity.filter_value(*field)))
    }

    pub fn matches<E: Entity<Filter = F>>(&self, entity: &E) -> bool {
        self.matches_search(entity) && self.matches_filters(entity)
    }
}

/// Derives the visible sequence: every record passing the search predicate
/// and all active filters, in input order.
pub fn compute_visible<'a, E, I>(entities: I, query: &ListQuery<E::Filter>) -> Vec<&'a E>
where
    E: Entity,
    I: IntoIterator<Item = &'a E>,
{
    entities
        .into_iter()
        .filter(|entity| query.matches(*entity))
        .collect()
}
