//! In-memory filtering of table snapshots.
//!
//! Filtering never touches the database: a snapshot is read once and each criterion is a
//! predicate over its rows. A criterion that is unset, empty or `"All"` matches everything,
//! active criteria are combined with AND.

pub mod options;


use crate::model::{
    claim::{ClaimDto, ClaimFilter},
    food_listing::{FoodListingDto, FoodListingFilter},
    provider::{ProviderDto, ProviderFilter},
    receiver::{ReceiverDto, ReceiverFilter},
};

/// Value of a select box that disables its filter.
pub static ALL: &str = "All";

/// A snapshot row that can be matched against a set of criteria.
pub trait RowFilter {
    type Criteria;

    fn matches(&self, criteria: &Self::Criteria) -> bool;
}

/// Rows of `snapshot` matching `criteria`, in their original order.
pub fn apply_filter<R>(snapshot: &[R], criteria: &R::Criteria) -> Vec<R>
where
    R: RowFilter + Clone,
{
    snapshot
        .iter()
        .filter(|row| row.matches(criteria))
        .cloned()
        .collect()
}

/// The criterion's value if it should be applied.
fn active(criterion: &Option<String>) -> Option<&str> {
    criterion
        .as_deref()
        .filter(|value| !value.is_empty() && *value != ALL)
}

fn equals(criterion: &Option<String>, value: &str) -> bool {
    active(criterion).is_none_or(|wanted| wanted == value)
}

fn contains_ignore_case(criterion: &Option<String>, value: &str) -> bool {
    active(criterion).is_none_or(|wanted| value.to_lowercase().contains(&wanted.to_lowercase()))
}

impl RowFilter for ProviderDto {
    type Criteria = ProviderFilter;

    fn matches(&self, criteria: &ProviderFilter) -> bool {
        contains_ignore_case(&criteria.name, &self.name)
            && equals(&criteria.provider_id, &self.provider_id.to_string())
    }
}

impl RowFilter for ReceiverDto {
    type Criteria = ReceiverFilter;

    fn matches(&self, criteria: &ReceiverFilter) -> bool {
        contains_ignore_case(&criteria.name, &self.name) && equals(&criteria.city, &self.city)
    }
}

impl RowFilter for FoodListingDto {
    type Criteria = FoodListingFilter;

    fn matches(&self, criteria: &FoodListingFilter) -> bool {
        equals(&criteria.location, &self.location)
            && equals(&criteria.provider_type, &self.provider_type)
            && equals(&criteria.food_type, &self.food_type)
            && equals(&criteria.meal_type, &self.meal_type)
    }
}

impl RowFilter for ClaimDto {
    type Criteria = ClaimFilter;

    fn matches(&self, criteria: &ClaimFilter) -> bool {
        contains_ignore_case(&criteria.receiver_id, &self.receiver_id)
            && contains_ignore_case(&criteria.food_id, &self.food_id)
            && equals(&criteria.status, &self.status)
    }
}
