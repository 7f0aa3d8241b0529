//! Search filters.
//!
//! A [`SearchFilter`] is a case-insensitive "contains" predicate built from an
//! optional query string. An absent or empty query matches everything. The
//! per-entity search types combine one or more filters over entity fields and
//! are deserialized straight from request query strings.

use serde::Deserialize;

use crate::car::CarWithManufacturer;
use crate::driver::Driver;
use crate::manufacturer::Manufacturer;

/// Case-insensitive substring filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    needle: Option<String>,
}

impl SearchFilter {
    pub fn new(raw: Option<&str>) -> Self {
        let needle = raw.filter(|q| !q.is_empty()).map(str::to_owned);
        Self { needle }
    }

    pub fn from_query(raw: &Option<String>) -> Self {
        Self::new(raw.as_deref())
    }

    /// True when the filter narrows results at all.
    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn matches(&self, value: &str) -> bool {
        match &self.needle {
            Some(needle) => value.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }

    /// Keep the items whose `field` matches, preserving order.
    pub fn apply<T, F>(&self, items: Vec<T>, field: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        if !self.is_active() {
            return items;
        }
        items.into_iter().filter(|item| self.matches(field(item))).collect()
    }

    /// SQL `LIKE` pattern escaped with `\`. Case is kept as typed; the store
    /// folds it to match its own case-insensitive comparison.
    pub fn like_pattern(&self) -> Option<String> {
        self.needle.as_ref().map(|needle| {
            let escaped = needle
                .replace('\\', r"\\")
                .replace('%', r"\%")
                .replace('_', r"\_");
            format!("%{}%", escaped)
        })
    }
}

/// Search over a collection of `T`.
pub trait Search<T> {
    fn matches(&self, item: &T) -> bool;

    /// Matching subsequence of `items`, in input order.
    fn apply(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

/// `?manufacturer=` filters on manufacturer name.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
pub struct ManufacturerSearch {
    pub manufacturer: Option<String>,
}

impl ManufacturerSearch {
    pub fn name(&self) -> SearchFilter {
        SearchFilter::from_query(&self.manufacturer)
    }
}

impl Search<Manufacturer> for ManufacturerSearch {
    fn matches(&self, item: &Manufacturer) -> bool {
        self.name().matches(&item.name)
    }
}

/// `?car=` filters on model, `?manufacturer=` on the manufacturer's name.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
pub struct CarSearch {
    pub car: Option<String>,
    pub manufacturer: Option<String>,
}

impl CarSearch {
    pub fn model(&self) -> SearchFilter {
        SearchFilter::from_query(&self.car)
    }

    pub fn manufacturer_name(&self) -> SearchFilter {
        SearchFilter::from_query(&self.manufacturer)
    }
}

impl Search<CarWithManufacturer> for CarSearch {
    fn matches(&self, item: &CarWithManufacturer) -> bool {
        self.model().matches(&item.car.model)
            && self.manufacturer_name().matches(&item.manufacturer.name)
    }
}

/// `?username=` and `?first_name=` filter their own fields; `?driver=`
/// matches either of them.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
pub struct DriverSearch {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub driver: Option<String>,
}

impl DriverSearch {
    pub fn username(&self) -> SearchFilter {
        SearchFilter::from_query(&self.username)
    }

    pub fn first_name(&self) -> SearchFilter {
        SearchFilter::from_query(&self.first_name)
    }

    pub fn any_name(&self) -> SearchFilter {
        SearchFilter::from_query(&self.driver)
    }
}

impl Search<Driver> for DriverSearch {
    fn matches(&self, item: &Driver) -> bool {
        let any = self.any_name();
        self.username().matches(&item.username)
            && self.first_name().matches(&item.first_name)
            && (any.matches(&item.username) || any.matches(&item.first_name))
    }
}
