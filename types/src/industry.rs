//! Industry catalog and the multi-select adapter over it.
//!
//! The catalog is fixed and ordered. A selection is a subset of it, stored as
//! a bitmask over catalog positions, so membership outside the catalog is
//! unrepresentable and iteration always follows catalog order.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// The selectable industries, in display order.
pub const INDUSTRY_CATALOG: [&str; 24] = [
    "Agriculture",
    "Apparel",
    "Automotives",
    "Beverages & drinks",
    "Chemicals & Chemical Products",
    "Cleaning products",
    "Construction",
    "Energy",
    "Food products",
    "Forestry & logging",
    "Personal care products",
    "Jewelry & related articles",
    "Laundry & dry-cleaning",
    "Livestock",
    "Materials recovery & recycling",
    "Paper & paper products",
    "Pet Care",
    "Processed products",
    "Restaurants & food service",
    "Rubber & plastics products",
    "Sports & yoga goods",
    "Supplements",
    "Textiles",
    "Wood & wood products",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown industry: {0:?}")]
pub struct UnknownIndustry(pub String);

/// A single catalog entry, identified by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Industry(u8);

impl Industry {
    /// Every catalog entry in catalog order.
    pub fn all() -> impl DoubleEndedIterator<Item = Industry> + ExactSizeIterator + Clone {
        (0..INDUSTRY_CATALOG.len()).map(|idx| Industry(idx as u8))
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < INDUSTRY_CATALOG.len()).then_some(Industry(index as u8))
    }

    /// Catalog entry at `index`, clamped to the last entry.
    #[must_use]
    pub fn from_index_saturating(index: usize) -> Self {
        Industry(index.min(INDUSTRY_CATALOG.len() - 1) as u8)
    }

    /// Exact, case-sensitive lookup of a catalog label.
    pub fn parse(label: &str) -> Result<Self, UnknownIndustry> {
        INDUSTRY_CATALOG
            .iter()
            .position(|entry| *entry == label)
            .and_then(Self::from_index)
            .ok_or_else(|| UnknownIndustry(label.to_string()))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        INDUSTRY_CATALOG[self.0 as usize]
    }

    const fn bit(self) -> u32 {
        1 << self.0
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{value, label}` option for the multi-select widget. Value and label
/// are the same catalog string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndustryOption {
    industry: Industry,
}

impl IndustryOption {
    #[must_use]
    pub const fn new(industry: Industry) -> Self {
        Self { industry }
    }

    #[must_use]
    pub const fn value(self) -> &'static str {
        self.industry.as_str()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.industry.as_str()
    }

    #[must_use]
    pub const fn industry(self) -> Industry {
        self.industry
    }
}

/// All catalog entries as widget options.
pub fn industry_options() -> impl DoubleEndedIterator<Item = IndustryOption> + ExactSizeIterator + Clone
{
    Industry::all().map(IndustryOption::new)
}

/// The set of currently selected industries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndustrySelection(u32);

impl IndustrySelection {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build a selection from catalog labels, rejecting anything outside it.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, UnknownIndustry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::empty();
        for label in labels {
            selection.insert(Industry::parse(label.as_ref())?);
        }
        Ok(selection)
    }

    #[must_use]
    pub const fn contains(self, industry: Industry) -> bool {
        self.0 & industry.bit() != 0
    }

    pub fn insert(&mut self, industry: Industry) {
        self.0 |= industry.bit();
    }

    pub fn remove(&mut self, industry: Industry) {
        self.0 &= !industry.bit();
    }

    /// Flip membership of one industry.
    pub fn toggle(&mut self, industry: Industry) {
        self.0 ^= industry.bit();
    }

    /// Replace the whole selection with the values of the chosen options.
    pub fn replace_with<I>(&mut self, chosen: I)
    where
        I: IntoIterator<Item = IndustryOption>,
    {
        *self = chosen.into_iter().map(IndustryOption::industry).collect();
    }

    /// The subset of catalog options that are currently selected, in catalog order.
    pub fn selected_options(self) -> impl Iterator<Item = IndustryOption> + Clone {
        industry_options().filter(move |option| self.contains(option.industry()))
    }

    /// Selected industries in catalog order.
    pub fn iter(self) -> impl Iterator<Item = Industry> + Clone {
        Industry::all().filter(move |industry| self.contains(*industry))
    }

    #[must_use]
    pub fn labels(self) -> Vec<&'static str> {
        self.iter().map(Industry::as_str).collect()
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Industry> for IndustrySelection {
    fn from_iter<T: IntoIterator<Item = Industry>>(iter: T) -> Self {
        let mut selection = Self::empty();
        for industry in iter {
            selection.insert(industry);
        }
        selection
    }
}

/// Serialized as an ordered list of catalog labels.
impl Serialize for IndustrySelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for industry in self.iter() {
            seq.serialize_element(industry.as_str())?;
        }
        seq.end()
    }
}
