//! # Filter facets for the user table
//!
//! Three independent multi-select dimensions: account type, status and gender.
//! Each holds the set of selected option codes. Updating one facet replaces
//! only that facet's set and leaves the other two alone.
//!
//! The selection lives in view state only. It is not sent with the user page
//! query.

use std::collections::BTreeSet;

/// One selectable filter dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    AccountType,
    Status,
    Gender,
}

/// A choice inside a facet: a display name and the code stored in the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FacetOption {
    pub name: &'static str,
    pub code: &'static str,
}

const ACCOUNT_TYPE_OPTIONS: &[FacetOption] = &[
    FacetOption { name: "Premium", code: "1" },
    FacetOption { name: "Standard", code: "2" },
];

const STATUS_OPTIONS: &[FacetOption] = &[
    FacetOption { name: "Suspended", code: "1" },
    FacetOption { name: "Flagged", code: "2" },
];

const GENDER_OPTIONS: &[FacetOption] = &[
    FacetOption { name: "Male", code: "1" },
    FacetOption { name: "Female", code: "2" },
    FacetOption { name: "Transgender", code: "3" },
];

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::AccountType, Facet::Status, Facet::Gender];

    pub fn options(self) -> &'static [FacetOption] {
        match self {
            Facet::AccountType => ACCOUNT_TYPE_OPTIONS,
            Facet::Status => STATUS_OPTIONS,
            Facet::Gender => GENDER_OPTIONS,
        }
    }

    /// Text shown on the closed multi-select when nothing is picked.
    pub fn placeholder(self) -> &'static str {
        match self {
            Facet::AccountType => "Account type",
            Facet::Status => "Status",
            Facet::Gender => "Gender",
        }
    }

    /// Text on the closed multi-select: the placeholder when nothing is picked,
    /// the picked names in catalogue order, or a count once more than
    /// `max_labels` are picked.
    pub fn summary(self, selected: &BTreeSet<String>, max_labels: usize) -> String {
        if selected.is_empty() {
            return self.placeholder().to_string();
        }
        if selected.len() > max_labels {
            return format!("{} items selected", selected.len());
        }
        self.options()
            .iter()
            .filter(|opt| selected.contains(opt.code))
            .map(|opt| opt.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Look up the display name of an option code.
    pub fn option_name(self, code: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|opt| opt.code == code)
            .map(|opt| opt.name)
    }
}

/// Selected codes per facet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub account_type: BTreeSet<String>,
    pub status: BTreeSet<String>,
    pub gender: BTreeSet<String>,
}

impl FilterState {
    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::AccountType => &self.account_type,
            Facet::Status => &self.status,
            Facet::Gender => &self.gender,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::AccountType => &mut self.account_type,
            Facet::Status => &mut self.status,
            Facet::Gender => &mut self.gender,
        }
    }

    /// Copy of `self` with `facet` replaced by `codes`. Unknown codes are dropped.
    pub fn with_selection<I, S>(&self, facet: Facet, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next = self.clone();
        *next.selected_mut(facet) = codes
            .into_iter()
            .map(Into::into)
            .filter(|code| facet.option_name(code).is_some())
            .collect();
        next
    }

    /// Add `code` if absent, remove it if present.
    pub fn toggle(&mut self, facet: Facet, code: &str) {
        if facet.option_name(code).is_none() {
            return;
        }
        let set = self.selected_mut(facet);
        if !set.remove(code) {
            set.insert(code.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        Facet::ALL.iter().all(|f| self.selected(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Label for a closed multi-select on `facet`.
    pub fn summary(&self, facet: Facet, max_labels: usize) -> String {
        facet.summary(self.selected(facet), max_labels)
    }
}
