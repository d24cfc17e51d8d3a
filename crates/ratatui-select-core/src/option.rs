//! Selectable options and the ordered catalog they live in.

use std::collections::HashMap;

/// One selectable entry: display text plus a value that identifies it within its [`Catalog`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub label: String,
    pub value: i64,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Whether `self` and `other` denote the same catalog entry.
    ///
    /// Identity is the `value` key, so an option rebuilt from the same label/value pair is the
    /// same option.
    pub fn same_as(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate option value {value}: {first:?} and {second:?}")]
    DuplicateValue {
        value: i64,
        first: String,
        second: String,
    },
}

/// Ordered options; order is both display order and keyboard-navigation order.
///
/// Values are unique, which is what lets selections compare options by key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    options: Vec<SelectOption>,
}

impl Catalog {
    pub fn new(options: Vec<SelectOption>) -> Result<Self, CatalogError> {
        let mut seen: HashMap<i64, usize> = HashMap::with_capacity(options.len());
        for (i, opt) in options.iter().enumerate() {
            if let Some(&prev) = seen.get(&opt.value) {
                return Err(CatalogError::DuplicateValue {
                    value: opt.value,
                    first: options[prev].label.clone(),
                    second: opt.label.clone(),
                });
            }
            seen.insert(opt.value, i);
        }
        Ok(Self { options })
    }

    /// Builds a catalog from `(label, value)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(label, value)| SelectOption::new(label, value))
                .collect(),
        )
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Index of the option carrying `value`.
    pub fn position(&self, value: i64) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }
}

impl TryFrom<Vec<SelectOption>> for Catalog {
    type Error = CatalogError;

    fn try_from(options: Vec<SelectOption>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
