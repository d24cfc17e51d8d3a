use crate::option::SelectOption;

/// The caller-owned selection, tagged by mode.
///
/// Widgets never mutate a `Selection`. They compute the next one (see [`Selection::toggled`] and
/// [`Selection::cleared`]) and hand it back as a change request; the app stores it and passes it
/// in again on the next frame. Every derived selection has the same variant as its source, so a
/// single-mode widget can never produce a multi-mode value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Single(Option<SelectOption>),
    /// Selected options in the order they were picked, without duplicates.
    Multiple(Vec<SelectOption>),
}

impl Default for Selection {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl Selection {
    pub fn single(option: Option<SelectOption>) -> Self {
        Self::Single(option)
    }

    pub fn multiple(options: Vec<SelectOption>) -> Self {
        let mut deduped: Vec<SelectOption> = Vec::with_capacity(options.len());
        for opt in options {
            if !deduped.iter().any(|o| o.same_as(&opt)) {
                deduped.push(opt);
            }
        }
        Self::Multiple(deduped)
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    pub fn is_empty(&self) -> bool {
        self.selected().is_empty()
    }

    /// Selected options in display order.
    pub fn selected(&self) -> &[SelectOption] {
        match self {
            Self::Single(opt) => opt.as_slice(),
            Self::Multiple(opts) => opts,
        }
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        match self {
            Self::Single(opt) => opt.as_ref().is_some_and(|o| o.same_as(option)),
            Self::Multiple(opts) => opts.iter().any(|o| o.same_as(option)),
        }
    }

    /// The selection that results from picking `option`, or `None` when nothing changes.
    ///
    /// Single mode replaces the value (re-picking the current value is not a change). Multiple
    /// mode toggles membership: a present option is removed with the rest keeping their order,
    /// an absent one is appended.
    pub fn toggled(&self, option: &SelectOption) -> Option<Selection> {
        match self {
            Self::Single(current) => {
                if current.as_ref().is_some_and(|o| o.same_as(option)) {
                    None
                } else {
                    Some(Self::Single(Some(option.clone())))
                }
            }
            Self::Multiple(current) => {
                if current.iter().any(|o| o.same_as(option)) {
                    Some(Self::Multiple(
                        current
                            .iter()
                            .filter(|o| !o.same_as(option))
                            .cloned()
                            .collect(),
                    ))
                } else {
                    let mut next = current.clone();
                    next.push(option.clone());
                    Some(Self::Multiple(next))
                }
            }
        }
    }

    /// The empty selection of the same mode.
    pub fn cleared(&self) -> Selection {
        match self {
            Self::Single(_) => Self::Single(None),
            Self::Multiple(_) => Self::Multiple(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn opt(label: &str, value: i64) -> SelectOption {
        SelectOption::new(label, value)
    }

    #[test]
    fn single_reselect_is_not_a_change() {
        let s = Selection::single(Some(opt("first", 1)));
        assert_eq!(s.toggled(&opt("first", 1)), None);
        assert_eq!(
            s.toggled(&opt("second", 2)),
            Some(Selection::Single(Some(opt("second", 2))))
        );
    }

    #[test]
    fn multiple_toggle_removes_in_place_and_appends_at_end() {
        let s = Selection::multiple(vec![opt("first", 1), opt("third", 3), opt("fifth", 5)]);
        assert_eq!(
            s.toggled(&opt("third", 3)),
            Some(Selection::Multiple(vec![opt("first", 1), opt("fifth", 5)]))
        );
        assert_eq!(
            s.toggled(&opt("second", 2)),
            Some(Selection::Multiple(vec![
                opt("first", 1),
                opt("third", 3),
                opt("fifth", 5),
                opt("second", 2),
            ]))
        );
    }

    #[test]
    fn cleared_keeps_the_mode() {
        assert_eq!(
            Selection::single(Some(opt("first", 1))).cleared(),
            Selection::Single(None)
        );
        assert_eq!(
            Selection::multiple(vec![opt("first", 1)]).cleared(),
            Selection::Multiple(Vec::new())
        );
    }

    #[test]
    fn membership_uses_value_key() {
        let s = Selection::multiple(vec![opt("first", 1)]);
        assert!(s.is_selected(&opt("first", 1)));
        assert!(!s.is_selected(&opt("first", 9)));
        assert!(!Selection::default().is_selected(&opt("first", 1)));
    }

    #[test]
    fn multiple_constructor_drops_duplicates() {
        let s = Selection::multiple(vec![opt("a", 1), opt("b", 2), opt("a", 1)]);
        assert_eq!(s.selected(), &[opt("a", 1), opt("b", 2)]);
    }
}
