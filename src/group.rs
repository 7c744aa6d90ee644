/// The number of groups a pattern's text declares, as far as substitution
/// is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupCount {
    Groups(usize),
    /// The text has mismatched parentheses.
    Unbalanced,
}

impl GroupCount {
    /// Counts the groups declared by `text`.
    ///
    /// Only leaf groups are counted: a `)` counts when the most recent
    /// parenthesis before it was a `(`. So `(a)(b)` and `((a)(b))` both
    /// declare two groups. Substitution expects exactly this many
    /// backreferences, so the count must not be "corrected" for nesting.
    ///
    /// Every parenthesis in the text takes part, escaped or not.
    pub fn of(text: &str) -> GroupCount {
        let mut count = 0;
        let mut depth: isize = 0;
        let mut open = false;
        for b in text.bytes() {
            match b {
                b'(' => {
                    open = true;
                    depth += 1;
                }
                b')' => {
                    if open {
                        count += 1;
                    }
                    depth -= 1;
                    open = false;
                }
                _ => {}
            }
        }
        if depth == 0 {
            GroupCount::Groups(count)
        } else {
            GroupCount::Unbalanced
        }
    }

    /// Returns the count, or `None` when the text is unbalanced.
    pub fn get(self) -> Option<usize> {
        match self {
            GroupCount::Groups(n) => Some(n),
            GroupCount::Unbalanced => None,
        }
    }
}
