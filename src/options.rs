use crate::error::Result;
use crate::flags::Flags;
use crate::pattern::Pattern;

/// A configurable builder for a pattern.
///
/// A builder can be used to configure how the pattern is compiled, for
/// example, by setting flags or limits.
#[derive(Clone, Debug)]
pub struct Options {
    pub pattern: String,
    pub flags: Flags,
    /// Set the approximate size limit of the compiled pattern.
    ///
    /// This roughly corresponds to the number of bytes occupied by a single
    /// compiled program. If the program exceeds this number, then a
    /// compilation error is returned.
    pub size_limit: usize,
    /// Set the nesting limit for the parser.
    ///
    /// The nesting limit controls how deep the abstract syntax tree is allowed
    /// to be. If the AST exceeds the given limit (e.g., with too many nested
    /// groups), then an error is returned by the parser.
    ///
    /// Note that a nest limit of `0` will return a nest limit error for most
    /// patterns but not all. For example, a nest limit of `0` permits `a` but
    /// not `ab`, since `ab` requires a concatenation, which results in a nest
    /// depth of `1`.
    pub nest_limit: u32,
}

impl Options {
    /// Create a new builder with the given pattern text and the default
    /// flags (`EXTENDED`).
    ///
    /// If the pattern is invalid, then an error will be returned when
    /// `build` is called.
    pub fn new(pattern: &str) -> Self {
        Options {
            pattern: pattern.to_owned(),
            flags: Flags::default(),
            size_limit: 10 * (1 << 20),
            nest_limit: 250,
        }
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn size_limit(mut self, limit: usize) -> Self {
        self.size_limit = limit;
        self
    }

    pub fn nest_limit(mut self, limit: u32) -> Self {
        self.nest_limit = limit;
        self
    }

    /// Consume the builder and compile the pattern.
    ///
    /// Note that calling `as_str` on the resulting `Pattern` will produce
    /// the text given to `new` verbatim, before any syntax translation.
    pub fn build(self) -> Result<Pattern> {
        Pattern::from_options(self)
    }
}
