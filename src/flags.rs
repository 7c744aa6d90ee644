use bitflags::bitflags;

bitflags! {
    /// Options controlling how a pattern is compiled and executed.
    ///
    /// The compile-time values follow the usual POSIX `regcomp` numbering.
    /// `NOTBOL` and `NOTEOL` are execution options in POSIX; they live in the
    /// same set here, shifted past the compile options.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags: u32 {
        /// POSIX extended syntax. Without it the text is basic syntax.
        const EXTENDED = 1;
        /// Case-insensitive matching.
        const ICASE = 1 << 1;
        /// `^` and `$` match at line boundaries and `.` does not match a
        /// newline.
        const NEWLINE = 1 << 2;
        /// Do not report group spans.
        const NOSUB = 1 << 3;
        /// The start of the subject is not the beginning of a line.
        const NOTBOL = 1 << 4;
        /// The end of the subject is not the end of a line.
        const NOTEOL = 1 << 5;
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::EXTENDED
    }
}

impl Flags {
    /// Converts a host integer into a flag set.
    ///
    /// Negative values and values wider than 32 bits are rejected; unknown
    /// bits are dropped.
    pub fn from_host(value: i64) -> Option<Flags> {
        u32::try_from(value).ok().map(Flags::from_bits_truncate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_extended() {
        assert_eq!(Flags::default(), Flags::EXTENDED);
    }

    #[test]
    fn host_values() {
        assert_eq!(Flags::from_host(3), Some(Flags::EXTENDED | Flags::ICASE));
        assert_eq!(Flags::from_host(1 << 10), Some(Flags::empty()));
        assert_eq!(Flags::from_host(-1), None);
        assert_eq!(Flags::from_host(i64::MAX), None);
    }
}
