use crate::flags::Flags;

/// Flag names exported to a host, in export order.
pub static FLAGS: [(&str, Flags); 6] = [
    ("EXTENDED", Flags::EXTENDED),
    ("ICASE", Flags::ICASE),
    ("NOSUB", Flags::NOSUB),
    ("NEWLINE", Flags::NEWLINE),
    ("NOTBOL", Flags::NOTBOL),
    ("NOTEOL", Flags::NOTEOL),
];

/// `major * 100 + minor * 10 + patch`
pub const VERSION_NUMBER: u32 = 101;
pub const VERSION_STRING: &str = "1.0.1";

/// Looks up an exported flag by name.
pub fn flag(name: &str) -> Option<Flags> {
    FLAGS.iter().find(|(n, _)| *n == name).map(|&(_, f)| f)
}
