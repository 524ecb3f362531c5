//! POSIX character class table.
//!
//! Maps the class names rsync rules may reference through `[[:NAME:]]`
//! tokens to explicit ASCII bracket expressions. The table is process-wide
//! constant state: initialised at compile time, never mutated, safe for
//! unsynchronised concurrent reads.

/// Bracket expressions for the standard POSIX classes, ASCII ranges only.
const POSIX_CLASSES: &[(&str, &str)] = &[
    ("alnum", "[a-zA-Z0-9]"),
    ("alpha", "[a-zA-Z]"),
    ("ascii", "[\\x00-\\x7F]"),
    ("blank", "[ \\t]"),
    ("cntrl", "[\\x00-\\x1F\\x7F]"),
    ("digit", "[0-9]"),
    ("graph", "[\\x21-\\x7E]"),
    ("lower", "[a-z]"),
    ("print", "[\\x20-\\x7E]"),
    ("punct", "[!\"\\#$%&'()*+,\\-./:;<=>?@\\[\\\\\\]^_`{|}~]"),
    ("space", "[ \\t\\r\\n\\v\\f]"),
    ("upper", "[A-Z]"),
    ("word", "[A-Za-z0-9_]"),
    ("xdigit", "[A-Fa-f0-9]"),
];

/// Looks up the bracket expression for `name`, case-insensitively.
pub(crate) fn lookup(name: &str) -> Option<&'static str> {
    POSIX_CLASSES
        .iter()
        .find(|(class, _)| class.eq_ignore_ascii_case(name))
        .map(|(_, expression)| *expression)
}
