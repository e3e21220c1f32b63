// ============================================================================
// Words Module
// English spelling of unsigned integers
// ============================================================================

mod formatter;

pub use formatter::to_words;

pub(crate) use formatter::capitalize_first;
