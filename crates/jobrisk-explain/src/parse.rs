//! Transformed-feature name parsing.
//!
//! The transformer emits names on the grammar
//!
//! ```text
//! name     = blockId "__" field [ "_" suffix ]
//! blockId  = any characters not containing "__"
//! field    = survey variable identifier, free of underscores
//! suffix   = category code for one-hot columns
//! ```
//!
//! This module is the single place that grammar is reversed. The parse is
//! total: a name that does not match the convention maps to itself, so no
//! contribution is ever dropped for having an unexpected shape.

/// Separator between the block id and the rest of a feature name.
const BLOCK_SEPARATOR: &str = "__";

/// Extract the original survey variable identifier from a transformed
/// feature name.
///
/// Returns the segment between the first `"__"` and the next `'_'`; for a
/// numeric pass-through (`num__agea`) that is the whole remainder. Names
/// without a block separator, and degenerate names whose remainder starts
/// with an underscore or is empty, are returned unchanged.
///
/// # Examples
///
/// ```
/// use jobrisk_explain::original_variable;
///
/// assert_eq!(original_variable("cat__gndr_2"), "gndr");
/// assert_eq!(original_variable("num__agea"), "agea");
/// assert_eq!(original_variable("unconventional"), "unconventional");
/// ```
pub fn original_variable(name: &str) -> &str {
    let Some((_, rest)) = name.split_once(BLOCK_SEPARATOR) else {
        return name;
    };
    let identifier = rest.split('_').next().unwrap_or(rest);
    if identifier.is_empty() {
        name
    } else {
        identifier
    }
}
