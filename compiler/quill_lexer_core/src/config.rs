//! Scanner limits.

/// Default maximum number of simultaneously open f-strings.
pub const DEFAULT_MAX_FSTRING_DEPTH: usize = 150;

/// Default maximum format-spec nesting: `{a:{b:{c}}}` is depth 2.
pub const DEFAULT_MAX_FORMAT_SPEC_DEPTH: usize = 2;

/// Nesting ceilings enforced by the scanner.
///
/// Exceeding either produces a `TooDeeplyNested` token instead of
/// recursing further.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScanConfig {
    /// f-strings open at once, counting the outermost.
    pub max_fstring_depth: usize,
    /// Fields nested inside format specs of one f-string.
    pub max_format_spec_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            max_fstring_depth: DEFAULT_MAX_FSTRING_DEPTH,
            max_format_spec_depth: DEFAULT_MAX_FORMAT_SPEC_DEPTH,
        }
    }
}
