/// Nesting limit used when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings for a single [`parse_json_with`](crate::parse_json_with) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested objects and arrays, the root object included.
    pub max_depth: usize,
}

impl ParseOptions {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth() {
        assert_eq!(ParseOptions::default().max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_with_max_depth() {
        let options = ParseOptions::new().with_max_depth(4);
        assert_eq!(options.max_depth, 4);
    }
}
