use std::cmp::{Ordering, Reverse};

/// Wildcard statistics of a pattern, used to pick the most specific of
/// several patterns matching the same path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpecificity<'a> {
    pattern: &'a str,
    uri_vars: usize,
    single_wildcards: usize,
    double_wildcards: usize,
    catch_all: bool,
    prefix_pattern: bool,
    length: usize,
}

impl<'a> PatternSpecificity<'a> {
    pub fn new(pattern: &'a str) -> Self {
        let catch_all = pattern == "/**";
        let prefix_pattern = !catch_all && pattern.ends_with("/**");

        let mut uri_vars = 0;
        let mut single_wildcards = 0;
        let mut double_wildcards = 0;
        let mut length = 0;
        let mut in_var = false;

        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    uri_vars += 1;
                    in_var = true;
                }
                '}' if in_var => {
                    // A variable counts as one character
                    in_var = false;
                    length += 1;
                    continue;
                }
                '*' if !in_var => {
                    if chars.peek() == Some(&'*') {
                        chars.next();
                        double_wildcards += 1;
                        length += 2;
                        continue;
                    }
                    single_wildcards += 1;
                }
                _ => {}
            }
            if !in_var {
                length += 1;
            }
        }

        Self {
            pattern,
            uri_vars,
            single_wildcards,
            double_wildcards,
            catch_all,
            prefix_pattern,
            length,
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern
    }

    fn total_count(&self) -> usize {
        self.uri_vars + self.single_wildcards + 2 * self.double_wildcards
    }

    /// Orders `self` before `other` when it is the more specific match for `path`.
    ///
    /// Ranks by catch-all, exact match, prefix pattern, wildcard count,
    /// length, single wildcards, variables, then the pattern text, so the
    /// order is total and independent of the order patterns are visited in.
    pub fn compare(&self, other: &Self, path: &str) -> Ordering {
        self.rank(path).cmp(&other.rank(path))
    }

    fn rank(&self, path: &str) -> (bool, bool, bool, usize, Reverse<usize>, usize, usize, &'a str) {
        (
            self.catch_all,
            self.pattern != path,
            self.prefix_pattern,
            self.total_count(),
            Reverse(self.length),
            self.single_wildcards,
            self.uri_vars,
            self.pattern,
        )
    }
}
