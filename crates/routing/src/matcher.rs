use crate::comparator::PatternSpecificity;
use std::cmp::Ordering;

const SEPARATOR: char = '/';

/// Glob-style path matching used to associate request paths with handlers
pub trait PathMatcher: Send + Sync {
    /// Whether the path contains wildcards or variables
    fn is_pattern(&self, path: &str) -> bool;

    /// Whether the whole path matches the pattern
    fn matches(&self, pattern: &str, path: &str) -> bool;

    /// Returns the part of the path matched by the wildcard portion of the
    /// pattern, or an empty string when the pattern is a literal path
    fn extract_path_within_pattern(&self, pattern: &str, path: &str) -> String;

    /// Orders two patterns matching `path`, most specific first
    fn compare_patterns(&self, path: &str, a: &str, b: &str) -> Ordering;
}

/// Ant-style path patterns.
///
/// - `?` matches one character
/// - `*` matches zero or more characters within a segment
/// - `**` matches zero or more segments
/// - `{name}` matches a segment like `*`
#[derive(Debug, Default, Clone, Copy)]
pub struct AntPathMatcher;

impl AntPathMatcher {
    pub fn new() -> Self {
        Self
    }

    fn do_match(&self, pattern: &str, path: &str) -> bool {
        if path.starts_with(SEPARATOR) != pattern.starts_with(SEPARATOR) {
            return false;
        }

        let patt = tokenize(pattern);
        let dirs = tokenize(path);

        let mut patt_start: isize = 0;
        let mut patt_end: isize = patt.len() as isize - 1;
        let mut path_start: isize = 0;
        let mut path_end: isize = dirs.len() as isize - 1;

        // Everything up to the first '**'
        while patt_start <= patt_end && path_start <= path_end {
            let segment = patt[patt_start as usize];
            if segment == "**" {
                break;
            }
            if !match_segment(segment, dirs[path_start as usize]) {
                return false;
            }
            patt_start += 1;
            path_start += 1;
        }

        if path_start > path_end {
            // Path exhausted
            if patt_start > patt_end {
                return pattern.ends_with(SEPARATOR) == path.ends_with(SEPARATOR);
            }
            if patt_start == patt_end && patt[patt_start as usize] == "*" && path.ends_with(SEPARATOR) {
                return true;
            }
            return only_double_wildcards(&patt, patt_start, patt_end);
        } else if patt_start > patt_end {
            // Pattern exhausted but path is not
            return false;
        }

        // Everything after the last '**'
        while patt_start <= patt_end && path_start <= path_end {
            let segment = patt[patt_end as usize];
            if segment == "**" {
                break;
            }
            if !match_segment(segment, dirs[path_end as usize]) {
                return false;
            }
            patt_end -= 1;
            path_end -= 1;
        }

        if path_start > path_end {
            return only_double_wildcards(&patt, patt_start, patt_end);
        }

        // Literal runs between '**' must appear in order
        while patt_start != patt_end && path_start <= path_end {
            let next_double = ((patt_start + 1)..=patt_end)
                .find(|&i| patt[i as usize] == "**")
                .unwrap_or(patt_end);

            if next_double == patt_start + 1 {
                // '**/**' collapses
                patt_start += 1;
                continue;
            }

            let run_len = next_double - patt_start - 1;
            let remaining = path_end - path_start + 1;
            let mut found: Option<isize> = None;

            'search: for offset in 0..=(remaining - run_len) {
                for j in 0..run_len {
                    let segment = patt[(patt_start + j + 1) as usize];
                    let dir = dirs[(path_start + offset + j) as usize];
                    if !match_segment(segment, dir) {
                        continue 'search;
                    }
                }
                found = Some(path_start + offset);
                break;
            }

            match found {
                Some(index) => {
                    patt_start = next_double;
                    path_start = index + run_len;
                }
                None => return false,
            }
        }

        only_double_wildcards(&patt, patt_start, patt_end)
    }
}

impl PathMatcher for AntPathMatcher {
    fn is_pattern(&self, path: &str) -> bool {
        path.contains('*') || path.contains('?') || path.contains('{')
    }

    fn matches(&self, pattern: &str, path: &str) -> bool {
        self.do_match(pattern, path)
    }

    fn extract_path_within_pattern(&self, pattern: &str, path: &str) -> String {
        let pattern_parts = tokenize(pattern);
        let path_parts = tokenize(path);

        let first_wildcard = pattern_parts
            .iter()
            .position(|part| part.contains('*') || part.contains('?'));

        let Some(start) = first_wildcard else {
            return String::new();
        };

        let mut within = String::new();
        for (index, part) in path_parts.iter().enumerate().skip(start) {
            // Relative patterns keep the path's leading separator
            if index > start || (start == 0 && !pattern.starts_with(SEPARATOR)) {
                within.push(SEPARATOR);
            }
            within.push_str(part);
        }

        within
    }

    fn compare_patterns(&self, path: &str, a: &str, b: &str) -> Ordering {
        PatternSpecificity::new(a).compare(&PatternSpecificity::new(b), path)
    }
}

fn tokenize(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).collect()
}

fn only_double_wildcards(patt: &[&str], from: isize, to: isize) -> bool {
    (from..=to).all(|i| patt[i as usize] == "**")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyOne,
    AnyRun,
}

fn compile_segment(segment: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(segment.len());
    let mut chars = segment.chars();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
            }
            '?' => tokens.push(Token::AnyOne),
            '{' => {
                // Variable: consume up to the closing brace
                for inner in chars.by_ref() {
                    if inner == '}' {
                        break;
                    }
                }
                if tokens.last() != Some(&Token::AnyRun) {
                    tokens.push(Token::AnyRun);
                }
            }
            other => tokens.push(Token::Literal(other)),
        }
    }

    tokens
}

/// Matches a single path segment against a segment pattern
fn match_segment(pattern: &str, segment: &str) -> bool {
    if pattern == segment {
        return true;
    }

    let tokens = compile_segment(pattern);
    let text: Vec<char> = segment.chars().collect();

    let (mut t, mut s) = (0usize, 0usize);
    let mut backtrack: Option<(usize, usize)> = None;

    while s < text.len() {
        match tokens.get(t) {
            Some(Token::Literal(c)) if *c == text[s] => {
                t += 1;
                s += 1;
            }
            Some(Token::AnyOne) => {
                t += 1;
                s += 1;
            }
            Some(Token::AnyRun) => {
                backtrack = Some((t, s));
                t += 1;
            }
            _ => match backtrack {
                Some((star_t, star_s)) => {
                    t = star_t + 1;
                    s = star_s + 1;
                    backtrack = Some((star_t, star_s + 1));
                }
                None => return false,
            },
        }
    }

    tokens[t..].iter().all(|token| *token == Token::AnyRun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        AntPathMatcher::new().matches(pattern, path)
    }

    fn extract(pattern: &str, path: &str) -> String {
        AntPathMatcher::new().extract_path_within_pattern(pattern, path)
    }

    #[test]
    fn test_literal_paths() {
        assert!(matches("/test", "/test"));
        assert!(matches("test", "test"));
        assert!(!matches("/test.jpg", "test.jpg"));
        assert!(!matches("test", "/test"));
        assert!(!matches("/test", "/test/"));
        assert!(matches("/test/", "/test/"));
    }

    #[test]
    fn test_single_char_and_segment_wildcards() {
        assert!(matches("t?st", "test"));
        assert!(matches("??st", "test"));
        assert!(!matches("tes?", "tes"));
        assert!(!matches("tes?", "testt"));

        assert!(matches("*", "test"));
        assert!(matches("test*", "test"));
        assert!(matches("test*", "testTest"));
        assert!(matches("*.*", "test.test"));
        assert!(matches("*test*", "AnothertestTest"));
        assert!(!matches("test*", "tst"));
        assert!(!matches("test*", "test/"));
        assert!(!matches("*.*", "tsttst"));
        assert!(matches("/*/bla", "/x/bla"));
        assert!(!matches("/*/bla", "/x/y/bla"));
    }

    #[test]
    fn test_double_wildcards() {
        assert!(matches("/resources/**", "/resources/app.js"));
        assert!(matches("/resources/**", "/resources/css/site.css"));
        assert!(matches("/resources/**", "/resources"));
        assert!(matches("/**", "/testing/testing"));
        assert!(matches("/*/**", "/testing/testing"));
        assert!(matches("/bla/**/bla", "/bla/testing/testing/bla"));
        assert!(matches("/bla/**/bla", "/bla/bla"));
        assert!(matches("/**/test", "/bla/bla/test"));
        assert!(matches("/bla*bla/test", "/blaXXXbla/test"));
        assert!(matches("/*bla/test", "/XXXbla/test"));
        assert!(!matches("/bla*bla/test", "/blaXXXbl/test"));
        assert!(!matches("/x/x/**/bla", "/x/x/x/"));
        assert!(matches("/x/x/**/bla", "/x/x/x/y/bla"));
        assert!(matches("/foo/bar/**", "/foo/bar"));
        assert!(matches("/**/*bla", "/bla/bla/bla/bbb/bla"));
        assert!(matches("/*bla*/**/bla/**", "/XXXblaXXXX/testing/testing/bla/testing/testing"));
        assert!(matches("/*bla*/**/bla/*", "/XXXblaXXXX/testing/testing/bla/testing"));
        assert!(!matches("/*bla*/**/bla/**", "/XXXblaXXXX/testing/testing/bl/testing/testing"));
        assert!(!matches("/resources/**", "/static/app.js"));
    }

    #[test]
    fn test_path_variables() {
        assert!(matches("/users/{id}", "/users/42"));
        assert!(matches("/{name}.css", "/site.css"));
        assert!(!matches("/users/{id}", "/users/42/posts"));
        assert!(AntPathMatcher::new().is_pattern("/users/{id}"));
        assert!(!AntPathMatcher::new().is_pattern("/users/42"));
    }

    #[test]
    fn test_extract_path_within_pattern() {
        assert_eq!(extract("/docs/commit.html", "/docs/commit.html"), "");
        assert_eq!(extract("/docs/*", "/docs/cvs/commit"), "cvs/commit");
        assert_eq!(extract("/docs/cvs/*.html", "/docs/cvs/commit.html"), "commit.html");
        assert_eq!(extract("/docs/**", "/docs/cvs/commit"), "cvs/commit");
        assert_eq!(extract("/docs/**/*.html", "/docs/cvs/commit.html"), "cvs/commit.html");
        assert_eq!(extract("/doo/**/*.html", "/doo/commit.html"), "commit.html");
        assert_eq!(extract("/*.html", "/commit.html"), "commit.html");
        assert_eq!(extract("/*.html", "/docs/commit.html"), "docs/commit.html");
        assert_eq!(extract("*.html", "/commit.html"), "/commit.html");
        assert_eq!(extract("**/*.*", "/docs/cvs/commit.html"), "/docs/cvs/commit.html");
        assert_eq!(extract("/d?cs/**", "/docs/cvs/commit"), "docs/cvs/commit");
        assert_eq!(extract("/resources/**", "/resources/app.js"), "app.js");
    }
}
