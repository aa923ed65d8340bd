//! Section scanner for line based mesh formats

use crate::error::{Error, Result};
use std::ops::Range;
use std::str::FromStr;

/// The meaningful lines of a file
///
/// Blank lines and lines starting with `%` are removed once, when the scanner is created. All
/// indices taken by the other methods refer to the remaining lines, so a section header found
/// at index `i` has its records at `i + 1`, `i + 2`, and so on.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    // (1-based line number in the file, trimmed text)
    lines: Vec<(usize, &'a str)>,
    end_line: usize,
}

impl<'a> Scanner<'a> {
    /// Create new
    pub fn new(content: &'a str) -> Self {
        let mut end_line = 1;
        let lines = content
            .lines()
            .enumerate()
            .inspect(|(n, _)| end_line = n + 2)
            .filter(|(_, l)| !l.starts_with('%'))
            .map(|(n, l)| (n + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        Self { lines, end_line }
    }

    /// Number of meaningful lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Index of the first line starting with `keyword`
    pub fn find(&self, keyword: &str) -> Option<usize> {
        self.lines.iter().position(|(_, l)| l.starts_with(keyword))
    }

    /// Index of the first line starting with `keyword`, which must be present
    pub fn require(&self, keyword: &str) -> Result<usize> {
        self.find(keyword)
            .ok_or_else(|| Error::MissingSection(String::from(keyword)))
    }

    /// Line number in the file of the line at `index`
    pub fn line_number(&self, index: usize) -> usize {
        self.lines.get(index).map_or(self.end_line, |(n, _)| *n)
    }

    /// Indices of the `count` records following the line at `header`
    ///
    /// Fails if fewer than `count` lines remain in the file.
    pub fn records_after(&self, header: usize, count: usize) -> Result<Range<usize>> {
        let start = header + 1;
        let remaining = self.lines.len().saturating_sub(start);
        if count > remaining {
            return Err(Error::malformed(
                self.end_line,
                format!(
                    "{count} records expected after line {}, but only {remaining} lines remain",
                    self.line_number(header)
                ),
            ));
        }
        Ok(start..start + count)
    }

    /// The text of the line at `index`
    pub fn line(&self, index: usize) -> Result<&'a str> {
        self.lines.get(index).map(|(_, l)| *l).ok_or_else(|| {
            Error::malformed(self.end_line, "unexpected end of file, more records expected")
        })
    }

    /// The value of a `KEY = value` line
    pub fn value<V: FromStr>(&self, index: usize) -> Result<V> {
        let line = self.line(index)?;
        let Some((_, value)) = line.split_once('=') else {
            return Err(Error::malformed(
                self.line_number(index),
                format!("expected `KEY = value`, found `{line}`"),
            ));
        };
        let value = value.trim();
        value.parse::<V>().map_err(|_| {
            Error::malformed(
                self.line_number(index),
                format!("could not interpret value `{value}`"),
            )
        })
    }

    /// All whitespace-separated fields of the line at `index`
    pub fn record<V: FromStr>(&self, index: usize) -> Result<Vec<V>> {
        self.fields(index, usize::MAX)
    }

    /// The first `count` whitespace-separated fields of the line at `index`
    ///
    /// Lines with fewer fields are accepted; the caller checks the length if it matters.
    pub fn fields<V: FromStr>(&self, index: usize, count: usize) -> Result<Vec<V>> {
        let line = self.line(index)?;
        line.split_whitespace()
            .take(count)
            .map(|field| {
                field.parse::<V>().map_err(|_| {
                    Error::malformed(
                        self.line_number(index),
                        format!("could not interpret field `{field}`"),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const CONTENT: &str = "% header comment\n\
                           NDIME= 2\n\
                           \n\
                           %NPOIN= 7\n\
                           NPOIN= 3\n\
                           \t0.0 1.5 0\n\
                           MARKER_TAG= lower wall \n";

    #[test]
    fn test_filtering() {
        let s = Scanner::new(CONTENT);
        assert_eq!(s.len(), 4);
        assert_eq!(s.line(0).unwrap(), "NDIME= 2");
        assert_eq!(s.line(2).unwrap(), "0.0 1.5 0");
        assert_eq!(s.line_number(0), 2);
        assert_eq!(s.line_number(1), 5);
        assert_eq!(s.line_number(2), 6);
    }

    #[test]
    fn test_find() {
        let s = Scanner::new(CONTENT);
        assert_eq!(s.find("NDIME"), Some(0));
        assert_eq!(s.find("NPOIN"), Some(1));
        assert_eq!(s.find("NELEM"), None);
        assert!(matches!(
            s.require("NMARK"),
            Err(Error::MissingSection(name)) if name == "NMARK"
        ));
    }

    #[test]
    fn test_values() {
        let s = Scanner::new(CONTENT);
        assert_eq!(s.value::<usize>(0).unwrap(), 2);
        assert_eq!(s.value::<usize>(1).unwrap(), 3);
        assert_eq!(s.value::<String>(3).unwrap(), "lower wall");
        assert!(matches!(
            s.value::<usize>(2),
            Err(Error::MalformedRecord { line: 6, .. })
        ));
        assert!(matches!(
            s.value::<usize>(3),
            Err(Error::MalformedRecord { line: 7, .. })
        ));
    }

    #[test]
    fn test_records() {
        let s = Scanner::new(CONTENT);
        assert_eq!(s.record::<f64>(2).unwrap(), vec![0.0, 1.5, 0.0]);
        assert_eq!(s.fields::<f64>(2, 2).unwrap(), vec![0.0, 1.5]);
        assert!(s.record::<usize>(2).is_err());
    }

    #[test]
    fn test_records_after() {
        let s = Scanner::new(CONTENT);
        assert_eq!(s.records_after(1, 2).unwrap(), 2..4);
        assert_eq!(s.records_after(3, 0).unwrap(), 4..4);
        assert!(matches!(
            s.records_after(1, 3),
            Err(Error::MalformedRecord { line: 8, .. })
        ));
        assert!(s.records_after(1, usize::MAX).is_err());
    }

    #[test]
    fn test_out_of_range() {
        let s = Scanner::new(CONTENT);
        assert!(matches!(
            s.line(4),
            Err(Error::MalformedRecord { line: 8, .. })
        ));
        assert!(s.record::<f64>(10).is_err());
    }
}
