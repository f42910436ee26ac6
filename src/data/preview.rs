use std::fmt;

/// Slices longer than this are summarised instead of printed in full.
pub const SUMMARIZE_THRESHOLD: usize = 1000;

/// Values kept at each end of a summarised slice.
pub const EDGE_ITEMS: usize = 3;

/// Wrap column for the printed array.
pub const LINE_WIDTH: usize = 75;

// ---------------------------------------------------------------------------
// Preview – array-style text dump of a sample slice
// ---------------------------------------------------------------------------

/// Formats samples as a bracketed, column-aligned array:
///
/// ```text
/// [ 1.0 -2.5 3.25]
/// ```
///
/// Long slices print only their edges around `...`.
pub struct Preview<'a> {
    values: &'a [f32],
}

impl<'a> Preview<'a> {
    pub fn new(values: &'a [f32]) -> Self {
        Self { values }
    }

    fn is_summarized(&self) -> bool {
        self.values.len() > SUMMARIZE_THRESHOLD
    }

    /// Printed tokens in order, numeric ones padded to a common width.
    fn tokens(&self) -> Vec<String> {
        let shown: Vec<Option<String>> = if self.is_summarized() {
            let head = &self.values[..EDGE_ITEMS];
            let tail = &self.values[self.values.len() - EDGE_ITEMS..];
            head.iter()
                .map(|v| Some(format!("{v:?}")))
                .chain(std::iter::once(None))
                .chain(tail.iter().map(|v| Some(format!("{v:?}"))))
                .collect()
        } else {
            self.values.iter().map(|v| Some(format!("{v:?}"))).collect()
        };

        let width = shown.iter().flatten().map(String::len).max().unwrap_or(0);

        shown
            .into_iter()
            .map(|tok| match tok {
                Some(text) => format!("{text:>width$}"),
                None => "...".to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.tokens();
        f.write_str("[")?;
        let mut line_len = 1;

        for (i, tok) in tokens.iter().enumerate() {
            if i > 0 {
                let closing = usize::from(i + 1 == tokens.len());
                if line_len + 1 + tok.len() + closing > LINE_WIDTH {
                    f.write_str("\n ")?;
                    line_len = 1;
                } else {
                    f.write_str(" ")?;
                    line_len += 1;
                }
            }
            f.write_str(tok)?;
            line_len += tok.len();
        }

        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_back(text: &str) -> Vec<f32> {
        text.trim_start_matches('[')
            .trim_end_matches(']')
            .split_whitespace()
            .map(|tok| tok.parse().unwrap())
            .collect()
    }

    #[test]
    fn empty_slice_prints_brackets() {
        assert_eq!(Preview::new(&[]).to_string(), "[]");
    }

    #[test]
    fn short_slice_is_aligned() {
        assert_eq!(Preview::new(&[1.0, -2.5, 3.25]).to_string(), "[ 1.0 -2.5 3.25]");
    }

    #[test]
    fn single_value() {
        assert_eq!(Preview::new(&[0.125]).to_string(), "[0.125]");
    }

    #[test]
    fn long_lines_wrap_without_losing_values() {
        let values: Vec<f32> = (0..100).map(|i| i as f32 * 0.5 - 20.0).collect();
        let text = Preview::new(&values).to_string();

        assert!(text.lines().count() > 1);
        for line in text.lines() {
            assert!(line.len() <= LINE_WIDTH, "line too long: {line:?}");
        }
        for line in text.lines().skip(1) {
            assert!(line.starts_with(' '));
        }
        assert_eq!(parse_back(&text), values);
    }

    #[test]
    fn threshold_length_prints_in_full() {
        let values: Vec<f32> = (0..SUMMARIZE_THRESHOLD).map(|i| i as f32).collect();
        let text = Preview::new(&values).to_string();
        assert!(!text.contains("..."));
        assert_eq!(parse_back(&text), values);
    }

    #[test]
    fn long_slice_is_summarized_to_edges() {
        let values: Vec<f32> = (0..10_000).map(|i| i as f32).collect();
        let text = Preview::new(&values).to_string();

        assert_eq!(text, "[   0.0    1.0    2.0 ... 9997.0 9998.0 9999.0]");
        assert!(!text.contains("5000.0"));
    }

    #[test]
    fn non_finite_values_are_printed() {
        let text = Preview::new(&[f32::NAN, f32::INFINITY, -1.0]).to_string();
        assert_eq!(text, "[ NaN  inf -1.0]");
    }
}
