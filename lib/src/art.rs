use std::fmt;

/// ASCII art as an ordered list of lines
///
/// Lines are nominally the same width, but text read back from disk may
/// contain shorter ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split text on `\n` (a trailing `\r` is dropped from each line)
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line, in characters
    pub fn max_line_len(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Every line is followed by `\n`, including the last
impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_measure() {
        let art = AsciiArt::parse("@@@\n.\r\n::\n");
        assert_eq!(art.line_count(), 3);
        assert_eq!(art.max_line_len(), 3);
        assert_eq!(art.lines()[1], ".");
    }

    #[test]
    fn test_display_terminates_every_line() {
        let art = AsciiArt::new(vec!["@%".to_string(), "  ".to_string()]);
        assert_eq!(art.to_string(), "@%\n  \n");
    }

    #[test]
    fn test_empty() {
        let art = AsciiArt::parse("");
        assert!(art.is_empty());
        assert_eq!(art.max_line_len(), 0);
        assert_eq!(art.to_string(), "");
    }
}
