use std::fmt;
use std::str::FromStr;

use pacchetti_error::PackageManagerError;

/// A parsed key path such as `packages."prelude".dependencies[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    pub segments: Vec<String>,
    /// Set when the path ends in `[]`: the addressed array is iterated.
    pub iterate: bool,
}

impl QueryPath {
    /// Quotes every segment so names containing `.` or `-` stay addressable.
    pub fn from_segments(segments: &[&str], iterate: bool) -> Result<Self, PackageManagerError> {
        if let Some(bad) = segments.iter().find(|s| s.is_empty() || s.contains('"')) {
            return Err(PackageManagerError::ConfigLookup(
                (*bad).to_string(),
                "segment cannot be empty or contain '\"'".to_string(),
            ));
        }

        Ok(Self {
            segments: segments.iter().map(|s| (*s).to_string()).collect(),
            iterate,
        })
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if segment.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                f.write_str(segment)?;
            } else {
                write!(f, "\"{segment}\"")?;
            }
        }
        if self.iterate {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl FromStr for QueryPath {
    type Err = PackageManagerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| {
            PackageManagerError::ConfigLookup(raw.to_string(), format!("malformed query: {reason}"))
        };

        let trimmed = raw.trim().trim_start_matches('.');
        let (body, iterate) = match trimmed.strip_suffix("[]") {
            Some(body) => (body, true),
            None => (trimmed, false),
        };

        let mut segments = Vec::new();
        let mut chars = body.chars().peekable();

        loop {
            let mut segment = String::new();

            if chars.peek() == Some(&'"') {
                chars.next();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    segment.push(c);
                }
                if !closed {
                    return Err(malformed("unterminated quote"));
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c == '.' {
                        break;
                    }
                    if matches!(c, '"' | '[' | ']') {
                        return Err(malformed("unexpected character in segment"));
                    }
                    segment.push(c);
                    chars.next();
                }
            }

            if segment.is_empty() {
                return Err(malformed("empty segment"));
            }
            segments.push(segment);

            match chars.next() {
                None => break,
                Some('.') => {}
                Some(_) => return Err(malformed("expected '.' after quoted segment")),
            }
        }

        Ok(Self { segments, iterate })
    }
}
