use regex::Regex;

use crate::error::ShardCheckError;

/// Answers whether an index is exempt from instability escalation.
pub trait IndexMatcher {
    fn is_whitelisted(&self, index: &str) -> bool;
}

impl<F> IndexMatcher for F
where
    F: Fn(&str) -> bool,
{
    fn is_whitelisted(&self, index: &str) -> bool {
        self(index)
    }
}

/// Whitelist compiled from the configured patterns. A pattern matches if it is
/// found anywhere in the index name; anchor it explicitly for a full match.
#[derive(Debug, Default)]
pub struct RegexWhitelist {
    patterns: Vec<Regex>,
}

impl RegexWhitelist {
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ShardCheckError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p.as_ref()).map_err(|source| ShardCheckError::InvalidPattern {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl IndexMatcher for RegexWhitelist {
    fn is_whitelisted(&self, index: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(index))
    }
}
