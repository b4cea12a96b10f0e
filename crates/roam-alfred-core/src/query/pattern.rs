//! Query compilation

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Case-insensitive "words in order" pattern over node titles.
///
/// `"proj rev"` matches `"Projects > Q1 > Review"`: each word must appear, in
/// order, with anything in between.
#[derive(Debug, Clone)]
pub struct TitlePattern {
    regex: Regex,
}

impl TitlePattern {
    /// Compile a typed query. Blank queries compile to `None` (match all).
    pub fn compile(query: &str) -> Result<Option<Self>> {
        let words: Vec<String> = query.split_whitespace().map(regex::escape).collect();
        if words.is_empty() {
            return Ok(None);
        }
        let regex = RegexBuilder::new(&words.join(".*"))
            .case_insensitive(true)
            .build()?;
        Ok(Some(Self { regex }))
    }

    pub fn is_match(&self, title: &str) -> bool {
        self.regex.is_match(title)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
