//! Splitting a content file into metadata and body.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::error::ContentResult;

const FENCE: &str = "---";

/// Metadata recognised at the top of a case study.
///
/// Unknown keys are ignored. Scalars of any YAML type are kept as strings,
/// so `date: 2024` and `date: "2024"` read the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub summary: Option<String>,
}

impl FrontMatter {
    fn from_yaml(yaml: &str) -> ContentResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a scalar, found {other:?}"
        ))),
    }
}

/// A content file split into front-matter and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub front_matter: FrontMatter,
    pub content: String,
}

impl Document {
    /// Parses a content file.
    ///
    /// Front-matter is only recognised when the very first line is `---`
    /// and a later line is `---`. Without both fences the whole text is body.
    pub fn parse(source: &str) -> ContentResult<Self> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        match split(source) {
            Some((yaml, content)) => Ok(Self {
                front_matter: FrontMatter::from_yaml(yaml)?,
                content: content.to_string(),
            }),
            None => Ok(Self {
                front_matter: FrontMatter::default(),
                content: source.to_string(),
            }),
        }
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == FENCE
}

fn split(source: &str) -> Option<(&str, &str)> {
    let mut lines = source.split_inclusive('\n');
    let first = lines.next()?;
    if !is_fence(first) {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_fence(line) {
            return Some((&source[yaml_start..offset], &source[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
