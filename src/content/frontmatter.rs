//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};

use super::PostMetadata;

/// Custom deserializer that accepts any YAML value as a string.
///
/// Header values such as `date: 2024-01-15` or `readTime: 5` arrive as
/// strings; `null` and missing keys become the empty string. Lists are
/// joined with `", "` and mappings are written back out as YAML.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, MapAccess, SeqAccess, Visitor};
    use std::fmt;

    struct ScalarString;

    impl<'de> Visitor<'de> for ScalarString {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a YAML value")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut items = Vec::new();
            while let Some(item) = seq.next_element::<serde_yaml::Value>()? {
                items.push(yaml_to_string(&item));
            }
            Ok(items.join(", "))
        }

        fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let value = serde_yaml::Value::deserialize(de::value::MapAccessDeserializer::new(map))?;
            Ok(yaml_to_string(&value))
        }
    }

    deserializer.deserialize_any(ScalarString)
}

fn yaml_to_string(value: &serde_yaml::Value) -> String {
    use serde_yaml::Value;

    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Front-matter header of a blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter {
    pub metadata: PostMetadata,
}

impl FrontMatter {
    /// Split a file into its front-matter and markdown body.
    ///
    /// A header opens only on a line that is exactly `---`. Anything else
    /// (including a `----` thematic break) has no header: the result is the
    /// default metadata and the untouched input as body.
    pub fn parse(content: &str) -> Result<(Self, &str), String> {
        let Some(rest) = open_header(content.trim_start()) else {
            return Ok((FrontMatter::default(), content));
        };

        let (yaml, body) = split_header(rest)
            .ok_or_else(|| "missing closing `---` delimiter".to_string())?;

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm = serde_yaml::from_str::<FrontMatter>(yaml).map_err(|e| e.to_string())?;
        Ok((fm, body))
    }
}

/// Text after the opening `---` line, if the content starts with one
fn open_header(content: &str) -> Option<&str> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.trim_start_matches([' ', '\t']);
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Find the closing delimiter line. Returns (header, body).
fn split_header(rest: &str) -> Option<(&str, &str)> {
    if rest.starts_with("---") {
        return Some(("", skip_line(&rest[3..])));
    }

    let end_pos = rest.find("\n---")?;
    let yaml = &rest[..end_pos];
    let body = skip_line(&rest[end_pos + 4..]);
    Some((yaml, body))
}

/// Drop the remainder of the delimiter line and any blank lines after it
fn skip_line(s: &str) -> &str {
    let s = match s.find('\n') {
        Some(pos) => &s[pos + 1..],
        None => "",
    };
    s.trim_start_matches(['\n', '\r'])
}
