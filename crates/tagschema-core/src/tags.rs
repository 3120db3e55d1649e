//! Struct tag parsing
//!
//! Two layers: the raw tag string is split into `key:"value"` entries
//! ([`StructTag`]), and the `schema` entry's value is split into
//! comma-separated generation options ([`SchemaOptions`]).

/// Parsed `key:"value"` entries of a struct tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructTag {
    entries: Vec<(String, String)>,
}

impl StructTag {
    /// Parse a decoded struct tag.
    ///
    /// Tokens are separated by whitespace. A token that does not contain
    /// exactly one colon is skipped. Double quotes are trimmed from both ends
    /// of the value.
    pub fn parse(raw: &str) -> Self {
        let mut entries = Vec::new();

        for token in raw.split_whitespace() {
            let mut parts = token.split(':');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                tracing::debug!(token, "skipping malformed tag token");
                continue;
            };
            entries.push((key.to_string(), value.trim_matches('"').to_string()));
        }

        Self { entries }
    }

    /// Value for `key`; when a key repeats, the last occurrence wins
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the tag has no usable entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Options carried by a `schema:"..."` tag value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaOptions {
    /// `required`
    pub required: bool,

    /// `minLength=N`
    pub min_length: Option<u64>,

    /// `format=F`
    pub format: Option<String>,

    /// `description=D`
    pub description: Option<String>,
}

impl SchemaOptions {
    /// Parse a comma-separated option list.
    ///
    /// `required` is set when the text `required` appears anywhere in the
    /// value. Keyed options are matched per comma-separated option: unknown
    /// keys (for example `min=1`) are ignored, only the first occurrence of a
    /// key counts, and a `minLength` value that is not a non-negative integer
    /// is dropped.
    pub fn parse(value: &str) -> Self {
        let mut options = Self {
            required: value.contains("required"),
            ..Self::default()
        };
        let mut seen_min_length = false;
        let mut seen_format = false;
        let mut seen_description = false;

        for option in value.split(',').map(str::trim) {
            let Some((key, arg)) = option.split_once('=') else {
                continue;
            };
            match key.trim() {
                "minLength" if !seen_min_length => {
                    seen_min_length = true;
                    match arg.trim().parse::<u64>() {
                        Ok(n) => options.min_length = Some(n),
                        Err(_) => tracing::debug!(value = arg, "ignoring invalid minLength"),
                    }
                }
                "format" if !seen_format => {
                    seen_format = true;
                    options.format = non_empty(arg);
                }
                "description" if !seen_description => {
                    seen_description = true;
                    options.description = non_empty(arg);
                }
                _ => {}
            }
        }

        options
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
