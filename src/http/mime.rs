use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

/// Content type served when an extension has no mapping.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Immutable extension → MIME type table.
///
/// Built once before the accept loop starts and shared read-only by
/// every connection handler. An empty table is valid: every lookup then
/// falls back to [`DEFAULT_CONTENT_TYPE`].
#[derive(Debug, Default)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// Table with no mappings at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a mime.types-style file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read MIME table {}", path.display()))?;

        Ok(Self::parse(&text))
    }

    /// Parses mime.types-style text: the first token of a line is the
    /// MIME type, every remaining token is an extension mapped to it.
    ///
    /// Lines that are empty, start with a space, start with `##` or
    /// `# `, or consist of a single `#` are skipped. Anything else is a
    /// data line, including `#foo bar` style tokens.
    pub fn parse(text: &str) -> Self {
        let mut types = HashMap::new();

        for line in text.lines() {
            if line.is_empty()
                || line.starts_with(' ')
                || line.starts_with("##")
                || line.starts_with("# ")
                || line == "#"
            {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() > 1 {
                for ext in &parts[1..] {
                    types.insert((*ext).to_string(), parts[0].to_string());
                }
            }
        }

        Self { types }
    }

    /// Case-sensitive lookup of an extension (no leading dot).
    pub fn lookup(&self, ext: &str) -> Option<&str> {
        self.types.get(ext).map(String::as_str)
    }

    /// Content type for a resolved file path: the substring after the
    /// last `.` is looked up, unmapped extensions fall back to
    /// `application/octet-stream`.
    pub fn content_type_for(&self, file_name: &str) -> &str {
        let ext = match file_name.rfind('.') {
            Some(i) => &file_name[i + 1..],
            None => file_name,
        };

        self.lookup(ext).unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
