//! An ordered ini dialect for menu definitions.
//!
//! Sections hold keyed text blocks. Keys are case-sensitive and values are
//! taken verbatim, so shell syntax like `${EDITOR}` passes through for the
//! shell to expand. A line beginning with whitespace continues the previous
//! entry's value; insertion order of sections and keys is preserved.

use indexmap::IndexMap;
use thiserror::Error;

/// Parsed form of a config file: section name to ordered key/value entries.
pub type Sections = IndexMap<String, IndexMap<String, String>>;

#[derive(Error, Debug)]
pub enum IniError {
    #[error("line {}: entry `{}` appears before any section header", .line, .key)]
    EntryOutsideSection { line: usize, key: String },

    #[error("line {}: continuation line with no entry to continue", .line)]
    DanglingContinuation { line: usize },

    #[error("line {}: expected `[section]` or `key: value`, got `{}`", .line, .content)]
    InvalidLine { line: usize, content: String },

    #[error("line {}: duplicate section `{}`", .line, .name)]
    DuplicateSection { line: usize, name: String },

    #[error("line {}: duplicate key `{}` in section `{}`", .line, .key, .section)]
    DuplicateKey {
        line: usize,
        key: String,
        section: String,
    },
}

/// Parses ini text into ordered sections.
///
/// Comment lines start with `#` or `;` and may appear inside a multi-line
/// value without terminating it. A blank line ends the current entry.
///
/// # Errors
///
/// Returns an [`IniError`] carrying a 1-based line number for an entry
/// outside any section, a continuation with nothing to continue, a line
/// with no `:`/`=` delimiter, or a duplicate section or key.
pub fn parse(text: &str) -> Result<Sections, IniError> {
    let mut sections = Sections::new();
    let mut current_section: Option<String> = None;
    let mut current_key: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let stripped = raw.trim();

        if stripped.is_empty() {
            current_key = None;
            continue;
        }

        if stripped.starts_with('#') || stripped.starts_with(';') {
            continue;
        }

        if raw.starts_with(|c: char| c.is_whitespace()) {
            let value = current_section
                .as_ref()
                .and_then(|section| sections.get_mut(section))
                .and_then(|entries| current_key.as_ref().and_then(|key| entries.get_mut(key)));

            let Some(value) = value else {
                return Err(IniError::DanglingContinuation { line });
            };

            value.push('\n');
            value.push_str(stripped);
            continue;
        }

        if let Some(header) = stripped.strip_prefix('[') {
            let Some(end) = header.rfind(']') else {
                return Err(IniError::InvalidLine {
                    line,
                    content: stripped.to_string(),
                });
            };

            let name = header[..end].trim().to_string();
            if sections.contains_key(&name) {
                return Err(IniError::DuplicateSection { line, name });
            }

            sections.insert(name.clone(), IndexMap::new());
            current_section = Some(name);
            current_key = None;
            continue;
        }

        let Some(delimiter) = stripped.find([':', '=']) else {
            return Err(IniError::InvalidLine {
                line,
                content: stripped.to_string(),
            });
        };

        let key = stripped[..delimiter].trim_end().to_string();
        let value = stripped[delimiter + 1..].trim().to_string();

        if key.is_empty() {
            return Err(IniError::InvalidLine {
                line,
                content: stripped.to_string(),
            });
        }

        let Some(section) = current_section.clone() else {
            return Err(IniError::EntryOutsideSection { line, key });
        };

        let entries = sections.entry(section.clone()).or_default();
        if entries.contains_key(&key) {
            return Err(IniError::DuplicateKey { line, key, section });
        }

        entries.insert(key.clone(), value);
        current_key = Some(key);
    }

    Ok(sections)
}

/// Renders sections back to ini text. Continuation lines of a multi-line
/// value are indented with three spaces, the same layout the bootstrap
/// config uses.
pub fn render(sections: &Sections) -> String {
    let mut out = String::new();

    for (name, entries) in sections {
        if !out.is_empty() {
            out.push('\n');
        }

        out.push_str(&format!("[{name}]\n"));
        for (key, value) in entries {
            let mut lines = value.lines();
            let first = lines.next().unwrap_or_default();
            out.push_str(&format!("{key}: {first}\n"));

            for continuation in lines {
                out.push_str(&format!("   {continuation}\n"));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_section() {
        let sections = parse("[deploy]\na: run the thing\nx: exit\n").unwrap();

        assert_eq!(sections.len(), 1);
        let entries = &sections["deploy"];
        assert_eq!(entries["a"], "run the thing");
        assert_eq!(entries["x"], "exit");
    }

    #[test]
    fn test_parse_preserves_order() {
        let sections = parse("[m]\nz: one\na: two\nq: three\n").unwrap();
        let keys: Vec<&String> = sections["m"].keys().collect();
        assert_eq!(keys, ["z", "a", "q"]);
    }

    #[test]
    fn test_parse_multiline_value() {
        let text = "[m]\nb: label\n   cmd1\n   cmd2\nx: exit\n";
        let sections = parse(text).unwrap();
        assert_eq!(sections["m"]["b"], "label\ncmd1\ncmd2");
        assert_eq!(sections["m"]["x"], "exit");
    }

    #[test]
    fn test_parse_equals_delimiter() {
        let sections = parse("[m]\na = value\n").unwrap();
        assert_eq!(sections["m"]["a"], "value");
    }

    #[test]
    fn test_parse_keys_are_case_sensitive() {
        let sections = parse("[m]\na: lower\nA: upper\n").unwrap();
        assert_eq!(sections["m"]["a"], "lower");
        assert_eq!(sections["m"]["A"], "upper");
    }

    #[test]
    fn test_parse_no_interpolation() {
        let sections = parse("[m]\ne: ${EDITOR:-vi} file.txt\n").unwrap();
        assert_eq!(sections["m"]["e"], "${EDITOR:-vi} file.txt");
    }

    #[test]
    fn test_parse_comments_inside_value() {
        let text = "[m]\nb: label\n# note\n   cmd1\n; note\n   cmd2\n";
        let sections = parse(text).unwrap();
        assert_eq!(sections["m"]["b"], "label\ncmd1\ncmd2");
    }

    #[test]
    fn test_parse_blank_line_ends_entry() {
        let text = "[m]\nb: label\n\n   stray\n";
        let result = parse(text);
        assert!(matches!(
            result,
            Err(IniError::DanglingContinuation { line: 4 })
        ));
    }

    #[test]
    fn test_parse_entry_outside_section() {
        let result = parse("a: nope\n");
        assert!(matches!(
            result,
            Err(IniError::EntryOutsideSection { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_line_without_delimiter() {
        let result = parse("[m]\nnot an entry\n");
        assert!(matches!(result, Err(IniError::InvalidLine { line: 2, .. })));
    }

    #[test]
    fn test_parse_duplicate_section() {
        let result = parse("[m]\na: one\n[m]\nb: two\n");
        assert!(matches!(
            result,
            Err(IniError::DuplicateSection { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_duplicate_key() {
        let result = parse("[m]\na: one\na: two\n");
        assert!(matches!(result, Err(IniError::DuplicateKey { line: 3, .. })));
    }

    #[test]
    fn test_parse_section_name_with_punctuation() {
        let sections = parse("[.internal]\na: hidden\n").unwrap();
        assert!(sections.contains_key(".internal"));
    }

    #[test]
    fn test_render_round_trip() {
        let text = "[first]\na: single\nb: label\n   cmd1\n   cmd2\n\n[second]\nx: exit\n";
        let sections = parse(text).unwrap();
        let rendered = render(&sections);
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(sections, reparsed);
        assert_eq!(rendered, text);
    }
}
