use regex::{Captures, Regex};

/// Indentation applied to projection terms and the table reference.
const INDENT: &str = "            ";

/// Rewrites `SELECT ... FROM ...` blocks inside triple-quoted string
/// literals into the canonical layout: one projection per line, each
/// indented twelve spaces, with the table reference on its own indented
/// line after `FROM`.
///
/// The match is purely textual. Keywords are uppercase-only, `SELECT`
/// must sit on its own line inside the literal, and the first `FROM`
/// preceded by a newline terminates the projection list. Anything that
/// does not fit the pattern passes through byte-for-byte.
pub struct SqlLiteralFormatter {
    pattern: Regex,
}

impl SqlLiteralFormatter {
    pub fn new() -> Self {
        Self {
            // (1) opening delimiter through SELECT and its line break,
            // (2) projection list, (3) newline run carrying the FROM
            // keyword, (4) table clause, (5) trailing run plus closing
            // delimiter. The old indentation of the first projection and
            // the whitespace after FROM are consumed uncaptured so that
            // reformatting already-canonical text reproduces it exactly.
            pattern: Regex::new(
                r#"(?s)("""\s*\n\s*SELECT\s*?\n)[ \t]*(.*?)(\s*\n[ \t]*FROM)\s+([^"]*?)(\s*\n\s*""")"#,
            )
            .unwrap(),
        }
    }

    /// Rewrite every matching block in `source`. Text outside matches is
    /// left untouched; zero matches returns the input verbatim.
    pub fn format(&self, source: &str) -> String {
        self.pattern
            .replace_all(source, |caps: &Captures| {
                let prefix = &caps[1];
                let projections = format_projections(&caps[2]);
                let middle = &caps[3];
                let table = caps[4].trim();
                let suffix = &caps[5];
                format!("{prefix}{INDENT}{projections}{middle}\n{INDENT}{table}{suffix}")
            })
            .into_owned()
    }
}

impl Default for SqlLiteralFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the raw projection text on commas and lay the terms out one per
/// line. The split is textual: a comma inside a function call counts
/// like any other comma.
fn format_projections(raw: &str) -> String {
    let terms: Vec<&str> = raw.trim().split(',').map(str::trim).collect();
    terms.join(&format!(",\n{INDENT}"))
}
