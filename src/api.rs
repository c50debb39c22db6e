use std::path::Path;

use crate::error::SqlfixError;
use crate::formatter::SqlLiteralFormatter;

/// Outcome of rewriting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File content was already canonical; nothing was written.
    Unchanged,
    /// File was rewritten in place.
    Changed,
}

/// Format SQL string literals in `source`.
/// This is the core API function.
pub fn format_string(source: &str) -> String {
    SqlLiteralFormatter::new().format(source)
}

/// Rewrite a single file in place. The file is read as UTF-8 text and
/// written back only when formatting actually changed it.
pub fn rewrite_file(path: &Path) -> Result<FileStatus, SqlfixError> {
    let source = std::fs::read_to_string(path).map_err(|e| SqlfixError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let formatted = format_string(&source);

    if source == formatted {
        return Ok(FileStatus::Unchanged);
    }

    std::fs::write(path, &formatted).map_err(|e| SqlfixError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(FileStatus::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_string_no_op() {
        assert_eq!(format_string("no sql here\n"), "no sql here\n");
    }

    #[test]
    fn test_rewrite_file_changed() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("queries.cs");
        fs::write(
            &path,
            "var q = \"\"\"\n    SELECT\n        Id, Name\n    FROM  Users\n    \"\"\";\n",
        )
        .unwrap();

        let status = rewrite_file(&path).unwrap();
        assert_eq!(status, FileStatus::Changed);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("            Id,\n            Name\n"));
        assert!(content.contains("    FROM\n            Users\n"));
    }

    #[test]
    fn test_rewrite_file_unchanged() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("plain.cs");
        fs::write(&path, "var x = 1;\n").unwrap();

        let status = rewrite_file(&path).unwrap();
        assert_eq!(status, FileStatus::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), "var x = 1;\n");
    }

    #[test]
    fn test_rewrite_missing_file() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("does_not_exist.cs");

        let err = rewrite_file(&path).unwrap_err();
        assert!(matches!(err, SqlfixError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read"));
    }
}
