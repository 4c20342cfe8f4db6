//! Label file helpers
//!
//! Label corpora are line-oriented: one whitespace-delimited label graph
//! per line. These helpers back the CLI batch mode.

use crate::core::graph2latex::{graph_to_latex_with_options, G2LOptions};
use crate::utils::error::ConversionResult;
use std::fs;
use std::path::Path;

/// Read a label file into its non-empty lines.
///
/// Blank lines are skipped; surrounding whitespace is preserved (the
/// tokenizer ignores it anyway).
pub fn read_label_lines(path: &Path) -> ConversionResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect())
}

/// Convert every label graph in a file, one LaTeX line per input line.
pub fn convert_label_file(path: &Path, options: &G2LOptions) -> ConversionResult<Vec<String>> {
    let lines = read_label_lines(path)?;
    Ok(lines
        .iter()
        .map(|line| graph_to_latex_with_options(line, options))
        .collect())
}

/// Write converted lines to a file, newline-terminated.
pub fn write_latex_lines(path: &Path, lines: &[String]) -> ConversionResult<()> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("relatex-files-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_convert_label_file_round_trip() {
        let input = temp_path("in.lg");
        fs::write(&input, "a Sub b NoRel\n\n2 NoRel - Below 3\n").unwrap();

        let lines = convert_label_file(&input, &G2LOptions::default()).unwrap();
        assert_eq!(lines, vec!["a_{b}".to_string(), "\\frac{2}{3}".to_string()]);

        let output = temp_path("out.tex");
        write_latex_lines(&output, &lines).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "a_{b}\n\\frac{2}{3}\n");

        fs::remove_file(&input).ok();
        fs::remove_file(&output).ok();
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_label_lines(Path::new("/nonexistent/labels.lg")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
