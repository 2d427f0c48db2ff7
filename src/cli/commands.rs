//! CLI command implementations
//!
//! Each command renders its output to a `String`; `execute` prints it. Syntax errors are rendered through miette
//! against the source text so the label points at the offending span.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};
use thiserror::Error;

use tdop_syntax::{DotConfig, SyntaxError, grammar, parser, scanner, sql};

use super::{CliError, CliResult, SourceArgs};

/// Maximum source file size (100 MB)
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Errors raised while loading program text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cannot access file '{}': {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Source file '{}' is too large ({size} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },
    #[error("Error reading file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(err.to_string())
    }
}

/// Program text plus the name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

/// Read a source file, rejecting anything over `MAX_SOURCE_SIZE`.
///
/// ## Errors
/// - The file can't be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let metadata = fs::metadata(path).map_err(|source| SourceError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `FILE` / `-c CODE` to program text, falling back to the sample program.
pub fn load(args: &SourceArgs) -> CliResult<Source> {
    if let Some(code) = &args.code {
        return Ok(Source {
            name: "<command>".to_string(),
            text: code.clone(),
        });
    }
    match &args.file {
        Some(path) => Ok(Source {
            name: path.display().to_string(),
            text: read_source(path)?,
        }),
        None => Ok(Source {
            name: "<sample>".to_string(),
            text: grammar::SAMPLE_PROGRAM.to_string(),
        }),
    }
}

/// Render a syntax error with its source snippet.
pub fn render_error(name: &str, text: &str, err: SyntaxError) -> CliError {
    tracing::debug!(lexical = err.is_lexical(), "syntax error");
    let report = Report::new(err).with_source_code(NamedSource::new(name, text.to_string()));
    CliError::failure(format!("{report:?}").trim_end())
}

/// Bracketed text form of the parsed program.
pub fn parse_source(args: &SourceArgs) -> CliResult<String> {
    let source = load(args)?;
    let tree = parser::parse(&source.text).map_err(|e| render_error(&source.name, &source.text, e))?;
    Ok(tree.to_display_text())
}

/// Graphviz document for the parsed program.
pub fn dot_source(args: &SourceArgs, graph_name: &str) -> CliResult<String> {
    let source = load(args)?;
    let tree = parser::parse(&source.text).map_err(|e| render_error(&source.name, &source.text, e))?;
    Ok(tree.to_dot_with(&DotConfig::new().with_graph_name(graph_name)))
}

/// One `line:column KIND text` row per token.
pub fn lex_source(args: &SourceArgs) -> CliResult<String> {
    let source = load(args)?;
    let table = grammar::statement_patterns();
    let tokens = scanner::tokenize(&source.text, &table).map_err(|e| render_error(&source.name, &source.text, e))?;

    let mut out = String::new();
    for tok in &tokens {
        // `writeln!` into a String cannot fail.
        let _ = writeln!(out, "{}:{} {} {}", tok.line, tok.column, tok.kind, tok.text);
    }
    Ok(out.trim_end().to_string())
}

/// Parse an SQL-subset statement and render it as text or as a graph.
pub fn sql_query(query: &str, dot: bool) -> CliResult<String> {
    let tree = sql::parse(query).map_err(|e| render_error("<query>", query, e))?;
    if dot {
        Ok(tree.to_dot_with(&DotConfig::new().with_graph_name("query")))
    } else {
        Ok(tree.to_display_text())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn code(text: &str) -> SourceArgs {
        SourceArgs {
            file: None,
            code: Some(text.to_string()),
        }
    }

    #[test]
    fn test_load_defaults_to_sample() {
        let source = load(&SourceArgs::default()).unwrap();
        assert_eq!(source.name, "<sample>");
        assert_eq!(source.text, grammar::SAMPLE_PROGRAM);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(Path::new("definitely/not/here.tdop")).unwrap_err();
        assert!(matches!(err, SourceError::Access { .. }));
        assert!(err.to_string().starts_with("Cannot access file"));
    }

    #[test]
    fn test_parse_source_inline() {
        assert_eq!(parse_source(&code("x = 1 + 2;")).unwrap(), "(= ID(x) (+ INT(1) INT(2)))");
    }

    #[test]
    fn test_dot_source_uses_graph_name() {
        let dot = dot_source(&code("break;"), "g").unwrap();
        assert_eq!(dot, "digraph g {\n1 [label=\"BREAK\"];\n}");
    }

    #[test]
    fn test_lex_source_rows() {
        let rows = lex_source(&code("if x\n  y")).unwrap();
        assert_eq!(rows, "1:1 IF if\n1:4 ID x\n2:3 ID y");
    }

    #[test]
    fn test_lex_source_reports_unrecognized_input() {
        let err = lex_source(&code("a $ b")).unwrap_err();
        assert!(err.message.contains("unrecognized"), "{}", err.message);
    }

    #[test]
    fn test_sql_query_text_and_dot() {
        let text = sql_query("select a from t where a == 1", false).unwrap();
        assert_eq!(text, "(SELECT (list ID(a)) ID(t) (== ID(a) INT(1)))");
        let dot = sql_query("select a from t where a == 1", true).unwrap();
        assert!(dot.starts_with("digraph query {"));
    }
}
