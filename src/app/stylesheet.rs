//! A small CSS subset used to style the UI.
//!
//! Grammar: `selector[, selector] { property: value; ... }` with `/* */`
//! comments. At-rules are skipped whole. Interpretation of selectors and
//! properties lives in `app::theme`.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

#[derive(Debug)]
pub enum StylesheetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Syntax {
        line: usize,
        message: &'static str,
    },
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StylesheetError::Io { path, source } => {
                write!(f, "cannot read stylesheet {}: {}", path.display(), source)
            }
            StylesheetError::Syntax { line, message } => {
                write!(f, "stylesheet syntax error on line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for StylesheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StylesheetError::Io { source, .. } => Some(source),
            StylesheetError::Syntax { .. } => None,
        }
    }
}

impl Stylesheet {
    pub fn load(path: &Path) -> Result<Self, StylesheetError> {
        let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, StylesheetError> {
        let text = strip_comments(source)?;
        let mut rules = Vec::new();
        let mut rest = text.as_str();
        let mut offset = 0usize;

        loop {
            let trimmed = rest.trim_start();
            offset += rest.len() - trimmed.len();
            rest = trimmed;
            if rest.is_empty() {
                break;
            }

            let Some(open) = rest.find('{') else {
                return Err(syntax_error(&text, offset, "expected '{'"));
            };
            let prelude = rest[..open].trim();
            if prelude.contains('}') {
                return Err(syntax_error(&text, offset, "unexpected '}'"));
            }

            let body_start = open + 1;
            let Some(body_len) = block_len(&rest[body_start..]) else {
                return Err(syntax_error(&text, offset + open, "unclosed block"));
            };
            let body = &rest[body_start..body_start + body_len];

            if prelude.starts_with('@') {
                tracing::debug!(rule = prelude, "skipping at-rule");
            } else if prelude.is_empty() {
                return Err(syntax_error(&text, offset, "missing selector"));
            } else {
                rules.push(Rule {
                    selectors: parse_selectors(prelude),
                    declarations: parse_declarations(body),
                });
            }

            let consumed = body_start + body_len + 1;
            offset += consumed;
            rest = &rest[consumed..];
        }

        Ok(Self { rules })
    }
}

/// Replace comments with spaces, keeping newlines so line numbers hold.
fn strip_comments(source: &str) -> Result<String, StylesheetError> {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("*/") else {
            let offset = source.len() - rest.len() + start;
            return Err(syntax_error(source, offset, "unterminated comment"));
        };
        for ch in rest[start..start + 2 + end + 2].chars() {
            out.push(if ch == '\n' { '\n' } else { ' ' });
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Length of a block body up to (not including) its matching `}`.
fn block_len(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in body.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(idx),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}

fn parse_selectors(prelude: &str) -> Vec<String> {
    prelude
        .split(',')
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_declarations(body: &str) -> Vec<Declaration> {
    let mut out = Vec::new();
    for item in body.split(';') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        let Some((property, value)) = item.split_once(':') else {
            tracing::debug!(declaration = item, "ignoring declaration without ':'");
            continue;
        };
        let value = value.trim();
        let value = value
            .strip_suffix("!important")
            .map(str::trim_end)
            .unwrap_or(value);
        out.push(Declaration {
            property: property.trim().to_ascii_lowercase(),
            value: value.to_string(),
        });
    }
    out
}

fn syntax_error(text: &str, offset: usize, message: &'static str) -> StylesheetError {
    let offset = offset.min(text.len());
    let line = text.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1;
    StylesheetError::Syntax { line, message }
}

#[cfg(test)]
#[path = "../../tests/unit/app/stylesheet.rs"]
mod tests;
