//! Symbol kinds and line classification for usage search.
//!
//! A line is a candidate when the symbol appears as a whole word. It is
//! then labelled with the first pattern (in priority order) that
//! matches for the requested kind, falling back to "reference".

use regex::Regex;

use crate::core::error::{GatewayError, Result};

/// Kind of symbol being searched for, used to select patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Type,
    Variable,
    Constant,
    Any,
}

impl SymbolKind {
    /// Parse a caller-supplied kind; unknown kinds search for any usage
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "function" | "method" | "func" | "fn" => SymbolKind::Function,
            "class" | "struct" | "type" | "interface" | "enum" | "trait" => SymbolKind::Type,
            "variable" | "var" | "field" | "property" => SymbolKind::Variable,
            "constant" | "const" | "static" => SymbolKind::Constant,
            _ => SymbolKind::Any,
        }
    }

    fn includes_functions(self) -> bool {
        matches!(self, SymbolKind::Function | SymbolKind::Any)
    }

    fn includes_types(self) -> bool {
        matches!(self, SymbolKind::Type | SymbolKind::Any)
    }

    fn includes_values(self) -> bool {
        matches!(
            self,
            SymbolKind::Variable | SymbolKind::Constant | SymbolKind::Any
        )
    }
}

/// A single classified match on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// 0-based character column of the symbol
    pub column: usize,

    /// Pattern label (e.g. "definition", "method_call")
    pub usage: &'static str,
}

/// Compiled patterns for one symbol name and kind
pub struct SymbolMatcher {
    word: Regex,
    patterns: Vec<(Regex, &'static str)>,
}

impl SymbolMatcher {
    /// Compile the matcher for `name` searched as `kind`
    pub fn new(name: &str, kind: SymbolKind) -> Result<Self> {
        let name = name.trim();
        let escaped = regex::escape(name);
        let (lead, trail) = word_boundaries(name);
        let word = compile(&format!(r"{lead}{escaped}{trail}"))?;

        let mut sources: Vec<(String, &'static str)> = Vec::new();

        // Definitions first, so a declaring line is never labelled a usage
        if kind.includes_functions() {
            sources.push((
                format!(r"\b(fn|def|func|function)\s+{escaped}{trail}"),
                "definition",
            ));
            sources.push((format!(r"\bfunc\s*\([^)]*\)\s*{escaped}{trail}"), "definition"));
        }
        if kind.includes_types() {
            sources.push((
                format!(r"\b(class|struct|enum|trait|interface|type|union)\s+{escaped}{trail}"),
                "definition",
            ));
        }
        if kind.includes_values() {
            sources.push((
                format!(r"\b(let(\s+mut)?|const|var|static|val)\s+{escaped}{trail}"),
                "definition",
            ));
        }

        // Imports apply to all kinds
        sources.push((format!(r"\bimport\b.*{lead}{escaped}{trail}"), "import"));
        sources.push((format!(r"\buse\s+.*{lead}{escaped}{trail}"), "import"));

        if kind.includes_functions() {
            sources.push((format!(r"\.{escaped}\s*\("), "method_call"));
            sources.push((format!(r"{lead}{escaped}\s*\("), "function_call"));
        }
        if kind.includes_types() {
            sources.push((format!(r":\s*&?\s*{escaped}{trail}"), "type_annotation"));
            sources.push((format!(r"->\s*{escaped}{trail}"), "return_type"));
            sources.push((format!(r"<\s*{escaped}{trail}"), "generic_type"));
            sources.push((format!(r"{lead}{escaped}\s*\{{"), "type_instantiation"));
        }
        if kind.includes_values() {
            sources.push((format!(r"{lead}{escaped}\s*=[^=]"), "assignment"));
            sources.push((format!(r"{lead}{escaped}\."), "property_access"));
        }

        let patterns = sources
            .into_iter()
            .map(|(src, label)| compile(&src).map(|r| (r, label)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { word, patterns })
    }

    /// Classify `line`, or `None` if the symbol does not appear in it
    pub fn classify(&self, line: &str) -> Option<LineMatch> {
        let found = self.word.find(line)?;
        let column = line[..found.start()].chars().count();

        let usage = self
            .patterns
            .iter()
            .find(|(re, _)| re.is_match(line))
            .map(|(_, label)| *label)
            .unwrap_or("reference");

        Some(LineMatch { column, usage })
    }
}

/// Word-boundary anchors for `name`
///
/// `\b` only holds next to a word character, so an edge of the name that
/// is punctuation (`$scope`, `operator==`) is left unanchored.
fn word_boundaries(name: &str) -> (&'static str, &'static str) {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let lead = if is_word(name.chars().next()) { r"\b" } else { "" };
    let trail = if is_word(name.chars().last()) { r"\b" } else { "" };
    (lead, trail)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| GatewayError::Internal(format!("Invalid symbol pattern '{pattern}': {e}")))
}
