//! Core data types for the repository gateway.
//!
//! This module defines the transport-agnostic request and response
//! shapes shared by the CLI and HTTP adapters, plus the records
//! produced by the indexing capability.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::core::error::{ErrorKind, GatewayError, Result};

/// Validate that a required field is present and non-blank
pub fn required(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(GatewayError::Validation(format!("{field} is required"))),
    }
}

/// A raw gateway request, as received from a front end
///
/// Fields are optional because front ends pass through whatever the
/// caller supplied; [`GatewayService::dispatch`] validates them before
/// touching session state.
///
/// [`GatewayService::dispatch`]: crate::core::gateway::GatewayService::dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Init {
        path: Option<String>,
    },
    FileTree,
    FindSymbols {
        symbol: Option<String>,
        symbol_type: Option<String>,
    },
    GetFileContent {
        path: Option<String>,
    },
}

impl Request {
    /// Operation name as exposed on both front ends
    pub fn operation(&self) -> &'static str {
        match self {
            Request::Init { .. } => "init",
            Request::FileTree => "file_tree",
            Request::FindSymbols { .. } => "find_symbols",
            Request::GetFileContent { .. } => "get_file_content",
        }
    }
}

/// Validated request shape for `find_symbols`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolQuery {
    pub symbol_name: String,
    pub symbol_type: String,
}

impl SymbolQuery {
    /// Build a query, failing if either field is missing or blank
    pub fn parse(symbol_name: Option<String>, symbol_type: Option<String>) -> Result<Self> {
        let missing = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        if missing(&symbol_name) || missing(&symbol_type) {
            return Err(GatewayError::Validation(
                "symbol and symbol_type are required".to_string(),
            ));
        }

        Ok(Self {
            symbol_name: symbol_name.unwrap_or_default(),
            symbol_type: symbol_type.unwrap_or_default(),
        })
    }
}

/// Payload of a successful `init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitResult {
    /// The path exactly as supplied by the caller
    pub path: String,
}

/// One file or directory in a repository file tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTreeEntry {
    /// Root-relative path, `/`-separated
    pub path: String,

    /// Final path component
    pub name: String,

    pub is_dir: bool,

    /// Size in bytes (0 for directories)
    pub size: u64,
}

/// A location where a named symbol appears
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolUsage {
    /// Root-relative path of the file, `/`-separated
    pub file: String,

    /// 1-based line number
    pub line: usize,

    /// 0-based character column of the symbol within the line
    pub column: usize,

    /// The symbol that was searched for
    pub name: String,

    /// How the symbol is used on this line (e.g. "definition", "function_call")
    pub usage: String,

    /// The trimmed source line
    pub context: String,
}

/// Body of a [`ResponseEnvelope`]: exactly one branch is populated
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeBody {
    Result(Value),
    Error { kind: ErrorKind, message: String },
}

/// Uniform response wrapper returned by every gateway operation
///
/// Serializes as `{"Result": ..., "Status": 200}` on success and as
/// `{"error": "..."}` on failure. This shape is a wire contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    status: u16,
    body: EnvelopeBody,
}

impl ResponseEnvelope {
    /// Successful envelope with status 200
    pub fn success(result: Value) -> Self {
        Self {
            status: 200,
            body: EnvelopeBody::Result(result),
        }
    }

    /// Failure envelope carrying the error's status and message
    pub fn failure(error: &GatewayError) -> Self {
        Self {
            status: error.status_code(),
            body: EnvelopeBody::Error {
                kind: error.kind(),
                message: error.message(),
            },
        }
    }

    /// Wrap an operation outcome
    pub fn from_result<T: Serialize>(outcome: Result<T>) -> Self {
        match outcome.and_then(|v| serde_json::to_value(v).map_err(GatewayError::from)) {
            Ok(value) => Self::success(value),
            Err(e) => Self::failure(&e),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &EnvelopeBody {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        matches!(self.body, EnvelopeBody::Result(_))
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.body {
            EnvelopeBody::Result(v) => Some(v),
            EnvelopeBody::Error { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.body {
            EnvelopeBody::Result(_) => None,
            EnvelopeBody::Error { message, .. } => Some(message),
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match &self.body {
            EnvelopeBody::Result(_) => None,
            EnvelopeBody::Error { kind, .. } => Some(*kind),
        }
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.body {
            EnvelopeBody::Result(value) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("Result", value)?;
                map.serialize_entry("Status", &self.status)?;
                map.end()
            }
            EnvelopeBody::Error { message, .. } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", message)?;
                map.end()
            }
        }
    }
}
