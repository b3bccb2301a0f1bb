use std::path::PathBuf;

use thiserror::Error;

/// Erros possíveis ao converter um extrato em script de automação
#[derive(Error, Debug)]
pub enum ReplayError {
    /// O CSV não tem uma coluna exigida pelo banco selecionado
    #[error("Missing required CSV column {column:?}{}", row_suffix(.row))]
    Schema { column: String, row: Option<u64> },

    /// Data ou valor que não pode ser interpretado
    #[error("Invalid {field} {value:?}: {reason}{}", row_suffix(.row))]
    Format {
        field: String,
        value: String,
        reason: String,
        row: Option<u64>,
    },

    /// Chave de banco fora da tabela de bancos suportados
    #[error("Unknown bank selection {0:?}")]
    UnknownBank(String),

    /// Configuração incompleta ou ilegível
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// O template mestre não contém o placeholder
    #[error("Placeholder {placeholder:?} not found in template {}", .path.display())]
    Template { placeholder: String, path: PathBuf },

    /// Falha ao abrir, ler ou gravar um arquivo
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Falha ao serializar um comando
    #[error("Failed to serialize command: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReplayError {
    pub(crate) fn format(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
            row: None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attaches a 1-based data row number to row-level errors.
    ///
    /// Errors that already carry a row, or that are not tied to a row, are
    /// returned unchanged.
    pub fn at_row(self, line: u64) -> Self {
        match self {
            Self::Schema { column, row: None } => Self::Schema {
                column,
                row: Some(line),
            },
            Self::Format {
                field,
                value,
                reason,
                row: None,
            } => Self::Format {
                field,
                value,
                reason,
                row: Some(line),
            },
            other => other,
        }
    }
}

fn row_suffix(row: &Option<u64>) -> String {
    row.map(|r| format!(" (row {r})")).unwrap_or_default()
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type ReplayResult<T> = Result<T, ReplayError>;
