use std::path::PathBuf;

use crate::tables::Table;

#[derive(thiserror::Error, Debug)]
pub enum GenError {
    #[error("line {line}: expected 6 comma-separated fields, found {fields}")]
    MalformedRow { line: usize, fields: usize },
    #[error("line {line}: unknown {table} code {code:?}")]
    UnknownCode {
        line: usize,
        table: Table,
        code: String,
    },
    #[error("line {line}: opcode {value:?} is not a hex byte")]
    BadOpcode { line: usize, value: String },
    #[error("line {line}: invalid opcode row must use imp/NW, found {addr}/{wb}")]
    NonConformingInvalid {
        line: usize,
        addr: String,
        wb: String,
    },
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    /// Source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            GenError::MalformedRow { line, .. }
            | GenError::UnknownCode { line, .. }
            | GenError::BadOpcode { line, .. }
            | GenError::NonConformingInvalid { line, .. } => Some(*line),
            GenError::Io { .. } => None,
        }
    }
}
