pub mod config;
pub mod error;
pub mod row;
pub mod tables;
pub mod transpile;

pub use config::{GenConfig, DEFAULT_INPUT};
pub use error::GenError;
pub use row::Row;
pub use tables::{AddressingMode, Writeback};
pub use transpile::{transpile_file, transpile_str, Entry, EntryOp, GeneratedTable, Transpiler};
