//! Row-by-row translation of the instruction CSV into decode-table entries.
//!
//! Each accepted row becomes one `Instruction::new(..)` initializer, in input
//! order. Mnemonics are collected on the side and rendered after a blank line
//! as a sorted list ready to paste into the `Opcode` enum.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GenConfig;
use crate::error::GenError;
use crate::row::Row;
use crate::tables::{AddressingMode, Table, Writeback};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntryOp {
    Named(String),
    Invalid,
    InvalidTagged(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub opcode: String, // as written in the CSV, only used in the comment
    pub op: EntryOp,
    pub mode: AddressingMode,
    pub writeback: Writeback,
    pub byte_len: String,
    pub cycles: String,
}

impl Entry {
    pub fn is_invalid(&self) -> bool {
        !matches!(self.op, EntryOp::Named(_))
    }
}

impl fmt::Display for EntryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryOp::Named(m) => write!(f, "Opcode::{m}"),
            EntryOp::Invalid => f.write_str("Opcode::Invalid"),
            EntryOp::InvalidTagged(v) => write!(f, "Opcode::Invalid(0x{v:02X})"),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/* {} */    Instruction::new({}, AddressingMode::{}, Writeback::{}, {}, {}),",
            self.opcode, self.op, self.mode, self.writeback, self.byte_len, self.cycles
        )
    }
}

/// Generated entries plus the distinct mnemonics seen.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GeneratedTable {
    pub entries: Vec<Entry>,
    pub mnemonics: BTreeSet<String>,
}

impl GeneratedTable {
    /// Two-section paste text: entry lines, a blank line, then `MNEMONIC,` lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        use std::fmt::Write as _;
        for e in &self.entries {
            let _ = writeln!(out, "{e}");
        }
        out.push('\n');
        for m in &self.mnemonics {
            let _ = writeln!(out, "{m},");
        }
        out
    }
}

#[derive(Debug, Default)]
pub struct Transpiler {
    cfg: GenConfig,
    table: GeneratedTable,
}

impl Transpiler {
    pub fn new(cfg: GenConfig) -> Self {
        Self {
            cfg,
            table: GeneratedTable::default(),
        }
    }

    /// Feed one raw CSV line (1-based `line` is used in diagnostics).
    pub fn push_line(&mut self, line: usize, text: &str) -> Result<(), GenError> {
        match Row::parse(line, text)? {
            Some(row) => self.push_row(&row),
            None => Ok(()),
        }
    }

    pub fn push_row(&mut self, row: &Row) -> Result<(), GenError> {
        let entry = if row.is_invalid() {
            self.invalid_entry(row)?
        } else {
            let mode = AddressingMode::from_code(&row.addr).ok_or_else(|| GenError::UnknownCode {
                line: row.line,
                table: Table::AddressingMode,
                code: row.addr.clone(),
            })?;
            let writeback = Writeback::from_code(&row.wb).ok_or_else(|| GenError::UnknownCode {
                line: row.line,
                table: Table::Writeback,
                code: row.wb.clone(),
            })?;
            self.table.mnemonics.insert(row.mnemonic.clone());
            Entry {
                opcode: row.opcode.clone(),
                op: EntryOp::Named(row.mnemonic.clone()),
                mode,
                writeback,
                byte_len: row.byte_len.clone(),
                cycles: row.cycles.clone(),
            }
        };
        debug!(line = row.line, entry = %entry, "entry");
        self.table.entries.push(entry);
        Ok(())
    }

    fn invalid_entry(&self, row: &Row) -> Result<Entry, GenError> {
        let conforming = AddressingMode::Implicit.code() == Some(row.addr.as_str())
            && Writeback::NoWriteback.code() == row.wb;
        if !conforming {
            if self.cfg.strict {
                return Err(GenError::NonConformingInvalid {
                    line: row.line,
                    addr: row.addr.clone(),
                    wb: row.wb.clone(),
                });
            }
            warn!(line = row.line, addr = %row.addr, wb = %row.wb, "invalid opcode row not coded imp/NW");
        }
        let op = if self.cfg.tag_invalid {
            EntryOp::InvalidTagged(row.opcode_value()?)
        } else {
            EntryOp::Invalid
        };
        Ok(Entry {
            opcode: row.opcode.clone(),
            op,
            mode: AddressingMode::None,
            writeback: Writeback::NoWriteback,
            byte_len: "0".to_string(),
            cycles: "0".to_string(),
        })
    }

    pub fn finish(self) -> GeneratedTable {
        let invalid = self.table.entries.iter().filter(|e| e.is_invalid()).count();
        info!(
            entries = self.table.entries.len(),
            invalid,
            mnemonics = self.table.mnemonics.len(),
            "table generated"
        );
        self.table
    }
}

pub fn transpile_str(text: &str, cfg: GenConfig) -> Result<GeneratedTable, GenError> {
    let mut t = Transpiler::new(cfg);
    for (i, line) in text.lines().enumerate() {
        t.push_line(i + 1, line)?;
    }
    Ok(t.finish())
}

pub fn transpile_file(path: &Path, cfg: GenConfig) -> Result<GeneratedTable, GenError> {
    let text = std::fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    transpile_str(&text, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_body_ignores_row_fields() {
        let t = transpile_str("hex,instr,addr,wb,byteLen,time\n02,,imp,NW,3,9\n", GenConfig::default()).unwrap();
        assert_eq!(
            t.entries[0].to_string(),
            "/* 02 */    Instruction::new(Opcode::Invalid, AddressingMode::None, Writeback::NoWriteback, 0, 0),"
        );
        assert!(t.mnemonics.is_empty());
    }

    #[test]
    fn tagged_invalid_carries_opcode_value() {
        let cfg = GenConfig { tag_invalid: true, ..GenConfig::default() };
        let t = transpile_str("FF,,imp,NW,0,0", cfg).unwrap();
        assert!(t.entries[0].to_string().contains("Opcode::Invalid(0xFF)"));
        let t = transpile_str("0B,,imp,NW,0,0", cfg).unwrap();
        assert!(t.entries[0].to_string().contains("Opcode::Invalid(0x0B)"));
    }

    #[test]
    fn strict_rejects_odd_invalid_rows() {
        let cfg = GenConfig { strict: true, ..GenConfig::default() };
        let err = transpile_str("03,,abs,M,3,4", cfg).unwrap_err();
        assert!(matches!(err, GenError::NonConformingInvalid { line: 1, .. }));
        let t = transpile_str("03,,abs,M,3,4", GenConfig::default()).unwrap();
        assert_eq!(
            t.entries[0].to_string(),
            "/* 03 */    Instruction::new(Opcode::Invalid, AddressingMode::None, Writeback::NoWriteback, 0, 0),"
        );
    }

    #[test]
    fn numeric_fields_are_emitted_verbatim() {
        let t = transpile_str("A9,LDA,imm,A,02,300", GenConfig::default()).unwrap();
        assert_eq!(
            t.entries[0].to_string(),
            "/* A9 */    Instruction::new(Opcode::LDA, AddressingMode::Immediate, Writeback::Accumulator, 02, 300),"
        );
    }

    #[test]
    fn blank_line_aborts_the_run() {
        let csv = "hex,instr,addr,wb,byteLen,time\nA9,LDA,imm,A,2,2\n\nEA,NOP,imp,NW,1,2\n";
        let err = transpile_str(csv, GenConfig::default()).unwrap_err();
        assert!(matches!(err, GenError::MalformedRow { line: 3, fields: 1 }));
    }

    #[test]
    fn unknown_writeback_names_the_table() {
        let err = transpile_str("A9,LDA,imm,Q,2,2", GenConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "line 1: unknown writeback code \"Q\"");
    }

    #[test]
    fn render_ends_with_mnemonic_section() {
        let t = transpile_str("EA,NOP,imp,NW,1,2", GenConfig::default()).unwrap();
        assert_eq!(
            t.render(),
            "/* EA */    Instruction::new(Opcode::NOP, AddressingMode::Implicit, Writeback::NoWriteback, 1, 2),\n\nNOP,\n"
        );
    }
}
