use serde::Serialize;

use crate::error::GenError;

pub const FIELD_COUNT: usize = 6;
pub const HEADER_TAG: &str = "hex";

/// One CSV row, fields as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub line: usize,
    pub opcode: String,
    pub mnemonic: String,
    pub addr: String,
    pub wb: String,
    pub byte_len: String, // emitted verbatim
    pub cycles: String,   // emitted verbatim
}

impl Row {
    /// Parse a raw line. Header rows yield `Ok(None)`.
    pub fn parse(line: usize, text: &str) -> Result<Option<Row>, GenError> {
        let fields: Vec<&str> = text.trim().split(',').collect();
        let [opcode, mnemonic, addr, wb, byte_len, cycles]: [&str; FIELD_COUNT] = fields
            .try_into()
            .map_err(|rest: Vec<&str>| GenError::MalformedRow { line, fields: rest.len() })?;
        if opcode == HEADER_TAG {
            return Ok(None);
        }
        Ok(Some(Row {
            line,
            opcode: opcode.to_string(),
            mnemonic: mnemonic.to_string(),
            addr: addr.to_string(),
            wb: wb.to_string(),
            byte_len: byte_len.to_string(),
            cycles: cycles.to_string(),
        }))
    }

    /// Rows without a mnemonic describe unimplemented opcodes.
    pub fn is_invalid(&self) -> bool {
        self.mnemonic.is_empty()
    }

    pub fn opcode_value(&self) -> Result<u8, GenError> {
        let s = self.opcode.trim();
        let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        u8::from_str_radix(s, 16).map_err(|_| GenError::BadOpcode {
            line: self.line,
            value: self.opcode.clone(),
        })
    }
}
