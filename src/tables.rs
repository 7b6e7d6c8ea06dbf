//! Fixed code tables for the `addr` and `wb` CSV columns.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressingMode {
    /// Only used by the invalid-opcode sentinel; has no CSV code.
    None,
    Implicit,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Relative,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Writeback {
    Accumulator,
    X,
    Y,
    Memory,
    PC,
    SP,
    PS,
    NoWriteback,
}

/// Which lookup table a code was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Table {
    AddressingMode,
    Writeback,
}

pub const ADDR_CODES: &[(&str, AddressingMode)] = &[
    ("imp", AddressingMode::Implicit),
    ("acc", AddressingMode::Accumulator),
    ("imm", AddressingMode::Immediate),
    ("zp", AddressingMode::ZeroPage),
    ("zpx", AddressingMode::ZeroPageX),
    ("zpy", AddressingMode::ZeroPageY),
    ("rel", AddressingMode::Relative),
    ("abs", AddressingMode::Absolute),
    ("abx", AddressingMode::AbsoluteX),
    ("aby", AddressingMode::AbsoluteY),
    ("ind", AddressingMode::Indirect),
    ("inx", AddressingMode::IndirectX),
    ("iny", AddressingMode::IndirectY),
];

pub const WB_CODES: &[(&str, Writeback)] = &[
    ("A", Writeback::Accumulator),
    ("X", Writeback::X),
    ("Y", Writeback::Y),
    ("M", Writeback::Memory),
    ("PC", Writeback::PC),
    ("SP", Writeback::SP),
    ("PS", Writeback::PS),
    ("NW", Writeback::NoWriteback),
];

impl AddressingMode {
    pub fn from_code(code: &str) -> Option<Self> {
        ADDR_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, mode)| mode)
    }

    /// CSV code for this mode; `None` for the sentinel-only variant.
    pub fn code(self) -> Option<&'static str> {
        ADDR_CODES
            .iter()
            .find(|(_, m)| *m == self)
            .map(|&(c, _)| c)
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressingMode::None => "None",
            AddressingMode::Implicit => "Implicit",
            AddressingMode::Accumulator => "Accumulator",
            AddressingMode::Immediate => "Immediate",
            AddressingMode::ZeroPage => "ZeroPage",
            AddressingMode::ZeroPageX => "ZeroPageX",
            AddressingMode::ZeroPageY => "ZeroPageY",
            AddressingMode::Relative => "Relative",
            AddressingMode::Absolute => "Absolute",
            AddressingMode::AbsoluteX => "AbsoluteX",
            AddressingMode::AbsoluteY => "AbsoluteY",
            AddressingMode::Indirect => "Indirect",
            AddressingMode::IndirectX => "IndirectX",
            AddressingMode::IndirectY => "IndirectY",
        }
    }
}

impl Writeback {
    pub fn from_code(code: &str) -> Option<Self> {
        WB_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, wb)| wb)
    }

    pub fn code(self) -> &'static str {
        match self {
            Writeback::Accumulator => "A",
            Writeback::X => "X",
            Writeback::Y => "Y",
            Writeback::Memory => "M",
            Writeback::PC => "PC",
            Writeback::SP => "SP",
            Writeback::PS => "PS",
            Writeback::NoWriteback => "NW",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Writeback::Accumulator => "Accumulator",
            Writeback::X => "X",
            Writeback::Y => "Y",
            Writeback::Memory => "Memory",
            Writeback::PC => "PC",
            Writeback::SP => "SP",
            Writeback::PS => "PS",
            Writeback::NoWriteback => "NoWriteback",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Writeback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::AddressingMode => f.write_str("addressing mode"),
            Table::Writeback => f.write_str("writeback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_round_trips_through_its_table() {
        for &(code, mode) in ADDR_CODES {
            assert_eq!(AddressingMode::from_code(code), Some(mode));
            assert_eq!(mode.code(), Some(code));
        }
        for &(code, wb) in WB_CODES {
            assert_eq!(Writeback::from_code(code), Some(wb));
            assert_eq!(wb.code(), code);
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(AddressingMode::from_code("IMM"), None);
        assert_eq!(Writeback::from_code("a"), None);
        assert_eq!(AddressingMode::from_code(""), None);
    }

    #[test]
    fn sentinel_mode_has_no_code() {
        assert_eq!(AddressingMode::None.code(), None);
        assert_eq!(AddressingMode::None.to_string(), "None");
    }

    #[test]
    fn names_match_generated_identifiers() {
        assert_eq!(AddressingMode::from_code("zpx").unwrap().to_string(), "ZeroPageX");
        assert_eq!(Writeback::from_code("NW").unwrap().to_string(), "NoWriteback");
        assert_eq!(Writeback::from_code("A").unwrap().to_string(), "Accumulator");
    }
}
