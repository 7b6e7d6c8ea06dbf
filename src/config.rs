use serde::{Deserialize, Serialize};

/// Default input path, relative to the working directory.
pub const DEFAULT_INPUT: &str = "insts.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    pub strict: bool,      // reject invalid rows not coded as imp/NW
    pub tag_invalid: bool, // emit Opcode::Invalid(0xNN) instead of Opcode::Invalid
}
