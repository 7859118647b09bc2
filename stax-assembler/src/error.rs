//! Assembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssemblerError {
    #[error("unrecognized input at line {line}")]
    Lex { line: usize },

    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("unknown mnemonic at line {line}: {name}")]
    UnknownMnemonic { line: usize, name: String },

    #[error("unknown suffix at line {line}: {name}")]
    UnknownSuffix { line: usize, name: String },

    #[error("invalid directive at line {line}: .{name}")]
    InvalidDirective { line: usize, name: String },

    #[error("duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("undefined label at line {line}: {name}")]
    UndefinedLabel { line: usize, name: String },

    #[error("value {value} does not fit in a {width}-byte operand at line {line}")]
    ImmediateOutOfRange { line: usize, value: i64, width: u32 },

    #[error("image exceeds memory capacity at line {line}")]
    ImageOverflow { line: usize },
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
