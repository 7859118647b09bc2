//! Assembly parser
//!
//! Turns the token stream into a flat list of items: labels, directives,
//! and instructions. Mnemonic suffixes select the operand size (`.b`,
//! `.s`; word is the default) and the relative flag (`.r`). Only `lit`
//! takes an operand: a number or a label name.

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;
use logos::Logos;
use stax_spec::{Instruction, Opcode, OperandSize, MEM_SIZE};

/// Immediate operand of a `lit` instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(i64),
    Label(String),
}

/// One parsed source item.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Label {
        name: String,
    },
    Org {
        addr: u32,
    },
    Data {
        bytes: Vec<u8>,
        line: usize,
    },
    Inst {
        inst: Instruction,
        operand: Option<Operand>,
        line: usize,
    },
}

/// Parse assembly source into items.
pub fn parse(source: &str) -> Result<Vec<Item>> {
    let mut tokens = Vec::new();
    let mut line = 1;
    for tok in Token::lexer(source) {
        match tok {
            Ok(Token::Newline) => {
                tokens.push((Token::Newline, line));
                line += 1;
            }
            Ok(t) => tokens.push((t, line)),
            Err(()) => return Err(AssemblerError::Lex { line }),
        }
    }
    Parser { tokens, pos: 0 }.items()
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn bump(&mut self) -> Option<(Token, usize)> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn items(mut self) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        while let Some((tok, line)) = self.bump() {
            match tok {
                Token::Newline => {}
                Token::Identifier(name) => {
                    if matches!(self.peek(), Some(Token::Colon)) {
                        self.bump();
                        items.push(Item::Label { name });
                    } else {
                        items.push(self.instruction(&name, line)?);
                    }
                }
                Token::Directive(name) => items.push(self.directive(&name, line)?),
                other => {
                    return Err(AssemblerError::Syntax {
                        line,
                        message: format!("expected mnemonic, directive, or label, found {other:?}"),
                    })
                }
            }
        }
        Ok(items)
    }

    fn instruction(&mut self, name: &str, line: usize) -> Result<Item> {
        let mut parts = name.split('.');
        let mnemonic = parts.next().unwrap_or_default();
        let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| {
            AssemblerError::UnknownMnemonic {
                line,
                name: mnemonic.to_string(),
            }
        })?;

        let mut size = OperandSize::Word;
        let mut relative = false;
        for part in parts {
            match part {
                "b" => size = OperandSize::Byte,
                "s" => size = OperandSize::Short,
                "r" => relative = true,
                _ => {
                    return Err(AssemblerError::UnknownSuffix {
                        line,
                        name: part.to_string(),
                    })
                }
            }
        }

        let inst = Instruction {
            opcode,
            size,
            relative,
        };
        let operand = if opcode == Opcode::Lit {
            Some(self.operand(line)?)
        } else {
            None
        };
        Ok(Item::Inst {
            inst,
            operand,
            line,
        })
    }

    fn operand(&mut self, line: usize) -> Result<Operand> {
        match self.bump() {
            Some((Token::Number(n), _))
            | Some((Token::Hex(n), _))
            | Some((Token::Binary(n), _)) => Ok(Operand::Value(n)),
            Some((Token::Identifier(name), _)) => Ok(Operand::Label(name)),
            _ => Err(AssemblerError::Syntax {
                line,
                message: "lit requires an immediate operand".to_string(),
            }),
        }
    }

    fn directive(&mut self, name: &str, line: usize) -> Result<Item> {
        match name {
            "org" => {
                let addr = self.number(line, ".org takes an address")?;
                if !(0..MEM_SIZE as i64).contains(&addr) {
                    return Err(AssemblerError::Syntax {
                        line,
                        message: format!(".org address {addr} is out of range"),
                    });
                }
                Ok(Item::Org { addr: addr as u32 })
            }
            "byte" => {
                let bytes = self
                    .numbers(line, ".byte takes one or more values")?
                    .into_iter()
                    .map(|v| narrow(v, 1, line).map(|v| v as u8))
                    .collect::<Result<Vec<u8>>>()?;
                Ok(Item::Data { bytes, line })
            }
            "short" => {
                let mut bytes = Vec::new();
                for v in self.numbers(line, ".short takes one or more values")? {
                    let v = narrow(v, 2, line)?;
                    bytes.extend_from_slice(&(v as u16).to_le_bytes());
                }
                Ok(Item::Data { bytes, line })
            }
            "word" => {
                let mut bytes = Vec::new();
                for v in self.numbers(line, ".word takes one or more values")? {
                    let v = narrow(v, 4, line)?;
                    bytes.extend_from_slice(&(v as u32).to_le_bytes());
                }
                Ok(Item::Data { bytes, line })
            }
            "ascii" => match self.bump() {
                Some((Token::Str(s), _)) => Ok(Item::Data {
                    bytes: s.into_bytes(),
                    line,
                }),
                _ => Err(AssemblerError::Syntax {
                    line,
                    message: ".ascii takes a string".to_string(),
                }),
            },
            _ => Err(AssemblerError::InvalidDirective {
                line,
                name: name.to_string(),
            }),
        }
    }

    fn number(&mut self, line: usize, expected: &str) -> Result<i64> {
        match self.bump() {
            Some((Token::Number(n), _))
            | Some((Token::Hex(n), _))
            | Some((Token::Binary(n), _)) => Ok(n),
            _ => Err(AssemblerError::Syntax {
                line,
                message: expected.to_string(),
            }),
        }
    }

    fn numbers(&mut self, line: usize, expected: &str) -> Result<Vec<i64>> {
        let mut values = Vec::new();
        while let Some(Token::Number(_) | Token::Hex(_) | Token::Binary(_)) = self.peek() {
            values.push(self.number(line, expected)?);
        }
        if values.is_empty() {
            return Err(AssemblerError::Syntax {
                line,
                message: expected.to_string(),
            });
        }
        Ok(values)
    }

}

/// Range-check a value against an operand width, accepting both the
/// signed and unsigned interpretation of that width.
pub(crate) fn narrow(value: i64, width: u32, line: usize) -> Result<i64> {
    let fits = match width {
        1 => (-128..=255).contains(&value),
        2 => (-32768..=65535).contains(&value),
        _ => (i32::MIN as i64..=u32::MAX as i64).contains(&value),
    };
    if fits {
        Ok(value)
    } else {
        Err(AssemblerError::ImmediateOutOfRange { line, value, width })
    }
}
