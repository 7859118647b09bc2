//! Lexer for Stax assembly

use logos::Logos;

/// Tokens for Stax assembly source.
///
/// Mnemonics carry their suffixes as one identifier (`lit.s`, `jmp.r`,
/// `fetch.b.r`); the parser splits on the dots. Comments run from `#` or
/// `;` to the end of the line.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
#[logos(skip r";[^\n]*")]
pub enum Token {
    /// Mnemonic (with optional suffixes) or label name
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Decimal number, optionally negative
    #[regex(r"-?[0-9]+", |lex| lex.slice().parse().ok())]
    Number(i64),

    /// Hexadecimal number
    #[regex(r"0x[0-9a-fA-F]+", |lex| i64::from_str_radix(&lex.slice()[2..], 16).ok())]
    Hex(i64),

    /// Binary number
    #[regex(r"0b[01]+", |lex| i64::from_str_radix(&lex.slice()[2..], 2).ok())]
    Binary(i64),

    /// String literal for `.ascii`
    #[regex(r#""[^"\n]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Str(String),

    /// Directive (.org, .byte, .short, .word, .ascii)
    #[regex(r"\.[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice()[1..].to_string())]
    Directive(String),

    /// Label definition marker
    #[token(":")]
    Colon,

    #[regex(r"\n")]
    Newline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_mnemonics_with_suffixes() {
        let mut lex = Token::lexer("lit.s 45 fetch.b.r");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("lit.s".into()))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(45))));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("fetch.b.r".into()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn lexes_numbers() {
        let mut lex = Token::lexer("42 -10 0x1F 0b1010");
        assert_eq!(lex.next(), Some(Ok(Token::Number(42))));
        assert_eq!(lex.next(), Some(Ok(Token::Number(-10))));
        assert_eq!(lex.next(), Some(Ok(Token::Hex(0x1F))));
        assert_eq!(lex.next(), Some(Ok(Token::Binary(0b1010))));
    }

    #[test]
    fn lexes_labels_and_directives() {
        let mut lex = Token::lexer("start:\n.org 0x100");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("start".into()))));
        assert_eq!(lex.next(), Some(Ok(Token::Colon)));
        assert_eq!(lex.next(), Some(Ok(Token::Newline)));
        assert_eq!(lex.next(), Some(Ok(Token::Directive("org".into()))));
        assert_eq!(lex.next(), Some(Ok(Token::Hex(0x100))));
    }

    #[test]
    fn skips_comments() {
        let mut lex = Token::lexer("nop # push nothing\n; whole line\nret");
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("nop".into()))));
        assert_eq!(lex.next(), Some(Ok(Token::Newline)));
        assert_eq!(lex.next(), Some(Ok(Token::Newline)));
        assert_eq!(lex.next(), Some(Ok(Token::Identifier("ret".into()))));
    }

    #[test]
    fn lexes_strings() {
        let mut lex = Token::lexer(r#".ascii "hi there""#);
        assert_eq!(lex.next(), Some(Ok(Token::Directive("ascii".into()))));
        assert_eq!(lex.next(), Some(Ok(Token::Str("hi there".into()))));
    }
}
