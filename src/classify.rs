use crate::tables;
use crate::token::Category;
use peg::parser;

parser! {
    grammar literal() for str {
        rule HEX_DIGIT() = ['0'..='9' | 'a'..='f' | 'A'..='F']
        rule BIN_DIGIT() = ['0' | '1']
        rule DIGIT() = ['0'..='9']

        // A `0x` prefix commits to the prefixed form: `0x1Fh` is not hex.
        pub rule hex()
            = ("0x" / "0X") HEX_DIGIT()+
            / HEX_DIGIT()+ ['h' | 'H']

        pub rule bin() = BIN_DIGIT()+ ['b' | 'B']

        pub rule dec() = DIGIT()+
    }
}

pub fn is_hex_constant(text: &str) -> bool {
    literal::hex(text).is_ok()
}

pub fn is_bin_constant(text: &str) -> bool {
    literal::bin(text).is_ok()
}

pub fn is_dec_constant(text: &str) -> bool {
    literal::dec(text).is_ok()
}

pub fn is_str_constant(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) => open == close && matches!(open, '\'' | '"'),
        _ => false,
    }
}

/// Assigns a category to a single token string.
///
/// First match wins: instruction, register, type specifier, hex, binary,
/// decimal, string, pseudo-instruction, and finally symbol.
pub fn classify(text: &str) -> Category {
    let upper = text.to_uppercase();

    if tables::is_instruction(&upper) {
        Category::Instruction
    } else if tables::is_register(&upper) {
        Category::Register
    } else if tables::is_type_specifier(&upper) {
        Category::TypeSpecifier
    } else if is_hex_constant(text) {
        Category::HexConstant
    } else if is_bin_constant(text) {
        Category::BinConstant
    } else if is_dec_constant(text) {
        Category::DecConstant
    } else if is_str_constant(text) {
        Category::StrConstant
    } else if tables::is_pseudo_word(text) {
        Category::PseudoInstruction
    } else {
        Category::Symbol
    }
}
