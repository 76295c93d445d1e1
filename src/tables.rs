//! Fixed vocabularies used by the classifier and the scanner.
//!
//! Instruction, register and type-specifier names are stored upper case and
//! looked up case-insensitively. Pseudo-instructions are matched exactly.

use std::collections::HashSet;
use std::sync::LazyLock;

pub static INSTRUCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from_iter([
        "AAA", "AAD", "HLT", "INTO", "SCASW", "STC", "DEC", "IDIV", "IMUL", "POP", "ADC", "CMP",
        "LES", "LDS", "JAE", "JC", "JGE", "JNB", "JNG", "JNO",
    ])
});

pub static REGISTERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from_iter([
        // 16-bit
        "AX", "BX", "CX", "DX", "SI", "DI", "SP", "BP",
        // 8-bit
        "AL", "AH", "BL", "BH", "CL", "CH", "DL", "DH",
        // segment
        "CS", "DS", "SS", "ES",
    ])
});

pub static TYPE_SPECIFIERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from_iter(["BYTE PTR", "WORD PTR"]));

pub static PSEUDO_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from_iter(["DUP", "DB", "DW", "DD", "EQU", "ORG"]));

/// Multi-word pseudo-instructions, longest first so that a prefix scan
/// always prefers the longest phrase.
pub static PSEUDO_PHRASES: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut phrases = vec![
        ".CODE SEGMENT",
        ".DATA SEGMENT",
        ".STACK SEGMENT",
        ".CODE ENDS",
        ".DATA ENDS",
        ".STACK ENDS",
    ];
    phrases.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    phrases
});

pub fn is_instruction(upper: &str) -> bool {
    INSTRUCTIONS.contains(upper)
}

pub fn is_register(upper: &str) -> bool {
    REGISTERS.contains(upper)
}

pub fn is_type_specifier(upper: &str) -> bool {
    TYPE_SPECIFIERS.contains(upper)
}

pub fn is_pseudo_word(text: &str) -> bool {
    PSEUDO_WORDS.contains(text)
}

/// Returns the pseudo-instruction phrase `text` starts with, if any.
pub fn phrase_at(text: &str) -> Option<&'static str> {
    PSEUDO_PHRASES
        .iter()
        .copied()
        .find(|phrase| text.starts_with(phrase))
}
