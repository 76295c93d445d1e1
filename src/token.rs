use std::fmt;

/// Lexical category of a [`Token`]. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// A mnemonic from the instruction table, like `HLT`
    Instruction,
    /// A register name, like `AX` or `DS`
    Register,
    /// `BYTE PTR` / `WORD PTR`
    TypeSpecifier,
    /// `0x1F`, `0FFh`
    HexConstant,
    /// `1010b`
    BinConstant,
    /// `42`
    DecConstant,
    /// A quoted string, quotes included
    StrConstant,
    /// `DB`, `EQU`, `.DATA SEGMENT`, ...
    PseudoInstruction,
    /// Anything that matched nothing else
    Symbol,

    // --- Punctuation
    /// `,` `:` `[` `]`
    Separator,
    /// A whole bracketed expression, like `[BX]`
    CompoundOperator,
}

impl Category {
    pub fn tag(self) -> &'static str {
        match self {
            Category::Instruction => "INSTRUCTION",
            Category::Register => "REGISTER",
            Category::TypeSpecifier => "TYPE_SPECIFIER",
            Category::HexConstant => "HEX_CONSTANT",
            Category::BinConstant => "BIN_CONSTANT",
            Category::DecConstant => "DEC_CONSTANT",
            Category::StrConstant => "STR_CONSTANT",
            Category::PseudoInstruction => "PSEUDO_INSTRUCTION",
            Category::Symbol => "SYMBOL",
            Category::Separator => "SEPARATOR",
            Category::CompoundOperator => "COMPOUND_OPERATOR",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A classified piece of source text.
///
/// `line` is the 1-based position of the line among the *cleaned* lines,
/// so blank and comment-only lines are not counted.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub value: String,
    pub category: Category,
    pub line: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, category: Category, line: usize) -> Self {
        Token {
            value: value.into(),
            category,
            line,
        }
    }
}
