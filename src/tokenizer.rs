use crate::classify::classify;
use crate::normalize::clean_lines;
use crate::tables;
use crate::token::{Category, Token};
use tracing::{debug, trace};

/// Scanner state for a single cleaned line.
struct LineScanner<'a, 'o> {
    text: &'a str,
    line: usize,
    cursor: usize,
    buffer: String,
    out: &'o mut Vec<Token>,
}

impl<'a, 'o> LineScanner<'a, 'o> {
    fn new(text: &'a str, line: usize, out: &'o mut Vec<Token>) -> Self {
        Self {
            text,
            line,
            cursor: 0,
            buffer: String::new(),
            out,
        }
    }

    fn run(mut self) {
        while let Some(c) = self.rest().chars().next() {
            // Multi-word pseudo-instructions are matched before the whitespace
            // rule gets a chance to split them.
            if let Some(phrase) = tables::phrase_at(self.rest()) {
                self.flush();
                self.emit(phrase, Category::PseudoInstruction);
                self.cursor += phrase.len();
                continue;
            }

            match c {
                '\'' | '"' => self.scan_string(c),
                ',' | ':' | '[' | ']' => {
                    self.flush();
                    let separator = &self.rest()[..1];
                    self.emit(separator, Category::Separator);
                    self.cursor += 1;
                }
                _ if c.is_whitespace() => {
                    self.flush();
                    self.cursor += c.len_utf8();
                }
                _ => {
                    self.buffer.push(c);
                    self.cursor += c.len_utf8();
                }
            }
        }
        self.flush();
    }

    fn rest(&self) -> &'a str {
        let text = self.text;
        &text[self.cursor..]
    }

    fn scan_string(&mut self, quote: char) {
        self.flush();
        let rest = self.rest();
        match rest[1..].find(quote) {
            Some(end) => {
                let literal = &rest[..end + 2];
                self.emit(literal, Category::StrConstant);
                self.cursor += literal.len();
            }
            None => {
                // Unterminated: the rest of the line becomes plain text.
                self.buffer.push_str(rest);
                self.cursor = self.text.len();
            }
        }
    }

    fn flush(&mut self) {
        let text = self.buffer.trim();
        if !text.is_empty() {
            let token = simple_token(text, self.line);
            trace!(line = token.line, value = %token.value, category = %token.category, "token");
            self.out.push(token);
        }
        self.buffer.clear();
    }

    fn emit(&mut self, value: &str, category: Category) {
        trace!(line = self.line, value, %category, "token");
        self.out.push(Token::new(value, category, self.line));
    }
}

/// Builds the token for text collected between separators.
fn simple_token(text: &str, line: usize) -> Token {
    if text.starts_with('[') && text.ends_with(']') {
        Token::new(text, Category::CompoundOperator, line)
    } else {
        Token::new(text, classify(text), line)
    }
}

/// Converts a whole source text into its token sequence.
///
/// Never fails: anything unrecognized ends up as a [`Category::Symbol`].
pub fn tokenize(source: &str) -> Vec<Token> {
    let lines = clean_lines(source);
    let mut tokens = Vec::new();
    for line in &lines {
        LineScanner::new(line.text, line.number, &mut tokens).run();
    }
    debug!(lines = lines.len(), tokens = tokens.len(), "analysis finished");
    tokens
}

/// Holds a source text and the tokens of its latest analysis.
#[derive(Debug, Default, Clone)]
pub struct Lexer {
    source: String,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Self {
        Lexer {
            source: source.into(),
            tokens: Vec::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Runs the analysis, replacing any previous result.
    pub fn analyze(&mut self) -> &[Token] {
        self.tokens = tokenize(&self.source);
        &self.tokens
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Category, Token};
    use crate::tokenizer::{Lexer, simple_token, tokenize};

    fn pairs(tokens: &[Token]) -> Vec<(&str, Category)> {
        tokens
            .iter()
            .map(|t| (t.value.as_str(), t.category))
            .collect()
    }

    #[test]
    fn data_segment() {
        let tokens = tokenize(
            r"
            .DATA SEGMENT
                msg DB 'Hello', 10
            .DATA ENDS
            ",
        );

        assert_eq!(
            tokens,
            vec![
                Token::new(".DATA SEGMENT", Category::PseudoInstruction, 1),
                Token::new("msg", Category::Symbol, 2),
                Token::new("DB", Category::PseudoInstruction, 2),
                Token::new("'Hello'", Category::StrConstant, 2),
                Token::new(",", Category::Separator, 2),
                Token::new("10", Category::DecConstant, 2),
                Token::new(".DATA ENDS", Category::PseudoInstruction, 3),
            ]
        );
    }

    #[test]
    fn registers() {
        let tokens = tokenize("MOV AX, BX");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("MOV", Category::Symbol),
                ("AX", Category::Register),
                (",", Category::Separator),
                ("BX", Category::Register),
            ]
        );
    }

    #[test]
    fn brackets_are_separators() {
        let tokens = tokenize("MOV AX, [BX]");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("MOV", Category::Symbol),
                ("AX", Category::Register),
                (",", Category::Separator),
                ("[", Category::Separator),
                ("BX", Category::Register),
                ("]", Category::Separator),
            ]
        );
    }

    #[test]
    fn comments_removed() {
        let tokens = tokenize(
            "MOV AX, BX ; This is a comment
            ; This is a full line comment
            MOV CX, DX",
        );
        assert_eq!(tokens.len(), 8);
        assert!(tokens.iter().all(|t| !t.value.contains("comment")));
        assert_eq!(tokens[4], Token::new("MOV", Category::Symbol, 2));
        assert_eq!(tokens[7], Token::new("DX", Category::Register, 2));
    }

    #[test]
    fn comment_text_never_tokenized() {
        let tokens = tokenize("HLT ; AX 10 'str'");
        assert_eq!(pairs(&tokens), vec![("HLT", Category::Instruction)]);
    }

    #[test]
    fn constants() {
        assert_eq!(tokenize("MOV AX, 0ABCDh")[3].category, Category::HexConstant);
        assert_eq!(tokenize("MOV AX, 0xABCD")[3].category, Category::HexConstant);
        assert_eq!(tokenize("MOV AX, 1010b")[3].category, Category::BinConstant);
    }

    #[test]
    fn instructions() {
        let tokens = tokenize("HLT ADC");
        assert_eq!(
            pairs(&tokens),
            vec![("HLT", Category::Instruction), ("ADC", Category::Instruction)]
        );
    }

    #[test]
    fn strings() {
        let tokens = tokenize(r#"DB "Hello", 'World'"#);
        assert_eq!(
            pairs(&tokens),
            vec![
                ("DB", Category::PseudoInstruction),
                ("\"Hello\"", Category::StrConstant),
                (",", Category::Separator),
                ("'World'", Category::StrConstant),
            ]
        );
    }

    #[test]
    fn string_keeps_inner_text() {
        let tokens = tokenize(r#"DB 'a, b: "c" [d]', 0"#);
        assert_eq!(
            pairs(&tokens),
            vec![
                ("DB", Category::PseudoInstruction),
                (r#"'a, b: "c" [d]'"#, Category::StrConstant),
                (",", Category::Separator),
                ("0", Category::DecConstant),
            ]
        );
    }

    #[test]
    fn string_flushes_buffer() {
        let tokens = tokenize("x'y'");
        assert_eq!(
            pairs(&tokens),
            vec![("x", Category::Symbol), ("'y'", Category::StrConstant)]
        );
    }

    #[test]
    fn phrase_inside_string_is_text() {
        let tokens = tokenize("DB '.CODE SEGMENT'");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].value, "'.CODE SEGMENT'");
        assert_eq!(tokens[1].category, Category::StrConstant);
    }

    #[test]
    fn unterminated_string_folds_rest_of_line() {
        let tokens = tokenize("DB 'abc, 10\nHLT");
        assert_eq!(
            tokens,
            vec![
                Token::new("DB", Category::PseudoInstruction, 1),
                Token::new("'abc, 10", Category::Symbol, 1),
                Token::new("HLT", Category::Instruction, 2),
            ]
        );
    }

    #[test]
    fn phrases_need_exact_case_and_spacing() {
        let tokens = tokenize(".code segment\n.CODE  SEGMENT");
        assert_eq!(
            pairs(&tokens),
            vec![
                (".code", Category::Symbol),
                ("segment", Category::Symbol),
                (".CODE", Category::Symbol),
                ("SEGMENT", Category::Symbol),
            ]
        );
    }

    #[test]
    fn phrase_splits_surrounding_text() {
        let tokens = tokenize("x.STACK ENDSy");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("x", Category::Symbol),
                (".STACK ENDS", Category::PseudoInstruction),
                ("y", Category::Symbol),
            ]
        );
    }

    #[test]
    fn single_word_pseudo_not_split_out_of_words() {
        let tokens = tokenize("ADD DDX, ORGX");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("ADD", Category::Symbol),
                ("DDX", Category::Symbol),
                (",", Category::Separator),
                ("ORGX", Category::Symbol),
            ]
        );
    }

    #[test]
    fn labels_and_colons() {
        let tokens = tokenize("START:\n  JC START");
        assert_eq!(
            tokens,
            vec![
                Token::new("START", Category::Symbol, 1),
                Token::new(":", Category::Separator, 1),
                Token::new("JC", Category::Instruction, 2),
                Token::new("START", Category::Symbol, 2),
            ]
        );
    }

    #[test]
    fn type_specifier_words_are_split() {
        let tokens = tokenize("BYTE PTR [SI]");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("BYTE", Category::Symbol),
                ("PTR", Category::Symbol),
                ("[", Category::Separator),
                ("SI", Category::Register),
                ("]", Category::Separator),
            ]
        );
    }

    #[test]
    fn tabs_and_unicode_whitespace_separate() {
        let tokens = tokenize("POP\tAX\u{00a0}HLT");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].value, "HLT");
    }

    #[test]
    fn compound_operator_from_simple_token() {
        let token = simple_token("[BX+SI]", 4);
        assert_eq!(token, Token::new("[BX+SI]", Category::CompoundOperator, 4));
        assert_eq!(simple_token("[BX", 1).category, Category::Symbol);
    }

    #[test]
    fn empty_source() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("; only a comment\n\n").is_empty());
    }

    #[test]
    fn idempotent() {
        let source = ".CODE SEGMENT\nSTART: POP AX\nDB 'x', 0FFh, 101b\n.CODE ENDS";
        assert_eq!(tokenize(source), tokenize(source));
    }

    #[test]
    fn lexer_analyze_replaces_tokens() {
        let mut lexer = Lexer::new("HLT");
        assert!(lexer.tokens().is_empty());
        assert_eq!(lexer.analyze().len(), 1);
        assert_eq!(lexer.analyze().len(), 1);
        assert_eq!(lexer.tokens()[0].category, Category::Instruction);
        assert_eq!(lexer.into_tokens().len(), 1);
    }
}
