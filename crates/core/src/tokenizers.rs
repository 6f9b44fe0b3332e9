//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and the word tokenizer used by the diff
//! engine. Tokenization is lossless: concatenating a document's tokens in
//! order reproduces the document exactly.

use std::collections::BTreeSet;

/// Punctuation characters that split the current word run
const SPLITTING_PUNCTUATION: [char; 9] = ['.', ',', ';', '?', '!', '(', ')', '"', '\''];

/// Abbreviations whose trailing period stays attached to the word run when
/// followed by a space, a newline, or the end of the input
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Jr.", "Sr.", "St.", "No.", "Inc.", "Ltd.", "Corp.",
    "Co.", "vs.", "etc.", "e.g.", "i.e.",
];

/// Build the default abbreviation set
pub fn default_abbreviations() -> BTreeSet<String> {
    DEFAULT_ABBREVIATIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Kind of an atomic comparison unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of word characters (letters/digits, embedded digit-range hyphens
    /// and abbreviation periods)
    Word,
    /// A single punctuation character
    Punctuation,
    /// A single whitespace character
    Whitespace,
}

/// An atomic, non-empty unit compared by the diff engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text
    pub text: String,

    /// What kind of unit this is
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Length of the token text in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Trait for tokenizers that split text into tokens
pub trait Tokenizer: Send + Sync {
    /// Split the input into an ordered token sequence
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

// Implement Clone for Box<dyn Tokenizer>
impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Word tokenizer: word runs, single punctuation characters, and single
/// whitespace characters, with abbreviation and numeric-range joining
#[derive(Clone)]
pub struct WordTokenizer {
    /// Word runs ending in one of these keep their trailing period
    abbreviations: BTreeSet<String>,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            abbreviations: default_abbreviations(),
        }
    }

    /// Replace the abbreviation set
    pub fn with_abbreviations(mut self, abbreviations: BTreeSet<String>) -> Self {
        self.abbreviations = abbreviations;
        self
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut buffer = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_whitespace() {
                flush_buffer(&mut buffer, &mut tokens);
                tokens.push(Token::new(ch.to_string(), TokenKind::Whitespace));
            } else if SPLITTING_PUNCTUATION.contains(&ch) {
                // Keep "Dr." / "Inc." whole when the period ends the word:
                // the run plus this character must be a known abbreviation
                // and the next character a space, newline, or end of input.
                let candidate = format!("{buffer}{ch}");
                let at_boundary = matches!(chars.peek().copied(), None | Some(' ') | Some('\n'));

                if at_boundary && self.abbreviations.contains(&candidate) {
                    buffer.push(ch);
                } else {
                    flush_buffer(&mut buffer, &mut tokens);
                    tokens.push(Token::new(ch.to_string(), TokenKind::Punctuation));
                }
            } else if ch == '-' {
                // A hyphen joins the run only between digits ("2024-2025")
                let digit_before = buffer.chars().last().is_some_and(|c| c.is_ascii_digit());
                let digit_after = chars.peek().is_some_and(|c| c.is_ascii_digit());

                if digit_before && digit_after {
                    buffer.push(ch);
                } else {
                    flush_buffer(&mut buffer, &mut tokens);
                    tokens.push(Token::new("-", TokenKind::Punctuation));
                }
            } else {
                buffer.push(ch);
            }
        }

        flush_buffer(&mut buffer, &mut tokens);
        tokens
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

fn flush_buffer(buffer: &mut String, tokens: &mut Vec<Token>) {
    if !buffer.is_empty() {
        tokens.push(Token::new(std::mem::take(buffer), TokenKind::Word));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = WordTokenizer::new().tokenize("");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_words_whitespace_and_punctuation() {
        let tokens = WordTokenizer::new().tokenize("hello, world");
        assert_eq!(texts(&tokens), vec!["hello", ",", " ", "world"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
        assert_eq!(tokens[2].kind, TokenKind::Whitespace);
    }

    #[test]
    fn test_each_whitespace_char_is_its_own_token() {
        let tokens = WordTokenizer::new().tokenize("a  b\nc");
        assert_eq!(texts(&tokens), vec!["a", " ", " ", "b", "\n", "c"]);
    }

    #[test]
    fn test_abbreviation_keeps_trailing_period() {
        let tokens = WordTokenizer::new().tokenize("Dr. Smith");
        assert_eq!(texts(&tokens), vec!["Dr.", " ", "Smith"]);
    }

    #[test]
    fn test_sentence_boundary_period_splits() {
        let tokens = WordTokenizer::new().tokenize("Sentence. Next");
        assert_eq!(texts(&tokens), vec!["Sentence", ".", " ", "Next"]);
    }

    #[test]
    fn test_abbreviation_at_end_of_input() {
        let tokens = WordTokenizer::new().tokenize("invoices, receipts, etc.");
        assert_eq!(
            texts(&tokens),
            vec!["invoices", ",", " ", "receipts", ",", " ", "etc."]
        );
    }

    #[test]
    fn test_abbreviation_before_comma_still_splits() {
        // The lookahead only accepts a space, newline, or end of input
        let tokens = WordTokenizer::new().tokenize("Acme Inc., Delaware");
        assert_eq!(
            texts(&tokens),
            vec!["Acme", " ", "Inc", ".", ",", " ", "Delaware"]
        );
    }

    #[test]
    fn test_numeric_range_stays_whole() {
        let tokens = WordTokenizer::new().tokenize("2024-2025");
        assert_eq!(texts(&tokens), vec!["2024-2025"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn test_non_numeric_hyphen_splits() {
        let tokens = WordTokenizer::new().tokenize("well-known");
        assert_eq!(texts(&tokens), vec!["well", "-", "known"]);
    }

    #[test]
    fn test_currency_amount_is_one_token() {
        let tokens = WordTokenizer::new().tokenize("pay $100.");
        assert_eq!(texts(&tokens), vec!["pay", " ", "$100", "."]);
    }

    #[test]
    fn test_custom_abbreviations() {
        let abbreviations = ["Art.".to_string()].into_iter().collect();
        let tokenizer = WordTokenizer::new().with_abbreviations(abbreviations);

        let tokens = tokenizer.tokenize("Art. 5");
        assert_eq!(texts(&tokens), vec!["Art.", " ", "5"]);

        // "Dr." is no longer in the set
        let tokens = tokenizer.tokenize("Dr. Smith");
        assert_eq!(texts(&tokens), vec!["Dr", ".", " ", "Smith"]);
    }

    #[test]
    fn test_tokenization_is_lossless() {
        let input = "Mr. Jones owes $1,500 for 2024-2025 (see \"Exhibit A\").\nThanks!";
        let tokens = WordTokenizer::new().tokenize(input);

        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, input);
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }
}
