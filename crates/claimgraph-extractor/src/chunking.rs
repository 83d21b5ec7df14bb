//! Noun-chunk feature detection
//!
//! The part-of-speech tagger behind noun-chunk detection is an external
//! capability; [`ChunkDetector`] is the seam for plugging a real tagger in.
//! The built-in [`RuleChunker`] tags tokens with closed-class word lists and
//! matches the noun-phrase pattern `(DET)? (NOUN|NUM)+`, which is enough for
//! the regular register of claim language.

use crate::config::ExtractorConfig;
use claimgraph_domain::FeatureList;
use tracing::debug;

/// Token category assigned by the lexicon tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// Articles and determiners ("a", "the", "said", ...)
    Determiner,
    /// Prepositions ("of", "to", "with", ...)
    Preposition,
    /// Conjunctions and claim connectives ("and", "wherein", ...)
    Conjunction,
    /// Pronouns
    Pronoun,
    /// Verbs, including the claim-drafting participles ("comprising", ...)
    Verb,
    /// Content word assumed nominal (the open-class default)
    Noun,
    /// Digit sequences and number words
    Number,
    /// Punctuation
    Punct,
    /// Function words that end a noun phrase without starting anything
    Other,
}

/// One token of claim text with its tagged category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text as it appears in the claim
    pub text: String,
    /// Tagged category
    pub category: TokenCategory,
}

/// A detected noun chunk: a contiguous token span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Tokens spanned by the chunk, in text order
    pub tokens: Vec<Token>,
}

impl Chunk {
    /// Chunk text, tokens joined by single spaces
    ///
    /// Claim text is whitespace-collapsed before detection, so this
    /// reproduces the original substring.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Noun-chunk detection seam
///
/// Implementations return candidate chunks in text order, duplicates
/// included; filtering and deduplication happen in [`extract_features`].
pub trait ChunkDetector {
    /// Detect candidate noun chunks in cleaned claim text
    fn detect(&self, text: &str) -> Vec<Chunk>;
}

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "said", "each", "every", "this", "that", "these", "those", "its", "their",
    "any", "both", "such", "no",
];

const PREPOSITIONS: &[&str] = &[
    "of", "to", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "over", "under",
    "between", "through", "via", "within", "along", "across", "about", "around", "upon", "toward",
    "towards", "against", "without", "above", "below", "behind", "beyond", "during", "per",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "whereby", "wherein", "whereas", "if", "when", "while", "so",
    "because", "although", "whether", "as",
];

const PRONOUNS: &[&str] = &["it", "they", "them", "which", "who", "whom", "whose", "itself"];

// Claim drafting leans on a small set of verbs and participles; listing them
// keeps the open-class default (noun) from swallowing the linking text.
const VERBS: &[&str] = &[
    "comprise",
    "comprises",
    "comprising",
    "include",
    "includes",
    "including",
    "have",
    "has",
    "having",
    "contain",
    "contains",
    "containing",
    "consist",
    "consists",
    "consisting",
    "be",
    "is",
    "are",
    "was",
    "were",
    "being",
    "been",
    "can",
    "may",
    "configured",
    "adapted",
    "arranged",
    "attached",
    "connected",
    "coupled",
    "mounted",
    "disposed",
    "formed",
    "provided",
    "extending",
    "extends",
    "located",
    "positioned",
    "defined",
    "defining",
    "defines",
    "received",
    "receiving",
    "receives",
    "supported",
    "supporting",
    "secured",
    "fixed",
    "joined",
    "engaged",
    "engaging",
    "operable",
    "covers",
    "covering",
    "surrounds",
    "surrounding",
    "carries",
    "carrying",
];

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

const OTHER_FUNCTION_WORDS: &[&str] = &[
    "least", "more", "most", "further", "substantially", "thereby", "thereto", "therefrom",
    "respectively", "not", "also", "then", "there",
];

fn tag_word(word: &str) -> TokenCategory {
    if word.chars().all(|c| c.is_ascii_digit()) {
        return TokenCategory::Number;
    }
    let lower = word.to_lowercase();
    let lower = lower.as_str();
    if DETERMINERS.contains(&lower) {
        TokenCategory::Determiner
    } else if PREPOSITIONS.contains(&lower) {
        TokenCategory::Preposition
    } else if CONJUNCTIONS.contains(&lower) {
        TokenCategory::Conjunction
    } else if PRONOUNS.contains(&lower) {
        TokenCategory::Pronoun
    } else if VERBS.contains(&lower) {
        TokenCategory::Verb
    } else if NUMBER_WORDS.contains(&lower) {
        TokenCategory::Number
    } else if OTHER_FUNCTION_WORDS.contains(&lower) {
        TokenCategory::Other
    } else {
        TokenCategory::Noun
    }
}

/// Split text into word and punctuation tokens
///
/// Words are runs of alphanumeric characters (hyphens and apostrophes stay
/// inside words); every other non-space character becomes its own token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    let mut flush = |word: &mut String, tokens: &mut Vec<Token>| {
        if !word.is_empty() {
            let category = tag_word(word);
            tokens.push(Token {
                text: std::mem::take(word),
                category,
            });
        }
    };

    for c in text.chars() {
        if c.is_alphanumeric() || c == '-' || c == '\'' {
            word.push(c);
        } else {
            flush(&mut word, &mut tokens);
            if !c.is_whitespace() {
                tokens.push(Token {
                    text: c.to_string(),
                    category: TokenCategory::Punct,
                });
            }
        }
    }
    flush(&mut word, &mut tokens);
    tokens
}

/// Built-in rule-based chunk detector
///
/// Matches `(DET)? (NOUN|NUM)+` left to right, advancing past each match.
/// Unknown alphabetic words default to nouns, so adjectives inside a phrase
/// are absorbed into the chunk - the same span a real tagger would produce
/// for compound claim features.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleChunker;

impl RuleChunker {
    /// Create a new rule chunker
    pub fn new() -> Self {
        Self
    }

    /// Try to match a noun phrase starting at position `i`; returns the
    /// exclusive end index of the match
    fn match_noun_phrase(tokens: &[Token], i: usize) -> Option<usize> {
        let mut j = i;
        if tokens.get(j).map(|t| t.category) == Some(TokenCategory::Determiner) {
            j += 1;
        }
        let body_start = j;
        while matches!(
            tokens.get(j).map(|t| t.category),
            Some(TokenCategory::Noun) | Some(TokenCategory::Number)
        ) {
            j += 1;
        }
        // A bare determiner is not a phrase
        if j == body_start {
            return None;
        }
        Some(j)
    }
}

impl ChunkDetector for RuleChunker {
    fn detect(&self, text: &str) -> Vec<Chunk> {
        let tokens = tokenize(text);
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            match Self::match_noun_phrase(&tokens, i) {
                Some(end) => {
                    chunks.push(Chunk {
                        tokens: tokens[i..end].to_vec(),
                    });
                    i = end;
                }
                None => i += 1,
            }
        }
        chunks
    }
}

fn token_allowed(token: &Token) -> bool {
    let text = token.text.as_str();
    matches!(text, "(" | ")" | ",")
        || (!text.is_empty() && text.chars().all(|c| c.is_alphabetic()))
        || text.chars().all(|c| c.is_numeric())
}

/// Extract one claim's features from cleaned text
///
/// Runs the detector, keeps a chunk only if it spans at least
/// `min_chunk_tokens` (and at most `max_chunk_tokens`) and every token is
/// alphabetic, numeric, or one of `(` `)` `,`, then deduplicates by exact
/// string in first-appearance order. Empty input yields an empty list.
pub fn extract_features(
    text: &str,
    detector: &dyn ChunkDetector,
    config: &ExtractorConfig,
) -> FeatureList {
    let mut features = FeatureList::new();
    for chunk in detector.detect(text) {
        let len = chunk.tokens.len();
        if len < config.min_chunk_tokens || len > config.max_chunk_tokens {
            continue;
        }
        if !chunk.tokens.iter().all(token_allowed) {
            continue;
        }
        features.push(chunk.text());
    }
    debug!(count = features.len(), "extracted features");
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features_of(text: &str) -> Vec<String> {
        let config = ExtractorConfig::default();
        extract_features(text, &RuleChunker::new(), &config)
            .iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_example_claim_features() {
        let features =
            features_of("1. A widget comprising a frame and a handle attached to the frame.");
        assert_eq!(features, ["A widget", "a frame", "a handle", "the frame"]);
    }

    #[test]
    fn test_dedup_preserves_first_appearance_order() {
        let features = features_of("a frame connected to the base and a frame with the base");
        assert_eq!(features, ["a frame", "the base"]);
    }

    #[test]
    fn test_single_token_chunks_excluded() {
        // "widgets" alone spans one token
        let features = features_of("widgets are provided");
        assert!(features.is_empty());
    }

    #[test]
    fn test_compound_phrases_absorbed() {
        let features = features_of("a second elongated member");
        assert_eq!(features, ["a second elongated member"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(features_of("").is_empty());
    }

    #[test]
    fn test_tokenizer_splits_punctuation() {
        let tokens = tokenize("a frame, a handle.");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "frame", ",", "a", "handle", "."]);
        assert_eq!(tokens[2].category, TokenCategory::Punct);
    }

    #[test]
    fn test_tagger_closed_classes() {
        assert_eq!(tag_word("the"), TokenCategory::Determiner);
        assert_eq!(tag_word("Said"), TokenCategory::Determiner);
        assert_eq!(tag_word("comprising"), TokenCategory::Verb);
        assert_eq!(tag_word("wherein"), TokenCategory::Conjunction);
        assert_eq!(tag_word("of"), TokenCategory::Preposition);
        assert_eq!(tag_word("42"), TokenCategory::Number);
        assert_eq!(tag_word("widget"), TokenCategory::Noun);
    }

    #[test]
    fn test_bare_determiner_is_not_a_chunk() {
        let chunks = RuleChunker::new().detect("the , and");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_max_length_filter() {
        let mut config = ExtractorConfig::default();
        config.max_chunk_tokens = 2;
        let features = extract_features(
            "a second elongated member",
            &RuleChunker::new(),
            &config,
        );
        assert!(features.is_empty());
    }

    #[test]
    fn test_hyphenated_words_rejected_by_charset_filter() {
        // "load-bearing" tokenizes as one word but is not purely alphabetic
        let features = features_of("a load-bearing wall");
        assert!(features.is_empty());
    }
}
