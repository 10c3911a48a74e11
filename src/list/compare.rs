use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Orders two numbers ascending.
///
/// Unordered values (NaN) are a caller bug: debug builds panic, release
/// builds treat the pair as equal so a stable sort leaves them in place.
pub fn compare_numbers<N: PartialOrd>(a: N, b: N) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => {
            debug_assert!(false, "compare_numbers called with an unordered value");
            Ordering::Equal
        }
    }
}

/// Orders two strings the way a reader expects a list of names to read.
///
/// Case, accents, punctuation and whitespace are ignored, and runs of ASCII
/// digits compare by numeric value so "Episode 2" precedes "Episode 10".
/// Letters collate before numbers. Strings that collate equal are broken by
/// code-point order, so the result is `Equal` only for identical strings.
pub fn compare_strings(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Lowercases and strips accents, keeping punctuation and spacing intact.
/// Used for substring matching.
pub fn fold(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Letter(char),
    /// Digits with leading zeros removed.
    Number(String),
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Token::Letter(a), Token::Letter(b)) => a.cmp(b),
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Letter(_), Token::Number(_)) => Ordering::Less,
            (Token::Number(_), Token::Letter(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Primary collation weight of a string. Comparing keys ignores the
/// differences `compare_strings` ignores; useful with `sort_by_cached_key`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey(Vec<Token>);

pub fn collation_key(s: &str) -> CollationKey {
    let mut tokens = Vec::new();
    let mut digits: Option<String> = None;

    for c in s.nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_digit() {
            digits.get_or_insert_with(String::new).push(c);
            continue;
        }
        if let Some(run) = digits.take() {
            tokens.push(number_token(&run));
        }
        if c.is_alphanumeric() {
            tokens.extend(c.to_lowercase().map(Token::Letter));
        }
    }
    if let Some(run) = digits {
        tokens.push(number_token(&run));
    }

    CollationKey(tokens)
}

fn number_token(run: &str) -> Token {
    Token::Number(run.trim_start_matches('0').to_string())
}
