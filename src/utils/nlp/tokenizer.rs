// sentence and word tokenization

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// location of the abbreviation list inside the punkt resource directory
pub const ABBREVIATIONS_FILE: &str = "english/abbrev_types.txt";

const CLOSING_PUNCTUATION: &[char] = &['"', '\'', ')', ']', '}', '»', '”', '’'];
const OPENING_PUNCTUATION: &[char] = &['"', '\'', '(', '[', '{', '«', '“', '‘'];

static WHITESPACE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

fn compile(rules: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    rules
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

static STARTING_QUOTES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile(&[
        (r"([«“‘„]|`+)", " ${1} "),
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
    ])
});

static PUNCTUATION: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile(&[
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.{2,}", " ${0} "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        (r"[*]", " ${0} "),
        (r"[\]\[(){}<>]", " ${0} "),
        (r"--", " -- "),
    ])
});

static ENDING_QUOTES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile(&[
        (r"([»”’])", " ${1} "),
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ])
});

static CONTRACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    compile(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)(\s)", " ${1} ${2}${3}"),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ])
});

fn apply(rules: &[(Regex, &'static str)], text: String) -> String {
    rules.iter().fold(text, |text, (regex, replacement)| {
        regex.replace_all(&text, *replacement).into_owned()
    })
}

/// split a single sentence into penn treebank style tokens
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    let text = apply(&STARTING_QUOTES, sentence.to_string());
    let text = apply(&PUNCTUATION, text);
    let text = apply(&ENDING_QUOTES, format!(" {} ", text));
    let text = apply(&CONTRACTIONS, text);

    text.split_whitespace().map(str::to_string).collect()
}

/// sentence splitter and word tokenizer backed by the punkt abbreviation list
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    abbreviations: HashSet<String>,
}

impl Tokenizer {
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// load the abbreviation list from a punkt resource directory
    pub fn load<P: AsRef<Path>>(punkt_dir: P) -> Result<Self> {
        let path = punkt_dir.as_ref().join(ABBREVIATIONS_FILE);
        let content = fs::read_to_string(&path).map_err(|e| Error::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        let tokenizer = Self::new(content.lines());
        log::debug!(
            "loaded {} abbreviations from {}",
            tokenizer.abbreviations.len(),
            path.display()
        );
        Ok(tokenizer)
    }

    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    /// split text into sentences
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let tokens: Vec<_> = WHITESPACE_TOKEN.find_iter(text).collect();
        let mut sentences = Vec::new();
        let mut start = 0;

        for (index, token) in tokens.iter().enumerate() {
            let is_last = index + 1 == tokens.len();
            if is_last || !self.ends_sentence(token.as_str()) {
                continue;
            }

            let sentence = text[start..token.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = token.end();
        }

        let rest = text[start..].trim();
        if !rest.is_empty() {
            sentences.push(rest);
        }

        sentences
    }

    /// split text into sentences, then each sentence into word tokens
    pub fn word_tokenize(&self, text: &str) -> Vec<String> {
        self.sentences(text)
            .into_iter()
            .flat_map(tokenize_words)
            .collect()
    }

    fn ends_sentence(&self, token: &str) -> bool {
        let core = token.trim_end_matches(CLOSING_PUNCTUATION);
        if core.ends_with('?') || core.ends_with('!') {
            return true;
        }

        let Some(word) = core.strip_suffix('.') else {
            return false;
        };

        // ellipsis
        if word.ends_with('.') {
            return false;
        }

        let word = word.trim_start_matches(OPENING_PUNCTUATION);
        word.is_empty() || !self.is_abbreviation(word)
    }
}
