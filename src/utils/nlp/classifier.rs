// past-tense classification

use super::resources::LanguageResources;
use super::tagger::{PartOfSpeechTagger, PerceptronTagger};
use super::tokenizer::Tokenizer;
use crate::error::Result;
use std::collections::HashSet;

/// decides whether a sentence is phrased in past tense
///
/// the rule is permissive: a single token tagged with one of the past-tense
/// tags anywhere in the text is enough, even if the main clause is present
/// tense
pub struct TenseClassifier<T: PartOfSpeechTagger> {
    tokenizer: Tokenizer,
    tagger: T,
    past_tense_tags: HashSet<String>,
}

impl<T: PartOfSpeechTagger> TenseClassifier<T> {
    pub fn new<S: AsRef<str>>(tokenizer: Tokenizer, tagger: T, past_tense_tags: &[S]) -> Self {
        Self {
            tokenizer,
            tagger,
            past_tense_tags: past_tense_tags
                .iter()
                .map(|t| t.as_ref().to_string())
                .collect(),
        }
    }

    /// tokenize and tag every word of the text
    pub fn tag_text(&self, text: &str) -> Vec<(String, String)> {
        let tokens = self.tokenizer.word_tokenize(text);
        self.tagger.tag(&tokens)
    }

    pub fn is_past_tense(&self, text: &str) -> bool {
        let tagged = self.tag_text(text);
        log::debug!("tagged {:?}", tagged);

        tagged
            .iter()
            .any(|(_, tag)| self.past_tense_tags.contains(tag))
    }
}

impl TenseClassifier<PerceptronTagger> {
    /// build the classifier from initialized language resources
    pub fn from_resources<S: AsRef<str>>(
        resources: &LanguageResources,
        past_tense_tags: &[S],
    ) -> Result<Self> {
        let tokenizer = Tokenizer::load(&resources.punkt_dir)?;
        let tagger = PerceptronTagger::load(&resources.tagger_dir)?;
        Ok(Self::new(tokenizer, tagger, past_tense_tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// tags words ending in "ed" as VBD, "en" as VBN, everything else as NN
    struct SuffixTagger;

    impl PartOfSpeechTagger for SuffixTagger {
        fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
            tokens
                .iter()
                .map(|t| {
                    let tag = if t.ends_with("ed") {
                        "VBD"
                    } else if t.ends_with("en") {
                        "VBN"
                    } else {
                        "NN"
                    };
                    (t.clone(), tag.to_string())
                })
                .collect()
        }
    }

    fn classifier() -> TenseClassifier<SuffixTagger> {
        TenseClassifier::new(Tokenizer::default(), SuffixTagger, &["VBD", "VBN"])
    }

    #[test]
    fn test_any_past_token_is_enough() {
        let classifier = classifier();
        assert!(classifier.is_past_tense("This fixes an issue that existed previously."));
        assert!(classifier.is_past_tense("Fixed."));
    }

    #[test]
    fn test_no_past_token() {
        let classifier = classifier();
        assert!(!classifier.is_past_tense("Adds support for X."));
        assert!(!classifier.is_past_tense(""));
    }

    #[test]
    fn test_past_participle_alone_is_enough() {
        let classifier = classifier();
        let sentence = "The option has been hidden.";

        let tags: Vec<_> = classifier
            .tag_text(sentence)
            .into_iter()
            .map(|(_, tag)| tag)
            .collect();
        assert!(!tags.iter().any(|tag| tag == "VBD"));
        assert!(classifier.is_past_tense(sentence));

        let simple_past_only = TenseClassifier::new(Tokenizer::default(), SuffixTagger, &["VBD"]);
        assert!(!simple_past_only.is_past_tense(sentence));
    }

    #[test]
    fn test_custom_tag_set() {
        let classifier = TenseClassifier::new(Tokenizer::default(), SuffixTagger, &["NN"]);
        assert!(classifier.is_past_tense("Adds support."));
    }

    #[test]
    fn test_tag_text_tokenizes_first() {
        let classifier = classifier();
        let tagged = classifier.tag_text("Renamed it.");
        assert_eq!(
            tagged,
            vec![
                ("Renamed".to_string(), "VBD".to_string()),
                ("it".to_string(), "NN".to_string()),
                (".".to_string(), "NN".to_string()),
            ]
        );
    }
}
