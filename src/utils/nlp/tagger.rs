// averaged perceptron part-of-speech tagger
//
// reads the json model layout shipped in the `averaged_perceptron_tagger_eng`
// resource: `<name>.weights.json`, `<name>.tagdict.json`, `<name>.classes.json`

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const START: [&str; 2] = ["-START-", "-START2-"];
const END: [&str; 2] = ["-END-", "-END2-"];

/// assigns a part-of-speech tag to every token of a sentence
pub trait PartOfSpeechTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

/// feature weights keyed by feature name, then by tag
pub type Weights = HashMap<String, HashMap<String, f64>>;

#[derive(Debug, Clone)]
pub struct PerceptronTagger {
    weights: Weights,
    tagdict: HashMap<String, String>,
    classes: Vec<String>,
}

impl PerceptronTagger {
    pub fn new(weights: Weights, tagdict: HashMap<String, String>, classes: Vec<String>) -> Self {
        let mut classes = classes;
        classes.sort();
        classes.dedup();

        Self {
            weights,
            tagdict,
            classes,
        }
    }

    /// load a model from a tagger resource directory
    ///
    /// the file prefix is the directory name, so
    /// `taggers/averaged_perceptron_tagger_eng/` holds
    /// `averaged_perceptron_tagger_eng.weights.json` and friends
    pub fn load<P: AsRef<Path>>(model_dir: P) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let prefix = model_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidResource {
                path: model_dir.to_path_buf(),
                reason: "model directory has no name".to_string(),
            })?;

        let weights: Weights = read_json(&model_dir.join(format!("{}.weights.json", prefix)))?;
        let tagdict: HashMap<String, String> =
            read_json(&model_dir.join(format!("{}.tagdict.json", prefix)))?;
        let classes: Vec<String> = read_json(&model_dir.join(format!("{}.classes.json", prefix)))?;

        if classes.is_empty() {
            return Err(Error::InvalidResource {
                path: model_dir.to_path_buf(),
                reason: "model declares no tag classes".to_string(),
            });
        }

        log::debug!(
            "loaded tagger model from {} ({} features, {} tagdict entries, {} classes)",
            model_dir.display(),
            weights.len(),
            tagdict.len(),
            classes.len()
        );

        Ok(Self::new(weights, tagdict, classes))
    }

    fn predict(&self, features: &[String]) -> String {
        let mut scores: HashMap<&str, f64> = HashMap::new();
        for feature in features {
            let Some(weights) = self.weights.get(feature) else {
                continue;
            };
            for (label, weight) in weights {
                *scores.entry(label.as_str()).or_insert(0.0) += weight;
            }
        }

        // highest score wins, ties go to the greatest label
        let mut best: Option<(&str, f64)> = None;
        for label in &self.classes {
            let score = scores.get(label.as_str()).copied().unwrap_or(0.0);
            match best {
                Some((best_label, best_score))
                    if score < best_score
                        || (score == best_score && label.as_str() < best_label) => {}
                _ => best = Some((label.as_str(), score)),
            }
        }

        best.map(|(label, _)| label.to_string()).unwrap_or_default()
    }
}

impl PartOfSpeechTagger for PerceptronTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        let context: Vec<String> = START
            .iter()
            .map(|s| s.to_string())
            .chain(tokens.iter().map(|t| normalize(t)))
            .chain(END.iter().map(|s| s.to_string()))
            .collect();

        let mut prev = START[0].to_string();
        let mut prev2 = START[1].to_string();
        let mut tagged = Vec::with_capacity(tokens.len());

        for (index, word) in tokens.iter().enumerate() {
            let tag = match self.tagdict.get(word) {
                Some(tag) => tag.clone(),
                None => {
                    let features = features(index, word, &context, &prev, &prev2);
                    self.predict(&features)
                }
            };

            prev2 = std::mem::replace(&mut prev, tag.clone());
            tagged.push((word.clone(), tag));
        }

        tagged
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| Error::ModelParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// map a word onto the vocabulary the model was trained with
pub fn normalize(word: &str) -> String {
    let first = word.chars().next();

    if word.contains('-') && first != Some('-') {
        "!HYPHEN".to_string()
    } else if first.is_some() && word.chars().all(char::is_numeric) && word.chars().count() == 4 {
        "!YEAR".to_string()
    } else if first.is_some_and(char::is_numeric) {
        "!DIGITS".to_string()
    } else {
        word.to_lowercase()
    }
}

fn suffix(word: &str) -> String {
    let count = word.chars().count();
    word.chars().skip(count.saturating_sub(3)).collect()
}

fn feature(name: &str, args: &[&str]) -> String {
    let mut key = name.to_string();
    for arg in args {
        key.push(' ');
        key.push_str(arg);
    }
    key
}

fn features(index: usize, word: &str, context: &[String], prev: &str, prev2: &str) -> Vec<String> {
    let i = index + START.len();
    let first = word.chars().next().map(String::from).unwrap_or_default();
    let current = context[i].as_str();

    vec![
        feature("bias", &[]),
        feature("i suffix", &[suffix(word).as_str()]),
        feature("i pref1", &[first.as_str()]),
        feature("i-1 tag", &[prev]),
        feature("i-2 tag", &[prev2]),
        feature("i tag+i-2 tag", &[prev, prev2]),
        feature("i word", &[current]),
        feature("i-1 tag+i word", &[prev, current]),
        feature("i-1 word", &[context[i - 1].as_str()]),
        feature("i-1 suffix", &[suffix(&context[i - 1]).as_str()]),
        feature("i-2 word", &[context[i - 2].as_str()]),
        feature("i+1 word", &[context[i + 1].as_str()]),
        feature("i+1 suffix", &[suffix(&context[i + 1]).as_str()]),
        feature("i+2 word", &[context[i + 2].as_str()]),
    ]
}
