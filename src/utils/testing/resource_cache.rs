// pre-seeded language resources for offline tests
//
// the tagger model is tiny and deterministic: words listed in the tag
// dictionary get their tag, every other word falls back to NN through the
// bias weight, except `-ing` words which lean to VBG

use crate::utils::nlp::{LanguageResources, PERCEPTRON_TAGGER_ENG, PUNKT_TAB, ResourceStore};
use serde_json::json;
use std::fs;
use std::path::Path;

pub const TEST_ABBREVIATIONS: &[&str] = &["e.g", "i.e", "etc", "vs", "dr", "mr"];

pub const TEST_TAGDICT: &[(&str, &str)] = &[
    ("the", "DT"),
    ("The", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("for", "IN"),
    ("to", "TO"),
    ("that", "WDT"),
    (".", "."),
    (",", ","),
    ("improved", "VBD"),
    ("fixed", "VBD"),
    ("Fixed", "VBD"),
    ("existed", "VBD"),
    ("removed", "VBN"),
    ("Removed", "VBD"),
    ("been", "VBN"),
    ("uses", "VBZ"),
    ("Uses", "VBZ"),
    ("fixes", "VBZ"),
    ("adds", "VBZ"),
    ("Adds", "VBZ"),
    ("invoke", "VB"),
];

/// write the test punkt data and tagger model into an nltk-style data directory
pub fn seed_resource_cache<P: AsRef<Path>>(
    data_dir: P,
) -> Result<LanguageResources, Box<dyn std::error::Error>> {
    let store = ResourceStore::new(data_dir.as_ref());

    let punkt_dir = store.resource_dir(&PUNKT_TAB);
    fs::create_dir_all(punkt_dir.join("english"))?;
    fs::write(
        punkt_dir.join("english").join("abbrev_types.txt"),
        TEST_ABBREVIATIONS.join("\n"),
    )?;

    let tagger_dir = store.resource_dir(&PERCEPTRON_TAGGER_ENG);
    fs::create_dir_all(&tagger_dir)?;

    let weights = json!({
        "bias": { "NN": 1.0 },
        "i suffix ing": { "VBG": 2.0 },
        "i-1 tag DT": { "NN": 0.5, "JJ": 0.25 },
    });
    let tagdict: serde_json::Map<String, serde_json::Value> = TEST_TAGDICT
        .iter()
        .map(|(word, tag)| (word.to_string(), json!(tag)))
        .collect();
    let classes = json!([
        "NN", "NNS", "JJ", "DT", "IN", "TO", "WDT", "VB", "VBD", "VBG", "VBN", "VBZ", ".", ","
    ]);

    let prefix = PERCEPTRON_TAGGER_ENG.name;
    fs::write(
        tagger_dir.join(format!("{}.weights.json", prefix)),
        weights.to_string(),
    )?;
    fs::write(
        tagger_dir.join(format!("{}.tagdict.json", prefix)),
        serde_json::Value::Object(tagdict).to_string(),
    )?;
    fs::write(
        tagger_dir.join(format!("{}.classes.json", prefix)),
        classes.to_string(),
    )?;

    Ok(LanguageResources {
        punkt_dir,
        tagger_dir,
    })
}
