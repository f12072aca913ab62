// natural language processing: resources, tokenization, tagging

pub mod classifier;
pub mod resources;
pub mod tagger;
pub mod tokenizer;

pub use classifier::TenseClassifier;
pub use resources::{
    LanguageResources, PERCEPTRON_TAGGER_ENG, PUNKT_TAB, ResourceConfig, ResourceSpec,
    ResourceStore,
};
pub use tagger::{PartOfSpeechTagger, PerceptronTagger};
pub use tokenizer::{Tokenizer, tokenize_words};
