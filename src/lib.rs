pub mod engine;
pub mod hangul;
pub mod paradigm;

pub use engine::{ConjugatedForm, Paradigm, Resolution};
pub use paradigm::{JsonSource, LoadError};
