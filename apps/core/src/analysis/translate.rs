//! Response translation into English before classification.

use crate::models::Language;

/// Renders a response written in `from` as English text.
pub trait Translator: Send + Sync + 'static {
    fn to_english(&self, text: &str, from: Language) -> String;
}

/// Keeps the original text unchanged, whatever the source language.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughTranslator;

impl Translator for PassThroughTranslator {
    fn to_english(&self, text: &str, _from: Language) -> String {
        text.to_string()
    }
}
