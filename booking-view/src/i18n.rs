//! Translated strings, grouped by namespace.

use serde::Deserialize;
use std::collections::HashMap;

const EN: &str = include_str!("../messages/en.json");
const ES: &str = include_str!("../messages/es.json");

/// Languages with a bundled catalog. The first is the fallback.
pub const LANGUAGES: [&str; 2] = ["en", "es"];

/// Namespace -> key -> text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Messages(HashMap<String, HashMap<String, String>>);

impl Messages {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Bundled catalog for `lang`, English for anything unknown.
    pub fn for_lang(lang: &str) -> Self {
        let source = match lang {
            "es" => ES,
            _ => EN,
        };
        Self::from_json(source).unwrap_or_else(|e| {
            tracing::error!("Bundled messages for {lang} are malformed: {e}");
            Self::default()
        })
    }

    pub fn lookup(&self, namespace: &str, key: &str) -> Option<&str> {
        self.0.get(namespace)?.get(key).map(String::as_str)
    }

    /// Translation of `key`, or the key itself when missing.
    pub fn translate(&self, namespace: &str, key: &str) -> String {
        self.translate_or(namespace, key, key)
    }

    pub fn translate_or(
        &self,
        namespace: &str,
        key: &str,
        fallback: &str,
    ) -> String {
        self.lookup(namespace, key).unwrap_or(fallback).to_string()
    }
}
