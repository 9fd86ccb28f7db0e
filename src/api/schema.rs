use serde::Serialize;
use std::collections::BTreeMap;

/// Data-level description of the JSON shape requested from the model,
/// independent of the client issuing the request. Serializes to the
/// Gemini `responseSchema` format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

impl Schema {
    pub fn string(description: &str) -> Self {
        Self {
            schema_type: SchemaType::String,
            description: Some(description.to_string()),
            properties: None,
            items: None,
            required: Vec::new(),
        }
    }

    pub fn array(items: Schema, description: &str) -> Self {
        Self {
            schema_type: SchemaType::Array,
            description: Some(description.to_string()),
            properties: None,
            items: Some(Box::new(items)),
            required: Vec::new(),
        }
    }

    pub fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        Self {
            schema_type: SchemaType::Object,
            description: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(name, schema)| (name.to_string(), schema))
                    .collect(),
            ),
            items: None,
            required: required.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn bare(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            items: None,
            required: Vec::new(),
        }
    }
}

/// The fixed output shape every consultation requests from the model.
/// `chineseCharacter` is deliberately left out of the required set; the
/// consuming type treats it as optional.
pub fn strategy_schema() -> Schema {
    Schema::object(
        vec![
            (
                "title",
                Schema::string(
                    "The name of the strategy or stratagem (e.g., 'Empty Fort Strategy', \
                     'Attack by Stratagem').",
                ),
            ),
            (
                "originalQuote",
                Schema::string("A relevant quote from Sun Tzu's Art of War or the 36 Stratagems."),
            ),
            (
                "interpretation",
                Schema::string(
                    "A concise explanation of how this ancient strategy applies to the user's \
                     specific modern problem.",
                ),
            ),
            (
                "actionableAdvice",
                Schema::array(
                    Schema::bare(SchemaType::String),
                    "A list of 3 concrete, actionable steps the user should take.",
                ),
            ),
            (
                "chineseCharacter",
                Schema::string(
                    "A single relevant Chinese character (Kanji/Hanzi) representing the essence \
                     of the advice (e.g., 智 for Wisdom, 胜 for Victory, 忍 for Patience).",
                ),
            ),
        ],
        &["title", "originalQuote", "interpretation", "actionableAdvice"],
    )
}
