//! Per-user settings value objects.
//!
//! `UserSettings` holds the three attributes a user can register through the
//! `設定` command. They customize the input-variable map sent alongside every
//! Dify query for that user.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single settable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Age,
    Address,
    Weather,
}

impl SettingsField {
    /// Resolves a command key token to a field.
    ///
    /// Supports the Japanese vocabulary and the English field names,
    /// case-sensitive on the exact token.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "年齢" | "age" => Some(SettingsField::Age),
            "住所" | "最寄り駅" | "address" => Some(SettingsField::Address),
            "天気" | "weather" => Some(SettingsField::Weather),
            _ => None,
        }
    }

    /// The fixed key used in the Dify input-variable map.
    pub fn input_key(&self) -> &'static str {
        match self {
            SettingsField::Age => "age",
            SettingsField::Address => "address",
            SettingsField::Weather => "tenki",
        }
    }
}

/// Stored settings for one user. All fields start absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub age: Option<String>,
    pub address: Option<String>,
    pub weather: Option<String>,
}

impl UserSettings {
    /// Overwrites the named field with the given value.
    pub fn set(&mut self, field: SettingsField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SettingsField::Age => self.age = Some(value),
            SettingsField::Address => self.address = Some(value),
            SettingsField::Weather => self.weather = Some(value),
        }
    }

    /// True when no field has ever been set.
    pub fn is_empty(&self) -> bool {
        self.age.is_none() && self.address.is_none() && self.weather.is_none()
    }

    /// Builds the Dify `inputs` map.
    ///
    /// Only present, non-empty values are included; absent fields are
    /// omitted entirely, never sent as empty strings.
    pub fn input_variables(&self) -> Map<String, Value> {
        let mut inputs = Map::new();
        let fields = [
            (SettingsField::Age, &self.age),
            (SettingsField::Address, &self.address),
            (SettingsField::Weather, &self.weather),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                if !v.is_empty() {
                    inputs.insert(field.input_key().to_string(), Value::String(v.clone()));
                }
            }
        }
        inputs
    }
}
