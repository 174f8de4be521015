//! Field shapes the remote API returns inconsistently.
//!
//! Some payloads send a member's address as one line of text and others as a
//! structured object; `createdBy` is sometimes a bare name and sometimes a
//! user profile. Both are decoded into sum types here so nothing downstream
//! has to sniff the shape at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    Line(String),
    Structured {
        #[serde(default)]
        street: String,
        #[serde(default)]
        city: String,
        #[serde(default)]
        state: String,
        #[serde(default, alias = "zipCode", alias = "postalCode")]
        postal_code: String,
    },
}

impl Address {
    /// Single-line rendering, skipping empty parts.
    pub fn display(&self) -> String {
        match self {
            Address::Line(line) => line.trim().to_string(),
            Address::Structured {
                street,
                city,
                state,
                postal_code,
            } => {
                let region = [state.as_str(), postal_code.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                [street.as_str(), city.as_str(), region.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }
    }

    /// The city, when the address carries one explicitly.
    pub fn city(&self) -> Option<&str> {
        match self {
            Address::Structured { city, .. } if !city.is_empty() => Some(city),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Author {
    Name(String),
    Profile {
        #[serde(default)]
        id: Option<String>,
        name: String,
        #[serde(default)]
        email: Option<String>,
    },
}

impl Author {
    pub fn display_name(&self) -> &str {
        match self {
            Author::Name(name) => name,
            Author::Profile { name, .. } => name,
        }
    }
}
