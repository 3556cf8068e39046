//! The fixed set of Groq-hosted models offered in the model selector.

use std::fmt;
use std::str::FromStr;

/// A model identifier from the fixed enumerated set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Model {
    #[default]
    Mixtral8x7b,
    Gemma2_9b,
    Llama3_8b,
    Llama31_8bInstant,
}

/// Error when a model identifier is not part of the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown model '{0}' (expected one of: {list})", list = Model::id_list())]
pub struct UnknownModel(pub String);

impl Model {
    /// All models in menu order. The first entry is the default selection.
    pub const ALL: [Model; 4] = [
        Model::Mixtral8x7b,
        Model::Gemma2_9b,
        Model::Llama3_8b,
        Model::Llama31_8bInstant,
    ];

    /// Identifier sent to the API.
    pub fn id(self) -> &'static str {
        match self {
            Model::Mixtral8x7b => "mixtral-8x7b-32768",
            Model::Gemma2_9b => "gemma2-9b-it",
            Model::Llama3_8b => "llama3-8b-8192",
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
        }
    }

    /// Human-readable label for the header and selector.
    pub fn label(self) -> &'static str {
        match self {
            Model::Mixtral8x7b => "Mixtral 8x7B",
            Model::Gemma2_9b => "Gemma 2 9B",
            Model::Llama3_8b => "Llama 3 8B",
            Model::Llama31_8bInstant => "Llama 3.1 8B Instant",
        }
    }

    /// Position in [`Model::ALL`].
    pub fn index(self) -> usize {
        Model::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// Next model in menu order, wrapping around.
    pub fn next(self) -> Model {
        Model::ALL[(self.index() + 1) % Model::ALL.len()]
    }

    /// Previous model in menu order, wrapping around.
    pub fn prev(self) -> Model {
        let len = Model::ALL.len();
        Model::ALL[(self.index() + len - 1) % len]
    }

    fn id_list() -> String {
        Model::ALL
            .iter()
            .map(|m| m.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Model {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Model::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_id() {
        for m in Model::ALL {
            assert_eq!(m.id().parse::<Model>(), Ok(m));
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" gemma2-9b-it\n".parse::<Model>(), Ok(Model::Gemma2_9b));
    }

    #[test]
    fn unknown_id_is_rejected_with_list() {
        let err = "gpt-4o".parse::<Model>().unwrap_err();
        assert_eq!(err.0, "gpt-4o");
        let msg = err.to_string();
        assert!(msg.contains("gpt-4o"));
        assert!(msg.contains("llama-3.1-8b-instant"));
    }

    #[test]
    fn default_is_first_in_menu() {
        assert_eq!(Model::default(), Model::ALL[0]);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(Model::Llama31_8bInstant.next(), Model::Mixtral8x7b);
        assert_eq!(Model::Mixtral8x7b.prev(), Model::Llama31_8bInstant);
        assert_eq!(Model::Gemma2_9b.next().prev(), Model::Gemma2_9b);
    }
}
