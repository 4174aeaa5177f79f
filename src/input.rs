//! Decoding actions from text.
//!
//! An action is written either as a JSON object tagged on `type`
//! (`{"type":"ADD_TODO","text":"milk"}`) or, for actions without payload,
//! as the bare tag (`ADD`).

use std::io::{self, BufRead};

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionParseError {
    #[error("Empty action")]
    Empty,

    #[error("Malformed action '{input}': {source}")]
    Malformed {
        input: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse one action. Unknown tags decode to the action's unrecognized
/// variant; missing or mistyped payload fields are errors.
pub fn parse_action<A: DeserializeOwned>(input: &str) -> Result<A, ActionParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ActionParseError::Empty);
    }

    let result = if trimmed.starts_with('{') {
        serde_json::from_str(trimmed)
    } else {
        serde_json::from_value(serde_json::json!({ "type": trimmed }))
    };

    result.map_err(|source| ActionParseError::Malformed {
        input: trimmed.to_string(),
        source,
    })
}

/// One unparsed action and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAction {
    /// Human-readable origin, e.g. `argument 2` or `line 5`.
    pub origin: String,
    pub text: String,
}

/// Actions from command-line arguments, or from a reader line by line when
/// there are none.
///
/// Lines are read lazily, so each action can be dispatched before the next
/// line arrives. Blank lines are skipped.
pub enum ActionSource<R> {
    Args(std::iter::Enumerate<std::vec::IntoIter<String>>),
    Lines(std::iter::Enumerate<io::Lines<R>>),
}

impl<R: BufRead> ActionSource<R> {
    pub fn new(args: &[String], reader: R) -> Self {
        if args.is_empty() {
            ActionSource::Lines(reader.lines().enumerate())
        } else {
            ActionSource::Args(args.to_vec().into_iter().enumerate())
        }
    }
}

impl<R: BufRead> Iterator for ActionSource<R> {
    type Item = io::Result<RawAction>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ActionSource::Args(args) => args.next().map(|(index, text)| {
                Ok(RawAction {
                    origin: format!("argument {}", index + 1),
                    text,
                })
            }),
            ActionSource::Lines(lines) => loop {
                let (index, line) = lines.next()?;
                match line {
                    Ok(line) if line.trim().is_empty() => continue,
                    Ok(text) => {
                        return Some(Ok(RawAction {
                            origin: format!("line {}", index + 1),
                            text,
                        }))
                    }
                    Err(err) => return Some(Err(err)),
                }
            },
        }
    }
}
