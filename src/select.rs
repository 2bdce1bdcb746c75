//! Output projection
//!
//! `--select` picks what each response turns into:
//! - `*` returns the whole response
//! - `Name` returns one top-level response field (case-insensitive)
//! - `^Param` echoes a bound input parameter
//!
//! The selection is resolved once, before any request is sent, into a
//! [`Projector`] closure. Unknown names fail resolution instead of
//! producing empty output at runtime.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

/// A response type with selectable top-level fields
pub trait Selectable: Serialize {
    /// Wire names of the top-level fields
    const FIELDS: &'static [&'static str];
    /// Field returned when no selection is given; `None` means no output
    const DEFAULT_FIELD: Option<&'static str>;
}

/// Parsed `--select` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The whole response object
    WholeResponse,
    /// One named field of the response
    Field(String),
    /// The value of a bound input parameter
    EchoInput(String),
}

impl FromStr for Selection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s {
            "" => Err(Error::invalid_selection(s, "empty selection")),
            "*" => Ok(Self::WholeResponse),
            _ => match s.strip_prefix('^') {
                Some("") => Err(Error::invalid_selection(s, "missing parameter name")),
                Some(param) => Ok(Self::EchoInput(param.to_string())),
                None => Ok(Self::Field(s.to_string())),
            },
        }
    }
}

/// Resolved projection from a response to an output value
pub type Projector<R> = Box<dyn Fn(&R) -> Result<Value> + Send + Sync>;

impl Selection {
    /// Resolve a selection for response type `R`.
    ///
    /// `input` is a JSON object of the command's bound parameters, used by
    /// `^Param` selections.
    pub fn resolve<R>(selection: Option<&Selection>, input: &Value) -> Result<Projector<R>>
    where
        R: Selectable + 'static,
    {
        match selection {
            None => Ok(match R::DEFAULT_FIELD {
                Some(field) => field_projector(field),
                None => Box::new(|_: &R| -> Result<Value> { Ok(Value::Null) }),
            }),
            Some(Selection::WholeResponse) => {
                Ok(Box::new(|response: &R| -> Result<Value> {
                    Ok(serde_json::to_value(response)?)
                }))
            }
            Some(Selection::Field(name)) => {
                let field = R::FIELDS
                    .iter()
                    .find(|f| f.eq_ignore_ascii_case(name))
                    .ok_or_else(|| {
                        Error::invalid_selection(
                            name.as_str(),
                            format!("unknown field, expected one of: *, {}", R::FIELDS.join(", ")),
                        )
                    })?;
                Ok(field_projector(field))
            }
            Some(Selection::EchoInput(param)) => {
                let value = input
                    .as_object()
                    .and_then(|obj| {
                        obj.iter()
                            .find(|(key, _)| key.eq_ignore_ascii_case(param))
                            .map(|(_, value)| value.clone())
                    })
                    .ok_or_else(|| {
                        Error::invalid_selection(
                            format!("^{param}"),
                            "no such parameter on this command",
                        )
                    })?;
                Ok(Box::new(move |_: &R| -> Result<Value> { Ok(value.clone()) }))
            }
        }
    }
}

fn field_projector<R: Selectable + 'static>(field: &'static str) -> Projector<R> {
    Box::new(move |response: &R| -> Result<Value> {
        let mut value = serde_json::to_value(response)?;
        Ok(value.get_mut(field).map(Value::take).unwrap_or(Value::Null))
    })
}
