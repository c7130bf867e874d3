// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout errors

use crate::WidgetId;
use smol_str::SmolStr;
use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Layout error
///
/// [`Error::Contradiction`] and [`Error::Logic`] are structural: retrying the
/// same operation with the same inputs fails the same way. A layout pass which
/// returns either of these commits no child coordinates for the container
/// being processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The widget's configuration contradicts its sizing policy
    #[error("{widget}: {reason}")]
    Contradiction {
        /// Widget identification (name or id)
        widget: SmolStr,
        /// Description of the conflict
        reason: &'static str,
    },

    /// Internal invariant violated
    #[error("layout logic error: {0}")]
    Logic(&'static str),

    /// A configuration string could not be parsed
    #[error("bad value for `{key}`: {value:?}")]
    Parse {
        /// Property or attribute key
        key: SmolStr,
        /// The rejected value
        value: String,
    },

    /// The widget does not exist (or has been removed)
    #[error("unknown widget {0}")]
    UnknownWidget(WidgetId),
}

impl Error {
    /// Construct a [`Error::Parse`]
    pub fn parse(key: &str, value: &str) -> Self {
        Error::Parse {
            key: key.into(),
            value: value.to_string(),
        }
    }

    /// True for the fatal categories: contradictions and logic errors
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Contradiction { .. } | Error::Logic(_))
    }
}
