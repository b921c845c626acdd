use std::fmt;
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Id type wrapper for trips. The value is owned by whoever created the
/// trip and is treated as opaque here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("trip id must not be empty")]
pub struct ParseTripIdError;

impl FromStr for TripId {
    type Err = ParseTripIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseTripIdError);
        }
        Ok(TripId(s.to_string()))
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        TripId(value.to_string())
    }
}

impl TripId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Query markers understood by the trip page.
///
/// `invite` makes the page show the join flow for a recipient, `test` forces
/// that flow even for a user who already belongs to the trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteQuery {
    #[serde(default, skip_serializing_if = "is_false")]
    pub invite: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub test: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl InviteQuery {
    /// Markers carried by a shared invite link.
    pub const SHARE: Self = Self {
        invite: true,
        test: false,
    };

    /// Markers used when simulating a fresh recipient in the current tab.
    pub const TEST: Self = Self {
        invite: true,
        test: true,
    };

    pub fn is_empty(&self) -> bool {
        !self.invite && !self.test
    }
}

/// Renders the markers as a url query string without the leading `?`.
impl fmt::Display for InviteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs = Vec::with_capacity(2);
        if self.invite {
            pairs.push("invite=true");
        }
        if self.test {
            pairs.push("test=true");
        }
        write!(f, "{}", pairs.join("&"))
    }
}
