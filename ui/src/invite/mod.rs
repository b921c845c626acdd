//! Invite links and the behavior behind the invite modal.

mod controller;
mod state;

use std::fmt;

use payloads::{InviteQuery, TripId};

pub use controller::{CopyOutcome, InviteController};
pub use state::{InviteAction, InviteState};

/// A trip page inside the app, with the invite markers to put on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripLocation {
    pub trip_id: TripId,
    pub query: InviteQuery,
}

impl TripLocation {
    /// Where a shared invite link points.
    pub fn share(trip_id: TripId) -> Self {
        Self {
            trip_id,
            query: InviteQuery::SHARE,
        }
    }

    /// Where the "test here" flow sends the current tab.
    pub fn test(trip_id: TripId) -> Self {
        Self {
            trip_id,
            query: InviteQuery::TEST,
        }
    }
}

/// Path and query, e.g. `/trip/abc123?invite=true`.
impl fmt::Display for TripLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/trip/{}", self.trip_id)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        Ok(())
    }
}

/// Absolute link a recipient opens to join the trip.
pub fn invite_link(origin: &str, trip_id: &TripId) -> String {
    format!("{origin}{}", TripLocation::share(trip_id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_link_appends_trip_path_to_origin() {
        let link = invite_link("https://example.com", &TripId::from("abc123"));
        assert_eq!(link, "https://example.com/trip/abc123?invite=true");
    }

    #[test]
    fn invite_link_keeps_trip_id_verbatim() {
        let link =
            invite_link("http://localhost:8080", &TripId::from("Trip_42-x"));
        assert_eq!(link, "http://localhost:8080/trip/Trip_42-x?invite=true");
    }

    #[test]
    fn test_location_carries_both_markers() {
        let location = TripLocation::test(TripId::from("abc123"));
        assert_eq!(location.to_string(), "/trip/abc123?invite=true&test=true");
    }

    #[test]
    fn location_without_markers_has_no_query() {
        let location = TripLocation {
            trip_id: TripId::from("abc123"),
            query: InviteQuery::default(),
        };
        assert_eq!(location.to_string(), "/trip/abc123");
    }
}
