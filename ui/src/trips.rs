//! Trips the client knows about without a backend.

use payloads::TripId;

pub struct DemoTrip {
    pub id: &'static str,
    pub name: &'static str,
}

pub const DEMO_TRIPS: &[DemoTrip] = &[
    DemoTrip {
        id: "kyoto-autumn",
        name: "Kyoto in Autumn",
    },
    DemoTrip {
        id: "lisbon-long-weekend",
        name: "Lisbon Long Weekend",
    },
    DemoTrip {
        id: "patagonia-trek",
        name: "Patagonia Trek",
    },
];

/// Display name for a trip, falling back to its id for unknown trips.
pub fn trip_name(id: &TripId) -> String {
    DEMO_TRIPS
        .iter()
        .find(|trip| trip.id == id.as_str())
        .map(|trip| trip.name.to_string())
        .unwrap_or_else(|| format!("Trip {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_trip_uses_its_name() {
        assert_eq!(trip_name(&TripId::from("kyoto-autumn")), "Kyoto in Autumn");
    }

    #[test]
    fn unknown_trip_falls_back_to_id() {
        assert_eq!(trip_name(&TripId::from("abc123")), "Trip abc123");
    }
}
