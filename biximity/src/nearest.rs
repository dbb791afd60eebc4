//! Nearest-station selection.
//!
//! Stations are ranked by squared distance in raw degree space, which is
//! cheap and good enough to order stations in one city. Selection keeps a
//! fixed buffer of three candidates seeded with the first three stations;
//! each later station replaces the *first* candidate it beats and is then
//! done. This is not a true top-3: a station knocked out of the buffer is
//! never reconsidered, and a newcomer may evict a closer candidate than the
//! farthest one. Output parity depends on keeping it that way.

use crate::domain::{
    Coordinates, DisplayStation, Distance, RankedStation, StationInfo, StationStatus,
};

/// Number of stations shown.
pub const CANDIDATES: usize = 3;

/// A selected station with its display distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub station: RankedStation,
    pub distance: Distance,
}

/// Pick up to three stations near `user`, closest first.
pub fn select_nearest(stations: &[StationInfo], user: &Coordinates) -> Vec<Candidate> {
    let mut ranked = stations
        .iter()
        .map(|info| RankedStation::new(info.clone(), user));

    let mut buffer: Vec<RankedStation> = ranked.by_ref().take(CANDIDATES).collect();

    for station in ranked {
        if let Some(slot) = buffer.iter_mut().find(|slot| station.sed < slot.sed) {
            *slot = station;
        }
    }

    buffer.sort_by(|a, b| a.sed.total_cmp(&b.sed));

    buffer
        .into_iter()
        .map(|station| {
            let km = station.info.coordinates().haversine_km(user);
            Candidate {
                distance: Distance::from_km(km),
                station,
            }
        })
        .collect()
}

/// Attach live availability and project to display records.
///
/// When several statuses share a station id the last one wins; stations
/// without a status keep empty counts.
pub fn merge_statuses(
    candidates: Vec<Candidate>,
    statuses: &[StationStatus],
) -> Vec<DisplayStation> {
    candidates
        .into_iter()
        .map(|candidate| {
            let status = statuses
                .iter()
                .rev()
                .find(|s| s.station_id == candidate.station.info.station_id);

            DisplayStation {
                name: candidate.station.info.name,
                num_bikes_available: status.map(|s| s.num_bikes_available),
                num_ebikes_available: status.map(|s| s.num_ebikes_available),
                num_docks_available: status.map(|s| s.num_docks_available),
                distance: candidate.distance,
            }
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn station_at(idx: usize, (dlat, dlon): (f64, f64)) -> StationInfo {
        StationInfo {
            station_id: idx.to_string(),
            name: format!("Station {idx}"),
            lat: 45.5 + dlat,
            lon: -73.6 + dlon,
        }
    }

    fn offsets(min: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
        proptest::collection::vec((-0.2f64..0.2, -0.2f64..0.2), min..40)
    }

    proptest! {
        /// Three or more stations always yield exactly three
        #[test]
        fn exactly_three(offs in offsets(3)) {
            let stations: Vec<_> = offs.into_iter().enumerate().map(|(i, o)| station_at(i, o)).collect();
            let selected = select_nearest(&stations, &Coordinates::new(45.5, -73.6));
            prop_assert_eq!(selected.len(), CANDIDATES);
        }

        /// Output is ordered by ranking distance
        #[test]
        fn sorted_by_sed(offs in offsets(0)) {
            let stations: Vec<_> = offs.into_iter().enumerate().map(|(i, o)| station_at(i, o)).collect();
            let selected = select_nearest(&stations, &Coordinates::new(45.5, -73.6));
            for pair in selected.windows(2) {
                prop_assert!(pair[0].station.sed <= pair[1].station.sed);
            }
        }

        /// Along a meridian sed order is great-circle order
        #[test]
        fn sorted_by_true_distance_on_meridian(dlats in proptest::collection::vec(-0.2f64..0.2, 3..40)) {
            let stations: Vec<_> = dlats.into_iter().enumerate().map(|(i, d)| station_at(i, (d, 0.0))).collect();
            let selected = select_nearest(&stations, &Coordinates::new(45.5, -73.6));
            let km: Vec<f64> = selected
                .iter()
                .map(|c| c.station.info.coordinates().haversine_km(&Coordinates::new(45.5, -73.6)))
                .collect();
            for pair in km.windows(2) {
                prop_assert!(pair[0] <= pair[1] + 1e-9);
            }
        }

        /// A station at the user's position is always selected, first
        #[test]
        fn own_position_always_selected(offs in offsets(0), insert_at in any::<prop::sample::Index>()) {
            let mut stations: Vec<_> = offs.into_iter().enumerate().map(|(i, o)| station_at(i, o)).collect();
            prop_assume!(stations.iter().all(|s| s.lat != 45.5 || s.lon != -73.6));
            let here = StationInfo {
                station_id: "here".to_string(),
                name: "Here".to_string(),
                lat: 45.5,
                lon: -73.6,
            };
            let idx = insert_at.index(stations.len() + 1);
            stations.insert(idx, here);

            let user = Coordinates::new(45.5, -73.6);
            let selected = select_nearest(&stations, &user);
            prop_assert_eq!(selected[0].station.info.station_id.as_str(), "here");
            prop_assert_eq!(selected[0].distance.value, 0.0);
        }
    }
}
