use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};
use seatwise_catalog::{Seat, SeatMap, SeatStatus};
use seatwise_shared::Masked;
use crate::compare::{compare, ComparisonSet, SeatComparison};
use crate::confirm::{ConfirmationGateway, PendingConfirmation, SeatSelection};
use crate::filter::{filter_seats, SeatFilter};
use crate::recommend::{recommend, ScoredSeat, ScoringWeights, SeatPreferences};
use crate::{CoreError, CoreResult};

/// Live seat assignment for the active seat map.
///
/// All seat status writes go through this type. The set of seats with status
/// `Selected` always equals the set of values in the passenger mapping.
#[derive(Debug, Default)]
pub struct SeatSelectionSession {
    seat_map: Option<SeatMap>,
    /// passenger id -> seat id
    selections: BTreeMap<String, String>,
    filter: SeatFilter,
    comparison: ComparisonSet,
    error: Option<String>,
    loading: bool,
    history: Vec<SeatSelection>,
}

/// Returns a selected seat to its resting status
fn release(seat_map: &mut SeatMap, seat_id: &str) -> Option<SeatStatus> {
    let status = seat_map.seat(seat_id)?.release_status();
    seat_map.set_status(seat_id, status)?;
    Some(status)
}

impl SeatSelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the outcome of a command in the `error` field
    fn record<T>(&mut self, result: CoreResult<T>) -> CoreResult<T> {
        match &result {
            Ok(_) => self.error = None,
            Err(e) => {
                warn!("Seat selection command rejected: {}", e);
                self.error = Some(e.to_string());
            }
        }
        result
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Makes `seat_map` the active map. Selections and the comparison set
    /// belong to the previous map and are dropped.
    pub fn set_active_seat_map(&mut self, mut seat_map: SeatMap) {
        let stale: Vec<String> = seat_map
            .seats
            .iter()
            .filter(|s| s.status == SeatStatus::Selected)
            .map(|s| s.id.clone())
            .collect();
        for seat_id in &stale {
            release(&mut seat_map, seat_id);
        }

        info!("Activated seat map {} ({} seats)", seat_map.id, seat_map.seats.len());
        self.seat_map = Some(seat_map);
        self.selections.clear();
        self.comparison.clear();
        self.error = None;
    }

    /// Assigns `seat_id` to the passenger, releasing any seat they held.
    /// Returns the released seat id.
    pub fn select_seat(&mut self, passenger_id: &str, seat_id: &str) -> CoreResult<Option<String>> {
        let result = self.apply_selection(passenger_id, seat_id);
        self.record(result)
    }

    fn apply_selection(&mut self, passenger_id: &str, seat_id: &str) -> CoreResult<Option<String>> {
        let seat_map = self.seat_map.as_mut().ok_or(CoreError::NoActiveSeatMap)?;
        let status = seat_map
            .seat(seat_id)
            .ok_or_else(|| CoreError::SeatNotFound(seat_id.to_string()))?
            .status;

        let current = self.selections.get(passenger_id).cloned();
        if current.as_deref() == Some(seat_id) {
            return Ok(None);
        }

        match status {
            SeatStatus::Occupied | SeatStatus::Blocked => {
                return Err(CoreError::SeatUnavailable { seat_id: seat_id.to_string(), status });
            }
            SeatStatus::Selected => {
                return Err(CoreError::SeatTaken { seat_id: seat_id.to_string() });
            }
            SeatStatus::Available | SeatStatus::ExtraLegroom => {}
        }

        // Validation is complete, nothing below can fail
        if let Some(previous) = &current {
            release(seat_map, previous);
        }
        seat_map.set_status(seat_id, SeatStatus::Selected);
        self.selections.insert(passenger_id.to_string(), seat_id.to_string());

        info!("Passenger {} selected seat {}", passenger_id, seat_id);
        Ok(current)
    }

    /// Releases the passenger's seat. Returns the released seat id, `None`
    /// when the passenger had no selection.
    pub fn deselect_seat(&mut self, passenger_id: &str) -> Option<String> {
        self.error = None;
        let seat_id = self.selections.remove(passenger_id)?;
        if let Some(seat_map) = self.seat_map.as_mut() {
            release(seat_map, &seat_id);
        }
        info!("Passenger {} released seat {}", passenger_id, seat_id);
        Some(seat_id)
    }

    /// Releases every selected seat. Returns the released seat ids.
    pub fn clear_all_selections(&mut self) -> Vec<String> {
        self.error = None;
        self.selections.clear();

        let Some(seat_map) = self.seat_map.as_mut() else {
            return Vec::new();
        };

        let selected: Vec<String> = seat_map
            .seats
            .iter()
            .filter(|s| s.status == SeatStatus::Selected)
            .map(|s| s.id.clone())
            .collect();
        for seat_id in &selected {
            release(seat_map, seat_id);
        }

        info!("Cleared {} seat selections on {}", selected.len(), seat_map.id);
        selected
    }

    pub fn set_filter(&mut self, filter: SeatFilter) {
        debug!("Seat filter updated: {:?}", filter);
        self.filter = filter;
        self.error = None;
    }

    pub fn reset_filter(&mut self) {
        self.set_filter(SeatFilter::default());
    }

    pub fn add_to_comparison(&mut self, seat_id: &str) -> CoreResult<()> {
        let result = match self.seat_map.as_ref() {
            None => Err(CoreError::NoActiveSeatMap),
            Some(seat_map) if seat_map.seat(seat_id).is_none() => {
                Err(CoreError::SeatNotFound(seat_id.to_string()))
            }
            Some(_) => self.comparison.add(seat_id),
        };
        self.record(result)
    }

    pub fn remove_from_comparison(&mut self, seat_id: &str) -> bool {
        self.error = None;
        self.comparison.remove(seat_id)
    }

    pub fn clear_comparison(&mut self) {
        self.error = None;
        self.comparison.clear();
    }

    /// First half of a confirmation: snapshots the passenger's seat and
    /// raises the loading flag.
    pub fn begin_confirmation(
        &mut self,
        passenger_id: &str,
        passenger_name: &str,
    ) -> CoreResult<PendingConfirmation> {
        let result = self.snapshot_selection(passenger_id, passenger_name);
        let result = self.record(result);
        if result.is_ok() {
            self.loading = true;
        }
        result
    }

    fn snapshot_selection(&self, passenger_id: &str, passenger_name: &str) -> CoreResult<PendingConfirmation> {
        if self.loading {
            return Err(CoreError::ConfirmationPending);
        }
        let seat_map = self.seat_map.as_ref().ok_or(CoreError::NoActiveSeatMap)?;
        let seat = self
            .passenger_seat(passenger_id)
            .ok_or_else(|| CoreError::NoSelection(passenger_id.to_string()))?;

        Ok(PendingConfirmation {
            seat_map_id: seat_map.id.clone(),
            flight_id: seat_map.flight_id.clone(),
            passenger_id: passenger_id.to_string(),
            passenger_name: Masked::from(passenger_name),
            seat_id: seat.id.clone(),
            seat_number: seat.seat_number(),
            class: seat.class,
            price_nuc: seat.price_nuc,
        })
    }

    /// Second half of a confirmation. Appends to the history only when the
    /// gateway succeeded and the passenger still holds the same seat.
    pub fn finish_confirmation(
        &mut self,
        pending: PendingConfirmation,
        outcome: CoreResult<()>,
    ) -> CoreResult<SeatSelection> {
        self.loading = false;

        let result = outcome.and_then(|_| {
            let still_active = self.seat_map.as_ref().map(|m| m.id.as_str()) == Some(pending.seat_map_id.as_str());
            let still_held = self.selections.get(&pending.passenger_id) == Some(&pending.seat_id);
            if still_active && still_held {
                Ok(SeatSelection::from(pending))
            } else {
                Err(CoreError::ConfirmationFailed("selection changed while confirming".to_string()))
            }
        });

        let record = self.record(result)?;
        info!("Confirmed seat {} on {} for {}", record.seat_number, record.flight_id, record.passenger_name);
        self.history.push(record.clone());
        Ok(record)
    }

    /// Confirms the passenger's current seat through `gateway`
    pub async fn confirm_selection(
        &mut self,
        passenger_id: &str,
        passenger_name: &str,
        gateway: &dyn ConfirmationGateway,
    ) -> CoreResult<SeatSelection> {
        let pending = self.begin_confirmation(passenger_id, passenger_name)?;
        let outcome = gateway.confirm(&pending).await;
        self.finish_confirmation(pending, outcome)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn active_seat_map(&self) -> Option<&SeatMap> {
        self.seat_map.as_ref()
    }

    pub fn filter(&self) -> &SeatFilter {
        &self.filter
    }

    /// Seats passing the current filter
    pub fn filtered_seats(&self) -> Vec<&Seat> {
        match &self.seat_map {
            Some(seat_map) => filter_seats(seat_map, &self.filter),
            None => Vec::new(),
        }
    }

    pub fn recommendations(
        &self,
        prefs: &SeatPreferences,
        weights: &ScoringWeights,
        limit: usize,
    ) -> Vec<ScoredSeat<'_>> {
        recommend(&self.filtered_seats(), prefs, weights, limit)
    }

    pub fn seat_at(&self, row: u32, column: char) -> Option<&Seat> {
        self.seat_map.as_ref()?.seat_at(row, column)
    }

    pub fn passenger_seat(&self, passenger_id: &str) -> Option<&Seat> {
        let seat_id = self.selections.get(passenger_id)?;
        self.seat_map.as_ref()?.seat(seat_id)
    }

    pub fn selections(&self) -> &BTreeMap<String, String> {
        &self.selections
    }

    /// Sum over all current selections; complimentary seats count as zero
    pub fn total_price_nuc(&self) -> i32 {
        let Some(seat_map) = &self.seat_map else {
            return 0;
        };
        self.selections
            .values()
            .filter_map(|id| seat_map.seat(id))
            .map(|s| s.price_nuc.unwrap_or(0))
            .sum()
    }

    pub fn comparison_set(&self) -> &ComparisonSet {
        &self.comparison
    }

    pub fn comparison(&self) -> SeatComparison {
        let seats: Vec<&Seat> = match &self.seat_map {
            Some(seat_map) => self
                .comparison
                .seat_ids()
                .iter()
                .filter_map(|id| seat_map.seat(id))
                .collect(),
            None => Vec::new(),
        };
        compare(&seats)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn history(&self) -> &[SeatSelection] {
        &self.history
    }

    /// True when the selected seats and the passenger mapping agree
    pub fn check_invariants(&self) -> bool {
        let mapped: BTreeSet<&str> = self.selections.values().map(String::as_str).collect();
        if mapped.len() != self.selections.len() {
            return false;
        }
        let selected: BTreeSet<&str> = match &self.seat_map {
            Some(seat_map) => seat_map
                .seats
                .iter()
                .filter(|s| s.status == SeatStatus::Selected)
                .map(|s| s.id.as_str())
                .collect(),
            None => BTreeSet::new(),
        };
        mapped == selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::SimulatedGateway;
    use crate::testing::{cabin_map, scenario_map};
    use std::time::Duration;

    fn session_with(seat_map: SeatMap) -> SeatSelectionSession {
        let mut session = SeatSelectionSession::new();
        session.set_active_seat_map(seat_map);
        session
    }

    fn status(session: &SeatSelectionSession, seat_id: &str) -> SeatStatus {
        session.active_seat_map().unwrap().seat(seat_id).unwrap().status
    }

    #[test]
    fn test_reassignment_scenario() {
        let mut session = session_with(scenario_map());

        session.select_seat("P1", "A1").unwrap();
        assert_eq!(status(&session, "A1"), SeatStatus::Selected);

        let released = session.select_seat("P1", "A2").unwrap();
        assert_eq!(released.as_deref(), Some("A1"));
        assert_eq!(status(&session, "A1"), SeatStatus::Available);
        assert_eq!(status(&session, "A2"), SeatStatus::Selected);
        assert_eq!(session.selections().len(), 1);
        assert_eq!(session.selections()["P1"], "A2");
        assert!(session.check_invariants());
    }

    #[test]
    fn test_occupied_seat_is_rejected() {
        let mut session = session_with(scenario_map());
        session.select_seat("P1", "A1").unwrap();

        let err = session.select_seat("P1", "A3").unwrap_err();
        assert!(matches!(err, CoreError::SeatUnavailable { status: SeatStatus::Occupied, .. }));
        assert!(session.error().is_some());
        assert_eq!(session.selections()["P1"], "A1");
        assert_eq!(status(&session, "A3"), SeatStatus::Occupied);

        // next successful command clears the error
        session.select_seat("P1", "A2").unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_blocked_taken_and_unknown_seats() {
        let mut session = session_with(cabin_map());

        assert!(matches!(
            session.select_seat("P1", "2B"),
            Err(CoreError::SeatUnavailable { status: SeatStatus::Blocked, .. })
        ));
        assert!(matches!(session.select_seat("P1", "99Z"), Err(CoreError::SeatNotFound(_))));

        session.select_seat("P1", "1A").unwrap();
        assert!(matches!(session.select_seat("P2", "1A"), Err(CoreError::SeatTaken { .. })));
        assert!(session.passenger_seat("P2").is_none());

        // re-selecting the held seat is fine
        assert_eq!(session.select_seat("P1", "1A").unwrap(), None);
        assert!(session.check_invariants());

        let mut empty = SeatSelectionSession::new();
        assert!(matches!(empty.select_seat("P1", "1A"), Err(CoreError::NoActiveSeatMap)));
    }

    #[test]
    fn test_exit_row_seats_round_trip_to_extra_legroom() {
        let mut session = session_with(cabin_map());

        session.select_seat("P1", "10A").unwrap();
        session.select_seat("P1", "2C").unwrap();
        assert_eq!(status(&session, "10A"), SeatStatus::ExtraLegroom);

        session.select_seat("P2", "10C").unwrap();
        assert_eq!(session.deselect_seat("P2").as_deref(), Some("10C"));
        assert_eq!(status(&session, "10C"), SeatStatus::ExtraLegroom);
    }

    #[test]
    fn test_deselect_is_idempotent() {
        let mut session = session_with(cabin_map());
        session.select_seat("P1", "1C").unwrap();

        assert_eq!(session.deselect_seat("P1").as_deref(), Some("1C"));
        let after_first = session.active_seat_map().cloned();
        assert_eq!(session.deselect_seat("P1"), None);

        assert_eq!(session.active_seat_map().cloned(), after_first);
        assert!(session.selections().is_empty());
        assert_eq!(status(&session, "1C"), SeatStatus::Available);
    }

    #[test]
    fn test_clear_all_and_total_price() {
        let mut session = session_with(cabin_map());
        session.select_seat("P1", "1A").unwrap();
        session.select_seat("P2", "10A").unwrap();
        session.select_seat("P3", "2C").unwrap();

        assert_eq!(session.total_price_nuc(), 12000 + 4500 + 1500);
        assert!(session.filtered_seats().iter().all(|s| s.status != SeatStatus::Selected));

        let mut released = session.clear_all_selections();
        released.sort();
        assert_eq!(released, vec!["10A", "1A", "2C"]);
        assert_eq!(session.total_price_nuc(), 0);
        assert_eq!(status(&session, "10A"), SeatStatus::ExtraLegroom);
        assert_eq!(status(&session, "1A"), SeatStatus::Available);
        assert!(session.check_invariants());
    }

    #[test]
    fn test_switching_seat_map_drops_selections() {
        let mut session = session_with(cabin_map());
        session.select_seat("P1", "1A").unwrap();
        session.add_to_comparison("1B").unwrap();

        let mut stale = scenario_map();
        stale.seats[1].status = SeatStatus::Selected;
        session.set_active_seat_map(stale);

        assert!(session.selections().is_empty());
        assert!(session.comparison_set().is_empty());
        assert_eq!(status(&session, "A2"), SeatStatus::Available);
        assert!(session.check_invariants());
    }

    #[test]
    fn test_invariant_holds_across_command_sequence() {
        let mut session = session_with(cabin_map());
        let seat_ids: Vec<String> = session
            .active_seat_map()
            .unwrap()
            .seats
            .iter()
            .map(|s| s.id.clone())
            .collect();
        let passengers = ["P1", "P2", "P3"];

        for i in 0..240usize {
            let passenger = passengers[i % passengers.len()];
            match i % 5 {
                4 => {
                    session.deselect_seat(passenger);
                }
                _ if i % 37 == 0 => {
                    session.clear_all_selections();
                }
                _ => {
                    let seat_id = &seat_ids[(i * 7 + i / 3) % seat_ids.len()];
                    let _ = session.select_seat(passenger, seat_id);
                }
            }
            assert!(session.check_invariants(), "step {}", i);
            assert!(session.selections().len() <= passengers.len());
        }
    }

    #[test]
    fn test_comparison_through_session() {
        let mut session = session_with(cabin_map());
        session.add_to_comparison("1A").unwrap();
        session.add_to_comparison("2C").unwrap();
        session.add_to_comparison("10A").unwrap();

        assert!(matches!(session.add_to_comparison("1B"), Err(CoreError::ComparisonFull { .. })));
        assert!(session.error().is_some());
        assert_eq!(session.comparison_set().len(), 3);
        assert!(matches!(session.add_to_comparison("nope"), Err(CoreError::SeatNotFound(_))));

        let comparison = session.comparison();
        assert_eq!(comparison.seats.len(), 3);
        assert!(!comparison.differences.is_empty());

        assert!(session.remove_from_comparison("2C"));
        session.clear_comparison();
        assert!(session.comparison().differences.is_empty());
    }

    #[test]
    fn test_filter_and_lookup_queries() {
        let mut session = session_with(cabin_map());
        session.set_filter(SeatFilter::default().exit_row_only());
        assert_eq!(session.filtered_seats().len(), 2);

        let prefs = SeatPreferences { prefer_aisle: true, ..Default::default() };
        let top = session.recommendations(&prefs, &ScoringWeights::default(), 5);
        assert_eq!(top[0].seat.id, "10C");

        session.reset_filter();
        assert_eq!(session.filtered_seats().len(), 6);
        assert_eq!(session.seat_at(2, 'c').map(|s| s.id.as_str()), Some("2C"));
        assert!(session.seat_at(50, 'A').is_none());
    }

    #[tokio::test]
    async fn test_confirmation_appends_history() {
        let mut session = session_with(cabin_map());
        session.select_seat("P1", "10A").unwrap();
        let gateway = SimulatedGateway::new(Duration::from_millis(1));

        let record = session.confirm_selection("P1", "Alan Turing", &gateway).await.unwrap();

        assert_eq!(record.seat_number, "10A");
        assert_eq!(record.price_nuc, Some(4500));
        assert_eq!(record.flight_id, "FL-CABIN");
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_loading());
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_confirmation_writes_nothing() {
        let mut session = session_with(cabin_map());
        session.select_seat("P1", "1A").unwrap();
        let gateway = SimulatedGateway::failing(Duration::from_millis(1));

        let err = session.confirm_selection("P1", "Alan Turing", &gateway).await.unwrap_err();

        assert!(matches!(err, CoreError::ConfirmationFailed(_)));
        assert!(session.history().is_empty());
        assert!(!session.is_loading());
        assert!(session.error().is_some());
        // the selection itself survives
        assert_eq!(session.selections()["P1"], "1A");
    }

    #[test]
    fn test_confirmation_phases() {
        let mut session = session_with(cabin_map());
        assert!(matches!(session.begin_confirmation("P1", "Ada"), Err(CoreError::NoSelection(_))));

        session.select_seat("P1", "1A").unwrap();
        let pending = session.begin_confirmation("P1", "Ada").unwrap();
        assert!(session.is_loading());
        assert!(matches!(session.begin_confirmation("P1", "Ada"), Err(CoreError::ConfirmationPending)));

        // the passenger moves while the call is in flight
        session.select_seat("P1", "1B").unwrap();
        let err = session.finish_confirmation(pending, Ok(())).unwrap_err();
        assert!(matches!(err, CoreError::ConfirmationFailed(_)));
        assert!(!session.is_loading());
        assert!(session.history().is_empty());
    }
}
