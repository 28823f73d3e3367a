//! One dashboard session: the state behind a single open dashboard.

use chrono::NaiveDate;
use rsv_fetch::{Completion, FetchController, FetchState, RecordSource, RequestTicket};
use rsv_model::{Reservation, ReservationField, SortState, ViewerZone};
use rsv_persistence::RecentSearches;
use rsv_pipeline::{BookingView, ViewSummary, search};
use tracing::{debug, info, warn};

use crate::logging::redact_value;
use crate::settings::Settings;
use crate::status::ViewStatus;

/// Fetch state, derived view, search term and recent searches.
///
/// Rows are derived in order: sort, date filter, then text search.
#[derive(Debug)]
pub struct DashboardSession {
    fetch: FetchController,
    view: BookingView,
    search_term: String,
    recent: RecentSearches,
}

impl DashboardSession {
    #[must_use]
    pub fn new(zone: ViewerZone, recent: RecentSearches) -> Self {
        Self {
            fetch: FetchController::new(),
            view: BookingView::new(zone),
            search_term: String::new(),
            recent,
        }
    }

    /// Session using the configured recent-search limit and default store path.
    #[must_use]
    pub fn from_settings(settings: &Settings, zone: ViewerZone) -> Self {
        let recent = RecentSearches::open_with_limit(
            Settings::recent_searches_path(),
            settings.search.max_recent,
        );
        Self::new(zone, recent)
    }

    /// Fetch from `endpoint` unless it is already the loaded endpoint.
    ///
    /// `None` when nothing was fetched.
    pub fn load(&mut self, source: &dyn RecordSource, endpoint: &str) -> Option<Completion> {
        let unchanged = self.fetch.endpoint() == Some(endpoint);
        if unchanged && !matches!(self.fetch.state(), FetchState::Idle) {
            debug!(endpoint, "Endpoint unchanged, keeping loaded data");
            return None;
        }
        let ticket = self.fetch.begin(endpoint);
        Some(self.run(source, &ticket))
    }

    /// Fetch again from the current endpoint.
    ///
    /// `None` when no endpoint has been loaded yet.
    pub fn reload(&mut self, source: &dyn RecordSource) -> Option<Completion> {
        let ticket = self.fetch.reload()?;
        Some(self.run(source, &ticket))
    }

    fn run(&mut self, source: &dyn RecordSource, ticket: &RequestTicket) -> Completion {
        self.view.clear_records();
        let result = source.fetch(ticket.endpoint());
        let completion = self.fetch.complete(ticket, result);
        if completion == Completion::Applied {
            self.sync_records();
        }
        completion
    }

    fn sync_records(&mut self) {
        match self.fetch.state() {
            FetchState::Ready(raw) => {
                let report = self.view.replace_records(raw);
                info!(
                    accepted = report.accepted,
                    dropped = report.dropped,
                    "Reservations loaded"
                );
            }
            _ => self.view.clear_records(),
        }
    }

    #[must_use]
    pub fn fetch_state(&self) -> &FetchState {
        self.fetch.state()
    }

    #[must_use]
    pub fn view(&self) -> &BookingView {
        &self.view
    }

    pub fn set_sort_key(&mut self, field: ReservationField) {
        self.view.set_sort_key(field);
    }

    #[must_use]
    pub fn sort_state(&self) -> SortState {
        self.view.sort_state()
    }

    pub fn set_date_filter(&mut self, day: NaiveDate) {
        self.view.set_date_filter(day);
    }

    /// Set the date filter from picker input; unparseable input is ignored.
    pub fn apply_date_input(&mut self, input: &str) -> Option<NaiveDate> {
        self.view.apply_date_input(input)
    }

    pub fn clear_date_filter(&mut self) {
        self.view.clear_date_filter();
    }

    /// Update the live search term. Not recorded in recent searches.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Record the current term in recent searches.
    ///
    /// Returns `false` for a blank term. A failed write is logged and the
    /// in-memory list is kept.
    pub fn submit_search(&mut self) -> bool {
        match self.recent.record(&self.search_term) {
            Ok(recorded) => {
                if recorded {
                    debug!(term = redact_value(&self.search_term), "Search submitted");
                }
                recorded
            }
            Err(err) => {
                warn!(
                    error = %err,
                    suggestion = %err.suggestion().unwrap_or_default(),
                    "Could not save recent searches"
                );
                true
            }
        }
    }

    /// Re-run a previous search.
    ///
    /// Counts as a submission: the term moves to the front of the history.
    pub fn select_recent(&mut self, index: usize) -> Option<&str> {
        let term = self.recent.entries().get(index)?.clone();
        self.search_term = term;
        self.submit_search();
        Some(&self.search_term)
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    #[must_use]
    pub fn recent_searches(&self) -> &[String] {
        self.recent.entries()
    }

    /// Rows to display: the current view narrowed by the search term.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<Reservation> {
        search(&self.view.current_view(), &self.search_term)
    }

    /// Summary for the viewer's current day.
    #[must_use]
    pub fn summary(&self) -> ViewSummary {
        self.summary_on(self.view.zone().today())
    }

    /// `total` counts visible rows; `today` counts the date-filtered view
    /// before search.
    #[must_use]
    pub fn summary_on(&self, today: NaiveDate) -> ViewSummary {
        let before_search = ViewSummary::compute(&self.view.current_view(), today);
        ViewSummary {
            total: self.visible_rows().len(),
            today: before_search.today,
        }
    }

    #[must_use]
    pub fn status(&self) -> ViewStatus {
        match self.fetch.state() {
            FetchState::Idle => ViewStatus::Idle,
            FetchState::Loading => ViewStatus::Loading,
            FetchState::Failed(err) => ViewStatus::Failed {
                message: err.user_message().to_string(),
            },
            FetchState::Ready(_) => {
                let matches = self.visible_rows().len();
                if !self.search_term.is_empty() {
                    ViewStatus::Searching { matches }
                } else if self.view.date_filter().is_some() {
                    ViewStatus::DateFiltered { matches }
                } else {
                    ViewStatus::All { total: matches }
                }
            }
        }
    }
}
