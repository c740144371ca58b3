//! The hotel list view.
//!
//! `HotelTable` keeps the session-local view state (search text, page,
//! sorting, column visibility, row selection and the edit dialog) and
//! renders the store's current page as rows. Sorting only reorders the
//! fetched page; it never triggers a request.

use std::cmp::Ordering as CmpOrdering;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use hotel_admin_core::Hotel;

use crate::debounce::Debouncer;
use crate::error::GuiError;
use crate::form::{HotelForm, SubmitOutcome};
use crate::store::{FetchOutcome, HotelFilters, HotelStore};

/// Quiet period after the last keystroke before a search is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);
pub const SEARCH_PLACEHOLDER: &str = "Filter hotels...";
pub const EMPTY_MESSAGE: &str = "No results.";
/// Label of the per-row action. The action column cannot be hidden.
pub const EDIT_ACTION_LABEL: &str = "Edit Hotel";

// ─────────────────────────────────────────────────────────────────────────────
// Columns
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Rating,
    PricePerNight,
}

impl Column {
    pub const ALL: [Self; 3] = [Self::Name, Self::Rating, Self::PricePerNight];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::PricePerNight => "pricePerNight",
        }
    }

    pub const fn header(self) -> &'static str {
        match self {
            Self::Name => "Hotel Name",
            Self::Rating => "Rating",
            Self::PricePerNight => "Price Per Night",
        }
    }

    /// Display text of this column for `hotel`.
    pub fn cell(self, hotel: &Hotel) -> String {
        match self {
            Self::Name => hotel.name.clone(),
            Self::Rating => hotel.rating.to_string(),
            Self::PricePerNight => format_usd(hotel.price_per_night),
        }
    }

    fn compare(self, a: &Hotel, b: &Hotel) -> CmpOrdering {
        match self {
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Rating => a.rating.total_cmp(&b.rating),
            Self::PricePerNight => a.price_per_night.total_cmp(&b.price_per_night),
        }
    }
}

/// Format an amount as US dollars, e.g. `$1,234.50`.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

// ─────────────────────────────────────────────────────────────────────────────
// Sorting and rows
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub direction: SortDirection,
}

/// One rendered row: the hotel id plus its visible cells in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub selected: bool,
    pub cells: Vec<(Column, String)>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Table
// ─────────────────────────────────────────────────────────────────────────────

/// List view state over a shared [`HotelStore`].
pub struct HotelTable {
    store: Arc<HotelStore>,
    base: HotelFilters,
    search: String,
    page: Arc<AtomicU32>,
    debouncer: Debouncer,
    sort: Option<SortState>,
    hidden: HashSet<Column>,
    selected: HashSet<String>,
    edit: Option<HotelForm>,
}

impl HotelTable {
    pub fn new(store: Arc<HotelStore>) -> Self {
        Self {
            store,
            base: HotelFilters::default(),
            search: String::new(),
            page: Arc::new(AtomicU32::new(1)),
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
            sort: None,
            hidden: HashSet::new(),
            selected: HashSet::new(),
            edit: None,
        }
    }

    /// Start from `filters`: its name becomes the search text, its page the
    /// current page, and its other fields apply to every fetch.
    #[must_use]
    pub fn with_filters(mut self, mut filters: HotelFilters) -> Self {
        self.search = filters.name.take().unwrap_or_default();
        self.page.store(filters.page.take().unwrap_or(1).max(1), Ordering::SeqCst);
        self.base = filters;
        self
    }

    pub const fn store(&self) -> &Arc<HotelStore> {
        &self.store
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> u32 {
        self.page.load(Ordering::SeqCst)
    }

    fn filters_for(&self, search: &str, page: u32) -> HotelFilters {
        HotelFilters {
            name: Some(search.to_string()),
            page: Some(page),
            ..self.base.clone()
        }
    }

    /// Fetch the current page with the current search text.
    pub async fn load(&self) -> FetchOutcome {
        self.store
            .fetch_hotels(self.filters_for(&self.search, self.page()))
            .await
    }

    // ── Search ──────────────────────────────────────────────────────────────

    /// Record new search text and restart the debounce window.
    ///
    /// When the window elapses, the page resets to 1 and one fetch is sent
    /// with the latest text. Must be called from within a tokio runtime.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search = text.into();
        let store = self.store.clone();
        let page = self.page.clone();
        let filters = self.filters_for(&self.search, 1);
        self.debouncer.schedule(async move {
            page.store(1, Ordering::SeqCst);
            store.fetch_hotels(filters).await;
        });
    }

    /// Returns true while a debounced search has not finished.
    pub fn search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    // ── Pagination ──────────────────────────────────────────────────────────

    /// Pages available for the current total; never less than 1.
    pub fn total_pages(&self) -> u32 {
        self.store.snapshot().total_pages().max(1)
    }

    pub fn can_previous(&self) -> bool {
        self.page() > 1
    }

    pub fn can_next(&self) -> bool {
        self.page() < self.store.snapshot().total_pages()
    }

    /// Fetch `page`, clamped to the available range.
    ///
    /// The current page only moves once the fetch is applied, so a failed
    /// fetch leaves the label in step with the rows still shown.
    pub async fn go_to_page(&self, page: u32) -> FetchOutcome {
        let target = page.clamp(1, self.total_pages());
        let outcome = self
            .store
            .fetch_hotels(self.filters_for(&self.search, target))
            .await;
        if outcome == FetchOutcome::Applied {
            self.page.store(target, Ordering::SeqCst);
        }
        outcome
    }

    pub async fn next_page(&self) -> FetchOutcome {
        self.go_to_page(self.page().saturating_add(1)).await
    }

    pub async fn previous_page(&self) -> FetchOutcome {
        self.go_to_page(self.page().saturating_sub(1)).await
    }

    /// `Page X of Y`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page(), self.total_pages())
    }

    // ── Sorting ─────────────────────────────────────────────────────────────

    /// Cycle `column` through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some(SortState {
                column: current,
                direction: SortDirection::Ascending,
            }) if current == column => Some(SortState {
                column,
                direction: SortDirection::Descending,
            }),
            Some(SortState {
                column: current,
                direction: SortDirection::Descending,
            }) if current == column => None,
            _ => Some(SortState {
                column,
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub const fn sort(&self) -> Option<SortState> {
        self.sort
    }

    // ── Columns and selection ───────────────────────────────────────────────

    pub fn set_column_visible(&mut self, column: Column, visible: bool) {
        if visible {
            self.hidden.remove(&column);
        } else {
            self.hidden.insert(column);
        }
    }

    pub fn is_column_visible(&self, column: Column) -> bool {
        !self.hidden.contains(&column)
    }

    pub fn visible_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.is_column_visible(*c))
            .collect()
    }

    /// Flip selection of the row with `id`. Returns the new state.
    pub fn toggle_row_selected(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    pub fn is_row_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// `N of M row(s) selected.` for the rows on the current page.
    pub fn selection_label(&self) -> String {
        let hotels = self.store.snapshot().hotels;
        let selected = hotels
            .iter()
            .filter(|h| self.selected.contains(&h.id))
            .count();
        format!("{selected} of {} row(s) selected.", hotels.len())
    }

    // ── Rendering ───────────────────────────────────────────────────────────

    /// The current page, sorted, with visible cells only.
    pub fn rows(&self) -> Vec<TableRow> {
        let mut hotels = self.store.snapshot().hotels;
        if let Some(SortState { column, direction }) = self.sort {
            hotels.sort_by(|a, b| {
                let ord = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        let columns = self.visible_columns();
        hotels
            .iter()
            .map(|hotel| TableRow {
                id: hotel.id.clone(),
                selected: self.selected.contains(&hotel.id),
                cells: columns.iter().map(|c| (*c, c.cell(hotel))).collect(),
            })
            .collect()
    }

    /// The empty-state message when the current page has no rows.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.store
            .snapshot()
            .hotels
            .is_empty()
            .then_some(EMPTY_MESSAGE)
    }

    // ── Edit dialog ─────────────────────────────────────────────────────────

    /// Open the edit dialog for a row on the current page.
    pub fn open_edit(&mut self, id: &str) -> Result<&mut HotelForm, GuiError> {
        let hotel = self
            .store
            .snapshot()
            .hotels
            .into_iter()
            .find(|h| h.id == id)
            .ok_or_else(|| GuiError::NotFound {
                entity: "hotel",
                id: id.to_string(),
            })?;
        Ok(self
            .edit
            .insert(HotelForm::edit(self.store.clone(), &hotel)))
    }

    pub const fn edit_form(&self) -> Option<&HotelForm> {
        self.edit.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut HotelForm> {
        self.edit.as_mut()
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    /// Submit the open edit dialog.
    ///
    /// On success the dialog closes and the list is re-fetched with the
    /// current search text and page. Otherwise the dialog stays open.
    pub async fn submit_edit(&mut self) -> Result<SubmitOutcome, GuiError> {
        let form = self
            .edit
            .as_mut()
            .ok_or_else(|| GuiError::Conflict("no hotel is being edited".to_string()))?;
        let outcome = form.submit().await;
        if matches!(outcome, SubmitOutcome::Updated(_)) {
            self.edit = None;
            self.load().await;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::fake::{FakeHotelApi, hotel};
    use hotel_admin_core::HotelField;

    fn dataset(n: usize) -> Vec<Hotel> {
        (0..n)
            .map(|i| {
                let i_f = f64::from(u32::try_from(i).unwrap());
                hotel(
                    &format!("h{i}"),
                    &format!("Hotel {i:02}"),
                    (i_f % 5.0) + 0.5,
                    50.0 + i_f * 10.0,
                )
            })
            .collect()
    }

    fn setup(hotels: Vec<Hotel>) -> (Arc<FakeHotelApi>, HotelTable) {
        let api = Arc::new(FakeHotelApi::with_hotels(hotels));
        let store = Arc::new(HotelStore::new(api.clone()));
        (api, HotelTable::new(store))
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(99.5), "$99.50");
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-5.0), "-$5.00");
    }

    #[test]
    fn test_column_headers() {
        let headers: Vec<_> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers, vec!["Hotel Name", "Rating", "Price Per Night"]);
        assert_eq!(Column::PricePerNight.id(), "pricePerNight");
    }

    #[tokio::test]
    async fn test_load_and_paginate() {
        let (api, table) = setup(dataset(25));

        assert_eq!(table.load().await, FetchOutcome::Applied);
        assert_eq!(table.page_label(), "Page 1 of 3");
        assert!(!table.can_previous());
        assert!(table.can_next());

        table.next_page().await;
        table.next_page().await;
        assert_eq!(table.page(), 3);
        assert!(!table.can_next());
        assert_eq!(table.rows().len(), 5);

        // Clamped at the last page.
        table.next_page().await;
        assert_eq!(table.page(), 3);

        table.go_to_page(0).await;
        assert_eq!(table.page(), 1);
        assert_eq!(api.last_list_call().unwrap().page, 1);
    }

    #[tokio::test]
    async fn test_failed_page_fetch_keeps_current_page() {
        let (api, table) = setup(dataset(25));
        table.load().await;
        let first_page = table.rows();

        api.fail_next(ApiError::Network("connection reset".to_string()));
        let outcome = table.next_page().await;

        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(api.last_list_call().unwrap().page, 2);
        assert_eq!(table.page(), 1);
        assert_eq!(table.page_label(), "Page 1 of 3");
        assert_eq!(table.rows(), first_page);

        assert_eq!(table.next_page().await, FetchOutcome::Applied);
        assert_eq!(table.page(), 2);
    }

    #[tokio::test]
    async fn test_page_navigation_keeps_search_text() {
        let (api, mut table) = setup(dataset(25));
        table.search = "hotel 1".to_string();
        table.load().await;

        table.next_page().await;

        let query = api.last_list_call().unwrap();
        assert_eq!(query.filter.name.as_deref(), Some("hotel 1"));
        // "Hotel 1x" only has ten matches, so there is no page 2.
        assert_eq!(query.page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_debounced() {
        let (api, mut table) = setup(dataset(25));
        table.load().await;
        table.go_to_page(3).await;
        let calls_before = api.list_call_count();

        for text in ["H", "Ho", "Hotel", "Hotel 2"] {
            table.set_search_text(text);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert_eq!(api.list_call_count(), calls_before);
        assert!(table.search_pending());
        assert_eq!(table.page(), 3);

        tokio::time::sleep(SEARCH_DEBOUNCE).await;

        assert_eq!(api.list_call_count(), calls_before + 1);
        let query = api.last_list_call().unwrap();
        assert_eq!(query.filter.name.as_deref(), Some("Hotel 2"));
        assert_eq!(query.page, 1);
        assert_eq!(table.page(), 1);
        assert_eq!(table.store().snapshot().total_count, 5);
    }

    #[tokio::test]
    async fn test_sorting_reorders_fetched_page_only() {
        let (api, mut table) = setup(dataset(3));
        table.load().await;
        let calls = api.list_call_count();

        table.toggle_sort(Column::PricePerNight);
        let ids: Vec<_> = table.rows().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["h0", "h1", "h2"]);

        table.toggle_sort(Column::PricePerNight);
        let ids: Vec<_> = table.rows().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["h2", "h1", "h0"]);

        table.toggle_sort(Column::PricePerNight);
        assert!(table.sort().is_none());

        table.toggle_sort(Column::Name);
        assert_eq!(
            table.sort(),
            Some(SortState {
                column: Column::Name,
                direction: SortDirection::Ascending
            })
        );
        assert_eq!(api.list_call_count(), calls);
    }

    #[tokio::test]
    async fn test_hidden_columns_and_selection() {
        let (_api, mut table) = setup(dataset(2));
        table.load().await;

        table.set_column_visible(Column::Rating, false);
        assert!(table.toggle_row_selected("h1"));

        let rows = table.rows();
        assert_eq!(
            rows[1].cells,
            vec![
                (Column::Name, "Hotel 01".to_string()),
                (Column::PricePerNight, "$60.00".to_string()),
            ]
        );
        assert!(rows[1].selected);
        assert!(!rows[0].selected);
        assert_eq!(table.selection_label(), "1 of 2 row(s) selected.");

        assert!(!table.toggle_row_selected("h1"));
        table.set_column_visible(Column::Rating, true);
        assert_eq!(table.visible_columns(), Column::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_empty_state() {
        let (_api, table) = setup(Vec::new());
        table.load().await;

        assert!(table.rows().is_empty());
        assert_eq!(table.empty_message(), Some("No results."));
        assert_eq!(table.page_label(), "Page 1 of 1");
        assert!(!table.can_next());
    }

    #[tokio::test]
    async fn test_edit_dialog_refresh_keeps_view_state() {
        let (api, mut table) = setup(dataset(25));
        table.load().await;
        table.next_page().await;

        let form = table.open_edit("h12").unwrap();
        assert_eq!(form.values().name, "Hotel 12");
        form.set(HotelField::Name, "Renamed");

        let outcome = table.submit_edit().await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Updated(ref h) if h.name == "Renamed"));
        assert!(table.edit_form().is_none());
        let query = api.last_list_call().unwrap();
        assert_eq!(query.page, 2);
        assert!(table.rows().iter().any(|r| r.cells[0].1 == "Renamed"));
    }

    #[tokio::test]
    async fn test_edit_errors() {
        let (_api, mut table) = setup(dataset(2));
        table.load().await;

        assert!(matches!(
            table.open_edit("missing"),
            Err(GuiError::NotFound { .. })
        ));
        assert!(matches!(
            table.submit_edit().await,
            Err(GuiError::Conflict(_))
        ));

        let form = table.open_edit("h0").unwrap();
        form.set(HotelField::Address, "x");
        let outcome = table.submit_edit().await.unwrap();
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert!(table.edit_form().is_some());
    }
}
