//! The hotel list store.
//!
//! `HotelStore` owns the list state shown by every view of the session:
//! the current page of hotels, the total match count, a loading flag and
//! the last fetch error. Views observe it through a `watch` channel.
//!
//! # Ordering
//!
//! Each `fetch_hotels` call takes a sequence number before it issues its
//! request. A response is applied only if no newer fetch has started since;
//! otherwise it is dropped and the call reports [`FetchOutcome::Superseded`].
//! `fetch_hotels` is the only writer of the state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use hotel_admin_core::{Hotel, HotelFilter, HotelListQuery, total_pages};
use tokio::sync::watch;

use crate::api::HotelApi;

/// Observable list state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    /// Hotels of the current page, in server order.
    pub hotels: Vec<Hotel>,
    pub total_count: u64,
    pub loading: bool,
    /// Message of the last failed fetch; cleared when a fetch starts.
    pub error: Option<String>,
}

impl StoreState {
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_count)
    }
}

/// Filters accepted by [`HotelStore::fetch_hotels`]. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFilters {
    pub name: Option<String>,
    pub rating: Option<f64>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// 1-based page; `None` means page 1.
    pub page: Option<u32>,
}

impl HotelFilters {
    /// Name search on a given page, as issued by the list view.
    pub fn search(name: impl Into<String>, page: u32) -> Self {
        Self {
            name: Some(name.into()),
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn into_query(self) -> HotelListQuery {
        let filter = HotelFilter {
            name: self.name,
            rating: self.rating,
            price_min: self.price_min,
            price_max: self.price_max,
        };
        HotelListQuery::new(filter, self.page.unwrap_or(1))
    }
}

/// What happened to one `fetch_hotels` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the hotel list and count.
    Applied,
    /// The request failed; the previous list is kept and the error recorded.
    Failed(String),
    /// A newer fetch started before this one finished; its response was dropped.
    Superseded,
}

/// Session-scoped list state plus the fetch action that drives it.
pub struct HotelStore {
    api: Arc<dyn HotelApi>,
    latest: AtomicU64,
    state: watch::Sender<StoreState>,
}

impl HotelStore {
    pub fn new(api: Arc<dyn HotelApi>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            api,
            latest: AtomicU64::new(0),
            state,
        }
    }

    /// The API the store fetches through; forms submit through it too.
    pub fn api(&self) -> &Arc<dyn HotelApi> {
        &self.api
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Fetch one page of hotels matching `filters`.
    pub async fn fetch_hotels(&self, filters: HotelFilters) -> FetchOutcome {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let query = filters.into_query();
        tracing::debug!(target: "hotel_admin.store", seq, page = query.page, "fetching hotels");
        let result = self.api.list_hotels(&query).await;

        let mut outcome = FetchOutcome::Superseded;
        self.state.send_if_modified(|state| {
            // Compared under the channel's write lock.
            if self.latest.load(Ordering::SeqCst) != seq {
                return false;
            }
            state.loading = false;
            match &result {
                Ok(page) => {
                    state.hotels.clone_from(&page.hotels);
                    state.total_count = page.total_count;
                    outcome = FetchOutcome::Applied;
                }
                Err(err) => {
                    let message = err.to_string();
                    state.error = Some(message.clone());
                    outcome = FetchOutcome::Failed(message);
                }
            }
            true
        });

        match &outcome {
            FetchOutcome::Superseded => {
                tracing::debug!(target: "hotel_admin.store", seq, "discarding superseded response");
            }
            FetchOutcome::Failed(message) => {
                tracing::warn!(target: "hotel_admin.store", seq, error = %message, "fetch failed");
            }
            FetchOutcome::Applied => {}
        }
        outcome
    }
}
