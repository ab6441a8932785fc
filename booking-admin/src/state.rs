//! Dashboard view-state
//!
//! The UI-local filter, search, and page inputs. Everything the view
//! renders is derived on demand from the store snapshot plus this state;
//! nothing is cached in between.

use crate::filter;
use crate::page;
use crate::store::BookingStore;
use chrono::NaiveDate;
use shared::models::{Booking, BookingStatus};

/// Bookings shown per page
pub const DEFAULT_PER_PAGE: usize = 6;

/// Filter, search, and pagination state of the admin view
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub status_filter: Option<BookingStatus>,
    pub date_filter: Option<NaiveDate>,
    pub search_term: String,
    pub current_page: usize,
    pub per_page: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            status_filter: None,
            date_filter: None,
            search_term: String::new(),
            current_page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full filtered sequence, in store order
    pub fn visible(&self, store: &BookingStore) -> Vec<Booking> {
        filter::visible(
            store.bookings(),
            self.status_filter,
            self.date_filter,
            &self.search_term,
        )
    }

    /// Rows for the current page
    pub fn current_page_items(&self, store: &BookingStore) -> Vec<Booking> {
        let visible = self.visible(store);
        page::page(&visible, self.current_page, self.per_page).to_vec()
    }

    pub fn page_count(&self, store: &BookingStore) -> usize {
        page::page_count(self.visible(store).len(), self.per_page)
    }

    /// Advance one page, clamped at the last page
    pub fn next_page(&mut self, store: &BookingStore) {
        if self.current_page < self.page_count(store) {
            self.current_page += 1;
        }
    }

    /// Go back one page, clamped at page 1
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Back to page 1. Filter setters do not call this; the view decides
    /// when a filter change should reset the page.
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<BookingStatus>) {
        self.status_filter = status;
    }

    pub fn set_date_filter(&mut self, date: Option<NaiveDate>) {
        self.date_filter = date;
    }

    pub fn clear_date_filter(&mut self) {
        self.date_filter = None;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}
