//! The sort → search → paginate pipeline.
//!
//! [`ListView`] holds the user-facing list state of a page like the rooms
//! list: the sort column, the search box and the page controls. Each call to
//! [`view`](ListView::view) derives a fresh [`Page`] from the collection it
//! is given; the collection itself is never modified or retained.

use std::marker::PhantomData;

use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::config::ListConfig;
use crate::debounce::DebouncedFilter;
use crate::error::{ListError, Result};
use crate::ordering::{sort_listable, SortSpec};
use crate::paginate::Paginator;
use crate::traits::Listable;

/// One derived page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    /// Records on this page, in display order.
    pub items: Vec<&'a T>,
    /// Page number, from 1.
    pub current_page: usize,
    /// Page size.
    pub page_size: usize,
    /// Records matching the search, across all pages.
    pub total: usize,
    /// Number of pages for `total`.
    pub page_count: usize,
}

impl<'a, T> Page<'a, T> {
    /// Returns `true` if nothing is shown on this page.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sort, search and page state for a list of `T`.
///
/// # Example
///
/// ```
/// use roomdesk_list::{ListConfig, ListView, Listable, Value, Number, Dir};
///
/// struct Room { number: u32 }
///
/// impl Listable for Room {
///     const FIELDS: &'static [&'static str] = &["number"];
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "number" => Value::Number(Number::from(self.number)),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let rooms: Vec<Room> = (1..=7).map(|number| Room { number }).collect();
/// let config = ListConfig::default()
///     .page_size(6)
///     .search_field("number")
///     .sort("number", Dir::Asc);
/// let mut list = ListView::<Room>::new(config).unwrap();
///
/// let page = list.view(&rooms);
/// assert_eq!(page.items.len(), 6);
/// assert_eq!(page.page_count, 2);
/// ```
pub struct ListView<T, C: Clock = SystemClock> {
    config: ListConfig,
    sort: SortSpec,
    search: DebouncedFilter<C>,
    pager: Paginator,
    _record: PhantomData<fn(&T)>,
}

impl<T: Listable> ListView<T, SystemClock> {
    /// Create a list view on the system clock.
    pub fn new(config: ListConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<T: Listable, C: Clock> ListView<T, C> {
    /// Create a list view on the given clock.
    ///
    /// Fails if the configured sort or search field is not a field of `T`,
    /// or the page size is zero.
    pub fn with_clock(config: ListConfig, clock: C) -> Result<Self> {
        let config = config.checked()?;
        check_field::<T>(&config.search_field)?;
        check_field::<T>(&config.sort_field)?;
        let pager = Paginator::new(config.page_size)?;
        let search = DebouncedFilter::with_clock(config.debounce_window(), clock);
        Ok(Self {
            sort: config.sort_spec(),
            config,
            search,
            pager,
            _record: PhantomData,
        })
    }

    /// Derive the current page of `items`.
    ///
    /// Sorts, filters on the debounced search term, re-applies the page
    /// shrink rule for the filtered length, then slices.
    pub fn view<'a>(&mut self, items: &'a [T]) -> Page<'a, T> {
        let sorted = sort_listable(items, &self.sort);
        let filtered = self
            .search
            .apply(&sorted, &self.config.search_field, T::accessor);
        self.pager.observe_len(filtered.len());
        let (start, end) = self.pager.bounds(filtered.len());
        Page {
            items: filtered[start..end].to_vec(),
            current_page: self.pager.current_page(),
            page_size: self.pager.page_size(),
            total: filtered.len(),
            page_count: self.pager.page_count(filtered.len()),
        }
    }

    /// Feed a keystroke from the search box.
    pub fn search_input(&mut self, term: impl Into<String>) {
        self.search.start(term);
    }

    /// Let a pending search settle. Returns `true` if the term changed.
    pub fn poll(&mut self) -> bool {
        self.search.poll().is_some()
    }

    /// Replace the sort and go back to page 1.
    pub fn set_sort(&mut self, spec: SortSpec) -> Result<()> {
        check_field::<T>(&spec.field)?;
        debug!(field = %spec.field, dir = %spec.dir, "sort changed");
        self.sort = spec;
        self.pager.set_page(1)
    }

    /// Column-header click: toggle direction on the current column, sort a
    /// new column ascending.
    pub fn request_sort(&mut self, field: &str) -> Result<()> {
        let next = self.sort.toggled(field);
        self.set_sort(next)
    }

    /// Go to `page`.
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        self.pager.set_page(page)
    }

    /// Change the page size; returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.pager.set_page_size(page_size)
    }

    /// Put back a previously persisted search term without waiting out the
    /// debounce window.
    pub fn restore_search(&mut self, term: impl Into<String>) {
        self.search.set_immediate(term);
    }

    /// Back to the configured sort, an empty search and the configured page
    /// size.
    pub fn reset(&mut self) {
        self.sort = self.config.sort_spec();
        self.search.set_immediate("");
        self.pager = Paginator::new(self.config.page_size).unwrap_or_default();
        debug!("list filters reset");
    }

    /// The active sort.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// What the user has typed.
    pub fn search_term(&self) -> &str {
        self.search.raw_term()
    }

    /// What the list is filtered by.
    pub fn debounced_term(&self) -> &str {
        self.search.debounced_term()
    }

    /// Returns `true` while a search keystroke is waiting to settle.
    pub fn is_searching(&self) -> bool {
        self.search.is_pending()
    }

    /// The search filter, for registering settle callbacks or reading the
    /// next deadline.
    pub fn search_mut(&mut self) -> &mut DebouncedFilter<C> {
        &mut self.search
    }

    /// The current page number.
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// The current page size.
    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Page sizes offered to the user.
    pub fn page_size_options(&self) -> &[usize] {
        &self.config.page_size_options
    }

    /// The configuration this view was built from.
    pub fn config(&self) -> &ListConfig {
        &self.config
    }
}

fn check_field<T: Listable>(field: &str) -> Result<()> {
    if T::has_field(field) {
        Ok(())
    } else {
        Err(ListError::UnknownField(field.to_string()))
    }
}
