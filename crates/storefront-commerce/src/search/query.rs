//! Catalog query: the fetched catalog, the current search term, and the
//! view derived from both.

use crate::catalog::{CatalogSource, FetchResult, Product};
use crate::search::{CountLabel, TitleFilter};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Fetch lifecycle of the catalog.
///
/// `Idle -> Loading -> {Ready | Error}`. Only a new load leaves `Ready` or
/// `Error`, and it always goes back through `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The catalog was fetched.
    Ready,
    /// The last fetch failed; the catalog is empty.
    Error,
}

impl CatalogStatus {
    /// Lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Idle => "idle",
            CatalogStatus::Loading => "loading",
            CatalogStatus::Ready => "ready",
            CatalogStatus::Error => "error",
        }
    }
}

/// Read-only view of the catalog for rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogViewState {
    /// Products whose title contains the search term, in catalog order.
    pub visible_products: Vec<Product>,
    /// Term the view was filtered with.
    pub search_term: String,
    /// Size of the full catalog, not of the filtered list.
    pub total_count: usize,
    /// Pluralized `total_count`, e.g. "27 Products".
    pub count_label: String,
    /// Fetch status.
    pub status: CatalogStatus,
}

impl CatalogViewState {
    /// Check if a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.status == CatalogStatus::Loading
    }

    /// Check if the last fetch failed.
    pub fn has_error(&self) -> bool {
        self.status == CatalogStatus::Error
    }

    /// Check if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.visible_products.is_empty()
    }
}

/// Handle for one catalog load, issued by [`CatalogQuery::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    /// Generation this ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Holds the full catalog and current search term and derives the visible
/// products and count label from them.
///
/// Overlapping loads resolve latest-wins: every `begin_load` bumps a
/// generation counter and results carrying an older ticket are dropped.
/// A ticket settles at most once.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    catalog: Vec<Product>,
    search_term: String,
    status: CatalogStatus,
    label: CountLabel,
    generation: u64,
    // Generation of the unsettled load, if any.
    pending: Option<u64>,
}

impl CatalogQuery {
    /// Create an idle query with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom nouns for the count label.
    pub fn with_label(mut self, label: CountLabel) -> Self {
        self.label = label;
        self
    }

    /// Fetch the catalog from `source` and apply the outcome.
    ///
    /// The source is called exactly once. Failure never escapes: it is
    /// reported as [`CatalogStatus::Error`] with an empty catalog.
    pub async fn load<S>(&mut self, source: &S) -> CatalogViewState
    where
        S: CatalogSource + ?Sized,
    {
        let ticket = self.begin_load();
        let result = source.fetch_products().await;
        self.finish_load(ticket, result)
    }

    /// Enter `Loading` and issue a ticket for the fetch about to start.
    ///
    /// The held catalog stays searchable until the fetch settles.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.status = CatalogStatus::Loading;
        info!(generation = self.generation, "catalog load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of the fetch started with `ticket`.
    ///
    /// Results for a superseded or already settled ticket are ignored.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: FetchResult<Vec<Product>>,
    ) -> CatalogViewState {
        if self.pending != Some(ticket.generation) {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding superseded or settled catalog load"
            );
            return self.view();
        }
        self.pending = None;

        match result {
            Ok(products) => {
                info!(
                    generation = ticket.generation,
                    products = products.len(),
                    "catalog loaded"
                );
                self.catalog = products;
                self.status = CatalogStatus::Ready;
            }
            Err(error) => {
                warn!(generation = ticket.generation, %error, "catalog load failed");
                self.catalog = Vec::new();
                self.status = CatalogStatus::Error;
            }
        }

        self.view()
    }

    /// Filter the catalog by `term`.
    ///
    /// The term is stored as given. An empty term shows the whole catalog.
    pub fn search(&mut self, term: impl Into<String>) -> CatalogViewState {
        self.search_term = term.into();
        let view = self.view();
        debug!(
            term = %self.search_term,
            visible = view.visible_products.len(),
            "catalog searched"
        );
        view
    }

    /// Current view.
    pub fn view(&self) -> CatalogViewState {
        let total_count = self.catalog.len();
        CatalogViewState {
            visible_products: TitleFilter::new(&self.search_term).apply(&self.catalog),
            search_term: self.search_term.clone(),
            total_count,
            count_label: self.label.format(total_count),
            status: self.status,
        }
    }

    /// Fetch status.
    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    /// Current search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Size of the full catalog.
    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// The full, unfiltered catalog.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }
}
