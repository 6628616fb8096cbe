/// Session-scoped state of the catalog screen
///
/// Owns the query cache, the selection, the add-product form and the
/// creation mutation. It is created when the window opens and dropped
/// with it. Every user action goes through a method here that applies
/// the transition and then re-synchronises the queries, returning the
/// I/O the host still has to perform. Nothing in this module touches
/// the network.

use serde_json::Value;

use super::data::{FormError, FormField, NewProduct, ProductForm, ProductId};
use super::mutation::{Mutation, MutationState, MutationTicket};
use super::query::{FetchTicket, QueryCache, QueryState};
use super::selection::Selection;
use crate::api::{CatalogData, CatalogQuery, FetchError};

/// A fetch the host must run and hand back through `query_resolved`
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub ticket: FetchTicket,
    pub query: CatalogQuery,
}

/// A creation the host must submit and hand back through `creation_settled`
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCreate {
    pub ticket: MutationTicket,
    pub payload: NewProduct,
}

#[derive(Debug, Default)]
pub struct Session {
    queries: QueryCache<CatalogData>,
    selection: Selection,
    form: ProductForm,
    form_error: Option<FormError>,
    creation: Mutation<Value>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Queries ==========

    /// The detail query, if a product is selected (its enablement gate)
    fn detail_query(&self) -> Option<CatalogQuery> {
        self.selection.selected_product().map(CatalogQuery::Product)
    }

    /// Start whatever fetches the current state calls for
    ///
    /// The list is always enabled; the detail only while a product is
    /// selected.
    pub fn sync(&mut self) -> Vec<PendingFetch> {
        let mut pending = Vec::new();

        let list = CatalogQuery::Products;
        if let Some(ticket) = self.queries.observe(&list.key(), true) {
            pending.push(PendingFetch { ticket, query: list });
        }

        if let Some(detail) = self.detail_query() {
            if let Some(ticket) = self.queries.observe(&detail.key(), true) {
                pending.push(PendingFetch { ticket, query: detail });
            }
        }

        pending
    }

    /// Apply a fetch result; false if it was superseded
    pub fn query_resolved(&mut self, ticket: FetchTicket, result: Result<CatalogData, FetchError>) -> bool {
        let key = ticket.key.clone();
        if !self.queries.resolve(ticket, result) {
            return false;
        }

        let state = self.queries.state(&key, true);
        tracing::debug!(%key, status = ?state.status(), "query settled");
        if let Some(products) = state.data().and_then(CatalogData::products) {
            tracing::info!("🛍️  Loaded {} products", products.len());
        }
        true
    }

    /// Fetch the product list again (error screen retry)
    pub fn retry_list(&mut self) -> PendingFetch {
        let query = CatalogQuery::Products;
        tracing::info!("🔄 Retrying product list");
        PendingFetch {
            ticket: self.queries.refetch(&query.key()),
            query,
        }
    }

    pub fn list_state(&self) -> &QueryState<CatalogData> {
        self.queries.state(&CatalogQuery::Products.key(), true)
    }

    /// Detail state for the current selection; `Idle` when none
    pub fn detail_state(&self) -> &QueryState<CatalogData> {
        match self.detail_query() {
            Some(query) => self.queries.state(&query.key(), true),
            None => self.queries.idle(),
        }
    }

    // ========== Selection ==========

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Open the detail overlay for `id`
    ///
    /// Re-selecting a product whose detail fetch failed fetches it again.
    /// Other actions leave a failed entry alone.
    pub fn select_product(&mut self, id: ProductId) -> Vec<PendingFetch> {
        tracing::info!(id, "Inspecting product");
        self.selection.select_product(id);
        let mut pending = self.sync();

        let query = CatalogQuery::Product(id);
        if matches!(self.detail_state(), QueryState::Error(_)) {
            tracing::debug!(id, "refetching failed product detail");
            pending.push(PendingFetch {
                ticket: self.queries.refetch(&query.key()),
                query,
            });
        }
        pending
    }

    pub fn clear_selection(&mut self) -> Vec<PendingFetch> {
        self.selection.clear_selection();
        self.sync()
    }

    pub fn open_add_form(&mut self) -> Vec<PendingFetch> {
        self.selection.open_add_form();
        self.sync()
    }

    pub fn close_add_form(&mut self) -> Vec<PendingFetch> {
        self.selection.close_add_form();
        self.sync()
    }

    // ========== Add-product form ==========

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_error(&self) -> Option<&FormError> {
        self.form_error.as_ref()
    }

    pub fn edit_form(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
        self.form_error = None;
    }

    /// Validate the form and start the creation
    ///
    /// Leaves the overlay open and the inputs as typed; the list is not
    /// refetched. Returns None when validation fails.
    pub fn submit_form(&mut self) -> Option<PendingCreate> {
        match self.form.validate() {
            Ok(payload) => {
                self.form_error = None;
                if self.creation.is_pending() {
                    tracing::debug!("superseding pending product creation");
                }
                tracing::info!(id = payload.id, title = %payload.title, "📦 Creating product");
                Some(PendingCreate {
                    ticket: self.creation.begin(),
                    payload,
                })
            }
            Err(err) => {
                tracing::debug!("form rejected: {}", err);
                self.form_error = Some(err);
                None
            }
        }
    }

    /// Record the store's answer to a creation
    pub fn creation_settled(&mut self, ticket: MutationTicket, result: Result<Value, FetchError>) -> bool {
        let applied = self.creation.settle(ticket, result);
        match self.creation.state() {
            MutationState::Success(confirmation) if applied => {
                tracing::info!(%confirmation, "✅ Product created")
            }
            MutationState::Error(err) if applied => tracing::warn!("⚠️  Product creation failed: {}", err),
            _ => {}
        }
        applied
    }
}
