/// Derives what the screen shows from the session state
///
/// `compose` is a pure function: it is re-run on every render and
/// reads the list query, the detail query and the selection. It
/// produces a widget-free `Screen` so the decisions can be tested
/// without a window.

use crate::api::CatalogData;
use crate::state::data::{price_label, FormError, Product, ProductForm, ProductId};
use crate::state::query::QueryState;
use crate::state::session::Session;

/// Placeholder cells shown while the list is loading
pub const SKELETON_CELLS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    /// The list query failed; nothing else is rendered
    Error { message: String },
    /// The list has not arrived yet
    Loading { placeholders: usize },
    Ready {
        cells: Vec<Cell<'a>>,
        detail: Option<DetailPanel<'a>>,
        add_form: Option<AddFormPanel<'a>>,
    },
}

/// One product in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'a> {
    pub id: ProductId,
    pub title: &'a str,
    pub price: String,
    pub image: &'a str,
}

/// Content of the detail overlay
///
/// `product` is whatever the detail query holds right now, so it is
/// None while loading or after a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel<'a> {
    pub id: ProductId,
    pub product: Option<&'a Product>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddFormPanel<'a> {
    pub form: &'a ProductForm,
    pub error: Option<&'a FormError>,
}

pub fn compose(session: &Session) -> Screen<'_> {
    let products = match session.list_state() {
        QueryState::Error(err) => {
            return Screen::Error {
                message: err.to_string(),
            }
        }
        QueryState::Idle | QueryState::Loading => {
            return Screen::Loading {
                placeholders: SKELETON_CELLS,
            }
        }
        QueryState::Success(data) => data.products().unwrap_or(&[]),
    };

    let cells = products
        .iter()
        .map(|product| Cell {
            id: product.id,
            title: &product.title,
            price: price_label(product.price),
            image: &product.image,
        })
        .collect();

    let selection = session.selection();

    let detail = selection.selected_product().map(|id| DetailPanel {
        id,
        product: session.detail_state().data().and_then(CatalogData::product),
    });

    let add_form = selection.is_add_form_visible().then(|| AddFormPanel {
        form: session.form(),
        error: session.form_error(),
    });

    Screen::Ready {
        cells,
        detail,
        add_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CatalogQuery, FetchError};
    use crate::state::query::{QueryKey, QueryStatus};
    use crate::state::data::FormField;
    use crate::state::session::PendingFetch;

    fn product(id: ProductId, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: format!("{} description", title),
            category: "misc".to_string(),
            image: format!("https://example.com/{}.png", id),
        }
    }

    fn resolve_list(session: &mut Session, fetch: PendingFetch, products: Vec<Product>) {
        assert_eq!(fetch.query, CatalogQuery::Products);
        session.query_resolved(fetch.ticket, Ok(CatalogData::Products(products)));
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        let fetch = session.sync().remove(0);
        resolve_list(&mut session, fetch, vec![product(1, "A", 9.99), product(2, "B", 5.0)]);
        session
    }

    #[test]
    fn test_loading_shows_ten_placeholders() {
        let session = Session::new();
        assert_eq!(compose(&session), Screen::Loading { placeholders: 10 });

        let mut session = Session::new();
        session.sync();
        assert_eq!(compose(&session), Screen::Loading { placeholders: SKELETON_CELLS });
    }

    #[test]
    fn test_list_failure_shows_error_only() {
        let mut session = Session::new();
        let fetch = session.sync().remove(0);
        session.select_product(1);
        session.open_add_form();
        session.query_resolved(fetch.ticket, Err(FetchError::Network("connection refused".to_string())));

        match compose(&session) {
            Screen::Error { message } => assert!(message.contains("connection refused")),
            other => panic!("expected error screen, got {:?}", other),
        }
    }

    #[test]
    fn test_ready_renders_cells_in_response_order() {
        let mut session = Session::new();
        let fetch = session.sync().remove(0);
        let products: Vec<Product> = [(7, "G"), (3, "C"), (5, "E")]
            .into_iter()
            .map(|(id, title)| product(id, title, 1.0))
            .collect();
        resolve_list(&mut session, fetch, products);

        let Screen::Ready { cells, detail, add_form } = compose(&session) else {
            panic!("expected ready screen");
        };
        let ids: Vec<ProductId> = cells.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![7, 3, 5]);
        assert!(detail.is_none());
        assert!(add_form.is_none());
    }

    #[test]
    fn test_select_then_dismiss_scenario() {
        let mut session = ready_session();

        let Screen::Ready { cells, .. } = compose(&session) else {
            panic!("expected ready screen");
        };
        let labels: Vec<(&str, &str)> = cells.iter().map(|c| (c.title, c.price.as_str())).collect();
        assert_eq!(labels, vec![("A", "$9.99"), ("B", "$5")]);
        assert_eq!(cells[0].image, "https://example.com/1.png");

        // Click "A"
        let fetch = session.select_product(1).remove(0);
        assert_eq!(fetch.ticket.key, QueryKey::new(["products", "1"]));

        // Overlay is mounted before the detail arrives, with no fields yet
        let Screen::Ready { detail: Some(panel), .. } = compose(&session) else {
            panic!("expected detail overlay");
        };
        assert_eq!(panel.id, 1);
        assert!(panel.product.is_none());

        session.query_resolved(fetch.ticket, Ok(CatalogData::Product(product(1, "A", 9.99))));
        let Screen::Ready { detail: Some(panel), .. } = compose(&session) else {
            panic!("expected detail overlay");
        };
        assert_eq!(panel.product.map(|p| p.title.as_str()), Some("A"));

        // Dismiss
        session.clear_selection();
        let Screen::Ready { detail, .. } = compose(&session) else {
            panic!("expected ready screen");
        };
        assert!(detail.is_none());
        assert_eq!(session.detail_state().status(), QueryStatus::Idle);
    }

    #[test]
    fn test_dismiss_hides_overlay_while_fetch_in_flight() {
        let mut session = ready_session();
        session.select_product(2);
        session.clear_selection();
        assert!(matches!(compose(&session), Screen::Ready { detail: None, .. }));
    }

    #[test]
    fn test_failed_detail_keeps_grid() {
        let mut session = ready_session();
        let fetch = session.select_product(42).remove(0);
        session.query_resolved(
            fetch.ticket,
            Err(FetchError::Remote {
                status: 404,
                message: "product 42 not found".to_string(),
            }),
        );

        assert_eq!(session.detail_state().status(), QueryStatus::Error);
        let Screen::Ready { cells, detail: Some(panel), .. } = compose(&session) else {
            panic!("expected ready screen with overlay");
        };
        assert_eq!(cells.len(), 2);
        assert_eq!(panel.id, 42);
        assert!(panel.product.is_none());
    }

    #[test]
    fn test_add_form_overlay_follows_flag() {
        let mut session = ready_session();
        session.open_add_form();
        session.edit_form(FormField::Title, "Tote".to_string());
        session.submit_form();

        let Screen::Ready { add_form: Some(panel), .. } = compose(&session) else {
            panic!("expected add form overlay");
        };
        assert_eq!(panel.form.title, "Tote");
        assert_eq!(panel.error, Some(&FormError::Missing(FormField::Id)));

        session.close_add_form();
        assert!(matches!(compose(&session), Screen::Ready { add_form: None, .. }));
    }
}
