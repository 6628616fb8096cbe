use iced::{Element, Task, Theme};
use serde_json::Value;

mod api;
mod config;
mod logging;
mod state;
mod ui;

use api::{CatalogClient, CatalogData, FetchError};
use config::CatalogConfig;
use state::data::{FormField, ProductId};
use state::mutation::MutationTicket;
use state::query::FetchTicket;
use state::session::{PendingCreate, PendingFetch, Session};

/// Request timeout for every call to the store
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Main application state
struct CatalogBrowser {
    /// HTTP client for the store API
    client: CatalogClient,
    /// Query cache, selection and form, alive as long as the window
    session: Session,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// A list or detail fetch finished
    QueryResolved(FetchTicket, Result<CatalogData, FetchError>),
    /// The store answered a product creation
    CreationSettled(MutationTicket, Result<Value, FetchError>),
    /// User clicked a product cell
    ProductSelected(ProductId),
    /// User clicked "X" on the detail overlay
    DetailDismissed,
    /// User clicked "Add Product"
    AddFormOpened,
    /// User clicked "X" on the add-product overlay
    AddFormDismissed,
    /// User typed into a form input
    FormEdited(FormField, String),
    /// User submitted the add-product form
    FormSubmitted,
    /// User clicked "Retry" on the error screen
    RetryList,
}

impl CatalogBrowser {
    /// Create a new instance of the application and start loading the list
    fn new(client: CatalogClient) -> (Self, Task<Message>) {
        let mut session = Session::new();
        let pending = session.sync();

        tracing::info!("🛍️  Catalog browser started against {}", client.base_url());

        let browser = CatalogBrowser { client, session };
        let task = browser.fetch(pending);
        (browser, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryResolved(ticket, result) => {
                self.session.query_resolved(ticket, result);
                Task::none()
            }
            Message::CreationSettled(ticket, result) => {
                self.session.creation_settled(ticket, result);
                Task::none()
            }
            Message::ProductSelected(id) => {
                let pending = self.session.select_product(id);
                self.fetch(pending)
            }
            Message::DetailDismissed => {
                let pending = self.session.clear_selection();
                self.fetch(pending)
            }
            Message::AddFormOpened => {
                let pending = self.session.open_add_form();
                self.fetch(pending)
            }
            Message::AddFormDismissed => {
                let pending = self.session.close_add_form();
                self.fetch(pending)
            }
            Message::FormEdited(field, value) => {
                self.session.edit_form(field, value);
                Task::none()
            }
            Message::FormSubmitted => match self.session.submit_form() {
                Some(create) => self.create(create),
                None => Task::none(),
            },
            Message::RetryList => {
                let pending = self.session.retry_list();
                self.fetch(vec![pending])
            }
        }
    }

    /// Run the fetches the session asked for
    fn fetch(&self, pending: Vec<PendingFetch>) -> Task<Message> {
        Task::batch(pending.into_iter().map(|PendingFetch { ticket, query }| {
            Task::perform(query.fetch(self.client.clone()), move |result| {
                Message::QueryResolved(ticket.clone(), result)
            })
        }))
    }

    /// Submit a validated product to the store
    fn create(&self, create: PendingCreate) -> Task<Message> {
        let PendingCreate { ticket, payload } = create;
        let client = self.client.clone();

        Task::perform(
            async move { client.create_product(&payload).await },
            move |result| Message::CreationSettled(ticket, result),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::render(ui::compose::compose(&self.session))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(tracing::Level::INFO);

    let config = CatalogConfig::default().with_timeout(REQUEST_TIMEOUT);
    let client = CatalogClient::new(&config)?;

    iced::application("Catalog", CatalogBrowser::update, CatalogBrowser::view)
        .theme(CatalogBrowser::theme)
        .centered()
        .run_with(move || CatalogBrowser::new(client))?;

    Ok(())
}
