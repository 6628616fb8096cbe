/// User interface module
///
/// - `compose.rs` decides what the screen shows (pure, testable)
/// - `grid.rs` renders product cells and loading skeletons
/// - `overlay.rs` renders the detail and add-product overlays

pub mod compose;
pub mod grid;
pub mod overlay;

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::Message;
use compose::Screen;

/// Turn a composed screen into widgets
pub fn render(screen: Screen<'_>) -> Element<'_, Message> {
    match screen {
        Screen::Error { message } => error_view(message),
        Screen::Loading { placeholders } => page(grid::skeleton_grid(placeholders)),
        Screen::Ready {
            cells,
            detail,
            add_form,
        } => {
            let header = row![
                horizontal_space(),
                button("Add Product")
                    .on_press(Message::AddFormOpened)
                    .padding([8, 16])
                    .style(button::primary),
            ];

            let mut view = page(column![header, grid::product_grid(&cells)].spacing(16).into());

            if let Some(panel) = detail {
                view = overlay::modal(view, overlay::detail_overlay(&panel));
            }
            if let Some(panel) = add_form {
                view = overlay::modal(view, overlay::add_form_overlay(&panel));
            }

            view
        }
    }
}

fn page(content: Element<'_, Message>) -> Element<'_, Message> {
    scrollable(container(content).padding(32).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn error_view<'a>(message: String) -> Element<'a, Message> {
    let content = column![
        text("Something went wrong").size(32),
        text(message).size(14),
        button("Retry").on_press(Message::RetryList).padding(10),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
