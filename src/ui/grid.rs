/// Product grid and its loading skeleton
use iced::widget::{button, column, container, text, Space};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_aw::Wrap;

use super::compose::Cell;
use crate::Message;

/// Size of a grid cell (square)
const CELL_SIZE: f32 = 200.0;
const GRID_SPACING: f32 = 16.0;

/// One clickable cell per product, in list order
pub fn product_grid<'a>(cells: &[Cell<'a>]) -> Element<'a, Message> {
    let elements = cells.iter().map(product_cell).collect();

    Wrap::with_elements(elements)
        .spacing(GRID_SPACING)
        .line_spacing(GRID_SPACING)
        .into()
}

fn product_cell<'a>(cell: &Cell<'a>) -> Element<'a, Message> {
    let content = column![
        text(cell.title).size(18),
        text(cell.price.clone()).size(14),
        text(cell.image).size(10),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    button(
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .on_press(Message::ProductSelected(cell.id))
    .width(CELL_SIZE)
    .height(CELL_SIZE)
    .style(button::secondary)
    .into()
}

/// Grey placeholders shown until the list arrives
pub fn skeleton_grid<'a>(count: usize) -> Element<'a, Message> {
    let elements = (0..count).map(|_| skeleton_cell()).collect();

    Wrap::with_elements(elements)
        .spacing(GRID_SPACING)
        .line_spacing(GRID_SPACING)
        .into()
}

fn skeleton_cell<'a>() -> Element<'a, Message> {
    // Image block, then title and price bars
    let content = column![
        placeholder(120.0, 120.0),
        placeholder(80.0, 14.0),
        placeholder(80.0, 14.0),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(content)
        .width(CELL_SIZE)
        .height(CELL_SIZE)
        .center_x(CELL_SIZE)
        .center_y(CELL_SIZE)
        .style(container::rounded_box)
        .into()
}

fn placeholder<'a>(width: f32, height: f32) -> Element<'a, Message> {
    container(Space::new(width, height))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
