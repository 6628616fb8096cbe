/// Detail and add-product overlays
///
/// Both are modal cards layered over the grid with a dimmed backdrop.
/// Only their "X" control dismisses them.

use iced::widget::{button, center, column, container, horizontal_space, opaque, row, stack, text, text_input};
use iced::{Color, Element, Length};

use super::compose::{AddFormPanel, DetailPanel};
use crate::state::data::FormField;
use crate::Message;

/// Layer `content` over `base`, blocking interaction with `base`
pub fn modal<'a>(base: Element<'a, Message>, content: Element<'a, Message>) -> Element<'a, Message> {
    stack![
        base,
        opaque(center(opaque(content)).style(|_theme| container::Style {
            background: Some(Color { a: 0.5, ..Color::BLACK }.into()),
            ..container::Style::default()
        }))
    ]
    .into()
}

fn dismiss_bar<'a>(on_press: Message) -> Element<'a, Message> {
    row![horizontal_space(), button("X").on_press(on_press).style(button::text)].into()
}

/// Product detail card
///
/// Renders whatever the detail query currently holds; fields stay empty
/// while it is loading or if it failed.
pub fn detail_overlay<'a>(panel: &DetailPanel<'a>) -> Element<'a, Message> {
    let product = panel.product;
    let title = product.map(|p| p.title.as_str()).unwrap_or_default();
    let description = product.map(|p| p.description.as_str()).unwrap_or_default();
    let price = product.map(|p| p.price.to_string()).unwrap_or_default();
    let image = product.map(|p| p.image.as_str()).unwrap_or_default();

    let body = column![
        text(format!("#{}", panel.id)).size(12),
        text(title).size(30),
        text(description).size(18),
        text(price).size(24),
        text(image).size(12),
    ]
    .spacing(16);

    container(column![dismiss_bar(Message::DetailDismissed), body].spacing(8))
        .width(640.0)
        .padding(32)
        .style(container::rounded_box)
        .into()
}

/// Add-product form card
pub fn add_form_overlay<'a>(panel: &AddFormPanel<'a>) -> Element<'a, Message> {
    let mut fields = column![].spacing(12);

    for field in FormField::ALL {
        let input = text_input(field.label(), panel.form.value(field))
            .on_input(move |value| Message::FormEdited(field, value))
            .on_submit(Message::FormSubmitted)
            .padding(4);
        fields = fields.push(column![text(format!("{}:", field.label())), input].spacing(4));
    }

    if let Some(err) = panel.error {
        fields = fields.push(text(err.to_string()).style(text::danger));
    }

    let submit = button(container(text("Submit")).center_x(Length::Fill))
        .on_press(Message::FormSubmitted)
        .width(Length::Fill)
        .style(button::primary);

    container(column![dismiss_bar(Message::AddFormDismissed), fields, submit].spacing(16))
        .width(400.0)
        .padding(32)
        .style(container::rounded_box)
        .into()
}
