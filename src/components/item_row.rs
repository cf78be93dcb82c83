use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, checkbox, container, row, text};
use cosmic::Element;

use gtodo::core::item::Item;

use crate::message::Message;

const COL_CHECK: f32 = 28.0;

/// Checkbox, label and remove button for one item.
pub fn item_row(item: &Item) -> Element<'static, Message> {
    let id = item.id();

    let check = container(
        checkbox("", item.is_done())
            .on_toggle(move |_| Message::ToggleItemDone(id)),
    )
    .width(Length::Fixed(COL_CHECK));

    let label = container(text::body(item.content().to_string())).width(Length::Fill);

    let remove = button::standard("Remove").on_press(Message::RemoveItem(id));

    row()
        .spacing(5)
        .padding(5)
        .align_y(Alignment::Center)
        .push(check)
        .push(label)
        .push(remove)
        .width(Length::Fill)
        .into()
}
