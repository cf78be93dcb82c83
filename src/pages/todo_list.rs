use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, row, scrollable, text, text_input};
use cosmic::Element;

use gtodo::core::item_list::ItemList;

use crate::components::item_row::item_row;
use crate::message::Message;

pub fn todo_list_view(items: &ItemList, input_value: &str) -> Element<'static, Message> {
    let mut rows = column().spacing(4).width(Length::Fill);

    if items.is_empty() {
        rows = rows.push(
            container(text::body("Nothing to do"))
                .padding(32)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    } else {
        for item in items {
            rows = rows.push(item_row(item));
        }
    }

    let list_frame = column()
        .spacing(8)
        .push(text::title4("Todo list"))
        .push(
            container(scrollable(rows))
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let input = text_input::text_input("New todo", input_value.to_string())
        .on_input(Message::InputChanged)
        .on_submit(|_| Message::AddItem)
        .width(Length::Fill);

    let input_row = row()
        .spacing(5)
        .align_y(Alignment::Center)
        .push(input)
        .push(button::suggested("Add").on_press(Message::AddItem));

    column()
        .spacing(10)
        .padding(10)
        .push(container(list_frame).padding(10).height(Length::Fill))
        .push(input_row)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
