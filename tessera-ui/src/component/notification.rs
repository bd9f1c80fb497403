use iced::{Alignment, Length};

use crate::{
    component::{button, text},
    theme,
    widget::*,
};

pub fn toast_success<'a, T: 'a + Clone>(
    title: &'a str,
    body: &'a str,
    on_close: T,
) -> Container<'a, T> {
    toast(theme::notification::success, title, body, on_close)
}

pub fn toast_error<'a, T: 'a + Clone>(
    title: &'a str,
    body: &'a str,
    on_close: T,
) -> Container<'a, T> {
    toast(theme::notification::error, title, body, on_close)
}

fn toast<'a, T: 'a + Clone>(
    style: fn(&theme::Theme) -> iced::widget::container::Style,
    title: &'a str,
    body: &'a str,
    on_close: T,
) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(
                Column::new()
                    .push(text::p1_bold(title))
                    .push(text::p2_regular(body))
                    .spacing(5)
                    .width(Length::Fill),
            )
            .push(button::transparent(None, "✕").on_press(on_close))
            .spacing(10)
            .align_y(Alignment::Center),
    )
    .padding(15)
    .style(style)
    .width(Length::Fill)
}
