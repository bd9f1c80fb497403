use iced::{Alignment, Length};

use crate::{component::text::text, font, theme, widget::*};

pub fn primary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(icon, t)).style(theme::button::primary)
}

pub fn secondary<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(icon, t)).style(theme::button::secondary)
}

pub fn transparent<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content(icon, t)).style(theme::button::transparent)
}

pub fn link<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Button<'a, T> {
    Button::new(content_left_aligned(icon, t)).style(theme::button::link)
}

fn content<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Container<'a, T> {
    match icon {
        None => Container::new(text(t).font(font::MEDIUM))
            .center_x(Length::Fill)
            .padding(5),
        Some(icon) => Container::new(
            Row::new()
                .spacing(10)
                .push(icon)
                .push(text(t).font(font::MEDIUM))
                .align_y(Alignment::Center),
        )
        .center_x(Length::Fill)
        .padding(5),
    }
}

fn content_left_aligned<'a, T: 'a>(icon: Option<Text<'a>>, t: &'static str) -> Container<'a, T> {
    match icon {
        None => Container::new(text(t).font(font::MEDIUM)).padding(5),
        Some(icon) => Container::new(
            Row::new()
                .spacing(10)
                .push(icon)
                .push(text(t).font(font::MEDIUM))
                .align_y(Alignment::Center),
        )
        .padding(5),
    }
}
