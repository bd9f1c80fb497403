use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette::TextInput, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.primary, status)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.invalid, status)
}

fn text_input(t: &TextInput, status: Status) -> Style {
    match status {
        Status::Active | Status::Hovered | Status::Focused { .. } => Style {
            background: Background::Color(t.active.background),
            border: if let Some(color) = t.active.border {
                Border {
                    radius: 25.0.into(),
                    width: 1.0,
                    color,
                }
            } else {
                Border {
                    radius: 25.0.into(),
                    ..Default::default()
                }
            },
            icon: t.active.icon,
            placeholder: t.active.placeholder,
            value: t.active.value,
            selection: t.active.selection,
        },
        Status::Disabled => Style {
            background: Background::Color(t.disabled.background),
            border: if let Some(color) = t.disabled.border {
                Border {
                    radius: 25.0.into(),
                    width: 1.0,
                    color,
                }
            } else {
                Border {
                    radius: 25.0.into(),
                    ..Default::default()
                }
            },
            icon: t.disabled.icon,
            placeholder: t.disabled.placeholder,
            value: t.disabled.value,
            selection: t.disabled.selection,
        },
    }
}
