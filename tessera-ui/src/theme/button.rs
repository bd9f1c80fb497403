use iced::{
    widget::button::{Catalog, Status, Style, StyleFn},
    Background, Border, Color,
};

use super::{palette::Button, Theme};

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
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => Style {
            background: Some(Background::Color(p.active.background)),
            text_color: p.active.text,
            border: if let Some(color) = p.active.border {
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
            ..Default::default()
        },
        Status::Pressed => {
            let palette = p.pressed.unwrap_or(p.active);
            Style {
                background: Some(Background::Color(palette.background)),
                text_color: palette.text,
                border: if let Some(color) = palette.border {
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
                ..Default::default()
            }
        }
        Status::Hovered => Style {
            background: Some(Background::Color(p.hovered.background)),
            text_color: p.hovered.text,
            border: if let Some(color) = p.hovered.border {
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
            ..Default::default()
        },
        Status::Disabled => {
            let palette = p.disabled.unwrap_or(p.active);
            Style {
                background: Some(Background::Color(palette.background)),
                text_color: Color {
                    a: 0.2,
                    ..palette.text
                },
                border: if let Some(color) = palette.border {
                    Border {
                        radius: 25.0.into(),
                        width: 1.0,
                        color: Color { a: 0.2, ..color },
                    }
                } else {
                    Border {
                        radius: 25.0.into(),
                        ..Default::default()
                    }
                },
                ..Default::default()
            }
        }
    }
}
