use iced::{Alignment, Length, Task};

use tessera_ui::{
    component::{
        button,
        text::{h1, text},
    },
    theme,
    widget::*,
};

use crate::session::Session;

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    GoToRegister,
}

pub struct HomeScreen {
    session: Session,
}

impl HomeScreen {
    pub fn new(session: Session) -> (Self, Task<Message>) {
        (Self { session }, Task::none())
    }

    /// Replaces the session snapshot backing the view.
    pub fn refresh(&mut self, session: Session) {
        self.session = session;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        // GoToRegister is handled by the upper level wrapping the screen.
        match message {
            Message::View(ViewMessage::GoToRegister) => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let content = if let Some(user_id) = &self.session.user_id {
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(h1("Benvenuto"))
                .push(text(format!("Sei connesso come {}", user_id)).style(theme::text::secondary))
        } else {
            Column::new()
                .spacing(20)
                .align_x(Alignment::Center)
                .push(h1("Benvenuto"))
                .push(text("Nessun account configurato.").style(theme::text::secondary))
                .push(
                    button::secondary(None, "Crea un account")
                        .width(Length::Fixed(250.0))
                        .on_press(Message::View(ViewMessage::GoToRegister)),
                )
        };

        Container::new(content)
            .padding(50)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
