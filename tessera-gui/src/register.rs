use std::sync::Arc;

use iced::{Length, Task};

use tessera_ui::{
    component::{
        button, form,
        text::{h2, p1_bold, P1_SIZE},
    },
    theme,
    widget::*,
};

use crate::services::account::{AccountError, AccountService, CreatedAccount, NewAccount};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Created(Result<CreatedAccount, AccountError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    FirstNameEdited(String),
    LastNameEdited(String),
    EmailEdited(String),
    Submit,
    Back,
}

pub struct RegisterScreen {
    accounts: Arc<dyn AccountService>,
    pub first_name: form::Value<String>,
    pub last_name: form::Value<String>,
    pub email: form::Value<String>,
    pub processing: bool,
}

impl RegisterScreen {
    pub fn new(accounts: Arc<dyn AccountService>) -> (Self, Task<Message>) {
        (
            Self {
                accounts,
                first_name: form::Value::default(),
                last_name: form::Value::default(),
                email: form::Value::default(),
                processing: false,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::FirstNameEdited(value)) => {
                self.first_name.valid = true;
                self.first_name.value = value;
            }
            Message::View(ViewMessage::LastNameEdited(value)) => {
                self.last_name.valid = true;
                self.last_name.value = value;
            }
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.email.valid = value.is_empty()
                    || email_address::EmailAddress::parse_with_options(
                        &value,
                        email_address::Options::default().with_required_tld(),
                    )
                    .is_ok();
                self.email.value = value;
            }
            Message::View(ViewMessage::Submit) => {
                if self.first_name.value.is_empty() {
                    self.first_name.valid = false;
                }
                if self.last_name.value.is_empty() {
                    self.last_name.valid = false;
                }
                if self.email.value.is_empty() {
                    self.email.valid = false;
                }
                if self.first_name.valid && self.last_name.valid && self.email.valid {
                    self.processing = true;
                    let accounts = self.accounts.clone();
                    let account = NewAccount {
                        first_name: self.first_name.value.clone(),
                        last_name: self.last_name.value.clone(),
                        email: self.email.value.clone(),
                    };
                    return Task::perform(
                        async move { accounts.create_account(account).await },
                        Message::Created,
                    );
                }
            }
            Message::Created(_res) => {
                // The success outcome is handled by the upper level wrapping
                // the screen. A failed submission leaves the fields as they
                // were so the user can retry.
                self.processing = false;
            }
            Message::View(ViewMessage::Back) => {
                // Navigation is handled by the upper level wrapping the screen.
            }
        };
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        Into::<Element<ViewMessage>>::into(
            Container::new(
                Container::new(
                    Column::new()
                        .spacing(20)
                        .push(h2("Form di registrazione"))
                        .push(button::link(None, "Torna indietro").on_press(ViewMessage::Back))
                        .push(
                            Column::new().spacing(5).push(p1_bold("Nome")).push(
                                form::Form::new(
                                    "Nome",
                                    &self.first_name,
                                    ViewMessage::FirstNameEdited,
                                )
                                .warning("Il nome è obbligatorio")
                                .size(P1_SIZE)
                                .padding(10),
                            ),
                        )
                        .push(
                            Column::new().spacing(5).push(p1_bold("Cognome")).push(
                                form::Form::new(
                                    "Cognome",
                                    &self.last_name,
                                    ViewMessage::LastNameEdited,
                                )
                                .warning("Il cognome è obbligatorio")
                                .size(P1_SIZE)
                                .padding(10),
                            ),
                        )
                        .push(
                            Column::new().spacing(5).push(p1_bold("Email")).push(
                                form::Form::new_trimmed(
                                    "Email",
                                    &self.email,
                                    ViewMessage::EmailEdited,
                                )
                                .warning("L'indirizzo email non è valido")
                                .size(P1_SIZE)
                                .padding(10),
                            ),
                        )
                        .push(
                            button::primary(None, "Registrati")
                                .width(Length::Fixed(200.0))
                                .on_press_maybe(if self.processing {
                                    None
                                } else {
                                    Some(ViewMessage::Submit)
                                }),
                        ),
                )
                .max_width(500)
                .padding(30)
                .style(theme::container::foreground),
            )
            .padding(50)
            .center_x(Length::Fill),
        )
        .map(Message::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mock::AccountServiceMock;
    use iced_runtime::task;

    type Expectation = (Option<NewAccount>, Result<CreatedAccount, AccountError>);

    fn new_screen(expectations: Vec<Expectation>) -> RegisterScreen {
        let (screen, _) = RegisterScreen::new(Arc::new(AccountServiceMock::new(expectations)));
        screen
    }

    fn edit(screen: &mut RegisterScreen, message: ViewMessage) {
        let _ = screen.update(Message::View(message));
    }

    #[test]
    fn fields_start_empty_and_without_feedback() {
        let screen = new_screen(Vec::new());
        assert_eq!(screen.first_name.value, "");
        assert_eq!(screen.last_name.value, "");
        assert_eq!(screen.email.value, "");
        assert!(screen.first_name.valid && screen.last_name.valid && screen.email.valid);
        assert!(!screen.processing);
    }

    #[test]
    fn email_validity_tracks_edits() {
        let mut screen = new_screen(Vec::new());
        edit(&mut screen, ViewMessage::EmailEdited("maria@example".to_string()));
        assert!(!screen.email.valid);
        edit(
            &mut screen,
            ViewMessage::EmailEdited("maria@example.com".to_string()),
        );
        assert!(screen.email.valid);
        // An emptied field shows no feedback until the next submit attempt.
        edit(&mut screen, ViewMessage::EmailEdited(String::new()));
        assert!(screen.email.valid);
    }

    #[test]
    fn submitting_empty_fields_is_rejected_locally() {
        let mut screen = new_screen(Vec::new());
        let task = screen.update(Message::View(ViewMessage::Submit));
        assert!(task::into_stream(task).is_none());
        assert!(!screen.first_name.valid);
        assert!(!screen.last_name.valid);
        assert!(!screen.email.valid);
        assert!(!screen.processing);
    }

    #[test]
    fn submitting_an_invalid_email_is_rejected_locally() {
        let mut screen = new_screen(Vec::new());
        edit(&mut screen, ViewMessage::FirstNameEdited("Maria".to_string()));
        edit(&mut screen, ViewMessage::LastNameEdited("Rossi".to_string()));
        edit(&mut screen, ViewMessage::EmailEdited("maria@example".to_string()));
        let task = screen.update(Message::View(ViewMessage::Submit));
        assert!(task::into_stream(task).is_none());
        assert!(!screen.email.valid);
        assert!(!screen.processing);
    }

    #[test]
    fn valid_submission_starts_processing() {
        let mut screen = new_screen(vec![(
            None,
            Ok(CreatedAccount {
                id: "1".to_string(),
                email: "maria@example.com".to_string(),
            }),
        )]);
        edit(&mut screen, ViewMessage::FirstNameEdited("Maria".to_string()));
        edit(&mut screen, ViewMessage::LastNameEdited("Rossi".to_string()));
        edit(
            &mut screen,
            ViewMessage::EmailEdited("maria@example.com".to_string()),
        );
        let task = screen.update(Message::View(ViewMessage::Submit));
        assert!(task::into_stream(task).is_some());
        assert!(screen.processing);
    }

    #[test]
    fn failure_outcome_clears_the_processing_flag() {
        let mut screen = new_screen(Vec::new());
        screen.processing = true;
        let _ = screen.update(Message::Created(Err(AccountError {
            http_status: Some(500),
            error: "Internal Server Error".to_string(),
        })));
        assert!(!screen.processing);
    }
}
