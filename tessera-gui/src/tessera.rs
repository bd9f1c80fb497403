use std::sync::Arc;
use std::time::{Duration, Instant};

use iced::{Subscription, Task};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;

use tessera_ui::{component::notification, widget::*};

use crate::{
    config::Config,
    dir::TesseraDirectory,
    home::{self, HomeScreen},
    logger,
    register::{self, RegisterScreen},
    services::account::{AccountClient, AccountService},
    session::{self, Session},
    toast, VERSION,
};

pub enum State {
    /// The session is being hydrated, nothing is rendered yet.
    Loading,
    Register(Box<RegisterScreen>),
    Home(Box<HomeScreen>),
}

#[derive(Debug, Clone)]
pub enum Message {
    CtrlC,
    SessionLoaded(Session),
    SessionChanged(Session),
    Tick,
    ToastDismissed(usize),
    Register(Box<register::Message>),
    Home(Box<home::Message>),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

pub struct Tessera {
    state: State,
    toasts: toast::Stack,
    sessions: session::Store,
    accounts: Arc<dyn AccountService>,
}

impl Tessera {
    pub fn new(
        (datadir, config, log_level): (TesseraDirectory, Config, Option<LevelFilter>),
    ) -> (Tessera, Task<Message>) {
        let log_level =
            log_level.unwrap_or_else(|| config.log_level().unwrap_or(LevelFilter::INFO));
        if let Err(e) = logger::setup_logger(log_level, datadir.clone()) {
            eprintln!("Failed to setup logger: {}", e);
        }
        let accounts = Arc::new(AccountClient::new(config.api_url.clone()));
        Self::with_accounts(datadir, accounts)
    }

    pub fn with_accounts(
        datadir: TesseraDirectory,
        accounts: Arc<dyn AccountService>,
    ) -> (Tessera, Task<Message>) {
        (
            Self {
                state: State::Loading,
                toasts: toast::Stack::new(),
                sessions: session::Store::new(),
                accounts,
            },
            Task::batch(vec![
                Task::perform(session::load(datadir), Message::SessionLoaded),
                Task::perform(ctrl_c(), |_| Message::CtrlC),
            ]),
        )
    }

    pub fn title(&self) -> String {
        format!("Tessera v{}", VERSION)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn toasts(&self) -> &toast::Stack {
        &self.toasts
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CtrlC => iced::window::get_latest().and_then(iced::window::close),
            Message::Tick => {
                self.toasts.prune(Instant::now());
                Task::none()
            }
            Message::ToastDismissed(index) => {
                self.toasts.dismiss(index);
                Task::none()
            }
            Message::SessionLoaded(session) => {
                self.sessions.update(session.clone());
                if session.is_authenticated() {
                    info!("A session is already present, going to the home screen");
                    let (home, task) = HomeScreen::new(session);
                    self.state = State::Home(Box::new(home));
                    task.map(|msg| Message::Home(Box::new(msg)))
                } else {
                    let (register, task) = RegisterScreen::new(self.accounts.clone());
                    self.state = State::Register(Box::new(register));
                    task.map(|msg| Message::Register(Box::new(msg)))
                }
            }
            Message::SessionChanged(session) => {
                // The redirect guard runs again on every session change.
                match &mut self.state {
                    State::Register(_) if session.is_authenticated() => {
                        info!("A session appeared, leaving the registration screen");
                        let (home, task) = HomeScreen::new(session);
                        self.state = State::Home(Box::new(home));
                        task.map(|msg| Message::Home(Box::new(msg)))
                    }
                    State::Home(home) => {
                        home.refresh(session);
                        Task::none()
                    }
                    _ => Task::none(),
                }
            }
            Message::Register(msg) => match *msg {
                // Submission outcomes are handled whatever the current screen
                // is: a submission completing after the screen was left still
                // gets its toast.
                register::Message::Created(Ok(account)) => {
                    info!("Account {} registered", account.id);
                    self.toasts.push(toast::Toast::registration_success());
                    let (home, task) = HomeScreen::new(self.sessions.snapshot());
                    self.state = State::Home(Box::new(home));
                    task.map(|msg| Message::Home(Box::new(msg)))
                }
                register::Message::Created(Err(e)) => {
                    warn!("Account registration failed: {}", e);
                    self.toasts.push(toast::Toast::registration_failure());
                    if let State::Register(register) = &mut self.state {
                        register
                            .update(register::Message::Created(Err(e)))
                            .map(|msg| Message::Register(Box::new(msg)))
                    } else {
                        Task::none()
                    }
                }
                register::Message::View(register::ViewMessage::Back) => {
                    let (home, task) = HomeScreen::new(self.sessions.snapshot());
                    self.state = State::Home(Box::new(home));
                    task.map(|msg| Message::Home(Box::new(msg)))
                }
                msg => {
                    if let State::Register(register) = &mut self.state {
                        register
                            .update(msg)
                            .map(|msg| Message::Register(Box::new(msg)))
                    } else {
                        Task::none()
                    }
                }
            },
            Message::Home(msg) => match *msg {
                home::Message::View(home::ViewMessage::GoToRegister) => {
                    // Entering the form is guarded the same way as staying on
                    // it.
                    if self.sessions.snapshot().is_authenticated() {
                        Task::none()
                    } else {
                        let (register, task) = RegisterScreen::new(self.accounts.clone());
                        self.state = State::Register(Box::new(register));
                        task.map(|msg| Message::Register(Box::new(msg)))
                    }
                }
            },
        }
    }

    pub fn view(&self) -> Element<Message> {
        let screen: Element<Message> = match &self.state {
            State::Loading => Column::new().into(),
            State::Register(register) => register
                .view()
                .map(|msg| Message::Register(Box::new(msg))),
            State::Home(home) => home.view().map(|msg| Message::Home(Box::new(msg))),
        };

        let mut content = Column::new();
        for (i, toast) in self.toasts.iter().enumerate() {
            content = content.push(match toast.status {
                toast::Status::Success => notification::toast_success(
                    toast.title,
                    toast.body,
                    Message::ToastDismissed(i),
                ),
                toast::Status::Error => notification::toast_error(
                    toast.title,
                    toast.body,
                    Message::ToastDismissed(i),
                ),
            });
        }
        content.push(screen).into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![self.sessions.subscription().map(Message::SessionChanged)];
        if !self.toasts.is_empty() {
            subscriptions.push(iced::time::every(Duration::from_millis(250)).map(|_| Message::Tick));
        }
        Subscription::batch(subscriptions)
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}
