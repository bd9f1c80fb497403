use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::services::account::{AccountError, AccountService, CreatedAccount, NewAccount};

/// A scripted [`AccountService`] replaying the given responses in order.
///
/// When a request is paired with an expected [`NewAccount`], the incoming
/// request is checked against it.
pub struct AccountServiceMock {
    expectations: Mutex<VecDeque<(Option<NewAccount>, Result<CreatedAccount, AccountError>)>>,
}

impl AccountServiceMock {
    pub fn new(
        expectations: Vec<(Option<NewAccount>, Result<CreatedAccount, AccountError>)>,
    ) -> Self {
        Self {
            expectations: Mutex::new(expectations.into_iter().collect()),
        }
    }
}

#[async_trait]
impl AccountService for AccountServiceMock {
    async fn create_account(&self, account: NewAccount) -> Result<CreatedAccount, AccountError> {
        let (expected, response) = self
            .expectations
            .lock()
            .expect("Failed to take the expectations lock")
            .pop_front()
            .expect("Mock service must have all requests scripted in the right order");
        if let Some(expected) = expected {
            assert_eq!(expected, account);
        }
        response
    }
}
