pub mod client;

pub use client::{AccountClient, AccountError, CreatedAccount, NewAccount};

use async_trait::async_trait;

/// Backend creating user accounts.
///
/// Screens go through this trait so they can be driven against a scripted
/// service in tests.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn create_account(&self, account: NewAccount) -> Result<CreatedAccount, AccountError>;
}
