//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, so dispatch
//! is resolved at compile time.

use std::time::Duration;
use validarfc_config::DatabaseConfig;
use validarfc_storage::StoreOptions;

mod check;
mod info;
mod init;
mod serve;
mod version;

pub use check::{CheckInput, CheckStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Pool settings derived from the `database` config section.
fn store_options(database: &DatabaseConfig) -> StoreOptions {
    StoreOptions {
        max_connections: database.max_connections,
        connect_timeout: Duration::from_secs(database.connect_timeout_secs),
        lazy: true,
    }
}
