//! Subcommand handlers
//!
//! Every command runs against one [`App`]: a `ResourceClient` holding the
//! session cookie for this process, and the controllers built on it.

mod dashboard;
mod documents;
mod notices;
mod session;

use std::sync::Arc;

use anyhow::{Context, bail};
use tracing::debug;

use facility_api::PageRequest;
use facility_client::ResourceClient;
use facility_console::pagination::to_page_index;
use facility_console::{SessionController, SubmitOutcome};

use crate::cli::{Command, PageArgs};
use crate::config::Configuration;

pub struct App {
    client: Arc<ResourceClient>,
    session: SessionController,
    configuration: Configuration,
}

impl App {
    pub fn connect(configuration: Configuration) -> anyhow::Result<Self> {
        let client = ResourceClient::new(configuration.http_config())
            .context("Failed to create API client")?;
        let client = Arc::new(client);
        Ok(Self {
            session: SessionController::new(client.clone()),
            client,
            configuration,
        })
    }

    pub async fn run(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Login => session::login(self).await,
            Command::Logout => session::logout(self).await,
            Command::Whoami => session::whoami(self).await,
            Command::Dashboard => dashboard::show(self).await,
            Command::Notices(command) => notices::run(self, command).await,
            Command::Documents(command) => documents::run(self, command).await,
        }
    }

    /// Sign in with the configured credentials, if any
    async fn sign_in(&self) -> anyhow::Result<()> {
        let Some((username, password)) = self.configuration.credentials() else {
            debug!("No credentials configured, continuing without sign-in");
            return Ok(());
        };
        match self.session.login(&username, &password).await {
            SubmitOutcome::Completed(_) => Ok(()),
            SubmitOutcome::Invalid(err) => bail!(err.message),
            SubmitOutcome::Failed(message) => bail!(message),
        }
    }

    fn page_request(&self, args: PageArgs) -> anyhow::Result<PageRequest> {
        let size = match args.size {
            Some(size) => size,
            None => self.configuration.page_size()?,
        };
        PageRequest::new(to_page_index(args.page), size).context("Page size must be positive")
    }
}
