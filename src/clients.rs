use std::sync::OnceLock;

use color_eyre::eyre::{eyre, Result};

pub static REQWEST: OnceLock<reqwest::Client> = OnceLock::new();

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the process-wide outbound client. No timeout is set: a stalled provider holds only its
/// own request.
pub fn init_reqwest_client() -> Result<()> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    REQWEST
        .set(client)
        .map_err(|_| eyre!("reqwest client already initialised"))
}

pub fn get_reqwest_client() -> Result<&'static reqwest::Client> {
    REQWEST.get().ok_or(eyre!("Failed to get reqwest client"))
}
