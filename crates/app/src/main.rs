//! Chairside clinic portal - Main Entry Point
//!
//! Initializes logging and configuration, opens the portal (which hydrates
//! the session from the durable store), and reports where the session
//! stands.

use tracing::info;
use tracing_subscriber::EnvFilter;

use chairside::Portal;
use chairside_infrastructure::PortalConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = PortalConfig::from_env()?;
    let portal = Portal::open(config).await?;

    let session = portal.session();
    match session.user {
        Some(user) => info!(
            user = %user.name,
            roles = ?user.roles,
            "session restored; portal ready"
        ),
        None => info!("no persisted session; login required"),
    }

    Ok(())
}
