use portfolio_admin::AppState;
use portfolio_admin::settings::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::new()?;
    tracing::info!("{} starting in {} mode", config.name, config.env);

    let state = AppState::new(&config);

    let site = state.site.get();
    tracing::info!(
        "Store at {} holds {} projects and {} skills (admin gate {})",
        config.store_path.display(),
        state.projects.list().len(),
        state.skills.list().len(),
        if site.admin_password.is_some() { "locked" } else { "open" },
    );

    Ok(())
}
