use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use pintpass::app::{AppAction, AppReducer, AppState, Route};
use pintpass::config::Config;
use pintpass::logging::init_tracing;
use pintpass::main_tab::MainTabAction;
use pintpass::onboarding::OnboardingAction;
use pintpass::registration::{RegistrationAction, RegistrationState};
use pintpass::store::Store;

/// Headless walkthrough of the loyalty-app flow: onboarding, registration
/// with a simulated network delay, then the barcode on the main tab.
#[derive(Parser, Debug)]
#[command(name = "pintpass", version, about)]
struct Cli {
    /// Phone number to register with (non-digit characters are filtered).
    #[arg(long, default_value = "+7 (912) 345-67-89")]
    phone: String,

    /// Name to register with (falls back to the configured default).
    #[arg(long)]
    name: Option<String>,

    /// Path to a config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the simulated registration delay, in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(config.registration.submit_delay_ms));
    let name = cli.name.unwrap_or(config.profile.default_username);

    let initial_state = AppState {
        registration: RegistrationState::with_submit_delay(delay),
        ..AppState::default()
    };
    let mut store: Store<AppReducer> = Store::new(initial_state);

    // Observe state the way a view layer would: read-only snapshots.
    let mut states = store.subscribe();
    tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            info!(
                route = ?state.route,
                loading = state.registration.is_loading,
                "state changed"
            );
        }
    });

    store.send(AppAction::Onboarding(OnboardingAction::RegisterTapped));

    store.send(AppAction::Registration(
        RegistrationAction::PhoneNumberChanged(cli.phone),
    ));
    store.send(AppAction::Registration(RegistrationAction::NameChanged(
        name,
    )));
    store.send(AppAction::Registration(RegistrationAction::AgreementToggled));
    store.send(AppAction::Registration(
        RegistrationAction::RegisterButtonTapped,
    ));
    anyhow::ensure!(
        store.state().route == Route::MainTab,
        "registration rejected: the phone number needs at least 10 digits"
    );

    // Wait out the simulated network call.
    store.settle().await;

    store.send(AppAction::MainTab(MainTabAction::ShowBarcodeTapped));

    let state = store.state();
    info!(
        username = state.username.as_deref().unwrap_or(""),
        barcode = state.main_tab.barcode_value.as_deref().unwrap_or(""),
        "flow complete"
    );
    Ok(())
}
