//! Entry point for the member profile viewer.
//!
//! This Dioxus desktop application fetches one member record from the
//! event-forms API and renders it as a profile dashboard.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use profile_api::ProfileClient;
use profile_viewer::components::App;
use profile_viewer::config;
use profile_viewer::state::AppState;

/// Viewer-specific CSS embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the initial member identifier.
static MEMBER_ID: OnceLock<String> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "profile-viewer")]
#[command(about = "Member profile viewer for the event-forms API")]
struct Args {
    /// Member identifier to display
    member_id: String,

    /// Base URL of the API host
    #[arg(long, default_value = config::DEFAULT_API_BASE)]
    api_base: String,

    /// Base URL for the shareable profile link (defaults to the API base)
    #[arg(long)]
    web_base: Option<String>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    // Parse command line arguments
    let args = Args::parse();

    tracing::info!("Starting profile viewer for member {}", args.member_id);

    // Store args in global state
    config::set_api_base(args.api_base);
    if let Some(web_base) = args.web_base {
        config::set_web_base(web_base);
    }
    MEMBER_ID.set(args.member_id).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Member Profile Viewer")
                        .with_inner_size(LogicalSize::new(1200, 860)),
                )
                .with_custom_head(format!(
                    "<style>{}</style>\n<style>{}</style>",
                    profile_ui::SHARED_CSS,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component that owns the state and the fetch task.
#[component]
fn RootApp() -> Element {
    let initial_id = MEMBER_ID.get().cloned().unwrap_or_default();
    let state = use_signal(|| AppState::new(initial_id));

    // Re-runs whenever the viewed identifier changes. The previous fetch
    // future is dropped at that point, so a stale response can never
    // overwrite a newer identifier's result.
    let member_id = use_memo(move || state.read().member_id.clone());
    let _loader = use_resource(move || {
        let mut state = state;
        let id = member_id();

        async move {
            state.write().begin_loading();
            let client = ProfileClient::new(config::api_base());
            let result = client.fetch_profile(&id).await;
            state.write().apply_result(result);
        }
    });

    rsx! {
        App { state }
    }
}
