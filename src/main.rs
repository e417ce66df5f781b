//! I2P Browser entry point.
//!
//! Parses the command line, sets up logging and opens the browser window.
//! Without the `gui` feature there is no window to open and the binary exits.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "i2p-browser", version, about = "Minimal tabbed web browser")]
struct Cli {
    /// Address to open in the first tab instead of the homepage
    url: Option<String>,

    /// Settings file (default: platform config dir)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for the history and bookmarks database
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Window icon (overrides the settings file)
    #[arg(long, value_name = "FILE")]
    icon: Option<PathBuf>,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(feature = "gui")]
fn main() {
    let cli = Cli::parse();
    init_logging();

    let options = i2p_browser::ui::webview_app::LaunchOptions {
        url: cli.url,
        settings_path: cli.config,
        data_dir: cli.data_dir,
        icon: cli.icon,
    };
    if let Err(e) = i2p_browser::ui::webview_app::run(options) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    let cli = Cli::parse();
    init_logging();
    log::error!(
        "built without the `gui` feature; cannot open {}",
        cli.url.as_deref().unwrap_or("a window")
    );
    std::process::exit(2);
}
