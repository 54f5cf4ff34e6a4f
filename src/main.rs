//! Holiday Manager - Desktop app for employee records and holiday requests.

use std::path::PathBuf;

use anyhow::{Context, anyhow, bail};
use clap::Parser;
use eframe::egui;
use holiday_manager as app;

use app::cli::{self, Cli};
use app::config::{AppConfig, ConfigLoadResult};
use app::db;
use app::logging;
use app::ui::{App, SetupApp, SetupWizard};

/// Application launch mode.
enum LaunchMode {
    /// Normal operation with valid config.
    Normal(AppConfig),
    /// Setup wizard for first run or invalid config.
    Setup(SetupWizard, Option<String>),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = cli.config_path();
    let loaded = AppConfig::try_load(&config_path);

    // Initialize logging
    let file_enabled = match &loaded {
        ConfigLoadResult::Loaded(config) => config.logging.file_enabled,
        _ => true,
    };
    let _log_guard = logging::init(file_enabled);

    tracing::info!("Holiday Manager starting...");
    if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
    }
    tracing::info!("Config path: {:?}", config_path);

    let rt = tokio::runtime::Runtime::new().context("creating tokio runtime")?;

    // Headless commands need a usable config
    if let Some(command) = cli.command {
        let config = match loaded {
            ConfigLoadResult::Loaded(config) => config,
            ConfigLoadResult::Missing => bail!(
                "no config file at {}, start the app without a command to run setup",
                config_path.display()
            ),
            ConfigLoadResult::Invalid(e) => {
                return Err(e).with_context(|| format!("loading {}", config_path.display()));
            }
        };
        return rt.block_on(cli::run(command, &config));
    }

    let launch_mode = match loaded {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            LaunchMode::Normal(config)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, starting setup wizard");
            LaunchMode::Setup(SetupWizard::new(), None)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid: {}", e);
            LaunchMode::Setup(SetupWizard::new(), Some(e.to_string()))
        }
    };

    let result = match launch_mode {
        LaunchMode::Normal(config) => match rt.block_on(open_database(&config)) {
            Ok(pool) => run_main_app(pool, config, config_path, rt),
            Err(e) => {
                tracing::error!("{:#}", e);
                let wizard = SetupWizard::from_config(config);
                run_setup_wizard(wizard, Some(format!("{:#}", e)), config_path, rt)
            }
        },
        LaunchMode::Setup(wizard, error) => run_setup_wizard(wizard, error, config_path, rt),
    };

    result.map_err(|e| anyhow!("window error: {e}"))
}

/// Connect, create missing tables, and log what was found.
async fn open_database(config: &AppConfig) -> anyhow::Result<sea_orm::DatabaseConnection> {
    let conn = db::connect(&config.database.connection_string())
        .await
        .with_context(|| format!("Failed to connect to database '{}'", config.database.name))?;
    db::test_connection(&conn).await.context("Database is not answering")?;
    db::ensure_schema(&conn).await.context("Failed to create tables")?;

    // Log connection info
    if let Ok(version) = db::get_version(&conn).await {
        tracing::info!("{}: {}", config.database.driver.label(), version);
    }

    if let Ok(counts) = db::get_table_counts(&conn).await {
        tracing::info!("Tables: {} employees, {} holidays", counts.employees, counts.holidays);
    }

    Ok(conn)
}

/// Register the icon font next to the default fonts.
fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

/// Run the setup wizard.
fn run_setup_wizard(
    wizard: SetupWizard,
    initial_error: Option<String>,
    config_path: PathBuf,
    rt: tokio::runtime::Runtime,
) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Holiday Manager - Setup")
            .with_inner_size([600.0, 500.0])
            .with_min_inner_size([500.0, 400.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Holiday Manager - Setup",
        options,
        Box::new(|_cc| Ok(Box::new(SetupApp::new(wizard, initial_error, config_path, rt)))),
    )
}

/// Run the main application.
fn run_main_app(
    pool: sea_orm::DatabaseConnection,
    config: AppConfig,
    config_path: PathBuf,
    rt: tokio::runtime::Runtime,
) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Holiday Manager")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Holiday Manager",
        options,
        Box::new(|cc| {
            install_fonts(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(pool, config, config_path, rt)))
        }),
    )
}
