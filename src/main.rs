use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use simplelog::{Config, LevelFilter, WriteLogger};

mod app;
mod domain;
mod infra;
mod ui;
mod usecase;


const PAGE_SIZE: usize = 10;
const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/users";
const LOG_FILE_NAME: &str = "employee-directory.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: String,
    pub window_title: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            window_title: "Employee".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

fn main() {
    let config = AppConfig::default();
    if let Err(err) = init_logging(config.log_level) {
        eprintln!("logging disabled: {err:#}");
    }

    let mut desktop_config = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title(config.window_title.clone()),
    );
    match default_webview_data_dir() {
        Ok(dir) => desktop_config = desktop_config.with_data_directory(dir),
        Err(err) => log::warn!("using default webview data directory: {err:#}"),
    }

    log::info!("starting employee directory against {}", config.endpoint);
    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(config)
        .launch(app::App);
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "employee-directory")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

fn default_data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

fn default_log_path() -> Result<PathBuf> {
    Ok(default_data_dir()?.join(LOG_FILE_NAME))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(&default_data_dir()?)
}

fn create_log_file(log_path: &Path) -> Result<File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir: {}", parent.display()))?;
    }
    File::create(log_path)
        .with_context(|| format!("failed to create log file: {}", log_path.display()))
}

fn init_logging(level: LevelFilter) -> Result<()> {
    let log_file = create_log_file(&default_log_path()?)?;
    WriteLogger::init(level, Config::default(), log_file).context("logger already initialized")
}
