//! `menu render` command implementation.

use std::path::PathBuf;

use clap::Args;
use menu::{ItemList, RenderContext, StaticRequest};
use menu_config::{CliSettings, Config};

use super::{defaults_from_config, load_definition};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Menu definition file (.json or .toml).
    file: PathBuf,

    /// Request URL used to mark active items.
    #[arg(short, long, default_value = "/")]
    url: String,

    /// Route parameter available to URL templates, as `name=value`.
    #[arg(short = 'p', long = "route-param", value_parser = parse_route_param)]
    route_params: Vec<(String, String)>,

    /// Path to configuration file (default: auto-discover menu.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum render depth, 0 for unlimited (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Class for active items (overrides config).
    #[arg(long)]
    active_class: Option<String>,

    /// Class for items with an active descendant (overrides config).
    #[arg(long)]
    active_child_class: Option<String>,

    /// Prefix for relative link URLs (overrides config).
    #[arg(long, env = "MENU_PREFIX")]
    prefix: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the definition cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            max_depth: self.max_depth,
            active_class: self.active_class,
            active_child_class: self.active_child_class,
            prefix: self.prefix,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.muted(&format!("Using config: {}", path.display()));
        }

        let mut list = load_definition(&self.file)?;
        let request = self
            .route_params
            .into_iter()
            .fold(StaticRequest::new(&self.url), |request, (name, value)| {
                request.with_route_param(name, value)
            });

        let html = render_list(&mut list, &request, &config);
        output.document(&html)?;
        Ok(())
    }
}

/// Render `list` for `request` with defaults taken from `config`.
fn render_list(list: &mut ItemList, request: &StaticRequest, config: &Config) -> String {
    let defaults = defaults_from_config(config);
    let ctx = RenderContext::new(request, &defaults);
    list.to_html(&ctx)
}

/// Parse a `name=value` route parameter.
fn parse_route_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_owned(), value.to_owned())),
        _ => Err(format!("expected name=value, got {raw:?}")),
    }
}
