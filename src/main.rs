use anyhow::{Context, bail};

use agent_capabilities::capabilities::CapabilityConfiguration;
use agent_capabilities::config::CatalogConfig;

/// A toggle requested on the command line.
enum Toggle<'a> {
    Tool(&'a str),
    Category(&'a str),
}

fn parse_toggle(arg: &str) -> anyhow::Result<Toggle<'_>> {
    match arg.split_once(':') {
        Some(("tool", id)) if !id.is_empty() => Ok(Toggle::Tool(id)),
        Some(("category", id)) if !id.is_empty() => Ok(Toggle::Category(id)),
        _ => bail!("expected tool:<id> or category:<id>, got '{arg}'"),
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = CatalogConfig::from_env().context("reading catalog settings")?;
    let catalog = config.load_catalog().context("loading capability catalog")?;
    let mut model = CapabilityConfiguration::initialize(catalog);

    let args: Vec<String> = std::env::args().skip(1).collect();
    for arg in &args {
        match parse_toggle(arg)? {
            Toggle::Tool(id) => {
                model.toggle_tool(id)?;
            }
            Toggle::Category(id) => {
                model.toggle_category(id)?;
            }
        }
    }

    let count = model.enabled_count();
    tracing::info!(
        enabled = count.enabled,
        total = count.total,
        "Capability configuration ready"
    );

    let json = serde_json::to_string_pretty(&model.snapshot())?;
    println!("{json}");
    Ok(())
}
