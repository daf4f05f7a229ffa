#![allow(non_snake_case)]

mod app;
mod cli;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Fragment the window opens on, set from the command line
static INITIAL_ROUTE: OnceLock<String> = OnceLock::new();

/// Get the initial fragment (empty means the default page)
pub fn initial_route() -> String {
    INITIAL_ROUTE.get().cloned().unwrap_or_default()
}

/// Kaixin Design Showcase - design tokens and component gallery
#[derive(Parser, Debug)]
#[command(name = "kaixin-showcase")]
#[command(about = "开心健康 设计规范组件库 - design system and component showcase")]
struct Args {
    /// Initial fragment, e.g. "#components/tree"
    #[arg(short, long, value_name = "FRAGMENT", default_value = "")]
    route: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Print every canonical route as JSON and exit
    #[arg(long)]
    list_routes: bool,

    /// Resolve a fragment the way the app would at load, print the result and exit
    #[arg(long, value_name = "FRAGMENT")]
    resolve: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.list_routes {
        println!("{}", cli::to_json(&cli::route_table())?);
        return Ok(());
    }

    if let Some(fragment) = args.resolve.as_deref() {
        println!("{}", cli::to_json(&cli::resolve(fragment))?);
        return Ok(());
    }

    let _ = INITIAL_ROUTE.set(args.route.clone());

    tracing::info!(
        route = %args.route,
        width = args.width,
        height = args.height,
        "Starting Kaixin Design Showcase"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("开心健康 设计规范组件库")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
