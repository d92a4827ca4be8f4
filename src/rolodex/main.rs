use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::RolodexApi;
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::logging::init_logging;
use rolodex::store::fs::JsonStore;
use rolodex::web;
use std::io;
use std::path::PathBuf;

mod args;
mod menu;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RolodexApi<JsonStore>,
    config: RolodexConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Serve { addr }) => handle_serve(ctx, addr),
        Some(Commands::Menu) | None => handle_menu(ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    // --file pins an exact book; otherwise the data directory comes from
    // ROLODEX_DATA_DIR or the platform data dir, and config.json may rename
    // the book file inside it.
    let (data_dir, file_override) = match &cli.file {
        Some(file) => {
            let dir = file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| {
                    RolodexError::Store(format!("Invalid contacts file path: {}", file.display()))
                })?;
            (dir, Some(name))
        }
        None => (default_data_dir()?, None),
    };

    let config = RolodexConfig::load(&data_dir)?;
    let data_file = file_override.unwrap_or_else(|| config.data_file.clone());
    let store = JsonStore::new(data_dir).with_data_file(&data_file);
    let api = RolodexApi::new(store);

    Ok(AppContext { api, config })
}

fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("ROLODEX_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex")
        .ok_or_else(|| RolodexError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_menu(mut ctx: AppContext) -> Result<()> {
    let stdin = io::stdin();
    menu::run(&mut ctx.api, stdin.lock())
}

fn handle_serve(ctx: AppContext, addr: Option<String>) -> Result<()> {
    let addr = addr.unwrap_or_else(|| ctx.config.listen_addr.clone());
    web::serve(ctx.api, &addr)
}
