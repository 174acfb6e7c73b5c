use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glyphfall", version, about = "Generate digital-rain wallpapers")]
struct Cli {
    /// JSON render config (size, background, output dir, font candidates).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory; must already exist. Overrides the config.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Render only this wallpaper (repeatable).
    #[arg(long = "only", value_name = "SLUG")]
    only: Vec<String>,

    /// Print the wallpapers in batch order and exit.
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.list {
        for w in glyphfall::registry() {
            println!("{}\t{}", w.index(), w.slug());
        }
        return Ok(());
    }

    let mut cfg = match &cli.config {
        Some(path) => glyphfall::RenderConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => glyphfall::RenderConfig::default(),
    };
    if let Some(out_dir) = cli.out_dir {
        cfg.out_dir = out_dir;
    }

    let wallpapers = glyphfall::select(&cli.only)?;
    let written = glyphfall::run_batch(&cfg, &wallpapers, |path| {
        println!("Saved {}", path.display());
    })?;
    println!("Done! {} wallpapers written.", written.len());
    Ok(())
}
