mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seo-kit")]
#[command(version, about = "SEO prerendering and sitemap toolkit for the studio site", long_about = None)]
struct Cli {
    /// Path to seo.toml (defaults to ./seo.toml, then the built-in site config)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Write a commented seo.toml template
    Init {
        /// Where to write the template
        #[arg(default_value = "seo.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate seo.toml and the studio registry
    Validate,

    /// Print the head tags for one studio page
    Head {
        /// Studio id (red, green, garden)
        studio: String,
    },

    /// Generate sitemap.xml into the output directory
    Sitemap {
        /// Output directory (defaults to prerender.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Prerender every configured route through a render service
    Prerender {
        /// Render service endpoint; GET {url}{route} returns the rendered page
        #[arg(long, default_value = "http://localhost:3000")]
        renderer_url: String,

        /// Per-route timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Output directory (defaults to prerender.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a build output directory and print the validation report
    Check {
        /// Output directory (defaults to prerender.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat environment limitations as errors
        #[arg(long)]
        strict: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prerender, write the sitemap and check the output in one run
    Build {
        #[arg(long, default_value = "http://localhost:3000")]
        renderer_url: String,

        #[arg(long, default_value = "30")]
        timeout: u64,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve the build output with SPA fallback
    Preview {
        /// Output directory (defaults to prerender.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Command::Init { path, force } => commands::init::run(path, force).await,
        Command::Validate => commands::validate::run(config).await,
        Command::Head { studio } => commands::head::run(config, studio).await,
        Command::Sitemap { output } => commands::sitemap::run(config, output).await,
        Command::Prerender {
            renderer_url,
            timeout,
            output,
        } => commands::prerender::run(config, renderer_url, timeout, output).await,
        Command::Check {
            output,
            strict,
            json,
        } => commands::check::run(config, output, strict, json).await,
        Command::Build {
            renderer_url,
            timeout,
            output,
        } => commands::build::run(config, renderer_url, timeout, output).await,
        Command::Preview { output, port } => commands::preview::run(config, output, port).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "seo-kit", &mut io::stdout());
            Ok(())
        }
    }
}
