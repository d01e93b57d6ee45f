use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use modelboard::chart::{self, ChartContainer, ImportancePayload};
use modelboard::config::{AppConfig, DashboardConfig};
use modelboard::model::ModelArtifact;
use modelboard::{common, data_loader, export, generate_commands, server};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the prediction form and importance dashboard
    Serve {
        #[clap(short, long, default_value = "modelboard.yaml")]
        config: String,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        model: Option<String>,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    /// Render the dashboard (or just the chart script) to a file
    Render {
        /// Model artifact to take importances from
        #[clap(short, long)]
        model: Option<String>,
        /// label,value CSV to take importances from instead
        #[clap(short, long)]
        importances: Option<String>,
        #[clap(short, long, default_value = "dashboard.html")]
        out: String,
        #[clap(long)]
        top_n: Option<usize>,
        #[clap(long)]
        title: Option<String>,
        /// Emit only the chart initializer script
        #[clap(long)]
        script_only: bool,
    },
    Init {
        #[clap(short, long, default_value = "modelboard.yaml")]
        config: String,
    },
    Generate {
        #[clap(subcommand)]
        command: GenerateCommands,
    },
}

#[derive(Subcommand, Debug)]
enum GenerateCommands {
    Template { name: String },
    Sample { dir: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            config,
            port,
            model,
            cors_origin,
        } => {
            let mut config = load_config(&config)?;
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(model) = model {
                config.model.path = model;
            }
            if let Some(cors_origin) = cors_origin {
                config.server.cors_origin = Some(cors_origin);
            }
            info!("Starting server on port {}", config.server.port);
            server::start_server(config).await?;
        }
        Commands::Render {
            model,
            importances,
            out,
            top_n,
            title,
            script_only,
        } => {
            render_to_file(model, importances, out, top_n, title, script_only)?;
        }
        Commands::Init { config } => {
            info!("Initializing config: {}", config);
            let serialized = serde_yaml::to_string(&AppConfig::default())?;
            common::write_string_to_file(&config, &serialized)?;
        }
        Commands::Generate { command } => match command {
            GenerateCommands::Template { name } => {
                generate_commands::generate_template(name);
            }
            GenerateCommands::Sample { dir } => {
                generate_commands::generate_sample(dir);
            }
        },
    }

    Ok(())
}

fn load_config(path: &str) -> Result<AppConfig> {
    if Path::new(path).exists() {
        info!("Loading config: {}", path);
        Ok(AppConfig::load(Path::new(path))?)
    } else {
        info!("Config {} not found, using defaults", path);
        Ok(AppConfig::default())
    }
}

fn render_to_file(
    model: Option<String>,
    importances: Option<String>,
    out: String,
    top_n: Option<usize>,
    title: Option<String>,
    script_only: bool,
) -> Result<()> {
    let mut dashboard = DashboardConfig::default();
    if let Some(top_n) = top_n {
        dashboard.top_n = top_n;
    }
    if let Some(title) = title {
        dashboard.title = title;
    }

    let data = match (model, importances) {
        (Some(path), _) => {
            let artifact = ModelArtifact::load(Path::new(&path))?;
            artifact.top_importances(dashboard.top_n)
        }
        (None, Some(path)) => Some(data_loader::load_importances_csv(Path::new(&path))?),
        (None, None) => anyhow::bail!("provide either --model or --importances"),
    };
    let payload = data.map(ImportancePayload::from);

    let container = ChartContainer::new(&dashboard.container_id);
    let spec = chart::initialize(Some(&container), payload.as_ref());

    let output = if script_only {
        match &spec {
            Some(spec) => export::to_chart_script::render(&container, spec)?,
            None => {
                info!("No importance data, nothing to render");
                return Ok(());
            }
        }
    } else {
        export::to_dashboard::render(&dashboard, spec.as_ref())?
    };

    common::write_string_to_file(&out, &output)?;
    info!("Wrote {}", out);
    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .without_time()
        .init();
}
