use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use unimap::{
    client::describe::{CachedDescriber, DescriptionService, DisabledDescriber, GeminiDescriber},
    loader, AppConfig, RestDataSource, UniversityId, ViewController, ViewEvent,
};

/// Command-line viewer for university inspection data
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration; defaults are used when the file is absent
    #[arg(short, long, value_name = "FILE", default_value = "unimap.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print inspection zones of the given employees as GeoJSON
    Zones {
        #[arg(short, long = "employee", value_name = "ID", required = true)]
        employees: Vec<String>,
    },
    /// Print university markers as GeoJSON
    Universities {
        #[arg(long, default_value = unimap::constants::ALL_CATEGORIES)]
        category: String,
    },
    /// Show which of the given employees inspected a university
    Status {
        university: String,
        #[arg(short, long = "employee", value_name = "ID")]
        employees: Vec<String>,
    },
    /// Print the generated description of a university
    Describe { university: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    unimap::init_logging("warn");

    let cli = Cli::parse();
    let config = if cli.config.exists() {
        AppConfig::load_from_file(&cli.config)
            .with_context(|| format!("Failed to load config: {:?}", cli.config))?
    } else {
        log::info!("{:?} not found, using default configuration", cli.config);
        AppConfig::default()
    };

    let source = Arc::new(RestDataSource::from_config(&config.api)?);
    let mut controller = ViewController::new(config.view.clone());
    loader::spawn_load(source, controller.sender()).await?;
    controller.process_events();

    for diagnostic in &controller.state().diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    match cli.command {
        Commands::Zones { employees } => {
            for id in employees {
                controller.apply(ViewEvent::select(id));
            }
            println!("{}", serde_json::to_string_pretty(&controller.zones_geojson())?);
        }
        Commands::Universities { category } => {
            controller.apply(ViewEvent::SetCategory(category));
            println!(
                "{}",
                serde_json::to_string_pretty(&controller.universities_geojson())?
            );
        }
        Commands::Status {
            university,
            employees,
        } => {
            for id in employees {
                controller.apply(ViewEvent::select(id));
            }
            let id = UniversityId::new(university);
            if !controller.apply(ViewEvent::OpenDrawer(id.clone())) {
                anyhow::bail!("unknown university {}", id);
            }
            let drawer = controller
                .state()
                .drawer
                .as_ref()
                .context("drawer did not open")?;
            println!("{} ({})", drawer.university.name, drawer.university.country);
            match &drawer.inspection_status {
                Some(facts) => {
                    for fact in facts {
                        println!("  inspected by {} on {}", fact.employee_name, fact.inspected_at);
                    }
                }
                None => println!("  not inspected"),
            }
        }
        Commands::Describe { university } => {
            let id = UniversityId::new(university);
            if !controller.apply(ViewEvent::OpenDrawer(id.clone())) {
                anyhow::bail!("unknown university {}", id);
            }

            let service: Arc<dyn DescriptionService> =
                match GeminiDescriber::from_config(&config.description, config.api.timeout())? {
                    Some(gemini) => Arc::new(CachedDescriber::new(
                        gemini,
                        config.description.cache_size,
                    )),
                    None => Arc::new(DisabledDescriber),
                };

            if let Some(poi) = controller.pending_description().cloned() {
                loader::spawn_description(
                    service,
                    poi,
                    config.description.fallback.clone(),
                    controller.sender(),
                )
                .await?;
                controller.process_events();
            }

            if let Some(text) = controller
                .state()
                .drawer
                .as_ref()
                .and_then(|d| d.description.as_deref())
            {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
