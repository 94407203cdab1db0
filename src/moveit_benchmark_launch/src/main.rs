//! moveit_benchmark_launch CLI

use clap::{Args, Parser, Subcommand, ValueEnum};
use moveit_benchmark_launch::{generate_launch_record, AmentIndex, BenchmarkLaunchConfig};
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "moveit_benchmark_launch")]
#[command(about = "Launch record generator for the MoveIt predefined-poses benchmark", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the launch description and write it as a record file
    Generate {
        #[command(flatten)]
        resolve: ResolveArgs,

        /// Record format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// Print the flattened node parameters
    ShowParams {
        #[command(flatten)]
        resolve: ResolveArgs,
    },
}

#[derive(Args)]
struct ResolveArgs {
    /// YAML file overriding the default launch configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Install prefix searched before AMENT_PREFIX_PATH (repeatable)
    #[arg(long = "prefix-path")]
    prefix_paths: Vec<PathBuf>,

    /// Command the benchmark executable is wrapped in
    #[arg(long, conflicts_with = "no_launch_prefix")]
    launch_prefix: Option<String>,

    /// Run the benchmark executable directly
    #[arg(long)]
    no_launch_prefix: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

impl ResolveArgs {
    fn load(&self) -> Result<(BenchmarkLaunchConfig, AmentIndex), Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                log::info!("Loading launch configuration: {}", path.display());
                BenchmarkLaunchConfig::from_yaml_file(path)?
            }
            None => BenchmarkLaunchConfig::default(),
        };
        self.apply_overrides(&mut config);

        let index = self.package_index();
        log::debug!("Package search prefixes: {:?}", index.prefixes());

        Ok((config, index))
    }

    /// Command-line flags take precedence over the configuration file.
    fn apply_overrides(&self, config: &mut BenchmarkLaunchConfig) {
        if self.no_launch_prefix {
            config.launch_prefix = None;
        } else if let Some(prefix) = &self.launch_prefix {
            config.launch_prefix = Some(prefix.clone());
        }
    }

    fn package_index(&self) -> AmentIndex {
        AmentIndex::from_env().with_prefixes_first(self.prefix_paths.iter().cloned())
    }
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Generate {
            resolve,
            format,
            output,
        } => generate(resolve, format, output),
        Commands::ShowParams { resolve } => show_params(resolve),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate(
    resolve: ResolveArgs,
    format: Format,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, index) = resolve.load()?;
    let record = generate_launch_record(&config, &index)?;

    let text = match format {
        Format::Json => record.to_json()?,
        Format::Yaml => record.to_yaml()?,
    };
    std::fs::write(&output, text)?;

    log::info!("Generated launch record: {}", output.display());
    for node in &record.node {
        log::info!(
            "  {} ({} inline params, {} param files)",
            node.name,
            node.params.len(),
            node.params_files.len()
        );
    }

    Ok(())
}

fn show_params(resolve: ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (config, index) = resolve.load()?;
    let record = generate_launch_record(&config, &index)?;

    for node in &record.node {
        for file in &node.params_files {
            println!("{}: --params-file {}", node.name, file);
        }
        for (key, value) in &node.params {
            println!("{}", param_line(&node.name, key, value));
        }
    }

    Ok(())
}

/// One listing line per parameter. Multi-line values such as robot
/// descriptions are cut after their first line.
fn param_line(node: &str, key: &str, value: &str) -> String {
    let mut lines = value.lines();
    let first_line = lines.next().unwrap_or_default();
    if lines.next().is_some() {
        format!("{}: {} = {} ...", node, key, first_line)
    } else {
        format!("{}: {} = {}", node, key, value)
    }
}
