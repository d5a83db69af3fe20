use clap::{Parser, Subcommand};
use sndr_core::{Params, ensure_finite};
use sndr_results::{RunManifest, RunStore, run_id_for};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sndr-cli")]
#[command(about = "S-NDR copper electrodeposition simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Parameter YAML file (defaults to the base parameter set)
        #[arg(long)]
        params: Option<PathBuf>,
        /// Suppress the per-sweep console table
        #[arg(long)]
        quiet: bool,
        /// Save the run (manifest + time-series CSV) under this directory
        #[arg(long)]
        save_dir: Option<PathBuf>,
    },
    /// Write the default parameter file
    InitParams {
        /// Output path
        #[arg(default_value = "params.yaml")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            params,
            quiet,
            save_dir,
        } => cmd_run(params.as_deref(), quiet, save_dir.as_deref()),
        Commands::InitParams { path } => cmd_init_params(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn load_params(path: Option<&Path>) -> Result<Params, String> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("reading {}: {e}", path.display()))?;
            serde_yaml::from_str(&text).map_err(|e| format!("parsing {}: {e}", path.display()))
        }
        None => Ok(Params::default()),
    }
}

fn cmd_run(params_path: Option<&Path>, quiet: bool, save_dir: Option<&Path>) -> Result<(), String> {
    let mut params = load_params(params_path)?;
    if quiet {
        params.output = false;
    }

    let state = sndr_sim::run(&params).map_err(|e| e.to_string())?;

    // The stepping loop never raises; degenerate parameter sets surface here.
    ensure_finite(state.theta.new, "final coverage").map_err(|e| e.to_string())?;
    ensure_finite(state.sup.interface_value(), "final interface sup").map_err(|e| e.to_string())?;
    ensure_finite(state.cupric.interface_value(), "final interface cupric")
        .map_err(|e| e.to_string())?;

    println!();
    println!("completed {} steps", state.steps);
    println!("final coverage: {:.6}", state.theta.new);
    println!("final interface sup: {:.6e}", state.sup.interface_value());
    println!(
        "final interface cupric: {:.6e}",
        state.cupric.interface_value()
    );

    if let Some(dir) = save_dir {
        let store = RunStore::new(dir.to_path_buf()).map_err(|e| e.to_string())?;
        let manifest = RunManifest {
            run_id: run_id_for(&params),
            timestamp: chrono::Utc::now().to_rfc3339(),
            params,
            steps: state.steps,
        };
        let run_dir = store
            .save_run(&manifest, &state.series)
            .map_err(|e| e.to_string())?;
        println!("saved run to {}", run_dir.display());
    }

    Ok(())
}

fn cmd_init_params(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("{} already exists", path.display()));
    }
    let yaml = serde_yaml::to_string(&Params::default()).map_err(|e| e.to_string())?;
    std::fs::write(path, yaml).map_err(|e| format!("writing {}: {e}", path.display()))?;
    println!("wrote default parameters to {}", path.display());
    Ok(())
}
