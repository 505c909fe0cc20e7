use clap::Parser;
use staff_bros_teams::{
    build_roster, Catalog, CatalogResult, RosterEntry, SeededRng, SpeciesTable, TeamOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Generate a random Staff Bros team.
#[derive(Debug, Parser)]
#[command(name = "staff-bros-teams", version)]
struct Cli {
    /// Seed for a reproducible team. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Staff set catalog (RON). Defaults to the bundled catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Species typing table (RON). Defaults to the bundled table.
    #[arg(long)]
    species: Option<PathBuf>,

    /// Team options (RON). Flags below override values from this file.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Number of members to draw.
    #[arg(long)]
    size: Option<usize>,

    /// Force a set into the team at the given slot, as SLOT:NAME.
    #[arg(long, value_parser = parse_forced)]
    force: Option<(usize, String)>,

    /// Remove a set from the pool. May be repeated.
    #[arg(long)]
    exclude: Vec<String>,

    /// Print the team as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_forced(value: &str) -> Result<(usize, String), String> {
    let (slot, name) = value
        .split_once(':')
        .ok_or_else(|| format!("expected SLOT:NAME, got '{}'", value))?;
    let slot = slot
        .parse()
        .map_err(|e| format!("invalid slot '{}': {}", slot, e))?;
    Ok((slot, name.to_string()))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CatalogResult<()> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::bundled()?,
    };
    let species = match &cli.species {
        Some(path) => SpeciesTable::load(path)?,
        None => SpeciesTable::bundled()?,
    };
    debug!(sets = catalog.len(), species = species.len(), "content loaded");

    let mut options = match &cli.options {
        Some(path) => TeamOptions::load(path)?,
        None => TeamOptions::default(),
    };
    if let Some(size) = cli.size {
        options.team_size = size;
    }
    if let Some((slot, name)) = cli.force {
        options = options.force(slot, name);
    }
    options.excluded.extend(cli.exclude);

    let mut rng = match cli.seed {
        Some(seed) => SeededRng::from_seed(seed),
        None => SeededRng::from_entropy(),
    };
    let team = build_roster(&catalog, &species, &options, &mut rng);

    if cli.json {
        match serde_json::to_string_pretty(&team) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing team: {}", e),
        }
    } else {
        print_team(&team);
    }
    Ok(())
}

fn print_team(team: &[RosterEntry]) {
    for (i, member) in team.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", member);
    }
}
