use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use thiserror::Error;
use tracing::info;

use vm_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use vm_common::matching::{ConfigError, MatchingConfig, MatchingEngine, OpportunityMatch};
use vm_common::recommend::attach_organization_names;
use vm_common::repository::{
    JsonFileStore, OpportunityRepository, StoreError, VolunteerRepository,
};
use vm_common::semantic::{shared_embedder, SemanticScorer};

#[derive(Debug, Parser)]
#[command(name = "vm-cli", about = "Rank volunteer/opportunity matches from a flat-file store")]
struct Cli {
    /// Path to the JSON data file (volunteers / opportunities / organizations)
    #[arg(long, env = "VM_DATA_FILE", default_value = "data/records.json")]
    data: PathBuf,

    /// Rank opportunities for this volunteer
    #[arg(long)]
    volunteer_id: Option<i64>,

    /// Rank volunteers for this opportunity (symmetric view)
    #[arg(long, conflicts_with = "volunteer_id")]
    opportunity_id: Option<i64>,

    /// Minimum final score to keep
    #[arg(long, default_value_t = 0.0)]
    min_score: f64,

    /// Keep only the top N results
    #[arg(long)]
    top: Option<usize>,

    /// Attach the embedding-based semantic scorer
    #[arg(long, env = "VM_SEMANTIC_ENABLED", default_value_t = false)]
    semantic: bool,

    /// Emit JSON instead of the text listing
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to serialize results: {0}")]
    Output(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
    #[error("not found: {0}")]
    NotFound(String),
}

fn build_engine(semantic: bool) -> Result<MatchingEngine, ConfigError> {
    if semantic {
        MatchingEngine::with_semantic(
            MatchingConfig::semantic(),
            SemanticScorer::new(shared_embedder()),
        )
    } else {
        MatchingEngine::new(MatchingConfig::default())
    }
}

fn print_opportunity_matches(matches: &[OpportunityMatch]) {
    for (rank, item) in matches.iter().enumerate() {
        let title = item.opportunity.title.as_deref().unwrap_or("(untitled)");
        let organization = item
            .opportunity
            .organization_name
            .as_deref()
            .unwrap_or("-");
        println!(
            "{:>3}. {} [{}] score={} quality={} (skills={} interests={} availability={} location={})",
            rank + 1,
            title,
            organization,
            item.score,
            item.quality,
            item.details.skill_score,
            item.details.interest_score,
            item.details.availability_score,
            item.details.location_score,
        );
        if !item.details.missing_skills.is_empty() {
            println!("     missing skills: {}", item.details.missing_skills.join(", "));
        }
    }
}

fn run() -> Result<(), CliError> {
    dotenv().ok();
    init_tracing_subscriber("vm-cli");
    install_tracing_panic_hook("vm-cli");

    let cli = Cli::parse();
    let store = JsonFileStore::open(&cli.data)?;
    let engine = build_engine(cli.semantic)?;

    match (cli.volunteer_id, cli.opportunity_id) {
        (Some(volunteer_id), None) => {
            let volunteer = VolunteerRepository::get_by_id(&store, volunteer_id)?
                .ok_or_else(|| CliError::NotFound(format!("volunteer {volunteer_id}")))?;
            let opportunities = OpportunityRepository::list_all(&store)?;

            let mut matches =
                engine.rank_opportunities_for_volunteer(&volunteer, &opportunities, cli.min_score);
            attach_organization_names(&mut matches, &store);
            if let Some(top) = cli.top {
                matches.truncate(top);
            }

            info!(
                volunteer_id,
                candidates = opportunities.len(),
                kept = matches.len(),
                "ranked opportunities"
            );

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                print_opportunity_matches(&matches);
            }
        }
        (None, Some(opportunity_id)) => {
            let opportunity = OpportunityRepository::get_by_id(&store, opportunity_id)?
                .ok_or_else(|| CliError::NotFound(format!("opportunity {opportunity_id}")))?;
            let volunteers = VolunteerRepository::list_all(&store)?;

            let mut matches =
                engine.rank_volunteers_for_opportunity(&opportunity, &volunteers, cli.min_score);
            if let Some(top) = cli.top {
                matches.truncate(top);
            }

            info!(
                opportunity_id,
                candidates = volunteers.len(),
                kept = matches.len(),
                "ranked volunteers"
            );

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                for (rank, item) in matches.iter().enumerate() {
                    let name = item.volunteer.name.as_deref().unwrap_or("(unnamed)");
                    println!(
                        "{:>3}. {} score={} quality={} (skills={} interests={} availability={} location={})",
                        rank + 1,
                        name,
                        item.score,
                        item.quality,
                        item.details.skill_score,
                        item.details.interest_score,
                        item.details.availability_score,
                        item.details.location_score,
                    );
                }
            }
        }
        _ => {
            return Err(CliError::Usage(
                "provide either --volunteer-id or --opportunity-id".into(),
            ));
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        tracing::error!(error = %err, "vm-cli failed");
        eprintln!("vm-cli: {err}");
        std::process::exit(1);
    }
}
