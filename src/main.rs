//! Semscore CLI entrypoint.
//!
//! Scores a candidate profile against a job requirement:
//!
//! ```text
//! semscore <candidate.json> <job.json> [weights.json]
//! ```
//!
//! Provider selection and credentials come from `SEMSCORE_*` environment
//! variables; the result is printed as JSON on stdout.

use std::path::Path;

use anyhow::Context;
use mimalloc::MiMalloc;

use semscore::{CandidateProfile, Config, JobRequirement, MatchScorer, Weights};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let (candidate_path, job_path, weights_path) = match args.as_slice() {
        [_, candidate, job] => (candidate, job, None),
        [_, candidate, job, weights] => (candidate, job, Some(weights)),
        _ => {
            eprintln!("usage: semscore <candidate.json> <job.json> [weights.json]");
            std::process::exit(2);
        }
    };

    let candidate: CandidateProfile = read_json(Path::new(candidate_path))?;
    let job: JobRequirement = read_json(Path::new(job_path))?;
    let weights: Weights = match weights_path {
        Some(path) => read_json(Path::new(path))?,
        None => Weights::default(),
    };

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        provider = ?config.provider,
        remote_enabled = config.remote_enabled(),
        "Semscore starting"
    );

    let scorer = MatchScorer::from_config(&config)?;
    let result = scorer.score(&candidate, &job, &weights).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
