use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};

use career_match::config::Settings;
use career_match::intake::{self, Assessment};
use career_match::results::{self, Recorded, ResultEntry};
use career_match::{logging, report, scoring, Catalog};

#[derive(Parser)]
#[command(name = "career-match")]
#[command(about = "Rank career archetypes against a self-assessed profile", long_about = None)]
struct Cli {
    /// Custom catalog JSON (overrides CAREER_MATCH_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Result log CSV (overrides CAREER_MATCH_RESULTS)
    #[arg(long, global = true)]
    results: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the careers in the catalog
    Catalog,
    /// Show the description of one career
    Describe {
        #[arg(long)]
        career: String,
    },
    /// Score a profile and print the best matches
    Recommend {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        top_n: Option<usize>,
        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,
        /// Record the outcome in the result log
        #[arg(long)]
        save: bool,
    },
    /// Score every row of a profile CSV and record the outcomes
    Batch {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long)]
        top_n: Option<usize>,
    },
    /// Write a markdown report for a profile
    Report {
        #[arg(long)]
        profile: PathBuf,
        #[arg(long)]
        top_n: Option<usize>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();
    let mut settings = Settings::from_env()?;
    if let Some(path) = cli.catalog {
        settings.catalog_path = Some(path);
    }
    if let Some(path) = cli.results {
        settings.results_path = path;
    }

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::from_json_path(path)?,
        None => Catalog::builtin(),
    };

    match cli.command {
        Commands::Catalog => {
            if catalog.is_empty() {
                println!("The catalog is empty.");
                return Ok(());
            }
            for career in catalog.careers() {
                println!(
                    "- {} ({}) coding >= {}, logical >= {}, academics >= {}%",
                    career.name,
                    if career.tech_oriented { "Technical" } else { "Management" },
                    career.min_coding,
                    career.min_logical,
                    career.min_academic
                );
            }
        }
        Commands::Describe { career } => {
            let description = catalog
                .description(&career)
                .with_context(|| format!("no career named {career:?} in the catalog"))?;
            println!("{description}");
        }
        Commands::Recommend {
            profile,
            top_n,
            json,
            save,
        } => {
            let assessment = intake::load_json(&profile)
                .with_context(|| format!("invalid profile {}", profile.display()))?;
            let ranked = scoring::recommend(
                &assessment.profile,
                catalog.careers(),
                top_n.unwrap_or(settings.top_n),
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else if ranked.is_empty() {
                println!("No careers available in the catalog.");
            } else {
                println!("Top matches for {}:", assessment.participant.name);
                for (position, scored) in ranked.iter().enumerate() {
                    println!("{}. {} score {:.2}", position + 1, scored.career_name, scored.score);
                }
            }

            if save {
                let entry = ResultEntry::new(
                    &assessment.participant,
                    &assessment.profile,
                    &ranked,
                    Utc::now(),
                );
                let outcome = results::record(&settings.results_path, entry)?;
                println!("{} {}.", describe_outcome(outcome), settings.results_path.display());
            }
        }
        Commands::Batch { csv, top_n } => {
            let rows = intake::load_csv(&csv)?;
            let top_n = top_n.unwrap_or(settings.top_n);
            let mut entries = Vec::new();
            let mut skipped = 0usize;

            for (index, row) in rows.into_iter().enumerate() {
                let Assessment {
                    participant,
                    profile,
                } = match row {
                    Ok(assessment) => assessment,
                    Err(err) => {
                        tracing::warn!(row = index + 1, error = %err, "skipping invalid profile row");
                        skipped += 1;
                        continue;
                    }
                };

                let ranked = scoring::recommend(&profile, catalog.careers(), top_n);
                match ranked.first() {
                    Some(top) => println!(
                        "- {} -> {} score {:.2}",
                        participant.name, top.career_name, top.score
                    ),
                    None => println!("- {} -> no careers available", participant.name),
                }
                entries.push(ResultEntry::new(&participant, &profile, &ranked, Utc::now()));
            }

            let scored = entries.len();
            if scored > 0 {
                results::record_all(&settings.results_path, entries)?;
            }
            println!(
                "Scored {scored} profiles from {} ({skipped} skipped); results in {}.",
                csv.display(),
                settings.results_path.display()
            );
        }
        Commands::Report {
            profile,
            top_n,
            out,
        } => {
            let assessment = intake::load_json(&profile)
                .with_context(|| format!("invalid profile {}", profile.display()))?;
            let ranked = scoring::recommend(
                &assessment.profile,
                catalog.careers(),
                top_n.unwrap_or(settings.top_n),
            );
            let report = report::build_report(
                &assessment.participant,
                &assessment.profile,
                &ranked,
                &catalog,
                Utc::now(),
            );
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

fn describe_outcome(outcome: Recorded) -> &'static str {
    match outcome {
        Recorded::Inserted => "Added result to",
        Recorded::Updated => "Updated result in",
    }
}
