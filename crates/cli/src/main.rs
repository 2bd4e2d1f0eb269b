use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::prelude::*;
use recommender::HybridRecommender;
use snapshots::{load_metadata, load_ratings, RatingRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

/// VAM Recs - Hybrid Movie Recommendation Engine
#[derive(Parser)]
#[command(name = "vam-recs")]
#[command(about = "Hybrid movie recommendations from rating and metadata snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movie recommendations for a user
    Recommend {
        /// Path to the ratings snapshot (JSON array of rating records)
        #[arg(long, default_value = "data/ratings.json")]
        ratings: PathBuf,

        /// Path to the movie metadata snapshot (optional; enables the
        /// content-based strategy)
        #[arg(long)]
        metadata: Option<PathBuf>,

        /// User ID to get recommendations for
        #[arg(long)]
        user_id: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Show a user's rating history from a snapshot
    User {
        /// Path to the ratings snapshot
        #[arg(long, default_value = "data/ratings.json")]
        ratings: PathBuf,

        /// User ID to display
        #[arg(long)]
        user_id: String,
    },

    /// Generate a synthetic ratings snapshot for local experimentation
    Generate {
        /// Number of synthetic users
        #[arg(long, default_value = "50")]
        users: usize,

        /// Number of movies in the synthetic catalog
        #[arg(long, default_value = "200")]
        movies: u32,

        /// Ratings per user
        #[arg(long, default_value = "20")]
        ratings_per_user: usize,

        /// Output path for the ratings snapshot
        #[arg(long, default_value = "data/ratings.json")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            ratings,
            metadata,
            user_id,
            limit,
        } => handle_recommend(ratings, metadata, &user_id, limit),
        Commands::User { ratings, user_id } => handle_user(ratings, &user_id),
        Commands::Generate {
            users,
            movies,
            ratings_per_user,
            out,
        } => handle_generate(users, movies, ratings_per_user, out),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    ratings_path: PathBuf,
    metadata_path: Option<PathBuf>,
    user_id: &str,
    limit: usize,
) -> Result<()> {
    anyhow::ensure!(limit > 0, "limit must be positive");
    let records = load_ratings(&ratings_path)
        .with_context(|| format!("Failed to load ratings from {}", ratings_path.display()))?;
    let metadata = match &metadata_path {
        Some(path) => Some(
            load_metadata(path)
                .with_context(|| format!("Failed to load metadata from {}", path.display()))?,
        ),
        None => None,
    };

    let start = Instant::now();
    let mut engine = HybridRecommender::from_snapshot(records);
    println!(
        "{} Built matrices over {} users x {} movies in {:?}",
        "✓".green(),
        engine.matrix().n_users(),
        engine.matrix().n_movies(),
        start.elapsed()
    );

    let result = engine.get_recommendations(user_id, limit, metadata.as_deref());
    if !result.status.is_success() {
        println!("{} {}", "!".yellow(), result.status);
        return Ok(());
    }

    let titles: HashMap<u32, String> = metadata
        .unwrap_or_default()
        .into_iter()
        .filter_map(|movie| movie.title.map(|title| (movie.id, title)))
        .collect();

    println!(
        "\n{}",
        format!("Top {} picks for {}:", result.movie_ids.len(), user_id).bold()
    );
    for (rank, movie_id) in result.movie_ids.iter().enumerate() {
        match titles.get(movie_id) {
            Some(title) => println!("{:>3}. {} ({})", rank + 1, title.cyan(), movie_id),
            None => println!("{:>3}. movie {}", rank + 1, movie_id),
        }
    }
    Ok(())
}

/// Handle the 'user' command
fn handle_user(ratings_path: PathBuf, user_id: &str) -> Result<()> {
    let records = load_ratings(&ratings_path)?;
    let engine = HybridRecommender::from_snapshot(records);

    let Some(row) = engine.matrix().user_position(user_id) else {
        println!("{} No ratings found for user {}", "!".yellow(), user_id);
        return Ok(());
    };

    let ratings = engine.matrix().ratings_of(row);
    println!("{}", format!("User {user_id}: {} ratings", ratings.len()).bold());
    for (movie_id, rating) in ratings {
        let stars = "★".repeat(rating as usize);
        println!("  movie {:>6}  {}", movie_id, stars.yellow());
    }
    Ok(())
}

/// Handle the 'generate' command
fn handle_generate(
    users: usize,
    movies: u32,
    ratings_per_user: usize,
    out: PathBuf,
) -> Result<()> {
    let mut rng = rand::rng();
    let mut records = Vec::with_capacity(users * ratings_per_user);

    for user in 0..users {
        let user_id = format!("user-{user:04}");
        // Bias each user toward a slice of the catalog so the
        // collaborative signals have clusters to find.
        let anchor = rng.random_range(0..movies);
        for _ in 0..ratings_per_user {
            let offset = rng.random_range(0..movies / 4 + 1);
            let movie_id = 1 + (anchor + offset) % movies;
            let rating = rng.random_range(1..=5);
            records.push(RatingRecord::new(user_id.clone(), movie_id, rating));
        }
    }

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&out)
        .with_context(|| format!("Failed to create {}", out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &records)?;

    println!(
        "{} Wrote {} ratings for {} users to {}",
        "✓".green(),
        records.len(),
        users,
        out.display()
    );
    Ok(())
}
