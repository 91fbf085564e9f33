use anyhow::{bail, Result};
use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::sync::Arc;

use moodtune::catalog::{CatalogCache, RecommendedTrack};
use moodtune::emotion::{EmotionDetector, HuggingFaceEmotionDetector, DEFAULT_DETECTOR_MODEL};
use moodtune::mood::{known_emotions, MoodBucket, DEFAULT_MOOD};
use moodtune::recommend::DEFAULT_RECOMMENDATION_COUNT;
use moodtune::service::RecommendationService;

fn parse_catalog_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s).canonicalize()?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[clap(group(ArgGroup::new("input").args(["mood", "emotion", "text", "list_emotions"])))]
struct CliArgs {
    /// Path to the tracks CSV file.
    #[clap(value_parser = parse_catalog_path)]
    pub catalog_path: PathBuf,

    /// Recommend straight from a mood (happy, sad, energetic, chill).
    #[clap(long)]
    pub mood: Option<MoodBucket>,

    /// Recommend from an emotion label, e.g. "joy".
    #[clap(long)]
    pub emotion: Option<String>,

    /// Recommend from free text, requires --detector-url.
    #[clap(long)]
    pub text: Option<String>,

    /// Print the known emotion labels with their moods and exit.
    #[clap(long)]
    pub list_emotions: bool,

    /// How many tracks to print.
    #[clap(short = 'n', long, default_value_t = DEFAULT_RECOMMENDATION_COUNT)]
    pub count: usize,

    #[clap(long)]
    pub detector_url: Option<String>,

    #[clap(long, default_value = DEFAULT_DETECTOR_MODEL)]
    pub detector_model: String,

    #[clap(long)]
    pub detector_token: Option<String>,

    #[clap(long, default_value_t = 30)]
    pub detector_timeout_sec: u64,
}

fn print_tracks(mood: MoodBucket, tracks: &[RecommendedTrack]) {
    if tracks.is_empty() {
        println!("No songs found for mood {}.", mood);
        return;
    }
    println!("{} {} tracks:\n", tracks.len(), mood);
    for track in tracks {
        println!("{} - {}", track.track_name, track.artist_name);
        println!("    {}", track.track_url);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    if cli_args.list_emotions {
        for (emotion, mood) in known_emotions() {
            println!("{:<15} {}", emotion, mood);
        }
        println!("{:<15} {}", "(anything else)", DEFAULT_MOOD);
        return Ok(());
    }
    if cli_args.count == 0 {
        bail!("--count must be at least 1");
    }

    let detector = cli_args.detector_url.as_ref().map(|url| {
        Arc::new(HuggingFaceEmotionDetector::new(
            url.clone(),
            cli_args.detector_model.clone(),
            cli_args.detector_token.clone(),
            cli_args.detector_timeout_sec,
        )) as Arc<dyn EmotionDetector>
    });

    println!(
        "Cli Recommend loading catalog at {}...",
        cli_args.catalog_path.display()
    );
    let service = RecommendationService::new(
        cli_args.catalog_path.clone(),
        Arc::new(CatalogCache::new()),
        detector,
        cli_args.count,
    );
    let catalog = service.catalog()?;
    println!(
        "Done! {} tracks, {} rows skipped.\n",
        catalog.len(),
        catalog.dropped_rows()
    );

    if let Some(text) = &cli_args.text {
        let result = service.recommend_for_text(text, None).await?;
        println!(
            "Detected emotion: {} ({:.2}) -> mood: {}\n",
            result.emotion.label, result.emotion.score, result.mood
        );
        print_tracks(result.mood, &result.tracks);
        return Ok(());
    }

    let recommendation = match (cli_args.mood, &cli_args.emotion) {
        (Some(mood), _) => service.recommend_for_mood(mood, None)?,
        (None, Some(emotion)) => service.recommend_for_emotion(emotion, None)?,
        (None, None) => bail!("One of --mood, --emotion, --text or --list-emotions is required"),
    };
    print_tracks(recommendation.mood, &recommendation.tracks);
    Ok(())
}
