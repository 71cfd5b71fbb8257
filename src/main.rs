//! CocoScan - CLI
//!
//! Command-line interface over the scanning core. Every invocation is
//! one scan session: the collection starts from the seed dataset, and
//! only media files persist between runs.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::{Parser, Subcommand};

use cocoscan::advice::{ADVISORY_NOTE, PEST_PROFILE};
use cocoscan::plants::PLANT_DATASET;
use cocoscan::{
    ExternalConditions, ScanError, ScanResult, ScanSession, SessionConfig, Soil, Weather,
};

#[derive(Parser)]
#[command(name = "cocoscan")]
#[command(version = cocoscan::VERSION)]
#[command(about = "CocoScan - Coconut leaf scanning with deterministic mock classification")]
struct Cli {
    /// Media directory for captured and imported images
    #[arg(short, long, default_value = "./cocoscan_media")]
    media_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a photo from an image file
    Capture {
        /// Image to capture
        image: PathBuf,

        /// Weather at the scan site (requires --soil)
        #[arg(long)]
        weather: Option<Weather>,

        /// Soil type at the scan site (requires --weather)
        #[arg(long)]
        soil: Option<Soil>,
    },

    /// Import an image file from the gallery
    Import {
        /// Image to import
        file: PathBuf,
    },

    /// List the photo collection
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one photo by uri
    Show {
        /// Photo uri
        uri: String,
    },

    /// Run the mock models against a stored photo
    Analyze {
        /// Photo uri
        uri: String,
    },

    /// Delete a photo by id
    Delete {
        /// Photo ID
        id: String,
    },

    /// Treatment and control advice for a photo
    Advice {
        /// Photo uri
        uri: String,
    },

    /// Show the coconut pest profile
    About,

    /// List the plant reference dataset
    Plants,

    /// Show collection statistics
    Stats,

    /// Demo mode (end-to-end scan walkthrough)
    Demo,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is_user_actionable() {
            eprintln!("⚠️ {}", e);
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn open_session(media_dir: &Path) -> ScanResult<ScanSession> {
    ScanSession::new(SessionConfig {
        media_dir: media_dir.to_path_buf(),
        seed_on_start: true,
    })
}

fn run(cli: Cli) -> ScanResult<()> {
    match cli.command {
        Commands::Capture {
            ref image,
            weather,
            soil,
        } => {
            // The survey is optional, but a partial one is rejected
            let survey = match (weather, soil) {
                (None, None) => None,
                (weather, soil) => Some(ExternalConditions::from_options(weather, soil)?),
            };

            println!("📸 Capturing photo: {}", image.display());
            let session = open_session(&cli.media_dir)?;

            let bytes = fs::read(image)?;
            let record = session.capture_photo(&STANDARD.encode(bytes))?;

            println!("✅ Photo captured with ID: {}", record.id);
            println!("   File: {}", record.uri);
            if let Some(name) = &record.plant_name {
                println!(
                    "🌿 Identified: {} ({})",
                    name,
                    record.scientific_name.as_deref().unwrap_or("?")
                );
            }
            if let Some(survey) = survey {
                println!(
                    "🌦️ Conditions: {} weather, {} soil",
                    survey.weather, survey.soil
                );
            }
        }

        Commands::Import { ref file } => {
            println!("📥 Importing photo: {}", file.display());
            let session = open_session(&cli.media_dir)?;

            let record = session.import_photo(file)?;

            println!("✅ Photo imported with ID: {}", record.id);
            println!("   File: {}", record.uri);
        }

        Commands::List { json } => {
            let session = open_session(&cli.media_dir)?;
            let records = session.records();

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else if records.is_empty() {
                println!("📭 No photos in collection");
            } else {
                println!("📷 Photo collection ({}):", records.len());
                println!("{:-<72}", "");
                for record in records {
                    let plant = record.plant_name.as_deref().unwrap_or("-");
                    let health = record
                        .health_status
                        .map(|s| s.as_str())
                        .unwrap_or("unscanned");
                    println!(
                        "{:<12} {:<16} {} {}  🌿 {:<14} {}",
                        record.id, record.location, record.date, record.time, plant, health
                    );
                }
            }
        }

        Commands::Show { ref uri } => {
            let session = open_session(&cli.media_dir)?;

            let record = session
                .store()
                .find_by_uri(uri)
                .ok_or_else(|| ScanError::PhotoNotFound(uri.clone()))?;

            println!("📷 {}", record.id);
            println!("   Location:  {}", record.location);
            println!("   Captured:  {} {}", record.date, record.time);
            if let Some(name) = &record.plant_name {
                println!("   Plant:     {}", name);
            }
            if let Some(scientific) = &record.scientific_name {
                println!("   Species:   {}", scientific);
            }
            if let Some(description) = &record.description {
                println!("   About:     {}", description);
            }
            if let Some(status) = record.health_status {
                let confidence = record.health_confidence.unwrap_or(0.0);
                println!("   Health:    {} ({:.1}%)", status, confidence);
            }
        }

        Commands::Analyze { ref uri } => {
            println!("🔬 Analyzing: {}", uri);
            let session = open_session(&cli.media_dir)?;

            let analysis = session.analyze(uri)?;

            println!(
                "🍃 Label:  {} ({:.0}% confidence)",
                analysis.leaf.label,
                analysis.leaf.confidence * 100.0
            );
            println!(
                "💚 Health: {} ({:.1}% confidence)",
                analysis.health.prediction, analysis.health.confidence
            );
        }

        Commands::Delete { ref id } => {
            println!("🗑️ Deleting photo: {}", id);
            let session = open_session(&cli.media_dir)?;

            if session.delete_photo(id) {
                println!("✅ Photo deleted!");
            } else {
                println!("📭 No photo with ID: {}", id);
            }
        }

        Commands::Advice { ref uri } => {
            let session = open_session(&cli.media_dir)?;
            let plan = session.advice_for(uri);

            println!("🧪 Treatment");
            for item in plan.treatment {
                println!("   • {}", item);
            }
            println!("🛡️ Control");
            for item in plan.control {
                println!("   • {}", item);
            }
            println!();
            println!("{}", ADVISORY_NOTE);
        }

        Commands::About => {
            println!("🌴 {}", PEST_PROFILE.title);
            println!("{:-<72}", "");
            println!("{}", PEST_PROFILE.overview);
            for section in PEST_PROFILE.sections {
                println!();
                println!("{}", section.heading);
                for bullet in section.bullets {
                    println!("   • {}", bullet);
                }
            }
        }

        Commands::Plants => {
            println!("🌿 Plant reference dataset ({}):", PLANT_DATASET.len());
            println!("{:-<72}", "");
            for plant in &PLANT_DATASET {
                println!("{}. {} ({})", plant.id, plant.name, plant.scientific_name);
                println!("   {}", plant.description);
                println!("   Leaf: {} | Uses: {}", plant.leaf_shape, plant.common_uses);
            }
        }

        Commands::Stats => {
            let session = open_session(&cli.media_dir)?;
            let stats = session.stats();

            println!("📊 CocoScan Collection Statistics");
            println!("{:-<40}", "");
            println!("Total photos:     {}", stats.total_photos);
            println!("Camera captures:  {}", stats.camera_captures);
            println!("Gallery imports:  {}", stats.gallery_imports);
            println!("Healthy leaves:   {}", stats.healthy_count);
            println!("Unhealthy leaves: {}", stats.unhealthy_count);
            println!(
                "Health model:     {}",
                session.health_classifier().model_status()
            );
            println!("Media directory:  {}", session.media_dir().display());
        }

        Commands::Demo => {
            println!("🎮 CocoScan - Demo Mode");
            println!("{:-<40}", "");

            let demo_dir = PathBuf::from("./cocoscan_demo");
            if demo_dir.exists() {
                fs::remove_dir_all(&demo_dir)?;
            }

            let session = ScanSession::new(SessionConfig {
                media_dir: demo_dir.clone(),
                seed_on_start: true,
            })?;
            println!("✅ Session seeded with {} records", session.photo_count());

            // A bare JPEG header is enough for the mock pipeline
            let frame = STANDARD.encode([
                0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01,
            ]);
            let record = session.capture_photo(&frame)?;
            println!(
                "📸 Captured {} -> {}",
                record.id,
                record.plant_name.as_deref().unwrap_or("?")
            );

            let analysis = session.analyze(&record.uri)?;
            println!(
                "🔬 Analysis: {} / {} ({:.1}%)",
                analysis.leaf.label, analysis.health.prediction, analysis.health.confidence
            );

            let plan = session.advice_for(&record.uri);
            println!("🧪 Advice: {} treatment steps", plan.treatment.len());
            println!();
            println!("Try these commands:");
            println!("  cocoscan list");
            println!("  cocoscan analyze \"https://picsum.photos/300/300?random=1\"");
            println!("  cocoscan about");
        }
    }

    Ok(())
}
