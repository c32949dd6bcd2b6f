use clap::Args;
use ecoscan::config::AppConfig;
use ecoscan::error::AppError;
use ecoscan::footprint::{compute_footprint, CarbonTable, FootprintAnalysis, DEFAULT_ITEM_CARBON};
use ecoscan::offers::{catalog, find_eligible_offers, Offer};
use ecoscan::recognition::{LabelDetector, LabelSourceKind};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Clothing labels, e.g. "T-shirt" "Jeans"
    pub(crate) labels: Vec<String>,
    /// Print the analysis as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScanArgs {
    /// Image file to analyze
    pub(crate) image: PathBuf,
    /// Print the detection and analysis as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct OffersArgs {
    /// Eco-points balance to match against the catalog
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) points: i64,
    /// Print the offers as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanReport<'a> {
    file: String,
    source: LabelSourceKind,
    detected_items: &'a [String],
    analysis: &'a FootprintAnalysis,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let analysis = compute_footprint(&args.labels);
    if args.json {
        print_json(&analysis);
    } else {
        render_analysis(&analysis);
    }
    Ok(())
}

pub(crate) async fn run_scan(args: ScanArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let detector = LabelDetector::from_config(&config.vision)?;
    let image = tokio::fs::read(&args.image).await?;

    let detection = detector.detect(&image).await;
    let analysis = compute_footprint(&detection.labels);

    if args.json {
        print_json(&ScanReport {
            file: args.image.display().to_string(),
            source: detection.source,
            detected_items: &detection.labels,
            analysis: &analysis,
        });
        return Ok(());
    }

    println!("Scanned {}", args.image.display());
    match detection.source {
        LabelSourceKind::Vision => println!("Detected by: vision model"),
        LabelSourceKind::Mock if detection.ai_configured => {
            println!("Detected by: mock recognition (vision model unavailable)")
        }
        LabelSourceKind::Mock => println!("Detected by: mock recognition"),
    }
    println!("Detected items: {}", detection.labels.join(", "));
    println!();
    render_analysis(&analysis);
    Ok(())
}

pub(crate) fn run_offers(args: OffersArgs) -> Result<(), AppError> {
    let offers = find_eligible_offers(args.points);
    if args.json {
        print_json(&offers);
        return Ok(());
    }

    if offers.is_empty() {
        println!("No offers available for {} eco-points", args.points);
    } else {
        println!("{} offer(s) available for {} eco-points", offers.len(), args.points);
        render_offers(&offers);
    }
    Ok(())
}

pub(crate) fn run_catalog() -> Result<(), AppError> {
    println!("Offer catalog");
    render_offers(catalog());

    println!("\nCarbon table (kg CO₂e, unlisted items count as {DEFAULT_ITEM_CARBON})");
    for (label, carbon) in CarbonTable::standard().entries() {
        println!("- {label}: {carbon}");
    }
    Ok(())
}

fn render_analysis(analysis: &FootprintAnalysis) {
    println!("Carbon footprint analysis");
    if analysis.items.is_empty() {
        println!("Items: none");
    } else {
        println!("Items");
        for item in &analysis.items {
            println!(
                "- {}: {} kg CO₂e ({} impact)",
                item.label,
                item.carbon,
                item.impact.label()
            );
        }
    }

    println!(
        "\nTotal: {} kg CO₂e ({} impact)",
        analysis.total_carbon,
        analysis.impact_level.label()
    );
    println!("Eco-points: {}", analysis.eco_points);
    println!("Sustainability score: {}/100", analysis.sustainability_score);

    println!("\nRecommendations");
    for recommendation in &analysis.recommendations {
        println!("- {recommendation}");
    }
}

fn render_offers(offers: &[Offer]) {
    for offer in offers {
        println!(
            "- [{}] {} ({}, {} pts, {}) valid until {}",
            offer.id,
            offer.title,
            offer.brand,
            offer.points_required,
            offer.category.label(),
            offer.valid_until
        );
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(err) => eprintln!("failed to render JSON: {err}"),
    }
}
