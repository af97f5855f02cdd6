use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filter_engine::{
    apply_filters, build_catalogs, build_filter_catalog, CatalogField, CollectionTarget,
    FilterCatalogs, FilterItem, FilterOutcome, FilterState,
};
use listing_store::{CollectionKind, Listing, ListingId, ListingStore};
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Tour Filter - browse and filter tours and rentals
#[derive(Parser)]
#[command(name = "tour-filter")]
#[command(about = "Filter tour and rental listings like the listing page's filter dialog", long_about = None)]
struct Cli {
    /// Path to the listings dataset (JSON with "tours" and "rents")
    #[arg(short, long, default_value = "data/listings.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter listings and print the matching cards
    Filter {
        /// Which collections to re-filter: tours, rents or all
        #[arg(long, default_value = "all")]
        target: CollectionTarget,

        /// Start from a filter state saved as JSON (see data/island-filters.json)
        #[arg(long)]
        filters: Option<PathBuf>,

        /// Theme token, matched as a whole word (repeatable)
        #[arg(long)]
        theme: Vec<String>,

        /// Activity token, matched as a substring (repeatable)
        #[arg(long)]
        activity: Vec<String>,

        /// Vehicle token, matched as a substring (repeatable)
        #[arg(long)]
        vehicle: Vec<String>,

        /// Feature token, matched as a substring (repeatable)
        #[arg(long)]
        feature: Vec<String>,

        /// Maximum price (0-5000)
        #[arg(long)]
        max_price: Option<f64>,

        /// Latest start hour (0-24)
        #[arg(long)]
        start_hour: Option<u32>,

        /// Maximum group size (1-40)
        #[arg(long)]
        group_size: Option<u32>,

        /// Location text to search for
        #[arg(long)]
        location: Option<String>,

        /// Show description, activities, features and languages
        #[arg(long)]
        details: bool,

        /// Print the matches as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Show the selectable filter chips for a collection
    Catalog {
        /// Collection to build chips for: tours or rents
        #[arg(long, default_value = "tours")]
        kind: CollectionKind,

        /// Only this field: theme, activity, vehicle or features
        #[arg(long)]
        field: Option<CatalogField>,

        /// Print the chips as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one listing in detail
    Show {
        /// Collection the listing belongs to: tours or rents
        #[arg(long, default_value = "tours")]
        kind: CollectionKind,

        /// Listing ID
        #[arg(long)]
        id: ListingId,
    },
}

/// Filter dialog selections passed on the command line
struct Selections {
    filters: Option<PathBuf>,
    theme: Vec<String>,
    activity: Vec<String>,
    vehicle: Vec<String>,
    feature: Vec<String>,
    max_price: Option<f64>,
    start_hour: Option<u32>,
    group_size: Option<u32>,
    location: Option<String>,
}

/// One recomputed collection in `filter --json` output
#[derive(Serialize)]
struct CollectionResults<'a> {
    collection: CollectionKind,
    count: usize,
    listings: &'a [&'a Listing],
}

/// `catalog --json --field <field>` output
#[derive(Serialize)]
struct FieldCatalog<'a> {
    collection: CollectionKind,
    field: CatalogField,
    items: &'a [FilterItem],
}

/// `catalog --json` output for every field
#[derive(Serialize)]
struct CollectionCatalogs<'a> {
    collection: CollectionKind,
    #[serde(flatten)]
    catalogs: &'a FilterCatalogs,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let store = ListingStore::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load listings from {}", cli.data.display()))?;
    info!("Loaded dataset in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter {
            target,
            filters,
            theme,
            activity,
            vehicle,
            feature,
            max_price,
            start_hour,
            group_size,
            location,
            details,
            json,
        } => {
            let selections = Selections {
                filters,
                theme,
                activity,
                vehicle,
                feature,
                max_price,
                start_hour,
                group_size,
                location,
            };
            handle_filter(&store, target, selections, details, json)?
        }
        Commands::Catalog { kind, field, json } => handle_catalog(&store, kind, field, json)?,
        Commands::Show { kind, id } => handle_show(&store, kind, id)?,
    }

    Ok(())
}

/// Build the filter state from an optional JSON file plus command-line selections
fn build_state(selections: Selections) -> Result<FilterState> {
    let mut state = match &selections.filters {
        Some(path) => load_state(path)?,
        None => FilterState::default(),
    };

    for token in selections.theme {
        state = state.with_theme(token);
    }
    for token in selections.activity {
        state = state.with_activity(token);
    }
    for token in selections.vehicle {
        state = state.with_vehicle(token);
    }
    for token in selections.feature {
        state = state.with_feature(token);
    }
    if let Some(price) = selections.max_price {
        state.set_price(price);
    }
    if let Some(hour) = selections.start_hour {
        state.set_start_hour(hour);
    }
    if let Some(group_size) = selections.group_size {
        state.set_group_size(group_size);
    }
    if let Some(location) = selections.location {
        state.location = location;
    }
    Ok(state)
}

fn load_state(path: &Path) -> Result<FilterState> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open filter state {}", path.display()))?;
    let state = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid filter state in {}", path.display()))?;
    Ok(state)
}

/// Handle the 'filter' command
fn handle_filter(
    store: &ListingStore,
    target: CollectionTarget,
    selections: Selections,
    details: bool,
    json: bool,
) -> Result<()> {
    let state = build_state(selections)?;
    info!(
        "Applying filters to {} (max price {}, start by {}, group up to {})",
        target,
        state.price,
        state.start_hour_label(),
        state.group_size
    );

    let outcome = apply_filters(store, &state, target)?;
    if json {
        println!("{}", outcome_to_json(&outcome)?);
        return Ok(());
    }

    for kind in CollectionKind::ALL {
        // Collections outside the target were not recomputed
        let Some(matches) = outcome.get(kind) else {
            continue;
        };
        print_results_header(kind, matches.len());
        for listing in matches {
            print_card(listing, details);
        }
        println!();
    }
    Ok(())
}

/// Serialize the recomputed collections, skipping the ones outside the target
fn outcome_to_json(outcome: &FilterOutcome<'_>) -> Result<String> {
    let results: Vec<CollectionResults> = CollectionKind::ALL
        .into_iter()
        .filter_map(|kind| {
            outcome.get(kind).map(|matches| CollectionResults {
                collection: kind,
                count: matches.len(),
                listings: matches,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&results)?)
}

fn catalog_to_json(
    store: &ListingStore,
    kind: CollectionKind,
    field: Option<CatalogField>,
) -> Result<String> {
    let listings = store.collection(kind);
    let json = match field {
        Some(field) => serde_json::to_string_pretty(&FieldCatalog {
            collection: kind,
            field,
            items: &build_filter_catalog(listings, field),
        })?,
        None => serde_json::to_string_pretty(&CollectionCatalogs {
            collection: kind,
            catalogs: &build_catalogs(listings),
        })?,
    };
    Ok(json)
}

/// Handle the 'catalog' command
fn handle_catalog(
    store: &ListingStore,
    kind: CollectionKind,
    field: Option<CatalogField>,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", catalog_to_json(store, kind, field)?);
        return Ok(());
    }

    let listings = store.collection(kind);
    println!("{}", format!("Filters for {}", kind.noun()).bold().blue());

    match field {
        Some(field) => print_chips(field, &build_filter_catalog(listings, field)),
        None => {
            let catalogs = build_catalogs(listings);
            for field in CatalogField::ALL {
                print_chips(field, catalogs.get(field));
            }
        }
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(store: &ListingStore, kind: CollectionKind, id: ListingId) -> Result<()> {
    let listing = store
        .get(kind, id)
        .ok_or_else(|| anyhow!("No {} listing with id {}", kind, id))?;
    print_card(listing, true);
    Ok(())
}

fn print_results_header(kind: CollectionKind, count: usize) {
    let title = if count > 0 {
        format!("Available {}", kind.noun())
    } else {
        format!("No {} found", kind.noun())
    };
    println!("{}", title.bold().blue());
    println!("{} {} found", count.to_string().green(), kind.noun());
}

fn print_chips(field: CatalogField, items: &[FilterItem]) {
    println!("{}", field.title().bold());
    if items.is_empty() {
        println!("  (none)");
        return;
    }
    let chips = items
        .iter()
        .map(|item| format!("{} ({})", item.label, item.count))
        .collect::<Vec<_>>()
        .join("  ");
    println!("  {}", chips);
}

/// Helper function to format and print a listing card
fn print_card(listing: &Listing, details: bool) {
    println!(
        "{}. {} - {}",
        listing.id.to_string().green(),
        listing.title.bold(),
        listing.location
    );
    println!(
        "   {} {:.1} ({} reviews) | {} | starts {} | up to {} people",
        "★".yellow(),
        listing.rating,
        listing.reviews,
        listing.duration,
        listing.start_time,
        listing.group_size
    );
    if listing.has_discount() {
        println!(
            "   {} {} (save {:.0}, -{:.0}%)",
            format!("{:.0}", listing.price).green(),
            format!("{:.0}", listing.original_price).strikethrough(),
            listing.savings(),
            listing.discount
        );
    } else {
        println!("   {}", format!("{:.0}", listing.price).green());
    }
    println!("   Theme: {} | Vehicle: {}", listing.theme, listing.vehicle);

    if details {
        if !listing.description.is_empty() {
            println!("   {}", listing.description);
        }
        println!("   Activities: {}", listing.activity.join(", "));
        println!("   Features: {}", listing.features.join(", "));
        if !listing.languages.is_empty() {
            println!("   Languages: {}", listing.languages.join(", "));
        }
    }
}
