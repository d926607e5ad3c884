use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use bibmap_core::*;

/// BibleMapped places browser - filter and search places from the terminal
///
/// Examples:
///   # List every place
///   bibmap-cli
///
///   # Search name, meta and tags
///   bibmap-cli --search naz
///
///   # Keep only some facet values (repeat to select several)
///   bibmap-cli --type city --book Luke --book Matthew
///
///   # Show the facet values the dataset offers
///   bibmap-cli --facets
#[derive(Parser, Debug)]
#[command(name = "bibmap-cli")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Values of the same facet are combined with OR\n  \
    - Search, type and book are combined with AND\n  \
    - Without --type (or --book) every value of that facet is selected\n  \
    - Search is case-insensitive and matches name, meta and tags")]
struct Cli {
    /// Places dataset: an http(s) URL or a path to a GeoJSON file
    #[arg(long, env = "BIBMAP_PLACES", value_name = "LOCATOR", default_value = DEFAULT_PLACES_LOCATOR)]
    places: String,

    /// Search text
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Keep places of this type (can be specified multiple times)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Keep places from this book (can be specified multiple times)
    #[arg(short, long = "book", value_name = "BOOK")]
    books: Vec<String>,

    /// Print the facet values instead of places
    #[arg(long)]
    facets: bool,

    /// Print JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Log filter
    #[arg(long, env = "BIBMAP_LOG", value_name = "FILTER", default_value = "warn")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).context("invalid --log filter")?)
        .with_writer(std::io::stderr)
        .init();

    let locator = Locator::parse(&cli.places);
    let places = load_places_blocking(&locator)
        .with_context(|| format!("Error loading places from '{}'", locator))?;

    let mut session = MapSession::new();
    session.load(places);

    if cli.facets {
        return print_facets(session.facets(), cli.json);
    }

    apply_cli_filters(&mut session, &cli);
    let visible = session.visible();

    if cli.json {
        let selected: Vec<&Place> = visible.iter().filter_map(|&key| session.place(key)).collect();
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    print_places(&session, &visible);
    Ok(())
}

/// Narrow the session to the values named on the command line
fn apply_cli_filters(session: &mut MapSession, cli: &Cli) {
    session.set_search(cli.search.as_str());

    for (facet, wanted) in [(Facet::Type, &cli.types), (Facet::Book, &cli.books)] {
        if wanted.is_empty() {
            continue;
        }

        let offered: Vec<String> = session
            .facet_options(facet)
            .into_iter()
            .map(|(value, _)| value)
            .collect();
        for value in wanted {
            if !offered.contains(value) {
                eprintln!(
                    "{} no place has {:?} '{}'",
                    "Warning:".yellow().bold(),
                    facet,
                    value
                );
            }
        }

        session.set_all_selected(facet, false);
        for value in wanted {
            session.set_selected(facet, value, true);
        }
    }
}

#[derive(Serialize)]
struct FacetListing {
    types: Vec<String>,
    books: Vec<String>,
}

fn print_facets(facets: &FacetSet, json: bool) -> anyhow::Result<()> {
    if json {
        let listing = FacetListing {
            types: facets.types_vec(),
            books: facets.books_vec(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}\n", "# Facets".bold());
    for (title, values) in [("Type", &facets.types), ("Book", &facets.books)] {
        println!("{}\n", format!("## {}", title).bold());
        if values.is_empty() {
            println!("_None_");
        }
        for value in values {
            println!("- {}", value);
        }
        println!();
    }
    Ok(())
}

fn print_places(session: &MapSession, visible: &[PlaceKey]) {
    println!("{}\n", "# Places".bold());

    let lines = active_filter_lines(&session.filters());
    if !lines.is_empty() {
        println!("## Active Filters\n");
        for line in lines {
            println!("{}", line);
        }
        println!();
    }

    println!(
        "**Matching Places:** {} of {}\n",
        visible.len(),
        session.places().len()
    );

    if visible.is_empty() {
        println!("{}", "_No matches._".dimmed());
        return;
    }

    for &key in visible {
        if let Some(place) = session.place(key) {
            print_place(place);
        }
    }
}

/// Markdown bullets for the filters that narrow the dataset
fn active_filter_lines(filters: &Filters) -> Vec<String> {
    if !has_filters(filters) {
        return Vec::new();
    }

    let mut lines = Vec::new();
    if !filters.search.trim().is_empty() {
        lines.push(format!("- **Search:** {}", filters.search.trim()));
    }
    if filters.types.len() < filters.type_total {
        lines.push(format!("- **Type:** {}", join_or_none(&filters.types)));
    }
    if filters.books.len() < filters.book_total {
        lines.push(format!("- **Book:** {}", join_or_none(&filters.books)));
    }
    lines
}

fn print_place(place: &Place) {
    println!("{}\n", format!("### {}", place.name).green().bold());

    if !place.meta.is_empty() {
        println!("{}\n", place.meta);
    }
    println!("- **Type:** {}", or_none(&place.kind));
    println!("- **Book:** {}", or_none(&place.book));
    println!("- **Location:** {}", place.position);
    println!("- **References:** {}", join_or_none(&place.refs));
    println!("- **Tags:** {}", join_or_none(&place.tags));
    println!();
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "None"
    } else {
        value
    }
}

fn join_or_none<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    let values: Vec<&str> = values.into_iter().map(String::as_str).collect();
    if values.is_empty() {
        "None".to_string()
    } else {
        values.join(", ")
    }
}
