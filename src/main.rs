use anyhow::Context;
use clap::Parser;
use site_search::cli::{Cli, Commands, ThemeAction};
use site_search::config::SearchConfig;
use site_search::search::ContentSearch;
use site_search::ui::{FileStore, ResultsSurface, SurfaceEntry, ThemeSwitch};
use site_search::{Page, SearchController, SearchOutcome, SiteConfig};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    site_search::tracing::init(cli.verbose);

    let config = SiteConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load site configuration")?;

    match cli.command {
        Commands::Search {
            query,
            page,
            strategy,
            html,
        } => {
            let mut search_config = config.search;
            if let Some(strategy) = strategy {
                search_config.strategy = strategy;
            }
            run_search(&query, &page, search_config, html)
        }
        Commands::Replay {
            page,
            keys,
            interval_ms,
        } => run_replay(&page, config, &keys, Duration::from_millis(interval_ms)).await,
        Commands::Theme {
            action,
            store,
            prefers_dark,
        } => {
            let path = store.unwrap_or_else(|| config.theme.resolved_storage_path());
            run_theme(action, &path, &config.theme.storage_key, prefers_dark);
            Ok(())
        }
    }
}

fn load_page(path: &Path) -> anyhow::Result<Page> {
    Page::load(path).with_context(|| format!("Failed to load page snapshot {}", path.display()))
}

fn run_search(
    query: &str,
    page_path: &Path,
    config: SearchConfig,
    html: bool,
) -> anyhow::Result<()> {
    let page = load_page(page_path)?;
    let search = ContentSearch::new(config);
    let mut surface = ResultsSurface::new();

    let outcome = search.run_on_page(query, &page, &mut surface);
    if matches!(outcome, SearchOutcome::TooShort) {
        tracing::info!("Query too short, results hidden");
        return Ok(());
    }

    if html {
        println!("{}", surface.to_html());
    } else {
        print_entries(surface.entries());
    }
    Ok(())
}

async fn run_replay(
    page_path: &Path,
    config: SiteConfig,
    keys: &[String],
    interval: Duration,
) -> anyhow::Result<()> {
    let page = load_page(page_path)?;
    let Some(mut controller) = SearchController::attach(page, config.search) else {
        tracing::info!("Page has no search widgets, nothing to replay");
        return Ok(());
    };

    let mut last = None;
    for value in keys {
        tracing::debug!("Keystroke: '{}'", value);
        last = Some(controller.on_input(value));
        tokio::time::sleep(interval).await;
    }

    // The trailing scan fires one quiet period after the final keystroke.
    if let Some(handle) = last
        && !handle.join().await
    {
        tracing::debug!("Final scan was cancelled");
    }

    println!(
        "{} keystrokes, {} scan(s), results {}",
        keys.len(),
        controller.scan_count(),
        if controller.is_results_visible() {
            "visible"
        } else {
            "hidden"
        }
    );
    print_entries(&controller.entries());
    Ok(())
}

fn run_theme(action: ThemeAction, path: &Path, key: &str, prefers_dark: bool) {
    let mut switch = ThemeSwitch::load(FileStore::new(path), key, prefers_dark);
    let theme = match action {
        ThemeAction::Show => switch.current(),
        ThemeAction::Toggle => switch.toggle(),
    };
    println!("{} (toggle icon: {})", theme, theme.toggle_icon());
}

fn print_entries(entries: &[SurfaceEntry]) {
    for (idx, entry) in entries.iter().enumerate() {
        match entry {
            SurfaceEntry::Result(result) => {
                println!("{}. {} -> {}", idx + 1, result.title, result.url);
                println!("   {}", result.excerpt);
            }
            SurfaceEntry::Placeholder(message) => println!("{}", message),
        }
    }
}

