//! The collect command: lookup → strategy chain → normalize → write.
//!
//! A run always completes and reports a summary; the only non-zero
//! exits are unusable configuration, output that cannot be written, and
//! an explicitly requested browser family with no WebDriver capability
//! at all.

use anyhow::Context;
use chrono::Utc;
use storerev_core::{load_collector_config, AppIdentity, RunResult};
use storerev_scraper::strategy::{
    BrowserStrategy, FeedStrategy, StaticPageStrategy, StorefrontApiStrategy,
};
use storerev_scraper::{build_http_client, fetch_app_metadata, run_chain, ReviewStrategy};

use crate::output::write_outputs;
use crate::{CollectArgs, FamilyArg};

pub(crate) async fn run_collect(args: CollectArgs) -> anyhow::Result<()> {
    let mut config = load_collector_config().context("invalid collector configuration")?;
    if let Some(country) = args.country {
        config.country = country;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }

    let identity = AppIdentity::new(args.app_id, args.slug, args.store.into());
    println!(
        "Collecting reviews for {} ({}) on the {} [{} family]...",
        identity.slug,
        identity.app_id,
        identity.store,
        args.family.file_slug()
    );

    let client = build_http_client(config.request_timeout_secs)
        .context("failed to build the HTTP client")?;

    // Metadata is always attempted and never fatal.
    let metadata = fetch_app_metadata(&client, &config, &identity).await;
    if metadata.is_empty() {
        println!("No app metadata available; continuing with reviews.");
    } else {
        println!("Fetched app metadata.");
    }

    let strategies: Vec<Box<dyn ReviewStrategy>> = match args.family {
        FamilyArg::Api => vec![
            Box::new(StorefrontApiStrategy::new(client.clone(), config.clone())),
            Box::new(FeedStrategy::new(client.clone(), config.clone())),
        ],
        FamilyArg::Browser => vec![Box::new(BrowserStrategy::new(config.clone()))],
        FamilyArg::Static => vec![Box::new(StaticPageStrategy::new(
            client.clone(),
            config.clone(),
        ))],
    };

    let outcome = run_chain(&strategies, &identity).await;
    match outcome.winning_strategy {
        Some(name) => println!("Strategy '{name}' yielded {} reviews.", outcome.records.len()),
        None => println!("All strategies came up empty; wrote the fallback record."),
    }

    let missing_capability = outcome.missing_capability();
    let store_url = identity.store_url(&config.country);
    let run = RunResult::new(
        identity,
        metadata,
        outcome.records,
        store_url,
        Utc::now(),
    );

    let written = write_outputs(&run, args.family.file_slug(), &config.output_dir)
        .context("failed to write output files")?;
    for path in &written {
        println!("Wrote {}", path.display());
    }
    println!("Found a total of {} reviews.", run.total_reviews);

    // The one missing-dependency case that warrants a non-zero exit:
    // the browser family was explicitly requested and no rendering
    // capability exists at all.
    if args.family == FamilyArg::Browser && missing_capability {
        anyhow::bail!(
            "browser family requested but no WebDriver endpoint is available \
             (start geckodriver/chromedriver or set STOREREV_WEBDRIVER_URL)"
        );
    }

    Ok(())
}
