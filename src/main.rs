use std::error::Error;
use clap::Parser;
use log::info;
use stl_scraper_lib::{csv_writer, logger};
use stl_scraper_lib::{Extractor, HttpFetcher, Paginator, Scraper};

mod args;
use args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logger::init(args.verbose);

    let config = args.into_config()?;
    info!("Starting things-to-do scraper at {}", config.start_url());

    let scraper = Scraper::new(HttpFetcher::new()?, Extractor::new(&config.base_url));
    let paginator = Paginator::new(scraper, config.delay(), config.max_pages);
    let run = paginator.run(&config.start_url());

    let count = csv_writer::write_items(&config.output_path, &run.items)?;
    info!("Scraped {} items. Data saved to {}", count, config.output_path.display());
    Ok(())
}
