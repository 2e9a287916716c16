use log::LevelFilter;
use env_logger::Builder;
use std::io::Write;
use chrono::Local;

/// Dependencies whose debug output drowns out the per-page lines.
const NOISY_DEPENDENCIES: &[&str] = &["html5ever", "selectors", "reqwest", "hyper_util"];

/// Level for this crate's own records.
pub fn scraper_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// `verbose` turns on the per-page card counts and skipped next-page links.
/// `RUST_LOG` still overrides everything.
pub fn init(verbose: bool) {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .filter(Some("stl_scraper_lib"), scraper_level(verbose));

    for dependency in NOISY_DEPENDENCIES {
        builder.filter(Some(dependency), LevelFilter::Warn);
    }

    builder.parse_default_env().init();
    log::debug!("Logger initialized (verbose: {}).", verbose);
}
