use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use unicode_wide_ranges_prepare::output::{self, stats};
use unicode_wide_ranges_prepare::tables::{self, WIDE_UNASSIGNED_RANGES};
use unicode_wide_ranges_prepare::{fetch, Config, PrepareError};

fn main()
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrepareError>
{
    let config = Config::from_args(env::args().skip(1))?;
    let sources = fetch::load(&config)?;

    let mut stats = HashMap::new();
    let ranges = tables::prepare(&sources, WIDE_UNASSIGNED_RANGES, &mut stats)?;

    let mut file = BufWriter::new(File::create(&config.output)?);

    output::write(config.version.as_str(), &ranges, &mut file)?;
    file.flush()?;

    log::info!("таблица записана в {}", config.output.display());

    stats::print(config.version.as_str(), &ranges, &stats);

    Ok(())
}
