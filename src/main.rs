mod args;

use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use starsim::{fetch, Driver};
use starui::{Runner, Settings};

use args::Args;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("random seed {}", seed);

    let mut driver = Driver::new(Pcg64Mcg::seed_from_u64(seed));
    if let Some(path) = &args.logo {
        log::info!("loading logo from {}", path.display());
        driver = driver.with_logo_source(fetch::spawn(path.clone()));
    }

    let settings = Settings {
        width: args.width,
        height: args.height,
        ups: args.ticks_per_second(),
        fullscreen: args.fullscreen,
        ..Default::default()
    };
    Runner::run(&mut driver, &settings)?;
    Ok(())
}
