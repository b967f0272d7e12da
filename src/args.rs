use std::path::PathBuf;

use clap::Parser;

/// Shooting stars with an optional logo that assembles itself from falling pixels.
#[derive(Parser, Debug)]
#[command(name = "shooting-stars", version, about)]
pub struct Args {
    /// Logo payload file: "<width>,<height>,<base64 rgb bytes>"
    #[arg(short, long)]
    pub logo: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Milliseconds per animation tick
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// Seed for the random source; drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Open the window fullscreen
    #[arg(long)]
    pub fullscreen: bool,
}

impl Args {
    pub fn ticks_per_second(&self) -> u64 {
        (1000 / self.tick_ms).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_25ms_tick() {
        let args = Args::parse_from(["shooting-stars"]);
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.tick_ms, 25);
        assert_eq!(args.ticks_per_second(), 40);
        assert!(args.logo.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn parses_logo_and_seed() {
        let args = Args::parse_from(["shooting-stars", "-l", "img/logo.txt", "--seed", "7"]);
        assert_eq!(args.logo, Some(PathBuf::from("img/logo.txt")));
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn rejects_zero_tick() {
        assert!(Args::try_parse_from(["shooting-stars", "--tick-ms", "0"]).is_err());
    }
}
