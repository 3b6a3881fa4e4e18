// Copyright (c) 2026 rezky_nightky

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "neorain",
    version,
    about = "Classic digital-rain animation for the terminal"
)]
pub struct Args {
    #[arg(
        short = 's',
        long = "speed",
        default_value_t = 30,
        help_heading = "ANIMATION",
        help = "Milliseconds per tick, lower is faster (min 5 max 500)"
    )]
    pub speed: u64,

    #[arg(
        short = 'd',
        long = "density",
        default_value_t = 0.7,
        help_heading = "ANIMATION",
        help = "Fraction of columns seeded with a falling streak at startup (min 0.05 max 1.0)"
    )]
    pub density: f32,

    #[arg(
        long = "duration",
        help_heading = "GENERAL",
        help = "Stop after N seconds (min 0.1 max 86400; <=0 disables)"
    )]
    pub duration: Option<f64>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let args = Args::try_parse_from(["neorain"]).unwrap();
        assert_eq!(args.speed, 30);
        assert_eq!(args.density, 0.7);
        assert!(args.duration.is_none());
    }

    #[test]
    fn flags_parse_in_short_and_long_form() {
        let args = Args::try_parse_from(["neorain", "-s", "25", "-d", "0.9"]).unwrap();
        assert_eq!(args.speed, 25);
        assert_eq!(args.density, 0.9);

        let args =
            Args::try_parse_from(["neorain", "--speed", "40", "--duration", "10"]).unwrap();
        assert_eq!(args.speed, 40);
        assert_eq!(args.duration, Some(10.0));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(Args::try_parse_from(["neorain", "--speed", "fast"]).is_err());
        assert!(Args::try_parse_from(["neorain", "--density", "lots"]).is_err());
    }
}
