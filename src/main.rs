use agari_check::report::Report;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

/// Check whether a hand plus a drawn tile is a winning mahjong hand
#[derive(Parser, Debug)]
#[command(name = "agari-check", version)]
struct Args {
    /// Hand tiles, e.g. "123m456p789s東東東2p". A suit letter applies to every digit before it.
    hand: String,

    /// Drawn tile, e.g. "2p" or "東"
    drawn: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log parsing and decomposition steps (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_filter(&self) -> EnvFilter {
        let level = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(args.log_filter())
        .init();

    let report = Report::new(&args.hand, &args.drawn);
    let output = match args.format {
        Format::Text => report.to_text(),
        Format::Json => report.to_json().context("serializing report")?,
    };

    writeln!(std::io::stdout(), "{output}").context("writing report")?;
    Ok(())
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    pub fn args() {
        let args = Args::try_parse_from(["agari-check", "111p222p333p444p5p", "5p"]).unwrap();
        assert_eq!(args.hand, "111p222p333p444p5p");
        assert_eq!(args.drawn, "5p");
        assert!(matches!(args.format, Format::Text));
        assert_eq!(args.verbose, 0);

        let args = Args::try_parse_from(["agari-check", "-vv", "--format", "json", "1m", "東"]).unwrap();
        assert!(matches!(args.format, Format::Json));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    pub fn missing_args() {
        assert!(Args::try_parse_from(["agari-check"]).is_err());
        assert!(Args::try_parse_from(["agari-check", "123m"]).is_err());
        assert!(Args::try_parse_from(["agari-check", "1m", "2m", "--format", "xml"]).is_err());
    }
}
