use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0,
        value_parser = parse_rate
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0,
        value_parser = parse_rate
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_name = "MILLISECONDS",
        help = "Override the simulated latency of the user list fetch"
    )]
    pub fetch_delay: Option<u64>,
}

/// Rates become `1 / rate` second intervals, so they must be positive and finite
fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("{s} is not a positive number"))
    }
}
