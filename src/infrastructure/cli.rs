use std::time::Duration;

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
        default_value_t = 60.0,
        value_parser = parse_rate
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "Route to open first, e.g. /sign-in",
        default_value = "/"
    )]
    pub path: String,
}

/// Accepts rates whose period is a positive, representable duration
fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(format!("{rate} is not a positive number"));
    }
    match Duration::try_from_secs_f64(1.0 / rate) {
        Ok(period) if !period.is_zero() => Ok(rate),
        _ => Err(format!("{rate} is out of range")),
    }
}
