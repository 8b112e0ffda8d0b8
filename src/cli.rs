// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::geo::GeoCoordinate;

#[derive(Parser, Debug, Clone)]
#[command(name = "geo-globe")]
#[command(about = "Globe projection, camera framing and marker tracking", long_about = None)]
pub struct Cli {
    /// JSON file overriding scene defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Project a coordinate onto the sphere
    Project {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
    },
    /// Recover latitude/longitude from a point
    Unproject {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        #[arg(allow_hyphen_values = true)]
        z: f64,
    },
    /// Great-circle distance between two "lat,lon" points
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: GeoCoordinate,
        #[arg(allow_hyphen_values = true)]
        to: GeoCoordinate,
    },
    /// Camera position framing a "lat,lon" point
    Frame {
        #[arg(allow_hyphen_values = true)]
        target: GeoCoordinate,
        /// Defaults to the configured focus distance
        #[arg(long)]
        distance: Option<f64>,
        /// Current globe rotation about +Y, radians
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rotation: f64,
    },
    /// Run the scene loop over a country list
    Simulate {
        /// REST Countries JSON export
        #[arg(long)]
        countries: PathBuf,
        #[arg(long, default_value_t = 120)]
        frames: u64,
        #[arg(long, default_value_t = 60.0)]
        hz: f64,
        /// Focus a "lat,lon" point on the first frame
        #[arg(long, allow_hyphen_values = true)]
        focus: Option<GeoCoordinate>,
        /// Select the first country matching this name
        #[arg(long)]
        search: Option<String>,
        /// Click at "x,y" in a 800x600 viewport
        #[arg(long, value_parser = parse_pixel)]
        pick: Option<(f64, f64)>,
        /// Keep the globe still
        #[arg(long)]
        no_spin: bool,
        /// Override transition duration
        #[arg(long)]
        transition_ms: Option<u32>,
    },
    /// Replay position fixes toward a target until it is reached
    Watch {
        /// JSON array of fixes
        #[arg(long)]
        fixes: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        target: GeoCoordinate,
        /// Metres within which the target counts as reached
        #[arg(long, default_value_t = 0.0)]
        tolerance: f64,
    },
}

fn parse_pixel(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {:?}", s))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distance_args() {
        let cli = Cli::parse_from(["geo-globe", "distance", "43.7034,7.2663", "43.2965,5.3698"]);
        match cli.command {
            Command::Distance { from, to } => {
                assert_eq!(from.latitude(), 43.7034);
                assert_eq!(to.longitude(), 5.3698);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let cli = Cli::parse_from(["geo-globe", "frame", "-33.86,151.21", "--rotation", "-0.5"]);
        match cli.command {
            Command::Frame {
                target, rotation, ..
            } => {
                assert_eq!(target.latitude(), -33.86);
                assert_eq!(rotation, -0.5);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["geo-globe", "distance", "91,0", "0,0"]).is_err());
    }

    #[test]
    fn test_parse_pixel() {
        assert_eq!(parse_pixel("400, 300"), Ok((400.0, 300.0)));
        assert!(parse_pixel("400").is_err());
    }
}
