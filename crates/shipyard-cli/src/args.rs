use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shipyard")]
#[command(about = "Assemble a ship loadout from a list of part names")]
#[command(version)]
pub struct Cli {
    /// Part list file, one part name per line
    #[arg(default_value = "vehicle_parts.txt")]
    pub input: PathBuf,

    /// Fix the shuffle seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_to_vehicle_parts() {
        let cli = Cli::parse_from(["shipyard"]);
        assert_eq!(cli.input, PathBuf::from("vehicle_parts.txt"));
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_input_and_seed_from_args() {
        let cli = Cli::parse_from(["shipyard", "parts.txt", "--seed", "42"]);
        assert_eq!(cli.input, PathBuf::from("parts.txt"));
        assert_eq!(cli.seed, Some(42));
    }
}
