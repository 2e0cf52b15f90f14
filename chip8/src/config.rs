use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context};

use jace_core::{IndexOverflow, InvalidOpcodePolicy, Quirks, CLOCK_SPEED};

const USAGE: &str =
    "usage: jace <rom> [--hz <instructions per second>] [--skip-invalid] [--grow-index] [--seed <n>]";

/// Settings for one emulation session, taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rom: PathBuf,
    pub hz: u32,
    pub quirks: Quirks,
    pub seed: Option<u64>,
}

impl Config {
    /// # Arguments
    /// * `args` the command line arguments, without the program name
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut rom = None;
        let mut hz = CLOCK_SPEED;
        let mut quirks = Quirks::new();
        let mut seed = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--hz" => hz = parse_value(&arg, args.next())?,
                "--seed" => seed = Some(parse_value(&arg, args.next())?),
                "--skip-invalid" => {
                    quirks = quirks.with_invalid_opcode(InvalidOpcodePolicy::Skip)
                }
                "--grow-index" => quirks = quirks.with_index_overflow(IndexOverflow::Grow),
                flag if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
                path => {
                    if rom.is_some() {
                        bail!("more than one ROM given\n{}", USAGE);
                    }
                    rom = Some(PathBuf::from(path));
                }
            }
        }

        let rom = rom.with_context(|| format!("expected ROM file path\n{}", USAGE))?;
        if hz == 0 {
            bail!("--hz must be above 0");
        }

        Ok(Config {
            rom,
            hz,
            quirks,
            seed,
        })
    }
}

fn parse_value<T>(flag: &str, value: Option<String>) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = value.with_context(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .with_context(|| format!("invalid value {:?} for {}", value, flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Config> {
        Config::from_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["pong.ch8"]).unwrap();
        assert_eq!(config.rom, PathBuf::from("pong.ch8"));
        assert_eq!(config.hz, CLOCK_SPEED);
        assert_eq!(config.quirks, Quirks::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_options() {
        let config = parse(&[
            "--hz",
            "1000",
            "pong.ch8",
            "--skip-invalid",
            "--grow-index",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(config.hz, 1000);
        assert_eq!(config.quirks.invalid_opcode, InvalidOpcodePolicy::Skip);
        assert_eq!(config.quirks.index_overflow, IndexOverflow::Grow);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_requires_rom() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--hz", "500"]).is_err());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["pong.ch8", "--hz"]).is_err());
        assert!(parse(&["pong.ch8", "--hz", "fast"]).is_err());
        assert!(parse(&["pong.ch8", "--hz", "0"]).is_err());
        assert!(parse(&["pong.ch8", "--turbo"]).is_err());
        assert!(parse(&["pong.ch8", "tetris.ch8"]).is_err());
    }
}
