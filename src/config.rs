use std::{fs, io, num::IntErrorKind, num::NonZeroU32, path::PathBuf, time::Duration};

use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use crate::{engine::check_dimensions, error::EngineError, world, LifeEngine};

pub const DEFAULT_FPS: NonZeroU32 = match NonZeroU32::new(15) {
    Some(fps) => fps,
    None => unreachable!(),
};
pub const FPS_VAR: &str = "TORLIFE_FPS";
pub const SEED_VAR: &str = "TORLIFE_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("could not read pattern file: {0}")]
    Io(#[from] io::Error),

    #[error("{var} should be {expected}, got {value:?}")]
    BadVar {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Init {
    Pattern(PathBuf),
    Dimensions { rows: usize, cols: usize },
}

impl Init {
    /// One argument is a pattern file, two are dimensions.
    /// Both dimensions must be numbers before their range is checked.
    pub fn from_args(args: &[String]) -> Result<Self, EngineError> {
        match args {
            [path] => Ok(Init::Pattern(PathBuf::from(path))),
            [rows, cols] => {
                let rows = parse_dimension(rows)?;
                let cols = parse_dimension(cols)?;
                check_dimensions(rows, cols)?;
                Ok(Init::Dimensions { rows, cols })
            }
            _ => Err(EngineError::InvalidConstructorCall { count: args.len() }),
        }
    }
}

/// Any integer is a number: negatives saturate to 0, values past `usize` to `usize::MAX`.
fn parse_dimension(arg: &str) -> Result<usize, EngineError> {
    let value = match arg.trim().parse::<i128>() {
        Ok(value) => value,
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => i128::MAX,
            IntErrorKind::NegOverflow => i128::MIN,
            _ => return Err(EngineError::InvalidArgument(arg.to_string())),
        },
    };
    Ok(usize::try_from(value.max(0)).unwrap_or(usize::MAX))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub init: Init,
    pub fps: NonZeroU32,
    pub seed: Option<u64>,
}

impl Config {
    /// `args` excludes the program name; `var` looks up environment variables.
    pub fn from_args(
        args: &[String],
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let init = Init::from_args(args)?;
        let fps = match var(FPS_VAR) {
            Some(value) => match value.trim().parse() {
                Ok(fps) => fps,
                Err(_) => {
                    return Err(ConfigError::BadVar {
                        var: FPS_VAR,
                        expected: "a positive integer",
                        value,
                    })
                }
            },
            None => DEFAULT_FPS,
        };
        let seed = var(SEED_VAR)
            .map(|value| {
                value.trim().parse().map_err(|_| ConfigError::BadVar {
                    var: SEED_VAR,
                    expected: "an unsigned 64 bit integer",
                    value,
                })
            })
            .transpose()?;
        Ok(Self { init, fps, seed })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_args(&args, |name| std::env::var(name).ok())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.get()
    }

    pub fn build_engine(&self) -> Result<LifeEngine, ConfigError> {
        let engine = match &self.init {
            Init::Pattern(path) => {
                let content = fs::read_to_string(path)?;
                LifeEngine::from_raw(&world::deserialize(&content))?
            }
            Init::Dimensions { rows, cols } => match self.seed {
                Some(seed) => {
                    let mut rng = StdRng::seed_from_u64(seed);
                    LifeEngine::with_dimensions_and_rng(*rows, *cols, &mut rng)?
                }
                None => LifeEngine::with_dimensions(*rows, *cols)?,
            },
        };
        Ok(engine)
    }
}
