use crate::error::ConvertError;
use clap::Parser;

/// Two-line usage shown when the command or its value is missing
pub const USAGE: &str = "Usage: convert <type> <value> [from] [to]\n   \
                         or: convert compare <value1> <unit1> <value2> <unit2>";

/// Usage shown when `compare` gets the wrong number of arguments
pub const COMPARE_USAGE: &str = "Usage: convert compare <value1> <unit1> <value2> <unit2>\n\
                                 Example: convert compare 5 km 3 mi";

/// Command-line arguments for convert
#[derive(Parser, Debug, Clone)]
#[command(name = "convert")]
#[command(about = "A CLI tool for converting and comparing temperature, distance, and weight quantities")]
#[command(long_about = None)]
#[command(version)]
#[command(override_usage = "convert [OPTIONS] <type> <value> [from] [to]\n       \
                            convert [OPTIONS] compare <value1> <unit1> <value2> <unit2>")]
pub struct Args {
    /// Defaults file to use instead of the built-in one
    #[arg(long, value_name = "PATH", env = "CONVERT_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Command words: `<type> <value> [from] [to]` or `compare <value1> <unit1> <value2> <unit2>`
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_negative_numbers = true
    )]
    pub words: Vec<String>,
}

impl Args {
    /// Interpret the positional words as a request
    pub fn request(&self) -> Result<Request, ConvertError> {
        Request::from_words(&self.words)
    }
}

/// A parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `convert <type> <value> [from] [to]`
    Convert {
        family: String,
        value: String,
        from: Option<String>,
        to: Option<String>,
    },
    /// `convert compare <value1> <unit1> <value2> <unit2>`
    Compare {
        value1: String,
        unit1: String,
        value2: String,
        unit2: String,
    },
}

impl Request {
    /// Build a request from positional words
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Usage`] when the command is missing or empty,
    /// when a conversion has no value, or when `compare` does not get exactly
    /// four arguments. Words after `[to]` are ignored.
    pub fn from_words(words: &[String]) -> Result<Self, ConvertError> {
        let Some((command, rest)) = words.split_first().filter(|(c, _)| !c.is_empty()) else {
            return Err(ConvertError::usage(USAGE));
        };

        if command == "compare" {
            return match rest {
                [value1, unit1, value2, unit2] => Ok(Self::Compare {
                    value1: value1.clone(),
                    unit1: unit1.clone(),
                    value2: value2.clone(),
                    unit2: unit2.clone(),
                }),
                _ => Err(ConvertError::usage(COMPARE_USAGE)),
            };
        }

        let value = match rest.first() {
            Some(value) if !value.is_empty() => value.clone(),
            _ => return Err(ConvertError::usage(USAGE)),
        };

        Ok(Self::Convert {
            family: command.clone(),
            value,
            from: rest.get(1).cloned(),
            to: rest.get(2).cloned(),
        })
    }
}
