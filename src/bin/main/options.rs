use std::fmt;

use retroclock_core::clock::{ClockError, ClockTime};

/// Command-line switches for the preview.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PreviewOptions {
    pub time: Option<ClockTime>,
    pub twelve_hour: bool,
    pub show_seconds: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OptionsError {
    BadTime(String, ClockError),
    UnknownFlag(String),
    DuplicateTime(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadTime(arg, err) => write!(f, "bad time {arg:?}: {err}"),
            Self::UnknownFlag(arg) => write!(f, "unknown flag {arg}"),
            Self::DuplicateTime(arg) => write!(f, "time given twice (extra {arg:?})"),
        }
    }
}

impl PreviewOptions {
    pub fn from_args<I>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();

        for arg in args {
            match arg.as_str() {
                "--12h" => options.twelve_hour = true,
                "--seconds" => options.show_seconds = true,
                flag if flag.starts_with("--") => {
                    return Err(OptionsError::UnknownFlag(flag.to_string()));
                }
                text => {
                    if options.time.is_some() {
                        return Err(OptionsError::DuplicateTime(text.to_string()));
                    }
                    let time = ClockTime::parse(text)
                        .map_err(|err| OptionsError::BadTime(text.to_string(), err))?;
                    options.time = Some(time);
                }
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<PreviewOptions, OptionsError> {
        PreviewOptions::from_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn no_args_use_defaults() {
        assert_eq!(parse(&[]), Ok(PreviewOptions::default()));
    }

    #[test]
    fn flags_and_time_in_any_order() {
        let options = parse(&["--seconds", "7:08:09", "--12h"]).unwrap();

        assert!(options.twelve_hour && options.show_seconds);
        assert_eq!(options.time, ClockTime::new(7, 8, 9).ok());
    }

    #[test]
    fn rejects_unknown_flags_and_bad_times() {
        assert_eq!(
            parse(&["--fast"]),
            Err(OptionsError::UnknownFlag("--fast".to_string()))
        );
        assert_eq!(
            parse(&["99:00"]),
            Err(OptionsError::BadTime("99:00".to_string(), ClockError::OutOfRange))
        );
        assert!(matches!(
            parse(&["10:00", "11:00"]),
            Err(OptionsError::DuplicateTime(_))
        ));
    }
}
