use crate::{LoggerError, LoggerResult, RotationPolicy};

use logwire_config::LogConfiguration;

use std::fmt;
use std::io::Write;

use fern::Dispatch;

/// Where encoded records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteTarget {
    Stderr,
    File(RotationPolicy),
    /// Every record to stderr and to the rotating file
    Tee(RotationPolicy),
}

impl WriteTarget {
    /// `None` when neither console nor file output is enabled.
    pub fn select(config: &LogConfiguration) -> Option<Self> {
        match (config.console_enable, config.file_enable) {
            (false, false) => None,
            (true, false) => Some(WriteTarget::Stderr),
            (false, true) => Some(WriteTarget::File(RotationPolicy::from_config(config))),
            (true, true) => Some(WriteTarget::Tee(RotationPolicy::from_config(config))),
        }
    }

    pub fn rotation(&self) -> Option<&RotationPolicy> {
        match self {
            WriteTarget::Stderr => None,
            WriteTarget::File(policy) | WriteTarget::Tee(policy) => Some(policy),
        }
    }

    /// Chain the outputs onto `dispatch`, with `console` standing in for stderr.
    ///
    /// Opens the rotating file if there is one. A file-only target fails when the
    /// file cannot be opened; a tee keeps its console half and hands back the error.
    pub(crate) fn attach(
        self,
        dispatch: Dispatch,
        console: Box<dyn Write + Send>,
    ) -> LoggerResult<Attached> {
        match &self {
            WriteTarget::Stderr => Ok(Attached {
                dispatch: dispatch.chain(console),
                target: self,
                file_error: None,
            }),
            WriteTarget::File(policy) => {
                let file = open_file(policy)?;
                Ok(Attached {
                    dispatch: dispatch.chain(file),
                    target: self,
                    file_error: None,
                })
            }
            WriteTarget::Tee(policy) => match open_file(policy) {
                Ok(file) => Ok(Attached {
                    dispatch: dispatch.chain(console).chain(file),
                    target: self,
                    file_error: None,
                }),
                Err(error) => Ok(Attached {
                    dispatch: dispatch.chain(console),
                    target: WriteTarget::Stderr,
                    file_error: Some(error),
                }),
            },
        }
    }
}

/// Outputs chained onto a dispatch and the target actually in effect.
pub(crate) struct Attached {
    pub(crate) dispatch: Dispatch,
    pub(crate) target: WriteTarget,
    pub(crate) file_error: Option<LoggerError>,
}

impl fmt::Display for WriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteTarget::Stderr => f.write_str("stderr"),
            WriteTarget::File(policy) => write!(f, "file {}", policy.path.display()),
            WriteTarget::Tee(policy) => write!(f, "stderr + file {}", policy.path.display()),
        }
    }
}

fn open_file(policy: &RotationPolicy) -> LoggerResult<Box<dyn Write + Send>> {
    Ok(Box::new(policy.open()?))
}
