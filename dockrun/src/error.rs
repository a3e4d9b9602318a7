use thiserror::Error;

/// Reasons a `docker run` line is rejected.
///
/// Every variant is terminal: a single bad token fails the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("received empty command")]
    EmptyCommand,

    #[error("requires at least two elements, got {0:?}")]
    TooFewTokens(String),

    #[error("not a docker command: {0}")]
    NotDocker(String),

    #[error("not a run command: {0}")]
    NotRun(String),

    #[error("can't find image name in the given command")]
    MissingImage,

    #[error("image name {0} is not legal")]
    IllegalImage(String),

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("unknown shorthand flag: '{letter}' in '{letter}{rest}'")]
    UnknownShorthand { letter: char, rest: String },

    #[error("not enough arguments after {0}")]
    MissingArgument(String),

    #[error("unexpected value for {flag}: {value}")]
    UnexpectedValue { flag: String, value: String },

    #[error("missing argument after '=' in {0}")]
    EmptyInlineValue(String),

    #[error("invalid publish opts format (should be port1:port2 but got '{0}')")]
    InvalidPublish(String),

    #[error("port is already allocated: {0}")]
    PortAllocated(String),

    #[error("{flag} needs a number, but got: {value}")]
    CpuSharesFormat { flag: String, value: String },

    #[error("the allowed cpu-shares is from 2 to 262144, but got {0}")]
    CpuSharesRange(i64),

    #[error("invalid volume argument: {0}")]
    InvalidVolume(String),

    #[error("duplicate mount point: {0}")]
    DuplicateMountPoint(String),

    #[error("duplicate volume source: {0}")]
    DuplicateVolumeSource(String),

    #[error("invalid memory argument: {0}")]
    InvalidMemory(String),

    #[error("invalid container name ({0}), only [a-zA-Z0-9][a-zA-Z0-9_.-] are allowed")]
    InvalidContainerName(String),

    #[error("invalid workdir: {0}")]
    InvalidWorkdir(String),

    #[error("invalid argument '{0}' for -a, --attach")]
    InvalidAttach(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
