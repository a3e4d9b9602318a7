//! Reference-driven comparison of two parsed commands.
//!
//! Only what the reference sets is checked. A field that is unset, empty or
//! `false` in the reference never causes a mismatch, whatever the candidate
//! holds. Environment, labels, attach streams, links and the network are
//! not compared at all.

use std::{collections::BTreeMap as Map, fmt};

use crate::{flags::Switch, models::RunCommand};

const JUDGED_SWITCHES: [Switch; 5] = [
    Switch::Tty,
    Switch::Detach,
    Switch::Remove,
    Switch::Interactive,
    Switch::PublishAll,
];

/// The first difference found between a reference and a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    MissingSwitch(Switch),
    Field {
        field: &'static str,
        expected: String,
        actual: Option<String>,
    },
    CpuShares {
        expected: Option<u32>,
        actual: Option<u32>,
    },
    Memory {
        expected: Option<u64>,
        actual: Option<u64>,
    },
    Port {
        host: String,
        expected: String,
        actual: Option<String>,
    },
    Volume {
        source: String,
        expected: String,
        actual: Option<String>,
    },
    UnexpectedCommand(String),
    ArgumentCount {
        expected: usize,
        actual: usize,
    },
    Argument {
        index: usize,
        expected: String,
        actual: String,
    },
}

/// Compares `candidate` against `reference` and returns the first mismatch.
///
/// `None` means the candidate is accepted.
pub fn judge(reference: &RunCommand, candidate: &RunCommand) -> Option<Mismatch> {
    for switch in JUDGED_SWITCHES.iter().copied() {
        if reference.switch(switch) && !candidate.switch(switch) {
            return Some(Mismatch::MissingSwitch(switch));
        }
    }

    let fields = [
        ("WorkDir", &reference.workdir, &candidate.workdir),
        ("ContainerName", &reference.container_name, &candidate.container_name),
        ("User", &reference.user, &candidate.user),
        ("HostName", &reference.hostname, &candidate.hostname),
    ];
    for (field, expected, actual) in fields.iter().copied() {
        if let Some(mismatch) = compare_field(field, expected, actual) {
            return Some(mismatch);
        }
    }

    if reference.cpu_shares != candidate.cpu_shares {
        return Some(Mismatch::CpuShares {
            expected: reference.cpu_shares,
            actual: candidate.cpu_shares,
        });
    }
    // Amounts below one megabyte round to zero, which reads the same as unset.
    if reference.memory.unwrap_or(0) != candidate.memory.unwrap_or(0) {
        return Some(Mismatch::Memory {
            expected: reference.memory,
            actual: candidate.memory,
        });
    }

    if let Some((host, expected, actual)) = missing_entry(&reference.ports, &candidate.ports) {
        return Some(Mismatch::Port {
            host,
            expected,
            actual,
        });
    }
    if let Some((source, expected, actual)) = missing_entry(&reference.volumes, &candidate.volumes)
    {
        return Some(Mismatch::Volume {
            source,
            expected,
            actual,
        });
    }

    if !reference.image.is_empty() && reference.image != candidate.image {
        return Some(Mismatch::Field {
            field: "Image",
            expected: reference.image.clone(),
            actual: Some(candidate.image.clone()),
        });
    }
    match (non_empty(&reference.command), non_empty(&candidate.command)) {
        (Some(_), _) => {
            if let Some(mismatch) = compare_field("Command", &reference.command, &candidate.command)
            {
                return Some(mismatch);
            }
        }
        (None, Some(unexpected)) => {
            return Some(Mismatch::UnexpectedCommand(unexpected.to_string()));
        }
        (None, None) => (),
    }

    if reference.args.len() != candidate.args.len() {
        return Some(Mismatch::ArgumentCount {
            expected: reference.args.len(),
            actual: candidate.args.len(),
        });
    }
    reference
        .args
        .iter()
        .zip(candidate.args.iter())
        .enumerate()
        .find(|(_, (expected, actual))| expected != actual)
        .map(|(index, (expected, actual))| Mismatch::Argument {
            index,
            expected: expected.clone(),
            actual: actual.clone(),
        })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn compare_field(
    field: &'static str,
    expected: &Option<String>,
    actual: &Option<String>,
) -> Option<Mismatch> {
    let expected = non_empty(expected)?;
    if actual.as_deref() == Some(expected) {
        return None;
    }

    Some(Mismatch::Field {
        field,
        expected: expected.to_string(),
        actual: actual.clone(),
    })
}

/// First reference entry the candidate lacks or maps differently.
fn missing_entry(
    reference: &Map<String, String>,
    candidate: &Map<String, String>,
) -> Option<(String, String, Option<String>)> {
    reference
        .iter()
        .find(|(key, value)| candidate.get(*key) != Some(*value))
        .map(|(key, value)| (key.clone(), value.clone(), candidate.get(key).cloned()))
}

fn or_none<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "nothing".to_string(),
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mismatch::MissingSwitch(switch) => write!(f, "not found {}", switch),
            Mismatch::Field {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{} not right, expect '{}' but got '{}'",
                field,
                expected,
                actual.as_deref().unwrap_or_default()
            ),
            Mismatch::CpuShares { expected, actual } => write!(
                f,
                "CpuShares not right, expect {} but got {}",
                or_none(expected),
                or_none(actual)
            ),
            Mismatch::Memory { expected, actual } => write!(
                f,
                "Memory not right, expect {} but got {}",
                or_none(&expected.map(|megabytes| format!("{}m", megabytes))),
                or_none(&actual.map(|megabytes| format!("{}m", megabytes)))
            ),
            Mismatch::Port {
                host,
                expected,
                actual,
            } => write!(
                f,
                "Port config not right, expect {}:{} but got {}",
                host,
                expected,
                or_none(actual)
            ),
            Mismatch::Volume {
                source,
                expected,
                actual,
            } => write!(
                f,
                "Volume config not right, expect '{}':'{}' but got {}",
                source,
                expected,
                or_none(actual)
            ),
            Mismatch::UnexpectedCommand(command) => write!(f, "unexpected command: {}", command),
            Mismatch::ArgumentCount { expected, actual } => write!(
                f,
                "Arguments number not right, expect {} but got {}",
                expected, actual
            ),
            Mismatch::Argument {
                index,
                expected,
                actual,
            } => write!(
                f,
                "Argument {} not right, expect '{}' but got '{}'",
                index + 1,
                expected,
                actual
            ),
        }
    }
}
