use log::debug;
use std::collections::btree_map::Entry;

use crate::{
    error::{ParseError, Result},
    flags::{Switch, Valued},
    models::RunCommand,
    validate::{
        dequote, is_attach_target, is_container_name, is_port_pair, is_volume_pair, is_workdir,
        parse_memory,
    },
};

const MIN_CPU_SHARES: i64 = 2;
const MAX_CPU_SHARES: i64 = 262_144;

/// Accumulates options for a single parse. Nothing outside the parser sees
/// the partially filled command.
#[derive(Debug, Default)]
pub(crate) struct RunCommandBuilder {
    command: RunCommand,
}

impl RunCommandBuilder {
    pub fn new() -> RunCommandBuilder {
        Default::default()
    }

    pub fn switch(&mut self, switch: Switch) {
        debug!("set {}", switch);
        *self.command.switch_mut(switch) = true;
    }

    /// Validates and stores the argument of a valued option.
    ///
    /// Quotes wrapping the whole argument are removed first.
    pub fn argument(&mut self, flag: Valued, raw: &str) -> Result<()> {
        let value = dequote(raw);
        debug!("{} = {:?}", flag, value);

        let command = &mut self.command;
        match flag {
            Valued::Publish => {
                let (host, container) = value
                    .split_once(':')
                    .filter(|_| is_port_pair(value))
                    .ok_or_else(|| ParseError::InvalidPublish(value.into()))?;

                match command.ports.entry(host.into()) {
                    Entry::Occupied(entry) => {
                        return Err(ParseError::PortAllocated(entry.key().clone()))
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(container.into());
                    }
                }
            }
            Valued::CpuShares => {
                let shares: i64 = value.parse().map_err(|_| ParseError::CpuSharesFormat {
                    flag: flag.to_string(),
                    value: value.into(),
                })?;

                if shares < MIN_CPU_SHARES || shares > MAX_CPU_SHARES {
                    return Err(ParseError::CpuSharesRange(shares));
                }
                command.cpu_shares = Some(shares as u32);
            }
            Valued::Volume => {
                let (source, target) = value
                    .split_once(':')
                    .filter(|_| is_volume_pair(value))
                    .ok_or_else(|| ParseError::InvalidVolume(value.into()))?;

                let source = source.replacen("$(pwd)", "$PWD", 1);
                let source = source.trim_end_matches(&['\\', '/'][..]);
                let target = target.trim_end_matches(&['\\', '/'][..]);

                if command.volumes.values().any(|mounted| mounted == target) {
                    return Err(ParseError::DuplicateMountPoint(target.into()));
                }
                if command.volumes.contains_key(source) {
                    return Err(ParseError::DuplicateVolumeSource(source.into()));
                }
                command.volumes.insert(source.into(), target.into());
            }
            Valued::Name => {
                if !is_container_name(value) {
                    return Err(ParseError::InvalidContainerName(value.into()));
                }
                command.container_name = Some(value.into());
            }
            Valued::Network => command.network = Some(value.into()),
            Valued::User => command.user = Some(value.into()),
            Valued::Workdir => {
                if !is_workdir(value) {
                    return Err(ParseError::InvalidWorkdir(value.into()));
                }
                command.workdir = Some(value.into());
            }
            Valued::Hostname => command.hostname = Some(value.trim_matches('"').into()),
            Valued::Env => command.env.push(value.into()),
            Valued::Attach => {
                if !is_attach_target(value) {
                    return Err(ParseError::InvalidAttach(value.into()));
                }
                command.attach.push(value.into());
            }
            Valued::Label => command.labels.push(value.into()),
            Valued::Link => command.links.push(value.into()),
            Valued::Memory => {
                let megabytes =
                    parse_memory(value).ok_or_else(|| ParseError::InvalidMemory(value.into()))?;
                command.memory = Some(megabytes);
            }
        }

        Ok(())
    }

    pub fn build(self, image: String, command: Option<String>, args: Vec<String>) -> RunCommand {
        RunCommand {
            image,
            command,
            args,
            ..self.command
        }
    }
}
