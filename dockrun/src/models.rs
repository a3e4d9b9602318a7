use serde::Serialize;
use std::{collections::BTreeMap as Map, str::FromStr};

use crate::{error::ParseError, flags::Switch, parser};

/// A parsed `docker run` invocation.
///
/// Only produced by a successful parse; `image` always carries a tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunCommand {
    pub image: String,
    pub command: Option<String>,
    pub args: Vec<String>,

    /// Host port to container port.
    pub ports: Map<String, String>,
    /// Host path to container path, trailing slashes trimmed.
    pub volumes: Map<String, String>,
    /// Raw `-e` values in the order they were given.
    pub env: Vec<String>,
    pub labels: Vec<String>,
    pub attach: Vec<String>,
    pub links: Vec<String>,

    pub cpu_shares: Option<u32>,
    /// Megabytes.
    pub memory: Option<u64>,
    pub hostname: Option<String>,
    pub container_name: Option<String>,
    pub user: Option<String>,
    pub workdir: Option<String>,
    pub network: Option<String>,

    pub remove: bool,
    pub detach: bool,
    pub tty: bool,
    pub interactive: bool,
    pub publish_all: bool,
}

impl RunCommand {
    pub fn switch(&self, switch: Switch) -> bool {
        match switch {
            Switch::Interactive => self.interactive,
            Switch::Tty => self.tty,
            Switch::Detach => self.detach,
            Switch::Remove => self.remove,
            Switch::PublishAll => self.publish_all,
        }
    }

    pub(crate) fn switch_mut(&mut self, switch: Switch) -> &mut bool {
        match switch {
            Switch::Interactive => &mut self.interactive,
            Switch::Tty => &mut self.tty,
            Switch::Detach => &mut self.detach,
            Switch::Remove => &mut self.remove,
            Switch::PublishAll => &mut self.publish_all,
        }
    }
}

impl FromStr for RunCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parser::parse(line)
    }
}
