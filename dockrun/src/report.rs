use std::fmt;

use crate::{flags::Switch, models::RunCommand};

const SWITCHES: [(&str, Switch); 5] = [
    ("Remove", Switch::Remove),
    ("Detach", Switch::Detach),
    ("TTY", Switch::Tty),
    ("Interactive", Switch::Interactive),
    ("PublishAll", Switch::PublishAll),
];

fn join_pairs<'a>(pairs: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    pairs
        .map(|(from, to)| format!("{}:{}", from, to))
        .collect::<Vec<_>>()
        .join(", ")
}

impl RunCommand {
    /// Label and rendered value of every populated field.
    pub fn report(&self) -> Vec<(&'static str, String)> {
        let mut lines = Vec::new();

        let scalars = [
            ("Image", Some(&self.image).filter(|image| !image.is_empty())),
            ("Command", self.command.as_ref()),
            ("Hostname", self.hostname.as_ref()),
            ("ContainerName", self.container_name.as_ref()),
            ("User", self.user.as_ref()),
            ("WorkDir", self.workdir.as_ref()),
            ("Network", self.network.as_ref()),
        ];
        for (label, value) in scalars.iter() {
            if let Some(value) = value {
                lines.push((*label, value.to_string()));
            }
        }

        for (label, switch) in SWITCHES.iter() {
            if self.switch(*switch) {
                lines.push((*label, "true".to_string()));
            }
        }

        let lists = [
            ("Args", &self.args),
            ("Attach", &self.attach),
            ("Link", &self.links),
            ("Label", &self.labels),
            ("Env", &self.env),
        ];
        for (label, values) in lists.iter() {
            if !values.is_empty() {
                lines.push((*label, values.join(" ")));
            }
        }

        if !self.ports.is_empty() {
            lines.push(("Port", join_pairs(self.ports.iter())));
        }
        if !self.volumes.is_empty() {
            lines.push(("Volume", join_pairs(self.volumes.iter())));
        }
        if let Some(shares) = self.cpu_shares {
            lines.push(("CpuShares", shares.to_string()));
        }
        if let Some(memory) = self.memory {
            lines.push(("Memory", format!("{}m", memory)));
        }

        lines
    }
}

impl fmt::Display for RunCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (label, value) in self.report() {
            writeln!(f, "{}  :  {}", label, value)?;
        }
        Ok(())
    }
}
