//! The allow-list of `docker run` options understood by the parser.

use std::fmt;

/// Options that toggle a boolean and take no argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Switch {
    Interactive,
    Tty,
    Detach,
    Remove,
    PublishAll,
}

/// Options that require an argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Valued {
    Publish,
    CpuShares,
    Volume,
    Name,
    Network,
    User,
    Workdir,
    Hostname,
    Env,
    Attach,
    Label,
    Link,
    Memory,
}

/// Result of looking a flag up in the allow-list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Switch(Switch),
    Valued(Valued),
    Unrecognized,
}

impl Flag {
    /// Looks up a long option name, without its leading dashes.
    ///
    /// `publish` has no long spelling here; `-p` is the only way to publish.
    pub fn long(name: &str) -> Flag {
        match name {
            "interactive" => Flag::Switch(Switch::Interactive),
            "tty" => Flag::Switch(Switch::Tty),
            "detach" => Flag::Switch(Switch::Detach),
            "rm" => Flag::Switch(Switch::Remove),
            "publish-all" => Flag::Switch(Switch::PublishAll),
            "cpu-shares" => Flag::Valued(Valued::CpuShares),
            "volume" => Flag::Valued(Valued::Volume),
            "name" => Flag::Valued(Valued::Name),
            "network" => Flag::Valued(Valued::Network),
            "user" => Flag::Valued(Valued::User),
            "workdir" => Flag::Valued(Valued::Workdir),
            "hostname" => Flag::Valued(Valued::Hostname),
            "env" => Flag::Valued(Valued::Env),
            "attach" => Flag::Valued(Valued::Attach),
            "label" => Flag::Valued(Valued::Label),
            "link" => Flag::Valued(Valued::Link),
            "memory" => Flag::Valued(Valued::Memory),
            _ => Flag::Unrecognized,
        }
    }

    /// Looks up a single shorthand letter.
    pub fn short(letter: char) -> Flag {
        match letter {
            'i' => Flag::Switch(Switch::Interactive),
            't' => Flag::Switch(Switch::Tty),
            'd' => Flag::Switch(Switch::Detach),
            'P' => Flag::Switch(Switch::PublishAll),
            'p' => Flag::Valued(Valued::Publish),
            'c' => Flag::Valued(Valued::CpuShares),
            'v' => Flag::Valued(Valued::Volume),
            'u' => Flag::Valued(Valued::User),
            'w' => Flag::Valued(Valued::Workdir),
            'h' => Flag::Valued(Valued::Hostname),
            'e' => Flag::Valued(Valued::Env),
            'a' => Flag::Valued(Valued::Attach),
            'l' => Flag::Valued(Valued::Label),
            'm' => Flag::Valued(Valued::Memory),
            _ => Flag::Unrecognized,
        }
    }
}

impl Switch {
    pub fn short(self) -> Option<char> {
        match self {
            Switch::Interactive => Some('i'),
            Switch::Tty => Some('t'),
            Switch::Detach => Some('d'),
            Switch::PublishAll => Some('P'),
            Switch::Remove => None,
        }
    }

    pub fn long(self) -> &'static str {
        match self {
            Switch::Interactive => "interactive",
            Switch::Tty => "tty",
            Switch::Detach => "detach",
            Switch::Remove => "rm",
            Switch::PublishAll => "publish-all",
        }
    }
}

impl Valued {
    pub fn short(self) -> Option<char> {
        match self {
            Valued::Publish => Some('p'),
            Valued::CpuShares => Some('c'),
            Valued::Volume => Some('v'),
            Valued::User => Some('u'),
            Valued::Workdir => Some('w'),
            Valued::Hostname => Some('h'),
            Valued::Env => Some('e'),
            Valued::Attach => Some('a'),
            Valued::Label => Some('l'),
            Valued::Memory => Some('m'),
            Valued::Name | Valued::Network | Valued::Link => None,
        }
    }

    /// Long spelling used in messages. `publish` is reported even though the
    /// parser only accepts `-p`.
    pub fn long(self) -> &'static str {
        match self {
            Valued::Publish => "publish",
            Valued::CpuShares => "cpu-shares",
            Valued::Volume => "volume",
            Valued::Name => "name",
            Valued::Network => "network",
            Valued::User => "user",
            Valued::Workdir => "workdir",
            Valued::Hostname => "hostname",
            Valued::Env => "env",
            Valued::Attach => "attach",
            Valued::Label => "label",
            Valued::Link => "link",
            Valued::Memory => "memory",
        }
    }
}

fn write_spellings(f: &mut fmt::Formatter, short: Option<char>, long: &str) -> fmt::Result {
    match short {
        Some(short) => write!(f, "-{} or --{}", short, long),
        None => write!(f, "--{}", long),
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_spellings(f, self.short(), self.long())
    }
}

impl fmt::Display for Valued {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_spellings(f, self.short(), self.long())
    }
}
