//! Grammar for `docker run [OPTIONS] IMAGE [COMMAND] [ARG...]`.

use log::debug;

use crate::{
    builder::RunCommandBuilder,
    error::{ParseError, Result},
    flags::{Flag, Switch},
    models::RunCommand,
    tokenizer::split_command,
    validate::{dequote, is_image_name},
};

const INVOCATION: &str = "docker";
const SUBCOMMAND: &str = "run";
const DEFAULT_TAG: &str = "latest";

/// Splits and parses a raw command line.
pub fn parse(line: &str) -> Result<RunCommand> {
    let tokens = split_command(line);
    let result = parse_tokens(&tokens);

    match &result {
        Ok(command) => debug!("parsed {:?}", command),
        Err(err) => debug!("rejected {:?}: {}", line, err),
    }

    result
}

/// Parses an already split command line.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<RunCommand> {
    let tokens = tokens.iter().map(AsRef::as_ref).collect::<Vec<_>>();
    Parser::new(&tokens).run()
}

struct Parser<'a> {
    tokens: &'a [&'a str],
    position: usize,
    builder: RunCommandBuilder,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [&'a str]) -> Parser<'a> {
        Parser {
            tokens,
            position: 0,
            builder: RunCommandBuilder::new(),
        }
    }

    fn run(mut self) -> Result<RunCommand> {
        self.expect_invocation()?;
        self.read_options()?;
        let image = self.read_image()?;
        let command = self.next().map(String::from);
        let args = self.remaining();

        Ok(self.builder.build(image, command, args))
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    fn next(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    fn remaining(&mut self) -> Vec<String> {
        let rest = self.tokens[self.position..]
            .iter()
            .map(|token| token.to_string())
            .collect();
        self.position = self.tokens.len();
        rest
    }

    fn expect_invocation(&mut self) -> Result<()> {
        match self.tokens {
            [] => Err(ParseError::EmptyCommand),
            [only] => Err(ParseError::TooFewTokens(only.to_string())),
            [invocation, ..] if *invocation != INVOCATION => {
                Err(ParseError::NotDocker(invocation.to_string()))
            }
            [_, subcommand, ..] if *subcommand != SUBCOMMAND => {
                Err(ParseError::NotRun(subcommand.to_string()))
            }
            _ => {
                self.position = 2;
                Ok(())
            }
        }
    }

    /// Consumes options until the first token that does not start with `-`.
    fn read_options(&mut self) -> Result<()> {
        while let Some(token) = self.peek() {
            if token.starts_with("--") {
                self.position += 1;
                self.long_option(token)?;
            } else if let Some(group) = token.strip_prefix('-') {
                self.position += 1;
                self.short_group(token, group)?;
            } else {
                break;
            }
        }

        Ok(())
    }

    /// `--name`, `--name=value` or `--name value`.
    fn long_option(&mut self, token: &'a str) -> Result<()> {
        let body = token.trim_start_matches('-');
        let (name, inline) = match body.find('=') {
            Some(index) if index > 0 => {
                let value = &body[index + 1..];
                if value.is_empty() {
                    return Err(ParseError::EmptyInlineValue(token.into()));
                }
                (&body[..index], Some(value))
            }
            _ => (body, None),
        };

        match Flag::long(name) {
            Flag::Unrecognized => Err(ParseError::UnknownFlag(token.into())),
            Flag::Switch(switch) => self.switch(switch, &format!("--{}", name), inline),
            Flag::Valued(flag) => {
                let value = match inline {
                    Some(value) => value,
                    None => self
                        .next()
                        .ok_or_else(|| ParseError::MissingArgument(token.into()))?,
                };
                self.builder.argument(flag, value)
            }
        }
    }

    /// A bundle of shorthand letters such as `-itd`, `-ip8080:80` or
    /// `-t=false`.
    ///
    /// A valued letter takes the rest of the bundle as its argument, or the
    /// next token when it is the last letter.
    fn short_group(&mut self, token: &'a str, group: &'a str) -> Result<()> {
        for (index, letter) in group.char_indices() {
            let rest = &group[index + letter.len_utf8()..];

            match Flag::short(letter) {
                Flag::Unrecognized => {
                    return Err(ParseError::UnknownShorthand {
                        letter,
                        rest: rest.into(),
                    })
                }
                Flag::Switch(switch) => match rest.strip_prefix('=') {
                    Some(value) if !value.is_empty() => {
                        return self.switch(switch, &format!("-{}", letter), Some(value));
                    }
                    _ => self.builder.switch(switch),
                },
                Flag::Valued(flag) => {
                    if rest.is_empty() {
                        let value = self
                            .next()
                            .ok_or_else(|| ParseError::MissingArgument(format!("-{}", letter)))?;
                        return self.builder.argument(flag, value);
                    }

                    let value = rest.strip_prefix('=').unwrap_or(rest);
                    if value.is_empty() {
                        return Err(ParseError::EmptyInlineValue(token.into()));
                    }
                    return self.builder.argument(flag, value);
                }
            }
        }

        Ok(())
    }

    /// Boolean options accept no value, `true` or `false`.
    fn switch(&mut self, switch: Switch, spelled: &str, value: Option<&str>) -> Result<()> {
        match value.map(dequote) {
            None | Some("true") => self.builder.switch(switch),
            Some("false") => debug!("{} explicitly disabled", switch),
            Some(value) => {
                return Err(ParseError::UnexpectedValue {
                    flag: spelled.into(),
                    value: value.into(),
                })
            }
        }

        Ok(())
    }

    fn read_image(&mut self) -> Result<String> {
        let image = self.next().ok_or(ParseError::MissingImage)?;
        if !is_image_name(image) {
            return Err(ParseError::IllegalImage(image.into()));
        }

        if image.contains(':') {
            Ok(image.into())
        } else {
            Ok(format!("{}:{}", image, DEFAULT_TAG))
        }
    }
}
