use log::trace;

const PRIVILEGE_PREFIX: &str = "sudo";

/// Splits a raw command line into whitespace separated words.
///
/// The line is trimmed and a leading `sudo` word dropped before escaped line
/// breaks are joined. Quotes are left in place; they are removed later, per
/// argument.
pub fn split_command(line: &str) -> Vec<String> {
    let stripped = strip_privilege_prefix(line.trim());
    let joined = stripped.replace("\\\r\n", " ").replace("\\\n", " ");

    let tokens = joined
        .split_whitespace()
        .map(String::from)
        .collect::<Vec<_>>();
    trace!("split {:?} into {:?}", line, tokens);

    tokens
}

fn strip_privilege_prefix(line: &str) -> &str {
    match line.strip_prefix(PRIVILEGE_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}
