//! Anchored character-class checks for option arguments and image names.
//!
//! Each predicate accepts the whole input or nothing; there is no partial
//! matching.

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_repository_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '/'
}

/// Removes one pair of matching `"` or `'` wrapping the whole value.
///
/// Values with a further quote of the same kind inside are returned as-is.
pub fn dequote(value: &str) -> &str {
    for quote in ['"', '\''].iter().copied() {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = &value[1..value.len() - 1];
            if !inner.contains(quote) {
                return inner;
            }
        }
    }

    value
}

/// A repository of lowercase letters, digits, `_` and `/`, optionally
/// followed by `:` and a tag of word characters.
///
/// Without a colon the name still has to end in at least one word
/// character after a non-empty repository part, so a single character is
/// rejected.
pub fn is_image_name(name: &str) -> bool {
    match name.split_once(':') {
        Some((repository, tag)) => {
            !repository.is_empty()
                && repository.chars().all(is_repository_char)
                && !tag.is_empty()
                && tag.chars().all(is_word)
        }
        None => {
            if name.len() < 2 || !name.is_ascii() {
                return false;
            }

            let prefix_end = name.chars().take_while(|c| is_repository_char(*c)).count();
            let suffix_start = name.len() - name.chars().rev().take_while(|c| is_word(*c)).count();

            suffix_start.max(1) <= prefix_end.min(name.len() - 1)
        }
    }
}

fn is_port_number(port: &str) -> bool {
    (1..=5).contains(&port.len()) && port.bytes().all(|b| b.is_ascii_digit())
}

/// `host:container`, each one to five digits.
pub fn is_port_pair(value: &str) -> bool {
    match value.split_once(':') {
        Some((host, container)) => is_port_number(host) && is_port_number(container),
        None => false,
    }
}

fn is_volume_part(part: &str) -> bool {
    !part.is_empty() && !part.contains(|c: char| c == ':' || c == ' ')
}

/// `source:target`, neither side empty nor containing a colon or space.
pub fn is_volume_pair(value: &str) -> bool {
    match value.split_once(':') {
        Some((source, target)) => is_volume_part(source) && is_volume_part(target),
        None => false,
    }
}

/// At least two characters: an alphanumeric one, then alphanumerics,
/// `_`, `.` or `-`.
pub fn is_container_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() => {
            let rest = chars.as_str();
            !rest.is_empty()
                && rest
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        }
        _ => false,
    }
}

pub fn is_workdir(path: &str) -> bool {
    !path.is_empty()
        && path
            .chars()
            .all(|c| is_word(c) || "/=+-*!\\~.#@".contains(c))
}

pub fn is_attach_target(stream: &str) -> bool {
    ["stdin", "stdout", "stderr"]
        .iter()
        .any(|target| stream.eq_ignore_ascii_case(target))
}

/// Parses `<digits><unit>` into megabytes.
///
/// The unit is one of `b`, `k`, `m`, `g` in either case. Byte and kilobyte
/// amounts are shifted down and round towards zero. Returns `None` for
/// malformed input or an amount that does not fit.
pub fn parse_memory(value: &str) -> Option<u64> {
    let unit = value.chars().last()?;
    let digits = &value[..value.len() - unit.len_utf8()];

    if digits.is_empty() || digits.len() > 30 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let amount: u64 = digits.parse().ok()?;
    match unit.to_ascii_lowercase() {
        'b' => Some(amount >> 20),
        'k' => Some(amount >> 10),
        'm' => Some(amount),
        'g' => amount.checked_mul(1 << 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequote_strips_one_matching_pair() {
        assert_eq!(dequote(r#""hello""#), "hello");
        assert_eq!(dequote("'hello'"), "hello");
        assert_eq!(dequote(r#""""#), "");
        assert_eq!(dequote("hello"), "hello");
        assert_eq!(dequote(r#""hello'"#), r#""hello'"#);
        assert_eq!(dequote(r#""a"b""#), r#""a"b""#);
        assert_eq!(dequote(r#"""#), r#"""#);
        assert_eq!(dequote(r#"'say "hi"'"#), r#"say "hi""#);
    }

    #[test]
    fn image_names() {
        for name in &[
            "images",
            "alpine:latest",
            "username/1000010021_angular",
            "zhenshaw/1000010020_angular:v2",
            "ab",
            "alpinE",
            "alpine:LTS",
        ] {
            assert!(is_image_name(name), "{} should be legal", name);
        }

        for name in &[
            "",
            "a",
            "alpine:",
            ":latest",
            "Alpine",
            "alpine:3.19",
            "alpine:a:b",
            "abc/",
            "registry.io/alpine",
            "alp-ine",
        ] {
            assert!(!is_image_name(name), "{} should be illegal", name);
        }
    }

    #[test]
    fn port_pairs() {
        assert!(is_port_pair("8080:80"));
        assert!(is_port_pair("1:65535"));
        assert!(!is_port_pair("123456:80"));
        assert!(!is_port_pair("8080"));
        assert!(!is_port_pair("8080:"));
        assert!(!is_port_pair("t"));
        assert!(!is_port_pair("80:80:80"));
        assert!(!is_port_pair("80:80/udp"));
    }

    #[test]
    fn volume_pairs() {
        assert!(is_volume_pair("/hello:/world"));
        assert!(is_volume_pair("$PWD/data:/var/lib/postgresql/data"));
        assert!(is_volume_pair("named_vol:/data"));
        assert!(!is_volume_pair("/hello"));
        assert!(!is_volume_pair(":/world"));
        assert!(!is_volume_pair("/a:/b:ro"));
        assert!(!is_volume_pair("-tp"));
    }

    #[test]
    fn container_names() {
        assert!(is_container_name("testcase"));
        assert!(is_container_name("db.1_primary-a"));
        assert!(is_container_name("9lives"));
        assert!(!is_container_name("a"));
        assert!(!is_container_name("_hidden"));
        assert!(!is_container_name("has space"));
        assert!(!is_container_name(r#""quoted""#));
    }

    #[test]
    fn workdirs() {
        assert!(is_workdir("/data"));
        assert!(is_workdir("\\work\\bin"));
        assert!(is_workdir("~/src/app-1.0#main@x"));
        assert!(!is_workdir(""));
        assert!(!is_workdir("/my dir"));
        assert!(!is_workdir("/a:b"));
    }

    #[test]
    fn attach_targets() {
        assert!(is_attach_target("stdin"));
        assert!(is_attach_target("STDOUT"));
        assert!(is_attach_target("StdErr"));
        assert!(!is_attach_target("stdio"));
        assert!(!is_attach_target(""));
    }

    #[test]
    fn memory_is_normalized_to_megabytes() {
        assert_eq!(parse_memory("1024m"), Some(1024));
        assert_eq!(parse_memory("1g"), Some(1024));
        assert_eq!(parse_memory("1G"), Some(1024));
        assert_eq!(parse_memory("1048576b"), Some(1));
        assert_eq!(parse_memory("1048575b"), Some(0));
        assert_eq!(parse_memory("1024k"), Some(1));
        assert_eq!(parse_memory("512M"), Some(512));
    }

    #[test]
    fn malformed_memory_is_rejected() {
        assert_eq!(parse_memory(""), None);
        assert_eq!(parse_memory("m"), None);
        assert_eq!(parse_memory("1024"), None);
        assert_eq!(parse_memory("5MB"), None);
        assert_eq!(parse_memory("1.5g"), None);
        assert_eq!(parse_memory("-1m"), None);
        assert_eq!(parse_memory("1t"), None);
        assert_eq!(parse_memory("99999999999999999999999g"), None);
        assert_eq!(parse_memory("18014398509481984g"), None);
    }
}
