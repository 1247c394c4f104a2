use std::borrow::Cow;

/// Markers that make a message eligible for positional formatting.
const POSITIONAL_MARKERS: [&str; 4] = ["{0", "{1", "{2", "{3"];

/// Substitute `{N}` placeholders in `message` with `args[N]`.
///
/// Messages without arguments, or without any of the `{0`..`{3` markers,
/// are returned untouched. Otherwise the message is read as a positional
/// pattern: `''` is a literal quote, text between single quotes is copied
/// as-is, and a placeholder whose index has no argument prints as `{N}`.
///
/// A pattern that can't be read (a placeholder that isn't a plain index,
/// such as `{name}` or `{0,number}`, or an unbalanced brace) leaves the
/// whole message untouched.
pub fn interpolate<'a>(message: &'a str, args: &[String]) -> Cow<'a, str> {
    if args.is_empty() || !POSITIONAL_MARKERS.iter().any(|m| message.contains(m)) {
        return Cow::Borrowed(message);
    }

    match substitute(message, args) {
        Some(out) => Cow::Owned(out),
        None => Cow::Borrowed(message),
    }
}

// `None` when the pattern is malformed.
fn substitute(pattern: &str, args: &[String]) -> Option<String> {
    let extra = args.iter().map(String::len).sum::<usize>();
    let mut out = String::with_capacity(pattern.len() + extra);
    let mut chars = pattern.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        match c {
            '\'' if chars.peek() == Some(&'\'') => {
                chars.next();
                out.push('\'');
            }
            '\'' => quoted = !quoted,
            '{' if !quoted => {
                let mut inner = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => return None,
                        Some(ch) => inner.push(ch),
                    }
                }

                let index = inner.parse::<usize>().ok()?;
                match args.get(index) {
                    Some(arg) => out.push_str(arg),
                    None => {
                        out.push('{');
                        out.push_str(&index.to_string());
                        out.push('}');
                    }
                }
            }
            _ => out.push(c),
        }
    }

    Some(out)
}
