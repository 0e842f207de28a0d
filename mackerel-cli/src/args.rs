//! Go-style flag compatibility.
//!
//! The tool has always been invoked as `-apikey KEY -host ID`. clap only
//! knows single-character short flags, so single-dash spellings of the known
//! long flags are rewritten to `--name` before parsing.

use std::ffi::OsString;

/// Long flags that may be written with a single dash.
const SINGLE_DASH_FLAGS: &[&str] = &["apikey", "host"];

/// Flags whose next argument is their value when no `=value` is attached.
const VALUE_FLAGS: &[&str] = &["--apikey", "--host", "--format", "-f", "--api-base"];

/// Rewrites `-apikey`/`-host` (optionally `=value`) to their `--` form.
///
/// The value following a value-taking flag is never rewritten, even when it
/// is spelled like a flag. Everything after a bare `--` is left untouched, as
/// is any argument that is not valid UTF-8.
pub fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expect_value = false;

    for arg in args {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) if is_single_dash_long(s) => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };
        let arg = rewritten.unwrap_or(arg);

        expect_value = arg.to_str().is_some_and(|s| VALUE_FLAGS.contains(&s));
        out.push(arg);
    }

    out
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name)
}
