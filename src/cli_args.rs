/*!
 * Lenient command line pre-processing.
 *
 * Unknown options are not an error for this tool: they are reported and
 * dropped before the arguments reach clap. Which options are known, and
 * whether they take a value, is read from the clap `Command` itself.
 */

use clap::Command;

/// Split raw arguments into those clap should see and unknown options.
///
/// The first element is the program name and is always kept. Everything
/// after a bare `--` is kept as positional.
pub fn filter_unknown_options<I>(cmd: &Command, args: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = String>,
{
    let mut cmd = cmd.clone();
    cmd.build();

    let mut kept = Vec::new();
    let mut ignored = Vec::new();
    let mut args = args.into_iter();

    if let Some(program) = args.next() {
        kept.push(program);
    }

    while let Some(arg) = args.next() {
        if arg == "--" {
            kept.push(arg);
            kept.extend(args.by_ref());
            break;
        }

        if arg == "-" || !arg.starts_with('-') {
            kept.push(arg);
            continue;
        }

        match classify(&cmd, &arg) {
            OptionKind::Unknown => ignored.push(arg),
            OptionKind::Flag => kept.push(arg),
            OptionKind::NeedsValue => {
                kept.push(arg);
                if let Some(value) = args.next() {
                    kept.push(value);
                }
            }
        }
    }

    (kept, ignored)
}

#[derive(Debug, PartialEq)]
enum OptionKind {
    Unknown,
    /// Known, and complete as written
    Flag,
    /// Known, and the value is the next argument
    NeedsValue,
}

fn classify(cmd: &Command, arg: &str) -> OptionKind {
    if let Some(long) = arg.strip_prefix("--") {
        let (name, inline_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };

        return match cmd.get_arguments().find(|a| a.get_long() == Some(name)) {
            None => OptionKind::Unknown,
            Some(a) if a.get_action().takes_values() && !inline_value => OptionKind::NeedsValue,
            Some(_) => OptionKind::Flag,
        };
    }

    let cluster = &arg[1..];
    let mut chars = cluster.chars();
    let Some(first) = chars.next() else {
        return OptionKind::Unknown;
    };

    let find_short = |c: char| cmd.get_arguments().find(|a| a.get_short() == Some(c));

    match find_short(first) {
        None => OptionKind::Unknown,
        Some(a) if a.get_action().takes_values() => {
            if cluster.len() > first.len_utf8() {
                OptionKind::Flag
            } else {
                OptionKind::NeedsValue
            }
        }
        Some(_) => {
            let all_flags = chars.all(|c| find_short(c).is_some_and(|a| !a.get_action().takes_values()));
            if all_flags { OptionKind::Flag } else { OptionKind::Unknown }
        }
    }
}
