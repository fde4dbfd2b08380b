/// Argument slots per line, counting the terminating sentinel.
pub const MAX_ARGS: usize = 128;

const DELIMITERS: [char; 4] = [' ', '\t', '\r', '\n'];

/// Splits a command line into at most `MAX_ARGS - 1` tokens.
///
/// Runs of delimiters collapse, so no token is ever empty. There is no
/// quoting or escaping; tokens past the limit are dropped.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(&DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .take(MAX_ARGS - 1)
        .map(str::to_owned)
        .collect()
}

/// Removes a trailing `&` token, returning whether one was present.
pub fn strip_background(args: &mut Vec<String>) -> bool {
    if args.last().is_some_and(|last| last == "&") {
        args.pop();
        true
    } else {
        false
    }
}
