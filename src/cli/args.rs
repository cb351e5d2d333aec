//! Tokenization of raw command-line arguments.
//!
//! The option grammar here is the engine's own: `--name` contributes a long
//! option, `-abc` is short-flag bundling (one option per letter), everything
//! else is a positional argument.

/// A tokenized command line: option names deduplicated in first-appearance
/// order, positional arguments exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInvocation {
    pub options: Vec<String>,
    pub args: Vec<String>,
}

/// Splits raw tokens into option names and positional arguments.
///
/// Options are deduplicated; positionals keep their order and multiplicity.
/// Any input is accepted.
pub fn tokenize<I, S>(tokens: I) -> RawInvocation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut invocation = RawInvocation::default();

    for token in tokens {
        let token = token.as_ref();

        if let Some(name) = token.strip_prefix("--") {
            push_unique(&mut invocation.options, name.trim().to_string());
            continue;
        }

        if let Some(letters) = token.strip_prefix('-') {
            for letter in letters.trim().chars() {
                push_unique(&mut invocation.options, letter.to_string());
            }
            continue;
        }

        invocation.args.push(token.to_string());
    }

    invocation
}

fn push_unique(items: &mut Vec<String>, item: String) {
    if !items.contains(&item) {
        items.push(item);
    }
}
