use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    adapter::{Adapter, FunctionArgument},
    env::Environment,
    errors::FunctionError,
    function::{optional_string, string_argument},
    pattern::CompiledPattern,
};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Compile the pattern at `idx` with the optional flags that follow it.
fn pattern_argument<'h, A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
    idx: usize,
    input: &'h str,
) -> Result<CompiledPattern<'h>, FunctionError> {
    let runtime = env.adapter();
    let pattern = string_argument(runtime, args, idx);
    let flags = string_argument(runtime, args, idx + 1);
    CompiledPattern::new(&pattern, &flags, input, env.pattern_config())
}

/// `matches(input, pattern[, flags])`
pub fn matches<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let input = string_argument(runtime, args, 0);
    let pattern = pattern_argument(env, args, 1, &input)?;
    Ok(runtime.make_boolean(pattern.is_match()))
}

/// `tokenize(input[, pattern[, flags]])`
///
/// Without a pattern the input is split on runs of whitespace and empty
/// tokens are dropped. With a pattern every segment is kept, empty or not.
pub fn tokenize<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let input = string_argument(runtime, args, 0);

    let tokens: Vec<String> = if optional_string(runtime, args, 1).is_some() {
        pattern_argument(env, args, 1, &input)?
            .split()
            .into_iter()
            .map(str::to_owned)
            .collect()
    } else {
        WHITESPACE
            .split(&input)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    };

    Ok(runtime.make_array(
        tokens
            .into_iter()
            .map(|s| runtime.make_string(s))
            .collect(),
    ))
}

/// `replace(input, pattern, replacement[, flags])`
pub fn replace<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let input = string_argument(runtime, args, 0);
    let pattern = string_argument(runtime, args, 1);
    let replacement = string_argument(runtime, args, 2);
    let flags = string_argument(runtime, args, 3);

    let compiled = CompiledPattern::new(&pattern, &flags, &input, env.pattern_config())?;
    let template = compiled.template(&replacement)?;
    Ok(runtime.make_string(compiled.replace_all(&template)))
}
