use itertools::Itertools;

use crate::{
    adapter::{Adapter, FunctionArgument, ValueKind},
    env::Environment,
    errors::FunctionError,
    function::string_argument,
};

/// Joins the string form of every argument. Nulls contribute nothing.
pub fn concat<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let joined: String = args
        .iter()
        .filter_map(FunctionArgument::value)
        .filter(|v| runtime.kind_of(v) != ValueKind::Null)
        .map(|v| runtime.to_string_value(v))
        .collect();

    Ok(runtime.make_string(joined))
}

pub fn upper_case<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let s = string_argument(runtime, args, 0);
    Ok(runtime.make_string(s.chars().flat_map(char::to_uppercase).collect()))
}

pub fn lower_case<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let s = string_argument(runtime, args, 0);
    Ok(runtime.make_string(s.chars().flat_map(char::to_lowercase).collect()))
}

pub fn normalize_space<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let s = string_argument(runtime, args, 0);
    Ok(runtime.make_string(s.split_whitespace().join(" ")))
}

/// `translate(input, map, trans)`
///
/// A character found in `map` is replaced by the character at the same index
/// in `trans`, or removed if `trans` is too short. The first occurrence in
/// `map` wins.
pub fn translate<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let input = string_argument(runtime, args, 0);
    let map: Vec<char> = string_argument(runtime, args, 1).chars().collect();
    let trans: Vec<char> = string_argument(runtime, args, 2).chars().collect();

    let translated: String = input
        .chars()
        .filter_map(|c| match map.iter().position(|&m| m == c) {
            Some(idx) => trans.get(idx).copied(),
            None => Some(c),
        })
        .collect();

    Ok(runtime.make_string(translated))
}

pub fn substring_before<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let haystack = string_argument(runtime, args, 0);
    let needle = string_argument(runtime, args, 1);

    let before = match haystack.find(&needle) {
        Some(idx) if !needle.is_empty() => &haystack[..idx],
        _ => "",
    };

    Ok(runtime.make_string(before.to_owned()))
}

pub fn substring_after<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let haystack = string_argument(runtime, args, 0);
    let needle = string_argument(runtime, args, 1);

    let after = match haystack.find(&needle) {
        Some(idx) if !needle.is_empty() => &haystack[idx + needle.len()..],
        _ => "",
    };

    Ok(runtime.make_string(after.to_owned()))
}
