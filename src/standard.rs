use lazy_static::lazy_static;
use serde_json::Value;

use crate::{
    adapter::{FunctionArgument, JsonAdapter},
    env::Environment,
    errors::FunctionError,
};

lazy_static! {
    static ref ENV: Environment<JsonAdapter> = Environment::standard();
}

/// Call a standard function with `serde_json` argument values.
pub fn call(name: &str, args: &[FunctionArgument<Value>]) -> Result<Value, FunctionError> {
    ENV.call(name, args)
}

/// Resolve a standard function and check its arity for `count` arguments.
pub fn check_call(name: &str, count: usize) -> Result<(), FunctionError> {
    ENV.check_call(name, count).map(|_| ())
}
