use log::debug;

use crate::{
    adapter::{Adapter, FunctionArgument},
    env::Environment,
    errors::FunctionError,
    function::number_argument,
};

/// Non-finite results are null, not errors.
fn binary_op<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
    op: fn(f64, f64) -> f64,
) -> Result<A::Value, FunctionError> {
    let runtime = env.adapter();
    let x = number_argument(runtime, args, 0);
    let y = number_argument(runtime, args, 1);
    let result = op(x, y);

    if result.is_finite() {
        Ok(runtime.make_number(result))
    } else {
        debug!("{} and {} give non-finite result {}", x, y, result);
        Ok(runtime.make_null())
    }
}

pub fn add<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    binary_op(env, args, |x, y| x + y)
}

pub fn subtract<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    binary_op(env, args, |x, y| x - y)
}

pub fn multiply<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    binary_op(env, args, |x, y| x * y)
}

pub fn divide<A: Adapter>(
    env: &Environment<A>,
    args: &[FunctionArgument<A::Value>],
) -> Result<A::Value, FunctionError> {
    binary_op(env, args, |x, y| x / y)
}
