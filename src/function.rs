use std::{collections::HashMap, fmt};

use log::debug;

use crate::{
    adapter::{Adapter, FunctionArgument, ValueKind},
    env::Environment,
    errors::FunctionError,
    math_functions, regex_functions, string_functions,
};

/// The kind a parameter requires of its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentType {
    /// Any materialized value, including null. Never an expression reference.
    Any,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ArgumentType {
    pub fn accepts(&self, kind: ValueKind) -> bool {
        match self {
            ArgumentType::Any => kind != ValueKind::Expression,
            ArgumentType::Null => kind == ValueKind::Null,
            ArgumentType::Boolean => kind == ValueKind::Boolean,
            ArgumentType::Number => kind == ValueKind::Number,
            ArgumentType::String => kind == ValueKind::String,
            ArgumentType::Array => kind == ValueKind::Array,
            ArgumentType::Object => kind == ValueKind::Object,
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentType::Any => f.write_str("any value"),
            ArgumentType::Null => f.write_str("null"),
            ArgumentType::Boolean => f.write_str("boolean"),
            ArgumentType::Number => f.write_str("number"),
            ArgumentType::String => f.write_str("string"),
            ArgumentType::Array => f.write_str("array"),
            ArgumentType::Object => f.write_str("object"),
        }
    }
}

/// Inclusive bounds on the number of arguments. `max` of `None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    pub fn exact(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.map_or(true, |max| count <= max)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{}", max),
            Some(max) => write!(f, "{} to {}", self.min, max),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// Argument contract of a function: an arity bound and per-position types.
///
/// Positions past the end of `param_types` use the last declared type, so a
/// variable arity function declares its repeated type once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub param_types: Vec<ArgumentType>,
    pub arity: Arity,
}

impl Signature {
    pub fn exact(param_types: Vec<ArgumentType>) -> Self {
        let arity = Arity::exact(param_types.len());
        Self { param_types, arity }
    }

    pub fn ranged(min: usize, max: usize, param_type: ArgumentType) -> Self {
        Self {
            param_types: vec![param_type],
            arity: Arity::between(min, max),
        }
    }

    pub fn variadic(min: usize, param_type: ArgumentType) -> Self {
        Self {
            param_types: vec![param_type],
            arity: Arity::at_least(min),
        }
    }

    pub fn param_type(&self, idx: usize) -> Option<&ArgumentType> {
        self.param_types.get(idx).or_else(|| self.param_types.last())
    }

    /// Only needs the argument count, so a host can call this before
    /// evaluating any argument.
    pub fn check_arity(&self, func_name: &str, count: usize) -> Result<(), FunctionError> {
        if self.arity.accepts(count) {
            Ok(())
        } else {
            Err(FunctionError::arity(
                format!(
                    "invalid arity calling \"{}\" (expected {} but was {})",
                    func_name, self.arity, count
                ),
                func_name,
            ))
        }
    }

    /// Checks arity, then every argument left to right. Reports the first
    /// mismatch.
    pub fn validate<A: Adapter>(
        &self,
        func_name: &str,
        runtime: &A,
        args: &[FunctionArgument<A::Value>],
    ) -> Result<(), FunctionError> {
        self.check_arity(func_name, args.len())?;

        for (idx, arg) in args.iter().enumerate() {
            let actual = runtime.kind_of_argument(arg);
            if let Some(expected) = self.param_type(idx) {
                if !expected.accepts(actual) {
                    return Err(FunctionError::typ(
                        format!(
                            "invalid argument type calling \"{}\": argument {} expected {} but was {}",
                            func_name,
                            idx + 1,
                            expected,
                            actual
                        ),
                        func_name,
                    ));
                }
            }
        }

        Ok(())
    }
}

pub type FunctionBody<A> = fn(
    &Environment<A>,
    &[FunctionArgument<<A as Adapter>::Value>],
) -> Result<<A as Adapter>::Value, FunctionError>;

pub struct FunctionSpec<A: Adapter> {
    pub name: String,
    pub sig: Signature,
    pub body: FunctionBody<A>,
}

impl<A: Adapter> FunctionSpec<A> {
    pub fn new(name: &str, sig: Signature, body: FunctionBody<A>) -> Self {
        Self {
            name: name.to_owned(),
            sig,
            body,
        }
    }

    pub fn call(
        &self,
        env: &Environment<A>,
        args: &[FunctionArgument<A::Value>],
    ) -> Result<A::Value, FunctionError> {
        self.sig
            .validate(&self.name, env.adapter(), args)
            .and_then(|_| (self.body)(env, args))
            .map_err(|err| {
                debug!("call to {}() rejected: {}", self.name, err);
                err.within(&self.name)
            })
    }
}

impl<A: Adapter> fmt::Debug for FunctionSpec<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) arity {}",
            self.name, self.sig.param_types, self.sig.arity
        )
    }
}

pub type FunctionRegister<A> = HashMap<String, FunctionSpec<A>>;

pub fn standard_functions<A: Adapter>() -> FunctionRegister<A> {
    use ArgumentType::*;

    let specs: Vec<FunctionSpec<A>> = vec![
        FunctionSpec::new("concat", Signature::variadic(2, Any), string_functions::concat),
        FunctionSpec::new(
            "upper_case",
            Signature::exact(vec![String]),
            string_functions::upper_case,
        ),
        FunctionSpec::new(
            "lower_case",
            Signature::exact(vec![String]),
            string_functions::lower_case,
        ),
        FunctionSpec::new(
            "normalize_space",
            Signature::exact(vec![String]),
            string_functions::normalize_space,
        ),
        FunctionSpec::new(
            "translate",
            Signature::exact(vec![String, String, String]),
            string_functions::translate,
        ),
        FunctionSpec::new(
            "substring_before",
            Signature::exact(vec![Any, Any]),
            string_functions::substring_before,
        ),
        FunctionSpec::new(
            "substring_after",
            Signature::exact(vec![Any, Any]),
            string_functions::substring_after,
        ),
        FunctionSpec::new(
            "matches",
            Signature::ranged(2, 3, String),
            regex_functions::matches,
        ),
        FunctionSpec::new(
            "tokenize",
            Signature::ranged(1, 3, String),
            regex_functions::tokenize,
        ),
        FunctionSpec::new(
            "replace",
            Signature::ranged(3, 4, String),
            regex_functions::replace,
        ),
        FunctionSpec::new(
            "add",
            Signature::exact(vec![Number, Number]),
            math_functions::add,
        ),
        FunctionSpec::new(
            "subtract",
            Signature::exact(vec![Number, Number]),
            math_functions::subtract,
        ),
        FunctionSpec::new(
            "multiply",
            Signature::exact(vec![Number, Number]),
            math_functions::multiply,
        ),
        FunctionSpec::new(
            "multiple",
            Signature::exact(vec![Number, Number]),
            math_functions::multiply,
        ),
        FunctionSpec::new(
            "divide",
            Signature::exact(vec![Number, Number]),
            math_functions::divide,
        ),
    ];

    specs
        .into_iter()
        .map(|spec| (spec.name.clone(), spec))
        .collect()
}

/// String argument at `idx`, or `None` if the call didn't pass one.
/// Null coerces to the empty string.
pub fn optional_string<A: Adapter>(
    runtime: &A,
    args: &[FunctionArgument<A::Value>],
    idx: usize,
) -> Option<String> {
    let value = args.get(idx)?.value()?;
    match runtime.kind_of(value) {
        ValueKind::Null => Some(String::new()),
        _ => Some(runtime.to_string_value(value)),
    }
}

pub fn string_argument<A: Adapter>(
    runtime: &A,
    args: &[FunctionArgument<A::Value>],
    idx: usize,
) -> String {
    optional_string(runtime, args, idx).unwrap_or_default()
}

pub fn number_argument<A: Adapter>(
    runtime: &A,
    args: &[FunctionArgument<A::Value>],
    idx: usize,
) -> f64 {
    args.get(idx)
        .and_then(FunctionArgument::value)
        .map_or(f64::NAN, |v| runtime.to_numeric_value(v))
}
