//! Extra functions for JMESPath-style query engines: string transforms,
//! regular expression matching and arithmetic.
//!
//! Every function declares an argument contract, a [`Signature`], that is
//! checked before its body runs. The regular expression functions share a
//! small flag alphabet:
//!
//! - `i` case-insensitive matching
//! - `m` `^` and `$` match at line boundaries
//! - `s` `.` matches a line terminator
//! - `q` the pattern is literal text, not a regular expression
//!
//! ## Calling standard functions
//!
//! ```
//! use jmespath_contrib::{call, errors::FunctionError, FunctionArgument};
//! use serde_json::json;
//!
//! fn main() -> Result<(), FunctionError> {
//!     let rv = call(
//!         "replace",
//!         &[
//!             json!("abracadabra").into(),
//!             json!("a(.)").into(),
//!             json!("a$1$1").into(),
//!         ],
//!     )?;
//!     assert_eq!(rv, json!("abbraccaddabbra"));
//!     Ok(())
//! }
//! ```
//!
//! Patterns that match a zero-length substring of the input are rejected.
//!
//! ```text
//! Error: FunctionError { kind: PatternSyntaxError, msg: "pattern matches zero-length string", function: "tokenize" }
//! ```
//!
//! ## Custom functions and hosts
//!
//! A host binds its own value representation by implementing [`Adapter`]
//! and building an [`Environment`] around it. Add functions with
//! [`Environment::add_function`].
//!
//! ```
//! use jmespath_contrib::{
//!     errors::FunctionError, string_argument, Adapter, ArgumentType, Environment,
//!     FunctionArgument, FunctionSpec, JsonAdapter, Signature,
//! };
//! use serde_json::{json, Value};
//!
//! fn shout(
//!     env: &Environment<JsonAdapter>,
//!     args: &[FunctionArgument<Value>],
//! ) -> Result<Value, FunctionError> {
//!     let runtime = env.adapter();
//!     Ok(runtime.make_string(string_argument(runtime, args, 0) + "!"))
//! }
//!
//! let mut env = Environment::standard();
//! env.add_function(FunctionSpec::new(
//!     "shout",
//!     Signature::exact(vec![ArgumentType::String]),
//!     shout,
//! ));
//!
//! assert_eq!(env.call("shout", &[json!("hey").into()]).unwrap(), json!("hey!"));
//! ```
pub mod adapter;
pub mod env;
pub mod errors;
pub mod function;
pub mod math_functions;
pub mod pattern;
pub mod regex_functions;
pub mod standard;
pub mod string_functions;

pub use adapter::{Adapter, FunctionArgument, JsonAdapter, ValueKind};
pub use env::Environment;
pub use errors::{FunctionError, FunctionErrorType};
pub use function::{
    number_argument, optional_string, standard_functions, string_argument, ArgumentType, Arity,
    FunctionRegister, FunctionSpec, Signature,
};
pub use pattern::{CompiledPattern, FlagSet, PatternConfig};
pub use standard::{call, check_call};
