use log::trace;

use crate::{
    adapter::{Adapter, FunctionArgument, JsonAdapter},
    errors::FunctionError,
    function::{standard_functions, FunctionRegister, FunctionSpec},
    pattern::PatternConfig,
};

/// The runtime a function call is evaluated in: the host value adapter, the
/// registered functions and pattern compilation limits.
pub struct Environment<A: Adapter> {
    adapter: A,
    pub function_register: FunctionRegister<A>,
    pub pattern_config: PatternConfig,
}

impl Environment<JsonAdapter> {
    pub fn standard() -> Self {
        Self::with_standard_functions(JsonAdapter::new())
    }
}

impl Default for Environment<JsonAdapter> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<A: Adapter> Environment<A> {
    /// An environment with no functions registered.
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            function_register: FunctionRegister::new(),
            pattern_config: PatternConfig::default(),
        }
    }

    pub fn with_standard_functions(adapter: A) -> Self {
        Self {
            adapter,
            function_register: standard_functions(),
            pattern_config: PatternConfig::default(),
        }
    }

    pub fn with_pattern_config(mut self, config: PatternConfig) -> Self {
        self.pattern_config = config;
        self
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn pattern_config(&self) -> &PatternConfig {
        &self.pattern_config
    }

    /// Register `spec`, replacing any function with the same name.
    pub fn add_function(&mut self, spec: FunctionSpec<A>) {
        self.function_register.insert(spec.name.clone(), spec);
    }

    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.function_register.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn resolve(&self, name: &str) -> Result<&FunctionSpec<A>, FunctionError> {
        self.function_register
            .get(name)
            .ok_or_else(|| FunctionError::name(format!("unknown function '{}'", name), name))
    }

    /// Resolve `name` and check a call with `count` arguments against its
    /// arity. Argument values aren't needed.
    pub fn check_call(&self, name: &str, count: usize) -> Result<&FunctionSpec<A>, FunctionError> {
        let spec = self.resolve(name)?;
        spec.sig.check_arity(name, count)?;
        Ok(spec)
    }

    pub fn call(
        &self,
        name: &str,
        args: &[FunctionArgument<A::Value>],
    ) -> Result<A::Value, FunctionError> {
        trace!("calling {}() with {} argument(s)", name, args.len());
        self.resolve(name)?.call(self, args)
    }
}
