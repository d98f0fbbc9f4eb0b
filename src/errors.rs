use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionErrorType {
    ArityError,
    ArgumentTypeError,
    PatternSyntaxError,
    NameError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionError {
    pub kind: FunctionErrorType,
    pub msg: String,
    pub function: String,
}

impl FunctionError {
    pub fn new(kind: FunctionErrorType, msg: String, function: &str) -> Self {
        Self {
            kind,
            msg,
            function: function.to_owned(),
        }
    }

    pub fn arity(msg: String, function: &str) -> Self {
        Self::new(FunctionErrorType::ArityError, msg, function)
    }

    pub fn typ(msg: String, function: &str) -> Self {
        Self::new(FunctionErrorType::ArgumentTypeError, msg, function)
    }

    pub fn pattern(msg: String, function: &str) -> Self {
        Self::new(FunctionErrorType::PatternSyntaxError, msg, function)
    }

    pub fn name(msg: String, function: &str) -> Self {
        Self::new(FunctionErrorType::NameError, msg, function)
    }

    /// Attach the name of the function that raised this error. Pattern
    /// errors are created below the function layer and don't know it yet.
    pub fn within(mut self, function: &str) -> Self {
        if self.function.is_empty() {
            self.function = function.to_owned();
        }
        self
    }
}

impl fmt::Display for FunctionErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionErrorType::ArityError => f.write_str("arity error:"),
            FunctionErrorType::ArgumentTypeError => f.write_str("type error:"),
            FunctionErrorType::PatternSyntaxError => f.write_str("pattern syntax error:"),
            FunctionErrorType::NameError => f.write_str("name error:"),
        }
    }
}

impl std::error::Error for FunctionError {}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.msg)
    }
}
