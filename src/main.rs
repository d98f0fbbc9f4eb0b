use std::{error::Error, fs};

use jmespath_contrib::{call, FunctionArgument};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Call {
    function: String,
    #[serde(default)]
    args: Vec<CallArgument>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CallArgument {
    Expression { expression: String },
    Value(Value),
}

impl From<CallArgument> for FunctionArgument<Value> {
    fn from(arg: CallArgument) -> Self {
        match arg {
            CallArgument::Expression { expression } => FunctionArgument::Expression(expression),
            CallArgument::Value(v) => FunctionArgument::Value(v),
        }
    }
}

const DEMO: &str = r#"
    [
        {"function": "concat", "args": ["Ciao", null, "!", [], 1]},
        {"function": "tokenize", "args": [" red green blue "]},
        {"function": "tokenize", "args": [" red green blue ", "\\s+"]},
        {"function": "replace", "args": ["abracadabra", "a.*?a", "*"]},
        {"function": "matches", "args": ["b^az", "^A", "qi"]},
        {"function": "translate", "args": ["abcabc", "abc", "AB"]},
        {"function": "divide", "args": [5, 0]},
        {"function": "tokenize", "args": ["abba", ".?"]},
        {"function": "upper_case", "args": [{"expression": "foo"}]}
    ]"#;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Calls come from the file named on the command line, or the demo list.
    let data = match std::env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => DEMO.to_owned(),
    };

    let calls: Vec<Call> = serde_json::from_str(&data)?;

    for Call { function, args } in calls {
        let args: Vec<FunctionArgument<Value>> = args.into_iter().map(Into::into).collect();
        match call(&function, &args) {
            Ok(rv) => println!("{}(..) => {}", function, rv),
            Err(err) => println!("{}(..) => {}", function, err),
        }
    }

    Ok(())
}
