use jmespath_contrib::{call, FunctionArgument};
use serde_json::{json, Value};

macro_rules! args {
    ($($arg:tt),* $(,)?) => {
        vec![$(FunctionArgument::<Value>::from(json!($arg))),*]
    };
}

fn run(name: &str, args: Vec<FunctionArgument<Value>>) -> Value {
    call(name, &args).unwrap_or_else(|err| panic!("{}", err))
}

mod concat {
    use super::*;

    #[test]
    fn joins_the_parts() {
        assert_eq!(run("concat", args!["un", "grateful"]), json!("ungrateful"));
        assert_eq!(
            run(
                "concat",
                args!["Ingratitude, ", "thou ", "marble-hearted", " fiend!"]
            ),
            json!("Ingratitude, thou marble-hearted fiend!")
        );
    }

    #[test]
    fn filters_out_nulls() {
        assert_eq!(
            run(
                "concat",
                args!["Thy ", null, "old ", "groans", "", " ring", " yet", " in", " my", " ancient", " ears."]
            ),
            json!("Thy old groans ring yet in my ancient ears.")
        );
        assert_eq!(run("concat", args!["Ciao!", null]), json!("Ciao!"));
        assert_eq!(run("concat", args![null, null]), json!(""));
    }

    #[test]
    fn empty_array_is_not_skipped() {
        assert_eq!(run("concat", args!["Ciao!", []]), json!("Ciao![]"));
    }

    #[test]
    fn literals_use_their_string_form() {
        assert_eq!(run("concat", args![1, 2, 3, 4, true]), json!("1234true"));
        assert_eq!(run("concat", args![1, {"a": [1]}]), json!("1{\"a\":[1]}"));
    }

    #[test]
    #[should_panic(expected = "invalid arity calling \"concat\" (expected at least 2 but was 1)")]
    fn requires_at_least_two_arguments() {
        run("concat", args!["foo"]);
    }

    #[test]
    #[should_panic(expected = "argument 3 expected any value but was expression")]
    fn requires_values() {
        run(
            "concat",
            vec![
                json!("a").into(),
                json!("b").into(),
                FunctionArgument::expression("foo"),
            ],
        );
    }
}

mod case {
    use super::*;

    #[test]
    fn lower_case_translates_upper_case_letters() {
        assert_eq!(run("lower_case", args!["ABc!D"]), json!("abc!d"));
    }

    #[test]
    fn upper_case_translates_lower_case_letters() {
        assert_eq!(run("upper_case", args!["abCd0"]), json!("ABCD0"));
    }

    #[test]
    fn mapping_is_per_character() {
        assert_eq!(run("upper_case", args!["straße"]), json!("STRASSE"));
        assert_eq!(run("lower_case", args!["ΟΔΟΣ"]), json!("οδοσ"));
    }

    #[test]
    #[should_panic(expected = "invalid arity calling \"lower_case\" (expected 1 but was 2)")]
    fn lower_case_requires_a_single_argument() {
        run("lower_case", args!["a", "b"]);
    }

    #[test]
    #[should_panic(expected = "expected string but was array")]
    fn lower_case_requires_a_string() {
        run("lower_case", args![[3]]);
    }

    #[test]
    #[should_panic(expected = "invalid arity calling \"upper_case\" (expected 1 but was 2)")]
    fn upper_case_requires_a_single_argument() {
        run("upper_case", args!["a", "b"]);
    }

    #[test]
    #[should_panic(expected = "expected string but was object")]
    fn upper_case_requires_a_string() {
        run("upper_case", args![{}]);
    }

    #[test]
    #[should_panic(expected = "expected string but was null")]
    fn null_is_not_a_string() {
        run("upper_case", args![null]);
    }
}

mod normalize_space {
    use super::*;

    #[test]
    fn removes_leading_whitespace() {
        assert_eq!(run("normalize_space", args!["\n\t \tend"]), json!("end"));
    }

    #[test]
    fn removes_trailing_whitespace() {
        assert_eq!(run("normalize_space", args!["begin\n \t \t"]), json!("begin"));
    }

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(
            run("normalize_space", args!["begin\n\t \tend"]),
            json!("begin end")
        );
        assert_eq!(run("normalize_space", args!["  "]), json!(""));
    }

    #[test]
    #[should_panic(expected = "expected string but was object")]
    fn requires_a_string() {
        run("normalize_space", args![{}]);
    }
}

mod translate {
    use super::*;

    #[test]
    fn replaces_characters_with_their_counterpart() {
        assert_eq!(run("translate", args!["bar", "abc", "ABC"]), json!("BAr"));
    }

    #[test]
    fn removes_characters_without_counterpart() {
        assert_eq!(run("translate", args!["abcabc", "abc", "AB"]), json!("ABAB"));
    }

    #[test]
    fn leaves_characters_not_in_map_intact() {
        assert_eq!(run("translate", args!["foo.xyz", "abc", ""]), json!("foo.xyz"));
    }

    #[test]
    fn first_occurrence_in_map_wins() {
        assert_eq!(run("translate", args!["aaa", "aaa", "ABC"]), json!("AAA"));
    }

    #[test]
    fn ignores_superfluous_replacement_characters() {
        assert_eq!(run("translate", args!["aaa", "a", "ABC"]), json!("AAA"));
    }

    #[test]
    #[should_panic(expected = "argument 2 expected string but was object")]
    fn requires_a_string_as_second_argument() {
        run("translate", args!["foo", {}, "bar"]);
    }

    #[test]
    #[should_panic(expected = "invalid arity calling \"translate\" (expected 3 but was 4)")]
    fn requires_three_arguments() {
        run("translate", args!["foo", "bar", "baz", "woo"]);
    }

    #[test]
    #[should_panic(expected = "argument 1 expected string but was expression")]
    fn requires_a_value() {
        run(
            "translate",
            vec![
                FunctionArgument::expression("foo"),
                json!("bar").into(),
                json!("baz").into(),
            ],
        );
    }
}

mod substring {
    use super::*;

    #[test]
    fn substring_after_xpath_examples() {
        assert_eq!(run("substring_after", args!["tattoo", "tat"]), json!("too"));
        assert_eq!(run("substring_after", args!["tattoo", "tattoo"]), json!(""));
        assert_eq!(run("substring_after", args![{}, {}]), json!(""));
    }

    #[test]
    fn substring_before_xpath_examples() {
        assert_eq!(run("substring_before", args!["tattoo", "attoo"]), json!("t"));
        assert_eq!(run("substring_before", args!["tattoo", "tatto"]), json!(""));
        assert_eq!(run("substring_before", args![{}, {}]), json!(""));
    }

    #[test]
    fn empty_or_missing_needle_gives_empty_string() {
        assert_eq!(run("substring_before", args!["tattoo", ""]), json!(""));
        assert_eq!(run("substring_after", args!["tattoo", null]), json!(""));
        assert_eq!(run("substring_after", args!["tattoo", "x"]), json!(""));
        assert_eq!(run("substring_before", args![null, "t"]), json!(""));
    }

    #[test]
    fn non_strings_are_coerced() {
        assert_eq!(run("substring_before", args![12345, 3]), json!("12"));
        assert_eq!(run("substring_after", args![12345, 3]), json!("45"));
    }

    #[test]
    #[should_panic(expected = "invalid arity calling \"substring_after\" (expected 2 but was 3)")]
    fn substring_after_does_not_support_collation() {
        run(
            "substring_after",
            args!["abcdefgi", "--d-e-", "http://www.w3.org/2013/collation/UCA"]
        );
    }

    #[test]
    #[should_panic(expected = "argument 2 expected any value but was expression")]
    fn substring_before_requires_a_value() {
        run(
            "substring_before",
            vec![json!("foo").into(), FunctionArgument::expression("foo")],
        );
    }
}
