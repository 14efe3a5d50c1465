use alg_rs::{
    check_answer,
    evaluate,
    generate_problem,
    graph,
    simplify,
    solve,
    Category,
    Sample,
    SampleOptions,
    ANSWER_TOLERANCE,
};
use assert_float_eq::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn solve_documented_example() {
    let solution = solve("2x + 5 = 13").unwrap();
    assert_eq!(solution.value, 4.0);

    let descriptions = solution.steps.iter()
        .map(|step| step.description.as_str())
        .collect::<Vec<_>>();
    assert_eq!(descriptions, vec![
        "Original equation",
        "Subtract 5 from both sides",
        "Simplify",
        "Divide both sides by 2",
        "Solution",
    ]);
    assert_eq!(solution.steps[4].equation, "x = 4.00");
}

#[test]
fn solve_negative_constant() {
    let solution = solve("5x - 10 = 0").unwrap();
    assert_eq!(solution.value, 2.0);
    assert_eq!(solution.steps[4].equation, "x = 2.00");
}

#[test]
fn solve_zero_coefficient() {
    assert_eq!(solve("0x + 5 = 3").unwrap_err().category(), Category::DivisionByZero);
    assert_eq!(solve("0x + 5 = 5").unwrap_err().category(), Category::DivisionByZero);
}

#[test]
fn solve_malformed() {
    for text in ["x + = 3", "2x + 5", "x = 1 = 2", "2x + (3 = 5", "2x # 1 = 3", ""] {
        assert_eq!(solve(text).unwrap_err().category(), Category::Syntax, "{:?}", text);
    }
}

#[test]
fn solve_unsupported_shapes() {
    for text in ["x^2 = 4", "x + y = 3", "2x = x + 1", "sin(x) = 0"] {
        assert_eq!(
            solve(text).unwrap_err().category(),
            Category::UnsupportedEquationShape,
            "{:?}",
            text,
        );
    }
}

#[test]
fn simplify_examples() {
    let cases = [
        ("2x + 3x", "5x"),
        ("5a + 2b - 3a + b", "2a+3b"),
        ("4x + 2 - x + 5", "3x+7"),
    ];
    for (input, expected) in cases {
        let simplification = simplify(input).unwrap();
        assert_eq!(simplification.original, input);
        assert_eq!(simplification.simplified, expected);
        assert_eq!(simplification.steps, vec![
            "Identify like terms",
            "Combine coefficients of like terms",
            "Simplify constants",
        ]);
    }
}

#[test]
fn graph_square() {
    let options = SampleOptions::default().step(1.0);
    let samples = graph("x^2", &options).unwrap();
    assert_eq!(samples.len(), 21);
    assert!(samples.as_slice().contains(&Sample::new(3.0, 9.0)));
    assert!(samples.as_slice().contains(&Sample::new(-3.0, 9.0)));
}

#[test]
fn graph_sqrt_skips_negative() {
    let options = SampleOptions::default().step(1.0);
    let samples = graph("sqrt(x)", &options).unwrap();
    assert_eq!(samples.len(), 11);
    assert!(samples.into_iter().all(|sample| sample.x >= 0.0));
}

#[test]
fn graph_errors() {
    let options = SampleOptions::default();
    assert_eq!(graph("sqrt(-1 - x^2)", &options).unwrap_err().category(), Category::NoValidSamples);
    assert_eq!(graph("x +", &options).unwrap_err().category(), Category::Syntax);
    assert_eq!(
        graph("x", &options.range(0.0, 1.0).step(0.0)).unwrap_err().category(),
        Category::InvalidOptions,
    );
}

#[test]
fn practice_problems_are_solvable() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let problem = generate_problem(&mut rng);
        let solution = solve(&problem.equation).unwrap();
        assert_f64_near!(alg_rs::round2(solution.value), problem.answer, 4);
        assert!(check_answer(solution.value, problem.answer).correct);
        assert!(!check_answer(problem.answer + 2.0 * ANSWER_TOLERANCE, problem.answer).correct);
    }
}

#[test]
fn deeply_nested_input_is_rejected() {
    let nested = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(solve(&format!("{} = 3", nested)).unwrap_err().category(), Category::Syntax);
    assert_eq!(simplify(&nested).unwrap_err().category(), Category::Syntax);
    assert_eq!(
        graph(&nested, &SampleOptions::default()).unwrap_err().category(),
        Category::Syntax,
    );
}

#[test]
fn simplified_numeric_base_keeps_value() {
    let simplification = simplify("3*2^x").unwrap();
    assert_eq!(simplification.simplified, "3*2^x");
    assert_eq!(evaluate(&simplification.simplified, &[('x', 1.0)]).unwrap(), 6.0);
    assert_eq!(simplify("2^x + 2^x").unwrap().simplified, "2*2^x");
}

/// Builds the text of a sum of linear terms, such as `3x - 2y + 5`.
fn linear_text(terms: &[(i32, Option<char>)]) -> String {
    let mut text = String::new();
    for (i, (coefficient, variable)) in terms.iter().enumerate() {
        let sign = if *coefficient < 0 { "-" } else { "+" };
        if i == 0 {
            if *coefficient < 0 {
                text.push('-');
            }
        } else {
            text.push_str(&format!(" {} ", sign));
        }
        text.push_str(&coefficient.unsigned_abs().to_string());
        if let Some(variable) = variable {
            text.push(*variable);
        }
    }
    text
}

fn linear_terms() -> impl Strategy<Value = Vec<(i32, Option<char>)>> {
    prop::collection::vec(
        (-50..50i32, prop::option::of(prop::sample::select(vec!['a', 'b', 'x', 'y']))),
        1..8,
    )
}

/// A term of a generated expression, with an integer coefficient.
#[derive(Debug, Clone, Copy)]
enum Term {
    Constant(i32),
    Linear(i32, char),
    Power(i32, char),
    Square(i32, char),
    Reciprocal(i32, char),
    Sine(i32, char),
}

impl Term {
    fn text(self) -> String {
        match self {
            Term::Constant(c) => format!("{}", c),
            Term::Linear(c, v) => format!("{}{}", c, v),
            Term::Power(c, v) => format!("{}*2^{}", c, v),
            Term::Square(c, v) => format!("{}*{}^2", c, v),
            Term::Reciprocal(c, v) => format!("{}/{}", c, v),
            Term::Sine(c, v) => format!("{}*sin({})", c, v),
        }
    }
}

fn mixed_terms() -> impl Strategy<Value = Vec<Term>> {
    let variable = prop::sample::select(vec!['a', 'x', 'y']);
    let term = (-9..10i32, variable, 0..6u8).prop_map(|(c, v, kind)| match kind {
        0 => Term::Constant(c),
        1 => Term::Linear(c, v),
        2 => Term::Power(c, v),
        3 => Term::Square(c, v),
        4 => Term::Reciprocal(c, v),
        _ => Term::Sine(c, v),
    });
    prop::collection::vec(term, 1..8)
}

fn mixed_text(terms: &[Term]) -> String {
    terms.iter()
        .map(|term| term.text())
        .collect::<Vec<_>>()
        .join(" + ")
}

proptest! {
    #[test]
    fn solve_is_exact(a in (-100..100i32).prop_filter("nonzero", |a| *a != 0), b in -100..100i32, c in -100..100i32) {
        let text = format!("{}x + {} = {}", a, b, c);
        let solution = solve(&text).unwrap();
        let expected = f64::from(c - b) / f64::from(a);
        prop_assert!((solution.value - expected).abs() < 1e-6);
    }

    #[test]
    fn simplify_is_idempotent(terms in linear_terms()) {
        let once = simplify(&linear_text(&terms)).unwrap().simplified;
        let twice = simplify(&once).unwrap().simplified;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn simplify_keeps_value_of_opaque_terms(terms in mixed_terms()) {
        let text = mixed_text(&terms);
        let simplified = simplify(&text).unwrap().simplified;

        for bindings in [
            [('a', 1.5), ('x', 2.0), ('y', -0.5)],
            [('a', -3.0), ('x', 0.25), ('y', 4.0)],
        ] {
            let before = evaluate(&text, &bindings).unwrap();
            let after = evaluate(&simplified, &bindings).unwrap();
            prop_assert!(
                (before - after).abs() <= 1e-9 * (1.0 + before.abs()),
                "{} = {}, but {} = {}", text, before, simplified, after,
            );
        }

        let twice = simplify(&simplified).unwrap().simplified;
        prop_assert_eq!(simplified, twice);
    }
}
