use alg_rs::{
    command::{Command, HELP},
    check_answer,
    evaluate,
    generate_problem,
    graph,
    simplify,
    solve,
    Error,
    Problem,
};
use rand::rngs::ThreadRng;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, process};
use tracing_subscriber::EnvFilter;

/// State kept between the lines of a session.
#[derive(Default)]
struct Session {
    /// The last practice problem generated, if any.
    problem: Option<Problem>,

    /// The random source for practice problems.
    rng: ThreadRng,
}

/// Report the error to stderr, pointing into the text the engine was given.
fn report(err: &Error, text: &str) {
    if err.report_to_stderr("input", text).is_err() {
        eprintln!("{}", err);
    }
}

impl Session {
    /// Parses and runs one line, printing the result or the failure.
    fn run_line(&mut self, line: &str) {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err);
                return;
            },
        };

        match command {
            Command::Solve(text) => match solve(text) {
                Ok(solution) => solution.steps.iter()
                    .enumerate()
                    .for_each(|(i, step)| println!("{}. {}: {}", i + 1, step.description, step.equation)),
                Err(err) => report(&err, text),
            },
            Command::Simplify(text) => match simplify(text) {
                Ok(simplification) => println!("{}", simplification.simplified),
                Err(err) => report(&err, text),
            },
            Command::Graph(text, options) => match graph(text, &options) {
                Ok(samples) => {
                    let count = samples.len();
                    samples.into_iter().for_each(|sample| println!("{}", sample));
                    println!("{} points", count);
                },
                Err(err) => report(&err, text),
            },
            Command::Eval(text, bindings) => match evaluate(text, &bindings) {
                Ok(value) => println!("{}", value),
                Err(err) => report(&err, text),
            },
            Command::Practice => {
                let problem = generate_problem(&mut self.rng);
                println!("Solve for x: {}", problem);
                self.problem = Some(problem);
            },
            Command::Check(answer) => match &self.problem {
                Some(problem) => println!("{}", check_answer(answer, problem.answer).message),
                None => eprintln!("there is no practice problem to check; type `practice` to get one"),
            },
            Command::Help => println!("{}", HELP),
            Command::Empty => (),
        }
    }

    /// Runs every line of the given source.
    fn run_source(&mut self, source: &str) {
        source.lines().for_each(|line| self.run_line(line));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args = std::env::args();
    args.next();

    let mut session = Session::default();

    if let Some(filename) = args.next() {
        // run commands from a file
        match fs::read_to_string(&filename) {
            Ok(source) => session.run_source(&source),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read commands from stdin
        let mut source = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut source) {
            eprintln!("could not read stdin: {}", err);
            process::exit(1);
        }
        session.run_source(&source);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("could not start the editor: {}", err);
                process::exit(1);
            },
        };
        println!("type `help` for a list of commands");

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            session.run_line(&input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
