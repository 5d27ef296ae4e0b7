use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser, ValueEnum};
use env_logger::Env;

use relp_transport::algorithm::{Method, solve};
use relp_transport::data::problem::{check_balance, Problem};
use relp_transport::io::import;

/// Initial basic feasible solutions for transportation problems.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description; the demonstration problems are solved if absent
    problem_file: Option<PathBuf>,
    /// Heuristic to apply
    #[arg(short, long, value_enum, default_value_t = MethodChoice::All)]
    method: MethodChoice,
    /// Log more, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy)]
enum MethodChoice {
    NorthWest,
    Vogel,
    Russell,
    All,
}

impl MethodChoice {
    fn methods(self) -> Vec<Method> {
        match self {
            MethodChoice::NorthWest => vec![Method::NorthWestCorner],
            MethodChoice::Vogel => vec![Method::Vogel],
            MethodChoice::Russell => vec![Method::Russell],
            MethodChoice::All => Method::ALL.to_vec(),
        }
    }
}

fn main() {
    let opts: Opts = Opts::parse();

    let level = match opts.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let methods = opts.method.methods();
    match opts.problem_file {
        Some(path) => {
            println!("Reading problem file: \"{}\"...", path.to_string_lossy());
            let problem = match import::<f64>(&path) {
                Ok(problem) => problem,
                Err(error) => {
                    eprintln!("Couldn't read the problem: {}", error);
                    exit(1);
                },
            };
            run(&problem, &methods);
        },
        None => {
            for (index, problem) in demonstration().iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("Test Case {}", index + 1);
                run(problem, &methods);
            }
        },
    }
}

fn run(problem: &Problem<f64>, methods: &[Method]) {
    println!("Initial matrix:");
    println!("{}", problem);

    if !check_balance(problem) {
        println!("The problem is not balanced!");
        return;
    }

    for &method in methods {
        println!();
        println!("Applying {}:", method);
        match solve(problem, method) {
            Ok(solution) => println!("{}", solution),
            Err(error) => println!("{}", error),
        }
    }
}

/// The fixed problems solved when no file is given.
fn demonstration() -> Vec<Problem<f64>> {
    let cases = vec![
        (
            vec![100, 200, 300],
            vec![150, 250, 200],
            vec![vec![4., 3., 8.], vec![2., 7., 3.], vec![5., 6., 2.]],
        ),
        (
            vec![300, 500, 700],
            vec![250, 300, 400],
            vec![vec![8., 6., 10.], vec![3., 7., 4.], vec![9., 5., 2.]],
        ),
        (
            vec![100],
            vec![100],
            vec![vec![5.]],
        ),
        (
            vec![100, 200, 150],
            vec![80, 120, 150, 100],
            vec![vec![8., 6., 10., 9.], vec![9., 7., 4., 3.], vec![5., 2., 8., 6.]],
        ),
    ];

    cases.into_iter()
        .filter_map(|(supply, demand, cost)| match Problem::new(supply, demand, cost) {
            Ok(problem) => Some(problem),
            Err(error) => {
                eprintln!("Skipping demonstration problem: {}", error);
                None
            },
        })
        .collect()
}
