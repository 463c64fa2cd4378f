use clap::{App, Arg};
use proplogic::{
    parse_formula, to_cnf, truth_table, SatResult, Solver, TableFormat, TruthTableOptions,
};

fn main() {
    env_logger::init();

    let matches = App::new("proplogic")
        .arg(
            Arg::with_name("FORMULA")
                .help("propositional formula, e.g. \"(a | b) & !c\"")
                .required(true)
                .index(1),
        )
        .arg(Arg::with_name("cnf").long("cnf").help("print the conjunctive normal form"))
        .arg(Arg::with_name("sat").long("sat").help("decide satisfiability with DPLL"))
        .arg(Arg::with_name("table").long("table").help("print the truth table (default)"))
        .arg(Arg::with_name("html").long("html").help("emit the truth table as HTML"))
        .arg(Arg::with_name("ascii").long("ascii").help("use ASCII operators in output"))
        .get_matches();

    let source = matches.value_of("FORMULA").unwrap();
    let formula = match parse_formula(source) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("parse error: {:?}", e);
            std::process::exit(-1);
        }
    };

    let pretty = !matches.is_present("ascii");

    if matches.is_present("cnf") {
        let cnf = to_cnf(&formula);
        if pretty {
            println!("{:#}", cnf.ast());
        } else {
            println!("{}", cnf.ast());
        }
    }

    if matches.is_present("table") || !(matches.is_present("cnf") || matches.is_present("sat")) {
        let options = TruthTableOptions {
            include_intermediate: true,
            pretty,
            format: if matches.is_present("html") {
                TableFormat::Html
            } else {
                TableFormat::Text
            },
        };
        println!("{}", truth_table(&formula, &options));
    }

    if matches.is_present("sat") {
        let mut solver = Solver::new(to_cnf(&formula));
        let exit_code = match solver.solve() {
            SatResult::Satisfiable(model) => {
                let mut bindings: Vec<String> = model
                    .iter()
                    .map(|(variable, value)| {
                        format!("{}={}", variable, if *value { 1 } else { 0 })
                    })
                    .collect();
                bindings.sort();
                println!("satisfiable {}", bindings.join(" "));
                0
            }
            SatResult::Unsatisfiable => {
                println!("unsatisfiable");
                1
            }
        };
        std::process::exit(exit_code);
    }
}
