use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use itertools::Itertools;
use log::{info, warn, LevelFilter};

use rational_rref::matrix::matrix::Matrix;
use rational_rref::matrix::matrix_gen::MatrixGen;
use rational_rref::rref::engine::{reduced_row_echelon, Step, WriterObserver};
use rational_rref::rref::input::{parse_matrix, prompt_matrix};
use rational_rref::rref::row::{format_matrix, Row};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("RRE_LOG", "warn"))
        .init();

    let matches = Command::new("rre")
        .version(clap::crate_version!())
        .about("Reduce a 3x4 augmented matrix to Reduced Row Echelon Form with exact fractions")
        .arg(
            Arg::new("matrix")
                .help(
                    "Matrix as \"a,b,c,d;e,f,g,h;i,j,k,l\", rows split by ';' and entries by ','. \
                     Entries may be integers, fractions (1/3) or decimals. Prompts when omitted.",
                )
                .required(false),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Only print the reduced matrix, not the intermediate steps"),
        )
        .get_matches();

    let text = match matches.get_one::<String>("matrix") {
        Some(text) => text.clone(),
        None => prompt_matrix(std::io::stdin().lock(), std::io::stdout())?,
    };
    let input = parse_matrix(&text).with_context(|| format!("Could not parse {:?}", text))?;
    let system = MatrixGen::from_list(input.clone());

    let reduced = if matches.get_flag("quiet") {
        let reduced = reduced_row_echelon(input, &mut |_: Step, _: &[Row]| {})?;
        println!("{}", format_matrix(&reduced));
        reduced
    } else {
        reduced_row_echelon(input, &mut WriterObserver::stdout())?
    };

    match MatrixGen::from_list(reduced).augmented_solution() {
        Some(solution) => {
            if !system.is_solved_by(&solution) {
                warn!("The reduced matrix does not solve the input system");
            }
            let names = ["x", "y", "z"];
            println!(
                "{}",
                names
                    .iter()
                    .zip(solution.iter())
                    .map(|(name, value)| format!("{} = {}", name, value))
                    .join(", ")
            );
        }
        None => info!("No unique solution to read off the reduced matrix"),
    }

    Ok(())
}
