#![deny(clippy::all)]

use anyhow::Error;
use clap::{App, Arg};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::Read;
use std::time::Instant;

use searcher::{SearchProblem, SearchTree, Strategy};

pub mod cities;
mod errors;

pub use cities::{search_path, Cities, Road, PORTUGAL};
pub use errors::RoadMapError;

pub fn solver() -> Result<(), Error> {
    let matches = App::new("roadsearch")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find routes between cities with tree search")
        .arg(
            Arg::with_name("from")
                .value_name("FROM")
                .required(true)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("to")
                .value_name("TO")
                .required(true)
                .takes_value(true)
                .index(2),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("STRATEGY")
                .help("breadth, depth, uniform, greedy or a* (default: all of them)")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("DEPTH")
                .help("Maximum depth of the search tree")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max-expansions")
                .long("max-expansions")
                .value_name("N")
                .help("Give up after expanding this many nodes")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("map")
                .short("m")
                .long("map")
                .value_name("MAP")
                .help("Road map file, or - for stdin (default: Portugal)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more details of the search"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let cities = get_map(matches.value_of("map"))?;
    let from = find_city(&cities, matches.value_of("from"))?;
    let to = find_city(&cities, matches.value_of("to"))?;

    let limit = matches
        .value_of("limit")
        .map(|l| l.parse::<usize>())
        .transpose()?;
    let max_expansions = matches
        .value_of("max-expansions")
        .map(|l| l.parse::<usize>())
        .transpose()?;

    let strategies: Vec<Strategy> = match matches.values_of("strategy") {
        Some(names) => names
            .map(|s| s.parse())
            .collect::<Result<Vec<Strategy>, _>>()?,
        None => Strategy::ALL.to_vec(),
    };

    for strategy in strategies {
        let problem = SearchProblem::new(&cities, from.clone(), to.clone());
        let mut tree = SearchTree::new(problem, strategy);
        if let Some(n) = max_expansions {
            tree.set_expansion_limit(n);
        }

        println!("== {} ==", strategy);

        let started = Instant::now();
        let path = tree.search(limit)?;
        info!(%strategy, elapsed = ?started.elapsed(), "search finished");

        match path {
            Some(path) => {
                println!("{}", path.join(" -> "));
                println!(
                    "length {} cost {} avg_branching {} terminals {} non_terminals {}",
                    tree.length()?,
                    tree.cost()?,
                    tree.avg_branching(),
                    tree.terminals(),
                    tree.non_terminals()
                );
            }
            None => println!(
                "no path found (non_terminals {})",
                tree.non_terminals()
            ),
        }
    }

    Ok(())
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

type BoxedRead = Box<dyn Read + 'static>;

/// Read a road map from a file or stdin, or use the Portuguese network.
pub fn get_map(filename: Option<&str>) -> Result<Cities, Error> {
    let mut reader: BoxedRead = match filename {
        Some("-") => Box::new(std::io::stdin()),
        Some(path) => {
            let f: File = File::open(path)?;
            Box::new(f)
        }
        None => return Ok(PORTUGAL.clone()),
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.parse()?)
}

fn find_city(cities: &Cities, name: Option<&str>) -> Result<String, RoadMapError> {
    let name = name.unwrap_or_default();
    if cities.contains(name) {
        Ok(name.to_string())
    } else {
        Err(RoadMapError::UnknownCity(name.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_map() {
        let cities = get_map(None).unwrap();
        assert_eq!(cities.cities(), PORTUGAL.cities());
    }

    #[test]
    fn cities_must_exist() {
        assert_eq!(find_city(&PORTUGAL, Some("Faro")).unwrap(), "Faro");
        assert!(matches!(
            find_city(&PORTUGAL, Some("Madrid")),
            Err(RoadMapError::UnknownCity(_))
        ));
        assert!(matches!(
            find_city(&PORTUGAL, None),
            Err(RoadMapError::UnknownCity(_))
        ));
    }
}
