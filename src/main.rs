use lehmer_rng::benchmark::CHECK_VALUE_10K;
use lehmer_rng::{Benchmark, Generator};
use std::env;
use std::time::SystemTime;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} [--seed N] [--count N] [--min N] [--max N] [--bench]",
        program
    );
    std::process::exit(2);
}

fn parse_value<T: std::str::FromStr>(program: &str, flag: &str, value: Option<&String>) -> T {
    match value.and_then(|v| v.parse::<T>().ok()) {
        Some(v) => v,
        None => {
            log::error!("missing or malformed value for {}", flag);
            usage(program)
        }
    }
}

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("lehmer_rng");

    let mut seed: Option<i64> = None;
    let mut count: usize = 5;
    let mut min: i64 = 1;
    let mut max: i64 = 100;
    let mut bench = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = Some(parse_value(program, "--seed", args.get(i)));
            }
            "--count" => {
                i += 1;
                count = parse_value(program, "--count", args.get(i));
            }
            "--min" => {
                i += 1;
                min = parse_value(program, "--min", args.get(i));
            }
            "--max" => {
                i += 1;
                max = parse_value(program, "--max", args.get(i));
            }
            "--bench" => bench = true,
            _ => usage(program),
        }
        i += 1;
    }

    if bench {
        let mut bench = Benchmark::new();
        for (draws, expected) in [(10_000, Some(CHECK_VALUE_10K)), (10_000_000, None)] {
            match bench.run(draws, expected) {
                Ok(report) => println!("{}", report),
                Err(e) => {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        return;
    }

    // The clock is read here, never inside the generator.
    let mut generator = match seed {
        Some(seed) => Generator::new(seed),
        None => Generator::from_time(SystemTime::now()),
    };
    log::info!("seeded with state {}", generator.state());

    for _ in 0..count {
        println!("{}", generator.next());
    }
    for _ in 0..count {
        match generator.next_in_range(min, max) {
            Ok(v) => println!("{}", v),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
