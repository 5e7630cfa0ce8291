use lehmer_rng::benchmark::CHECK_VALUE_10K;
use lehmer_rng::Benchmark;

#[test]
fn test_benchmark_10k() {
    let mut bench = Benchmark::new();
    let result = bench.run(10000, Some(CHECK_VALUE_10K)).unwrap();
    println!("{}", result);
}

#[test]
#[should_panic]
fn test_benchmark_wrong_check_value() {
    let mut bench = Benchmark::new();
    bench.run(10000, Some(CHECK_VALUE_10K + 1)).unwrap();
}

#[test]
fn test_benchmark_100k_uniform() {
    let mut bench = Benchmark::new();
    let result = bench.run(100000, None).unwrap();
    println!("{}", result);
    // 9 dof: p < 1e-6 beyond ~40
    assert!(bench.chi_square() < 40.0, "chi-square {}", bench.chi_square());
}

#[test]
#[ignore] // Run with cargo test -- --ignored
fn benchmark_performance() {
    let mut bench = Benchmark::new();
    println!("{}", bench.run(100_000_000, None).unwrap());
    println!("{}", bench.run(100_000_000, None).unwrap());
}
