use crate::error::Result;
use crate::lehmer::Generator;
use crate::perf_counter::PerfCounter;
use std::time::Instant;

pub const BENCHMARK_SEED: i64 = 1;
pub const BUCKET_COUNT: usize = 10;

// State after 10000 draws from seed 1 (Park & Miller 1988)
pub const CHECK_VALUE_10K: u32 = 1043618065;

pub struct Benchmark {
    generator: Generator,
    buckets: [u64; BUCKET_COUNT],
}

impl Benchmark {
    pub fn new() -> Self {
        Benchmark {
            generator: Generator::new(BENCHMARK_SEED),
            buckets: [0; BUCKET_COUNT],
        }
    }

    fn do_draws(&mut self, draw_cnt: usize) -> u32 {
        let mut last = self.generator.state();
        for _ in 0..draw_cnt {
            last = self.generator.next();
        }
        last
    }

    fn do_range_draws(&mut self, draw_cnt: usize) -> Result<()> {
        for _ in 0..draw_cnt {
            let bucket = self.generator.next_in_range(0, BUCKET_COUNT as i64 - 1)?;
            self.buckets[bucket as usize] += 1;
        }
        Ok(())
    }

    // Pearson statistic of the last run against a uniform split, BUCKET_COUNT - 1 dof.
    pub fn chi_square(&self) -> f64 {
        let total: u64 = self.buckets.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let expected = total as f64 / BUCKET_COUNT as f64;
        self.buckets
            .iter()
            .map(|&observed| {
                let d = observed as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    pub fn run(&mut self, draw_cnt: usize, expected_last: Option<u32>) -> Result<String> {
        self.generator = Generator::new(BENCHMARK_SEED);
        self.buckets = [0; BUCKET_COUNT];

        let mut perf_counter = PerfCounter::new();

        perf_counter.start();
        let start = Instant::now();

        let last = self.do_draws(draw_cnt);

        let duration = start.elapsed();
        perf_counter.stop();
        let perf_cycles = perf_counter.cycles();

        // Assert the sequence check value if provided
        assert_eq!(expected_last.unwrap_or(last), last);

        let range_start = Instant::now();
        self.do_range_draws(draw_cnt)?;
        let range_duration = range_start.elapsed();

        let seconds_total = duration.as_secs_f64();
        let mdps = draw_cnt as f64 / seconds_total / 1e6;

        let cpu_freq_ghz = get_cpu_frequency_ghz();
        let cc_per_draw = seconds_total * cpu_freq_ghz * 1e9 / draw_cnt as f64;

        let perf_cc_per_draw = match perf_cycles {
            Some(cycles) => format!("{:.1}", cycles as f64 / draw_cnt as f64),
            None => "N/A".to_string(),
        };

        Ok(format!(
            "\n{} draws (seed {}) \n\
             in {:.6} seconds => {:.3} Mdraws/s\n\
             CC/draw (time*freq, perf counter): {:.1} / {}  @  CPU freq: {:.3} GHz\n\
             last state = {}\n\
             {} range draws in {:.6} seconds, buckets {:?}\n\
             chi-square ({} dof) = {:.3}",
            draw_cnt,
            BENCHMARK_SEED,
            seconds_total,
            mdps,
            cc_per_draw,
            perf_cc_per_draw,
            cpu_freq_ghz,
            last,
            draw_cnt,
            range_duration.as_secs_f64(),
            self.buckets,
            BUCKET_COUNT - 1,
            self.chi_square()
        ))
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self::new()
    }
}

fn get_cpu_frequency_ghz() -> f64 {
    // Try to read current CPU frequency from /sys
    for path in [
        "/sys/devices/system/cpu/cpu0/cpufreq/scaling_cur_freq",
        "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_cur_freq",
    ] {
        if let Ok(contents) = std::fs::read_to_string(path) {
            if let Ok(freq_khz) = contents.trim().parse::<f64>() {
                return freq_khz / 1_000_000.0; // kHz to GHz
            }
        }
    }

    log::warn!("could not read CPU frequency, assuming 1.0 GHz");
    1.0
}
