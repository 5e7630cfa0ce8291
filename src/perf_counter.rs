use perf_event::events::Hardware;
use perf_event::{Builder, Counter};

// CPU cycle counter; absent when perf events are unavailable (containers, VMs).
pub struct PerfCounter {
    counter: Option<Counter>,
}

impl PerfCounter {
    pub fn new() -> Self {
        let counter = Builder::new()
            .kind(Hardware::CPU_CYCLES)
            .build()
            .map_err(|e| {
                log::warn!(
                    "failed to open perf counter ({}), falling back to time-based measurement",
                    e
                );
                e
            })
            .ok();

        PerfCounter { counter }
    }

    pub fn start(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.reset();
            let _ = counter.enable();
        }
    }

    pub fn stop(&mut self) {
        if let Some(ref mut counter) = self.counter {
            let _ = counter.disable();
        }
    }

    pub fn cycles(&mut self) -> Option<u64> {
        let counter = self.counter.as_mut()?;
        counter
            .read()
            .map_err(|e| log::warn!("failed to read perf counter: {}", e))
            .ok()
    }
}

impl Default for PerfCounter {
    fn default() -> Self {
        Self::new()
    }
}
