// crates/ffxmanip-cli/src/monitor.rs
//
// Live timing display. One worker thread polls the wall clock, renders an
// in-place countdown line per queued alarm and rings the terminal bell as
// each alarm passes. The game offers no callback, so polling it is.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};

pub const TIME_FMT: &str = "%d/%m/%Y %H:%M:%S";

const POLL: Duration = Duration::from_millis(10);
const IDLE_POLL: Duration = Duration::from_millis(100);
const SETTLE: Duration = Duration::from_millis(500);

/// Background countdown display over a chronological alarm queue.
/// `start` spawns the worker; `stop` is honored within one poll tick.
pub struct Clock {
    stop: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl Clock {
    pub fn start(alarms: Vec<NaiveDateTime>) -> Clock {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let worker = thread::spawn(move || run_alarms(&alarms, &flag));
        Clock {
            stop,
            worker: Some(worker),
        }
    }

    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.halt();
    }
}

/// Seconds left until `target`, signed, millisecond precision.
fn remaining_secs(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}

/// Sleep in poll-sized slices; true means a stop was requested.
fn wait(total: Duration, stop: &AtomicBool) -> bool {
    let mut left = total;
    while !left.is_zero() {
        if stop.load(Ordering::Relaxed) {
            return true;
        }
        let step = left.min(POLL);
        thread::sleep(step);
        left -= step;
    }
    stop.load(Ordering::Relaxed)
}

fn render(line: &str) {
    print!("\r{line}");
    let _ = io::stdout().flush();
}

fn run_alarms(alarms: &[NaiveDateTime], stop: &AtomicBool) {
    if wait(SETTLE, stop) {
        return;
    }
    println!();

    let mut width = 0usize;
    for &alarm in alarms {
        loop {
            if stop.load(Ordering::Relaxed) {
                return;
            }
            let now = Local::now().naive_local();
            let left = remaining_secs(alarm - now);
            if left < 0.0 {
                break;
            }
            let line = format!(
                "Time now: {} | Time until next seed: {left:7.3}",
                now.format(TIME_FMT)
            );
            width = width.max(line.len());
            render(&line);
            thread::sleep(POLL);
        }
        print!("\x07");
        let _ = io::stdout().flush();
    }

    // queue drained: clear the countdown line, fall back to a plain clock
    render(&" ".repeat(width));
    while !stop.load(Ordering::Relaxed) {
        let now = Local::now().naive_local();
        render(&format!("Time now: {}", now.format(TIME_FMT)));
        thread::sleep(IDLE_POLL);
    }
    println!();
}

/// Whole-second endpoint `seconds` from `now`; the countdown display
/// counts against a second boundary so the press lands on the grid.
fn countdown_end(now: NaiveDateTime, seconds: u64) -> NaiveDateTime {
    let now = now.with_nanosecond(0).unwrap_or(now);
    now + TimeDelta::seconds(seconds as i64)
}

/// Foreground countdown to a single endpoint, bell at zero. Blocks the
/// caller on purpose: the user is waiting to press New Game.
pub fn run_countdown(seconds: u64) {
    let end = countdown_end(Local::now().naive_local(), seconds);
    let mut width = 0usize;
    loop {
        let now = Local::now().naive_local();
        let left = remaining_secs(end - now);
        let line = format!(
            "Time now: {} | Time until new game: {left:7.3}",
            now.format(TIME_FMT)
        );
        width = width.max(line.len());
        render(&line);
        if left < 0.0 {
            break;
        }
        thread::sleep(POLL);
    }
    print!("\x07");
    render(&" ".repeat(width));
    println!();
}
