//! Shares one count-based breaker between worker threads.

use circuit_guard::{CountBreaker, Outcome, SharedBreaker};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    let breaker = SharedBreaker::new(
        CountBreaker::builder()
            .consecutive_failures(5)
            .half_open_attempts(10)
            .build()
            .expect("valid breaker configuration"),
    );
    let requests = Arc::new(AtomicU32::new(0));

    let workers: Vec<_> = (0..4)
        .map(|id| {
            let breaker = breaker.clone();
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                let mut rejected = 0;
                for _ in 0..50 {
                    let outcome = breaker.call(|| {
                        // The dependency is down for requests 20..60
                        let n = requests.fetch_add(1, Ordering::SeqCst);
                        if (20..60).contains(&n) {
                            Err("dependency unavailable")
                        } else {
                            Ok(())
                        }
                    });
                    if outcome == Outcome::Rejected {
                        rejected += 1;
                    }
                }
                println!("worker {}: {} calls rejected", id, rejected);
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    println!(
        "final state: {}, executed requests: {}",
        breaker.state(),
        requests.load(Ordering::SeqCst)
    );
}
