//! Per-thread isolation example.
//!
//! Builds ecerr with `thread-isolated` and `verbose`: every OS thread
//! gets its own lazily created error context, and reports carry source
//! locations plus a best-effort call stack.
//!
//! # Environment Variables
//!
//! - `ECERR_FLUSH_STDERR=1` - flush diagnostic output immediately

use std::thread;

use ecerr::{capture, get_code, get_message, report, ErrorKind, Raised, Status};

// cargo run -p ecerr-isolated
fn main() {
    println!("=== ecerr per-thread isolation example ===\n");

    let workers: Vec<_> = [
        ("field", ErrorKind::NoField),
        ("curve", ErrorKind::NoCurve),
        ("config", ErrorKind::NoConfig),
    ]
    .into_iter()
    .map(|(name, kind)| {
        thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                // Each thread starts with a fresh context.
                assert_eq!(get_code(), Status::Ok);

                capture(kind);
                report!("param_set", Raised::Fault(kind));
                report!("worker_main", Raised::Caught);

                // Only this thread's capture is visible here.
                let (seen, text) = get_message().expect("own capture visible");
                assert_eq!(seen, kind);
                println!("[{}] consumed {}: {}", name, seen, text);

                assert_eq!(get_code(), Status::Fault(kind));
                assert_eq!(get_code(), Status::Ok);
            })
            .expect("spawn worker")
    })
    .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    // The main thread's context never saw any of it.
    assert_eq!(get_code(), Status::Ok);
    match get_message() {
        Err(e) => println!("\nmain thread untouched: {}", e),
        Ok((kind, _)) => println!("\nunexpected capture on main thread: {}", kind),
    }
}
