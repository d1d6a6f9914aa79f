//! Basic ecerr example.
//!
//! Walks through the whole surface in the default (shared) mode: capture,
//! the cheap status-code path, the detailed message path, and both report
//! cases.
//!
//! # Environment Variables
//!
//! - `ECERR_FLUSH_STDERR=1` - flush diagnostic output immediately
//! - `ECERR_DEBUG=1` - enable the subsystem's debug chatter
//! - `ECERR_DEMO_ROUNDS=<n>` - how many capture/consume rounds to run

use ecerr::{
    capture, ddebug, env_get, get_code, get_message, init_default, report, ErrorKind, Raised,
    Status,
};

// ECERR_DEBUG=1 ECERR_FLUSH_STDERR=1 cargo run -p ecerr-basic
fn main() {
    println!("=== ecerr basic example ===\n");

    init_default();

    // Cheap path: nothing captured yet.
    assert_eq!(get_code(), Status::Ok);
    println!("fresh context: status = ok");

    let rounds: usize = env_get("ECERR_DEMO_ROUNDS", 2);
    for round in 0..rounds {
        ddebug!("round {} of {}", round + 1, rounds);

        // A deep frame detects a failure and reports it...
        capture(ErrorKind::NoMemory);
        report!("fp_new", Raised::Fault(ErrorKind::NoMemory));

        // ...frames above only mark themselves as being on the path...
        report!("fp_mul", Raised::Caught);
        report!("ep_mul", Raised::Caught);

        // ...and the top frame consumes the code exactly once.
        match get_code() {
            Status::Fault(kind) => println!("round {}: caught {}", round + 1, kind),
            Status::Ok => println!("round {}: nothing pending", round + 1),
        }
        assert_eq!(get_code(), Status::Ok);
    }

    // Detailed path: kind + message, consumed exactly once.
    capture(ErrorKind::NoFile);
    match get_message() {
        Ok((kind, text)) => println!("captured {}: {}", kind, text),
        Err(e) => println!("unexpected: {}", e),
    }
    match get_message() {
        Ok(_) => println!("unexpected stale capture"),
        Err(e) => println!("second read correctly fails: {}", e),
    }

    println!("\ndone");
}
