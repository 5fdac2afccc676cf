//! Present Values Example
//!
//! A `Present<A>` is an `Option<A>` that is known to be `Some`.
//!
//! Run with: cargo run --example present
//! With log output: cargo run --example present --features tracing

use proven::present::{IntoPresent, Present};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Present Values Example ===\n");

    construction();
    conversions();
    uninitialized();
}

fn construction() {
    println!("--- Construction ---\n");

    let name = Present::new("Ferris");
    println!("Present::new(\"Ferris\"): {:?}", name);

    let id = 7u64.into_present();
    println!("7.into_present(): {}", id);

    match Present::<String>::try_from(None) {
        Ok(p) => println!("unexpected: {:?}", p),
        Err(e) => println!("Present::try_from(None): {}", e),
    }

    let null: *const u8 = std::ptr::null();
    println!(
        "Present::from_nullable(null pointer) is_err: {}",
        Present::from_nullable(null).is_err()
    );

    println!();
}

fn conversions() {
    println!("--- Conversions ---\n");

    let p = Present::new(42);
    let opt: Option<i32> = p.into();
    println!("Present(42) -> Option: {:?}", opt);

    let back = Present::<i32>::try_from(opt);
    println!("Option -> Present: {:?}", back);

    let doubled: Vec<i32> = p.into_iter().map(|v| v * 2).collect();
    println!("iterating Present(42) doubled: {:?}", doubled);

    println!();
}

fn uninitialized() {
    println!("--- Uninitialized ---\n");

    // Only an empty sequence can produce an uninitialized Present
    let empty: Present<i32> = Vec::new().into_iter().collect();
    println!("is_some: {}", empty.is_some());

    match empty.value() {
        Ok(v) => println!("value: {}", v),
        Err(e) => println!("value(): {}", e),
    }
}
