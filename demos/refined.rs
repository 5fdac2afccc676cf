//! Refined Types Example
//!
//! Validate once at the boundary, then let the type carry the guarantee.
//!
//! Run with: cargo run --example refined

use proven::constant::{ConstChar, ConstI32, ConstUsize};
use proven::order::{Natural, Reversed};
use proven::refined::{
    AllOf, AlphaNumeric, AnyOf, BoundedVec, CharEq, Digit, GreaterThan, Letter, LessThan,
    MaxCount, Not, Percentage, Port, PositiveI32, Predicate, RefineExt, Refined, Whitespace,
};

fn main() {
    println!("=== Refined Types Example ===\n");

    character_classes();
    comparisons();
    collections();
    custom_predicates();
    combinators();
    real_world_example();
}

/// The built-in ASCII character classes
fn character_classes() {
    println!("--- Character Classes ---\n");

    for c in ['a', 'Q', '7', ' ', '_'] {
        println!(
            "{:?}: letter={} digit={} whitespace={} alphanumeric={}",
            c,
            Letter::check(&c),
            Digit::check(&c),
            Whitespace::check(&c),
            AlphaNumeric::check(&c),
        );
    }

    let initial = Refined::<char, Letter>::new('J');
    println!("\nRefined::<char, Letter>::new('J'): {:?}", initial);

    let bad = Refined::<char, Letter>::new('4');
    if let Err(e) = bad {
        println!("Refined::<char, Letter>::new('4'): {}", e);
    }

    println!();
}

/// Comparisons against type-level constants
fn comparisons() {
    println!("--- Comparisons ---\n");

    type OverFive = GreaterThan<Natural, ConstI32<5>>;
    type UnderFive = LessThan<Natural, ConstI32<5>>;

    for n in [3, 5, 6] {
        println!(
            "{}: > 5 is {}, < 5 is {}",
            n,
            OverFive::check(&n),
            UnderFive::check(&n)
        );
    }

    // Reversing the comparator flips the direction
    type ReversedOverFive = GreaterThan<Reversed<Natural>, ConstI32<5>>;
    println!("3 with reversed order: {}", ReversedOverFive::check(&3));

    let n = PositiveI32::new(42).unwrap();
    println!("\nPositiveI32(42).try_map(|x| x * 2): {:?}", n.try_map(|x| x * 2));
    println!("PositiveI32(42).try_map(|x| -x): {}", n.try_map(|x| -x).is_err());

    println!();
}

/// Count limits on collections
fn collections() {
    println!("--- Collections ---\n");

    let small = BoundedVec::<u8, 3>::new(vec![1, 2, 3]);
    println!("BoundedVec<u8, 3> of [1, 2, 3]: {:?}", small.is_ok());

    let big = BoundedVec::<u8, 3>::new(vec![1, 2, 3, 4]);
    println!("BoundedVec<u8, 3> of [1, 2, 3, 4]: {:?}", big.is_ok());

    // Strings are counted in chars
    let name = "héllo".to_string().refine::<MaxCount<ConstUsize<5>>>();
    println!("\"héllo\" within 5 chars: {}", name.is_ok());

    println!();
}

/// Writing a predicate of your own
fn custom_predicates() {
    println!("--- Custom Predicates ---\n");

    struct Even;

    impl Predicate<i64> for Even {
        fn check(value: &i64) -> bool {
            value % 2 == 0
        }

        fn description() -> &'static str {
            "even number"
        }
    }

    println!("4.refine::<Even>(): {:?}", 4_i64.refine::<Even>().is_ok());
    if let Err(e) = 5_i64.refine::<Even>() {
        println!("5.refine::<Even>(): {}", e);
    }

    println!();
}

/// Building predicates out of predicates
fn combinators() {
    println!("--- Combinators ---\n");

    type Sign = AnyOf<(CharEq<ConstChar<'+'>>, CharEq<ConstChar<'-'>>)>;
    type NumberChar = AnyOf<(Digit, Sign)>;
    type Visible = AllOf<(Not<Whitespace>, Not<CharEq<ConstChar<'\0'>>>)>;

    for c in ['7', '-', 'x', ' '] {
        println!(
            "{:?}: number char={} visible={}",
            c,
            NumberChar::check(&c),
            Visible::check(&c)
        );
    }

    println!();
}

/// A configuration record validated at the edge
fn real_world_example() {
    println!("--- Real World: Server Config ---\n");

    #[derive(Debug)]
    struct ServerConfig {
        port: Port,
        cache_hit_target: Percentage,
    }

    fn parse(port: u16, target: i32) -> Result<ServerConfig, String> {
        Ok(ServerConfig {
            port: Port::new(port).map_err(|e| e.to_string())?,
            cache_hit_target: Percentage::new(target).map_err(|e| e.to_string())?,
        })
    }

    match parse(8080, 95) {
        Ok(config) => println!(
            "valid config: port {} with {}% target",
            config.port, config.cache_hit_target
        ),
        Err(e) => println!("invalid: {}", e),
    }

    match parse(0, 95) {
        Ok(config) => println!("valid config: {:?}", config),
        Err(e) => println!("invalid: {}", e),
    }
}
