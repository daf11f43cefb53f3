use lib_sqr::roots::babylonian_sqrt::babylonian_sqrt;
use lib_sqr::roots::binary_search_sqrt::binary_search_sqrt;
use lib_sqr::roots::newton_sqrt::newton_sqrt;
use lib_sqr::roots::root_result::{RootApproximation, RootValue};
use std::env;

/// Comparison driver for the square-root solvers. With a single integer
/// argument it prints each solver's result for that input; with no arguments
/// it sweeps 0..=1000, cross-validates Newton against interval halving, and
/// reports which method converged in fewer iterations per input.

fn display_value(value: RootValue) -> String {
    match value {
        RootValue::Real(x) => format!("{:<20.12}", x),
        RootValue::Imaginary(m) => format!("{:<20.12}i", m),
    }
}

fn print_single(label: &str, n: i64, result: RootApproximation) {
    println!(
        "{}: sqrt({}) = {} : {} iterations.",
        label,
        n,
        display_value(result.value),
        result.iterations
    );
}

fn main() {
    let arg = env::args().nth(1);
    if let Some(raw) = arg {
        let n: i64 = raw.parse().expect("argument must be an integer");
        let x = n as f64;
        print_single("newton", n, newton_sqrt(x).expect("newton solver failed"));
        print_single("binary", n, binary_search_sqrt(x).expect("binary solver failed"));
        print_single("babylo", n, babylonian_sqrt(x).expect("babylonian solver failed"));
        return;
    }

    for n in 0..=1000_i64 {
        let x = n as f64;
        let newton = newton_sqrt(x).expect("newton solver failed");
        let binary = binary_search_sqrt(x).expect("binary solver failed");
        let newton_root = newton.value.real().expect("sweep inputs are non-negative");
        let binary_root = binary.value.real().expect("sweep inputs are non-negative");
        let winner = if newton.iterations < binary.iterations {
            "newton"
        } else {
            "binary"
        };
        let matches = if (newton_root - binary_root).abs() <= 0.001 {
            " "
        } else {
            "X"
        };
        println!(
            "{} sqrt({:>04}) = newton:{:>20.12}    -    binary:{:>20.12} .... {:>4} vs {:>4} iterations   Best: [{}]",
            matches, n, newton_root, binary_root, newton.iterations, binary.iterations, winner
        );
    }
}
