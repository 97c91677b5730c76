//! Walk through derivatives of elementary functions with dual numbers.
//!
//! Run with: `RUST_LOG=dual_autodiff=debug cargo run --example dual_functions`
//! to also see the debug events emitted for failed operations.

use std::f64::consts::PI;

use dual_autodiff::{derivative, DualError, DualNumber};
use tracing_subscriber::EnvFilter;

fn report(label: &str, expected: &str, result: Result<(f64, f64), DualError>) {
    println!("{label}");
    match result {
        Ok((value, slope)) => {
            println!("  f  = {value}");
            println!("  f' = {slope} (expected: {expected})");
        }
        Err(e) => println!("  error: {e} (expected: {expected})"),
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Dual Numbers: Elementary Functions ===\n");

    let x: DualNumber = DualNumber::new(2.0, 3.0);
    println!("x = {x}");
    println!("x * 5 = {}", x * 5.0);
    println!("10 - x = {}", 10.0 - x);
    println!();

    report(
        "Power rule: f(x) = x³ at x=2",
        "12",
        derivative(|x: DualNumber| x.pow(3.0), 2.0),
    );

    report(
        "Sine: f(x) = sin(x) at x=π/2",
        "~0.0",
        derivative(|x: DualNumber| Ok(x.sin()), PI / 2.0),
    );

    report(
        "Cosine: f(x) = cos(x) at x=π",
        "~0.0",
        derivative(|x: DualNumber| Ok(x.cos()), PI),
    );

    report(
        "Tangent: f(x) = tan(x) at x=π/4",
        "2",
        derivative(|x: DualNumber| x.tan(), PI / 4.0),
    );

    report(
        "Logarithm: f(x) = ln(x) at x=2",
        "0.5",
        derivative(|x: DualNumber| x.log(), 2.0),
    );

    report(
        "Inverse: f(x) = 1/x at x=4",
        "-0.0625",
        derivative(|x: DualNumber| x.inverse(), 4.0),
    );

    report(
        "Quotient rule: f(x) = sin(x)/x at x=1",
        "cos(1) - sin(1) ≈ -0.3012",
        derivative(|x: DualNumber| x.sin().checked_div(x), 1.0),
    );

    report(
        "Sigmoid: σ(x) = 1/(1 + e^(-x)) at x=0",
        "0.25",
        derivative(|x: DualNumber| ((-x).exp() + 1.0).inverse(), 0.0),
    );

    report(
        "Composition: f(x) = ln(sin(e^x)) at x=0",
        "cos(1)/sin(1) ≈ 0.6421",
        derivative(|x: DualNumber| x.exp().sin().log(), 0.0),
    );

    report(
        "Failure: f(x) = ln(x) at x=0",
        "division by zero",
        derivative(|x: DualNumber| x.log(), 0.0),
    );
}
