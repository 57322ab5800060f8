// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example parity
fn main() {
    println!("parity-nn: a multilayer perceptron that learns N-bit parity.");
    println!("Run `cargo run --example parity` to train one on the 3-bit truth table.");
}
