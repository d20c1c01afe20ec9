//! Example: global and local alignment of two short DNA sequences.
//!
//! Run with:
//! `cargo run --example align`

use pairalign::{GlobalAligner, LocalAligner, ScoringModel};

fn main() {
    let s = b"GATTACA";
    let t = b"GCATGCU";

    // Typical unit scoring: +1 match, -1 mismatch, -1 gap.
    let scoring = ScoringModel::unit();

    let global = GlobalAligner::new(scoring).align(s, t);
    println!("{global}");
    println!();

    let local = LocalAligner::new(scoring).align(s, t);
    println!("{local}");
    println!();

    // The filled grid can be inspected directly.
    let filled = GlobalAligner::new(scoring).fill(s, t);
    for i in 0..filled.grid.rows() {
        let row: Vec<String> = filled.grid.row(i).iter().map(|v| format!("{v:>3}")).collect();
        println!("{}", row.join(" "));
    }
    println!("traceback start: {:?}", filled.start);
}
