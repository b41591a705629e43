use billtext::markup::parse_markup;
use billtext::parser::{extract_sections, parse_bill_xml};
use std::time::Instant;

fn average_secs(durations: &[f64]) -> f64 {
    durations.iter().sum::<f64>() / durations.len() as f64
}

fn main() {
    let path = std::env::args().nth(1).expect("Usage: bench_parser <xml_file>");
    let xml = std::fs::read_to_string(&path).expect("Failed to read XML file");

    let iterations = 5;

    // Baseline: tree construction only
    let root = parse_markup(&xml).expect("Failed to parse markup");
    let mut tree_durations = Vec::new();
    for i in 0..iterations {
        let start = Instant::now();
        let _ = parse_markup(&xml);
        let elapsed = start.elapsed().as_secs_f64();
        tree_durations.push(elapsed);
        println!("Tree {}: {:.4}s", i + 1, elapsed);
    }
    let tree_avg = average_secs(&tree_durations);
    println!("Tree avg: {:.4}s\n", tree_avg);

    let mut walk_durations = Vec::new();
    for i in 0..iterations {
        let start = Instant::now();
        let extraction = extract_sections(&root);
        let elapsed = start.elapsed().as_secs_f64();
        walk_durations.push(elapsed);
        println!(
            "Walk {}: {:.4}s ({} records)",
            i + 1,
            elapsed,
            extraction.records.len()
        );
    }
    println!("Walk avg: {:.4}s\n", average_secs(&walk_durations));

    let mut durations = Vec::new();
    for _ in 0..iterations {
        let start = Instant::now();
        let _ = parse_bill_xml(&xml);
        durations.push(start.elapsed().as_secs_f64());
    }
    let avg = average_secs(&durations);
    println!("End-to-end avg: {:.4}s", avg);
    println!("Tree share: {:.0}%", 100.0 * tree_avg / avg);
}
