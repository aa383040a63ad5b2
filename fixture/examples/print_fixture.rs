//! Fixture Example
//!
//! Demonstrates generating a fixture and rendering it in the available formats.

use fixture::export::{export_file_stem, to_csv_bytes, to_text_table};
use fixture::{FixtureConfig, FixtureGenerator};

fn main() {
    println!("=== Round-robin Fixture Example ===\n");

    // Example 1: Synthesized labels, odd count (one team rests each round)
    println!("Example 1: 5 teams, single round-robin");
    let generator = FixtureGenerator::new(FixtureConfig::default());
    match generator.generate(5) {
        Ok(fixture) => {
            print!("{}", to_text_table(&fixture));
            println!(
                "Rounds: {} • Matches per round: {}\n",
                fixture.total_rounds(),
                fixture.tables_per_round()
            );
        }
        Err(e) => println!("Error: {}\n", e),
    }

    // Example 2: Custom names, home and away legs
    println!("Example 2: 4 named teams, double round-robin");
    let config = FixtureConfig::default()
        .with_names(["Tigres", "Leones", "Águilas", "Cóndores"])
        .with_double_round(true);
    match FixtureGenerator::new(config).generate(4) {
        Ok(fixture) => {
            print!("{}", to_text_table(&fixture));
            for summary in fixture.participant_summaries() {
                println!(
                    "  {:<10} home {}  away {}  byes {}",
                    summary.label, summary.home, summary.away, summary.byes
                );
            }
            if let Ok(csv) = to_csv_bytes(&fixture) {
                println!(
                    "\nCSV export: {} bytes ({}.csv)\n",
                    csv.len(),
                    export_file_stem(fixture.participant_count(), true)
                );
            }
        }
        Err(e) => println!("Error: {}\n", e),
    }

    // Example 3: Validation error
    println!("Example 3: Name count mismatch");
    let config = FixtureConfig::default().with_names(["A", "B"]);
    match FixtureGenerator::new(config).generate(4) {
        Ok(_) => println!("Unexpectedly generated a fixture"),
        Err(e) => println!("Error: {}", e),
    }
}
