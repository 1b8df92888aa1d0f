use chancery::Chance;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut chance = Chance::new();

    // A die that lands on its heavy face more often than it should.
    let faces = [1, 2, 3, 4, 5, 6];
    let weights = [1, 1, 1, 1, 1, 5];

    let mut hist: HashMap<i64, u64> = HashMap::default();
    for _ in 0..100_000 {
        *hist.entry(chance.weighted_int(&faces, &weights)?).or_default() += 1;
    }

    let mut rolls: Vec<(i64, u64)> = hist.into_iter().collect();
    rolls.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));
    for (face, count) in rolls {
        println!("{count:>6} x {face}");
    }

    let name = chance.string(8, chancery::CHARS_LOWER)?;
    println!("\nrolled by {}", chancery::capitalize(&name));

    Ok(())
}
