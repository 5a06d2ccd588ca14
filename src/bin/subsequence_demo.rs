use subseq::combinatorial::{SubsequenceEnumerator, SubsequenceMemo};

fn main() -> subseq::Result<()> {
    let input = std::env::args().nth(1).unwrap_or_else(|| "ABCDE".to_string());

    let enumerator = SubsequenceEnumerator::new().max_len(20);
    let mut memo = SubsequenceMemo::new();
    let mut sorted = enumerator.enumerate_with_memo(&input, &mut memo)?;
    sorted.sort();

    for s in &sorted {
        println!("{}", s);
    }
    println!("number of combination: {}", sorted.len());
    println!();

    for (suffix, values) in memo.iter() {
        println!("key: {}-> {}", suffix, values.join(" "));
        println!();
    }

    Ok(())
}
