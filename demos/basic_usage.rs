//! Basic usage examples for prefix-trie.

use prefix_trie::{AlphabetTree, Case, PrefixTree, Result, SharedPrefixTree};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    example_prefix_tree()?;
    example_alphabet_tree();
    example_shared_tree();
    example_script()
}

fn example_prefix_tree() -> Result<()> {
    println!("=== PrefixTree ===\n");

    let mut tree = PrefixTree::new();
    for word in ["apple", "app", "application", "banana", "band"] {
        tree.insert(word);
    }

    println!("contains(app) = {}", tree.contains("app"));
    println!("contains(appl) = {}", tree.contains("appl"));
    println!("has_prefix(appl) = {}", tree.has_prefix("appl"));
    println!("Count: {}, nodes: {}", tree.len(), tree.node_count());

    println!("\nCompletions for 'ban':");
    for word in tree.words_with_prefix("ban") {
        println!("  {word}");
    }

    let frozen = tree.freeze()?;
    println!(
        "\nArena: {} bytes, FST snapshot: {} bytes\n",
        tree.memory_usage(),
        frozen.memory_usage()
    );
    Ok(())
}

fn example_alphabet_tree() {
    println!("=== AlphabetTree (a-z only) ===\n");

    let mut tree = AlphabetTree::new();
    for word in ["apple", "Apple", "app"] {
        match tree.insert(word) {
            Ok(added) => println!("insert({word}) -> added: {added}"),
            Err(e) => println!("insert({word}) -> error: {e}"),
        }
    }
    println!();
}

fn example_shared_tree() {
    println!("=== SharedPrefixTree ===\n");

    let tree = std::sync::Arc::new(SharedPrefixTree::new());
    let handles: Vec<_> = ["north", "south", "east", "west"]
        .into_iter()
        .map(|dir| {
            let tree = std::sync::Arc::clone(&tree);
            std::thread::spawn(move || {
                for i in 0..3 {
                    tree.insert(&format!("{dir}-{i}"));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked");
    }
    println!("Count: {}", tree.len());
    println!("Words under 'n': {:?}\n", tree.words_with_prefix("n"));
}

fn example_script() -> Result<()> {
    println!("=== Script ===\n");

    let case = Case::from_json(
        r#"{
            "operations": ["Trie", "insert", "search", "search", "startsWith", "insert", "search"],
            "arguments": [[], ["apple"], ["apple"], ["app"], ["app"], ["app"], ["app"]],
            "expected": [null, null, true, false, true, null, true]
        }"#,
    )?;
    let results = case.script()?.run::<PrefixTree>()?;
    println!("results: {results:?}");
    case.verify::<AlphabetTree>()?;
    println!("AlphabetTree passes the same case");
    Ok(())
}
