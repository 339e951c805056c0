//! collections-tour: walks a small student roster through every container.
//!
//! Each step prints what the container did, so the output reads as a
//! side-by-side comparison of when to reach for which collection.

use std::fmt::Debug;
use std::process::ExitCode;

use clap::Parser;
use generic_collections::{
    CollectionError, CollectionsConfig, Dictionary, DynamicList, FixedArray, LinkedSequence,
    OrderedDictionary, Queue, Stack, UniqueSet,
};

#[derive(Parser)]
#[command(name = "collections-tour")]
#[command(version)]
#[command(about = "Walk through arrays, sets, lists, dictionaries, stacks and queues")]
struct Cli {
    /// Length of the fixed student array
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    array_len: i64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Library records arrive through the `log` bridge.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum TourError {
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// A step that should have been rejected was not, or failed the wrong way.
    #[error("{step}: expected {expected}, got {outcome}")]
    Unexpected {
        step: &'static str,
        expected: &'static str,
        outcome: String,
    },
}

impl TourError {
    fn unexpected(step: &'static str, expected: &'static str, outcome: impl Debug) -> Self {
        Self::Unexpected {
            step,
            expected,
            outcome: format!("{outcome:?}"),
        }
    }
}

type Result<T> = std::result::Result<T, TourError>;

/// Returns the error a step must fail with, or fails the tour.
fn expect_rejection<T: Debug>(
    step: &'static str,
    expected: &'static str,
    outcome: std::result::Result<T, CollectionError>,
    is_expected: fn(&CollectionError) -> bool,
) -> Result<CollectionError> {
    match outcome {
        Err(e) if is_expected(&e) => Ok(e),
        other => Err(TourError::unexpected(step, expected, other)),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = CollectionsConfig::from_env()?;

    fixed_array(cli.array_len, &config)?;
    unique_set();
    dynamic_list(&config)?;
    linked_sequence()?;
    dictionary()?;
    ordered_dictionary()?;
    queue()?;
    stack()?;
    Ok(())
}

fn fixed_array(len: i64, config: &CollectionsConfig) -> Result<()> {
    println!("== fixed array");

    let mut students: FixedArray<String> = FixedArray::from_signed_len(len, config)?;
    if !students.is_empty() {
        students.set(0, "John Smith".to_string())?;
        println!("slot 0 = {:?}", students.get(0)?);
    }

    students.fill(String::new());
    println!("blanked all {} slots", students.len());

    match students.find(&"John Smith".to_string()) {
        Some(pos) => println!("found John Smith at {pos}"),
        None => println!("John Smith not found"),
    }

    let e = expect_rejection(
        "past-the-end read",
        "IndexOutOfRange",
        students.get(students.len()),
        |e| matches!(e, CollectionError::IndexOutOfRange { .. }),
    )?;
    println!("past the end: {e}");
    Ok(())
}

fn unique_set() {
    println!("== unique set");

    let mut students = UniqueSet::new();
    for name in ["John Smith", "Jane Doe", "Sam Spa"] {
        students.add(name);
    }

    println!("contains Jane Doe: {}", students.contains(&"Jane Doe"));
    println!("add Jane Doe again: {}", students.add("Jane Doe"));
    println!("{} distinct students", students.len());
}

fn dynamic_list(config: &CollectionsConfig) -> Result<()> {
    println!("== dynamic list");

    let mut students = DynamicList::with_config(config)?;
    println!("contains John Smith: {}", students.contains(&"John Smith"));

    students.append("John Smith");
    println!(
        "append_unique John Smith: {}",
        students.append_unique("John Smith")
    );

    students.append("John Smith");
    println!("duplicates allowed, len = {}", students.len());
    println!("remove John Smith: {}", students.remove(&"John Smith"));
    println!("len after remove = {}", students.len());
    Ok(())
}

fn linked_sequence() -> Result<()> {
    println!("== linked sequence");

    let mut names = LinkedSequence::new();
    let john = names.append_back("john");
    names.append_back("jake");
    let jane = names.append_back("jane");
    names.append_back("joe");
    println!("{}", render(&names));

    names.remove_node(jane)?;
    println!("removed jane: {}", render(&names));

    names.insert_after(john, "chris")?;
    println!("inserted chris after john: {}", render(&names));

    let e = expect_rejection(
        "stale handle removal",
        "InvalidReference",
        names.remove_node(jane),
        |e| *e == CollectionError::InvalidReference,
    )?;
    println!("remove jane again: {e}");
    Ok(())
}

fn render(names: &LinkedSequence<&str>) -> String {
    names
        .iter()
        .map(|name| format!("[{name}]"))
        .collect::<Vec<_>>()
        .join("<->")
}

fn dictionary() -> Result<()> {
    println!("== dictionary");

    let mut students: Dictionary<u32, &str> = Dictionary::new();
    students.add(134134, "John Smith")?;
    students.add(99999, "Jake Harrison")?;

    let e = expect_rejection(
        "duplicate add",
        "DuplicateKey",
        students.add(99999, "Jane Doe"),
        |e| *e == CollectionError::DuplicateKey,
    )?;
    println!("add 99999 again: {e}");
    println!("try_add 99999: {}", students.try_add(99999, "Jane Doe"));

    students.set(99999, "Jane Doe");
    println!("after set, 99999 = {}", students.get(&99999)?);
    Ok(())
}

fn ordered_dictionary() -> Result<()> {
    println!("== ordered dictionary");

    let mut students: OrderedDictionary<u32, &str> = OrderedDictionary::new();
    students.add(134134, "John Smith")?;
    students.add(99999, "Jane Doe")?;
    students.add(500, "Sam Spa")?;

    for (id, name) in students.iter() {
        println!("{id}: {name}");
    }
    Ok(())
}

fn queue() -> Result<()> {
    println!("== queue");

    let mut checkout_line = Queue::new();
    for name in ["John", "Jane", "Sam"] {
        checkout_line.enqueue(name);
    }

    println!("served {}", checkout_line.dequeue()?);
    println!("next up {}", checkout_line.peek()?);
    Ok(())
}

fn stack() -> Result<()> {
    println!("== stack");

    let mut playing_cards = Stack::new();
    for card in ["Jack", "Ace", "King"] {
        playing_cards.push(card);
    }

    println!("drew {}", playing_cards.pop()?);
    println!("next card {}", playing_cards.peek()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_duplicate(e: &CollectionError) -> bool {
        *e == CollectionError::DuplicateKey
    }

    #[test]
    fn expected_rejection_passes_through() {
        let e = expect_rejection(
            "duplicate add",
            "DuplicateKey",
            Err::<(), _>(CollectionError::DuplicateKey),
            is_duplicate,
        )
        .unwrap();
        assert_eq!(e, CollectionError::DuplicateKey);
    }

    #[test]
    fn success_where_rejection_expected_fails_tour() {
        let err = expect_rejection("duplicate add", "DuplicateKey", Ok(()), is_duplicate)
            .unwrap_err();
        assert!(matches!(err, TourError::Unexpected { .. }));
        assert_eq!(err.to_string(), "duplicate add: expected DuplicateKey, got Ok(())");
    }

    #[test]
    fn wrong_error_fails_tour() {
        let err = expect_rejection(
            "duplicate add",
            "DuplicateKey",
            Err::<(), _>(CollectionError::KeyNotFound),
            is_duplicate,
        )
        .unwrap_err();
        assert!(matches!(err, TourError::Unexpected { .. }));
    }

    #[test]
    fn collection_errors_keep_their_message() {
        let err = TourError::from(CollectionError::EmptyCollection);
        assert_eq!(err.to_string(), "collection is empty");
    }
}
