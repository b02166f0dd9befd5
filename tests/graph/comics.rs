use std::sync::LazyLock;

use labgraph::{LabeledGraph, co_occurrence_graph};

pub type ComicsGraph = LabeledGraph<String, String>;

pub static COMICS_GRAPH: LazyLock<ComicsGraph> = LazyLock::new(|| {
    let records = [
        ("AVF 4", "CAPTAIN AMERICA"),
        ("AVF 4", "IRON MAN"),
        ("AVF 4", "THOR"),
        ("AVF 12", "IRON MAN"),
        ("AVF 12", "WASP"),
        ("AVF 12", "THOR"),
        ("M/TU 3", "SPIDER-MAN"),
        ("M/TU 3", "WASP"),
        ("ASM 1", "SPIDER-MAN"),
        ("ASM 1", "HUMAN TORCH"),
        ("FF 1", "HUMAN TORCH"),
        ("FF 1", "MR. FANTASTIC"),
        ("SOLO 1", "HOWARD THE DUCK"),
    ];

    co_occurrence_graph(
        records
            .into_iter()
            .map(|(book, character)| (book.to_string(), character.to_string())),
    )
    .unwrap()
});
