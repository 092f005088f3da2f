use learn_words_core::WordDraft;

use crate::store::{StoreResult, WordStore};

/// Demonstration vocabulary: (english, finnish, swedish, tags).
pub const DEMO_WORDS: &[(&str, &str, &str, &str)] = &[
    // Animals
    ("dog", "koira", "hund", "animals"),
    ("cat", "kissa", "katt", "animals"),
    ("cow", "lehmä", "ko", "animals"),
    ("pig", "sika", "gris", "animals"),
    ("sheep", "lammas", "får", "animals"),
    ("horse", "hevonen", "häst", "animals"),
    // Colors
    ("red", "punainen", "röd", "colors"),
    ("blue", "sininen", "blå", "colors"),
    ("yellow", "keltainen", "gul", "colors"),
    ("green", "vihreä", "grön", "colors"),
    ("black", "musta", "svart", "colors"),
    ("white", "valkoinen", "vit", "colors"),
    // Vehicles
    ("car", "auto", "bil", "vehicles"),
    ("bus", "bussi", "buss", "vehicles"),
    ("train", "juna", "tåg", "vehicles"),
    ("bicycle", "polkupyörä", "cykel", "vehicles"),
    ("truck", "rekka", "lastbil", "vehicles"),
    ("plane", "lentokone", "flygplan", "vehicles"),
];

/// Inserts [`DEMO_WORDS`] into an empty store. Returns the number of rows
/// written; a store that already holds words is left alone.
pub async fn seed_demo_words(store: &WordStore) -> StoreResult<usize> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::debug!(existing, "word store already populated, skipping demo seed");
        return Ok(0);
    }

    for (english, finnish, swedish, tags) in DEMO_WORDS {
        store
            .add(&WordDraft::new(*english, *finnish, *swedish, *tags))
            .await?;
    }

    tracing::info!(count = DEMO_WORDS.len(), "seeded demo words");
    Ok(DEMO_WORDS.len())
}
