//! Benchmark utilities.

#![warn(missing_docs)]

use rand::Rng;
use reldux_core::{collection, schema, Schema, TableSpace};
use reldux_value::Row;

/// Name of the table every session benchmark writes to.
pub const TABLE: &str = "Item";

/// A schema with one collection.
pub fn item_schema() -> Schema {
    schema([collection(TABLE)]).expect("bench schema is valid")
}

/// A schema of authors with many posts.
pub fn blog_schema() -> Schema {
    schema([
        collection("Author").has_many("posts", "Post", "author"),
        collection("Post").belongs_to("author", "Author"),
    ])
    .expect("bench schema is valid")
}

/// Generate a row with an id and a random payload.
pub fn random_row(id: i64) -> Row {
    let mut rng = rand::thread_rng();
    Row::new()
        .with("id", id)
        .with("score", rng.gen_range(0i64..1000))
        .with("flag", rng.gen_bool(0.5))
}

/// Generate a batch of rows with ids `0..count`.
pub fn generate_rows(count: usize) -> Vec<Row> {
    (0..count as i64).map(random_row).collect()
}

/// Builds a snapshot holding `count` rows.
pub fn populated(schema: &Schema, count: usize) -> TableSpace {
    let mut db = schema.db(schema.initial());
    for row in generate_rows(count) {
        db.insert(TABLE, row);
    }
    db.run().expect("failed to populate")
}

/// Builds a blog snapshot with `authors` authors and `posts` posts each.
pub fn populated_blog(schema: &Schema, authors: usize, posts: usize) -> TableSpace {
    let mut db = schema.db(schema.initial());
    for a in 0..authors as i64 {
        db.insert("Author", Row::new().with("id", a));
        for p in 0..posts as i64 {
            let id = a * posts as i64 + p;
            db.insert("Post", Row::new().with("id", id).with("author", a));
        }
    }
    db.run().expect("failed to populate")
}
