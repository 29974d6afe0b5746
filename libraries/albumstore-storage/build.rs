//! Rebuilds the crate when a file under `migrations/` changes, since
//! `sqlx::migrate!` embeds the SQL at compile time.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
