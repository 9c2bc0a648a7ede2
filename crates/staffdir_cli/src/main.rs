//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdir_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use staffdir_core::db::open_db_in_memory;
use staffdir_core::{
    validate_draft, Directory, EmployeeDraft, EmployeePatch, RolePolicy, SqliteKvStore,
    DEFAULT_COLLECTION_KEY,
};

fn main() {
    println!("staffdir_core version={}", staffdir_core::core_version());

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("db open failed: {err}");
            std::process::exit(1);
        }
    };
    let backing = match SqliteKvStore::try_new(conn, DEFAULT_COLLECTION_KEY) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("backing store rejected connection: {err}");
            std::process::exit(1);
        }
    };

    let mut directory = Directory::open(Box::new(backing));

    let draft = EmployeeDraft::new("Ana", "ana@x.com", "Dev");
    let report = validate_draft(&draft, RolePolicy::Required);
    println!("draft valid={}", report.is_valid());

    let created = directory.create(draft);
    println!("created id_assigned={} count={}", created.id > 0, directory.len());

    let patch = EmployeePatch {
        role: Some("Lead".to_string()),
        ..EmployeePatch::default()
    };
    match directory.update(created.id, patch) {
        Ok(updated) => println!("updated role={}", updated.role),
        Err(err) => eprintln!("update failed: {err}"),
    }

    let removed = directory.delete(created.id);
    println!("deleted={removed} count={}", directory.len());
}
