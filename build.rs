//! Generates the feature-name tables from the base metric catalog.
//!
//! Every static metric expands to `current_`, `parent_` and `delta_` columns,
//! aggregated metrics additionally to one column per aggregation. The result
//! is written to `$OUT_DIR/feature_sets.rs` as `&'static [&'static str]`
//! tables and included by `src/features/mod.rs`.

use std::fmt::Write as _;
use std::path::Path;

#[allow(dead_code)]
mod catalog {
    include!("src/features/catalog.rs");
}

const STATES: [&str; 3] = ["current", "parent", "delta"];

fn file_level(metrics: &[&str]) -> Vec<String> {
    metrics
        .iter()
        .flat_map(|m| STATES.iter().map(move |s| format!("{s}_{m}_file")))
        .collect()
}

fn aggregated(metrics: &[&str], scope: &str) -> Vec<String> {
    let mut names = Vec::new();
    for metric in metrics {
        for agg in catalog::STATIC_AGGREGATIONS {
            for state in STATES {
                names.push(format!("{state}_{metric}_{scope}_{agg}"));
            }
        }
    }
    names
}

fn pmd_level() -> Vec<String> {
    catalog::PMD_RULES
        .iter()
        .flat_map(|r| STATES.iter().map(move |s| format!("{s}_{}", r.abbrev)))
        .collect()
}

fn plain(metrics: &[&str]) -> Vec<String> {
    metrics.iter().map(|m| (*m).to_string()).collect()
}

fn emit(out: &mut String, name: &str, doc: &str, names: &[String]) {
    let _ = writeln!(out, "/// {doc}");
    let _ = writeln!(out, "pub static {name}: &[&str] = &[");
    for n in names {
        let _ = writeln!(out, "    {n:?},");
    }
    let _ = writeln!(out, "];\n");
}

fn main() {
    println!("cargo:rerun-if-changed=src/features/catalog.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let static_file = file_level(catalog::STATIC_FILE);
    let static_class = aggregated(catalog::STATIC_CLASS, "class");
    let static_interface = aggregated(catalog::STATIC_INTERFACE, "interface");
    let static_enum = aggregated(catalog::STATIC_ENUM, "enum");
    let static_method = aggregated(catalog::STATIC_METHOD, "method");
    let fgjit = plain(catalog::FGJIT);
    let jit = plain(catalog::JIT);
    let wd = plain(catalog::WD);
    let pmd = pmd_level();

    let static_all: Vec<String> = [
        &static_file,
        &static_class,
        &static_interface,
        &static_enum,
        &static_method,
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect();

    let all: Vec<String> = [&static_all, &fgjit, &jit, &wd, &pmd]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    let mut out = String::from("// @generated by build.rs from src/features/catalog.rs\n\n");
    emit(&mut out, "STATIC_FILE_FEATURES", "File-level static metrics.", &static_file);
    emit(&mut out, "STATIC_CLASS_FEATURES", "Class-aggregated static metrics.", &static_class);
    emit(
        &mut out,
        "STATIC_INTERFACE_FEATURES",
        "Interface-aggregated static metrics.",
        &static_interface,
    );
    emit(&mut out, "STATIC_ENUM_FEATURES", "Enum-aggregated static metrics.", &static_enum);
    emit(&mut out, "STATIC_METHOD_FEATURES", "Method-aggregated static metrics.", &static_method);
    emit(&mut out, "STATIC_FEATURES", "All static metrics.", &static_all);
    emit(&mut out, "FGJIT_FEATURES", "Fine-grained just-in-time features.", &fgjit);
    emit(&mut out, "JIT_FEATURES", "Kamei et al. just-in-time features.", &jit);
    emit(&mut out, "WD_FEATURES", "Warning-density features.", &wd);
    emit(&mut out, "PMD_FEATURES", "PMD rule hit counts.", &pmd);
    emit(&mut out, "ALL_FEATURES", "Every feature column, in catalog order.", &all);

    let out_dir = std::env::var("OUT_DIR").unwrap_or_else(|_| ".".to_string());
    let dest = Path::new(&out_dir).join("feature_sets.rs");
    if let Err(e) = std::fs::write(&dest, out) {
        panic!("failed to write {}: {e}", dest.display());
    }
}
