use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

/// Runtime dependencies each inner crate may have.
const ALLOWED_DEPS: &[(&str, &[&str])] = &[
    ("warps-domain", &["serde", "serde_json", "thiserror", "uuid"]),
    ("warps-shared", &["serde", "warps-domain"]),
];

/// Source patterns that must not appear in the domain crate.
const DOMAIN_FORBIDDEN: &[(&str, &str)] = &[
    (r"\btokio::", "async runtime"),
    (r"\bstd::fs\b", "filesystem access"),
    (r"\bstd::io\b", "I/O"),
    (r"\btracing::", "logging"),
    (r"\bwarps_engine\b", "engine crate"),
];

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = check_dependencies(&metadata.packages);
    violations.extend(check_domain_sources(
        &metadata.workspace_root.join("crates/domain/src"),
    )?);

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }
    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn check_dependencies(packages: &[Package]) -> Vec<String> {
    let mut violations = Vec::new();
    for (crate_name, allowed) in ALLOWED_DEPS {
        let Some(package) = packages.iter().find(|p| p.name == *crate_name) else {
            violations.push(format!("{crate_name} not found in workspace"));
            continue;
        };
        for dep in &package.dependencies {
            // dev and build dependencies don't ship
            if dep.kind.is_some() {
                continue;
            }
            if !allowed.contains(&dep.name.as_str()) {
                violations.push(format!("{crate_name} must not depend on {}", dep.name));
            }
        }
    }
    violations
}

fn check_domain_sources(dir: &Path) -> anyhow::Result<Vec<String>> {
    let patterns = DOMAIN_FORBIDDEN
        .iter()
        .map(|(pattern, what)| Ok((regex_lite::Regex::new(pattern)?, *what)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut violations = Vec::new();
    for file in rust_files(dir)? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (line_no, line) in source.lines().enumerate() {
            if line.trim_start().starts_with("//") {
                continue;
            }
            for (regex, what) in &patterns {
                if regex.is_match(line) {
                    violations.push(format!(
                        "{}:{}: domain code uses {what}",
                        file.display(),
                        line_no + 1
                    ));
                }
            }
        }
    }
    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, deps: &[(&str, Option<&str>)]) -> Package {
        Package {
            name: name.into(),
            dependencies: deps
                .iter()
                .map(|(name, kind)| Dependency {
                    name: (*name).into(),
                    kind: kind.map(String::from),
                })
                .collect(),
        }
    }

    #[test]
    fn flags_engine_only_dependency_in_domain() {
        let packages = vec![
            package("warps-domain", &[("uuid", None), ("tokio", None)]),
            package("warps-shared", &[("warps-domain", None), ("serde", None)]),
        ];
        assert_eq!(
            check_dependencies(&packages),
            vec!["warps-domain must not depend on tokio".to_string()]
        );
    }

    #[test]
    fn shared_keeps_serde_json_out_of_runtime() {
        let packages = vec![
            package("warps-domain", &[]),
            package(
                "warps-shared",
                &[("serde", None), ("serde_json", Some("dev")), ("warps-domain", None)],
            ),
        ];
        assert!(check_dependencies(&packages).is_empty());

        let packages = vec![
            package("warps-domain", &[]),
            package("warps-shared", &[("serde_json", None)]),
        ];
        assert_eq!(
            check_dependencies(&packages),
            vec!["warps-shared must not depend on serde_json".to_string()]
        );
    }

    #[test]
    fn dev_dependencies_are_ignored() {
        let packages = vec![
            package("warps-domain", &[("serde", None), ("mockall", Some("dev"))]),
            package("warps-shared", &[]),
        ];
        assert!(check_dependencies(&packages).is_empty());
    }

    #[test]
    fn scans_domain_sources() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("ok.rs"), "// tokio::spawn is only mentioned\nfn f() {}\n").unwrap();
        std::fs::write(dir.join("nested/bad.rs"), "use std::fs;\n").unwrap();

        let violations = check_domain_sources(dir).unwrap();

        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("bad.rs:1"));
    }
}
