//! Release helper: bumps the crate version, records release notes, and tags.
//!
//! Run with: cargo run --features release-tool --bin release -- <major|minor|patch|X.Y.Z>

use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

const MANIFEST: &str = "Cargo.toml";
const CHANGELOG: &str = "CHANGELOG.md";

type BoxError = Box<dyn std::error::Error>;

fn git(args: &[&str]) -> Result<String, BoxError> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Err(format!("git {} failed", args.join(" ")).into());
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

fn latest_tag() -> Option<String> {
    git(&["describe", "--tags", "--abbrev=0"]).ok()
}

fn commits_since(tag: Option<&str>) -> Result<String, BoxError> {
    match tag {
        Some(tag) => git(&["log", "--pretty=format:- %s", &format!("{}..HEAD", tag)]),
        None => git(&["log", "--pretty=format:- %s"]),
    }
}

fn parse_version(version: &str) -> Result<[u64; 3], BoxError> {
    let parts = version
        .split('.')
        .map(str::parse::<u64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("unsupported version format: {}", version))?;
    let [major, minor, patch] = parts[..] else {
        return Err(format!("unsupported version format: {}", version).into());
    };
    Ok([major, minor, patch])
}

fn next_version(current: &str, request: &str) -> Result<String, BoxError> {
    let [major, minor, patch] = parse_version(current)?;

    let next = match request {
        "major" => format!("{}.0.0", major + 1),
        "minor" => format!("{}.{}.0", major, minor + 1),
        "patch" => format!("{}.{}.{}", major, minor, patch + 1),
        explicit => {
            let [major, minor, patch] = parse_version(explicit).map_err(|_| {
                format!("expected major, minor, patch or X.Y.Z, got {}", explicit)
            })?;
            format!("{}.{}.{}", major, minor, patch)
        }
    };
    Ok(next)
}

fn confirm(message: &str) -> Result<bool, io::Error> {
    print!("{} (y/n): ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

fn prepend_changelog(version: &str, notes: &str) -> Result<(), BoxError> {
    let previous = fs::read_to_string(CHANGELOG).unwrap_or_default();
    let date = Local::now().format("%Y-%m-%d");
    let notes = if notes.is_empty() { "- No changes recorded" } else { notes };
    let entry = format!("## {} ({})\n\n{}\n\n", version, date, notes);
    fs::write(CHANGELOG, entry + &previous)?;
    Ok(())
}

fn run(cmd: &str, args: &[&str]) -> Result<(), BoxError> {
    println!("Executing: {} {}", cmd, args.join(" "));
    let status = Command::new(cmd).args(args).status()?;
    if !status.success() {
        return Err(format!("{} {} failed", cmd, args.join(" ")).into());
    }
    Ok(())
}

fn main() -> Result<(), BoxError> {
    let request = std::env::args()
        .nth(1)
        .ok_or("usage: release <major|minor|patch|X.Y.Z>")?;

    let mut doc = fs::read_to_string(MANIFEST)?.parse::<DocumentMut>()?;
    let current = doc["package"]["version"]
        .as_str()
        .ok_or("no package.version in Cargo.toml")?
        .to_string();
    let version = next_version(&current, &request)?;

    if !confirm(&format!("Release {} -> {}?", current, version))? {
        println!("Release aborted.");
        return Ok(());
    }

    doc["package"]["version"] = Item::from(version.as_str());
    fs::write(MANIFEST, doc.to_string())?;
    println!("Updated {} to {}", MANIFEST, version);

    let tag = latest_tag();
    let notes = commits_since(tag.as_deref())?;
    prepend_changelog(&version, &notes)?;
    println!("Updated {}", CHANGELOG);

    // Refresh Cargo.lock for the new version
    run("cargo", &["check", "--all-features"])?;

    let tag_name = format!("v{}", version);
    run("git", &["add", MANIFEST, "Cargo.lock", CHANGELOG])?;
    run("git", &["commit", "-m", &format!("Release {}", version)])?;
    run("git", &["tag", "-a", &tag_name, "-m", &format!("Version {}", version)])?;

    if confirm("Push commits and tags?")? {
        run("git", &["push"])?;
        run("git", &["push", "--tags"])?;
    }

    if confirm("Publish to crates.io?")? {
        run("cargo", &["publish"])?;
    } else {
        println!("Skipping crates.io publishing.");
    }

    println!("Released {}", version);
    Ok(())
}
