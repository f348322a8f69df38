//! Parsing of the SDKMAN candidates API `versions/list` responses.
//!
//! Java comes back as a vendor table, every other candidate as a grid of
//! versions laid out column by column.

use std::collections::HashSet;

use log::{debug, trace};
use sdkui_backend::{Identifier, VersionRecord};

const TABLE_COLUMNS: usize = 6;
const STATUS_INSTALLED: &str = "installed";
const STATUS_LOCAL_ONLY: &str = "local only";

/// Platform segment used in candidates API URLs.
#[must_use]
pub fn platform_id() -> &'static str {
    match (std::env::consts::OS, std::env::consts::ARCH) {
        ("linux", "x86_64") => "linuxx64",
        ("linux", "aarch64") => "linuxarm64",
        ("linux", "x86") => "linuxx32",
        ("linux", "arm") => "linuxarm32hf",
        ("macos", "x86_64") => "darwinx64",
        ("macos", "aarch64") => "darwinarm64",
        ("windows", "x86_64") => "windowsx64",
        _ => "exotic",
    }
}

/// Parse a listing in either layout, keeping the catalog order.
#[must_use]
pub fn parse_listing(body: &str) -> Vec<VersionRecord> {
    if body.lines().any(|line| line.contains('|')) {
        parse_table(body)
    } else {
        parse_grid(body)
    }
}

fn parse_table(body: &str) -> Vec<VersionRecord> {
    let mut records = Vec::new();
    let mut vendor = String::new();

    for line in body.lines() {
        let cells: Vec<&str> = line.split('|').map(str::trim).collect();
        if cells.len() < TABLE_COLUMNS || cells[0] == "Vendor" {
            continue;
        }

        if !cells[0].is_empty() {
            vendor = cells[0].to_string();
        }

        let identifier = match Identifier::new(cells[5]) {
            Ok(identifier) => identifier,
            Err(e) => {
                debug!("Skipping table row {line:?}: {e}");
                continue;
            }
        };

        let (installed, available) = match cells[4] {
            STATUS_INSTALLED => (true, true),
            STATUS_LOCAL_ONLY => (true, false),
            _ => (false, true),
        };

        records.push(VersionRecord {
            identifier,
            vendor: vendor.clone(),
            version: cells[2].to_string(),
            dist: cells[3].to_string(),
            installed,
            available,
        });
    }

    trace!("Parsed {} table rows", records.len());
    records
}

struct GridCell {
    identifier: Identifier,
    installed: bool,
    local_only: bool,
}

fn parse_grid(body: &str) -> Vec<VersionRecord> {
    let rows: Vec<Vec<GridCell>> = grid_body(body)
        .into_iter()
        .map(parse_grid_line)
        .filter(|row| !row.is_empty())
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut records = Vec::new();
    for column in 0..columns {
        for row in &rows {
            if let Some(cell) = row.get(column) {
                records.push(VersionRecord::plain(
                    cell.identifier.clone(),
                    cell.installed || cell.local_only,
                    !cell.local_only,
                ));
            }
        }
    }

    trace!("Parsed {} grid entries", records.len());
    records
}

/// Lines between the second and third `====` rules. A response without the
/// usual banner is taken whole.
fn grid_body(body: &str) -> Vec<&str> {
    let is_rule = |line: &str| line.trim_start().starts_with("===");
    if body.lines().filter(|&line| is_rule(line)).count() < 2 {
        return body.lines().collect();
    }

    let mut rules = 0;
    let mut lines = Vec::new();
    for line in body.lines() {
        if is_rule(line) {
            rules += 1;
            continue;
        }
        if rules == 2 {
            lines.push(line);
        }
    }
    lines
}

fn parse_grid_line(line: &str) -> Vec<GridCell> {
    let mut cells = Vec::new();
    let mut installed = false;
    let mut local_only = false;

    for token in line.split_whitespace() {
        match token {
            ">" => {}
            "*" => installed = true,
            "+" => local_only = true,
            _ => {
                match Identifier::new(token) {
                    Ok(identifier) => cells.push(GridCell {
                        identifier,
                        installed,
                        local_only,
                    }),
                    Err(e) => debug!("Skipping grid token {token:?}: {e}"),
                }
                installed = false;
                local_only = false;
            }
        }
    }

    cells
}

/// Make the installed flags agree with what is actually on disk and append
/// installed versions the catalog does not know about.
pub(crate) fn reconcile(records: Vec<VersionRecord>, on_disk: &[Identifier]) -> Vec<VersionRecord> {
    let installed: HashSet<&Identifier> = on_disk.iter().collect();
    let tabular = records.iter().any(|record| !record.dist.is_empty());

    let mut seen = HashSet::new();
    let mut reconciled: Vec<VersionRecord> = records
        .into_iter()
        .filter_map(|mut record| {
            record.installed = installed.contains(&record.identifier);
            seen.insert(record.identifier.clone());
            (record.installed || record.available).then_some(record)
        })
        .collect();

    for identifier in on_disk {
        if !seen.contains(identifier) {
            debug!("Adding local-only version {identifier}");
            reconciled.push(local_record(identifier.clone(), tabular));
        }
    }

    reconciled
}

fn local_record(identifier: Identifier, tabular: bool) -> VersionRecord {
    if tabular && let Some((version, dist)) = identifier.as_str().rsplit_once('-') {
        return VersionRecord {
            vendor: String::new(),
            version: version.to_string(),
            dist: dist.to_string(),
            installed: true,
            available: false,
            identifier,
        };
    }
    VersionRecord::plain(identifier, true, false)
}
