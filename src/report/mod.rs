pub mod tabularize;

use std::cmp::Reverse;

use crate::classifier::{PartitionSummary, Partitions};
use crate::error::ShardCheckError;
use crate::parsing::{coerce_size_gb, display_or, parse_shard_number};
use crate::types::ShardRecord;

pub use tabularize::tabularize;

pub const SUCCESS_TITLE: &str = "Shards";

pub fn failure_title(status: u16) -> String {
    format!("Shards Check Failed with HTTP Code [{}]", status)
}

/// Row order of a detail table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// index, shard number, prirep, node
    ByIndex,
    /// largest store first, then as `ByIndex`
    BySize,
}

/// Body of a successful check: the summary table followed by one detail table
/// per non-empty group among unassigned, initializing, relocating and oversized.
pub fn render_body(partitions: &Partitions<'_>) -> Result<String, ShardCheckError> {
    let mut body = render_summary(&partitions.summary());

    let details: [(&str, &[&ShardRecord], SortOrder); 4] = [
        ("Unassigned", &partitions.unassigned, SortOrder::ByIndex),
        ("Initializing", &partitions.initializing, SortOrder::ByIndex),
        ("Relocating", &partitions.relocating, SortOrder::ByIndex),
        ("Oversized", &partitions.oversized, SortOrder::BySize),
    ];
    for (title, group, order) in details {
        if !group.is_empty() {
            body.push_str(&render_table(title, group, order)?);
        }
    }

    Ok(body)
}

pub fn render_summary(summary: &PartitionSummary) -> String {
    format!(
        "<table width='100%' border=1 cellpadding=3 cellspacing=0>\
         <tr><td>Total</td><td>{}</td></tr>\
         <tr><td>Started</td><td>{}</td></tr>\
         <tr><td>Initializing</td><td>{}</td></tr>\
         <tr><td>Relocating</td><td>{}</td></tr>\
         <tr><td>Unassigned</td><td>{}</td></tr>\
         <tr><td>Oversized</td><td>{}</td></tr>\
         </table><br />",
        summary.total,
        summary.started,
        summary.initializing,
        summary.relocating,
        summary.unassigned,
        summary.oversized,
    )
}

pub fn render_table(
    title: &str,
    shards: &[&ShardRecord],
    order: SortOrder,
) -> Result<String, ShardCheckError> {
    let mut out = format!(
        "<table width='100%' border=1 cellpadding=3 cellspacing=0>\
         <caption>{} Shards</caption>\
         <tr><th>Index</th><th>Shard</th><th>prirep</th><th>Reason</th>\
         <th>Docs</th><th>Size (GB)</th><th>IP</th><th>Node</th></tr>",
        escape_html(title)
    );
    for shard in sorted(shards, order)? {
        out.push_str(&render_row(shard));
    }
    out.push_str("</table><br/>");
    Ok(out)
}

fn render_row(shard: &ShardRecord) -> String {
    let cells = [
        shard.index.as_str(),
        shard.shard.as_str(),
        shard.prirep.as_str(),
        display_or(shard.unassigned_reason.as_deref(), "N/A"),
        display_or(shard.docs.as_deref(), "0"),
        display_or(shard.store.as_deref(), "0"),
        display_or(shard.ip.as_deref(), ""),
        display_or(shard.node.as_deref(), ""),
    ];
    let cells: Vec<String> = cells.iter().map(|c| escape_html(c)).collect();
    format!("<tr><td>{}</td></tr>", cells.join("</td><td>"))
}

/// Sorts a group for display. Fails if any shard number is not an integer.
pub fn sorted<'a>(
    shards: &[&'a ShardRecord],
    order: SortOrder,
) -> Result<Vec<&'a ShardRecord>, ShardCheckError> {
    let mut keyed = shards
        .iter()
        .map(|&s| {
            let key = IndexKey {
                index: &s.index,
                shard: parse_shard_number(s)?,
                prirep: &s.prirep,
                node: s.node.as_deref().unwrap_or(""),
            };
            Ok::<_, ShardCheckError>((key, s))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match order {
        SortOrder::ByIndex => keyed.sort_by(|(a, _), (b, _)| a.cmp(b)),
        SortOrder::BySize => keyed.sort_by_key(|(key, s)| {
            (Reverse(coerce_size_gb(s.store.as_deref())), key.clone())
        }),
    }

    Ok(keyed.into_iter().map(|(_, s)| s).collect())
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct IndexKey<'a> {
    index: &'a str,
    shard: u32,
    prirep: &'a str,
    node: &'a str,
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
