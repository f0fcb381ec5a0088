//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use truthmines_domain::{PathResult, PathType};
use truthmines_engine::{Challenge, CrossDomainLinks, Severity, TensionBreakdown};

/// One row of the salience ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalienceRow {
    /// Node ID
    pub id: String,
    /// Node title
    pub title: String,
    /// Salience in [0, 1]
    pub salience: f64,
    /// Size multiplier relative to the base node size
    pub size: f64,
    /// Opacity in [0.2, 1]
    pub opacity: f64,
    /// Whether the label is drawn
    pub label: bool,
}

/// One row of the depth listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthRow {
    /// Node ID
    pub id: String,
    /// Node title
    pub title: String,
    /// Epistemic depth (0 = foundation)
    pub depth: u32,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the strongest justification path of `target`.
    pub fn format_path(&self, target: &str, result: Option<&PathResult>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "target": target,
                "result": result,
            }))?),
            OutputFormat::Quiet => Ok(result.map(|r| r.path.join("\n")).unwrap_or_default()),
            OutputFormat::Table => {
                let Some(result) = result else {
                    return Ok(self.colorize(
                        &format!("No foundation path found for {target}."),
                        "yellow",
                    ));
                };

                let mut builder = Builder::default();
                builder.push_record(["Step", "Node", "Role"]);
                for (step, node) in result.path.iter().enumerate() {
                    let role = if result.entry_point.as_deref() == Some(node.as_str()) && step == 0 {
                        "cycle entry"
                    } else if step == 0 {
                        "foundation"
                    } else if node == target && step + 1 == result.path.len() {
                        "target"
                    } else {
                        ""
                    };
                    builder.push_record([step.to_string(), node.clone(), role.to_string()]);
                }

                let mut out = self.table(builder);
                out.push('\n');
                out.push_str(&format!(
                    "Weight: {:.3}  Type: {}",
                    result.path_weight,
                    self.path_type(result.path_type)
                ));
                if result.is_coherentist {
                    out.push('\n');
                    out.push_str(&self.colorize(
                        "Coherentist cluster: justification loops back on itself",
                        "magenta",
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Format hop distances around `focus`.
    pub fn format_neighbors(&self, focus: &str, rows: &[(String, usize)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let neighbors: serde_json::Map<String, serde_json::Value> = rows
                    .iter()
                    .map(|(id, hops)| (id.clone(), serde_json::Value::from(*hops)))
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "focus": focus,
                    "neighbors": neighbors,
                }))?)
            }
            OutputFormat::Quiet => Ok(join_ids(rows.iter().map(|(id, _)| id.as_str()))),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No neighbors found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Node", "Hops"]);
                for (id, hops) in rows {
                    builder.push_record([id.clone(), hops.to_string()]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format the tension of a node.
    pub fn format_tension(&self, node: &str, breakdown: &TensionBreakdown) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "node": node,
                "support": breakdown.support,
                "attack": breakdown.attack,
                "tension": breakdown.score,
            }))?),
            OutputFormat::Quiet => Ok(format!("{:.3}", breakdown.score)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Node", "Support", "Attack", "Tension"]);
                builder.push_record([
                    node.to_string(),
                    format!("{:.2}", breakdown.support),
                    format!("{:.2}", breakdown.attack),
                    format!("{:.3}", breakdown.score),
                ]);
                Ok(self.table(builder))
            }
        }
    }

    /// Format the salience ranking.
    pub fn format_salience(&self, rows: &[SalienceRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Quiet => Ok(join_ids(rows.iter().map(|r| r.id.as_str()))),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No nodes found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Node", "Title", "Salience", "Size", "Opacity", "Label"]);
                for row in rows {
                    builder.push_record([
                        row.id.clone(),
                        row.title.clone(),
                        format!("{:.3}", row.salience),
                        format!("{:.2}x", row.size),
                        format!("{:.2}", row.opacity),
                        if row.label { "yes" } else { "no" }.to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format the challenges aimed at a node.
    pub fn format_challenges(&self, node: &str, challenges: &[Challenge]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "node": node,
                "challenges": challenges,
            }))?),
            OutputFormat::Quiet => Ok(join_ids(challenges.iter().map(|c| c.from.as_str()))),
            OutputFormat::Table => {
                if challenges.is_empty() {
                    return Ok(self.colorize(&format!("No challenges to {node}."), "green"));
                }

                let mut builder = Builder::default();
                builder.push_record(["From", "Relation", "Weight", "Severity"]);
                for challenge in challenges {
                    builder.push_record([
                        challenge.from.clone(),
                        challenge.relation.to_string(),
                        format!("{:.2}", challenge.weight),
                        self.severity(challenge.severity),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format the cross-domain bridges of a node.
    pub fn format_bridges(&self, node: &str, links: &CrossDomainLinks<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "node": node,
                "incoming": links.incoming,
                "outgoing": links.outgoing,
            }))?),
            OutputFormat::Quiet => Ok(join_ids(
                links
                    .incoming
                    .iter()
                    .map(|l| l.edge.from.as_str())
                    .chain(links.outgoing.iter().map(|l| l.edge.to.as_str())),
            )),
            OutputFormat::Table => {
                if links.is_empty() {
                    return Ok(self.colorize(&format!("No cross-domain bridges for {node}."), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Direction", "Other Node", "Relation", "Domains", "Weight"]);
                let rows = links
                    .incoming
                    .iter()
                    .map(|l| ("in", l.edge.from.as_str(), l))
                    .chain(links.outgoing.iter().map(|l| ("out", l.edge.to.as_str(), l)));
                for (direction, other, link) in rows {
                    let domains = match &link.domains.to {
                        Some(to) => format!("{} → {}", link.domains.from, to),
                        None => link.domains.from.clone(),
                    };
                    let weight = link
                        .edge
                        .weight
                        .map(|w| format!("{w:.2}"))
                        .unwrap_or_else(|| "-".to_string());
                    builder.push_record([
                        direction.to_string(),
                        other.to_string(),
                        link.edge.relation.to_string(),
                        domains,
                        weight,
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format the depth of every listed node.
    pub fn format_depths(&self, rows: &[DepthRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|r| format!("{}\t{}", r.id, r.depth))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No nodes found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Depth", "Node", "Title"]);
                for row in rows {
                    builder.push_record([row.depth.to_string(), row.id.clone(), row.title.clone()]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format the load-bearing score of a node.
    pub fn format_load_bearing(&self, node: &str, score: f64) -> Result<String> {
        let band = load_band(score);
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "node": node,
                "loadBearing": score,
                "band": band,
            }))?),
            OutputFormat::Quiet => Ok(format!("{score:.3}")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Node", "Load-Bearing", "Band"]);
                builder.push_record([
                    node.to_string(),
                    format!("{:.1}%", score * 100.0),
                    self.colorize(band, band_color(band)),
                ]);
                Ok(self.table(builder))
            }
        }
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn path_type(&self, path_type: PathType) -> String {
        let color = match path_type {
            PathType::Deductive => "green",
            PathType::Inductive => "cyan",
            PathType::Mixed => "yellow",
        };
        self.colorize(path_type.as_str(), color)
    }

    fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Strong => "red",
            Severity::Moderate => "yellow",
            Severity::Weak => "",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Name the structural importance of a load-bearing score.
pub fn load_band(score: f64) -> &'static str {
    if score <= 0.0 {
        "none"
    } else if score <= 0.05 {
        "minor"
    } else if score <= 0.2 {
        "significant"
    } else if score <= 0.5 {
        "critical"
    } else {
        "foundational"
    }
}

fn band_color(band: &str) -> &'static str {
    match band {
        "critical" => "yellow",
        "foundational" => "red",
        _ => "",
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}
