//! Parser for the compact relation-block edge format
//!
//! ```text
//! supports[2]{f,t,w,domain}:
//! abc123,def456,0.9,philosophy
//! ghi789,jkl012,0.85,philosophy
//!
//! defines[1]{f,t,domain}:
//! abc123,ghi789,philosophy
//! ```
//!
//! Parsing is lenient: lines that do not fit are dropped and the rest of the
//! input is still returned.

use tracing::debug;
use truthmines_domain::{Edge, Relation};

/// Parse relation blocks into edges, in input order
///
/// Data lines take one of two shapes:
/// - `from,to,weight,domain` (the line is dropped when `weight` is not a finite number)
/// - `from,to,domain` (weight left unset)
///
/// Blank lines, data lines before the first header and lines with any other
/// field count are skipped. The declared count and field list in a header
/// are not checked against the data.
pub fn parse_edges(text: &str) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut current_relation: Option<Relation> = None;
    let mut skipped = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(relation) = parse_header(line) {
            current_relation = Some(Relation::parse(relation));
            continue;
        }

        let Some(relation) = &current_relation else {
            debug!(line = idx + 1, "Skipping data line before any block header");
            skipped += 1;
            continue;
        };

        match parse_data_line(line, relation) {
            Some(edge) => edges.push(edge),
            None => {
                debug!(line = idx + 1, "Skipping malformed edge line");
                skipped += 1;
            }
        }
    }

    debug!(edges = edges.len(), skipped, "Parsed edge blocks");
    edges
}

/// Recognize `relation[count]{fields}:` and return the relation name
fn parse_header(line: &str) -> Option<&str> {
    let body = line.strip_suffix(':')?;

    let open_bracket = body.find('[')?;
    let relation = &body[..open_bracket];
    if relation.is_empty() || !relation.chars().all(is_word_char) {
        return None;
    }

    let rest = &body[open_bracket + 1..];
    let close_bracket = rest.find(']')?;
    let count = &rest[..close_bracket];
    if count.is_empty() || !count.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let fields = rest[close_bracket + 1..]
        .strip_prefix('{')?
        .strip_suffix('}')?;
    if fields.is_empty() {
        return None;
    }

    Some(relation)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn parse_data_line(line: &str, relation: &Relation) -> Option<Edge> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    match fields.as_slice() {
        [from, to, weight, domain] => {
            let weight = leading_decimal(weight).filter(|w| w.is_finite())?;
            Some(Edge::new(*from, *to, relation.clone(), *domain, Some(weight)))
        }
        [from, to, domain] => Some(Edge::new(*from, *to, relation.clone(), *domain, None)),
        _ => None,
    }
}

/// Parse the longest decimal prefix of `text`, so `0.9x` reads as 0.9.
///
/// Only digit spellings are accepted; `inf` and `NaN` have no decimal prefix.
fn leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_block() {
        let text = "supports[2]{f,t,w,domain}:\nabc123,def456,0.9,philosophy\nghi789,jkl012,0.85,philosophy\n";
        let edges = parse_edges(text);

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0], Edge::new("abc123", "def456", Relation::Supports, "philosophy", Some(0.9)));
        assert_eq!(edges[1].from, "ghi789");
        assert_eq!(edges[1].weight, Some(0.85));
    }

    #[test]
    fn test_parse_multiple_blocks_scope_relation() {
        let text = "\
supports[1]{f,t,w,domain}:
a,b,0.9,philosophy

attacks[2]{f,t,w,domain}:
c,b,0.6,philosophy
d,b,0.5,philosophy
";
        let edges = parse_edges(text);

        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].relation, Relation::Supports);
        assert_eq!(edges[1].relation, Relation::Attacks);
        assert_eq!(edges[2].relation, Relation::Attacks);
        assert_eq!(edges[2].from, "d");
    }

    #[test]
    fn test_three_field_line_has_no_weight() {
        let edges = parse_edges("defines[1]{f,t,domain}:\nx,y,mathematics\n");

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].relation, Relation::Defines);
        assert_eq!(edges[0].domain, "mathematics");
        assert_eq!(edges[0].weight, None);
    }

    #[test]
    fn test_unparseable_weight_drops_line() {
        let text = "supports[3]{f,t,w,domain}:\na,b,high,philosophy\nc,d,NaN,philosophy\ne,f,0.4,philosophy\n";
        let edges = parse_edges(text);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, "e");
    }

    #[test]
    fn test_weight_read_from_decimal_prefix() {
        let text = "supports[4]{f,t,w,domain}:\na,b,0.9x,philosophy\nc,d,.5,philosophy\ne,f,8e-1kg,philosophy\ng,h,inf,philosophy\n";
        let edges = parse_edges(text);

        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0].weight, Some(0.9));
        assert_eq!(edges[1].weight, Some(0.5));
        assert_eq!(edges[2].weight, Some(0.8));
    }

    #[test]
    fn test_decimal_prefix_edge_cases() {
        assert_eq!(leading_decimal("1e"), Some(1.0));
        assert_eq!(leading_decimal("-0.25,"), Some(-0.25));
        assert_eq!(leading_decimal("."), None);
        assert_eq!(leading_decimal("NaN"), None);
        assert_eq!(leading_decimal(""), None);
    }

    #[test]
    fn test_wrong_field_count_skipped() {
        let text = "supports[4]{f,t,w,domain}:\na,b\na,b,0.9,philosophy,extra\njunk\nc,d,0.8,philosophy\n";
        let edges = parse_edges(text);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, "c");
    }

    #[test]
    fn test_declared_count_not_enforced() {
        let text = "proves[1]{f,t,w,domain}:\na,b,1.0,mathematics\nb,c,1.0,mathematics\nc,d,1.0,mathematics\n";
        assert_eq!(parse_edges(text).len(), 3);
    }

    #[test]
    fn test_data_before_header_skipped() {
        let text = "a,b,0.9,philosophy\nsupports[1]{f,t,w,domain}:\nc,d,0.9,philosophy\n";
        let edges = parse_edges(text);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, "c");
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(parse_edges("").is_empty());
        assert!(parse_edges("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_bridge_domain_preserved() {
        let text = "formalizes[1]{f,t,w,domain}:\n00c001,t4k2p9,0.85,bridge:phil→math\n";
        let edges = parse_edges(text);

        assert_eq!(edges[0].domain, "bridge:phil→math");
        assert!(edges[0].is_bridge());
    }

    #[test]
    fn test_unknown_relation_kept_verbatim() {
        let edges = parse_edges("inspired_by[1]{f,t,domain}:\na,b,philosophy\n");
        assert_eq!(edges[0].relation, Relation::Other("inspired_by".to_string()));
    }

    #[test]
    fn test_duplicates_retained() {
        let text = "supports[2]{f,t,w,domain}:\na,b,0.9,philosophy\na,b,0.9,philosophy\n";
        assert_eq!(parse_edges(text).len(), 2);
    }

    #[test]
    fn test_header_recognition() {
        assert_eq!(parse_header("supports[12]{f,t,w,domain}:"), Some("supports"));
        assert_eq!(parse_header("philosophical_foundation[0]{f,t}:"), Some("philosophical_foundation"));
        assert_eq!(parse_header("supports{f,t}:"), None);
        assert_eq!(parse_header("supports[x]{f,t}:"), None);
        assert_eq!(parse_header("supports[1]{}:"), None);
        assert_eq!(parse_header("sup-ports[1]{f,t}:"), None);
        assert_eq!(parse_header("supports[1]{f,t}"), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "supports[1]{f,t,w,domain}:\r\na,b,0.9,philosophy\r\n";
        let edges = parse_edges(text);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].domain, "philosophy");
    }
}
