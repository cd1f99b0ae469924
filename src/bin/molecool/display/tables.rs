use std::io::{self, Write};

use molecool::{AngleUnit, AtomSet, BondGraph, Point};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();
const KEY_WIDTH: usize = 18;
const MAX_COMPOSITION_ROWS: usize = 15;

#[derive(Debug)]
pub struct CompositionRow {
    pub symbol: String,
    pub count: usize,
    pub weight: f64,
    pub color: &'static str,
}

pub fn print_structure_info(atoms: &AtomSet) {
    let mut rows = vec![("Atoms", atoms.atom_count().to_string())];
    if !atoms.comment.trim().is_empty() {
        rows.push(("Comment", atoms.comment.trim().to_string()));
    }
    let _ = write_kv_table(&mut io::stderr().lock(), "Structure Summary", &rows);
}

pub fn print_bond_summary(graph: &BondGraph) {
    let mut rows = vec![("Bonds", graph.len().to_string())];

    if let Some((min, mean, max)) = length_stats(graph.lengths()) {
        rows.push(("Shortest (Å)", format!("{min:.4}")));
        rows.push(("Mean (Å)", format!("{mean:.4}")));
        rows.push(("Longest (Å)", format!("{max:.4}")));
    }

    let _ = write_kv_table(&mut io::stderr().lock(), "Bond Lengths", &rows);
}

pub fn print_angle_info(atoms: &AtomSet, [a, b, c]: [usize; 3], value: f64, unit: AngleUnit) {
    let label = |idx: usize| format!("{} ({})", idx, atoms.atoms[idx].symbol);
    let rows = vec![
        ("First", label(a)),
        ("Vertex", label(b)),
        ("Last", label(c)),
        ("Angle", format!("{value:.6} {}", unit.suffix())),
    ];
    let _ = write_kv_table(&mut io::stderr().lock(), "Angle", &rows);
}

pub fn write_summary(
    out: &mut impl Write,
    atoms: &AtomSet,
    mass: f64,
    center: Point,
) -> io::Result<()> {
    let mut rows = vec![("Atoms", atoms.atom_count().to_string())];
    if !atoms.comment.trim().is_empty() {
        rows.push(("Comment", atoms.comment.trim().to_string()));
    }
    rows.push(("Mass (amu)", format!("{mass:.5}")));
    rows.push((
        "Centre of mass (Å)",
        format!("{:.4} {:.4} {:.4}", center[0], center[1], center[2]),
    ));
    write_kv_table(out, "Structure Summary", &rows)
}

pub fn write_composition(
    out: &mut impl Write,
    rows: &[CompositionRow],
    total_mass: f64,
) -> io::Result<()> {
    let sym_w = 6usize;
    let count_w = 6usize;
    let weight_w = 10usize;
    let mass_w = 7usize;
    let color_w = SAFE_TABLE_WIDTH.saturating_sub(sym_w + count_w + weight_w + mass_w + 16);
    let widths = [sym_w, count_w, weight_w, mass_w, color_w];

    writeln!(out, "{INDENT}┌─ Element Composition ─┐")?;
    writeln!(out, "{INDENT}{}", rule('┌', '┬', '┐', &widths))?;
    writeln!(
        out,
        "{INDENT}│ {:<sym_w$} │ {:>count_w$} │ {:>weight_w$} │ {:>mass_w$} │ {:<color_w$} │",
        "Symbol", "Count", "Weight", "Mass %", "Color"
    )?;
    writeln!(out, "{INDENT}{}", rule('├', '┼', '┤', &widths))?;

    for row in rows.iter().take(MAX_COMPOSITION_ROWS) {
        let share = if total_mass > 0.0 {
            row.weight * row.count as f64 / total_mass * 100.0
        } else {
            0.0
        };
        writeln!(
            out,
            "{INDENT}│ {:<sym_w$} │ {:>count_w$} │ {:>weight_w$.4} │ {:>mass_w$.1} │ {:<color_w$} │",
            truncate(&row.symbol, sym_w),
            row.count,
            row.weight,
            share,
            truncate(row.color, color_w)
        )?;
    }

    if rows.len() > MAX_COMPOSITION_ROWS {
        let more = format!("({} more elements)", rows.len() - MAX_COMPOSITION_ROWS);
        writeln!(
            out,
            "{INDENT}│ {:<sym_w$} │ {:>count_w$} │ {:>weight_w$} │ {:>mass_w$} │ {:<color_w$} │",
            "...",
            "",
            "",
            "",
            truncate(&more, color_w)
        )?;
    }

    writeln!(out, "{INDENT}{}", rule('└', '┴', '┘', &widths))
}

fn write_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) -> io::Result<()> {
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(KEY_WIDTH + 7);
    let widths = [KEY_WIDTH, val_w];

    writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, SAFE_TABLE_WIDTH - 6))?;
    writeln!(out, "{INDENT}{}", rule('┌', '┬', '┐', &widths))?;

    for (key, val) in rows {
        writeln!(
            out,
            "{INDENT}│ {:<KEY_WIDTH$} │ {:>val_w$} │",
            truncate(key, KEY_WIDTH),
            truncate(val, val_w)
        )?;
    }

    writeln!(out, "{INDENT}{}", rule('└', '┴', '┘', &widths))
}

fn rule(left: char, mid: char, right: char, widths: &[usize]) -> String {
    let mut line = String::new();
    line.push(left);
    for (k, w) in widths.iter().enumerate() {
        if k > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(w + 2));
    }
    line.push(right);
    line
}

fn length_stats(lengths: impl Iterator<Item = f64>) -> Option<(f64, f64, f64)> {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for d in lengths {
        count += 1;
        sum += d;
        min = min.min(d);
        max = max.max(d);
    }

    (count > 0).then(|| (min, sum / count as f64, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_no_bonds() {
        assert_eq!(length_stats(std::iter::empty()), None);
    }

    #[test]
    fn stats_of_three_lengths() {
        let (min, mean, max) = length_stats([1.0, 1.5, 1.1].into_iter()).unwrap();
        assert_eq!(min, 1.0);
        assert!((mean - 1.2).abs() < 1e-12);
        assert_eq!(max, 1.5);
    }

    #[test]
    fn rule_spans_padded_columns() {
        assert_eq!(rule('┌', '┬', '┐', &[1, 2]), "┌───┬────┐");
    }

    #[test]
    fn kv_rows_have_equal_width() {
        let rows = vec![
            ("Atoms", "3".to_string()),
            ("Centre of mass (Å)", "0.0000 0.0000 0.0000".to_string()),
        ];
        let mut buf = Vec::new();
        write_kv_table(&mut buf, "Structure Summary", &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{text}");
        assert!(text.contains("Centre of mass (Å)"));
    }

    #[test]
    fn summary_lists_mass_and_centre() {
        let atoms = AtomSet::from_parts(&["H", "H"], &[[0.0; 3], [0.0, 0.0, 0.74]])
            .unwrap()
            .with_comment("hydrogen");
        let mut buf = Vec::new();
        write_summary(&mut buf, &atoms, 2.01568, [0.0, 0.0, 0.37]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("hydrogen"));
        assert!(text.contains("2.01568"));
        assert!(text.contains("0.0000 0.0000 0.3700"));
    }

    #[test]
    fn composition_shows_mass_share() {
        let rows = vec![CompositionRow {
            symbol: "O".into(),
            count: 1,
            weight: 15.999,
            color: "red",
        }];
        let mut buf = Vec::new();
        write_composition(&mut buf, &rows, 15.999).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("100.0"));
        assert!(text.contains("red"));
    }
}
