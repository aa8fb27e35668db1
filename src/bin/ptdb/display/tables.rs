use std::io::Write;

use periodically::config::DisplayConfig;
use periodically::query::{Comparison, DatabaseStats, Field, FilterProperty, MISSING};
use periodically::validate::{NullCounts, Report};
use periodically::{Element, Issue, Reaction};

use crate::util::text::{plural, truncate, wrap};

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const KEY_WIDTH: usize = 22;
const BAR_WIDTH: usize = 16;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

struct Column<'a> {
    header: &'a str,
    width: usize,
    align: Align,
}

impl<'a> Column<'a> {
    fn left(header: &'a str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Left,
        }
    }

    fn right(header: &'a str, width: usize) -> Self {
        Self {
            header,
            width,
            align: Align::Right,
        }
    }

    fn cell(&self, text: &str) -> String {
        let text = truncate(text, self.width);
        let width = self.width;
        match self.align {
            Align::Left => format!("{:<width$}", text),
            Align::Right => format!("{:>width$}", text),
        }
    }
}

fn rule(columns: &[Column], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = columns.iter().map(|c| "─".repeat(c.width + 2)).collect();
    format!("{}{}{}{}", INDENT, left, segments.join(mid), right)
}

fn row_line(columns: &[Column], cells: &[String]) -> String {
    let body: Vec<String> = columns
        .iter()
        .zip(cells)
        .map(|(c, text)| c.cell(text))
        .collect();
    format!("{}│ {} │", INDENT, body.join(" │ "))
}

fn print_title(out: &mut impl Write, title: &str) {
    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
}

fn print_grid(out: &mut impl Write, title: &str, columns: &[Column], rows: &[Vec<String>]) {
    let headers: Vec<String> = columns.iter().map(|c| c.header.to_string()).collect();

    print_title(out, title);
    let _ = writeln!(out, "{}", rule(columns, "┌", "┬", "┐"));
    let _ = writeln!(out, "{}", row_line(columns, &headers));
    let _ = writeln!(out, "{}", rule(columns, "├", "┼", "┤"));
    for row in rows {
        let _ = writeln!(out, "{}", row_line(columns, row));
    }
    let _ = writeln!(out, "{}", rule(columns, "└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(KEY_WIDTH + 6);
    let columns = [
        Column::left("Property", KEY_WIDTH),
        Column::left("Value", val_w),
    ];
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|(k, v)| vec![k.to_string(), v.clone()])
        .collect();
    print_grid(out, title, &columns, &rows);
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    label: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 20usize;
    let count_w = 6usize;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + 8);
    let columns = [
        Column::left(label, name_w),
        Column::right("Count", count_w),
        Column::left("Share", dist_w),
    ];

    let rows: Vec<Vec<String>> = data
        .iter()
        .map(|(name, count)| {
            let pct = percent(*count, total);
            vec![
                name.clone(),
                count.to_string(),
                format!("{}  {:>5.1}%", make_bar(pct, BAR_WIDTH), pct),
            ]
        })
        .collect();
    print_grid(out, title, &columns, &rows);
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let filled = filled.min(max_width);
    let empty = max_width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn value(v: Option<f64>) -> String {
    Field::render(v.map(Field::Float).as_ref())
}

fn text(v: Option<&str>) -> String {
    v.filter(|s| !s.is_empty()).unwrap_or(MISSING).to_string()
}

fn list<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        MISSING.to_string()
    } else {
        items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn yes_no(flag: bool) -> String {
    let label = if flag { "Yes" } else { "No" };
    label.to_string()
}

/// The full record panel of one element.
pub fn print_element(out: &mut impl Write, element: &Element, display: &DisplayConfig) {
    let class = &element.classification;
    let atomic = &element.atomic_structure;
    let physical = &element.physical_properties;
    let nuclear = &element.nuclear_properties;
    let discovery = &element.discovery;

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}{}  {}  ·  Z = {}",
        INDENT, element.symbol, element.name, element.atomic_number
    );
    let _ = writeln!(out);

    print_kv_table(
        out,
        "Classification",
        &[
            ("Atomic mass (u)", value(Some(element.atomic_mass_u))),
            ("Category", element.category().to_string()),
            ("Group", text(class.group.map(|g| g.to_string()).as_deref())),
            ("Period", class.period.to_string()),
            ("Block", element.block().to_string()),
            ("Occurrence", text(class.natural_occurrence.as_deref())),
        ],
    );

    print_kv_table(
        out,
        "Atomic Structure",
        &[
            ("Electron config", atomic.electron_configuration.clone()),
            ("Shells", list(&atomic.electron_shells)),
            (
                "Valence electrons",
                text(atomic.valence_electrons.map(|v| v.to_string()).as_deref()),
            ),
            ("Oxidation states", list(&atomic.oxidation_states)),
            ("Electronegativity", value(atomic.electronegativity_pauling)),
            ("1st ionization kJ/mol", value(atomic.first_ionization_energy())),
            ("Electron affinity", value(atomic.electron_affinity_kj_mol)),
            ("Atomic radius (pm)", value(atomic.atomic_radius_pm)),
            ("Covalent radius (pm)", value(atomic.covalent_radius_pm)),
        ],
    );

    print_kv_table(
        out,
        "Physical Properties",
        &[
            ("Phase at STP", element.phase().to_string()),
            ("Melting point (K)", value(physical.melting_point_k)),
            ("Boiling point (K)", value(physical.boiling_point_k)),
            ("Density (kg/m3)", value(physical.density_kg_m3)),
            ("Thermal cond. W/(m·K)", value(physical.thermal_conductivity_w_m_k)),
            ("Heat of fusion kJ/mol", value(physical.heat_of_fusion_kj_mol)),
            ("Heat of vap. kJ/mol", value(physical.heat_of_vaporization_kj_mol)),
            ("Heat cap. J/(mol·K)", value(physical.molar_heat_capacity_j_mol_k)),
            ("Crystal structure", text(physical.crystal_structure.as_deref())),
            ("Magnetic ordering", text(physical.magnetic_ordering.as_deref())),
        ],
    );

    print_kv_table(
        out,
        "Nuclear Properties",
        &[
            ("Radioactive", yes_no(element.is_radioactive())),
            ("Half-life", text(nuclear.half_life.as_deref())),
            ("Decay mode", text(nuclear.decay_mode.as_deref())),
            ("Stable isotopes", list(&nuclear.stable_isotopes)),
        ],
    );

    let year = match discovery.year {
        Some(y) => y.to_string(),
        None => "antiquity".to_string(),
    };
    print_kv_table(
        out,
        "Discovery",
        &[("Year", year), ("Discovered by", list(&discovery.discoverers))],
    );
    if !discovery.name_origin.is_empty() {
        for line in wrap(&discovery.name_origin, SAFE_TABLE_WIDTH) {
            let _ = writeln!(out, "{}{}", INDENT, line);
        }
    }

    if !element.applications.is_empty() {
        let _ = writeln!(out);
        print_title(out, "Applications");
        print_capped(
            out,
            element.applications.iter().map(|a| format!("• {}", a)),
            element.applications.len(),
            display.max_applications,
        );
    }

    if !element.reactions.is_empty() {
        let _ = writeln!(out);
        print_title(out, "Reactions");
        print_capped(
            out,
            element
                .reactions
                .iter()
                .map(|r| format!("▸ {}  {}\n{}  {}", r.id, r.name, INDENT, r.equation)),
            element.reactions.len(),
            display.max_reactions,
        );
    }
    let _ = writeln!(out);
}

fn print_capped(
    out: &mut impl Write,
    lines: impl Iterator<Item = String>,
    total: usize,
    cap: usize,
) {
    for line in lines.take(cap) {
        let _ = writeln!(out, "{}{}", INDENT, line);
    }
    if total > cap {
        let _ = writeln!(out, "{}… and {} more", INDENT, total - cap);
    }
}

/// Search hits, one row per element. When a range filter was used, its
/// property gets its own column.
pub fn print_search_results(
    out: &mut impl Write,
    elements: &[&Element],
    property: Option<FilterProperty>,
) {
    let mut columns = vec![
        Column::right("Z", 3),
        Column::left("Sym", 3),
        Column::left("Name", 13),
        Column::left("Category", 20),
        Column::left("Phase", 6),
    ];
    if let Some(p) = property {
        columns.push(Column::right(p.as_str(), 12));
    }

    let rows: Vec<Vec<String>> = elements
        .iter()
        .map(|e| {
            let mut row = vec![
                e.atomic_number.to_string(),
                e.symbol.clone(),
                e.name.clone(),
                e.category().to_string(),
                e.phase().to_string(),
            ];
            if let Some(p) = property {
                row.push(value(p.value(e)));
            }
            row
        })
        .collect();

    print_grid(out, "Search Results", &columns, &rows);
}

fn enthalpy(reaction: &Reaction) -> String {
    let thermo = &reaction.thermodynamics;
    let delta_h = match thermo.delta_h_kj {
        Some(h) => format!("{} kJ", Field::Float(h)),
        None => MISSING.to_string(),
    };
    match thermo.exothermic {
        Some(true) => format!("{} (exothermic)", delta_h),
        Some(false) => format!("{} (endothermic)", delta_h),
        None => delta_h,
    }
}

/// One block per reaction: header, equation, classification, energetics
/// and description.
pub fn print_reactions(out: &mut impl Write, reactions: &[&Reaction]) {
    let width = BOX_INNER_WIDTH;

    for rxn in reactions {
        let _ = writeln!(out);
        let _ = writeln!(out, "  \x1b[1m{}\x1b[0m  {}", rxn.id, rxn.name);
        let _ = writeln!(out, "{}{}", INDENT, rxn.equation);
        let _ = writeln!(
            out,
            "{}type: {}  ·  category: {}  ·  elements: {}",
            INDENT,
            rxn.reaction_type,
            rxn.category,
            rxn.elements_involved.join(", ")
        );
        let _ = writeln!(out, "{}ΔH: {}", INDENT, enthalpy(rxn));
        if let Some(conditions) = rxn.conditions.summary() {
            let _ = writeln!(out, "{}conditions: {}", INDENT, conditions);
        }
        for line in wrap(&rxn.description, width) {
            let _ = writeln!(out, "{}\x1b[2m{}\x1b[0m", INDENT, line);
        }
    }
    let _ = writeln!(out);
}

/// A property-by-element grid.
pub fn print_comparison(out: &mut impl Write, comparison: &Comparison) {
    let rendered: Vec<Vec<String>> = comparison
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.label.to_string()];
            cells.extend(row.values.iter().map(|v| Field::render(v.as_ref())));
            cells
        })
        .collect();

    let mut columns = vec![Column::left("Property", 26)];
    for (i, header) in comparison.columns.iter().enumerate() {
        let widest = rendered
            .iter()
            .map(|cells| cells[i + 1].chars().count())
            .chain(std::iter::once(header.chars().count()))
            .max()
            .unwrap_or(0);
        columns.push(Column::right(header, widest.min(20)));
    }

    print_grid(out, "Comparison", &columns, &rendered);
}

pub fn print_stats(out: &mut impl Write, stats: &DatabaseStats) {
    let mut rows = vec![
        ("Elements", stats.elements.to_string()),
        ("Radioactive", stats.radioactive.to_string()),
        ("Stable", stats.stable.to_string()),
        (
            "Element-linked rxns",
            stats.element_linked_reactions.to_string(),
        ),
    ];
    match &stats.reactions {
        Some(totals) => {
            rows.push(("Reaction files", totals.files.to_string()));
            rows.push(("Reactions", totals.reactions.to_string()));
        }
        None => rows.push(("Reactions", "no reactions directory".to_string())),
    }
    print_kv_table(out, "Database", &rows);

    let mut categories: Vec<(String, usize)> = stats
        .categories
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1));
    print_distribution_table(out, "Categories", "Category", &categories, stats.elements);

    let phases: Vec<(String, usize)> = stats
        .phases
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();
    print_distribution_table(out, "Phases at STP", "Phase", &phases, stats.elements);

    let columns = [
        Column::left("Field", 26),
        Column::left("Coverage", SAFE_TABLE_WIDTH.saturating_sub(26 + 5)),
    ];
    let rows: Vec<Vec<String>> = stats
        .coverage
        .iter()
        .map(|c| {
            let pct = c.percent();
            vec![
                c.field.to_string(),
                format!("{}  {:>5.1}%", make_bar(pct, BAR_WIDTH), pct),
            ]
        })
        .collect();
    print_grid(out, "Data Coverage", &columns, &rows);
}

pub fn print_validation_summary(out: &mut impl Write, report: &Report) {
    let artifacts = match &report.artifacts {
        None => "not checked".to_string(),
        Some(stale) if stale.is_empty() => "up to date".to_string(),
        Some(stale) => format!("{} stale", stale.len()),
    };
    print_kv_table(
        out,
        "Validation Summary",
        &[
            (
                "Elements valid",
                format!("{} / {}", report.elements.valid, report.elements.total),
            ),
            (
                "Reactions valid",
                format!("{} / {}", report.reactions.valid, report.reactions.total),
            ),
            (
                "Symbols referenced",
                report.cross_references.symbols_referenced.to_string(),
            ),
            (
                "Unknown references",
                report.cross_references.issues.len().to_string(),
            ),
            ("Derived files", artifacts),
            ("Issues", report.issue_count().to_string()),
        ],
    );

    if !report.reactions.categories.is_empty() {
        let data: Vec<(String, usize)> = report
            .reactions
            .categories
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        print_distribution_table(
            out,
            "Reactions by Category",
            "Category",
            &data,
            report.reactions.total,
        );
    }
}

/// The `limit` fields with the most explicit nulls.
pub fn print_null_fields(out: &mut impl Write, nulls: &NullCounts, limit: usize) {
    if nulls.is_empty() {
        return;
    }

    let columns = [
        Column::left("Field", 30),
        Column::right("Nulls", 5),
        Column::left("Missing", SAFE_TABLE_WIDTH.saturating_sub(30 + 5 + 8)),
    ];
    let rows: Vec<Vec<String>> = nulls
        .top(limit)
        .into_iter()
        .map(|(path, count)| {
            vec![
                path.to_string(),
                count.to_string(),
                format!("{:>5.1}%", nulls.percent_missing(path)),
            ]
        })
        .collect();

    let title = format!(
        "Null Fields (top {} of {})",
        rows.len(),
        plural(nulls.len(), "field")
    );
    print_grid(out, &title, &columns, &rows);
}

pub fn print_issues<'a>(out: &mut impl Write, issues: impl IntoIterator<Item = &'a Issue>) {
    let width = BOX_INNER_WIDTH - 4;
    for issue in issues {
        let message = format!("[{}] {}", issue.kind(), issue);
        let lines = wrap(&message, width);
        if let Some((first, rest)) = lines.split_first() {
            let _ = writeln!(out, "  \x1b[31m✗\x1b[0m {}", first);
            for line in rest {
                let _ = writeln!(out, "    {}", line);
            }
        }
    }
}
