//! Console reporter with colored output

use crate::catalog::{
    self, AuditReport, ComplexityOperations, DataStructure, Section, SearchAlgorithm,
};
use crate::quality::{label, terminal_color};
use crate::{classify, Classification, ComplexityQuality};
use colored::Colorize;
use std::fmt::Write as _;

/// Width of the notation cells in complexity tables
const CELL: usize = 18;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Print classification results
    pub fn report_classifications(&self, results: &[Classification]) {
        print!("{}", self.render_classifications(results));
    }

    /// Print catalog sections, separated by a rule
    pub fn report_sections(&self, sections: &[Section]) {
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                println!("{}", "─".repeat(60));
            }
            print!("{}", self.render_section(*section));
        }
    }

    /// Print an audit summary
    pub fn report_audit(&self, report: &AuditReport) {
        print!("{}", self.render_audit(report));
    }

    pub fn render_classifications(&self, results: &[Classification]) -> String {
        let width = results
            .iter()
            .map(|c| c.notation.chars().count())
            .max()
            .unwrap_or(0)
            .max(8);

        let mut out = String::new();
        for c in results {
            let notation = format!("{:<width$}", c.notation, width = width);
            let tier = format!("{:<6}", label(c.quality));
            let _ = writeln!(
                out,
                "  {}  {}  {}",
                self.paint(&notation, c.quality),
                self.paint(&tier, c.quality),
                self.dim(&format!("({})", c.resolution))
            );
            if self.verbose {
                let style = c.style();
                let _ = writeln!(out, "      display: {}", style.display_class);
                let _ = writeln!(out, "      text:    {}", style.text_class);
            }
        }
        out
    }

    pub fn render_section(&self, section: Section) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bold(&format!("📚 {}", section.title())));
        let _ = writeln!(out);

        match section {
            Section::AsymptoticNotations => self.asymptotic_notations(&mut out),
            Section::TimeComplexities => self.time_complexities(&mut out),
            Section::DataStructures => self.data_structures(&mut out),
            Section::SortingAlgorithms => self.sorting_algorithms(&mut out),
            Section::SearchAlgorithms => self.search_algorithms(&mut out),
            Section::Concepts => self.concepts(&mut out),
            Section::RestApi => self.rest_api(&mut out),
            Section::Graphql => {
                for op in catalog::graphql_concepts() {
                    self.name_description(&mut out, op.operation, op.description, 14);
                }
            }
            Section::Sql => self.sql(&mut out),
            Section::PythonZen => {
                for (i, line) in catalog::python_zen().iter().enumerate() {
                    let _ = writeln!(out, "   {:>2}. {}", i + 1, line);
                }
            }
            Section::PythonMagicMethods => {
                for dunder in catalog::python_magic_methods() {
                    self.name_description(&mut out, dunder.name, dunder.description, 14);
                }
            }
            Section::PythonNotes => {
                for note in catalog::python_useful_notes() {
                    let _ = writeln!(out, "   • {}", note);
                }
            }
            Section::PythonModules => self.python_modules(&mut out),
            Section::Resources => {
                for resource in catalog::resources() {
                    let _ = writeln!(out, "   {:<42} {}", resource.name, self.dim(resource.url));
                    if let (true, Some(description)) = (self.verbose, resource.description) {
                        let _ = writeln!(out, "      {}", description);
                    }
                }
            }
        }
        out
    }

    pub fn render_audit(&self, report: &AuditReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.bold("🔎 Catalog Notation Audit"));
        let _ = writeln!(
            out,
            "   Notations: {} | Exact: {} | Heuristic: {} | Default: {}",
            report.entries.len(),
            report.exact,
            report.heuristic,
            report.default
        );

        let heuristic: Vec<_> = report.heuristic_entries().collect();
        if !heuristic.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "   {}", self.bold("Resolved by heuristic:"));
            for entry in heuristic {
                let _ = writeln!(
                    out,
                    "   {} {} › {} {} {}",
                    entry.section,
                    entry.record,
                    entry.field,
                    self.paint(&entry.classification.notation, entry.classification.quality),
                    self.dim(&format!("({})", entry.classification.resolution))
                );
            }
        }

        let unresolved: Vec<_> = report.unresolved().collect();
        if !unresolved.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "   {}", self.warn("Fell through to default (fair):"));
            for entry in unresolved {
                let _ = writeln!(
                    out,
                    "   {} {} › {} {}",
                    entry.section, entry.record, entry.field, entry.classification.notation
                );
            }
        }

        if !report.mismatches.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "   {}", self.warn("Declared level disagrees with classifier:"));
            for m in &report.mismatches {
                let _ = writeln!(
                    out,
                    "   {} {}: declared {}, classified {}",
                    m.name, m.notation, m.declared, m.classified
                );
            }
        }

        let _ = writeln!(out);
        if report.is_clean() {
            let _ = writeln!(out, "   {}", self.good("✓ Every notation resolved"));
        }
        out
    }

    fn asymptotic_notations(&self, out: &mut String) {
        for n in catalog::asymptotic_notations() {
            let _ = writeln!(
                out,
                "   {:<14} {:<18} {}",
                self.bold(n.name),
                n.notation,
                self.dim(n.simplified)
            );
            if self.verbose {
                let _ = writeln!(out, "      {} {}", n.description, n.note);
            }
        }
    }

    fn time_complexities(&self, out: &mut String) {
        for tc in catalog::time_complexities() {
            let _ = writeln!(
                out,
                "   {:<14} {} {}",
                tc.name,
                self.cell(tc.notation),
                self.paint(label(tc.level), tc.level)
            );
            if self.verbose {
                let _ = writeln!(out, "      {}", tc.description);
            }
        }
    }

    fn data_structures(&self, out: &mut String) {
        let header = ["Access", "Search", "Insertion", "Deletion"]
            .iter()
            .map(|h| format!("{:<CELL$}", h))
            .collect::<String>();
        for group in catalog::data_structure_groups() {
            let _ = writeln!(out, "   {}", self.bold(&group.to_string()));
            let _ = writeln!(out, "   {:<22} {}", "", self.dim(&header));
            for ds in catalog::data_structures().iter().filter(|d| d.group == group) {
                self.data_structure_row(out, ds);
            }
            let _ = writeln!(out);
        }
    }

    fn data_structure_row(&self, out: &mut String, ds: &DataStructure) {
        let name = format!("{} {}", ds.shape, ds.name);
        let _ = writeln!(
            out,
            "   {:<22} {} {}",
            name,
            self.ops_cells(&ds.time.average),
            self.dim("avg")
        );
        let _ = writeln!(
            out,
            "   {:<22} {} {} {} {}",
            "",
            self.ops_cells(&ds.time.worst),
            self.dim("worst"),
            self.dim("space"),
            self.paint(ds.space.worst, classify(ds.space.worst))
        );
        if self.verbose {
            let _ = writeln!(out, "      {}", self.dim(ds.description));
        }
    }

    fn ops_cells(&self, ops: &ComplexityOperations) -> String {
        ops.entries()
            .iter()
            .map(|(_, notation)| self.cell(notation))
            .collect()
    }

    fn sorting_algorithms(&self, out: &mut String) {
        let header = ["Best", "Average", "Worst", "Space"]
            .iter()
            .map(|h| format!("{:<CELL$}", h))
            .collect::<String>();
        let _ = writeln!(out, "   {:<16} {}", "", self.dim(&header));
        for algo in catalog::sorting_algorithms() {
            let _ = writeln!(
                out,
                "   {:<16} {}{}{}{}",
                algo.name,
                self.cell(algo.time.best),
                self.cell(algo.time.average),
                self.cell(algo.time.worst),
                self.cell(algo.space.worst)
            );
            if self.verbose {
                let _ = writeln!(out, "      {}", self.dim(algo.description));
            }
        }
    }

    fn search_algorithms(&self, out: &mut String) {
        let search = catalog::search_algorithms();
        self.search_group(out, "Array", search.array);
        self.search_group(out, "Graph", search.graph);
        let legend = catalog::search_algorithm_legend()
            .iter()
            .map(|l| format!("{} = {}", l.symbol, l.meaning))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "   {}", self.dim(&legend));
    }

    fn search_group(&self, out: &mut String, title: &str, algorithms: &[SearchAlgorithm]) {
        let _ = writeln!(out, "   {}", self.bold(title));
        for algo in algorithms {
            let _ = writeln!(
                out,
                "   {:<28} {}{}",
                algo.name,
                self.cell(algo.average),
                self.cell(algo.worst)
            );
            if self.verbose {
                let _ = writeln!(out, "      {}", self.dim(algo.description));
            }
        }
        let _ = writeln!(out);
    }

    fn concepts(&self, out: &mut String) {
        for (title, concepts) in catalog::concepts().groups() {
            let _ = writeln!(out, "   {}", self.bold(title));
            for c in concepts {
                self.name_description(out, c.name, c.description, 28);
            }
            let _ = writeln!(out);
        }
    }

    fn rest_api(&self, out: &mut String) {
        let _ = writeln!(out, "   {}", self.bold("Constraints"));
        for c in catalog::rest_constraints() {
            self.name_description(out, c.name, c.description, 18);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "   {}", self.bold("Methods"));
        for m in catalog::rest_methods() {
            let _ = writeln!(out, "   {:<8} {}", m.method, m.crud);
        }
    }

    fn sql(&self, out: &mut String) {
        for s in catalog::sql_statements() {
            self.name_description(out, s.statement, s.description, 14);
            if self.verbose {
                let _ = writeln!(out, "      {}", self.dim(s.example));
            }
        }
    }

    fn python_modules(&self, out: &mut String) {
        for (group, methods) in catalog::python_modules() {
            let _ = writeln!(out, "   {}", self.bold(group));
            for m in methods.iter() {
                let _ = writeln!(out, "     {}", m.method);
                if self.verbose {
                    let _ = writeln!(out, "        {}", self.dim(m.description));
                }
            }
        }
    }

    fn name_description(&self, out: &mut String, name: &str, description: &str, width: usize) {
        let padded = format!("{:<width$}", name, width = width);
        let _ = writeln!(out, "   {} {}", self.bold(&padded), description);
    }

    /// Fixed-width notation cell colored by its tier
    fn cell(&self, notation: &str) -> String {
        let padded = format!("{:<CELL$}", notation);
        self.paint(&padded, classify(notation))
    }

    fn paint(&self, text: &str, quality: ComplexityQuality) -> String {
        if self.use_colors {
            text.color(terminal_color(quality)).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.use_colors {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn good(&self, text: &str) -> String {
        if self.use_colors {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{audit, notations};
    use crate::classify_traced;

    fn plain() -> ConsoleReporter {
        ConsoleReporter::new().without_colors()
    }

    #[test]
    fn test_classifications_show_label_and_resolution() {
        let results = vec![classify_traced("O(n²)"), classify_traced("O(n^2 log n)")];
        let out = plain().render_classifications(&results);
        assert!(out.contains("O(n²)"));
        assert!(out.contains("Bad"));
        assert!(out.contains("(exact)"));
        assert!(out.contains("(heuristic (quadratic))"));
    }

    #[test]
    fn test_verbose_classification_includes_classes() {
        let out = plain()
            .verbose()
            .render_classifications(&[classify_traced("O(1)")]);
        assert!(out.contains("bg-complexity-best text-gray-900"));
        assert!(out.contains("text-green-600 dark:text-green-400"));
    }

    #[test]
    fn test_every_section_renders_its_title() {
        let reporter = plain();
        for section in Section::ALL {
            let out = reporter.render_section(section);
            assert!(out.contains(section.title()), "{}", section);
        }
    }

    #[test]
    fn test_data_structures_table() {
        let out = plain().render_section(Section::DataStructures);
        assert!(out.contains("Hash Table"));
        assert!(out.contains("Θ(log(n))"));
        assert!(out.contains("Tree"));
        assert!(!out.contains("Self-balancing"));

        let verbose = plain().verbose().render_section(Section::DataStructures);
        assert!(verbose.contains("Self-balancing"));
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let out = plain().render_section(Section::SortingAlgorithms);
        assert!(!out.contains('\u{1b}'));
        assert!(out.contains("Shell Sort"));
    }

    #[test]
    fn test_audit_summary() {
        let out = plain().render_audit(&audit(&notations()));
        assert!(out.contains("Default: 0"));
        assert!(out.contains("Every notation resolved"));
    }
}
