// Roads view - road surface → light condition tree
//
// Each branch is a road surface with its share of all accidents; leaves are
// light conditions with their share of the branch. Long trees scroll.

use crate::analysis::Hierarchy;
use crate::theme::Theme;
use crate::tui::components::format_number;
use crate::tui::components::formatters::share_bar;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const BAR_WIDTH: usize = 20;

pub fn lines(tree: &Hierarchy, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if tree.is_empty() {
        lines.push(Line::from(Span::styled(
            "No road surface data",
            Style::default().fg(theme.muted),
        )));
        return lines;
    }

    lines.push(Line::from(Span::styled(
        format!("All accidents: {}", format_number(tree.total as u64)),
        Style::default().fg(theme.muted),
    )));
    lines.push(Line::from(""));

    for (i, branch) in tree.branches.iter().enumerate() {
        let color = theme.series_color(i);
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(
                branch.label.clone(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  {} ({:.1}%)  ",
                    format_number(branch.count as u64),
                    branch.percent
                ),
                Style::default().fg(theme.muted),
            ),
            Span::styled(
                share_bar(branch.percent, BAR_WIDTH),
                Style::default().fg(color),
            ),
        ]));

        let last = branch.leaves.len().saturating_sub(1);
        for (j, leaf) in branch.leaves.iter().enumerate() {
            let connector = if j == last { "  └─ " } else { "  ├─ " };
            lines.push(Line::from(vec![
                Span::styled(connector, Style::default().fg(theme.border)),
                Span::styled(leaf.label.clone(), Style::default().fg(theme.foreground)),
                Span::styled(
                    format!(
                        "  {} ({:.1}% of {})",
                        format_number(leaf.count as u64),
                        leaf.percent,
                        branch.label
                    ),
                    Style::default().fg(theme.muted),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn branches_then_leaves_with_connectors() {
        let tree = Hierarchy::build([
            ("Asphalt roads", "Daylight"),
            ("Asphalt roads", "Darkness - lights lit"),
            ("Asphalt roads", "Daylight"),
            ("Gravel roads", "Daylight"),
        ]);
        let lines = lines(&tree, &Theme::default());
        let rendered: Vec<String> = lines.iter().map(text).collect();

        assert!(rendered[0].contains("4"));
        assert!(rendered[2].starts_with("● Asphalt roads"));
        assert!(rendered[3].starts_with("  ├─ Daylight"));
        assert!(rendered[4].starts_with("  └─ Darkness - lights lit"));
        assert!(rendered[4].contains("of Asphalt roads"));
        assert!(rendered.iter().any(|l| l.starts_with("● Gravel roads")));
    }

    #[test]
    fn empty_tree_has_placeholder() {
        let tree = Hierarchy::build(std::iter::empty::<(&str, &str)>());
        let lines = lines(&tree, &Theme::default());
        assert_eq!(lines.len(), 1);
    }
}
