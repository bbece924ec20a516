//! 终端渲染助手：带标签读出、表格、条形图

use std::fmt::Write as _;

/// 带标签的数值读出行
pub fn metric_line(label: &str, value: &str) -> String {
    format!("  {:<28} {}", label, value)
}

/// 简易表格：表头 + 分隔线 + 数据行，按列内容自适应宽度
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = w))
        .collect();
    let _ = writeln!(out, "| {} |", header_line.join(" | "));

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "|-{}-|", separator.join("-|-"));

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = w))
            .collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out
}

/// 水平条形图，条宽按序列最大值缩放到 `max_width`
pub fn render_bars(title: &str, points: &[(String, i64)], max_width: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);

    let max_value = points.iter().map(|(_, v)| *v).max().unwrap_or(0).max(1);
    let label_width = points.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    for (label, value) in points {
        let bar_len = (*value as f64 / max_value as f64 * max_width as f64).round() as usize;
        let _ = writeln!(
            out,
            "  {:<label_width$} {} {}",
            label,
            "█".repeat(bar_len),
            value,
            label_width = label_width
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_line_alignment() {
        let line = metric_line("💧 Water Usage", "84250 Liters");
        assert!(line.starts_with("  "));
        assert!(line.ends_with("84250 Liters"));
    }

    #[test]
    fn test_render_table_pads_columns() {
        let out = render_table(
            &["Date", "Type"],
            &[
                vec!["2026-08-30".to_string(), "Power Outage".to_string()],
                vec!["2026-08-29".to_string(), "Low".to_string()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Date"));
        assert!(lines[1].starts_with("|-"));
        // 所有行等宽
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }

    #[test]
    fn test_render_bars_scales_to_max() {
        let out = render_bars(
            "Energy Usage (MWh)",
            &[("Mon".to_string(), 500), ("Tue".to_string(), 1000)],
            20,
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        let mon_bars = lines[1].matches('█').count();
        let tue_bars = lines[2].matches('█').count();
        assert_eq!(tue_bars, 20);
        assert_eq!(mon_bars, 10);
    }

    #[test]
    fn test_render_bars_empty_series() {
        let out = render_bars("empty", &[], 20);
        assert_eq!(out.lines().count(), 1);
    }
}
