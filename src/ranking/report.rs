use crate::domain::{RankedLocation, Unit};

/// Number of spaces between two columns.
pub const GUTTER: usize = 2;

const POSTAL_CODE_HEADER: &str = "Zip Code";
const PLACE_NAME_HEADER: &str = "Place Name";
const UNKNOWN_DISTANCE: &str = "Unknown";

/// Renders the meters table, followed by the miles table if requested.
pub fn render_report(locations: &[RankedLocation], include_miles: bool) -> String {
    let mut output = render_table(locations, Unit::Meters);
    if include_miles {
        output.push('\n');
        output.push_str(&render_table(locations, Unit::Miles));
    }
    output
}

/// Renders a header, a dashed separator and one row per location. Every column is as wide as its widest cell
/// (header included); postal codes and place names are left aligned, distances right aligned.
pub fn render_table(locations: &[RankedLocation], unit: Unit) -> String {
    let header = [POSTAL_CODE_HEADER.to_string(), PLACE_NAME_HEADER.to_string(), format!("Distance ({})", unit)];
    let rows = locations
        .iter()
        .map(|location| {
            [
                location.record.postal_code.clone(),
                location.record.place_name.clone(),
                distance_cell(location, unit),
            ]
        })
        .collect::<Vec<_>>();

    let widths = column_widths(&header, &rows);
    let line_width = widths.iter().sum::<usize>() + GUTTER * (widths.len() - 1);

    let mut lines = vec![format_row(&header, &widths), "-".repeat(line_width)];
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));
    lines.into_iter().map(|line| line + "\n").collect()
}

/// Unresolved locations have no meaningful distance. A resolved location at the reference point prints `0.00`.
fn distance_cell(location: &RankedLocation, unit: Unit) -> String {
    if location.record.is_resolved() {
        format!("{:.2}", location.distance_in(unit))
    } else {
        UNKNOWN_DISTANCE.to_string()
    }
}

fn column_widths(header: &[String; 3], rows: &[[String; 3]]) -> [usize; 3] {
    let mut widths = header.each_ref().map(|cell| cell.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn format_row(cells: &[String; 3], widths: &[usize; 3]) -> String {
    let gutter = " ".repeat(GUTTER);
    format!(
        "{:<w0$}{gutter}{:<w1$}{gutter}{:>w2$}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    )
}
