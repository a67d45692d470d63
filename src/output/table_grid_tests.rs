use super::*;
use crate::artifact::ArtifactLoader;

fn table(csv: &str) -> Table {
    ArtifactLoader::new()
        .load_reader(csv.as_bytes(), "t.csv", None)
        .unwrap()
        .table
}

#[test]
fn header_and_rows_in_order() {
    let table = table("stemming_data,sentiment\nbagus sekali,Positive\njelek,Negative\n");
    let html = TableGrid::new(&table).render();

    let header = html.find("<th>stemming_data</th>").unwrap();
    let second = html.find("<th>sentiment</th>").unwrap();
    assert!(header < second);
    let first_row = html.find("bagus sekali").unwrap();
    let second_row = html.find("jelek").unwrap();
    assert!(first_row < second_row);
    assert!(!html.contains("Showing"));
}

#[test]
fn numeric_cells_are_right_aligned_and_untransformed() {
    let table = table("Metric,Score\nAccuracy,0.72\n");
    let html = TableGrid::new(&table).render();
    assert!(html.contains("<td class=\"number\">0.72</td>"));
    assert!(html.contains("<td>Accuracy</td>"));
}

#[test]
fn numeric_cells_keep_source_formatting() {
    let table = table("label,precision,code\nweighted avg,1.00,007\nmacro,+5,1e3\n");
    let html = TableGrid::new(&table).render();
    for cell in ["1.00", "007", "+5", "1e3"] {
        assert!(
            html.contains(&format!("<td class=\"number\">{cell}</td>")),
            "missing {cell} in {html}"
        );
    }
}

#[test]
fn cells_are_escaped() {
    let table = table("text\n<script>alert(1)</script>\n");
    let html = TableGrid::new(&table).render();
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn max_rows_truncates_with_note() {
    let table = table("n\n1\n2\n3\n4\n");
    let grid = TableGrid::new(&table).with_max_rows(Some(2));
    assert_eq!(grid.shown_rows(), 2);

    let html = grid.render();
    assert_eq!(html.matches("<td class=\"number\">").count(), 2);
    assert!(html.contains("Showing 2 of 4 rows"));
}

#[test]
fn max_rows_above_length_shows_everything() {
    let table = table("n\n1\n2\n");
    let grid = TableGrid::new(&table).with_max_rows(Some(50));
    assert!(!grid.is_truncated());
    assert!(!grid.render().contains("Showing"));
}

#[test]
fn header_only_table_shows_empty_message() {
    let table = table("a,b\n");
    let html = TableGrid::new(&table).render();
    assert!(html.contains("<th>a</th>"));
    assert!(html.contains("No rows to display."));
}
