use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wordforge::grid::{Grid, Position};
use wordforge::WordPosition;

pub fn print_grid(grid: &Grid, highlight: Option<&[WordPosition]>) {
    let marked: Vec<Position> = highlight
        .map(|wps| wps.iter().flat_map(|wp| wp.positions.iter().copied()).collect())
        .unwrap_or_default();

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for (r, row) in grid.rows().enumerate() {
        let cells: Vec<Cell> = row
            .iter()
            .enumerate()
            .map(|(c, g)| {
                let cell = Cell::new(g).set_alignment(CellAlignment::Center);
                if marked.contains(&Position::new(r, c)) {
                    cell.fg(Color::Green).add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_word_list(words: &[String]) {
    println!("\nFind these words:");
    for word in words {
        println!("  • {}", word);
    }
}

pub fn print_answers(word_positions: &[WordPosition]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("First cell"),
        Cell::new("Last cell"),
        Cell::new("Length"),
    ]);

    for wp in word_positions {
        let fmt_pos = |p: Option<&Position>| {
            p.map(|p| format!("({}, {})", p.row, p.col))
                .unwrap_or_else(|| "-".to_string())
        };
        table.add_row(vec![
            Cell::new(&wp.word).add_attribute(Attribute::Bold),
            Cell::new(fmt_pos(wp.positions.first())),
            Cell::new(fmt_pos(wp.positions.last())),
            Cell::new(wp.positions.len()).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n{}", table);
}
