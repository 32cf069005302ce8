use hextile_rs::{HextileError, Tessellation};

fn main() -> Result<(), HextileError> {
    let grid = Tessellation::from_extent(1.0, 0.0, 0.0, 1000.0, 1000.0, 0.0)?;

    println!("Cells: {}", grid.len());
    println!("Rows: {}", grid.rows());

    if let Some(cell) = grid.get(0, 0) {
        println!("First cell: {}", cell.id);
        println!("Center: ({}, {})", cell.center().x(), cell.center().y());
        println!("WKT: {}", cell.to_wkt());
    }

    Ok(())
}
