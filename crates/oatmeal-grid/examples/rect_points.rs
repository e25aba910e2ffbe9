use oatmeal_grid::{Grid, GridRectPoints, Point};
use rand::Rng;

fn main() -> anyhow::Result<()> {
    let mut rng = rand::rng();

    let mut grid = Grid::new(12, 8, '.')?;
    println!("Empty {}x{} grid:", grid.x_count(), grid.y_count());
    println!("{}", grid);

    // Stamp a few random rectangles, clipped to the grid
    for mark in ['a', 'b', 'c'] {
        let top_left = Point::new(rng.random_range(0..10), rng.random_range(0..6));
        let region = GridRectPoints::new(top_left, rng.random_range(1..5), rng.random_range(1..4))?;

        let mut stamped = 0;
        for p in region {
            if let Ok(cell) = grid.get_mut(p) {
                *cell = mark;
                stamped += 1;
            }
        }
        println!(
            "\nRegion '{}' at ({}) size {}x{}, {} of {} cells inside the grid",
            mark,
            region.top_left(),
            region.width(),
            region.height(),
            stamped,
            region.area()
        );
    }

    println!("\nGrid after stamping:");
    println!("{}", grid);

    // Walk the middle rows only
    let middle = grid.rows_range(2, 4)?;
    println!("\nRows {}..{}:", middle.begin(), middle.end());
    for y in middle {
        let row: String = grid.row_cells(y)?.iter().collect();
        println!("{:>2} {}", y, row);
    }

    Ok(())
}
