use colored::Colorize;
use liblife::cell::Cell;
use liblife::generation::Generation;

/// Redraws the whole board in place, one glyph per cell, one row per line.
pub fn draw<C: Cell>(generation: &Generation<C>, step: usize) {
    // clear and rehome the cursor so successive generations overdraw
    print!("\x1b[2J\x1b[1;1H");

    for y in 0..generation.height {
        for x in 0..generation.width {
            match generation.cell((x, y)) {
                Some(cell) if cell.is_alive() => print!("{}", "X".green().bold()),
                _ => print!("{}", "-".dimmed()),
            }
        }
        println!();
    }

    println!();
    if step == 0 {
        println!("seed");
    } else {
        println!("generation {step}");
    }
}
