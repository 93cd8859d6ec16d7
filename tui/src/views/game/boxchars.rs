//! Box-drawing characters for the grid.

pub const BOX_H: char = '─';
pub const BOX_V: char = '│';
pub const BOX_TL: char = '┌';
pub const BOX_T: char = '┬';
pub const BOX_TR: char = '┐';
pub const BOX_L: char = '├';
pub const BOX_X: char = '┼';
pub const BOX_R: char = '┤';
pub const BOX_BL: char = '└';
pub const BOX_B: char = '┴';
pub const BOX_BR: char = '┘';
/// Interior of a blocked cell.
pub const BOX_SHADE: char = '░';
