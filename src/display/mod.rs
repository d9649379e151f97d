use std::fmt::{self, Display, Formatter};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::{Matrix, Vect};

impl<F: Display> Display for Vect<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            x.fmt(f)?;
        }
        write!(f, "]")
    }
}

impl<F: Display> Matrix<F> {
    /// Render the matrix as a table, one table row per matrix row.
    ///
    /// Entries honour the formatter precision given to `{:.N}` when printed
    /// through [`Display`]; here they use their default formatting.
    pub fn display(&self) -> String {
        self.table(None).to_string()
    }

    fn table(&self, precision: Option<usize>) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        for row in self.rows() {
            table.add_row(row.iter().map(|x| {
                let text = match precision {
                    Some(p) => format!("{x:.p$}"),
                    None => x.to_string(),
                };
                Cell::new(text).set_alignment(CellAlignment::Right)
            }));
        }
        table
    }
}

impl<F: Display> Display for Matrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table(f.precision()))
    }
}
