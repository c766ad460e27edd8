use programa::Grid;

/// Build a grid row with values at specific columns, the rest blank.
pub fn sparse_row(cells: &[(usize, &str)]) -> Vec<String> {
    let mut row = vec![String::new(); 8];
    for (col, value) in cells {
        row[*col] = (*value).to_string();
    }
    row
}

/// A small but complete program grid: two area blocks with moderator
/// annotations, case-type rows, specialty inheritance and the usual
/// spreadsheet noise.
pub fn sample_grid() -> Grid {
    Grid::from_rows(vec![
        sparse_row(&[(0, "Programa Convención RT")]),
        sparse_row(&[
            (1, "MAMA"),
            (2, "(3) Moderador: Dra. Ana Pérez con apoyo de Dr. Juan"),
        ]),
        sparse_row(&[
            (3, "Tipo"),
            (4, "nódulo BI-RADS 4"),
            (5, "recidiva local"),
            (6, "SE ELIMINA"),
            (7, ""),
        ]),
        sparse_row(&[
            (2, "Radioterapia"),
            (3, "Nombre"),
            (4, "Dr. Pérez / n/a / Dra. Gómez (opcion 2)"),
            (5, "Dra. Laura Díaz"),
        ]),
        sparse_row(&[(3, "Nombre"), (4, "Dr. Pérez"), (5, "Lic. Marta Ruiz")]),
        sparse_row(&[]),
        sparse_row(&[(1, "NEURO"), (2, "(2) Moderador: Dr. Luis Silva")]),
        sparse_row(&[(3, "Tipo"), (4, "glioma de alto grado")]),
        sparse_row(&[
            (2, "Neurocirugía"),
            (3, "Nombre"),
            (4, "Dr. Andrés Castro"),
            (5, "no corresponde"),
        ]),
    ])
}
