use salarium_core::Report;

const HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Render one source report as a bordered ASCII table titled
/// `"<website> <city>"`. Column widths are computed per column by char
/// count, so Cyrillic cells line up.
#[must_use]
pub fn render_report(report: &Report) -> String {
    let rows: Vec<[String; 4]> = report
        .rows
        .iter()
        .map(|(language, stats)| {
            [
                language.clone(),
                stats.vacancies_found.to_string(),
                stats.vacancies_processed.to_string(),
                stats.average_salary.to_string(),
            ]
        })
        .collect();

    let widths: Vec<usize> = HEADERS
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(|row| char_width(&row[index]))
                .max()
                .unwrap_or(0)
                .max(char_width(header))
        })
        .collect();

    let divider = divider_line(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 5);

    lines.push(format!("{} {}", report.website, report.city));
    lines.push(divider.clone());
    lines.push(format_row(&HEADERS.map(String::from), &widths));
    lines.push(divider.clone());
    for row in &rows {
        lines.push(format_row(row, &widths));
    }
    lines.push(divider);

    lines.join("\n")
}

fn char_width(value: &str) -> usize {
    value.chars().count()
}

fn divider_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn format_row(cells: &[String; 4], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width.saturating_sub(char_width(cell));
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}
