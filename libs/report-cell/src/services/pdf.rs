use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};
use tracing::debug;

use crate::models::{Report, ReportError};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;
const LINE_HEIGHT: f32 = 5.0;
const CELL_FONT_SIZE: f32 = 9.0;
/// Rough Helvetica 9pt capacity per millimetre of column width.
const CHARS_PER_MM: f32 = 0.55;

struct Column {
    title: &'static str,
    width: f32,
}

impl Column {
    const fn new(title: &'static str, width: f32) -> Self {
        Self { title, width }
    }

    fn max_chars(&self) -> usize {
        (self.width * CHARS_PER_MM) as usize
    }
}

const SUMMARY_COLUMNS: [Column; 2] = [Column::new("Field", 50.0), Column::new("Value", 130.0)];
const DIET_COLUMNS: [Column; 3] = [
    Column::new("Item", 50.0),
    Column::new("Nutrition", 85.0),
    Column::new("Quantity", 45.0),
];
const WORKOUT_COLUMNS: [Column; 3] = [
    Column::new("Exercise", 50.0),
    Column::new("Duration / Sets", 45.0),
    Column::new("Benefit", 85.0),
];
const SCHEDULE_COLUMNS: [Column; 2] = [Column::new("Time", 35.0), Column::new("Activity", 145.0)];

/// Rendered document plus the number of pages it spans.
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Greedy word wrap. Always yields at least one line.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.chars().count() + word.chars().count() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Top-down writer over A4 pages; opens a new page whenever the next block
/// would cross the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl<'a> PageWriter<'a> {
    fn ensure_space(&mut self, height: f32) {
        if self.y - height >= MARGIN_BOTTOM {
            return;
        }

        self.pages += 1;
        let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), format!("Page {}", self.pages));
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN_TOP;
    }

    fn text(&mut self, text: &str, size: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(MARGIN_LEFT), Mm(self.y), font);
    }

    fn title(&mut self, text: &str) {
        self.ensure_space(10.0);
        self.text(text, 18.0, true);
        self.y -= 10.0;
    }

    fn heading(&mut self, text: &str) {
        // Keep a heading together with its first row.
        self.ensure_space(8.0 + 2.0 * LINE_HEIGHT);
        self.y -= 3.0;
        self.text(text, 12.0, true);
        self.y -= 7.0;
    }

    fn paragraph(&mut self, text: &str) {
        let max_chars = ((PAGE_WIDTH - 2.0 * MARGIN_LEFT) * CHARS_PER_MM) as usize;
        for line in wrap_text(text, max_chars) {
            self.ensure_space(LINE_HEIGHT);
            self.text(&line, 10.0, false);
            self.y -= LINE_HEIGHT;
        }
    }

    fn row(&mut self, columns: &[Column], cells: &[&str], bold: bool) {
        let wrapped: Vec<Vec<String>> = columns
            .iter()
            .zip(cells)
            .map(|(column, cell)| wrap_text(cell, column.max_chars()))
            .collect();
        let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        self.ensure_space(line_count as f32 * LINE_HEIGHT);

        let font = if bold { &self.bold } else { &self.regular };
        let mut x = MARGIN_LEFT;
        for (column, lines) in columns.iter().zip(&wrapped) {
            for (i, line) in lines.iter().enumerate() {
                let y = self.y - i as f32 * LINE_HEIGHT;
                self.layer.use_text(line.as_str(), CELL_FONT_SIZE, Mm(x), Mm(y), font);
            }
            x += column.width;
        }

        self.y -= line_count as f32 * LINE_HEIGHT + 1.0;
    }

    fn table(&mut self, columns: &[Column], rows: &[Vec<&str>]) {
        let header: Vec<&str> = columns.iter().map(|c| c.title).collect();
        self.row(columns, &header, true);
        for cells in rows {
            self.row(columns, cells, false);
        }
    }
}

/// Renders the report to an in-memory PDF.
pub fn render_pdf(report: &Report) -> Result<Vec<u8>, ReportError> {
    render_document(report).map(|rendered| rendered.bytes)
}

pub fn render_document(report: &Report) -> Result<RenderedPdf, ReportError> {
    let (doc, page1, layer1) = PdfDocument::new("BMI Health Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Render(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Render(format!("font error: {e}")))?;

    let page_count = {
        let mut writer = PageWriter {
            layer: doc.get_page(page1).get_layer(layer1),
            doc: &doc,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN_TOP,
            pages: 1,
        };
        write_sections(&mut writer, report);
        writer.pages
    };

    let mut buffer = BufWriter::new(Vec::new());
    doc.save(&mut buffer).map_err(|e| ReportError::Render(e.to_string()))?;
    let bytes = buffer.into_inner().map_err(|e| ReportError::Render(e.to_string()))?;

    debug!("Rendered report PDF: {} bytes over {} pages", bytes.len(), page_count);
    Ok(RenderedPdf { bytes, page_count })
}

fn write_sections(writer: &mut PageWriter<'_>, report: &Report) {
    writer.title("BMI Health Report");
    writer.paragraph(&format!("Generated on {}", report.generated_at.format("%d %b %Y")));

    writer.heading("Profile Summary");
    let summary: Vec<Vec<&str>> = report
        .profile
        .rows()
        .iter()
        .map(|(label, value)| vec![*label, *value])
        .collect();
    writer.table(&SUMMARY_COLUMNS, &summary);

    writer.heading(&format!("Diet Plan ({})", report.plan_label));
    let diet: Vec<Vec<&str>> = report
        .plan
        .diet
        .iter()
        .map(|d| vec![d.item.as_str(), d.nutrition_note.as_str(), d.quantity.as_str()])
        .collect();
    writer.table(&DIET_COLUMNS, &diet);

    writer.heading("Workout Plan");
    let workout: Vec<Vec<&str>> = report
        .plan
        .workout
        .iter()
        .map(|w| vec![w.exercise.as_str(), w.duration_or_sets.as_str(), w.benefit.as_str()])
        .collect();
    writer.table(&WORKOUT_COLUMNS, &workout);

    writer.heading("Daily Schedule");
    let schedule: Vec<Vec<&str>> = report
        .plan
        .schedule
        .iter()
        .map(|s| vec![s.time.as_str(), s.activity.as_str()])
        .collect();
    writer.table(&SCHEDULE_COLUMNS, &schedule);

    writer.heading("Recommended Specialist");
    match report.specialist.specialist() {
        Some(specialist) => {
            writer.paragraph(&format!("{} ({})", specialist.name, specialist.specialty));
            writer.paragraph(&format!("Treats: {}", specialist.specialist_type));
            writer.paragraph(&format!("Location: {}", specialist.location));
            writer.paragraph(&format!("Availability: {}", specialist.availability));
        }
        None => {
            let message = report.specialist_message.as_deref().unwrap_or("No specialist found.");
            writer.paragraph(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use bmi_cell::models::{BmiCategory, BmiRecord, ScheduleItem, UserProfile};
    use specialist_cell::models::{Specialist, SpecialistMatch};

    use crate::services::assembler::ReportAssembler;

    fn report(specialist: SpecialistMatch) -> Report {
        let profile = UserProfile {
            id: "user-1".to_string(),
            name: "Asha Sharma".to_string(),
            email: None,
            age: Some(34),
            gender: None,
            city: Some("Indore".to_string()),
            has_condition: false,
            condition: None,
            is_verified: true,
            admin: false,
        };
        let latest = BmiRecord {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            height: 160.0,
            weight: 45.0,
            bmi: 17.58,
            status: BmiCategory::Underweight,
            created_at: Utc::now(),
        };
        ReportAssembler::assemble(&profile, latest, specialist, Utc::now())
    }

    fn matched() -> SpecialistMatch {
        SpecialistMatch::Matched {
            query_term: "Underweight".to_string(),
            city: "Indore".to_string(),
            specialist: Specialist {
                id: 3,
                name: "Dr. Meera Joshi".to_string(),
                specialty: "Nutritionist".to_string(),
                specialist_type: "Underweight".to_string(),
                location: "Indore".to_string(),
                availability: "Mon-Fri 9:00 am - 12:00 pm".to_string(),
            },
        }
    }

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert_eq!(wrap_text("", 10), vec![String::new()]);
        assert_eq!(wrap_text("unbreakablewordthatislong", 5), vec!["unbreakablewordthatislong"]);
    }

    #[test]
    fn test_renders_pdf_bytes() {
        let bytes = render_pdf(&report(matched())).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_renders_fallback_without_specialist() {
        let miss = SpecialistMatch::NoMatch {
            query_term: "Underweight".to_string(),
            city: "Khargone".to_string(),
        };
        let bytes = render_pdf(&report(miss)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_content_breaks_pages() {
        let short = render_document(&report(matched())).unwrap();

        let mut long = report(matched());
        long.plan.schedule = (0..120)
            .map(|i| ScheduleItem {
                time: format!("{:02}:00", i % 24),
                activity: "Walk for twenty minutes and drink a glass of water afterwards".to_string(),
            })
            .collect();
        let long = render_document(&long).unwrap();

        assert!(long.page_count > short.page_count);
        assert!(long.page_count >= 3);
    }
}
